//! Ordered list storage for mixed-type values.

use mixed_core::{ListError, ListResult, Value};
use std::fmt;
use std::ops::Index;
use tracing::{debug, trace};

/// An ordered, growable list whose elements may each be of a different type.
///
/// Indices are 0-based. Operations that take an index accept `isize` so
/// negative positions can be passed and rejected with
/// [`ListError::IndexOutOfBounds`]. Every failing operation validates
/// before touching storage, so an error never leaves the list half-mutated.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MixedList {
    items: Vec<Value>,
}

impl MixedList {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    // ==================== Queries ====================

    /// Returns true if some element equals `item`.
    pub fn has(&self, item: &Value) -> bool {
        self.items.iter().any(|itm| itm == item)
    }

    /// Index of the first element equal to `item`.
    pub fn index_of(&self, item: &Value) -> ListResult<usize> {
        match self.items.iter().position(|itm| itm == item) {
            Some(index) => Ok(index),
            None => {
                debug!(value = %item, len = self.items.len(), "value not in list");
                Err(ListError::NotFound(item.clone()))
            }
        }
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&Value> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&Value> {
        self.items.last()
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// Consume the list, returning its backing vector.
    pub fn into_inner(self) -> Vec<Value> {
        self.items
    }

    // ==================== Mutations ====================

    /// Add `item` as the new last element.
    pub fn append(&mut self, item: impl Into<Value>) {
        self.items.push(item.into());
    }

    /// Append every element of `other`, keeping its order.
    pub fn extend(&mut self, other: &MixedList) {
        trace!(added = other.items.len(), len = self.items.len(), "extend");
        self.items.extend_from_slice(&other.items);
    }

    /// Insert `item` so it ends up at `index`, shifting later elements back.
    ///
    /// `index` may equal the current length, which appends.
    pub fn insert(&mut self, index: isize, item: impl Into<Value>) -> ListResult<()> {
        let len = self.items.len();
        let pos = self.checked_index(index, len + 1)?;
        trace!(index = pos, len, "insert");
        self.items.insert(pos, item.into());
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements forward.
    pub fn pop(&mut self, index: isize) -> ListResult<Value> {
        let pos = self.checked_index(index, self.items.len())?;
        trace!(index = pos, len = self.items.len(), "pop");
        Ok(self.items.remove(pos))
    }

    /// Remove all elements.
    pub fn clear(&mut self) {
        trace!(len = self.items.len(), "clear");
        self.items.clear();
    }

    /// Reverse the element order in place.
    pub fn reverse(&mut self) {
        trace!(len = self.items.len(), "reverse");
        self.items.reverse();
    }

    /// Return an independent list holding the same elements.
    pub fn copy(&self) -> MixedList {
        self.clone()
    }

    // ==================== Comparison ====================

    /// Returns true if both lists hold equal elements in the same order.
    pub fn equals(&self, other: &MixedList) -> bool {
        self.items.len() == other.items.len()
            && self.items.iter().zip(&other.items).all(|(a, b)| a == b)
    }

    /// Like [`equals`](Self::equals), but positions where both elements are
    /// strings compare lowercased.
    pub fn equals_ignore_case(&self, other: &MixedList) -> bool {
        self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .zip(&other.items)
                .all(|(a, b)| a.eq_ignore_case(b))
    }

    /// Convert `index` to a position, requiring it to lie in `[0, bound)`.
    fn checked_index(&self, index: isize, bound: usize) -> ListResult<usize> {
        match usize::try_from(index) {
            Ok(pos) if pos < bound => Ok(pos),
            _ => {
                let len = self.items.len();
                debug!(index, len, "index out of bounds");
                Err(ListError::IndexOutOfBounds { index, len })
            }
        }
    }
}

impl fmt::Display for MixedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl Index<usize> for MixedList {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.items[index]
    }
}

impl From<Vec<Value>> for MixedList {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl From<MixedList> for Value {
    fn from(list: MixedList) -> Self {
        Value::List(list.items)
    }
}

impl FromIterator<Value> for MixedList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Value> for MixedList {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for MixedList {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a MixedList {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
