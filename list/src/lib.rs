//! Mixed List
//!
//! An ordered, resizable list whose elements may each hold a different
//! kind of value (integers, floats, text, booleans, null, nested lists).
//!
//! The element and error types live in `mixed-core` and are re-exported
//! here, so most users only need this crate.

mod list;

pub use list::MixedList;
pub use mixed_core::*;

/// Helper macro to create a list from heterogeneous elements.
///
/// Each element is converted with `Value::from`.
#[macro_export]
macro_rules! mixed {
    () => {
        $crate::MixedList::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::MixedList::from(::std::vec![$($crate::Value::from($item)),+])
    };
}
