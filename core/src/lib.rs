//! Mixed Core Types
//!
//! This crate provides the foundational types shared by the mixed list:
//! - Value types (the Value enum holding any supported element kind)
//! - Common error types

mod error;
mod value;

pub use error::*;
pub use value::*;
