//! Convenient re-exports for downstream crates.

pub use crate::error::{Error, Result};
pub use crate::numeric::NumericKind;
pub use crate::sequence::{collect, Cursor, Sequence};
pub use crate::source::{from_fn, values, FromFn, Values};
