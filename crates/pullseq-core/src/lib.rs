#![forbid(unsafe_code)]
//! pullseq-core: the sequence/cursor protocol and numeric accumulation kinds.
//!
//! Design intent:
//! - A `Sequence` is a pure capability: it can mint fresh single-pass cursors,
//!   any number of times. Nothing in this crate materializes or caches.
//! - Failures travel through cursors as values (`Result`), so a producer
//!   error reaches the consumer exactly as produced.
//! - Combinators live in `pullseq-operators`; this crate only defines the
//!   contract they build on.

pub mod error;
pub mod numeric;
pub mod prelude;
pub mod sequence;
pub mod source;

pub use error::{Error, Result};
pub use numeric::NumericKind;
pub use sequence::{collect, Cursor, Sequence};
pub use source::{from_fn, values, FromFn, Values};
