#![forbid(unsafe_code)]
//! pullseq: deferred-execution sequence combinators.
//!
//! Facade crate re-exporting the workspace surface. See `pullseq-core` for
//! the pull protocol and `pullseq-operators` for the combinators.

pub use pullseq_core::error::{Error, Result};
pub use pullseq_core::numeric::NumericKind;
pub use pullseq_core::sequence::{collect, Cursor, Sequence};
pub use pullseq_core::source::{from_fn, values, FromFn, Values};

pub use pullseq_operators::{
    aggregate, aggregate_project, aggregate_seeded, average, average_by, average_by_nullable,
    average_nullable, zip, SequenceExt, ZipCursor, Zipped,
};
