#![forbid(unsafe_code)]
//! pullseq-operators: deferred combinators over the pull protocol.
//!
//! Design intent:
//! - Constructing a combinator does no enumeration. Lazy operators (`zip`)
//!   hand back a new `Sequence`; reductions (`aggregate`, `average`) pull to
//!   completion when called and return a value.
//! - The free functions are the checked surface: sequence and transform
//!   arguments arrive as `Option` and an absent one fails with
//!   `Error::ArgumentNull`, eagerly for reductions and on first pull for
//!   `zip`.
//! - `SequenceExt` layers the ergonomic method forms on top, where absence is
//!   unrepresentable.

pub mod aggregate;
pub mod average;
pub mod traits;
pub mod zip;

pub use aggregate::{aggregate, aggregate_project, aggregate_seeded};
pub use average::{average, average_by, average_by_nullable, average_nullable};
pub use traits::SequenceExt;
pub use zip::{zip, ZipCursor, Zipped};
