//! The pull protocol: re-enumerable sequences and single-pass cursors.
//!
//! A `Sequence` does no work until someone opens a cursor and pulls. Opening
//! twice gives two independent cursors over the same logical elements, so a
//! deferred operator can be evaluated repeatedly and each evaluation
//! recomputes from scratch.

use crate::error::Result;

/// Single-pass stateful cursor into a sequence.
///
/// Protocol per `next` call:
/// - `Ok(Some(item))`: positioned at the next element.
/// - `Ok(None)`: exhausted; the cursor should be discarded.
/// - `Err(e)`: faulted; the failure is exactly what the producer raised.
///
/// A cursor is owned by exactly one consumer and is never rewound. Whatever
/// resources it holds are released by `Drop`, on every exit path: exhaustion,
/// early abandonment, or failure.
pub trait Cursor {
    /// The type of elements this cursor yields.
    type Item;

    /// Advance to the next element.
    fn next(&mut self) -> Result<Option<Self::Item>>;
}

/// A capability that produces elements on demand.
///
/// `open` must be cheap and must not pull from any underlying producer; each
/// call mints a fresh cursor starting before the first element. Sequences are
/// not assumed finite.
pub trait Sequence {
    /// The type of elements this sequence produces.
    type Item;

    /// The cursor type `open` mints.
    type Cursor: Cursor<Item = Self::Item>;

    /// Begin a new, independent enumeration.
    fn open(&self) -> Self::Cursor;
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    type Cursor = S::Cursor;

    fn open(&self) -> Self::Cursor {
        (**self).open()
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;
    type Cursor = S::Cursor;

    fn open(&self) -> Self::Cursor {
        (**self).open()
    }
}

/// Drain one full enumeration of `source` into a vector.
///
/// Stops at the first failure and returns it; elements pulled before the
/// failure are dropped. Consumers that need to observe a partial prefix pull
/// the cursor themselves.
pub fn collect<S: Sequence>(source: &S) -> Result<Vec<S::Item>> {
    let mut cursor = source.open();
    let mut out = Vec::new();
    while let Some(item) = cursor.next()? {
        out.push(item);
    }
    Ok(out)
}
