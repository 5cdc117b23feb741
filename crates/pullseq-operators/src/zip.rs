//! Pairwise combination of two sequences, stopping at the shorter.
//!
//! `zip` is fully deferred: construction touches neither input. Each `open`
//! of the resulting sequence opens one fresh cursor per input and owns both;
//! they are dropped together when the paired enumeration ends, whether by
//! exhaustion, failure, or the consumer walking away.

use pullseq_core::error::{Error, Result};
use pullseq_core::sequence::{Cursor, Sequence};

/// Build the lazy paired sequence `combine(first[i], second[i])`.
///
/// The output length is the minimum of the two input lengths. An absent
/// argument surfaces as `ArgumentNull` on the first pull of any cursor,
/// never during construction.
pub fn zip<A, B, F, C>(first: Option<A>, second: Option<B>, combine: Option<F>) -> Zipped<A, B, F>
where
    A: Sequence,
    B: Sequence,
    F: FnMut(A::Item, B::Item) -> C + Clone,
{
    Zipped {
        first,
        second,
        combine,
    }
}

/// Deferred pairwise combination of two sequences.
///
/// Re-enumerable like any other sequence: each `open` re-opens both inputs
/// and clones the combine function, so concurrent enumerations do not share
/// state.
#[derive(Debug, Clone)]
pub struct Zipped<A, B, F> {
    first: Option<A>,
    second: Option<B>,
    combine: Option<F>,
}

impl<A, B, F, C> Sequence for Zipped<A, B, F>
where
    A: Sequence,
    B: Sequence,
    F: FnMut(A::Item, B::Item) -> C + Clone,
{
    type Item = C;
    type Cursor = ZipCursor<A::Cursor, B::Cursor, F>;

    fn open(&self) -> Self::Cursor {
        match (&self.first, &self.second, &self.combine) {
            (Some(first), Some(second), Some(combine)) => ZipCursor::Running {
                first: first.open(),
                second: second.open(),
                combine: combine.clone(),
            },
            (None, _, _) => ZipCursor::Missing("first"),
            (_, None, _) => ZipCursor::Missing("second"),
            (_, _, None) => ZipCursor::Missing("combine"),
        }
    }
}

/// Cursor states for one paired enumeration.
#[derive(Debug)]
pub enum ZipCursor<CA, CB, F> {
    /// A required argument was absent; every pull reports `ArgumentNull`.
    Missing(&'static str),
    /// Both input cursors are live.
    Running { first: CA, second: CB, combine: F },
    /// Finished: input cursors already dropped.
    Done,
}

impl<CA, CB, F, C> Cursor for ZipCursor<CA, CB, F>
where
    CA: Cursor,
    CB: Cursor,
    F: FnMut(CA::Item, CB::Item) -> C,
{
    type Item = C;

    fn next(&mut self) -> Result<Option<C>> {
        match std::mem::replace(self, ZipCursor::Done) {
            ZipCursor::Missing(name) => {
                *self = ZipCursor::Missing(name);
                Err(Error::ArgumentNull(name))
            }
            ZipCursor::Done => Ok(None),
            ZipCursor::Running {
                mut first,
                mut second,
                mut combine,
            } => match step(&mut first, &mut second, &mut combine) {
                Ok(Some(item)) => {
                    *self = ZipCursor::Running {
                        first,
                        second,
                        combine,
                    };
                    Ok(Some(item))
                }
                // Exhaustion and failure both retire the input cursors now,
                // not when the consumer gets around to dropping us: the
                // state stays `Done` and both cursors drop here.
                Ok(None) => Ok(None),
                Err(e) => Err(e),
            },
        }
    }
}

/// Advance both inputs in lockstep; the shorter input ends the enumeration.
fn step<CA, CB, F, C>(first: &mut CA, second: &mut CB, combine: &mut F) -> Result<Option<C>>
where
    CA: Cursor,
    CB: Cursor,
    F: FnMut(CA::Item, CB::Item) -> C,
{
    let Some(a) = first.next()? else {
        return Ok(None);
    };
    let Some(b) = second.next()? else {
        return Ok(None);
    };
    Ok(Some(combine(a, b)))
}
