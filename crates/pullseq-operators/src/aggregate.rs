//! Left fold over a sequence, in its three call shapes.
//!
//! All shapes fold strictly left-to-right in enumeration order. A failure
//! pulled from the source aborts the fold and propagates untouched; there is
//! no partial result.

use pullseq_core::error::{Error, Result};
use pullseq_core::sequence::{Cursor, Sequence};

const EMPTY_FOLD: &str = "cannot aggregate an empty sequence without a seed";

/// Unseeded fold: the first element seeds the accumulator.
///
/// Fails with `InvalidOperation` when the source is empty, and with
/// `ArgumentNull` (before any enumeration) when `source` or `combine` is
/// absent.
pub fn aggregate<S, F>(source: Option<&S>, combine: Option<F>) -> Result<S::Item>
where
    S: Sequence,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    let source = source.ok_or(Error::ArgumentNull("source"))?;
    let mut combine = combine.ok_or(Error::ArgumentNull("combine"))?;

    let mut cursor = source.open();
    let mut acc = cursor.next()?.ok_or(Error::InvalidOperation(EMPTY_FOLD))?;
    while let Some(item) = cursor.next()? {
        acc = combine(acc, item);
    }
    Ok(acc)
}

/// Seeded fold: returns `seed` unchanged when the source is empty.
///
/// The accumulator type is independent of the element type.
pub fn aggregate_seeded<S, A, F>(source: Option<&S>, seed: A, combine: Option<F>) -> Result<A>
where
    S: Sequence,
    F: FnMut(A, S::Item) -> A,
{
    let source = source.ok_or(Error::ArgumentNull("source"))?;
    let mut combine = combine.ok_or(Error::ArgumentNull("combine"))?;

    let mut cursor = source.open();
    let mut acc = seed;
    while let Some(item) = cursor.next()? {
        acc = combine(acc, item);
    }
    Ok(acc)
}

/// Seeded fold followed by a projection of the final accumulator.
///
/// The projection runs even for an empty source, so the seed itself is
/// projected through.
pub fn aggregate_project<S, A, F, G, R>(
    source: Option<&S>,
    seed: A,
    combine: Option<F>,
    project: Option<G>,
) -> Result<R>
where
    S: Sequence,
    F: FnMut(A, S::Item) -> A,
    G: FnOnce(A) -> R,
{
    let project = project.ok_or(Error::ArgumentNull("project"))?;
    let acc = aggregate_seeded(source, seed, combine)?;
    Ok(project(acc))
}
