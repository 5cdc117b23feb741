//! Arithmetic mean over any [`NumericKind`], plain and nullable.
//!
//! One accumulation loop serves every kind; the kind itself decides the
//! accumulator width, the quotient type, and whether summation is checked
//! (integers, decimal) or IEEE (floats, where NaN poisons the result and
//! that is an answer, not an error).
//!
//! Nullable variants skip absent elements entirely: they are neither counted
//! nor summed, and a source with no present value averages to `None`.

use pullseq_core::error::{Error, Result};
use pullseq_core::numeric::NumericKind;
use pullseq_core::sequence::{Cursor, Sequence};

const EMPTY_MEAN: &str = "cannot compute the average of an empty sequence";

/// Shared accumulation loop: pull values until the producer reports the end,
/// then divide. `Ok(None)` means no value was ever produced.
fn mean_of<K, P>(mut pull: P) -> Result<Option<K::Mean>>
where
    K: NumericKind,
    P: FnMut() -> Result<Option<K>>,
{
    let mut sum = K::zero();
    let mut count: u64 = 0;
    while let Some(value) = pull()? {
        sum = K::accumulate(sum, value)?;
        count += 1;
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(count, "mean accumulation complete");
    if count == 0 {
        Ok(None)
    } else {
        Ok(Some(K::mean(sum, count)))
    }
}

/// Average of a sequence of numeric values.
///
/// Fails with `InvalidOperation` when the source yields no elements.
pub fn average<S>(source: Option<&S>) -> Result<<S::Item as NumericKind>::Mean>
where
    S: Sequence,
    S::Item: NumericKind,
{
    let source = source.ok_or(Error::ArgumentNull("source"))?;
    let mut cursor = source.open();
    mean_of(|| cursor.next())?.ok_or(Error::InvalidOperation(EMPTY_MEAN))
}

/// Average of the present values in a sequence of nullable numerics.
///
/// An empty or all-absent source averages to `Ok(None)`; that is not an
/// error.
pub fn average_nullable<S, K>(source: Option<&S>) -> Result<Option<K::Mean>>
where
    S: Sequence<Item = Option<K>>,
    K: NumericKind,
{
    let source = source.ok_or(Error::ArgumentNull("source"))?;
    let mut cursor = source.open();
    mean_of(|| loop {
        match cursor.next()? {
            Some(Some(value)) => return Ok(Some(value)),
            Some(None) => continue,
            None => return Ok(None),
        }
    })
}

/// Average of a numeric projection of each element.
pub fn average_by<S, K, F>(source: Option<&S>, selector: Option<F>) -> Result<K::Mean>
where
    S: Sequence,
    K: NumericKind,
    F: FnMut(S::Item) -> K,
{
    let source = source.ok_or(Error::ArgumentNull("source"))?;
    let mut selector = selector.ok_or(Error::ArgumentNull("selector"))?;
    let mut cursor = source.open();
    mean_of(|| Ok(cursor.next()?.map(&mut selector)))?.ok_or(Error::InvalidOperation(EMPTY_MEAN))
}

/// Average of a nullable numeric projection of each element.
pub fn average_by_nullable<S, K, F>(
    source: Option<&S>,
    selector: Option<F>,
) -> Result<Option<K::Mean>>
where
    S: Sequence,
    K: NumericKind,
    F: FnMut(S::Item) -> Option<K>,
{
    let source = source.ok_or(Error::ArgumentNull("source"))?;
    let mut selector = selector.ok_or(Error::ArgumentNull("selector"))?;
    let mut cursor = source.open();
    mean_of(|| loop {
        match cursor.next()? {
            Some(item) => {
                if let Some(value) = selector(item) {
                    return Ok(Some(value));
                }
            }
            None => return Ok(None),
        }
    })
}
