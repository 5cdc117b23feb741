//! Method-form surface for the combinators.
//!
//! These defaults delegate to the free functions with every argument
//! present, so `ArgumentNull` is unreachable from here; the `Option`-taking
//! functions remain available for callers assembling operators dynamically.

use pullseq_core::error::Result;
use pullseq_core::numeric::NumericKind;
use pullseq_core::sequence::Sequence;

use crate::aggregate::{aggregate, aggregate_project, aggregate_seeded};
use crate::average::{average, average_by, average_by_nullable, average_nullable};
use crate::zip::{zip, Zipped};

/// Combinator methods available on every sequence.
pub trait SequenceExt: Sequence {
    /// Unseeded left fold; see [`aggregate`].
    fn aggregate<F>(&self, combine: F) -> Result<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        aggregate(Some(self), Some(combine))
    }

    /// Seeded left fold; see [`aggregate_seeded`].
    fn aggregate_seeded<A, F>(&self, seed: A, combine: F) -> Result<A>
    where
        Self: Sized,
        F: FnMut(A, Self::Item) -> A,
    {
        aggregate_seeded(Some(self), seed, Some(combine))
    }

    /// Seeded left fold with a final projection; see [`aggregate_project`].
    fn aggregate_project<A, F, G, R>(&self, seed: A, combine: F, project: G) -> Result<R>
    where
        Self: Sized,
        F: FnMut(A, Self::Item) -> A,
        G: FnOnce(A) -> R,
    {
        aggregate_project(Some(self), seed, Some(combine), Some(project))
    }

    /// Arithmetic mean of the elements; see [`average`].
    fn average(&self) -> Result<<Self::Item as NumericKind>::Mean>
    where
        Self: Sized,
        Self::Item: NumericKind,
    {
        average(Some(self))
    }

    /// Arithmetic mean of the present elements; see [`average_nullable`].
    fn average_nullable<K>(&self) -> Result<Option<K::Mean>>
    where
        Self: Sequence<Item = Option<K>> + Sized,
        K: NumericKind,
    {
        average_nullable(Some(self))
    }

    /// Arithmetic mean of a projection; see [`average_by`].
    fn average_by<K, F>(&self, selector: F) -> Result<K::Mean>
    where
        Self: Sized,
        K: NumericKind,
        F: FnMut(Self::Item) -> K,
    {
        average_by(Some(self), Some(selector))
    }

    /// Arithmetic mean of a nullable projection; see [`average_by_nullable`].
    fn average_by_nullable<K, F>(&self, selector: F) -> Result<Option<K::Mean>>
    where
        Self: Sized,
        K: NumericKind,
        F: FnMut(Self::Item) -> Option<K>,
    {
        average_by_nullable(Some(self), Some(selector))
    }

    /// Pairwise combination with another sequence; see [`zip`].
    fn zip<B, F, C>(self, second: B, combine: F) -> Zipped<Self, B, F>
    where
        Self: Sized,
        B: Sequence,
        F: FnMut(Self::Item, B::Item) -> C + Clone,
    {
        zip(Some(self), Some(second), Some(combine))
    }
}

impl<S: Sequence> SequenceExt for S {}
