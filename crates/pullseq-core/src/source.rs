//! Leaf sequences: slice-backed values and generator functions.
//!
//! These are the producers tests and callers feed into the combinators.
//! Both are re-enumerable: every `open` starts over from the first element.

use std::sync::Arc;

use crate::error::Result;
use crate::sequence::{Cursor, Sequence};

/// Sequence backed by an immutable buffer of elements.
#[derive(Debug, Clone)]
pub struct Values<T> {
    items: Arc<[T]>,
}

/// Build a [`Values`] sequence from anything that converts into a vector.
pub fn values<T: Clone>(items: impl Into<Vec<T>>) -> Values<T> {
    Values {
        items: items.into().into(),
    }
}

impl<T: Clone> Sequence for Values<T> {
    type Item = T;
    type Cursor = ValuesCursor<T>;

    fn open(&self) -> Self::Cursor {
        ValuesCursor {
            items: Arc::clone(&self.items),
            pos: 0,
        }
    }
}

/// Cursor over a [`Values`] buffer.
#[derive(Debug)]
pub struct ValuesCursor<T> {
    items: Arc<[T]>,
    pos: usize,
}

impl<T: Clone> Cursor for ValuesCursor<T> {
    type Item = T;

    fn next(&mut self) -> Result<Option<T>> {
        let item = self.items.get(self.pos).cloned();
        if item.is_some() {
            self.pos += 1;
        }
        Ok(item)
    }
}

/// Generator sequence driven by a pure indexed function.
///
/// The function is called with 0, 1, 2, ... on successive pulls of one
/// cursor. `Ok(None)` ends that enumeration; `Err` faults it. Because the
/// function is cloned into each cursor, re-enumeration restarts at index 0.
#[derive(Debug, Clone)]
pub struct FromFn<F> {
    f: F,
}

/// Build a [`FromFn`] sequence.
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: Fn(u64) -> Result<Option<T>> + Clone,
{
    FromFn { f }
}

impl<T, F> Sequence for FromFn<F>
where
    F: Fn(u64) -> Result<Option<T>> + Clone,
{
    type Item = T;
    type Cursor = FromFnCursor<F>;

    fn open(&self) -> Self::Cursor {
        FromFnCursor {
            f: self.f.clone(),
            index: 0,
            done: false,
        }
    }
}

/// Cursor over a [`FromFn`] generator.
#[derive(Debug)]
pub struct FromFnCursor<F> {
    f: F,
    index: u64,
    done: bool,
}

impl<T, F> Cursor for FromFnCursor<F>
where
    F: Fn(u64) -> Result<Option<T>> + Clone,
{
    type Item = T;

    fn next(&mut self) -> Result<Option<T>> {
        if self.done {
            return Ok(None);
        }
        match (self.f)(self.index) {
            Ok(Some(item)) => {
                self.index += 1;
                Ok(Some(item))
            }
            Ok(None) => {
                self.done = true;
                Ok(None)
            }
            Err(e) => {
                self.done = true;
                Err(e)
            }
        }
    }
}
