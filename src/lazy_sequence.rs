use std::rc::Rc;

use tracing::debug;

use crate::{Cursor, Source, Step, Value};

/// A [`Source`], not a [`Cursor`]: every walk starts at position 0.
#[derive(Debug, Clone)]
pub struct LazySequence<T> {
    items: Rc<[T]>,
}

#[derive(Debug, Clone)]
pub struct LazySequenceCursor<T> {
    seq: Rc<[T]>,
    next_idx: usize,
}

impl<T> LazySequence<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> From<Vec<T>> for LazySequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for LazySequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Clone> Source for LazySequence<T> {
    type Item = T;
    type Cursor = LazySequenceCursor<T>;

    fn cursor(&self) -> LazySequenceCursor<T> {
        LazySequenceCursor {
            seq: self.items.clone(),
            next_idx: 0,
        }
    }
}

impl<T: Clone> Cursor for LazySequenceCursor<T> {
    type Item = T;

    fn advance(&mut self) -> Step<T> {
        match self.seq.get(self.next_idx) {
            Some(item) => {
                self.next_idx += 1;
                Step::Value(item.clone())
            }
            None => Step::Exhausted,
        }
    }
}

pub const LIFTOFF: &str = "liftoff";

/// `from, from - 1, ..., 1` followed by the text marker `"liftoff"`.
///
/// The marker is an ordinary value; exhaustion comes after it. All `from`
/// values are allocated up front.
pub fn countdown(from: i64) -> LazySequence<Value> {
    debug!(from, "building countdown");
    (1..=from)
        .rev()
        .map(Value::Int)
        .chain(std::iter::once(Value::from(LIFTOFF)))
        .collect()
}
