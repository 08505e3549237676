use std::{fmt, iter::FusedIterator};

use crate::{
    adapters::{Filter, Map, Take},
    flatten::{Classify, Flatten},
    Step,
};

/// A stateful position in a sequence.
///
/// `advance` produces the next value or [`Step::Exhausted`]. Exhausted is
/// terminal: every later call must return it again.
pub trait Cursor {
    type Item;

    fn advance(&mut self) -> Step<Self::Item>;

    /// A cursor is a cursor over itself.
    fn as_cursor(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    fn iter(self) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter { cursor: self }
    }

    fn collect_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.iter().collect()
    }

    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, f)
    }

    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    fn flatten_with<K>(self, classifier: K) -> Flatten<Self, K>
    where
        Self: Sized,
        K: Classify<Self::Item>,
    {
        Flatten::new(self, classifier)
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        (**self).advance()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        (**self).advance()
    }
}

/// Something that can hand out fresh cursors without changing itself.
pub trait Source {
    type Item;
    type Cursor: Cursor<Item = Self::Item>;

    fn cursor(&self) -> Self::Cursor;
}

impl<'a, T: Clone> Source for &'a [T] {
    type Item = T;
    type Cursor = IterCursor<std::iter::Cloned<std::slice::Iter<'a, T>>>;

    fn cursor(&self) -> Self::Cursor {
        let items: &'a [T] = *self;
        from_iter(items.iter().cloned())
    }
}

impl<'a> Source for &'a str {
    type Item = char;
    type Cursor = IterCursor<std::str::Chars<'a>>;

    fn cursor(&self) -> Self::Cursor {
        let text: &'a str = *self;
        from_iter(text.chars())
    }
}

#[derive(Debug, Clone)]
pub struct Iter<C> {
    cursor: C,
}

impl<C> Iter<C> {
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.advance().into()
    }
}

impl<C: Cursor> FusedIterator for Iter<C> {}

#[derive(Debug, Clone)]
pub struct IterCursor<I> {
    iter: std::iter::Fuse<I>,
}

/// Wraps any iterator. The wrapper is fused, so the terminal state holds
/// even when the iterator would resume after `None`.
pub fn from_iter<I: IntoIterator>(iter: I) -> IterCursor<I::IntoIter> {
    IterCursor {
        iter: iter.into_iter().fuse(),
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        self.iter.next().into()
    }
}

#[derive(Clone)]
pub struct FromFn<F> {
    generator: Option<F>,
}

/// Builds a cursor from a closure. After the closure first returns
/// [`Step::Exhausted`] it is dropped and never called again.
pub fn from_fn<T, F: FnMut() -> Step<T>>(generator: F) -> FromFn<F> {
    FromFn {
        generator: Some(generator),
    }
}

impl<T, F: FnMut() -> Step<T>> Cursor for FromFn<F> {
    type Item = T;

    fn advance(&mut self) -> Step<T> {
        let generator = match self.generator.as_mut() {
            Some(generator) => generator,
            None => return Step::Exhausted,
        };
        match generator() {
            Step::Value(value) => Step::Value(value),
            Step::Exhausted => {
                self.generator = None;
                Step::Exhausted
            }
        }
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FromFn")
            .field("exhausted", &self.generator.is_none())
            .finish()
    }
}
