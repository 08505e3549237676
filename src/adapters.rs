use std::fmt;

use crate::{Cursor, Step};

#[derive(Clone)]
pub struct Map<C, F> {
    cursor: C,
    f: F,
}

impl<C, F> Map<C, F> {
    pub(crate) fn new(cursor: C, f: F) -> Self {
        Self { cursor, f }
    }
}

impl<B, C: Cursor, F: FnMut(C::Item) -> B> Cursor for Map<C, F> {
    type Item = B;

    fn advance(&mut self) -> Step<B> {
        self.cursor.advance().map(&mut self.f)
    }
}

impl<C: fmt::Debug, F> fmt::Debug for Map<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Map").field("cursor", &self.cursor).finish()
    }
}

#[derive(Clone)]
pub struct Filter<C, P> {
    cursor: C,
    predicate: P,
}

impl<C, P> Filter<C, P> {
    pub(crate) fn new(cursor: C, predicate: P) -> Self {
        Self { cursor, predicate }
    }
}

impl<C: Cursor, P: FnMut(&C::Item) -> bool> Cursor for Filter<C, P> {
    type Item = C::Item;

    fn advance(&mut self) -> Step<C::Item> {
        loop {
            let value = try_step!(self.cursor.advance());
            if (self.predicate)(&value) {
                return Step::Value(value);
            }
        }
    }
}

impl<C: fmt::Debug, P> fmt::Debug for Filter<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Filter").field("cursor", &self.cursor).finish()
    }
}

// Once `n` values are out the inner cursor is not advanced again.
#[derive(Debug, Clone)]
pub struct Take<C> {
    cursor: C,
    remaining: usize,
}

impl<C> Take<C> {
    pub(crate) fn new(cursor: C, n: usize) -> Self {
        Self {
            cursor,
            remaining: n,
        }
    }
}

impl<C: Cursor> Cursor for Take<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Step<C::Item> {
        if self.remaining == 0 {
            return Step::Exhausted;
        }
        let value = try_step!(self.cursor.advance());
        self.remaining -= 1;
        Step::Value(value)
    }
}
