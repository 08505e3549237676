use tracing::trace;

use crate::{Cursor, Step};

#[derive(Debug)]
struct Lane<C> {
    cursor: C,
    share: usize,
}

/// Weighted round-robin over several cursors: up to `share` values from each
/// in turn. Exhausted cursors leave the rotation; the adapter is exhausted
/// once all of them are.
#[derive(Debug)]
pub struct Interleave<C> {
    lanes: Vec<Lane<C>>,
    // (lane index, values taken from it in the current turn)
    next_idx: (usize, usize),
}

impl<C: Cursor> Interleave<C> {
    /// A share of 0 counts as 1.
    pub fn new(cursors: Vec<(C, usize)>) -> Self {
        Self {
            lanes: cursors
                .into_iter()
                .map(|(cursor, share)| Lane {
                    cursor,
                    share: share.max(1),
                })
                .collect(),
            next_idx: (0, 0),
        }
    }

    fn next_lane(&mut self) {
        self.next_idx = ((self.next_idx.0 + 1) % self.lanes.len(), 0);
    }
}

impl<C: Cursor> Cursor for Interleave<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Step<C::Item> {
        while !self.lanes.is_empty() {
            let lane = &mut self.lanes[self.next_idx.0];
            match lane.cursor.advance() {
                Step::Value(elem) => {
                    self.next_idx.1 += 1;
                    if self.next_idx.1 >= lane.share {
                        self.next_lane();
                    }
                    return Step::Value(elem);
                }
                Step::Exhausted => {
                    self.lanes.remove(self.next_idx.0);
                    trace!(remaining = self.lanes.len(), "interleaved cursor exhausted");
                    self.next_idx.1 = 0;
                    if self.next_idx.0 == self.lanes.len() {
                        self.next_idx.0 = 0;
                    }
                }
            }
        }
        Step::Exhausted
    }
}
