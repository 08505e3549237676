//! Lazy sequence protocol.
//!
//! A [`Source`] hands out independent [`Cursor`]s. A cursor produces one
//! value per [`Cursor::advance`] and then reports [`Step::Exhausted`] forever
//! after. Adapters ([`adapters`], [`Interleave`], [`Flatten`]) own an inner
//! cursor and expose the same contract, so they chain freely.
//!
//! ```
//! use lazyseq::{Cursor, Fibonacci};
//!
//! let first = Fibonacci::new().take(10).map(|x| x.to_string()).collect_vec();
//! assert_eq!(first, ["1", "1", "2", "3", "5", "8", "13", "21", "34", "55"]);
//! ```

#![warn(missing_debug_implementations)]

/// Unwraps a `Step::Value` or returns `Step::Exhausted` from the enclosing
/// `advance`.
macro_rules! try_step {
    ($step:expr) => {
        match $step {
            $crate::Step::Value(value) => value,
            $crate::Step::Exhausted => return $crate::Step::Exhausted,
        }
    };
}

pub mod adapters;
pub mod cursor;
pub mod error;
pub mod fibonacci;
pub mod flatten;
pub mod interleave;
pub mod lazy_sequence;
pub mod step;
pub mod value;

pub use cursor::{from_fn, from_iter, Cursor, FromFn, Iter, IterCursor, Source};
pub use error::ClassificationError;
pub use fibonacci::Fibonacci;
pub use flatten::{flatten_values, Classify, Flatten, Shape, ValueClassifier};
pub use interleave::Interleave;
pub use lazy_sequence::{countdown, LazySequence, LazySequenceCursor};
pub use step::Step;
pub use value::Value;
