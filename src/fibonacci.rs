use std::mem;

use num_bigint::BigUint;
use tracing::trace;

use crate::{Cursor, Step};

/// Unbounded Fibonacci producer.
///
/// Each advance replaces `(prev, curr)` with `(curr, prev + curr)` and
/// produces the new `prev`. From the conventional seed `(0, 1)` that is
/// `1, 1, 2, 3, 5, ...`. Never exhausts; bound it with [`Cursor::take`].
/// State is two `BigUint`s, so memory grows with the digits of the values
/// and nothing overflows.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    prev: BigUint,
    curr: BigUint,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self::seeded(0u8, 1u8)
    }

    /// Starts from an arbitrary `(prev, curr)` pair, e.g. `(2, 1)` for the
    /// Lucas numbers.
    pub fn seeded(prev: impl Into<BigUint>, curr: impl Into<BigUint>) -> Self {
        Self {
            prev: prev.into(),
            curr: curr.into(),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Cursor for Fibonacci {
    type Item = BigUint;

    fn advance(&mut self) -> Step<BigUint> {
        let next = &self.prev + &self.curr;
        self.prev = mem::replace(&mut self.curr, next);
        trace!(bits = self.curr.bits(), "fibonacci advanced");
        Step::Value(self.prev.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(values: &[u64]) -> Vec<BigUint> {
        values.iter().copied().map(BigUint::from).collect()
    }

    #[test]
    fn first_ten() {
        assert_eq!(
            Fibonacci::new().take(10).collect_vec(),
            big(&[1, 1, 2, 3, 5, 8, 13, 21, 34, 55])
        );
    }

    #[test]
    fn lucas_seed() {
        assert_eq!(
            Fibonacci::seeded(2u8, 1u8).take(8).collect_vec(),
            big(&[1, 3, 4, 7, 11, 18, 29, 47])
        );
    }

    #[test]
    fn thousandth_value() {
        let values = Fibonacci::new().take(1000).collect_vec();
        assert_eq!(values.len(), 1000);
        let expected: BigUint = "43466557686937456435688527675040625802564660517371780402481729089536555417949051890403879840079255169295922593080322634775209689623239873322471161642996440906533187938298969649928516003704476137795166849228875"
            .parse()
            .unwrap();
        assert_eq!(values[999], expected);
    }

    #[test]
    fn keeps_going_past_u128() {
        let mut fib = Fibonacci::new();
        for _ in 0..200 {
            assert!(!fib.advance().is_exhausted());
        }
        assert!(fib.advance().value().unwrap() > BigUint::from(u128::MAX));
    }
}
