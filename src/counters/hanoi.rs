// Copyright (C) 2025 The exact-count authors. See LICENSE for details.

//! Tower of Hanoi move counts.
//!
//! Moving `n` disks means moving `n - 1` disks to the helper peg, moving the
//! largest disk, then moving the `n - 1` disks from the helper onto it:
//!
//! ```text
//! M(0) = 0
//! M(n) = M(n-1) + 1 + M(n-1)
//! ```
//!
//! Peg identities do not affect the count and are not modelled. Both halves
//! are the same state, so memoization makes this linear in `n`.

use crate::engine::{Recurrence, Subproblems};
use num_bigint::BigUint;
use num_traits::{One, Zero};

#[derive(Debug, Default, Clone, Copy)]
pub struct HanoiMoveCounter;

impl Recurrence for HanoiMoveCounter {
    type State = usize;

    fn base_case(&self, n: usize) -> Option<BigUint> {
        (n == 0).then(BigUint::zero)
    }

    /// Disks moved onto the helper peg, then off it again.
    fn subproblems(&self, n: usize) -> Subproblems<usize> {
        [n - 1, n - 1].into_iter().collect()
    }

    fn combine(&self, _n: usize, parts: &[&BigUint]) -> BigUint {
        parts[0] + BigUint::one() + parts[1]
    }

    fn name(&self) -> &str {
        "HanoiMoves"
    }
}

impl HanoiMoveCounter {
    /// `2^n - 1`, the known closed form of the recurrence.
    pub fn closed_form(n: usize) -> BigUint {
        (BigUint::one() << n) - BigUint::one()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Evaluator;
    use crate::memo::LinearMemo;
    use crate::statistics::{Counters, Statistics};

    fn moves(n: usize) -> (BigUint, Statistics) {
        let mut memo = LinearMemo::with_bound(n).unwrap();
        let mut stats = Statistics::new();
        let value = Evaluator::new(HanoiMoveCounter).evaluate(&mut memo, &mut stats, n);
        (value, stats)
    }

    #[test]
    fn test_no_disks_no_moves() {
        assert_eq!(moves(0).0, BigUint::zero());
    }

    #[test]
    fn test_small_values() {
        let expected = [0u32, 1, 3, 7, 15, 31];
        for (n, &m) in expected.iter().enumerate() {
            assert_eq!(moves(n).0, BigUint::from(m));
        }
        assert_eq!(moves(10).0, BigUint::from(1023u32));
    }

    #[test]
    fn test_one_evaluation_per_disk() {
        let (_, stats) = moves(64);
        assert_eq!(stats.get(Counters::Evaluations), 64);
        assert_eq!(stats.get(Counters::BaseCases), 1);
    }

    #[test]
    fn test_closed_form() {
        assert_eq!(HanoiMoveCounter::closed_form(0), BigUint::zero());
        assert_eq!(HanoiMoveCounter::closed_form(10), BigUint::from(1023u32));
        assert_eq!(
            HanoiMoveCounter::closed_form(64),
            BigUint::from(u64::MAX)
        );
    }

    #[test]
    fn test_beyond_u64() {
        let (value, _) = moves(200);
        assert_eq!(value, HanoiMoveCounter::closed_form(200));
        assert!(value > BigUint::from(u128::MAX));
    }
}
