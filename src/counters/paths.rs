// Copyright (C) 2025 The exact-count authors. See LICENSE for details.

//! Monotone lattice paths with diagonal steps.
//!
//! The number of paths from `(x, y)` to `(0, 0)` using steps `(-1, 0)`,
//! `(0, -1)` and `(-1, -1)`:
//!
//! ```text
//! P(0, y) = 1
//! P(x, 0) = 1
//! P(x, y) = P(x-1, y) + P(x, y-1) + P(x-1, y-1)
//! ```
//!
//! These are the Delannoy numbers. The naive recursion branches three ways
//! with depth `x + y`; memoized on `(x, y)` every state is computed once, for
//! `O(x·y)` time and space.

use crate::engine::{Recurrence, Subproblems};
use crate::memo::{GridMemo, MemoTable};
use crate::statistics::{Counters, Statistics};
use num_bigint::BigUint;
use num_traits::One;

#[derive(Debug, Default, Clone, Copy)]
pub struct LatticePathCounter;

impl Recurrence for LatticePathCounter {
    type State = (usize, usize);

    fn base_case(&self, (x, y): (usize, usize)) -> Option<BigUint> {
        (x == 0 || y == 0).then(BigUint::one)
    }

    fn subproblems(&self, (x, y): (usize, usize)) -> Subproblems<(usize, usize)> {
        [(x - 1, y), (x, y - 1), (x - 1, y - 1)].into_iter().collect()
    }

    fn combine(&self, _state: (usize, usize), parts: &[&BigUint]) -> BigUint {
        parts[0] + parts[1] + parts[2]
    }

    fn name(&self) -> &str {
        "LatticePaths"
    }
}

impl LatticePathCounter {
    /// Fill `memo` bottom-up, row by row, up to `target`, and return its count.
    ///
    /// Cells already present in `memo` are kept. Every cell depends only on
    /// cells to its left and below, which a row-major sweep has already
    /// visited.
    ///
    /// # Panics
    ///
    /// Panics if `memo` does not cover `target`.
    pub fn fill(
        &self,
        memo: &mut GridMemo,
        stats: &mut Statistics,
        target: (usize, usize),
    ) -> BigUint {
        assert!(
            memo.covers(target),
            "{}: memo table does not cover {:?}",
            self.name(),
            target
        );
        let (x, y) = target;

        for j in 0..=y {
            for i in 0..=x {
                let state = (i, j);
                if memo.get(state).is_some() {
                    stats.increment_counter(Counters::MemoHits);
                    continue;
                }
                let value = match self.base_case(state) {
                    Some(value) => {
                        stats.increment_counter(Counters::BaseCases);
                        value
                    }
                    None => {
                        let resolved: &GridMemo = memo;
                        let parts: Option<Subproblems<&BigUint>> = self
                            .subproblems(state)
                            .iter()
                            .map(|&sub| resolved.get(sub))
                            .collect();
                        let parts = parts.unwrap_or_else(|| {
                            panic!("{}: {:?} filled before its neighbours", self.name(), state)
                        });
                        stats.increment_counter(Counters::Evaluations);
                        self.combine(state, &parts)
                    }
                };
                memo.insert(state, value);
            }
        }

        memo.get(target).cloned().unwrap_or_else(|| {
            panic!("{}: {:?} unresolved after fill", self.name(), target)
        })
    }
}
