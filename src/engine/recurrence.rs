// Copyright (C) 2025 The exact-count authors. See LICENSE for details.

//! Recurrence trait for memoized evaluation.
//!
//! A recurrence describes a value over a discrete state space: some states are
//! answered directly by a base case, every other state is the combination of
//! at most [`MAX_SUBPROBLEMS`] strictly smaller states.
//!
//! # Example
//!
//! ```
//! use exact_count::engine::{Evaluator, Recurrence, Subproblems};
//! use exact_count::memo::LinearMemo;
//! use exact_count::statistics::Statistics;
//! use num_bigint::BigUint;
//!
//! /// Fibonacci numbers, F(0) = 0, F(1) = 1.
//! #[derive(Debug)]
//! struct Fibonacci;
//!
//! impl Recurrence for Fibonacci {
//!     type State = usize;
//!
//!     fn base_case(&self, n: usize) -> Option<BigUint> {
//!         (n < 2).then(|| BigUint::from(n))
//!     }
//!
//!     fn subproblems(&self, n: usize) -> Subproblems<usize> {
//!         [n - 1, n - 2].into_iter().collect()
//!     }
//!
//!     fn combine(&self, _n: usize, parts: &[&BigUint]) -> BigUint {
//!         parts[0] + parts[1]
//!     }
//! }
//!
//! let mut memo = LinearMemo::with_bound(100).unwrap();
//! let mut stats = Statistics::new();
//! let mut evaluator = Evaluator::new(Fibonacci);
//! let value = evaluator.evaluate(&mut memo, &mut stats, 100);
//! assert_eq!(value.to_string(), "354224848179261915075");
//! ```

use arrayvec::ArrayVec;
use num_bigint::BigUint;
use std::fmt::Debug;

/// Largest number of subproblems a single state may depend on.
pub const MAX_SUBPROBLEMS: usize = 3;

/// The states a non-base state depends on, in the order `combine` receives them.
pub type Subproblems<S> = ArrayVec<S, MAX_SUBPROBLEMS>;

/// Trait for recurrences evaluated by the [`Evaluator`](super::Evaluator).
///
/// # Contract
///
/// - `base_case` is consulted first; `subproblems` and `combine` are only
///   called for states where it returns `None`.
/// - Every subproblem must be strictly smaller than its parent in some
///   well-founded order, so that evaluation terminates.
/// - `subproblems` must be deterministic: the engine calls it once to expand
///   a state and again to combine it.
pub trait Recurrence: Debug {
    /// A point in the state space (also the memo key).
    type State: Copy + Debug;

    /// Value of `state` if it is a base case.
    fn base_case(&self, state: Self::State) -> Option<BigUint>;

    /// States that `state` depends on.
    fn subproblems(&self, state: Self::State) -> Subproblems<Self::State>;

    /// Combine the values of the subproblems of `state`.
    ///
    /// `parts[i]` is the value of the `i`th state returned by `subproblems`.
    fn combine(&self, state: Self::State, parts: &[&BigUint]) -> BigUint;

    /// Optional: Get a name for this recurrence (for logging).
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
