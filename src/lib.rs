// Copyright (C) 2025 The exact-count authors. See LICENSE for details.

//! Exact lattice path and Tower of Hanoi move counts.
//!
//! Two independent counts, both exact over unbounded integers:
//!
//! - **Lattice paths**: the number of monotone paths from `(x, y)` to the
//!   origin using steps `(-1, 0)`, `(0, -1)` and `(-1, -1)`
//! - **Hanoi moves**: the number of single-disk moves the classical recursive
//!   three-peg strategy makes for `n` disks
//!
//! # Architecture
//!
//! Both counts are recurrences evaluated by one engine:
//!
//! ## Memo tables
//!
//! Dense tables of `BigUint` keyed by recurrence state, sized up front and
//! allocated fallibly:
//! - `GridMemo` - `(x, y)` states for lattice paths
//! - `LinearMemo` - `n` states for Hanoi moves
//!
//! ## Engine
//!
//! The `Evaluator` resolves a state with an explicit work stack rather than
//! native recursion. Each distinct state is combined exactly once, so path
//! counting is `O(x·y)` and move counting is `O(n)`.
//!
//! ## Context
//!
//! `CountContext` validates arguments, sizes tables within its `Limits`, and
//! keeps tables and statistics between calls.
//!
//! # Example
//!
//! ```
//! assert_eq!(exact_count::count_paths(7, 7).unwrap().to_string(), "48639");
//! assert_eq!(exact_count::count_moves(10).unwrap().to_string(), "1023");
//! ```

pub mod config;
pub mod context;
pub mod counters;
pub mod driver;
pub mod engine;
pub mod error;
pub mod memo;
pub mod statistics;

// Re-export commonly used types
pub use config::{Limits, Strategy};
pub use context::CountContext;
pub use counters::{HanoiMoveCounter, LatticePathCounter};
pub use engine::{Evaluator, Recurrence};
pub use error::CountError;

use num_bigint::BigUint;

/// Number of monotone lattice paths from `(x, y)` to the origin.
///
/// Uses a fresh [`CountContext`]; reuse a context to keep its memo table
/// across calls.
pub fn count_paths(x: i64, y: i64) -> Result<BigUint, CountError> {
    CountContext::new().count_paths(x, y)
}

/// Number of moves that solve a Tower of Hanoi puzzle of `n` disks.
pub fn count_moves(n: i64) -> Result<BigUint, CountError> {
    CountContext::new().count_moves(n)
}
