// Copyright (C) 2025 The exact-count authors. See LICENSE for details.

//! Memo tables holding exact results keyed by recurrence state.
//!
//! - [`GridMemo`]: dense two-dimensional table keyed by `(x, y)`
//! - [`LinearMemo`]: dense one-dimensional table keyed by `n`
//!
//! Both tables are sized up front for the largest state a top-level call can
//! reach. Allocation goes through `try_reserve_exact`, so running out of memory
//! surfaces as [`CountError::ResourceExhausted`] rather than an abort.

pub mod grid;
pub mod linear;

pub use grid::GridMemo;
pub use linear::LinearMemo;

use crate::error::CountError;
use num_bigint::BigUint;

/// Storage for resolved states.
pub trait MemoTable<S> {
    /// Look up the result for `state`, if it has been resolved.
    fn get(&self, state: S) -> Option<&BigUint>;

    /// Record the result for `state`.
    ///
    /// # Panics
    ///
    /// Panics if `state` lies outside the table.
    fn insert(&mut self, state: S, value: BigUint);

    /// Whether `state` fits in the table.
    fn covers(&self, state: S) -> bool;

    /// Number of resolved entries.
    fn resolved(&self) -> usize;
}

/// Allocate `len` empty cells, reporting allocation failure as an error.
pub(crate) fn empty_cells(
    resource: &'static str,
    len: usize,
) -> Result<Vec<Option<BigUint>>, CountError> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|e| CountError::ResourceExhausted {
            resource,
            requested: len as u128,
            reason: e.to_string(),
        })?;
    cells.resize(len, None);
    Ok(cells)
}
