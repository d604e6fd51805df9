// Copyright (C) 2025 The exact-count authors. See LICENSE for details.

//! Dense `(x, y)` memo table for lattice path counts.

use super::{empty_cells, MemoTable};
use crate::error::CountError;
use num_bigint::BigUint;

/// Row-major table covering every state `(i, j)` with `i <= max_x`, `j <= max_y`.
#[derive(Debug, Clone)]
pub struct GridMemo {
    width: usize,
    height: usize,
    cells: Vec<Option<BigUint>>,
    resolved: usize,
}

impl GridMemo {
    /// Number of cells needed to cover `(max_x, max_y)`.
    ///
    /// Returned as `u128` so the product of two `usize` bounds cannot overflow.
    pub fn cells_for(max_x: usize, max_y: usize) -> u128 {
        (max_x as u128 + 1) * (max_y as u128 + 1)
    }

    /// Allocate a table covering `(0, 0)..=(max_x, max_y)`.
    pub fn with_bounds(max_x: usize, max_y: usize) -> Result<Self, CountError> {
        let requested = Self::cells_for(max_x, max_y);
        let len = usize::try_from(requested).map_err(|_| CountError::ResourceExhausted {
            resource: "grid cells",
            requested,
            reason: String::from("exceeds the address space"),
        })?;
        let width = max_x + 1;
        let height = max_y + 1;
        Ok(Self {
            width,
            height,
            cells: empty_cells("grid cells", len)?,
            resolved: 0,
        })
    }

    /// Largest `(x, y)` this table can hold.
    pub fn bounds(&self) -> (usize, usize) {
        (self.width - 1, self.height - 1)
    }

    fn index(&self, (x, y): (usize, usize)) -> usize {
        y * self.width + x
    }
}

impl MemoTable<(usize, usize)> for GridMemo {
    fn get(&self, state: (usize, usize)) -> Option<&BigUint> {
        if !self.covers(state) {
            return None;
        }
        self.cells[self.index(state)].as_ref()
    }

    fn insert(&mut self, state: (usize, usize), value: BigUint) {
        assert!(
            self.covers(state),
            "State {:?} outside grid bounds {:?}",
            state,
            self.bounds()
        );
        let index = self.index(state);
        if self.cells[index].replace(value).is_none() {
            self.resolved += 1;
        }
    }

    fn covers(&self, (x, y): (usize, usize)) -> bool {
        x < self.width && y < self.height
    }

    fn resolved(&self) -> usize {
        self.resolved
    }
}
