// Copyright (C) 2025 The exact-count authors. See LICENSE for details.

//! Dense `n` memo table for Hanoi move counts.

use super::{empty_cells, MemoTable};
use crate::error::CountError;
use num_bigint::BigUint;

/// Table covering every state `0..=max_n`.
#[derive(Debug, Clone)]
pub struct LinearMemo {
    cells: Vec<Option<BigUint>>,
    resolved: usize,
}

impl LinearMemo {
    /// Allocate a table covering `0..=max_n`.
    pub fn with_bound(max_n: usize) -> Result<Self, CountError> {
        let len = max_n
            .checked_add(1)
            .ok_or_else(|| CountError::ResourceExhausted {
                resource: "disk cells",
                requested: max_n as u128 + 1,
                reason: String::from("exceeds the address space"),
            })?;
        Ok(Self {
            cells: empty_cells("disk cells", len)?,
            resolved: 0,
        })
    }

    /// Largest `n` this table can hold.
    pub fn bound(&self) -> usize {
        self.cells.len() - 1
    }
}

impl MemoTable<usize> for LinearMemo {
    fn get(&self, n: usize) -> Option<&BigUint> {
        self.cells.get(n).and_then(Option::as_ref)
    }

    fn insert(&mut self, n: usize, value: BigUint) {
        assert!(
            self.covers(n),
            "Disk count {} outside table bound {}",
            n,
            self.bound()
        );
        if self.cells[n].replace(value).is_none() {
            self.resolved += 1;
        }
    }

    fn covers(&self, n: usize) -> bool {
        n < self.cells.len()
    }

    fn resolved(&self) -> usize {
        self.resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_memo() {
        let mut memo = LinearMemo::with_bound(4).unwrap();
        assert_eq!(memo.bound(), 4);
        assert!(memo.covers(4));
        assert!(!memo.covers(5));
        assert!(memo.get(3).is_none());

        memo.insert(3, BigUint::from(7u32));
        assert_eq!(memo.get(3), Some(&BigUint::from(7u32)));
        assert_eq!(memo.resolved(), 1);
        assert!(memo.get(17).is_none());
    }

    #[test]
    fn test_bound_overflow_is_resource_exhausted() {
        let err = LinearMemo::with_bound(usize::MAX).unwrap_err();
        assert!(matches!(err, CountError::ResourceExhausted { .. }));
    }
}
