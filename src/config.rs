// Copyright (C) 2025 The exact-count authors. See LICENSE for details.

//! Configuration for a [`CountContext`](crate::context::CountContext).

use crate::error::CountError;
use crate::memo::GridMemo;
use clap::ValueEnum;

/// How lattice path counts are evaluated.
///
/// Both strategies compute the same recurrence over the same memo table and
/// return identical results.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    /// Memoized recursion from `(x, y)` down, driven by the engine's work stack.
    #[default]
    TopDown,
    /// Iterative row-by-row fill of the grid from `(0, 0)` up.
    BottomUp,
}

/// Optional caps on memo table size.
///
/// The default has no caps: tables grow until allocation fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    /// Largest number of `(x, y)` cells a path table may hold.
    pub max_cells: Option<u64>,
    /// Largest disk count a Hanoi table may be sized for.
    pub max_disks: Option<u64>,
}

impl Limits {
    /// Check that a grid covering `(x, y)` is allowed.
    pub fn check_cells(&self, x: usize, y: usize) -> Result<(), CountError> {
        let requested = GridMemo::cells_for(x, y);
        match self.max_cells {
            Some(max) if requested > u128::from(max) => Err(CountError::ResourceExhausted {
                resource: "grid cells",
                requested,
                reason: format!("exceeds limit of {}", max),
            }),
            _ => Ok(()),
        }
    }

    /// Check that a table for `n` disks is allowed.
    pub fn check_disks(&self, n: usize) -> Result<(), CountError> {
        match self.max_disks {
            Some(max) if n as u128 > u128::from(max) => Err(CountError::ResourceExhausted {
                resource: "disks",
                requested: n as u128,
                reason: format!("exceeds limit of {}", max),
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unlimited() {
        let limits = Limits::default();
        assert!(limits.check_cells(100_000, 100_000).is_ok());
        assert!(limits.check_disks(1 << 40).is_ok());
    }

    #[test]
    fn test_cell_limit() {
        let limits = Limits {
            max_cells: Some(64),
            ..Limits::default()
        };
        assert!(limits.check_cells(7, 7).is_ok());
        assert_eq!(
            limits.check_cells(8, 7),
            Err(CountError::ResourceExhausted {
                resource: "grid cells",
                requested: 72,
                reason: String::from("exceeds limit of 64"),
            })
        );
    }

    #[test]
    fn test_disk_limit() {
        let limits = Limits {
            max_disks: Some(64),
            ..Limits::default()
        };
        assert!(limits.check_disks(64).is_ok());
        assert!(matches!(
            limits.check_disks(65),
            Err(CountError::ResourceExhausted { resource: "disks", .. })
        ));
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(Strategy::default(), Strategy::TopDown);
        assert_eq!(Strategy::TopDown.to_string(), "top-down");
        assert_eq!(Strategy::BottomUp.to_string(), "bottom-up");
    }
}
