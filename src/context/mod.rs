// Copyright (C) 2025 The exact-count authors. See LICENSE for details.

//! Count context combining memo tables, statistics and limits.
//!
//! The CountContext is the entry point for counting. It:
//! - Validates signed arguments, rejecting negatives with `InvalidInput`
//! - Sizes memo tables for the requested state, within the configured limits
//! - Runs the evaluator (or bottom-up fill) against those tables
//! - Tallies engine activity and failures in its statistics
//!
//! Memo tables are kept between calls. A later call whose state fits in an
//! existing table reuses every value already computed; a larger one replaces
//! the table. The context is used through `&mut self`, so a shared cache always
//! has a single owner and needs no locking.

use crate::config::{Limits, Strategy};
use crate::counters::{HanoiMoveCounter, LatticePathCounter};
use crate::engine::{Evaluator, Recurrence};
use crate::error::{non_negative, CountError};
use crate::memo::{GridMemo, LinearMemo, MemoTable};
use crate::statistics::{Counters, Statistics};
use num_bigint::BigUint;
use tracing::{debug, warn};

/// Counting context.
///
/// # Example
///
/// ```
/// use exact_count::context::CountContext;
///
/// let mut ctx = CountContext::new();
/// assert_eq!(ctx.count_paths(2, 2).unwrap().to_string(), "13");
/// assert_eq!(ctx.count_moves(10).unwrap().to_string(), "1023");
/// assert!(ctx.count_moves(-1).is_err());
/// ```
#[derive(Debug)]
pub struct CountContext {
    /// Caps on memo table size.
    pub limits: Limits,
    /// How lattice path counts are evaluated.
    pub strategy: Strategy,
    /// Engine activity and failures across every call on this context.
    pub statistics: Statistics,

    paths: Evaluator<LatticePathCounter>,
    moves: Evaluator<HanoiMoveCounter>,
    path_memo: Option<GridMemo>,
    move_memo: Option<LinearMemo>,
}

impl CountContext {
    /// Create a context with no limits and the default strategy.
    pub fn new() -> Self {
        Self::with_config(Limits::default(), Strategy::default())
    }

    pub fn with_config(limits: Limits, strategy: Strategy) -> Self {
        Self {
            limits,
            strategy,
            statistics: Statistics::new(),
            paths: Evaluator::new(LatticePathCounter),
            moves: Evaluator::new(HanoiMoveCounter),
            path_memo: None,
            move_memo: None,
        }
    }

    /// Number of monotone lattice paths from `(x, y)` to the origin.
    pub fn count_paths(&mut self, x: i64, y: i64) -> Result<BigUint, CountError> {
        let result = self.try_count_paths(x, y);
        self.note_failure(&result);
        result
    }

    /// Number of moves that solve a Tower of Hanoi puzzle of `n` disks.
    pub fn count_moves(&mut self, n: i64) -> Result<BigUint, CountError> {
        let result = self.try_count_moves(n);
        self.note_failure(&result);
        result
    }

    /// Drop every memo table, keeping limits, strategy and statistics.
    pub fn clear(&mut self) {
        self.path_memo = None;
        self.move_memo = None;
    }

    /// Number of resolved path states currently cached.
    pub fn cached_paths(&self) -> usize {
        self.path_memo.as_ref().map_or(0, |memo| memo.resolved())
    }

    /// Number of resolved Hanoi states currently cached.
    pub fn cached_moves(&self) -> usize {
        self.move_memo.as_ref().map_or(0, |memo| memo.resolved())
    }

    fn try_count_paths(&mut self, x: i64, y: i64) -> Result<BigUint, CountError> {
        let x = non_negative("x", x)?;
        let y = non_negative("y", y)?;

        // Axis states need no table, whatever their size or the cell limit.
        if let Some(value) = self.paths.recurrence().base_case((x, y)) {
            self.statistics.increment_counter(Counters::BaseCases);
            debug!(x, y, "lattice path count is a base case");
            return Ok(value);
        }

        let memo = grid_covering(&mut self.path_memo, &self.limits, x, y)?;

        let value = match self.strategy {
            Strategy::TopDown => self.paths.evaluate(memo, &mut self.statistics, (x, y)),
            Strategy::BottomUp => {
                self.paths
                    .recurrence()
                    .fill(memo, &mut self.statistics, (x, y))
            }
        };
        debug!(
            x,
            y,
            strategy = %self.strategy,
            bits = value.bits(),
            statistics = %self.statistics,
            "counted lattice paths"
        );
        Ok(value)
    }

    fn try_count_moves(&mut self, n: i64) -> Result<BigUint, CountError> {
        let n = non_negative("n", n)?;
        let memo = line_covering(&mut self.move_memo, &self.limits, n)?;

        let value = self.moves.evaluate(memo, &mut self.statistics, n);
        debug!(
            n,
            bits = value.bits(),
            statistics = %self.statistics,
            "counted hanoi moves"
        );
        Ok(value)
    }

    fn note_failure(&mut self, result: &Result<BigUint, CountError>) {
        if let Err(error) = result {
            warn!(%error, "count failed");
            self.statistics.record_failure(error);
        }
    }
}

impl Default for CountContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Reuse the grid in `slot` if it covers `(x, y)`, otherwise replace it.
fn grid_covering<'a>(
    slot: &'a mut Option<GridMemo>,
    limits: &Limits,
    x: usize,
    y: usize,
) -> Result<&'a mut GridMemo, CountError> {
    let memo = match slot.take() {
        Some(memo) if memo.covers((x, y)) => memo,
        _ => {
            limits.check_cells(x, y)?;
            debug!(
                cells = %GridMemo::cells_for(x, y),
                x, y, "allocating path memo"
            );
            GridMemo::with_bounds(x, y)?
        }
    };
    Ok(slot.insert(memo))
}

/// Reuse the table in `slot` if it covers `n`, otherwise replace it.
fn line_covering<'a>(
    slot: &'a mut Option<LinearMemo>,
    limits: &Limits,
    n: usize,
) -> Result<&'a mut LinearMemo, CountError> {
    let memo = match slot.take() {
        Some(memo) if memo.covers(n) => memo,
        _ => {
            limits.check_disks(n)?;
            debug!(n, "allocating hanoi memo");
            LinearMemo::with_bound(n)?
        }
    };
    Ok(slot.insert(memo))
}
