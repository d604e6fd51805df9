// Copyright (C) 2025 The exact-count authors. See LICENSE for details.

//! Counting recurrences.
//!
//! # Organization
//!
//! - `paths`: [`LatticePathCounter`], king-move paths from `(x, y)` to the origin
//! - `hanoi`: [`HanoiMoveCounter`], moves of the three-peg Tower of Hanoi
//!
//! Each counter is a [`Recurrence`](crate::engine::Recurrence) evaluated by the
//! shared engine; see [`CountContext`](crate::context::CountContext) for the
//! validated, memo-owning entry points.

pub mod hanoi;
pub mod paths;

pub use hanoi::HanoiMoveCounter;
pub use paths::LatticePathCounter;
