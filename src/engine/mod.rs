// Copyright (C) 2025 The exact-count authors. See LICENSE for details.

//! Memoized evaluation engine.
//!
//! This module evaluates a [`Recurrence`] without native recursion. The
//! engine keeps its own stack of frames on the heap, so the depth of a
//! recurrence is bounded by available memory rather than the thread stack.
//!
//! # Architecture
//!
//! Each stack entry tracks:
//! - Which state is being resolved
//! - Whether its subproblems have already been pushed
//!
//! The main loop looks at the top frame:
//! 1. If the state is in the memo table: pop it (memo hit)
//! 2. If the state is a base case: record it and pop
//! 3. If the frame is not yet expanded: mark it expanded and push every
//!    unresolved subproblem above it
//! 4. Otherwise every subproblem is resolved: combine, record and pop
//!
//! Each distinct state is combined exactly once; later requests for it are
//! memo hits. Time and space are therefore linear in the number of distinct
//! reachable states.

pub mod recurrence;

pub use recurrence::{Recurrence, Subproblems, MAX_SUBPROBLEMS};

use crate::memo::MemoTable;
use crate::statistics::{Counters, Statistics};
use num_bigint::BigUint;
use tracing::trace;

/// Stack entry tracking the resolution of one state.
#[derive(Debug)]
struct Frame<S> {
    /// The state to resolve.
    state: S,

    /// Whether the subproblems of `state` have been pushed.
    expanded: bool,
}

/// Evaluation engine for a single recurrence.
///
/// The evaluator owns its work stack so that repeated evaluations reuse the
/// allocation.
#[derive(Debug)]
pub struct Evaluator<R: Recurrence> {
    /// The recurrence being evaluated.
    recurrence: R,

    /// Work stack of unresolved states.
    stack: Vec<Frame<R::State>>,
}

impl<R: Recurrence> Evaluator<R> {
    pub fn new(recurrence: R) -> Self {
        Self {
            recurrence,
            stack: Vec::new(),
        }
    }

    pub fn recurrence(&self) -> &R {
        &self.recurrence
    }

    /// Evaluate the recurrence at `root`.
    ///
    /// Results for every state reached are left in `memo`, so a later call
    /// with the same table only computes states it has not seen.
    ///
    /// # Panics
    ///
    /// Panics if `memo` does not cover `root`, or if the recurrence breaks its
    /// contract (a subproblem outside the table, or `subproblems` returning
    /// different states for the same input).
    pub fn evaluate<M: MemoTable<R::State>>(
        &mut self,
        memo: &mut M,
        stats: &mut Statistics,
        root: R::State,
    ) -> BigUint {
        assert!(
            memo.covers(root),
            "{}: memo table does not cover {:?}",
            self.recurrence.name(),
            root
        );
        trace!(recurrence = self.recurrence.name(), ?root, "evaluating");

        self.stack.clear();
        self.stack.push(Frame {
            state: root,
            expanded: false,
        });
        stats.increment_counter(Counters::StackPushes);

        while let Some(frame) = self.stack.last_mut() {
            let state = frame.state;

            if memo.get(state).is_some() {
                stats.increment_counter(Counters::MemoHits);
                self.stack.pop();
                continue;
            }

            if let Some(value) = self.recurrence.base_case(state) {
                stats.increment_counter(Counters::BaseCases);
                memo.insert(state, value);
                self.stack.pop();
                continue;
            }

            let subproblems = self.recurrence.subproblems(state);

            if !frame.expanded {
                frame.expanded = true;
                for &sub in subproblems.iter() {
                    if memo.get(sub).is_some() {
                        stats.increment_counter(Counters::MemoHits);
                    } else {
                        self.stack.push(Frame {
                            state: sub,
                            expanded: false,
                        });
                        stats.increment_counter(Counters::StackPushes);
                    }
                }
                continue;
            }

            let value = {
                let resolved: &M = memo;
                let parts: Option<Subproblems<&BigUint>> =
                    subproblems.iter().map(|&sub| resolved.get(sub)).collect();
                let parts = parts.unwrap_or_else(|| {
                    panic!(
                        "{}: subproblem of {:?} unresolved after expansion",
                        self.recurrence.name(),
                        state
                    )
                });
                self.recurrence.combine(state, &parts)
            };
            stats.increment_counter(Counters::Evaluations);
            memo.insert(state, value);
            self.stack.pop();
        }

        memo.get(root).cloned().unwrap_or_else(|| {
            panic!(
                "{}: root {:?} unresolved after evaluation",
                self.recurrence.name(),
                root
            )
        })
    }
}
