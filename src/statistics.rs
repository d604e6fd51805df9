// Copyright (C) 2025 The exact-count authors. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and are incremented by the engine as
//! it resolves states, and by the context when a call fails.

use crate::error::{CountError, CountErrorKind};
use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{AsRefStr, EnumCount as EnumCountMacro, EnumIter};

#[derive(EnumCountMacro, EnumIter, AsRefStr, Copy, Clone, Debug, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// States whose value was computed by combining subproblems.
    Evaluations,
    /// States answered directly by a base case.
    BaseCases,
    /// Lookups answered from the memo table.
    MemoHits,
    /// Frames pushed onto the engine's work stack.
    StackPushes,
}

const COUNT: usize = Counters::COUNT + CountError::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Tally a failed call by its error kind.
    pub(crate) fn record_failure(&mut self, error: &CountError) {
        self.stats[Counters::COUNT + error.kind() as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Number of failed calls of the given kind.
    pub fn failures(&self, kind: CountErrorKind) -> u64 {
        self.stats[Counters::COUNT + kind as usize]
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        self.stats = [0; COUNT];
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = "";
        for counter in Counters::iter() {
            write!(f, "{}{}={}", separator, counter.as_ref(), self.get(counter))?;
            separator = " ";
        }
        for kind in CountErrorKind::iter() {
            write!(f, " {}={}", kind.label(), self.failures(kind))?;
        }
        Ok(())
    }
}
