// Copyright (C) 2025 The exact-count authors. See LICENSE for details.

//! Error types for counting.

use strum_macros::{EnumCount as EnumCountMacro, EnumDiscriminants};

/// Errors that can occur while counting.
///
/// Arithmetic itself never fails; the only failures are bad arguments and
/// memo tables that cannot be sized or allocated.
#[derive(Debug, Clone, PartialEq, Eq, EnumCountMacro, EnumDiscriminants, thiserror::Error)]
#[strum_discriminants(name(CountErrorKind))]
#[strum_discriminants(derive(strum_macros::EnumIter))]
pub enum CountError {
    /// A required integer argument is negative.
    #[error("{argument} must be non-negative, got {value}")]
    InvalidInput { argument: &'static str, value: i64 },

    /// A memo table could not be sized or allocated, or exceeds a configured limit.
    #[error("cannot allocate {requested} {resource}: {reason}")]
    ResourceExhausted {
        resource: &'static str,
        requested: u128,
        reason: String,
    },
}

impl CountError {
    pub fn kind(&self) -> CountErrorKind {
        CountErrorKind::from(self)
    }
}

impl CountErrorKind {
    /// Short name used in statistics output.
    pub fn label(self) -> &'static str {
        match self {
            CountErrorKind::InvalidInput => "invalid_input",
            CountErrorKind::ResourceExhausted => "resource_exhausted",
        }
    }
}

/// Convert a signed argument into an index, rejecting negatives.
pub fn non_negative(argument: &'static str, value: i64) -> Result<usize, CountError> {
    if value < 0 {
        return Err(CountError::InvalidInput { argument, value });
    }
    usize::try_from(value).map_err(|_| CountError::ResourceExhausted {
        resource: argument,
        requested: value as u128,
        reason: String::from("does not fit in the address space"),
    })
}
