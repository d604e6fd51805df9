// Copyright (C) 2025 The exact-count authors. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use clap::Parser;
use exact_count::driver::{self, Cli};
use exact_count::CountError;

/// Unmemoized path count, for cross-checking small inputs.
///
/// Exponential in `x + y`; keep inputs small.
pub fn naive_paths(x: u32, y: u32) -> u128 {
    if x == 0 || y == 0 {
        return 1;
    }
    naive_paths(x - 1, y) + naive_paths(x, y - 1) + naive_paths(x - 1, y - 1)
}

/// Parse `args` as the command line (without the program name) and run it.
pub fn run_cli(args: &[&str]) -> Result<String, CountError> {
    let cli = Cli::try_parse_from(std::iter::once("exact-count").chain(args.iter().copied()))
        .unwrap_or_else(|e| panic!("could not parse {:?}: {}", args, e));
    driver::run(&cli)
}
