// Copyright (C) 2025 The exact-count authors. See LICENSE for details.

use clap::Parser;
use exact_count::driver::{self, Cli, LOG_ENV_VAR};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match driver::run(&cli) {
        Ok(result) => {
            println!("{}", result);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}

/// Initialize the logger from `EXACT_COUNT_LOG`, or the `-v` count when it is unset.
fn init_logger(verbose: u8) {
    let env = std::env::var(LOG_ENV_VAR).ok();
    tracing_subscriber::fmt()
        .with_env_filter(driver::log_filter(verbose, env.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}
