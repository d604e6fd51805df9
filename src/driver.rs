// Copyright (C) 2025 The exact-count authors. See LICENSE for details.

//! Command-line driver.
//!
//! Parses one computation and its input size, runs it on a fresh
//! [`CountContext`], and renders the result as a decimal string.

use crate::config::{Limits, Strategy};
use crate::context::CountContext;
use crate::error::CountError;
use clap::{ArgAction, Parser, Subcommand};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter for the binary.
pub const LOG_ENV_VAR: &str = "EXACT_COUNT_LOG";

#[derive(Debug, Parser)]
#[command(name = "exact-count")]
#[command(about = "Exact lattice path and Tower of Hanoi move counts")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Refuse path tables with more than this many cells
    #[arg(long, global = true)]
    pub max_cells: Option<u64>,

    /// Refuse Hanoi tables for more than this many disks
    #[arg(long, global = true)]
    pub max_disks: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Count monotone lattice paths from (x, y) to the origin
    Paths {
        #[arg(long, default_value_t = 7, allow_negative_numbers = true)]
        x: i64,

        #[arg(long, default_value_t = 7, allow_negative_numbers = true)]
        y: i64,

        #[arg(long, value_enum, default_value_t = Strategy::TopDown)]
        strategy: Strategy,
    },
    /// Count the moves that solve a Tower of Hanoi puzzle
    Hanoi {
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        disks: i64,
    },
}

impl Cli {
    pub fn limits(&self) -> Limits {
        Limits {
            max_cells: self.max_cells,
            max_disks: self.max_disks,
        }
    }
}

/// Build the log filter for the binary.
///
/// Directives from `EXACT_COUNT_LOG` are used as given when present; the `-v`
/// count only chooses the level when the variable is unset or empty.
pub fn log_filter(verbose: u8, env: Option<&str>) -> EnvFilter {
    match env.map(str::trim).filter(|directives| !directives.is_empty()) {
        Some(directives) => EnvFilter::builder().parse_lossy(directives),
        None => {
            let level = match verbose {
                0 => LevelFilter::WARN,
                1 => LevelFilter::INFO,
                2 => LevelFilter::DEBUG,
                _ => LevelFilter::TRACE,
            };
            EnvFilter::new(level.to_string())
        }
    }
}

/// Run the parsed command and return the decimal result.
pub fn run(cli: &Cli) -> Result<String, CountError> {
    let value = match cli.command {
        Commands::Paths { x, y, strategy } => {
            info!(x, y, %strategy, "counting lattice paths");
            CountContext::with_config(cli.limits(), strategy).count_paths(x, y)?
        }
        Commands::Hanoi { disks } => {
            info!(disks, "counting hanoi moves");
            CountContext::with_config(cli.limits(), Strategy::default()).count_moves(disks)?
        }
    };
    Ok(value.to_string())
}
