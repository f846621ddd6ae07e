//! Command-line surface and the resolved run [`Config`].

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

/// Largest side accepted for random grids.
pub const MAX_RANDOM_SIDE: u16 = 15;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Find the path through a radiation grid whose worst cell is as low as possible."
)]
pub struct Cli {
    #[command(subcommand)]
    pub source: Source,

    /// Print plain text without terminal colours.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins
    /// when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Where the grid comes from.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Load one of the built-in sample grids.
    Sample {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
        number: u8,
    },
    /// Fill a grid with random levels from 1 to 9.
    Random {
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..=MAX_RANDOM_SIDE as i64))]
        rows: u16,
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..=MAX_RANDOM_SIDE as i64))]
        cols: u16,
        /// Seed for a reproducible grid.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Use the given levels, row by row.
    Grid {
        #[arg(long)]
        rows: usize,
        #[arg(long)]
        cols: usize,
        #[arg(required = true, num_args = 1..)]
        values: Vec<u32>,
    },
    /// An all-zero grid.
    Zeros {
        #[arg(long)]
        rows: usize,
        #[arg(long)]
        cols: usize,
    },
}

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: Source,
    pub color: bool,
    pub log_level: LevelFilter,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let log_level = match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        Self {
            source: cli.source,
            color: !cli.no_color,
            log_level,
        }
    }
}
