//! CLI argument definitions for tandem.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tandem")]
#[command(about = "Detect tandem copies inside opaque binary files", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search a file for an exact byte pattern
    Search {
        /// File to search
        file: PathBuf,
        /// Pattern as whitespace-separated hex bytes, e.g. "DE AD BE EF"
        #[arg(short, long)]
        pattern: String,
        /// Report every accepted match instead of only the first
        #[arg(long)]
        all: bool,
        /// Minimum distance between accepted matches (with --all)
        #[arg(long, default_value = "0")]
        min_gap: usize,
    },
    /// Infer how many tandem copies a file contains
    Resolve {
        /// File to analyze
        file: PathBuf,
        /// Outer unit count (e.g. page count); the copy count must divide it
        #[arg(short, long)]
        unit_count: u32,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Write the report as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run the synthetic benchmark grid
    Bench {
        /// CSV log path
        #[arg(short, long, env = "TANDEM_BENCH_LOG", default_value = "inline-copies.csv")]
        output: PathBuf,
        /// Stop after this many trials
        #[arg(long)]
        limit: Option<usize>,
    },
}
