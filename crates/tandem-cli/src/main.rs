use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod bench;
mod cli;
mod commands;
mod hex;
mod shutdown;

use cli::{Args, Command};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("tandem_cli=info".parse()?)
                .add_directive("tandem_core=info".parse()?),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Command::Search {
            file,
            pattern,
            all,
            min_gap,
        } => commands::search::run(&file, &pattern, all, min_gap),
        Command::Resolve {
            file,
            unit_count,
            json,
            output,
        } => commands::resolve::run(&file, unit_count, json, output.as_deref()),
        Command::Bench { output, limit } => commands::bench::run(&output, limit),
    }
}
