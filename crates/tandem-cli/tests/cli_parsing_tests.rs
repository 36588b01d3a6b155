//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without executing the commands (which would require input files or a
//! long-running benchmark).

use std::path::PathBuf;

use clap::Parser;

// Re-create the Args structure for testing since the binary does not export
// its modules.
#[derive(Parser)]
#[command(name = "tandem")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Search {
        file: PathBuf,
        #[arg(short, long)]
        pattern: String,
        #[arg(long)]
        all: bool,
        #[arg(long, default_value = "0")]
        min_gap: usize,
    },
    Resolve {
        file: PathBuf,
        #[arg(short, long)]
        unit_count: u32,
        #[arg(long)]
        json: bool,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    Bench {
        #[arg(short, long, default_value = "inline-copies.csv")]
        output: PathBuf,
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[test]
fn test_parse_search() {
    let args = Args::try_parse_from(["tandem", "search", "spool.bin", "--pattern", "DE AD BE EF"])
        .unwrap();
    match args.command {
        Command::Search {
            file,
            pattern,
            all,
            min_gap,
        } => {
            assert_eq!(file, PathBuf::from("spool.bin"));
            assert_eq!(pattern, "DE AD BE EF");
            assert!(!all);
            assert_eq!(min_gap, 0);
        }
        _ => panic!("expected search command"),
    }
}

#[test]
fn test_parse_search_all_with_gap() {
    let args = Args::try_parse_from([
        "tandem", "search", "spool.bin", "-p", "00 11", "--all", "--min-gap", "4096",
    ])
    .unwrap();
    match args.command {
        Command::Search { all, min_gap, .. } => {
            assert!(all);
            assert_eq!(min_gap, 4096);
        }
        _ => panic!("expected search command"),
    }
}

#[test]
fn test_parse_resolve() {
    let args = Args::try_parse_from(["tandem", "resolve", "spool.bin", "--unit-count", "20"])
        .unwrap();
    match args.command {
        Command::Resolve {
            file,
            unit_count,
            json,
            output,
        } => {
            assert_eq!(file, PathBuf::from("spool.bin"));
            assert_eq!(unit_count, 20);
            assert!(!json);
            assert!(output.is_none());
        }
        _ => panic!("expected resolve command"),
    }
}

#[test]
fn test_parse_resolve_json_output() {
    let args = Args::try_parse_from([
        "tandem", "resolve", "spool.bin", "-u", "4", "--json", "-o", "report.json",
    ])
    .unwrap();
    match args.command {
        Command::Resolve { json, output, .. } => {
            assert!(json);
            assert_eq!(output, Some(PathBuf::from("report.json")));
        }
        _ => panic!("expected resolve command"),
    }
}

#[test]
fn test_parse_bench_defaults() {
    let args = Args::try_parse_from(["tandem", "bench"]).unwrap();
    match args.command {
        Command::Bench { output, limit } => {
            assert_eq!(output, PathBuf::from("inline-copies.csv"));
            assert!(limit.is_none());
        }
        _ => panic!("expected bench command"),
    }
}

#[test]
fn test_parse_resolve_requires_unit_count() {
    assert!(Args::try_parse_from(["tandem", "resolve", "spool.bin"]).is_err());
}
