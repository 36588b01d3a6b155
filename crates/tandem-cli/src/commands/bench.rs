//! Bench command: run the synthetic trial grid and log CSV rows.
//!
//! The grid sweeps copy sizes geometrically and copy counts linearly after a
//! set of fixed warm-up cases. Ctrl-C stops the grid after the current
//! trial; a failed trial stops it immediately.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use crate::bench::{CsvSink, Trial, TrialSink, run_trial};
use crate::shutdown::ShutdownSignal;

const MAX_PAGES_PER_COPY: u32 = 100;

/// Hand-picked warm-up trials covering the interesting size regimes before
/// the sweep starts.
const FIXED_TRIALS: &[Trial] = &[
    Trial { num_pages: 4, num_copies: 2, copy_size: 40 },
    Trial { num_pages: 20, num_copies: 2, copy_size: 891 },
    Trial { num_pages: 40, num_copies: 20, copy_size: 50_000 },
    Trial { num_pages: 400, num_copies: 200, copy_size: 50_000 },
    Trial { num_pages: 34, num_copies: 17, copy_size: 500_000 },
    Trial { num_pages: 51, num_copies: 17, copy_size: 500_000 },
    Trial { num_pages: 68, num_copies: 17, copy_size: 500_000 },
];

pub fn run(output: &Path, limit: Option<usize>) -> Result<()> {
    let shutdown = Arc::new(ShutdownSignal::new());
    let shutdown_ctrlc = Arc::clone(&shutdown);
    ctrlc::set_handler(move || {
        info!("Received shutdown signal, stopping after current trial...");
        shutdown_ctrlc.trigger();
    })?;

    let mut sink = CsvSink::create(output)?;
    let mut completed = 0usize;

    for trial in FIXED_TRIALS.iter().copied().chain(sweep_trials()) {
        if shutdown.is_shutdown() {
            break;
        }
        if let Some(limit) = limit
            && completed >= limit
        {
            break;
        }

        let result = run_trial(trial)?;
        sink.record(&result)?;
        completed += 1;

        println!(
            "{:>7} pages {:>5} copies {:>9} bytes/copy  {:>8.3}s  {:>9.3} MB/s{}",
            trial.num_pages,
            trial.num_copies,
            result.copy_size,
            result.duration.as_secs_f64(),
            result.speed(),
            if result.resolved { "" } else { "  [FAILED]" },
        );

        if !result.resolved {
            warn!(
                "Trial failed: num_pages={}, num_copies={}, copy_size={}",
                trial.num_pages, trial.num_copies, result.copy_size
            );
            break;
        }
    }

    info!(
        "Benchmark finished: {} trials logged to {}",
        completed,
        output.display()
    );
    Ok(())
}

/// Sweep copy sizes geometrically and copy counts linearly, ramping the
/// pages-per-copy factor as the grid progresses.
fn sweep_trials() -> impl Iterator<Item = Trial> {
    let mut trials = Vec::new();
    let mut pages_per_copy: u32 = 1;
    let mut copy_size: usize = 99;

    while copy_size < 1_000_000 {
        for num_copies in 2..100u32 {
            trials.push(Trial {
                num_pages: num_copies * pages_per_copy,
                num_copies,
                copy_size,
            });

            pages_per_copy = (pages_per_copy + 1)
                .min((copy_size / 10) as u32)
                .min(MAX_PAGES_PER_COPY);
        }
        copy_size *= 9;
    }

    trials.into_iter()
}
