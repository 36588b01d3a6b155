//! Benchmark harness for synthetic inline-copy detection trials.
//!
//! Each trial resolves the same synthetic buffer repeatedly until a minimum
//! wall-clock duration has elapsed, then reports the mean duration over the
//! iterations. Results go to an injected sink, keeping the grid driver
//! decoupled from the log format.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{info, warn};

use tandem_core::{resolve_copy_count, synth};

/// Keep re-running a trial until at least this much time has elapsed.
pub const MIN_TRIAL_DURATION: Duration = Duration::from_secs(1);

/// One benchmark configuration.
#[derive(Debug, Clone, Copy)]
pub struct Trial {
    pub num_pages: u32,
    pub num_copies: u32,
    pub copy_size: usize,
}

/// Outcome of one finished trial.
#[derive(Debug, Clone, Copy)]
pub struct TrialResult {
    pub trial: Trial,
    /// Copy size after rounding up to whole pages per copy.
    pub copy_size: usize,
    /// Mean duration of one resolution pass.
    pub duration: Duration,
    /// True if the resolver reported the expected copy count.
    pub resolved: bool,
}

impl TrialResult {
    /// Buffer size in MB.
    pub fn total_mb(&self) -> f64 {
        self.trial.num_copies as f64 * self.copy_size as f64 / 1024.0 / 1024.0
    }

    /// Throughput in MB per second, or -1 if the duration was zero.
    pub fn speed(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 { self.total_mb() / secs } else { -1.0 }
    }
}

/// Receives each finished trial.
pub trait TrialSink {
    fn record(&mut self, result: &TrialResult) -> Result<()>;
}

/// Appends one CSV row per trial, header first.
pub struct CsvSink {
    file: File,
}

impl CsvSink {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.as_ref().display()))?;
        writeln!(
            file,
            "timestamp, num_pages, num_copies, copy_size (bytes), total_size (MB), duration (sec), speed (MB/sec)"
        )?;
        Ok(Self { file })
    }
}

impl TrialSink for CsvSink {
    fn record(&mut self, result: &TrialResult) -> Result<()> {
        writeln!(
            self.file,
            "{}, {}, {}, {}, {:.1}, {:.2}, {:.3}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            result.trial.num_pages,
            result.trial.num_copies,
            result.copy_size,
            result.total_mb(),
            result.duration.as_secs_f64(),
            result.speed(),
        )?;
        self.file.flush()?;
        Ok(())
    }
}

/// Round the copy size up so each copy spans a whole number of pages.
fn rounded_copy_size(num_pages: u32, num_copies: u32, copy_size: usize) -> usize {
    let pages_per_copy = (num_pages / num_copies).max(1) as usize;
    copy_size.div_ceil(pages_per_copy) * pages_per_copy
}

/// Run one trial: build the synthetic buffer, then resolve it until the
/// minimum duration has elapsed.
pub fn run_trial(trial: Trial) -> Result<TrialResult> {
    let Trial {
        num_pages,
        num_copies,
        copy_size,
    } = trial;

    let copy_size = rounded_copy_size(num_pages, num_copies, copy_size);
    let buffer = synth::tandem_buffer(num_copies, copy_size);

    info!(
        "Trial: num_pages={}, num_copies={}, copy_size={}, total={:.1} MB",
        num_pages,
        num_copies,
        copy_size,
        num_copies as f64 * copy_size as f64 / 1024.0 / 1024.0
    );

    let start = Instant::now();
    let mut iterations = 0u32;
    let mut resolved;
    loop {
        resolved = match resolve_copy_count(&buffer, num_pages) {
            Ok(resolution) => resolution.count == num_copies,
            Err(e) => {
                warn!("Trial failed to resolve: {}", e);
                false
            }
        };
        iterations += 1;
        if start.elapsed() >= MIN_TRIAL_DURATION {
            break;
        }
    }
    let duration = start.elapsed() / iterations;

    Ok(TrialResult {
        trial,
        copy_size,
        duration,
        resolved,
    })
}
