//! Resolution reporting: serializable summary plus console formatting.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::error::Result;
use crate::resolve::Resolution;

/// How many offsets the console report lists before truncating.
const MAX_CONSOLE_OFFSETS: usize = 8;

/// Full record of one resolution run, for JSON output and logs.
#[derive(Debug, Clone, Serialize)]
pub struct ResolveReport {
    pub buffer_len: usize,
    pub outer_unit_count: u32,
    pub count: u32,
    pub repeat_len: usize,
    pub offsets: Vec<usize>,
}

impl ResolveReport {
    pub fn new(buffer_len: usize, outer_unit_count: u32, resolution: Resolution) -> Self {
        Self {
            buffer_len,
            outer_unit_count,
            count: resolution.count,
            repeat_len: resolution.repeat_len,
            offsets: resolution.offsets,
        }
    }
}

/// Format a report for console display with colored output.
///
/// Returns a multi-line string with a boxed format.
pub fn format_report_console(report: &ResolveReport) -> String {
    let mut output = String::new();

    let border: String = "━".repeat(50);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  {} tandem copies of {} bytes",
        report.count.bold(),
        report.repeat_len
    );
    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  BUFFER : {} bytes, {} outer units",
        report.buffer_len, report.outer_unit_count
    );
    let _ = writeln!(output, "  OFFSETS: {}", format_offsets(&report.offsets));

    output
}

fn format_offsets(offsets: &[usize]) -> String {
    let shown: Vec<String> = offsets
        .iter()
        .take(MAX_CONSOLE_OFFSETS)
        .map(|offset| offset.to_string())
        .collect();
    let mut formatted = shown.join(", ");
    if offsets.len() > MAX_CONSOLE_OFFSETS {
        let _ = write!(formatted, " (+{} more)", offsets.len() - MAX_CONSOLE_OFFSETS);
    }
    formatted
}

/// Hex preview of the first bytes of a region, for debug logging.
pub fn hex_preview(data: &[u8], max_len: usize) -> String {
    let shown = &data[..data.len().min(max_len)];
    let mut out = String::with_capacity(shown.len() * 3 + 2);
    for byte in shown {
        let _ = write!(out, "{:02x},", byte);
    }
    if data.len() > max_len {
        out.push_str("..");
    }
    out
}

/// Write a report to `path` as pretty-printed JSON.
pub fn save_report<P: AsRef<Path>>(path: P, report: &ResolveReport) -> Result<()> {
    let content = serde_json::to_string_pretty(report)?;
    fs::write(path, content)?;
    Ok(())
}
