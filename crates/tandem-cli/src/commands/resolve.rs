//! Resolve command: infer the tandem copy count of a file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use tandem_core::{
    ResolveReport, format_report_console, hex_preview, resolve_copy_count, save_report,
};

pub fn run(file: &Path, unit_count: u32, json: bool, output: Option<&Path>) -> Result<()> {
    let buffer =
        fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    debug!("Read {} bytes from {}", buffer.len(), file.display());

    let resolution = resolve_copy_count(&buffer, unit_count)?;

    for &offset in &resolution.offsets {
        let end = (offset + resolution.repeat_len).min(buffer.len());
        debug!("Copy at {}: {}", offset, hex_preview(&buffer[offset..end], 20));
    }

    let report = ResolveReport::new(buffer.len(), unit_count, resolution);

    if let Some(path) = output {
        save_report(path, &report)?;
        debug!("Report written to {}", path.display());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report_console(&report));
    }

    Ok(())
}
