//! Search command: exact pattern search in a file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use tandem_core::matcher;

use crate::hex;

pub fn run(file: &Path, pattern: &str, all: bool, min_gap: usize) -> Result<()> {
    let pattern = hex::parse_pattern(pattern)?;
    let buffer =
        fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    debug!("Read {} bytes from {}", buffer.len(), file.display());

    if all {
        let matches = matcher::search_all(&buffer, &pattern, min_gap);
        if matches.is_empty() {
            println!("No matches");
            return Ok(());
        }
        println!("{} matches:", matches.len());
        for offset in matches {
            println!("  0x{:08X}", offset);
        }
    } else {
        match matcher::search(&buffer, &pattern) {
            Some(offset) => println!("First match at 0x{:08X}", offset),
            None => println!("No match"),
        }
    }

    Ok(())
}
