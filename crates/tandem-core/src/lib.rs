//! Tandem-copy detection for opaque binary buffers.
//!
//! Given a buffer suspected of holding N identical regions back to back and
//! an outer unit count (such as a page count) whose divisors are the only
//! admissible values of N, this crate finds the repetition structure with a
//! Boyer-Moore exact matcher and infers N from the accumulated evidence.
//!
//! The core is fully synchronous and allocation-light: the caller owns the
//! buffer, the library only borrows read-only slices.

pub mod error;
pub mod matcher;
pub mod repeat;
pub mod report;
pub mod resolve;
pub mod synth;

pub use error::{Error, Result};
pub use matcher::{ShiftTables, search, search_all};
pub use repeat::{Evidence, find_repeats, find_repeats_trimmed};
pub use report::{ResolveReport, format_report_console, hex_preview, save_report};
pub use resolve::{EvidenceAccumulator, Resolution, divisors_desc, resolve_copy_count};
pub use synth::{fill_block, paged_buffer, tandem_buffer};
