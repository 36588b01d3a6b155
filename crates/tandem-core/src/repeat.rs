//! Repeat discovery for one copy-count hypothesis.
//!
//! Extracts a probe pattern from the middle of the first candidate copy and
//! searches the rest of the buffer for exact recurrences, at most one per
//! copy-sized region.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::matcher;

/// Offsets gathered while testing one copy-count hypothesis.
///
/// `offsets` always contains the probe pattern's own location, so a buffer
/// that really holds `num_copies` tandem copies yields `num_copies` offsets.
#[derive(Debug, Clone, Serialize)]
pub struct Evidence {
    /// The hypothesis this evidence was gathered for.
    pub num_copies: u32,
    /// Size in bytes of one candidate copy.
    pub repeat_len: usize,
    /// Absolute buffer offsets of the probe and every accepted match, in
    /// increasing order.
    pub offsets: Vec<usize>,
}

/// Find all repeats of a probe pattern taken from the middle of the first
/// candidate copy, assuming `buffer` holds `num_copies` tandem copies.
///
/// The probe spans a full candidate copy and the minimum match gap equals
/// the copy size, so at most one match lands in each copy-sized region.
///
/// # Errors
///
/// Returns [`Error::BufferTooSmall`] if the buffer cannot hold `num_copies`
/// copies of at least one byte each.
pub fn find_repeats(buffer: &[u8], num_copies: u32) -> Result<Evidence> {
    find_repeats_trimmed(buffer, num_copies, 0)
}

/// Variant of [`find_repeats`] that shrinks the probe below the copy size by
/// `header_trim` bytes, keeping it centered inside the first copy.
///
/// No current caller trims; [`find_repeats`] passes 0.
pub fn find_repeats_trimmed(
    buffer: &[u8],
    num_copies: u32,
    header_trim: usize,
) -> Result<Evidence> {
    if num_copies == 0 {
        return Err(Error::BufferTooSmall {
            buffer_len: buffer.len(),
            count: num_copies,
        });
    }

    let copy_size = buffer.len() / num_copies as usize;
    if copy_size == 0 {
        return Err(Error::BufferTooSmall {
            buffer_len: buffer.len(),
            count: num_copies,
        });
    }

    let pattern_size = copy_size
        .checked_sub(header_trim)
        .filter(|&size| size > 0)
        .ok_or(Error::EmptyPattern)?;

    // Center the probe inside the first copy, away from both edges.
    let pattern_offset = (copy_size - pattern_size) / 2;
    let pattern = &buffer[pattern_offset..pattern_offset + pattern_size];
    let text = &buffer[pattern_offset + pattern_size..];

    debug!(
        "find_repeats: num_copies={}, copy_size={}, pattern_size={}, pattern_offset={}",
        num_copies, copy_size, pattern_size, pattern_offset
    );

    let matches = matcher::search_all(text, pattern, copy_size);

    let text_base = pattern_offset + pattern_size;
    let mut offsets = Vec::with_capacity(matches.len() + 1);
    offsets.push(pattern_offset);
    offsets.extend(matches.into_iter().map(|m| text_base + m));

    debug!("find_repeats: {} offsets", offsets.len());

    Ok(Evidence {
        num_copies,
        repeat_len: copy_size,
        offsets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_repeats_four_copies() {
        let evidence = find_repeats(b"abcabcabcabc", 4).unwrap();
        assert_eq!(evidence.num_copies, 4);
        assert_eq!(evidence.repeat_len, 3);
        assert_eq!(evidence.offsets, vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_find_repeats_includes_probe_offset_only_when_unrepeated() {
        let evidence = find_repeats(b"abcdefgh", 2).unwrap();
        assert_eq!(evidence.repeat_len, 4);
        assert_eq!(evidence.offsets, vec![0]);
    }

    #[test]
    fn test_find_repeats_offsets_increasing() {
        let block = b"0123456789abcdef";
        let buffer: Vec<u8> = block.iter().copied().cycle().take(block.len() * 4).collect();
        let evidence = find_repeats(&buffer, 4).unwrap();

        assert_eq!(evidence.offsets.len(), 4);
        for pair in evidence.offsets.windows(2) {
            assert!(pair[1] > pair[0]);
            assert!(pair[1] - pair[0] >= evidence.repeat_len);
        }
    }

    #[test]
    fn test_find_repeats_buffer_too_small() {
        let result = find_repeats(b"ab", 5);
        assert!(matches!(result, Err(Error::BufferTooSmall { .. })));
    }

    #[test]
    fn test_find_repeats_zero_copies() {
        let result = find_repeats(b"abcd", 0);
        assert!(matches!(result, Err(Error::BufferTooSmall { .. })));
    }

    #[test]
    fn test_find_repeats_trimmed_centers_probe() {
        let block: [u8; 8] = [10, 20, 30, 40, 50, 60, 70, 80];
        let buffer: Vec<u8> = block.iter().copied().cycle().take(32).collect();

        let evidence = find_repeats_trimmed(&buffer, 4, 4).unwrap();
        assert_eq!(evidence.repeat_len, 8);
        // Probe is the 4 middle bytes of the first copy, found again in each
        // subsequent copy at the same relative position.
        assert_eq!(evidence.offsets, vec![2, 10, 18, 26]);
    }

    #[test]
    fn test_find_repeats_trimmed_rejects_empty_probe() {
        let result = find_repeats_trimmed(b"abcdabcd", 2, 4);
        assert!(matches!(result, Err(Error::EmptyPattern)));
    }
}
