//! Boyer-Moore scanning over a borrowed text slice.

use super::tables::ShiftTables;

/// Find the first exact occurrence of `pattern` in `text`.
///
/// Returns the byte offset where the pattern starts, or `None` if no
/// alignment fully matches. An empty pattern or a pattern longer than the
/// text matches nothing.
///
/// # Example
///
/// ```
/// use tandem_core::matcher::search;
///
/// let text = b"......ANPANMAN...";
/// assert_eq!(search(text, b"ANPANMAN"), Some(6));
/// assert_eq!(search(text, b"BATMAN"), None);
/// ```
pub fn search(text: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return None;
    }

    let tables = ShiftTables::new(pattern);
    scan(text, pattern, &tables)
}

/// Find every accepted occurrence of `pattern` in `text`.
///
/// Returns the start offsets in increasing order. After a match at offset
/// `m` the search cursor advances to `max(cursor + min_gap, m +
/// pattern.len())`, so accepted matches never overlap and the cursor never
/// moves by less than `min_gap` per match. An empty result is not an error.
///
/// Shift tables are built once and shared across the whole call.
///
/// # Example
///
/// ```
/// use tandem_core::matcher::search_all;
///
/// let text = b"abcabcabcabc";
/// assert_eq!(search_all(text, b"abc", 3), vec![0, 3, 6, 9]);
/// // A larger gap suppresses matches inside the same region.
/// assert_eq!(search_all(text, b"abc", 6), vec![0, 6]);
/// ```
pub fn search_all(text: &[u8], pattern: &[u8], min_gap: usize) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }

    let tables = ShiftTables::new(pattern);
    let mut matches = Vec::new();
    let mut cursor = 0;

    while cursor + pattern.len() <= text.len() {
        let Some(found) = scan(&text[cursor..], pattern, &tables) else {
            break;
        };
        let start = cursor + found;
        matches.push(start);
        // Skip past the match, but never advance by less than min_gap.
        cursor = (cursor + min_gap).max(start + pattern.len());
    }

    matches
}

/// Right-to-left scan of one alignment window at a time.
///
/// On mismatch at pattern index `p`, the window advances by the larger of
/// the bad-character and good-suffix shifts, which is always at least 1.
fn scan(text: &[u8], pattern: &[u8], tables: &ShiftTables) -> Option<usize> {
    let mut i = pattern.len() - 1;

    while i < text.len() {
        let mut t = i;
        let mut p = pattern.len() - 1;
        loop {
            if text[t] != pattern[p] {
                i = t + tables.shift(text[t], p);
                break;
            }
            if p == 0 {
                return Some(t);
            }
            t -= 1;
            p -= 1;
        }
    }

    None
}
