//! Copy-count inference over divisor-derived hypotheses.
//!
//! Candidates are tested from the most specific (largest count, smallest
//! copy) downward. Evidence gathered for a failed hypothesis is not
//! discarded: it prunes the remaining candidate set, since offsets found for
//! one count can support or rule out another sharing the same repeat
//! structure.

mod candidates;

pub use candidates::{EvidenceAccumulator, divisors_desc};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::repeat;

/// A confirmed copy count together with the evidence that confirmed it.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    /// Number of tandem copies the buffer holds.
    pub count: u32,
    /// Size in bytes of one copy.
    pub repeat_len: usize,
    /// Absolute start offset of each detected copy, in increasing order.
    pub offsets: Vec<usize>,
}

/// Infer how many tandem copies `buffer` holds.
///
/// `outer_unit_count` is an externally known total (such as a page count);
/// only its divisors greater than 1 are admissible copy counts. A hypothesis
/// `k` is confirmed when the repeat scan produces at least `k` offsets.
///
/// # Errors
///
/// - [`Error::NoCandidates`] if `outer_unit_count` has no divisor greater
///   than 1 (prime or at most 1).
/// - [`Error::BufferTooSmall`] if the buffer cannot hold the hypothesized
///   number of copies.
/// - [`Error::Unresolved`] if every candidate is rejected; the caller
///   decides the fallback policy.
pub fn resolve_copy_count(buffer: &[u8], outer_unit_count: u32) -> Result<Resolution> {
    let all = divisors_desc(outer_unit_count);
    if all.is_empty() {
        return Err(Error::NoCandidates(outer_unit_count));
    }
    debug!(
        "resolve_copy_count: outer_unit_count={}, candidates={:?}",
        outer_unit_count, all
    );

    let mut accumulator = EvidenceAccumulator::new();
    let mut tested: Vec<u32> = Vec::new();
    let mut candidates = all.clone();

    loop {
        let count = candidates[0];
        let evidence = repeat::find_repeats(buffer, count)?;

        if evidence.offsets.len() as u32 >= count {
            info!(
                "resolve_copy_count: confirmed {} copies of {} bytes",
                count, evidence.repeat_len
            );
            return Ok(Resolution {
                count,
                repeat_len: evidence.repeat_len,
                offsets: evidence.offsets,
            });
        }

        debug!(
            "resolve_copy_count: rejected {} copies ({} offsets)",
            count,
            evidence.offsets.len()
        );
        tested.push(count);
        accumulator.record(evidence);

        // A tested hypothesis is never retried: the repeat scan is a pure
        // function of buffer and count, so a retest reproduces the same
        // evidence. The candidate set therefore shrinks every round.
        candidates = accumulator.surviving_candidates(&all, &tested);
        if candidates.is_empty() {
            return Err(Error::Unresolved {
                tested: tested.len(),
            });
        }
        debug!("resolve_copy_count: remaining candidates={:?}", candidates);
    }
}
