//! Contiguous source-range planning for static work distribution.

use std::ops::Range;

/// Splits `0..total_sources` into `worker_count` contiguous half-open ranges.
///
/// The ranges cover the interval exactly once, with no gaps or overlaps, and
/// differ in length by at most 1: the first `total_sources % worker_count`
/// workers take the extra source. Every distribution policy derives its
/// assignment from this one function, so the chunk arithmetic cannot drift
/// between policies.
///
/// # Panics
///
/// Panics if `worker_count` is zero; that is a caller contract violation, not
/// a recoverable error.
#[must_use]
pub fn plan(total_sources: usize, worker_count: usize) -> Vec<Range<usize>> {
    assert!(worker_count > 0, "worker_count must be at least 1");
    let chunk = total_sources / worker_count;
    let remainder = total_sources % worker_count;

    let mut ranges = Vec::with_capacity(worker_count);
    let mut start = 0;
    for worker in 0..worker_count {
        let len = if worker < remainder { chunk + 1 } else { chunk };
        ranges.push(start..start + len);
        start += len;
    }
    ranges
}
