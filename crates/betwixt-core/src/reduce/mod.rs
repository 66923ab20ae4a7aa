//! Reduction of per-worker partial centrality vectors.
//!
//! Each worker accumulates into a private buffer during computation; the
//! final result is the element-wise sum of those buffers, halved once. The
//! summation happens after all workers are done, so the hot loop never
//! synchronizes.

/// Adds `partial` element-wise into `acc`.
///
/// # Panics
///
/// Panics if the slices differ in length; partial vectors always span the
/// whole graph.
pub fn combine(acc: &mut [f64], partial: &[f64]) {
    assert_eq!(acc.len(), partial.len(), "partial vector length mismatch");
    for (total, value) in acc.iter_mut().zip(partial) {
        *total += value;
    }
}

/// Sums equal-length partial vectors into one vector of length `nodes`.
#[must_use]
pub fn sum(partials: &[Vec<f64>], nodes: usize) -> Vec<f64> {
    let mut acc = vec![0.0; nodes];
    for partial in partials {
        combine(&mut acc, partial);
    }
    acc
}

/// Halves every entry, collapsing the once-per-endpoint double count.
///
/// Each undirected shortest path is discovered and scored once from each of
/// its endpoints, so the raw reduced sum is exactly twice the centrality.
pub fn finalize(acc: &mut [f64]) {
    for value in acc.iter_mut() {
        *value /= 2.0;
    }
}
