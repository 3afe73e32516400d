//! Top-P binarization of a dense accumulator into an SDR.
//!
//! Every memory readout accumulates integer evidence per output position and
//! then thresholds the accumulator at its `P`-th largest value. Ties at the
//! threshold are all kept, so the returned population can exceed `P`; a zero
//! threshold is promoted to 1 so positions with no evidence are never
//! returned.
//!
//! # Examples
//!
//! ```
//! use sdmemory::{binarize_into, Sdr};
//!
//! let acc = vec![0u32, 3, 1, 3, 2, 0];
//! let mut out = Sdr::new(6);
//! binarize_into(&acc, 2, &mut out);
//! assert_eq!(out.active(), &[1, 3]); // the two highest, ties preserved
//! ```

use crate::sdr::Sdr;

/// Threshold `acc` at its `target`-th largest entry and store the surviving
/// positions in `out`.
///
/// The accumulator may be shorter than `out.dimension()` when the output
/// width is discovered dynamically; positions beyond `acc.len()` are treated
/// as zero. A `target` of 0 (or an all-zero accumulator) produces the empty
/// SDR. Selection is by copy-and-sort, `O(n log n)`.
pub fn binarize_into(acc: &[u32], target: usize, out: &mut Sdr) {
    debug_assert!(
        acc.len() <= out.dimension(),
        "accumulator wider than output dimension"
    );

    if target == 0 || acc.is_empty() {
        out.clear();
        return;
    }

    let mut sorted = acc.to_vec();
    sorted.sort_unstable();

    let rank = target.min(sorted.len());
    let mut threshold = sorted[sorted.len() - rank];
    if threshold == 0 {
        threshold = 1;
    }

    let survivors: Vec<usize> = acc
        .iter()
        .enumerate()
        .filter(|(_, &v)| v >= threshold)
        .map(|(i, _)| i)
        .collect();
    *out = Sdr::from_indices(out.dimension(), &survivors);
}
