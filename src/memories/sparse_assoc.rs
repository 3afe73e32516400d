//! SparseAssociativeMemory - Hetero-associative memory for dimensions up
//! to 20,000.
//!
//! The flat counter tensor of [`crate::DyadicStore`] is practical up to a
//! dimension of about a thousand; beyond that the pair buckets must be
//! sparse. Here every bucket is a sorted list of `(position, counter)`
//! cells kept in a hash map keyed by pair address, so storage grows with
//! the associations actually written rather than with `n²·n/2`.
//!
//! Two further behaviors distinguish this store from the fixed-shape
//! dyadic memory:
//!
//! - the output dimension is discovered dynamically as the largest value
//!   position stored so far, and
//! - the readout target population is the running mean of the stored value
//!   populations, rounded to the nearest integer with halves away from
//!   zero.
//!
//! This allows asymmetric use where keys and values have very different
//! sparsity.
//!
//! # Examples
//!
//! ```
//! use sdmemory::{Sdr, SparseAssociativeMemory};
//!
//! let mut memory = SparseAssociativeMemory::new(20_000);
//!
//! let x = Sdr::from_indices(20_000, &[0, 19, 194, 354, 370, 470, 602, 813, 910, 998]);
//! let y = Sdr::from_indices(20_000, &[12, 28, 40, 181, 589, 710, 713, 772, 924, 966]);
//! memory.write(&x, &y);
//!
//! let mut out = Sdr::new(20_000);
//! memory.read(&x, &mut out);
//! assert_eq!(out, y);
//! ```

use std::collections::HashMap;

use itertools::Itertools;

use crate::binarize::binarize_into;
use crate::sdr::Sdr;

/// Hard upper bound on the vector dimension.
pub const NMAX: usize = 20_000;

/// One sparse cell: a value position and its counter.
#[derive(Clone, Copy, Debug)]
struct Cell {
    position: u32,
    count: u32,
}

/// Hetero-associative memory with sparse pair buckets and a dynamic output
/// population.
pub struct SparseAssociativeMemory {
    n: usize,
    /// One past the largest value position stored so far.
    ny: usize,
    /// Running mean of stored value populations.
    mean_population: f64,
    writes: u64,
    buckets: HashMap<usize, Vec<Cell>>,
}

impl SparseAssociativeMemory {
    /// Create a memory of dimension `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n < 2` or `n > NMAX`.
    pub fn new(n: usize) -> Self {
        assert!(n >= 2, "dimension must be >= 2");
        assert!(n <= NMAX, "dimension must be <= {}", NMAX);

        Self {
            n,
            ny: 0,
            mean_population: 0.0,
            writes: 0,
            buckets: HashMap::new(),
        }
    }

    /// Vector dimension.
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Number of associations stored so far.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Current readout target population: the running mean of stored value
    /// populations rounded half away from zero.
    pub fn target_population(&self) -> usize {
        self.mean_population.round() as usize
    }

    #[inline(always)]
    fn pair_addr(i: usize, j: usize) -> usize {
        debug_assert!(i < j);
        i + j * (j - 1) / 2
    }

    /// Store the association `x -> y`.
    ///
    /// Updates the running mean population and the dynamic output width,
    /// then increments the sparse cell of every value position in every
    /// pair bucket of `x`.
    pub fn write(&mut self, x: &Sdr, y: &Sdr) {
        debug_assert_eq!(x.dimension(), self.n);
        debug_assert_eq!(y.dimension(), self.n);

        if !y.is_empty() {
            self.writes += 1;
            self.mean_population +=
                (y.population() as f64 - self.mean_population) / self.writes as f64;

            let top = y.active().last().unwrap() + 1;
            if top > self.ny {
                self.ny = top;
            }
        }

        for (&i, &j) in x.active().iter().tuple_combinations() {
            let bucket = self.buckets.entry(Self::pair_addr(i, j)).or_default();
            for &k in y.active() {
                match bucket.binary_search_by_key(&(k as u32), |cell| cell.position) {
                    Ok(pos) => bucket[pos].count += 1,
                    Err(pos) => bucket.insert(
                        pos,
                        Cell {
                            position: k as u32,
                            count: 1,
                        },
                    ),
                }
            }
        }
    }

    /// Recall the value associated with `x`, storing it in `y`.
    ///
    /// Accumulates the sparse cells of every pair bucket of `x` over the
    /// dynamic output width and keeps the top positions for the current
    /// target population. Before any write the target is zero and the
    /// result is empty.
    pub fn read(&self, x: &Sdr, y: &mut Sdr) {
        debug_assert_eq!(x.dimension(), self.n);
        debug_assert_eq!(y.dimension(), self.n);

        let mut acc = vec![0u32; self.ny];
        for (&i, &j) in x.active().iter().tuple_combinations() {
            if let Some(bucket) = self.buckets.get(&Self::pair_addr(i, j)) {
                for cell in bucket {
                    acc[cell.position as usize] += cell.count;
                }
            }
        }
        binarize_into(&acc, self.target_population(), y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_sdr(n: usize, p: usize, rng: &mut StdRng) -> Sdr {
        let mut s = Sdr::new(n);
        s.randomize(p, rng);
        s
    }

    #[test]
    fn test_round_trip_large_dimension() {
        let mut rng = StdRng::seed_from_u64(50);
        let mut memory = SparseAssociativeMemory::new(20_000);

        let x = random_sdr(20_000, 10, &mut rng);
        let y = random_sdr(20_000, 10, &mut rng);
        memory.write(&x, &y);

        let mut out = Sdr::new(20_000);
        memory.read(&x, &mut out);
        assert_eq!(out, y);
    }

    #[test]
    fn test_empty_before_any_write() {
        let mut rng = StdRng::seed_from_u64(51);
        let memory = SparseAssociativeMemory::new(1000);
        let x = random_sdr(1000, 10, &mut rng);

        let mut out = Sdr::new(1000);
        memory.read(&x, &mut out);
        assert!(out.is_empty());
        assert_eq!(memory.target_population(), 0);
    }

    #[test]
    fn test_target_population_tracks_mean() {
        let mut rng = StdRng::seed_from_u64(52);
        let mut memory = SparseAssociativeMemory::new(2000);

        // store associations with wildly different value populations
        let populations = [4usize, 8, 12, 16, 20, 24, 28, 32, 36, 40];
        for &p in &populations {
            let x = random_sdr(2000, 10, &mut rng);
            let y = random_sdr(2000, p, &mut rng);
            memory.write(&x, &y);
        }

        // mean of 4..=40 step 4 is 22
        assert_eq!(memory.target_population(), 22);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        let mut rng = StdRng::seed_from_u64(53);
        let mut memory = SparseAssociativeMemory::new(500);

        // populations 5 and 6 average to 5.5, which rounds up to 6
        let x1 = random_sdr(500, 8, &mut rng);
        let y1 = random_sdr(500, 5, &mut rng);
        let x2 = random_sdr(500, 8, &mut rng);
        let y2 = random_sdr(500, 6, &mut rng);
        memory.write(&x1, &y1);
        memory.write(&x2, &y2);

        assert_eq!(memory.target_population(), 6);
    }

    #[test]
    fn test_asymmetric_populations_recall() {
        let mut rng = StdRng::seed_from_u64(54);
        let mut memory = SparseAssociativeMemory::new(4000);

        let pairs: Vec<(Sdr, Sdr)> = (0..10)
            .map(|_| {
                let px = rng.gen_range(8..16);
                let py = rng.gen_range(8..16);
                (
                    random_sdr(4000, px, &mut rng),
                    random_sdr(4000, py, &mut rng),
                )
            })
            .collect();

        for (x, y) in &pairs {
            memory.write(x, y);
        }

        // every stored position carries the full pair count, so the top-P
        // threshold lands inside the stored set and ties recover it whole
        let mut out = Sdr::new(4000);
        for (x, y) in &pairs {
            memory.read(x, &mut out);
            assert_eq!(out, *y, "recall must recover the stored positions");
        }
    }

    #[test]
    fn test_width_tracks_highest_position() {
        let mut rng = StdRng::seed_from_u64(55);
        let mut memory = SparseAssociativeMemory::new(300);

        let x = random_sdr(300, 6, &mut rng);
        let y = Sdr::from_indices(300, &[1, 2, 299]);
        memory.write(&x, &y);
        assert_eq!(memory.writes(), 1);

        let mut out = Sdr::new(300);
        memory.read(&x, &mut out);
        assert_eq!(out, y);
    }
}
