//! DyadicStore - Hetero-associative memory over unordered index pairs.
//!
//! Stores associations `x -> y` and recalls `y` from `x`. Every unordered
//! pair `(i, j)` of active positions in `x` (with `i < j`) addresses one of
//! `nx*(nx-1)/2` pair buckets; each bucket holds a saturating counter per
//! output position. Recall sums the buckets of all pairs of the probe into a
//! dense accumulator and keeps the top `p_target` positions.
//!
//! The pair code is what gives the memory its capacity: each pair acts as an
//! independent micro-hash of `x`, and recall averages evidence over all of
//! them, so crosstalk between distinct stored keys stays small as long as
//! their pair sets mostly differ.
//!
//! # Storage
//!
//! Cells are `u8` counters with saturation at both bounds, which makes
//! `delete` possible (bit cells would be idempotent but cannot forget).
//! Buckets are allocated lazily on first write, so memory grows with the
//! number of distinct pairs actually stored rather than `nx²·ny/2`.
//!
//! # Examples
//!
//! ```
//! use sdmemory::{DyadicStore, Sdr};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut store = DyadicStore::new(1000, 10);
//!
//! let mut x = Sdr::new(1000);
//! let mut y = Sdr::new(1000);
//! x.randomize(10, &mut rng);
//! y.randomize(10, &mut rng);
//!
//! store.write(&x, &y);
//!
//! let mut out = Sdr::new(1000);
//! store.read(&x, &mut out);
//! assert_eq!(out, y);
//! ```

use itertools::Itertools;

use crate::binarize::binarize_into;
use crate::sdr::Sdr;

/// Hetero-associative memory storing `x -> y` over index pairs of `x`.
pub struct DyadicStore {
    nx: usize,
    ny: usize,
    p_target: usize,
    /// One bucket of `ny` counters per unordered pair, allocated on demand.
    buckets: Vec<Option<Box<[u8]>>>,
}

/// Linear address of the unordered pair `(i, j)` with `i < j`.
#[inline(always)]
fn pair_addr(i: usize, j: usize) -> usize {
    debug_assert!(i < j);
    i + j * (j - 1) / 2
}

impl DyadicStore {
    /// Create a store with equal input and output dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `n < 2` or `p_target == 0`.
    pub fn new(n: usize, p_target: usize) -> Self {
        Self::with_shape(n, n, p_target)
    }

    /// Create a store with asymmetric dimensions `nx` (keys) and `ny`
    /// (values).
    ///
    /// # Panics
    ///
    /// Panics if `nx < 2`, `ny == 0` or `p_target == 0`.
    pub fn with_shape(nx: usize, ny: usize, p_target: usize) -> Self {
        assert!(nx >= 2, "key dimension must be >= 2");
        assert!(ny > 0, "value dimension must be > 0");
        assert!(p_target > 0, "target population must be > 0");

        Self {
            nx,
            ny,
            p_target,
            buckets: (0..nx * (nx - 1) / 2).map(|_| None).collect(),
        }
    }

    /// Key dimension.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Value dimension.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Target population of recalled values.
    pub fn p_target(&self) -> usize {
        self.p_target
    }

    /// Number of pair buckets currently allocated.
    pub fn allocated_buckets(&self) -> usize {
        self.buckets.iter().filter(|b| b.is_some()).count()
    }

    /// Store the association `x -> y`.
    ///
    /// Increments the counter of every position of `y` in every pair bucket
    /// of `x`, saturating at the counter maximum. A probe with fewer than
    /// two active positions has no pairs and the call is a silent no-op, as
    /// is a write with an empty `y`.
    pub fn write(&mut self, x: &Sdr, y: &Sdr) {
        debug_assert_eq!(x.dimension(), self.nx);
        debug_assert_eq!(y.dimension(), self.ny);

        if y.is_empty() {
            return;
        }

        let ny = self.ny;
        for (&i, &j) in x.active().iter().tuple_combinations() {
            let bucket = self.buckets[pair_addr(i, j)]
                .get_or_insert_with(|| vec![0u8; ny].into_boxed_slice());
            for &k in y.active() {
                bucket[k] = bucket[k].saturating_add(1);
            }
        }
    }

    /// Remove one stored trace of the association `x -> y`.
    ///
    /// Decrements with a floor of zero; buckets never written are skipped.
    pub fn delete(&mut self, x: &Sdr, y: &Sdr) {
        debug_assert_eq!(x.dimension(), self.nx);
        debug_assert_eq!(y.dimension(), self.ny);

        for (&i, &j) in x.active().iter().tuple_combinations() {
            if let Some(bucket) = self.buckets[pair_addr(i, j)].as_mut() {
                for &k in y.active() {
                    bucket[k] = bucket[k].saturating_sub(1);
                }
            }
        }
    }

    /// Recall the value associated with `x`, storing it in `y`.
    ///
    /// Accumulates the counters of every pair bucket of `x` and keeps the
    /// `p_target` highest-evidence positions (ties included). With no
    /// stored evidence the result is empty.
    pub fn read(&self, x: &Sdr, y: &mut Sdr) {
        debug_assert_eq!(x.dimension(), self.nx);
        debug_assert_eq!(y.dimension(), self.ny);

        let mut acc = vec![0u32; self.ny];
        for (&i, &j) in x.active().iter().tuple_combinations() {
            if let Some(bucket) = self.buckets[pair_addr(i, j)].as_ref() {
                for (a, &c) in acc.iter_mut().zip(bucket.iter()) {
                    *a += c as u32;
                }
            }
        }
        binarize_into(&acc, self.p_target, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pair_addr_exhaustive_small() {
        // every unordered pair of an 8-dimensional space maps to a distinct
        // address in [0, 28)
        let n = 8;
        let mut seen = vec![false; n * (n - 1) / 2];
        for j in 1..n {
            for i in 0..j {
                let a = pair_addr(i, j);
                assert!(!seen[a], "address collision at ({}, {})", i, j);
                seen[a] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_single_association_round_trip() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut store = DyadicStore::new(200, 10);

        let mut x = Sdr::new(200);
        let mut y = Sdr::new(200);
        x.randomize(10, &mut rng);
        y.randomize(10, &mut rng);

        store.write(&x, &y);
        let mut out = Sdr::new(200);
        store.read(&x, &mut out);
        assert_eq!(out, y);
    }

    #[test]
    fn test_write_then_delete_restores_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut store = DyadicStore::new(100, 5);

        let mut x = Sdr::new(100);
        let mut y = Sdr::new(100);
        x.randomize(5, &mut rng);
        y.randomize(5, &mut rng);

        store.write(&x, &y);
        store.delete(&x, &y);

        let mut out = Sdr::new(100);
        store.read(&x, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_small_probe_is_noop() {
        let mut store = DyadicStore::new(100, 5);
        let x = Sdr::from_indices(100, &[7]);
        let y = Sdr::from_indices(100, &[1, 2, 3, 4, 5]);

        store.write(&x, &y);
        assert_eq!(store.allocated_buckets(), 0);
    }

    #[test]
    fn test_empty_value_is_noop() {
        let mut store = DyadicStore::new(100, 5);
        let x = Sdr::from_indices(100, &[1, 2, 3]);
        let y = Sdr::new(100);

        store.write(&x, &y);
        assert_eq!(store.allocated_buckets(), 0);
    }

    #[test]
    fn test_asymmetric_shape() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut store = DyadicStore::with_shape(300, 80, 6);

        let mut x = Sdr::new(300);
        let mut y = Sdr::new(80);
        x.randomize(10, &mut rng);
        y.randomize(6, &mut rng);

        store.write(&x, &y);
        let mut out = Sdr::new(80);
        store.read(&x, &mut out);
        assert_eq!(out, y);
    }

    #[test]
    fn test_counter_saturation() {
        let mut store = DyadicStore::new(10, 2);
        let x = Sdr::from_indices(10, &[0, 1]);
        let y = Sdr::from_indices(10, &[3, 4]);

        for _ in 0..300 {
            store.write(&x, &y);
        }
        // 255 writes saturate, one delete leaves the cells non-zero
        store.delete(&x, &y);

        let mut out = Sdr::new(10);
        store.read(&x, &mut out);
        assert_eq!(out, y);
    }

    #[test]
    fn test_many_associations_exact_recall() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut store = DyadicStore::new(500, 10);

        let pairs: Vec<(Sdr, Sdr)> = (0..50)
            .map(|_| {
                let mut x = Sdr::new(500);
                let mut y = Sdr::new(500);
                x.randomize(10, &mut rng);
                y.randomize(10, &mut rng);
                (x, y)
            })
            .collect();

        for (x, y) in &pairs {
            store.write(x, y);
        }

        let mut out = Sdr::new(500);
        let mut total_distance = 0;
        for (x, y) in &pairs {
            store.read(x, &mut out);
            total_distance += out.distance(y);
        }
        assert_eq!(total_distance, 0, "recall must be exact well below capacity");
    }
}
