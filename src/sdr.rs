//! Sdr - Sparse distributed representation of a binary hypervector.
//!
//! A hypervector of dimension `n` is stored as the sorted list of its active
//! positions. Typical configurations use `n = 1000` with a population of
//! 10 to 20 active bits, so the index list is far cheaper to carry around
//! than a dense bitmap, and every set operation reduces to a linear merge
//! over two sorted sequences.
//!
//! # Design
//!
//! - Indices are 0-based internally; the wire format used by the command
//!   line tools is 1-based (see [`crate::repl`])
//! - The index list is strictly increasing and in `[0, n)` at all times
//! - Mutating operations reuse the existing allocation where possible
//!
//! # Examples
//!
//! ```
//! use sdmemory::Sdr;
//!
//! let x = Sdr::from_indices(100, &[3, 17, 42]);
//! let y = Sdr::from_indices(100, &[17, 55]);
//!
//! assert_eq!(x.population(), 3);
//! assert_eq!(x.overlap(&y), 1);
//! assert_eq!(x.distance(&y), 3); // 3 + 2 - 2*1
//!
//! let mut u = Sdr::new(100);
//! u.assign_union(&x, &y);
//! assert_eq!(u.active(), &[3, 17, 42, 55]);
//! ```

use rand::seq::index::sample;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sparse binary hypervector stored as a sorted list of active positions.
///
/// The dimension `n` is fixed at construction; the population `p` is the
/// number of currently active positions and changes with every mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sdr {
    n: usize,
    active: Vec<usize>,
}

impl Sdr {
    /// Create an empty SDR of dimension `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "dimension must be > 0");
        Self {
            n,
            active: Vec::new(),
        }
    }

    /// Create an SDR from a list of 0-based indices.
    ///
    /// The indices are sorted and deduplicated. Out-of-range indices are a
    /// programming error; wire input is range-checked at the parser boundary.
    ///
    /// # Panics
    ///
    /// Panics if any index is `>= n`.
    pub fn from_indices(n: usize, indices: &[usize]) -> Self {
        let mut active = indices.to_vec();
        active.sort_unstable();
        active.dedup();
        if let Some(&last) = active.last() {
            assert!(last < n, "index {} out of range for dimension {}", last, n);
        }
        Self { n, active }
    }

    /// Dimension of the hypervector.
    #[inline(always)]
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Number of active positions.
    #[inline(always)]
    pub fn population(&self) -> usize {
        self.active.len()
    }

    /// Whether no position is active.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// The sorted active positions.
    #[inline(always)]
    pub fn active(&self) -> &[usize] {
        &self.active
    }

    /// Deactivate all positions.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Copy the active positions of `src` into `self`.
    ///
    /// Both SDRs must have the same dimension.
    pub fn assign(&mut self, src: &Sdr) {
        debug_assert_eq!(self.n, src.n, "dimension mismatch");
        self.active.clear();
        self.active.extend_from_slice(&src.active);
    }

    /// Replace the contents with `k` distinct positions drawn uniformly
    /// without replacement from `[0, n)`, stored in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `k > n`.
    pub fn randomize<R: Rng>(&mut self, k: usize, rng: &mut R) {
        assert!(k <= self.n, "population {} exceeds dimension {}", k, self.n);
        self.active = sample(rng, self.n, k).into_vec();
        self.active.sort_unstable();
    }

    /// Store the union of `x` and `y` in `self` via a linear sorted merge.
    ///
    /// All three SDRs must have the same dimension. The result population
    /// is at most `x.population() + y.population()`.
    pub fn assign_union(&mut self, x: &Sdr, y: &Sdr) {
        debug_assert_eq!(self.n, x.n, "dimension mismatch");
        debug_assert_eq!(self.n, y.n, "dimension mismatch");

        self.active.clear();
        let (a, b) = (&x.active, &y.active);
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                std::cmp::Ordering::Less => {
                    self.active.push(a[i]);
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    self.active.push(b[j]);
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    self.active.push(a[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        self.active.extend_from_slice(&a[i..]);
        self.active.extend_from_slice(&b[j..]);
    }

    /// Number of positions active in both SDRs.
    pub fn overlap(&self, other: &Sdr) -> usize {
        let (a, b) = (&self.active, &other.active);
        let (mut i, mut j, mut common) = (0, 0, 0);
        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    common += 1;
                    i += 1;
                    j += 1;
                }
            }
        }
        common
    }

    /// Hamming distance between the implicit dense bitmaps:
    /// `|x| + |y| - 2*|x ∩ y|`.
    pub fn distance(&self, other: &Sdr) -> usize {
        self.population() + other.population() - 2 * self.overlap(other)
    }

    /// Circularly shift the implicit bitmap right by one position.
    ///
    /// If the highest index is below `n-1`, every index is incremented;
    /// otherwise the index `n-1` wraps around to 0 and the remaining
    /// indices shift one slot right in the list.
    pub fn rotate_right(&mut self) {
        if self.active.is_empty() {
            return;
        }

        let p = self.active.len();
        if self.active[p - 1] < self.n - 1 {
            for a in self.active.iter_mut() {
                *a += 1;
            }
        } else {
            for i in (1..p).rev() {
                self.active[i] = self.active[i - 1] + 1;
            }
            self.active[0] = 0;
        }
    }

    /// Circularly shift the implicit bitmap left by one position.
    ///
    /// Inverse of [`rotate_right`](Self::rotate_right).
    pub fn rotate_left(&mut self) {
        if self.active.is_empty() {
            return;
        }

        let p = self.active.len();
        if self.active[0] > 0 {
            for a in self.active.iter_mut() {
                *a -= 1;
            }
        } else {
            for i in 0..p - 1 {
                self.active[i] = self.active[i + 1] - 1;
            }
            self.active[p - 1] = self.n - 1;
        }
    }

    /// Add or remove random noise.
    ///
    /// With `k > 0`, the union of `self` and a fresh random SDR of
    /// population `k` replaces `self` (added bits may coincide with active
    /// ones). With `k < 0`, a uniform random subset of size
    /// `max(0, p + k)` is retained. `k == 0` is a no-op.
    pub fn add_noise<R: Rng>(&mut self, k: i64, rng: &mut R) {
        use std::cmp::Ordering;
        match k.cmp(&0) {
            Ordering::Greater => {
                let mut extra = Sdr::new(self.n);
                extra.randomize(k as usize, rng);
                let current = std::mem::take(&mut self.active);
                let lhs = Sdr {
                    n: self.n,
                    active: current,
                };
                self.assign_union(&lhs, &extra);
            }
            Ordering::Less => {
                let keep = self.active.len().saturating_sub(k.unsigned_abs() as usize);
                let mut chosen = sample(rng, self.active.len(), keep).into_vec();
                chosen.sort_unstable();
                let kept: Vec<usize> = chosen.into_iter().map(|i| self.active[i]).collect();
                self.active = kept;
            }
            Ordering::Equal => {}
        }
    }
}

/// Formats the SDR as its 1-based wire representation: active positions in
/// ascending order separated by single spaces.
impl fmt::Display for Sdr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, a) in self.active.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", a + 1)?;
        }
        Ok(())
    }
}
