//! MonadicMemory - Auto-associative clean-up memory.
//!
//! Maps a noisy input to a stored canonical form, or admits it as a new
//! item. Two dyadic stores are chained into a fixed-point loop: `D1` maps
//! items to hidden codes and `D2` maps hidden codes back. Iterating the
//! pair twice converges onto a stored attractor; if the attractor is close
//! to the input (Hamming distance below `p/2`) it is returned, otherwise
//! the input is novel and gets a fresh random hidden code written in both
//! directions.
//!
//! The pair of stores behaves like a denoising autoencoder; the novelty
//! test is a single distance threshold.
//!
//! # Examples
//!
//! ```
//! use sdmemory::{MonadicMemory, Sdr};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut memory = MonadicMemory::new(500, 10);
//!
//! let mut item = Sdr::new(500);
//! item.randomize(10, &mut rng);
//!
//! // first call stores the item, second call recognizes it
//! assert_eq!(memory.recall(&item).clone(), item);
//! assert_eq!(memory.recall(&item).clone(), item);
//! assert_eq!(memory.items(), 1);
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::memories::dyadic::DyadicStore;
use crate::sdr::Sdr;

/// Auto-associative clean-up memory built from two chained dyadic stores.
pub struct MonadicMemory {
    d1: DyadicStore,
    d2: DyadicStore,
    hidden: Sdr,
    result: Sdr,
    p: usize,
    items: usize,
    rng: StdRng,
}

impl MonadicMemory {
    /// Create a memory of dimension `n` with target population `p`.
    ///
    /// # Panics
    ///
    /// Panics if `n < 2` or `p == 0`.
    pub fn new(n: usize, p: usize) -> Self {
        Self::with_rng(n, p, StdRng::from_entropy())
    }

    /// Create a memory with a fixed seed for reproducible tests.
    pub fn seeded(n: usize, p: usize, seed: u64) -> Self {
        Self::with_rng(n, p, StdRng::seed_from_u64(seed))
    }

    fn with_rng(n: usize, p: usize, rng: StdRng) -> Self {
        Self {
            d1: DyadicStore::new(n, p),
            d2: DyadicStore::new(n, p),
            hidden: Sdr::new(n),
            result: Sdr::new(n),
            p,
            items: 0,
            rng,
        }
    }

    /// Dimension of stored items.
    pub fn dimension(&self) -> usize {
        self.d1.nx()
    }

    /// Target population of stored items.
    pub fn population(&self) -> usize {
        self.p
    }

    /// Number of items admitted as novel so far.
    ///
    /// Grows monotonically; an implementation statistic with no effect on
    /// recall.
    pub fn items(&self) -> usize {
        self.items
    }

    /// Map `inp` to its stored canonical form, or admit it as new.
    ///
    /// The returned SDR borrows an internal register and is valid until the
    /// next call.
    pub fn recall(&mut self, inp: &Sdr) -> &Sdr {
        debug_assert_eq!(inp.dimension(), self.dimension());

        // two passes through the loop settle onto a stored attractor
        self.d1.read(inp, &mut self.hidden);
        self.d2.read(&self.hidden, &mut self.result);
        self.d1.read(&self.result, &mut self.hidden);
        self.d2.read(&self.hidden, &mut self.result);

        if inp.distance(&self.result) < self.p / 2 {
            return &self.result;
        }

        // novel input: store it under a fresh random hidden code
        self.items += 1;
        self.result.randomize(self.p, &mut self.rng);
        self.d1.write(inp, &self.result);
        self.d2.write(&self.result, inp);
        self.result.assign(inp);
        &self.result
    }
}
