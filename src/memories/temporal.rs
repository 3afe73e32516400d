//! TemporalMemory - Streaming next-step predictor over SDR sequences.
//!
//! Consumes one SDR per step and returns a prediction of the next input.
//! Two triadic stores drive the recurrence: `M1` associates a transition
//! `(x, y)` with a distributed context code `c`, and `M2` associates the
//! contextualized transition `(u, v)` with the input that followed it.
//!
//! # Algorithm
//!
//! Per step with input `inp`:
//!
//! 1. An empty input flushes `y, c, u, v, prediction` (end-of-sequence
//!    marker); the `x` register deliberately survives the flush.
//! 2. `x ← y ∨ c`, `y ← inp` advances the context: `x` carries both the
//!    previous input and its context code, which is what gives the
//!    predictor higher-order memory.
//! 3. If the previous prediction missed, the transition is written into
//!    `M2`. Well-predicted streams are therefore cheap.
//! 4. `c` is recalled from `M1`, then `u` is recalled back as a scratch
//!    probe. `u` only checks whether the recovered context confirms `x`;
//!    it is never a stored axis.
//! 5. If the probe does not confirm `x`, the transition is genuinely new:
//!    a fresh random context code is generated and written into `M1`.
//! 6. `(u, v) ← (x, y)` and the prediction is read from `M2`.
//!
//! The returned prediction borrows the internal register; the next step
//! compares it against the input that actually arrived, so callers must
//! not modify it between steps.
//!
//! # Examples
//!
//! ```
//! use sdmemory::{Sdr, TemporalMemory};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut tm = TemporalMemory::new(100, 5);
//!
//! let mut a = Sdr::new(100);
//! let mut b = Sdr::new(100);
//! a.randomize(5, &mut rng);
//! b.randomize(5, &mut rng);
//!
//! // learn the continuous cycle a -> b -> a -> b ...
//! for _ in 0..4 {
//!     tm.predict(&a);
//!     tm.predict(&b);
//! }
//!
//! // reading a now predicts b
//! assert_eq!(tm.predict(&a), &b);
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::memories::triadic::TriadicStore;
use crate::sdr::Sdr;

/// Streaming next-step predictor built from two triadic stores and six
/// persistent SDR registers.
pub struct TemporalMemory {
    m1: TriadicStore,
    m2: TriadicStore,
    x: Sdr,
    y: Sdr,
    c: Sdr,
    u: Sdr,
    v: Sdr,
    prediction: Sdr,
    p: usize,
    rng: StdRng,
}

impl TemporalMemory {
    /// Create a predictor of dimension `n` with target population `p`.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0` or `p == 0`.
    pub fn new(n: usize, p: usize) -> Self {
        Self::with_rng(n, p, StdRng::from_entropy())
    }

    /// Create a predictor with a fixed seed for reproducible tests.
    pub fn seeded(n: usize, p: usize, seed: u64) -> Self {
        Self::with_rng(n, p, StdRng::seed_from_u64(seed))
    }

    fn with_rng(n: usize, p: usize, rng: StdRng) -> Self {
        Self {
            m1: TriadicStore::new(n, p),
            m2: TriadicStore::new(n, p),
            x: Sdr::new(n),
            y: Sdr::new(n),
            c: Sdr::new(n),
            u: Sdr::new(n),
            v: Sdr::new(n),
            prediction: Sdr::new(n),
            p,
            rng,
        }
    }

    /// Dimension of the input stream.
    pub fn dimension(&self) -> usize {
        self.m1.nx()
    }

    /// Target population of predictions.
    pub fn population(&self) -> usize {
        self.p
    }

    /// The current prediction register.
    pub fn prediction(&self) -> &Sdr {
        &self.prediction
    }

    /// Advance one step with input `inp` and return the prediction of the
    /// next input.
    ///
    /// An empty input acts as an end-of-sequence marker and returns the
    /// (now empty) prediction. The returned SDR aliases the internal
    /// prediction register and must not be mutated between steps.
    pub fn predict(&mut self, inp: &Sdr) -> &Sdr {
        debug_assert_eq!(inp.dimension(), self.dimension());

        // flush state variables on a zero input, keeping x
        if inp.is_empty() {
            self.y.clear();
            self.c.clear();
            self.u.clear();
            self.v.clear();
            self.prediction.clear();
            return &self.prediction;
        }

        self.x.assign_union(&self.y, &self.c);
        self.y.assign(inp);

        if self.prediction != self.y {
            self.m2.write(&self.u, &self.v, &self.y);
        }

        self.m1.read_z(&self.x, &self.y, &mut self.c);
        self.m1.read_x(&mut self.u, &self.y, &self.c);

        if self.x.overlap(&self.u) < self.p {
            // the recovered probe does not confirm x: mint a fresh context
            // code for this transition
            self.c.randomize(self.p, &mut self.rng);
            self.m1.write(&self.x, &self.y, &self.c);
        }

        self.u.assign(&self.x);
        self.v.assign(&self.y);
        self.m2.read_z(&self.u, &self.v, &mut self.prediction);
        &self.prediction
    }
}
