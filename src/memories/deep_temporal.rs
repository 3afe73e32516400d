//! DeepTemporalMemory - Higher-order sequence predictor built from a chain
//! of temporal bigram encoders.
//!
//! A [`TemporalBigramEncoder`] is a triadic-memory recurrence that emits a
//! distributed code for the ordered pair of its last two inputs. Chaining
//! seven of them doubles the temporal span at every stage: the first output
//! is a 2-gram code, the fourth a 4-gram (it sees 2-gram codes of 2-gram
//! codes), the seventh an 8-gram.
//!
//! The top-level store `M` is keyed by a fixed combination of chain taps,
//! `(t1 ∨ t4, t2 ∨ t7)`, which spans several temporal scales at once; the
//! same tuple is used for mis-prediction writes and for the prediction
//! readout. Whenever the previous prediction disagrees with the arriving
//! input, the transition is written under the previous step's key.
//!
//! An empty input flushes every encoder in the same pass and yields an
//! empty prediction, so streams of individual sequences can be separated by
//! zero markers exactly as with [`crate::TemporalMemory`].
//!
//! Outputs alias internal registers: the value returned by
//! [`DeepTemporalMemory::predict`] (and by each encoder) is compared
//! against the next input and must not be modified by the caller between
//! steps.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::memories::triadic::TriadicStore;
use crate::sdr::Sdr;

/// Number of chained bigram encoders.
const CHAIN_DEPTH: usize = 7;

/// Triadic-memory recurrence producing a distributed code for the ordered
/// pair of its last two inputs.
///
/// Registers `x, y, z` persist across steps: `x ← y ∨ z` folds the previous
/// input together with the previous pair code, `y` holds the current input,
/// and `z` is the recalled (or freshly minted) pair code. The `u` register
/// is a scratch probe that checks whether the recalled code confirms `x`.
pub struct TemporalBigramEncoder {
    store: TriadicStore,
    x: Sdr,
    y: Sdr,
    z: Sdr,
    u: Sdr,
    rng: StdRng,
}

impl TemporalBigramEncoder {
    /// Create an encoder of dimension `n` with target population `p`.
    pub fn new(n: usize, p: usize) -> Self {
        Self::with_rng(n, p, StdRng::from_entropy())
    }

    /// Create an encoder with a fixed seed for reproducible tests.
    pub fn seeded(n: usize, p: usize, seed: u64) -> Self {
        Self::with_rng(n, p, StdRng::seed_from_u64(seed))
    }

    fn with_rng(n: usize, p: usize, rng: StdRng) -> Self {
        Self {
            store: TriadicStore::new(n, p),
            x: Sdr::new(n),
            y: Sdr::new(n),
            z: Sdr::new(n),
            u: Sdr::new(n),
            rng,
        }
    }

    /// Dimension of the input stream.
    pub fn dimension(&self) -> usize {
        self.store.nx()
    }

    /// The current pair code register.
    pub fn output(&self) -> &Sdr {
        &self.z
    }

    /// Advance one step and return the pair code for the last two inputs.
    ///
    /// An empty input flushes the state registers. The returned SDR aliases
    /// the `z` register and must not be rewritten between steps.
    pub fn encode(&mut self, inp: &Sdr) -> &Sdr {
        debug_assert_eq!(inp.dimension(), self.dimension());

        // flush state variables if the input is zero
        if inp.is_empty() {
            self.x.clear();
            self.y.clear();
            self.z.clear();
            return &self.z;
        }

        self.x.assign_union(&self.y, &self.z);
        self.y.assign(inp);

        if self.x.is_empty() {
            return &self.z;
        }

        self.store.read_z(&self.x, &self.y, &mut self.z);
        self.store.read_x(&mut self.u, &self.y, &self.z);

        if self.x.overlap(&self.u) < self.store.px() {
            self.z.randomize(self.store.pz(), &mut self.rng);
            self.store.write(&self.x, &self.y, &self.z);
        }

        &self.z
    }
}

/// Next-step predictor combining a bigram-encoder chain with one triadic
/// store keyed across multiple temporal scales.
pub struct DeepTemporalMemory {
    m: TriadicStore,
    x: Sdr,
    y: Sdr,
    z: Sdr,
    encoders: [TemporalBigramEncoder; CHAIN_DEPTH],
}

impl DeepTemporalMemory {
    /// Create a predictor of dimension `n` with target population `p`.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0` or `p == 0`.
    pub fn new(n: usize, p: usize) -> Self {
        Self {
            m: TriadicStore::new(n, p),
            x: Sdr::new(n),
            y: Sdr::new(n),
            z: Sdr::new(n),
            encoders: std::array::from_fn(|_| TemporalBigramEncoder::new(n, p)),
        }
    }

    /// Create a predictor with fixed seeds for reproducible tests.
    pub fn seeded(n: usize, p: usize, seed: u64) -> Self {
        Self {
            m: TriadicStore::new(n, p),
            x: Sdr::new(n),
            y: Sdr::new(n),
            z: Sdr::new(n),
            encoders: std::array::from_fn(|i| {
                TemporalBigramEncoder::seeded(n, p, seed.wrapping_add(i as u64))
            }),
        }
    }

    /// Dimension of the input stream.
    pub fn dimension(&self) -> usize {
        self.m.nx()
    }

    /// The current prediction register.
    pub fn prediction(&self) -> &Sdr {
        &self.z
    }

    /// Advance one step with input `inp` and return the prediction of the
    /// next input.
    ///
    /// An empty input flushes the whole chain in this pass and returns an
    /// empty prediction. The returned SDR aliases the prediction register
    /// and must not be mutated between steps.
    pub fn predict(&mut self, inp: &Sdr) -> &Sdr {
        debug_assert_eq!(inp.dimension(), self.dimension());

        // prediction not correct? store the transition under the previous
        // step's key
        if self.z != *inp {
            self.m.write(&self.x, &self.y, inp);
        }

        // bigram encoding chain: each stage doubles the temporal span
        self.encoders[0].encode(inp);
        for i in 1..CHAIN_DEPTH {
            let (head, tail) = self.encoders.split_at_mut(i);
            let code = head[i - 1].output();
            tail[0].encode(code);
        }

        // readout keyed by 2-, 4- and 8-gram taps of the chain
        self.x
            .assign_union(self.encoders[0].output(), self.encoders[3].output());
        self.y
            .assign_union(self.encoders[1].output(), self.encoders[6].output());
        self.m.read_z(&self.x, &self.y, &mut self.z);
        &self.z
    }
}
