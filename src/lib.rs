//! sdmemory - Sparse distributed associative memories for binary
//! hypervectors.
//!
//! A binary hypervector of dimension `n` is represented by the sorted set
//! of its active positions (typically 10-20 out of 1000). This crate
//! provides a family of associative memories over such vectors:
//!
//! - **[`DyadicStore`]** - hetero-associative: store `x -> y`, recall `y`
//!   from `x`
//! - **[`TriadicStore`]** - ternary: store `{x, y, z}`, recall any one
//!   component from the other two
//! - **[`MonadicMemory`]** - auto-associative clean-up: map a noisy input
//!   to its stored canonical form, or admit it as new
//! - **[`TemporalMemory`]** - streaming next-step predictor built from two
//!   triadic stores
//! - **[`DeepTemporalMemory`]** - a chain of temporal bigram encoders
//!   giving multi-scale n-gram context
//! - **[`SparseAssociativeMemory`]** - dyadic variant with sparse buckets
//!   for dimensions up to 20,000
//!
//! The shared kernel is the same everywhere: writes spread evidence over
//! cells addressed by combinations of active positions, reads accumulate
//! that evidence densely and binarize the result at its top-`P` threshold
//! (ties kept).
//!
//! # Examples
//!
//! ```
//! use sdmemory::{Sdr, TriadicStore};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut store = TriadicStore::new(100, 10);
//!
//! let mut x = Sdr::new(100);
//! let mut y = Sdr::new(100);
//! let mut z = Sdr::new(100);
//! x.randomize(10, &mut rng);
//! y.randomize(10, &mut rng);
//! z.randomize(10, &mut rng);
//!
//! store.write(&x, &y, &z);
//!
//! let mut recalled = Sdr::new(100);
//! store.read_x(&mut recalled, &y, &z);
//! assert_eq!(recalled, x);
//! ```
//!
//! # Concurrency
//!
//! Every memory instance is a single owner of its backing storage and
//! state registers; operations are synchronous and compute-bound. A frozen
//! store can be read from several threads (the accumulator is per-call),
//! but concurrent mutation requires external serialization.

pub mod binarize;
pub mod encoders;
pub mod error;
pub mod memories;
pub mod repl;
pub mod sdr;

// Re-exports for convenient access
pub use binarize::binarize_into;
pub use error::{Result, SdmError};
pub use memories::{
    CellKind, DeepTemporalMemory, DyadicStore, MonadicMemory, SparseAssociativeMemory,
    TemporalBigramEncoder, TemporalMemory, TriadicStore, NMAX,
};
pub use sdr::Sdr;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_re_exports() {
        let _sdr = Sdr::new(32);
        let _result: Result<()> = Ok(());
        assert_eq!(NMAX, 20_000);
        assert!(!VERSION.is_empty());
    }
}
