//! Associative memory components.
//!
//! All memories share the same storage idea: evidence for an association is
//! spread over many cells addressed by combinations of active positions,
//! and recall accumulates that evidence into a dense vector which is then
//! binarized back to a sparse result.
//!
//! # Associative stores
//!
//! - `DyadicStore` - hetero-associative `x -> y` over index pairs of `x`
//! - `TriadicStore` - triples `{x, y, z}` with recall of any one component
//! - `SparseAssociativeMemory` - dyadic variant with sparse buckets for
//!   dimensions up to 20,000
//!
//! # Stateful recurrences
//!
//! - `MonadicMemory` - auto-associative clean-up over two dyadic stores
//! - `TemporalMemory` - streaming next-step predictor
//! - `TemporalBigramEncoder` / `DeepTemporalMemory` - multi-scale n-gram
//!   prediction

pub mod deep_temporal;
pub mod dyadic;
pub mod monadic;
pub mod sparse_assoc;
pub mod temporal;
pub mod triadic;

pub use deep_temporal::{DeepTemporalMemory, TemporalBigramEncoder};
pub use dyadic::DyadicStore;
pub use monadic::MonadicMemory;
pub use sparse_assoc::{SparseAssociativeMemory, NMAX};
pub use temporal::TemporalMemory;
pub use triadic::{CellKind, TriadicStore};
