//! Error types for the sdmemory crate.
//!
//! This module provides a unified error type for all operations in the
//! crate, using the `thiserror` crate for ergonomic error handling.
//!
//! Protocol-level failures carry the numeric exit code of the command-line
//! tools; see [`SdmError::exit_code`].

use thiserror::Error;

/// The main error type for sdmemory operations.
///
/// Most in-memory operations enforce their invariants by construction and
/// panic on programmer error (dimension mismatches between registers). This
/// enum covers the failures that are surfaced at the process boundary:
/// configuration and wire-protocol problems.
#[derive(Error, Debug)]
pub enum SdmError {
    /// Bad command line arguments or dimensions
    #[error("usage error: {0}")]
    Usage(String),

    /// A 1-based wire position outside [1, n]
    #[error("position out of range: {position} (dimension {dimension})")]
    PositionOutOfRange {
        /// The offending 1-based position as written on the wire
        position: i64,
        /// The dimension it was checked against
        dimension: usize,
    },

    /// Triple with an unrecognized query pattern (not exactly one `_`)
    #[error("invalid input")]
    InvalidTripleQuery,

    /// Bracketed input that is not a well-formed `{x, y, z}` triple
    #[error("expecting triple of the form {{x,y,z}}, found {0}")]
    MalformedTriple(String),

    /// A line that matches no command or store/query form
    #[error("unexpected input: {0}")]
    UnparseableLine(String),

    /// Dimension exceeds the tool's hard maximum
    #[error("vector dimension {requested} exceeds maximum value {max}")]
    DimensionTooLarge {
        /// Requested dimension
        requested: usize,
        /// Hard maximum
        max: usize,
    },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SdmError {
    /// The process exit code for this error.
    ///
    /// Codes follow the command-line contract: 1 usage, 2 position out of
    /// range, 3 invalid triple combination, 4 malformed bracketed input,
    /// 5 unparseable line, 20 dimension exceeds the maximum.
    pub fn exit_code(&self) -> i32 {
        match self {
            SdmError::Usage(_) => 1,
            SdmError::PositionOutOfRange { .. } => 2,
            SdmError::InvalidTripleQuery => 3,
            SdmError::MalformedTriple(_) => 4,
            SdmError::UnparseableLine(_) => 5,
            SdmError::DimensionTooLarge { .. } => 20,
            SdmError::Io(_) => 1,
        }
    }
}

/// A specialized `Result` type for sdmemory operations.
pub type Result<T> = std::result::Result<T, SdmError>;
