//! Crate-wide error taxonomy.
//!
//! Every fallible public operation returns `Result<T, Error>`. There is no
//! silent coercion and no partially built chain is ever handed back to a
//! caller: builders either finish or discard their in-progress state and
//! report one of these variants.

use thiserror::Error as ThisError;

/// Stable error taxonomy for top-level operations.
#[derive(Debug, Clone, ThisError, PartialEq, Eq)]
pub enum Error {
    /// Caller-supplied data did not describe a valid permutation (not a
    /// bijection on the claimed domain).
    #[error("invalid permutation: {reason}")]
    InvalidPermutation {
        /// Human-readable description of what failed to validate.
        reason: String,
    },

    /// A requested operation would need to address a point beyond what the
    /// chosen encoding can represent.
    #[error("point {point} exceeds the encoding's domain of {capacity} points")]
    DomainOverflow {
        /// Point that could not be encoded.
        point: usize,
        /// Largest point the encoding can represent.
        capacity: usize,
    },

    /// A stabilizer chain was built, but its order does not match a
    /// caller-asserted target order.
    #[error("chain order {actual} does not match asserted order {expected}")]
    IncompleteChain {
        /// Order the caller asserted.
        expected: String,
        /// Order the constructed chain actually has.
        actual: String,
    },

    /// The caller's cancellation token fired before the operation finished.
    #[error("operation cancelled")]
    Cancelled,

    /// An internal invariant was violated. This indicates a bug in this
    /// crate rather than a user error; the offending chain is discarded
    /// rather than repaired.
    #[error("internal invariant violated: {reason}")]
    InvariantViolation {
        /// Which invariant failed and where.
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Error::InvalidPermutation { reason: reason.into() }
    }

    pub(crate) fn invariant(reason: impl Into<String>) -> Self {
        Error::InvariantViolation { reason: reason.into() }
    }
}
