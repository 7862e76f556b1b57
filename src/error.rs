//! Error types for the key codec.
//!
//! This module provides the canonical error type for all encode and decode
//! operations. Failures are reported synchronously; the codec never retries
//! (encoding is deterministic and pure) and never returns partial results.

use crate::value::PassKind;
use thiserror::Error;

/// All codec errors.
///
/// The three variants form the complete failure taxonomy:
/// - [`Error::UnsupportedKind`] - encode or decode reached a value kind with
///   no registered handler (an extension kind without a supplied hook).
/// - [`Error::Malformed`] - decode encountered a structurally invalid string.
///   This is a data error: the input did not come from a correct encoder.
/// - [`Error::Invariant`] - a caller or codec bug, not malformed input: an
///   extension hook broke its tag-prefix contract, or decode reconstructed a
///   value violating kind-level well-formedness.
#[derive(Debug, Error)]
pub enum Error {
    /// No handler registered for this value kind
    #[error("unsupported kind: no {kind} handler registered")]
    UnsupportedKind {
        /// The kind that had no registered handler
        kind: PassKind,
    },

    /// Structurally invalid encoded string
    #[error("malformed encoding: {0}")]
    Malformed(String),

    /// Contract violation by a caller hook or a well-formedness failure
    #[error("invariant violation: {0}")]
    Invariant(String),
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a [`Error::Malformed`] from anything displayable.
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::Malformed(reason.into())
    }

    /// Build an [`Error::Invariant`] from anything displayable.
    pub(crate) fn invariant(reason: impl Into<String>) -> Self {
        Error::Invariant(reason.into())
    }

    /// Check if this is a malformed-input error.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::Malformed(_))
    }

    /// Check if this is an unsupported-kind error.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::UnsupportedKind { .. })
    }

    /// Check if this is a serious error (a bug, not bad input).
    pub fn is_serious(&self) -> bool {
        matches!(self, Error::Invariant(_))
    }
}
