//! Error types for the token validator.

use fat0_core::{ChainId, EntryHash, ValidationError};
use thiserror::Error;

/// Errors that can occur while validating entries from a ledger.
#[derive(Debug, Error)]
pub enum Fat0Error {
    /// The transaction itself is invalid.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The ledger has no entry with this hash.
    #[error("entry not found: {0}")]
    EntryNotFound(EntryHash),

    /// No issuer key is known for the chain.
    #[error("unknown issuer for chain {0}")]
    UnknownIssuer(ChainId),

    /// The entry belongs to a different chain than the one being validated.
    #[error("chain mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: ChainId, actual: ChainId },

    /// The ledger source failed. [`LedgerSource`](crate::LedgerSource)
    /// implementations backed by a node or database report their failures
    /// here; the entry was not judged.
    #[error("ledger source error: {0}")]
    Source(String),
}

impl Fat0Error {
    /// Whether the entry was judged and rejected, as opposed to not judged.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Fat0Error::Validation(_) | Fat0Error::ChainMismatch { .. })
    }
}

/// Result type for validator operations.
pub type Result<T> = std::result::Result<T, Fat0Error>;
