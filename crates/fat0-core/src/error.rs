//! Error types for FAT-0 validation.

use thiserror::Error;

use crate::address::AddressCommitment;

/// Which side of a transaction an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Inputs,
    Outputs,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Inputs => f.write_str("inputs"),
            Side::Outputs => f.write_str("outputs"),
        }
    }
}

/// Errors from parsing a human-readable address string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("invalid base58: {0}")]
    Base58(String),

    #[error("invalid address length: expected {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("invalid address prefix: {0}")]
    Prefix(String),

    #[error("invalid address checksum")]
    Checksum,
}

/// Reasons an RCD/signature pair fails the structural check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureFault {
    #[error("insufficient external ids: expected at least {expected}, got {actual}")]
    MissingExtIds { expected: usize, actual: usize },

    #[error("invalid RCD size: expected {expected}, got {actual}")]
    RcdSize { expected: usize, actual: usize },

    #[error("invalid RCD type: expected {expected:#04x}, got {actual:#04x}")]
    RcdType { expected: u8, actual: u8 },

    #[error("invalid signature size: expected {expected}, got {actual}")]
    SignatureSize { expected: usize, actual: usize },
}

/// Validation errors for transaction content, balances and authorization.
///
/// Every variant is terminal: a transaction that fails is permanently
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("malformed transaction: {0}")]
    Malformed(String),

    #[error("invalid height: declared {declared}, entry {entry}, max difference {max_difference}")]
    Height {
        declared: u64,
        entry: u64,
        max_difference: u64,
    },

    #[error("no {side}")]
    Empty { side: Side },

    #[error("sum(inputs) != sum(outputs): {inputs} != {outputs}")]
    Balance { inputs: u128, outputs: u128 },

    #[error("invalid coinbase transaction: {inputs} inputs")]
    CoinbaseCardinality { inputs: usize },

    #[error("address {address} appears in both the inputs and the outputs")]
    Overlap { address: AddressCommitment },

    #[error("invalid RCD/signature pair {index}: {fault}")]
    Structure { index: usize, fault: StructureFault },

    #[error("no RCD for input address {address}")]
    Unauthorized { address: AddressCommitment },

    #[error("invalid issuer RCD: expected {expected}, got {actual}")]
    InvalidIssuer {
        expected: AddressCommitment,
        actual: AddressCommitment,
    },

    #[error("invalid signature at index {index}")]
    InvalidSignature { index: usize },

    #[error("invalid amount (0) for address {address}")]
    ZeroAmount { address: AddressCommitment },

    #[error("duplicate address {address}")]
    DuplicateAddress { address: AddressCommitment },
}

impl From<serde_json::Error> for ValidationError {
    fn from(e: serde_json::Error) -> Self {
        ValidationError::Malformed(e.to_string())
    }
}

impl From<AddressError> for ValidationError {
    fn from(e: AddressError) -> Self {
        ValidationError::Malformed(e.to_string())
    }
}

/// Result type for validation.
pub type Result<T> = std::result::Result<T, ValidationError>;
