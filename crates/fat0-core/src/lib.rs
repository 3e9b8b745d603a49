//! # FAT-0 Core
//!
//! Pure validation engine for FAT-0 token transactions.
//!
//! This crate contains no I/O, no storage, no logging. Each validation is
//! an independent computation over a caller-supplied ledger entry.
//!
//! ## Key Types
//!
//! - [`LedgerEntry`] - The immutable record carrying a transaction
//! - [`Transaction`] - Parsed view over an entry's content
//! - [`AddressAmountMap`] - Ordered inputs or outputs
//! - [`AddressCommitment`] - `sha256d` of an RCD, the account identifier
//! - [`SignatureVerifier`] - Pluggable signature check
//!
//! ## Validation
//!
//! [`validate_transaction`] runs the full fail-fast pipeline: parse,
//! balances, external id structure, authorization, signatures.

pub mod address;
pub mod amounts;
pub mod authorization;
pub mod balance;
pub mod builder;
pub mod crypto;
pub mod entry;
pub mod error;
pub mod transaction;
pub mod validation;

pub use address::AddressCommitment;
pub use amounts::{AddressAmount, AddressAmountMap};
pub use builder::TransactionBuilder;
pub use crypto::{
    coinbase, sha256d, Ed25519Verifier, Keypair, PublicKey, Rcd, Signature, SignatureVerifier,
    COINBASE,
};
pub use entry::{ChainId, EntryHash, LedgerEntry};
pub use error::{AddressError, Side, StructureFault, ValidationError};
pub use transaction::{Transaction, TransactionData, MAX_HEIGHT_DIFFERENCE};
pub use validation::{validate_transaction, validate_transaction_structure};
