//! # FAT-0
//!
//! Validation of FAT-0 token transactions read from a ledger.
//!
//! ## Overview
//!
//! The pure rules live in [`fat0_core`] (re-exported as [`core`]). This
//! crate adds the collaborators around them:
//!
//! - **[`LedgerSource`]**: where entries come from ([`MemoryLedger`] in memory)
//! - **[`IssuerKeyProvider`]**: the issuer commitment of each token chain
//! - **[`TokenValidator`]**: fetches, validates and logs, per [`ValidatorConfig`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fat0::{MemoryLedger, StaticIssuers, TokenValidator, ValidatorConfig};
//! use fat0::core::{ChainId, Ed25519Verifier, Keypair, TransactionBuilder};
//!
//! async fn example() {
//!     let chain = ChainId::from_bytes([0x42; 32]);
//!     let issuer = Keypair::generate();
//!
//!     let validator = TokenValidator::new(
//!         MemoryLedger::new(),
//!         StaticIssuers::new().with_issuer(chain, issuer.commitment()),
//!         Ed25519Verifier,
//!         ValidatorConfig::default(),
//!     );
//!
//!     let alice = Keypair::generate();
//!     let entry = TransactionBuilder::new(chain)
//!         .coinbase_input(&issuer, 100)
//!         .output(alice.commitment(), 100)
//!         .height(1)
//!         .sign()
//!         .unwrap();
//!
//!     let hash = validator.ledger().insert(entry).await;
//!     let validated = validator.validate(&hash).await.unwrap();
//!     assert!(validated.transaction.is_coinbase());
//! }
//! ```

pub mod error;
pub mod issuer;
pub mod source;
pub mod validator;

pub use fat0_core as core;

pub use error::{Fat0Error, Result};
pub use issuer::{IssuerKeyProvider, StaticIssuers};
pub use source::{LedgerSource, MemoryLedger};
pub use validator::{TokenValidator, ValidatedEntry, ValidatorConfig};

// Re-export commonly used core types
pub use fat0_core::{
    AddressCommitment, ChainId, Ed25519Verifier, EntryHash, Keypair, LedgerEntry,
    SignatureVerifier, Transaction, TransactionBuilder, TransactionData, ValidationError,
};
