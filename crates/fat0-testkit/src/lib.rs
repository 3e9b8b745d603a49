//! # FAT-0 Testkit
//!
//! Testing utilities for FAT-0 validation.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: a token chain with an issuer and accounts, producing signed entries
//! - **Generators**: Proptest strategies for commitments, keys and address/amount maps
//! - **Golden vectors**: seed -> address derivations for cross-implementation checks
//!
//! ## Test Fixtures
//!
//! ```rust
//! use fat0_core::{validate_transaction, Ed25519Verifier};
//! use fat0_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::with_seed(1);
//! let entry = fixture.make_transfer(0, 1, 25, 100);
//! let issuer = fixture.issuer.commitment();
//! assert!(validate_transaction(&entry, &issuer, &Ed25519Verifier).is_ok());
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use fat0_testkit::generators::address_amount_map;
//!
//! proptest! {
//!     #[test]
//!     fn decode_inverts_encode(map in address_amount_map(8)) {
//!         let decoded = fat0_core::AddressAmountMap::decode(&map.encode()).unwrap();
//!         prop_assert_eq!(decoded, map);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::TestFixture;
pub use generators::{address_amount_map, commitment, keypair};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
