//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use fat0::{MemoryLedger, StaticIssuers, TokenValidator, ValidatorConfig};
use fat0_core::{
    AddressCommitment, ChainId, Ed25519Verifier, Keypair, LedgerEntry, TransactionBuilder,
};

/// Fixed timestamp for deterministic entries (2025-01-14T16:00:00Z).
pub const TIMESTAMP: i64 = 1_736_870_400;

/// A token chain with an issuer and a handful of funded-looking accounts.
pub struct TestFixture {
    pub chain_id: ChainId,
    pub issuer: Keypair,
    pub accounts: Vec<Keypair>,
}

impl TestFixture {
    /// Create a fixture with random keys.
    pub fn new() -> Self {
        Self {
            chain_id: ChainId::from_bytes(rand::random()),
            issuer: Keypair::generate(),
            accounts: (0..4).map(|_| Keypair::generate()).collect(),
        }
    }

    /// Create with deterministic keys derived from one byte.
    pub fn with_seed(seed: u8) -> Self {
        let key = |i: u8| {
            let mut bytes = [seed; 32];
            bytes[0] = i;
            Keypair::from_seed(&bytes)
        };
        Self {
            chain_id: ChainId::from_bytes([seed; 32]),
            issuer: key(0xff),
            accounts: (0..4).map(key).collect(),
        }
    }

    /// Commitment of account `i`.
    pub fn address(&self, i: usize) -> AddressCommitment {
        self.accounts[i].commitment()
    }

    /// Issuer lookup containing this fixture's chain.
    pub fn issuers(&self) -> StaticIssuers {
        StaticIssuers::new().with_issuer(self.chain_id, self.issuer.commitment())
    }

    /// A validator over an empty in-memory ledger.
    pub fn validator(
        &self,
        config: ValidatorConfig,
    ) -> TokenValidator<MemoryLedger, StaticIssuers, Ed25519Verifier> {
        TokenValidator::new(MemoryLedger::new(), self.issuers(), Ed25519Verifier, config)
    }

    /// Start a transaction on this chain at `height`, recorded at the same height.
    pub fn builder(&self, height: u64) -> TransactionBuilder {
        TransactionBuilder::new(self.chain_id)
            .height(height)
            .timestamp(TIMESTAMP)
    }

    /// A signed coinbase issuing `amount` to account `to`.
    pub fn make_coinbase(&self, to: usize, amount: u64, height: u64) -> LedgerEntry {
        self.builder(height)
            .coinbase_input(&self.issuer, amount)
            .output(self.address(to), amount)
            .sign()
            .expect("fixture coinbase is well-formed")
    }

    /// A signed transfer of `amount` from account `from` to account `to`.
    pub fn make_transfer(&self, from: usize, to: usize, amount: u64, height: u64) -> LedgerEntry {
        self.builder(height)
            .input(&self.accounts[from], amount)
            .output(self.address(to), amount)
            .sign()
            .expect("fixture transfer is well-formed")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
