//! Builder for signed transaction entries.

use bytes::Bytes;

use crate::address::AddressCommitment;
use crate::amounts::AddressAmountMap;
use crate::crypto::{Keypair, COINBASE};
use crate::entry::{ChainId, LedgerEntry};
use crate::error::Result;
use crate::transaction::TransactionData;

/// Builder for creating transaction entries.
///
/// Inputs are signed in the order they are added, and their RCD/signature
/// pairs land at external ids `2i, 2i + 1`.
pub struct TransactionBuilder {
    chain_id: ChainId,
    inputs: Vec<(AddressCommitment, u64, Keypair)>,
    outputs: Vec<(AddressCommitment, u64)>,
    height: u64,
    entry_height: Option<u64>,
    timestamp: i64,
    salt: Option<String>,
}

impl TransactionBuilder {
    /// Start building a transaction on a chain.
    pub fn new(chain_id: ChainId) -> Self {
        Self {
            chain_id,
            inputs: Vec::new(),
            outputs: Vec::new(),
            height: 0,
            entry_height: None,
            timestamp: 0,
            salt: None,
        }
    }

    /// Spend from the keypair's address.
    pub fn input(mut self, keypair: &Keypair, amount: u64) -> Self {
        self.inputs.push((keypair.commitment(), amount, keypair.clone()));
        self
    }

    /// Issue from the coinbase address, signed by the chain's issuer key.
    pub fn coinbase_input(mut self, issuer: &Keypair, amount: u64) -> Self {
        self.inputs.push((*COINBASE, amount, issuer.clone()));
        self
    }

    /// Pay to an address.
    pub fn output(mut self, address: AddressCommitment, amount: u64) -> Self {
        self.outputs.push((address, amount));
        self
    }

    /// Set the height declared in the content.
    pub fn height(mut self, height: u64) -> Self {
        self.height = height;
        self
    }

    /// Set the height the entry is recorded at. Defaults to the declared height.
    pub fn entry_height(mut self, height: u64) -> Self {
        self.entry_height = Some(height);
        self
    }

    /// Set the entry timestamp (Unix seconds).
    pub fn timestamp(mut self, ts: i64) -> Self {
        self.timestamp = ts;
        self
    }

    /// Set the salt.
    pub fn salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = Some(salt.into());
        self
    }

    /// Encode the content and sign it with every input's key.
    ///
    /// Fails if an amount is zero or an address repeats within a side.
    pub fn sign(self) -> Result<LedgerEntry> {
        let mut inputs = AddressAmountMap::new();
        for (address, amount, _) in &self.inputs {
            inputs.insert(*address, *amount)?;
        }
        let mut outputs = AddressAmountMap::new();
        for (address, amount) in &self.outputs {
            outputs.insert(*address, *amount)?;
        }

        let data = TransactionData {
            inputs,
            outputs,
            height: self.height,
            salt: self.salt,
        };

        let mut entry = LedgerEntry {
            chain_id: self.chain_id,
            content: Bytes::from(data.to_content()),
            ext_ids: Vec::with_capacity(2 * self.inputs.len()),
            height: self.entry_height.unwrap_or(self.height),
            timestamp: self.timestamp,
        };

        let message = entry.signable_payload();
        for (_, _, keypair) in &self.inputs {
            entry
                .ext_ids
                .push(Bytes::copy_from_slice(keypair.rcd().as_bytes()));
            entry
                .ext_ids
                .push(Bytes::copy_from_slice(keypair.sign(&message).as_bytes()));
        }

        Ok(entry)
    }
}
