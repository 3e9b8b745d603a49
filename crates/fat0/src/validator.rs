//! The token validator: ledger lookup, issuer lookup and the core pipeline.
//!
//! The pipeline itself is synchronous and pure. This type only adds the
//! collaborators around it and logs the outcome.

use fat0_core::{
    validate_transaction, validate_transaction_structure, ChainId, EntryHash, LedgerEntry,
    SignatureVerifier, TransactionData,
};
use tracing::{debug, warn};

use crate::error::{Fat0Error, Result};
use crate::issuer::IssuerKeyProvider;
use crate::source::LedgerSource;

/// Configuration for the validator.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Whether to verify signatures. Disable only for trusted replays.
    pub verify_signatures: bool,
    /// Log rejections at `warn` instead of `debug`.
    pub warn_on_reject: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            verify_signatures: true,
            warn_on_reject: true,
        }
    }
}

/// A validated transaction together with the entry it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEntry {
    pub hash: EntryHash,
    pub entry: LedgerEntry,
    pub transaction: TransactionData,
}

/// Validates FAT-0 transaction entries.
pub struct TokenValidator<L, I, V> {
    ledger: L,
    issuers: I,
    verifier: V,
    config: ValidatorConfig,
}

impl<L, I, V> TokenValidator<L, I, V>
where
    L: LedgerSource,
    I: IssuerKeyProvider,
    V: SignatureVerifier,
{
    /// Create a new validator.
    pub fn new(ledger: L, issuers: I, verifier: V, config: ValidatorConfig) -> Self {
        Self {
            ledger,
            issuers,
            verifier,
            config,
        }
    }

    /// Get the ledger reference.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Get the configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate an entry the caller already holds.
    pub fn validate_entry(&self, entry: &LedgerEntry) -> Result<TransactionData> {
        let issuer = self
            .issuers
            .issuer_commitment(&entry.chain_id)
            .ok_or(Fat0Error::UnknownIssuer(entry.chain_id))?;

        let result = if self.config.verify_signatures {
            validate_transaction(entry, &issuer, &self.verifier)
        } else {
            validate_transaction_structure(entry, &issuer)
        };

        let hash = entry.hash();
        match result {
            Ok(tx) => {
                debug!(
                    %hash,
                    chain = %entry.chain_id,
                    height = entry.height,
                    inputs = tx.inputs().len(),
                    outputs = tx.outputs().len(),
                    coinbase = tx.is_coinbase(),
                    "transaction accepted"
                );
                Ok(tx.into_data())
            }
            Err(e) => {
                if self.config.warn_on_reject {
                    warn!(
                        %hash,
                        chain = %entry.chain_id,
                        height = entry.height,
                        error = %e,
                        "transaction rejected"
                    );
                } else {
                    debug!(
                        %hash,
                        chain = %entry.chain_id,
                        height = entry.height,
                        error = %e,
                        "transaction rejected"
                    );
                }
                Err(e.into())
            }
        }
    }

    /// Fetch an entry from the ledger and validate it.
    pub async fn validate(&self, hash: &EntryHash) -> Result<ValidatedEntry> {
        let entry = self.fetch(hash).await?;
        self.validate_owned(*hash, entry)
    }

    async fn fetch(&self, hash: &EntryHash) -> Result<LedgerEntry> {
        self.ledger
            .get_entry(hash)
            .await?
            .ok_or(Fat0Error::EntryNotFound(*hash))
    }

    fn validate_owned(&self, hash: EntryHash, entry: LedgerEntry) -> Result<ValidatedEntry> {
        let transaction = self.validate_entry(&entry)?;
        Ok(ValidatedEntry {
            hash,
            entry,
            transaction,
        })
    }

    /// Validate each entry independently. Results keep the input order.
    pub async fn validate_batch(&self, hashes: &[EntryHash]) -> Vec<Result<ValidatedEntry>> {
        let mut results = Vec::with_capacity(hashes.len());
        for hash in hashes {
            results.push(self.validate(hash).await);
        }
        results
    }

    /// Like [`validate_batch`](Self::validate_batch), but entries recorded on
    /// any chain other than `chain_id` are rejected.
    pub async fn validate_chain(
        &self,
        chain_id: &ChainId,
        hashes: &[EntryHash],
    ) -> Vec<Result<ValidatedEntry>> {
        let mut results = Vec::with_capacity(hashes.len());
        for hash in hashes {
            let result = match self.fetch(hash).await {
                Ok(entry) if entry.chain_id != *chain_id => Err(Fat0Error::ChainMismatch {
                    expected: *chain_id,
                    actual: entry.chain_id,
                }),
                Ok(entry) => self.validate_owned(*hash, entry),
                Err(e) => Err(e),
            };
            results.push(result);
        }
        results
    }
}
