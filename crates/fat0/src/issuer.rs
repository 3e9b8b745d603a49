//! Issuer key lookup for coinbase checks.

use std::collections::HashMap;

use fat0_core::{AddressCommitment, ChainId};

/// Supplies the expected issuer RCD commitment for a token chain.
pub trait IssuerKeyProvider: Send + Sync {
    /// The issuer commitment for `chain_id`, if the chain is known.
    fn issuer_commitment(&self, chain_id: &ChainId) -> Option<AddressCommitment>;
}

/// Map-backed issuer lookup.
#[derive(Debug, Clone, Default)]
pub struct StaticIssuers {
    issuers: HashMap<ChainId, AddressCommitment>,
}

impl StaticIssuers {
    /// Create an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the issuer of a chain, replacing any previous one.
    pub fn with_issuer(mut self, chain_id: ChainId, issuer: AddressCommitment) -> Self {
        self.issuers.insert(chain_id, issuer);
        self
    }

    /// Register the issuer of a chain in place.
    pub fn insert(&mut self, chain_id: ChainId, issuer: AddressCommitment) {
        self.issuers.insert(chain_id, issuer);
    }
}

impl IssuerKeyProvider for StaticIssuers {
    fn issuer_commitment(&self, chain_id: &ChainId) -> Option<AddressCommitment> {
        self.issuers.get(chain_id).copied()
    }
}

impl FromIterator<(ChainId, AddressCommitment)> for StaticIssuers {
    fn from_iter<T: IntoIterator<Item = (ChainId, AddressCommitment)>>(iter: T) -> Self {
        Self {
            issuers: iter.into_iter().collect(),
        }
    }
}
