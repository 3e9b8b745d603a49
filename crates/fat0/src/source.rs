//! Ledger sources: where entries come from.
//!
//! The validator never stores entries itself. Implementations include an
//! RPC-backed source (outside this crate) and [`MemoryLedger`] for tests
//! and embedding.

use std::collections::HashMap;

use async_trait::async_trait;
use fat0_core::{EntryHash, LedgerEntry};
use tokio::sync::RwLock;

use crate::error::Result;

/// Read-only access to ledger entries.
#[async_trait]
pub trait LedgerSource: Send + Sync {
    /// Get an entry by hash. `Ok(None)` if the ledger has no such entry.
    async fn get_entry(&self, hash: &EntryHash) -> Result<Option<LedgerEntry>>;
}

/// In-memory ledger. All data is lost when it is dropped.
#[derive(Default)]
pub struct MemoryLedger {
    entries: RwLock<HashMap<EntryHash, LedgerEntry>>,
}

impl MemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry, returning its hash. Recording the same entry twice
    /// is a no-op.
    pub async fn insert(&self, entry: LedgerEntry) -> EntryHash {
        let hash = entry.hash();
        self.entries.write().await.entry(hash).or_insert(entry);
        hash
    }

    /// Number of recorded entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the ledger is empty.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl LedgerSource for MemoryLedger {
    async fn get_entry(&self, hash: &EntryHash) -> Result<Option<LedgerEntry>> {
        Ok(self.entries.read().await.get(hash).cloned())
    }
}
