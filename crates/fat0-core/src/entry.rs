//! Ledger entries: the immutable records that carry transactions.
//!
//! The core only ever reads an entry. Fetching and storing entries belongs
//! to the caller.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha512};
use std::fmt;

/// A 32-byte chain identifier. Each token lives on its own chain.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChainId(pub [u8; 32]);

impl ChainId {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChainId({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A 32-byte entry identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryHash(pub [u8; 32]);

impl EntryHash {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for EntryHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryHash({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for EntryHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

/// An immutable ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Chain the entry was recorded on.
    pub chain_id: ChainId,
    /// Opaque content bytes; JSON for transactions.
    pub content: Bytes,
    /// Ordered external data. RCD/signature pairs for transactions.
    pub ext_ids: Vec<Bytes>,
    /// Block height the entry was recorded at.
    pub height: u64,
    /// Entry timestamp (Unix seconds).
    pub timestamp: i64,
}

impl LedgerEntry {
    /// Compute the entry hash: `sha256(chain_id || content || ext_ids...)`.
    pub fn hash(&self) -> EntryHash {
        let mut hasher = Sha256::new();
        hasher.update(self.chain_id.0);
        hasher.update(&self.content);
        for ext_id in &self.ext_ids {
            hasher.update(ext_id);
        }
        EntryHash(hasher.finalize().into())
    }

    /// The message every RCD/signature pair of this entry signs.
    pub fn signable_payload(&self) -> Vec<u8> {
        signable_payload(&self.chain_id, self.timestamp, &self.content)
    }
}

/// `sha512(timestamp_ascii || chain_id || content)`.
///
/// The timestamp is the decimal Unix-seconds string.
pub fn signable_payload(chain_id: &ChainId, timestamp: i64, content: &[u8]) -> Vec<u8> {
    let mut hasher = Sha512::new();
    hasher.update(timestamp.to_string().as_bytes());
    hasher.update(chain_id.0);
    hasher.update(content);
    hasher.finalize().to_vec()
}
