//! FAT-0 transactions: the parsed view over a ledger entry's content.
//!
//! A transaction can be a normal account transaction or a coinbase
//! transaction, depending on whether the coinbase marker is among its inputs.

use serde::Deserialize;

use crate::amounts::{AddressAmount, AddressAmountMap};
use crate::crypto::COINBASE;
use crate::entry::LedgerEntry;
use crate::error::Result;

/// Maximum allowed difference between the entry's height and the height
/// declared in its content.
pub const MAX_HEIGHT_DIFFERENCE: u64 = 3;

/// Content JSON as it appears on the wire. A repeated key is malformed.
#[derive(Deserialize)]
struct TransactionContent {
    inputs: Vec<AddressAmount>,
    outputs: Vec<AddressAmount>,
    blockheight: u64,
    #[serde(default)]
    salt: Option<String>,
}

/// The decoded fields of a transaction, independent of its entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionData {
    pub inputs: AddressAmountMap,
    pub outputs: AddressAmountMap,
    /// Height declared in the content.
    pub height: u64,
    pub salt: Option<String>,
}

impl TransactionData {
    /// Decode transaction content JSON.
    ///
    /// Performs no semantic validation beyond the address/amount list rules.
    pub fn from_content(content: &[u8]) -> Result<Self> {
        let raw: TransactionContent = serde_json::from_slice(content)?;
        Ok(Self {
            inputs: AddressAmountMap::from_records(raw.inputs)?,
            outputs: AddressAmountMap::from_records(raw.outputs)?,
            height: raw.blockheight,
            salt: raw.salt,
        })
    }

    /// Encode as content JSON. `salt` is omitted when absent.
    pub fn to_content(&self) -> Vec<u8> {
        let mut content = serde_json::json!({
            "inputs": self.inputs.to_records(),
            "outputs": self.outputs.to_records(),
            "blockheight": self.height,
        });
        if let Some(salt) = &self.salt {
            content["salt"] = serde_json::Value::from(salt.as_str());
        }
        content.to_string().into_bytes()
    }

    /// True if the coinbase marker is an input. This alone does not make
    /// the transaction a valid coinbase transaction.
    pub fn is_coinbase(&self) -> bool {
        self.inputs.contains(&COINBASE)
    }
}

/// A transaction parsed from, and borrowing, its ledger entry.
#[derive(Debug, Clone)]
pub struct Transaction<'a> {
    pub data: TransactionData,
    pub entry: &'a LedgerEntry,
}

impl<'a> Transaction<'a> {
    /// Parse the entry content as a transaction.
    pub fn parse(entry: &'a LedgerEntry) -> Result<Self> {
        let data = TransactionData::from_content(&entry.content)?;
        Ok(Self { data, entry })
    }

    pub fn inputs(&self) -> &AddressAmountMap {
        &self.data.inputs
    }

    pub fn outputs(&self) -> &AddressAmountMap {
        &self.data.outputs
    }

    /// Height declared in the content.
    pub fn height(&self) -> u64 {
        self.data.height
    }

    pub fn salt(&self) -> Option<&str> {
        self.data.salt.as_deref()
    }

    /// See [`TransactionData::is_coinbase`].
    pub fn is_coinbase(&self) -> bool {
        self.data.is_coinbase()
    }

    /// Re-encode as content JSON.
    pub fn to_content(&self) -> Vec<u8> {
        self.data.to_content()
    }

    /// Drop the entry borrow, keeping the decoded fields.
    pub fn into_data(self) -> TransactionData {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AddressCommitment;
    use crate::entry::ChainId;
    use crate::error::ValidationError;
    use bytes::Bytes;

    fn addr(b: u8) -> AddressCommitment {
        AddressCommitment::from_bytes([b; 32])
    }

    fn entry_with(content: serde_json::Value) -> LedgerEntry {
        LedgerEntry {
            chain_id: ChainId::from_bytes([0; 32]),
            content: Bytes::from(content.to_string()),
            ext_ids: vec![],
            height: 10,
            timestamp: 0,
        }
    }

    #[test]
    fn test_parse_full() {
        let entry = entry_with(serde_json::json!({
            "inputs": [{"address": addr(1).to_address(), "amount": 100}],
            "outputs": [
                {"address": addr(2).to_address(), "amount": 60},
                {"address": addr(3).to_address(), "amount": 40},
            ],
            "blockheight": 9,
            "salt": "abc",
        }));

        let tx = Transaction::parse(&entry).unwrap();
        assert_eq!(tx.inputs().get(&addr(1)), Some(100));
        assert_eq!(tx.outputs().len(), 2);
        assert_eq!(tx.height(), 9);
        assert_eq!(tx.salt(), Some("abc"));
        assert!(!tx.is_coinbase());
    }

    #[test]
    fn test_parse_without_salt() {
        let entry = entry_with(serde_json::json!({
            "inputs": [],
            "outputs": [],
            "blockheight": 1,
        }));
        let tx = Transaction::parse(&entry).unwrap();
        assert_eq!(tx.salt(), None);
        assert!(tx.inputs().is_empty());
    }

    #[test]
    fn test_parse_missing_field() {
        let entry = entry_with(serde_json::json!({
            "inputs": [],
            "outputs": [],
        }));
        assert!(matches!(
            Transaction::parse(&entry),
            Err(ValidationError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_wrong_type() {
        let entry = entry_with(serde_json::json!({
            "inputs": [],
            "outputs": [],
            "blockheight": "ten",
        }));
        assert!(matches!(
            Transaction::parse(&entry),
            Err(ValidationError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_invalid_json() {
        let mut entry = entry_with(serde_json::json!({}));
        entry.content = Bytes::from_static(b"{not json");
        assert!(matches!(
            Transaction::parse(&entry),
            Err(ValidationError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_repeated_key() {
        let mut entry = entry_with(serde_json::json!({}));
        entry.content = Bytes::from_static(
            b"{\"inputs\":[],\"outputs\":[],\"blockheight\":1,\"blockheight\":2}",
        );
        assert!(matches!(
            Transaction::parse(&entry),
            Err(ValidationError::Malformed(msg)) if msg.contains("duplicate field")
        ));
    }

    #[test]
    fn test_parse_surfaces_zero_amount() {
        let entry = entry_with(serde_json::json!({
            "inputs": [{"address": addr(1).to_address(), "amount": 0}],
            "outputs": [],
            "blockheight": 1,
        }));
        assert_eq!(
            Transaction::parse(&entry).unwrap_err(),
            ValidationError::ZeroAmount { address: addr(1) }
        );
    }

    #[test]
    fn test_coinbase_detection() {
        let entry = entry_with(serde_json::json!({
            "inputs": [{"address": COINBASE.to_address(), "amount": 50}],
            "outputs": [{"address": addr(2).to_address(), "amount": 50}],
            "blockheight": 10,
        }));
        assert!(Transaction::parse(&entry).unwrap().is_coinbase());
    }

    #[test]
    fn test_content_roundtrip() {
        let entry = entry_with(serde_json::json!({
            "inputs": [{"address": addr(1).to_address(), "amount": 5}],
            "outputs": [{"address": addr(2).to_address(), "amount": 5}],
            "blockheight": 10,
            "salt": "xyz",
        }));
        let tx = Transaction::parse(&entry).unwrap();
        let reparsed = TransactionData::from_content(&tx.to_content()).unwrap();
        assert_eq!(reparsed, tx.data);

        let mut unsalted = tx.into_data();
        unsalted.salt = None;
        let content = String::from_utf8(unsalted.to_content()).unwrap();
        assert!(!content.contains("salt"));
    }
}
