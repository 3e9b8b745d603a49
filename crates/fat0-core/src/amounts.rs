//! Address/amount lists: the `inputs` and `outputs` of a transaction.
//!
//! On the wire these are JSON arrays of `{"address": ..., "amount": ...}`
//! records. Internally they are an [`AddressAmountMap`], which has unique
//! keys and non-zero amounts but keeps the declaration order, because input
//! `i` pairs with the RCD/signature at external ids `2i` and `2i + 1`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::address::AddressCommitment;
use crate::error::{Result, ValidationError};

/// One wire record of an inputs or outputs list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressAmount {
    pub address: AddressCommitment,
    pub amount: u64,
}

/// Ordered map from address commitment to a positive amount.
#[derive(Debug, Clone, Default)]
pub struct AddressAmountMap {
    entries: Vec<AddressAmount>,
    index: HashMap<AddressCommitment, usize>,
}

impl AddressAmountMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from wire records, rejecting zero amounts and duplicates.
    pub fn from_records(records: impl IntoIterator<Item = AddressAmount>) -> Result<Self> {
        let mut map = Self::new();
        for record in records {
            map.insert(record.address, record.amount)?;
        }
        Ok(map)
    }

    /// Decode a JSON array of address/amount records.
    pub fn decode(json: &str) -> Result<Self> {
        let records: Vec<AddressAmount> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Encode as a JSON array in declaration order.
    pub fn encode(&self) -> String {
        serde_json::Value::from(self.to_records()).to_string()
    }

    /// Wire records in declaration order. Zero amounts are skipped.
    pub fn to_records(&self) -> Vec<serde_json::Value> {
        self.entries
            .iter()
            .filter(|aa| aa.amount != 0)
            .map(|aa| {
                serde_json::json!({
                    "address": aa.address.to_address(),
                    "amount": aa.amount,
                })
            })
            .collect()
    }

    /// Append an entry.
    pub fn insert(&mut self, address: AddressCommitment, amount: u64) -> Result<()> {
        if amount == 0 {
            return Err(ValidationError::ZeroAmount { address });
        }
        if self.index.contains_key(&address) {
            return Err(ValidationError::DuplicateAddress { address });
        }
        self.index.insert(address, self.entries.len());
        self.entries.push(AddressAmount { address, amount });
        Ok(())
    }

    /// Amount for an address, if present.
    pub fn get(&self, address: &AddressCommitment) -> Option<u64> {
        self.index.get(address).map(|&i| self.entries[i].amount)
    }

    /// Whether the address is a key of this map.
    pub fn contains(&self, address: &AddressCommitment) -> bool {
        self.index.contains_key(address)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all amounts. Widened so that no sum of `u64`s overflows.
    pub fn sum(&self) -> u128 {
        self.entries.iter().map(|aa| u128::from(aa.amount)).sum()
    }

    /// Addresses in declaration order.
    pub fn addresses(&self) -> impl Iterator<Item = &AddressCommitment> + '_ {
        self.entries.iter().map(|aa| &aa.address)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &AddressAmount> + '_ {
        self.entries.iter()
    }
}

/// Equality is set equality over (address, amount) pairs.
impl PartialEq for AddressAmountMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|aa| other.get(&aa.address) == Some(aa.amount))
    }
}

impl Eq for AddressAmountMap {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn addr(b: u8) -> AddressCommitment {
        AddressCommitment::from_bytes([b; 32])
    }

    fn records_json(records: &[(AddressCommitment, u64)]) -> String {
        let values: Vec<_> = records
            .iter()
            .map(|(a, amount)| serde_json::json!({"address": a.to_address(), "amount": amount}))
            .collect();
        serde_json::Value::from(values).to_string()
    }

    #[test]
    fn test_decode_valid() {
        let json = records_json(&[(addr(1), 10), (addr(2), 20)]);
        let map = AddressAmountMap::decode(&json).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&addr(1)), Some(10));
        assert_eq!(map.get(&addr(2)), Some(20));
        assert_eq!(map.sum(), 30);
    }

    #[test]
    fn test_decode_zero_amount() {
        let json = records_json(&[(addr(1), 0)]);
        assert_eq!(
            AddressAmountMap::decode(&json),
            Err(ValidationError::ZeroAmount { address: addr(1) })
        );
    }

    #[test]
    fn test_decode_duplicate_address() {
        let json = records_json(&[(addr(1), 1), (addr(1), 2)]);
        assert_eq!(
            AddressAmountMap::decode(&json),
            Err(ValidationError::DuplicateAddress { address: addr(1) })
        );
    }

    #[test]
    fn test_decode_malformed() {
        assert!(matches!(
            AddressAmountMap::decode("{\"address\": 1}"),
            Err(ValidationError::Malformed(_))
        ));
        assert!(matches!(
            AddressAmountMap::decode("[{\"address\": \"FAnope\", \"amount\": 1}]"),
            Err(ValidationError::Malformed(_))
        ));
        assert!(matches!(
            AddressAmountMap::decode(&format!(
                "[{{\"address\": \"{}\", \"amount\": -1}}]",
                addr(1).to_address()
            )),
            Err(ValidationError::Malformed(_))
        ));
    }

    #[test]
    fn test_declaration_order_preserved() {
        let json = records_json(&[(addr(9), 1), (addr(1), 2), (addr(5), 3)]);
        let map = AddressAmountMap::decode(&json).unwrap();
        let order: Vec<_> = map.addresses().copied().collect();
        assert_eq!(order, vec![addr(9), addr(1), addr(5)]);
        assert_eq!(map.encode(), json);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = AddressAmountMap::decode(&records_json(&[(addr(1), 1), (addr(2), 2)])).unwrap();
        let b = AddressAmountMap::decode(&records_json(&[(addr(2), 2), (addr(1), 1)])).unwrap();
        assert_eq!(a, b);

        let c = AddressAmountMap::decode(&records_json(&[(addr(2), 3), (addr(1), 1)])).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_sum_does_not_overflow() {
        let mut map = AddressAmountMap::new();
        map.insert(addr(1), u64::MAX).unwrap();
        map.insert(addr(2), u64::MAX).unwrap();
        assert_eq!(map.sum(), 2 * u128::from(u64::MAX));
    }

    proptest! {
        #[test]
        fn test_encode_decode_roundtrip(
            entries in prop::collection::hash_map(any::<[u8; 32]>(), 1u64..=u64::MAX, 0..16)
        ) {
            let mut map = AddressAmountMap::new();
            for (bytes, amount) in &entries {
                map.insert(AddressCommitment::from_bytes(*bytes), *amount).unwrap();
            }

            let zero = r#""amount":0}"#;
            let encoded = map.encode();
            prop_assert!(!encoded.contains(zero), "encode emitted a zero amount");
            let decoded = AddressAmountMap::decode(&encoded).unwrap();
            prop_assert_eq!(decoded, map);
        }
    }
}
