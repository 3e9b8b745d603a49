//! Address commitments and their human-readable Factoid address form.
//!
//! An address commitment is `sha256d(RCD)`. Its string form is
//! `base58(0x5f 0xb1 || commitment || checksum)`, where the checksum is the
//! first four bytes of `sha256d` over the prefix and commitment. Every such
//! string starts with `FA`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::crypto::sha256d;
use crate::error::AddressError;

/// Prefix bytes of a Factoid address.
pub const ADDRESS_PREFIX: [u8; 2] = [0x5f, 0xb1];

const CHECKSUM_SIZE: usize = 4;
const DECODED_SIZE: usize = ADDRESS_PREFIX.len() + 32 + CHECKSUM_SIZE;

/// A 32-byte address commitment: the double SHA-256 hash of an RCD.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AddressCommitment(pub [u8; 32]);

impl AddressCommitment {
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

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Encode as a human-readable Factoid address (`FA...`).
    pub fn to_address(&self) -> String {
        let mut raw = Vec::with_capacity(DECODED_SIZE);
        raw.extend_from_slice(&ADDRESS_PREFIX);
        raw.extend_from_slice(&self.0);
        let checksum = sha256d(&raw);
        raw.extend_from_slice(&checksum[..CHECKSUM_SIZE]);
        bs58::encode(raw).into_string()
    }

    /// Parse a human-readable Factoid address.
    pub fn from_address(s: &str) -> Result<Self, AddressError> {
        let raw = bs58::decode(s)
            .into_vec()
            .map_err(|e| AddressError::Base58(e.to_string()))?;
        if raw.len() != DECODED_SIZE {
            return Err(AddressError::Length {
                expected: DECODED_SIZE,
                actual: raw.len(),
            });
        }
        if raw[..2] != ADDRESS_PREFIX {
            return Err(AddressError::Prefix(hex::encode(&raw[..2])));
        }

        let (body, checksum) = raw.split_at(DECODED_SIZE - CHECKSUM_SIZE);
        if sha256d(body)[..CHECKSUM_SIZE] != *checksum {
            return Err(AddressError::Checksum);
        }

        let mut arr = [0u8; 32];
        arr.copy_from_slice(&body[2..]);
        Ok(Self(arr))
    }
}

impl fmt::Debug for AddressCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AddressCommitment({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for AddressCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_address())
    }
}

impl FromStr for AddressCommitment {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_address(s)
    }
}

impl AsRef<[u8]> for AddressCommitment {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for AddressCommitment {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Serialize for AddressCommitment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_address())
    }
}

impl<'de> Deserialize<'de> for AddressCommitment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_address(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_string_roundtrip() {
        let commitment = AddressCommitment::from_bytes([0x42; 32]);
        let address = commitment.to_address();
        assert!(address.starts_with("FA"));
        assert_eq!(AddressCommitment::from_address(&address).unwrap(), commitment);
    }

    #[test]
    fn test_address_bad_checksum() {
        let commitment = AddressCommitment::from_bytes([0x07; 32]);
        let mut raw = bs58::decode(commitment.to_address()).into_vec().unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0x01;
        let tampered = bs58::encode(raw).into_string();

        assert_eq!(
            AddressCommitment::from_address(&tampered),
            Err(AddressError::Checksum)
        );
    }

    #[test]
    fn test_address_bad_prefix() {
        let mut raw = vec![0x00, 0x01];
        raw.extend_from_slice(&[0x11; 32]);
        let checksum = sha256d(&raw);
        raw.extend_from_slice(&checksum[..4]);
        let address = bs58::encode(raw).into_string();

        assert!(matches!(
            AddressCommitment::from_address(&address),
            Err(AddressError::Prefix(_))
        ));
    }

    #[test]
    fn test_address_bad_length() {
        let address = bs58::encode([0x5f, 0xb1, 0x00]).into_string();
        assert!(matches!(
            AddressCommitment::from_address(&address),
            Err(AddressError::Length { expected: 38, actual: 3 })
        ));
    }

    #[test]
    fn test_address_not_base58() {
        assert!(matches!(
            AddressCommitment::from_address("FA0OIl"),
            Err(AddressError::Base58(_))
        ));
    }

    #[test]
    fn test_address_serde() {
        let commitment = AddressCommitment::from_bytes([0xab; 32]);
        let json = serde_json::to_string(&commitment).unwrap();
        assert_eq!(json, format!("\"{}\"", commitment.to_address()));
        let back: AddressCommitment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, commitment);
    }

    #[test]
    fn test_commitment_hex_roundtrip() {
        let commitment = AddressCommitment::from_bytes([0xcd; 32]);
        let recovered = AddressCommitment::from_hex(&commitment.to_hex()).unwrap();
        assert_eq!(commitment, recovered);
    }
}
