//! Cryptographic primitives for FAT-0 transactions.
//!
//! Wraps SHA-256d commitments, type-1 RCDs and Ed25519 keys with strong
//! types. Signature checking goes through the [`SignatureVerifier`]
//! capability so the validation code never names a signature library.

use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::LazyLock;

use crate::address::AddressCommitment;
use crate::error::StructureFault;

/// The only supported RCD type: an Ed25519 public key.
pub const RCD_TYPE: u8 = 0x01;

/// Size in bytes of a type-1 RCD.
pub const RCD_SIZE: usize = 1 + PUBLIC_KEY_SIZE;

/// Size in bytes of an Ed25519 public key.
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Size in bytes of an Ed25519 signature.
pub const SIGNATURE_SIZE: usize = 64;

/// Two rounds of SHA-256.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// The coinbase marker: the commitment of the all-zero private key.
///
/// Nobody holds this key in any meaningful sense; it stands for the
/// issuance authority of a token chain.
pub static COINBASE: LazyLock<AddressCommitment> =
    LazyLock::new(|| Keypair::from_seed(&[0u8; 32]).commitment());

/// Get the coinbase marker commitment.
pub fn coinbase() -> AddressCommitment {
    *COINBASE
}

/// A 32-byte public key carried inside an RCD.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey(pub [u8; PUBLIC_KEY_SIZE]);

impl PublicKey {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", &self.to_hex()[..16])
    }
}

/// A 64-byte signature.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature(pub [u8; SIGNATURE_SIZE]);

impl Signature {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; SIGNATURE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Parse from an external id, checking its size.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, StructureFault> {
        let arr: [u8; SIGNATURE_SIZE] =
            bytes.try_into().map_err(|_| StructureFault::SignatureSize {
                expected: SIGNATURE_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({}...)", &self.to_hex()[..16])
    }
}

/// A Redeem Condition Datum: type tag followed by a public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rcd([u8; RCD_SIZE]);

impl Rcd {
    /// Build the type-1 RCD of a public key.
    pub fn from_public_key(key: &PublicKey) -> Self {
        let mut bytes = [0u8; RCD_SIZE];
        bytes[0] = RCD_TYPE;
        bytes[1..].copy_from_slice(&key.0);
        Self(bytes)
    }

    /// Parse from an external id, checking size and type tag.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, StructureFault> {
        let arr: [u8; RCD_SIZE] = bytes.try_into().map_err(|_| StructureFault::RcdSize {
            expected: RCD_SIZE,
            actual: bytes.len(),
        })?;
        if arr[0] != RCD_TYPE {
            return Err(StructureFault::RcdType {
                expected: RCD_TYPE,
                actual: arr[0],
            });
        }
        Ok(Self(arr))
    }

    /// The public key embedded in this RCD.
    pub fn public_key(&self) -> PublicKey {
        let mut key = [0u8; PUBLIC_KEY_SIZE];
        key.copy_from_slice(&self.0[1..]);
        PublicKey(key)
    }

    /// The address commitment this RCD authorizes.
    pub fn commitment(&self) -> AddressCommitment {
        AddressCommitment(sha256d(&self.0))
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; RCD_SIZE] {
        &self.0
    }
}

impl fmt::Debug for Rcd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rcd({:#04x}, {:?})", self.0[0], self.public_key())
    }
}

impl AsRef<[u8]> for Rcd {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Capability to check one signature against one public key and message.
pub trait SignatureVerifier: Send + Sync {
    /// Returns true if `signature` is valid for `message` under `public_key`.
    fn verify(&self, public_key: &PublicKey, message: &[u8], signature: &Signature) -> bool;
}

impl<F> SignatureVerifier for F
where
    F: Fn(&PublicKey, &[u8], &Signature) -> bool + Send + Sync,
{
    fn verify(&self, public_key: &PublicKey, message: &[u8], signature: &Signature) -> bool {
        self(public_key, message, signature)
    }
}

/// Ed25519 verification backed by ed25519-dalek.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Verifier;

impl SignatureVerifier for Ed25519Verifier {
    fn verify(&self, public_key: &PublicKey, message: &[u8], signature: &Signature) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(&public_key.0) else {
            return false;
        };
        let sig = ed25519_dalek::Signature::from_bytes(&signature.0);
        verifying_key.verify(message, &sig).is_ok()
    }
}

/// A keypair for signing transactions.
///
/// This wraps ed25519-dalek's SigningKey.
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let signing_key = SigningKey::generate(&mut rng);
        Self { signing_key }
    }

    /// Create from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// Get the public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.signing_key.verifying_key().to_bytes())
    }

    /// The RCD of this keypair.
    pub fn rcd(&self) -> Rcd {
        Rcd::from_public_key(&self.public_key())
    }

    /// The address commitment of this keypair.
    pub fn commitment(&self) -> AddressCommitment {
        self.rcd().commitment()
    }

    /// Sign a message.
    pub fn sign(&self, message: &[u8]) -> Signature {
        Signature(self.signing_key.sign(message).to_bytes())
    }

    /// Get the raw seed bytes (secret key material).
    pub fn seed(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair({:?})", self.public_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256d_is_double_sha256() {
        let once: [u8; 32] = Sha256::digest(b"fat0").into();
        let twice: [u8; 32] = Sha256::digest(once).into();
        assert_eq!(sha256d(b"fat0"), twice);
        assert_ne!(sha256d(b"fat0"), once);
    }

    #[test]
    fn test_keypair_sign_verify() {
        let keypair = Keypair::generate();
        let message = b"hello world";
        let signature = keypair.sign(message);

        assert!(Ed25519Verifier.verify(&keypair.public_key(), message, &signature));
        assert!(!Ed25519Verifier.verify(&keypair.public_key(), b"hello worlD", &signature));
    }

    #[test]
    fn test_rcd_layout() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let rcd = keypair.rcd();
        assert_eq!(rcd.as_bytes()[0], RCD_TYPE);
        assert_eq!(&rcd.as_bytes()[1..], keypair.public_key().as_bytes());
        assert_eq!(rcd.public_key(), keypair.public_key());
        assert_eq!(rcd.commitment(), AddressCommitment(sha256d(rcd.as_bytes())));
    }

    #[test]
    fn test_rcd_from_slice_rejects_size_and_type() {
        assert_eq!(
            Rcd::from_slice(&[RCD_TYPE; 32]),
            Err(StructureFault::RcdSize { expected: 33, actual: 32 })
        );

        let mut bytes = *Keypair::from_seed(&[1; 32]).rcd().as_bytes();
        bytes[0] = 0x02;
        assert_eq!(
            Rcd::from_slice(&bytes),
            Err(StructureFault::RcdType { expected: 0x01, actual: 0x02 })
        );
    }

    #[test]
    fn test_signature_from_slice_rejects_size() {
        assert_eq!(
            Signature::from_slice(&[0u8; 63]),
            Err(StructureFault::SignatureSize { expected: 64, actual: 63 })
        );
        assert!(Signature::from_slice(&[0u8; 64]).is_ok());
    }

    #[test]
    fn test_coinbase_is_zero_key_commitment() {
        assert_eq!(coinbase(), Keypair::from_seed(&[0u8; 32]).commitment());
        assert_eq!(coinbase(), *COINBASE);
    }

    #[test]
    fn test_closure_verifier() {
        let reject_all = |_: &PublicKey, _: &[u8], _: &Signature| false;
        let keypair = Keypair::from_seed(&[3; 32]);
        let sig = keypair.sign(b"msg");
        assert!(!reject_all.verify(&keypair.public_key(), b"msg", &sig));
    }
}
