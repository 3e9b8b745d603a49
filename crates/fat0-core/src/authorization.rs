//! Authorization: RCD/signature pairs in the entry's external ids.
//!
//! Input `i` is paired with the RCD at external id `2i` and the signature
//! at `2i + 1`, in the declaration order of the inputs.

use std::collections::HashSet;

use crate::address::AddressCommitment;
use crate::crypto::{sha256d, Rcd, Signature, SignatureVerifier};
use crate::error::{Result, StructureFault, ValidationError};
use crate::transaction::Transaction;

/// Extract one RCD/signature pair per input, checking sizes and RCD type.
pub fn rcd_signature_pairs(tx: &Transaction<'_>) -> Result<Vec<(Rcd, Signature)>> {
    let n = tx.inputs().len();
    let ext_ids = &tx.entry.ext_ids;
    if ext_ids.len() < 2 * n {
        return Err(ValidationError::Structure {
            index: ext_ids.len() / 2,
            fault: StructureFault::MissingExtIds {
                expected: 2 * n,
                actual: ext_ids.len(),
            },
        });
    }

    (0..n)
        .map(|index| {
            let structure = |fault| ValidationError::Structure { index, fault };
            let rcd = Rcd::from_slice(&ext_ids[2 * index]).map_err(structure)?;
            let sig = Signature::from_slice(&ext_ids[2 * index + 1]).map_err(structure)?;
            Ok((rcd, sig))
        })
        .collect()
}

/// Validate the shape of the external ids. Does not check that RCDs match
/// inputs, nor that signatures verify.
pub fn validate_structure(tx: &Transaction<'_>) -> Result<()> {
    rcd_signature_pairs(tx).map(|_| ())
}

/// Every input address must be the commitment of some supplied RCD.
///
/// RCDs may come in any order relative to the inputs.
pub fn validate_correspondence(tx: &Transaction<'_>) -> Result<()> {
    check_correspondence(tx, &rcd_signature_pairs(tx)?)
}

/// [`validate_correspondence`] over pairs already extracted from `tx`.
pub(crate) fn check_correspondence(
    tx: &Transaction<'_>,
    pairs: &[(Rcd, Signature)],
) -> Result<()> {
    let supplied: HashSet<AddressCommitment> =
        pairs.iter().map(|(rcd, _)| rcd.commitment()).collect();

    match tx.inputs().addresses().find(|a| !supplied.contains(*a)) {
        Some(address) => Err(ValidationError::Unauthorized { address: *address }),
        None => Ok(()),
    }
}

/// For a coinbase transaction, the first external id must be the RCD of the
/// chain's issuer.
pub fn validate_coinbase_issuer(tx: &Transaction<'_>, issuer: &AddressCommitment) -> Result<()> {
    let first = tx.entry.ext_ids.first().ok_or(ValidationError::Structure {
        index: 0,
        fault: StructureFault::MissingExtIds {
            expected: 2,
            actual: 0,
        },
    })?;

    let actual = AddressCommitment(sha256d(first));
    if actual != *issuer {
        return Err(ValidationError::InvalidIssuer {
            expected: *issuer,
            actual,
        });
    }
    Ok(())
}

/// Verify every signature against the entry's signable payload.
pub fn validate_signatures<V>(tx: &Transaction<'_>, verifier: &V) -> Result<()>
where
    V: SignatureVerifier + ?Sized,
{
    check_signatures(tx, &rcd_signature_pairs(tx)?, verifier)
}

/// [`validate_signatures`] over pairs already extracted from `tx`.
pub(crate) fn check_signatures<V>(
    tx: &Transaction<'_>,
    pairs: &[(Rcd, Signature)],
    verifier: &V,
) -> Result<()>
where
    V: SignatureVerifier + ?Sized,
{
    let message = tx.entry.signable_payload();
    for (index, (rcd, sig)) in pairs.iter().enumerate() {
        if !verifier.verify(&rcd.public_key(), &message, sig) {
            return Err(ValidationError::InvalidSignature { index });
        }
    }
    Ok(())
}
