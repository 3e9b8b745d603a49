//! The validation pipeline: parse, balances, structure, authorization,
//! signatures. Strictly sequential, the first failing step wins.

use crate::address::AddressCommitment;
use crate::authorization::{
    check_correspondence, check_signatures, rcd_signature_pairs, validate_coinbase_issuer,
};
use crate::balance::validate_balances;
use crate::crypto::{Rcd, Signature, SignatureVerifier};
use crate::entry::LedgerEntry;
use crate::error::Result;
use crate::transaction::Transaction;

/// Fully validate a transaction entry.
///
/// `issuer` is the commitment of the chain issuer's RCD; it is only
/// consulted for coinbase transactions.
///
/// This performs:
/// 1. Content parsing
/// 2. Height, emptiness, balance, coinbase and overlap rules
/// 3. External id structure
/// 4. Issuer check (coinbase) or RCD/input correspondence (otherwise)
/// 5. Signature verification
pub fn validate_transaction<'a, V>(
    entry: &'a LedgerEntry,
    issuer: &AddressCommitment,
    verifier: &V,
) -> Result<Transaction<'a>>
where
    V: SignatureVerifier + ?Sized,
{
    let (tx, pairs) = checked(entry, issuer)?;
    check_signatures(&tx, &pairs, verifier)?;
    Ok(tx)
}

/// Validate a transaction entry without signature verification.
///
/// Useful for checking structure before signature verification, or when
/// the entry is known to be valid (e.g., replayed from a trusted index).
pub fn validate_transaction_structure<'a>(
    entry: &'a LedgerEntry,
    issuer: &AddressCommitment,
) -> Result<Transaction<'a>> {
    checked(entry, issuer).map(|(tx, _)| tx)
}

/// Steps 1-4. The RCD/signature pairs are extracted once and handed back
/// for the signature step.
fn checked<'a>(
    entry: &'a LedgerEntry,
    issuer: &AddressCommitment,
) -> Result<(Transaction<'a>, Vec<(Rcd, Signature)>)> {
    let tx = Transaction::parse(entry)?;
    validate_balances(&tx)?;
    let pairs = rcd_signature_pairs(&tx)?;
    if tx.is_coinbase() {
        validate_coinbase_issuer(&tx, issuer)?;
    } else {
        check_correspondence(&tx, &pairs)?;
    }
    Ok((tx, pairs))
}
