//! Proptest generators for property-based testing.

use proptest::prelude::*;

use fat0_core::{AddressAmount, AddressAmountMap, AddressCommitment, Keypair};

/// Generate a random address commitment.
pub fn commitment() -> impl Strategy<Value = AddressCommitment> {
    any::<[u8; 32]>().prop_map(AddressCommitment::from_bytes)
}

/// Generate a random keypair.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>().prop_map(|seed| Keypair::from_seed(&seed))
}

/// Generate a valid (non-zero) amount.
pub fn amount() -> impl Strategy<Value = u64> {
    1u64..=u64::MAX
}

/// Generate a map with unique addresses and positive amounts.
pub fn address_amount_map(max_len: usize) -> impl Strategy<Value = AddressAmountMap> {
    prop::collection::hash_map(commitment(), amount(), 0..=max_len).prop_map(|entries| {
        AddressAmountMap::from_records(
            entries
                .into_iter()
                .map(|(address, amount)| AddressAmount { address, amount }),
        )
        .expect("hash map keys are unique and amounts are non-zero")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fat0_core::{validate_transaction, ChainId, Ed25519Verifier, TransactionBuilder};

    proptest! {
        #[test]
        fn test_codec_roundtrip(map in address_amount_map(12)) {
            let encoded = map.encode();
            let decoded = AddressAmountMap::decode(&encoded).unwrap();
            prop_assert_eq!(&decoded, &map);
            prop_assert!(decoded.iter().all(|aa| aa.amount > 0));
        }

        #[test]
        fn test_balanced_transfers_validate(
            sender in keypair(),
            total in 3u64..1_000_000,
            receivers in prop::collection::vec(commitment(), 1..3),
        ) {
            let mut builder = TransactionBuilder::new(ChainId::from_bytes([1; 32]))
                .input(&sender, total)
                .height(10);
            let n = receivers.len() as u64;
            for (i, receiver) in receivers.iter().enumerate() {
                let share = if i == 0 { total - (n - 1) } else { 1 };
                builder = builder.output(*receiver, share);
            }
            let entry = builder.sign().unwrap();

            let issuer = AddressCommitment::from_bytes([0; 32]);
            prop_assert!(validate_transaction(&entry, &issuer, &Ed25519Verifier).is_ok());
        }
    }
}
