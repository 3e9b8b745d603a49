//! Accounting rules: height window, conservation of value, coinbase shape,
//! no self-dealing.

use crate::error::{Result, Side, ValidationError};
use crate::transaction::{Transaction, MAX_HEIGHT_DIFFERENCE};

/// Validate the transaction data against its entry.
///
/// Checks, in order:
/// - Declared height is not above the entry height and at most
///   [`MAX_HEIGHT_DIFFERENCE`] below it
/// - Inputs and outputs are both non-empty
/// - `sum(inputs) == sum(outputs)`
/// - A coinbase transaction has exactly one input
/// - No address is both an input and an output
pub fn validate_balances(tx: &Transaction<'_>) -> Result<()> {
    // 1. Height window
    let declared = tx.height();
    let entry = tx.entry.height;
    if declared > entry || entry - declared > MAX_HEIGHT_DIFFERENCE {
        return Err(ValidationError::Height {
            declared,
            entry,
            max_difference: MAX_HEIGHT_DIFFERENCE,
        });
    }

    // 2. Both sides present
    if tx.inputs().is_empty() {
        return Err(ValidationError::Empty { side: Side::Inputs });
    }
    if tx.outputs().is_empty() {
        return Err(ValidationError::Empty { side: Side::Outputs });
    }

    // 3. Conservation
    let inputs = tx.inputs().sum();
    let outputs = tx.outputs().sum();
    if inputs != outputs {
        return Err(ValidationError::Balance { inputs, outputs });
    }

    // 4. Coinbase transactions must only have one input.
    if tx.is_coinbase() && tx.inputs().len() != 1 {
        return Err(ValidationError::CoinbaseCardinality {
            inputs: tx.inputs().len(),
        });
    }

    // 5. Empty intersection; walk the shorter side.
    let (short, long) = if tx.inputs().len() <= tx.outputs().len() {
        (tx.inputs(), tx.outputs())
    } else {
        (tx.outputs(), tx.inputs())
    };
    if let Some(address) = short.addresses().find(|a| long.contains(a)) {
        return Err(ValidationError::Overlap { address: *address });
    }

    Ok(())
}
