use super::types::{Direction, Transaction};
use super::utils::{hex_to_decimal_string, parse_hex_u64, strip_hex_prefix};
use crate::coin::ethereum::model::TransactionResult;
use crate::types::AppError;
use chrono::{DateTime, Utc};

/// Classifies a transaction relative to `target` (already lower-cased).
///
/// Returns `None` when neither side is the target. A self-send matches both
/// sides and is reported as `Outgoing`.
pub fn classify(from: &str, to: Option<&str>, target: &str) -> Option<Direction> {
    let is_incoming = to
        .filter(|to| !to.is_empty())
        .map_or(false, |to| to.eq_ignore_ascii_case(target));
    let is_outgoing = from.eq_ignore_ascii_case(target);

    if is_outgoing {
        Some(Direction::Outgoing)
    } else if is_incoming {
        Some(Direction::Incoming)
    } else {
        None
    }
}

/// Decodes the hex-encoded RPC fields of a matched transaction.
///
/// `fallback_block` is used when the node omits `blockNumber`.
pub fn decode_transaction(
    raw: &TransactionResult,
    hash: String,
    fallback_block: u64,
    timestamp: DateTime<Utc>,
    direction: Direction,
) -> Result<Transaction, AppError> {
    let block_number = match raw.block_number.as_deref() {
        Some(number) => parse_hex_u64(number)?,
        None => fallback_block,
    };

    let value = hex_to_decimal_string(required(&raw.value, "value", &hash)?)?;
    let gas = parse_hex_u64(required(&raw.gas, "gas", &hash)?)?;
    let gas_price = hex_to_decimal_string(required(&raw.gas_price, "gasPrice", &hash)?)?;
    let input = strip_hex_prefix(raw.input.as_deref().unwrap_or("")).to_string();

    Ok(Transaction {
        hash,
        block_number,
        from: raw.from.clone().unwrap_or_default(),
        to: raw.to.clone().filter(|to| !to.is_empty()),
        value,
        gas,
        gas_price,
        input,
        timestamp,
        direction,
    })
}

/// Classifies `raw` against `target` and decodes it when it matches.
pub fn match_transaction(
    raw: &TransactionResult,
    hash: String,
    block_number: u64,
    timestamp: DateTime<Utc>,
    target: &str,
) -> Result<Option<Transaction>, AppError> {
    let from = raw.from.as_deref().unwrap_or("");
    match classify(from, raw.to.as_deref(), target) {
        Some(direction) => decode_transaction(raw, hash, block_number, timestamp, direction).map(Some),
        None => Ok(None),
    }
}

fn required<'a>(field: &'a Option<String>, name: &str, hash: &str) -> Result<&'a str, AppError> {
    field
        .as_deref()
        .ok_or_else(|| AppError::DecodeFailed(format!("transaction {} has no {} field", hash, name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";
    const OTHER: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

    fn raw(from: &str, to: Option<&str>, input: Option<&str>) -> TransactionResult {
        TransactionResult {
            block_number: Some("0x2".to_string()),
            from: Some(from.to_string()),
            to: to.map(str::to_string),
            gas: Some("0x5208".to_string()),
            gas_price: Some("0x3b9aca00".to_string()),
            value: Some("0xde0b6b3a7640000".to_string()),
            input: input.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn classification_is_case_insensitive() {
        let checksummed = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
        assert_eq!(classify(checksummed, Some(OTHER), TARGET), Some(Direction::Outgoing));
        assert_eq!(classify(OTHER, Some(checksummed), TARGET), Some(Direction::Incoming));
        assert_eq!(classify(OTHER, Some(OTHER), TARGET), None);
    }

    #[test]
    fn self_send_is_outgoing() {
        assert_eq!(classify(TARGET, Some(TARGET), TARGET), Some(Direction::Outgoing));
    }

    #[test]
    fn contract_creation_only_matches_sender() {
        assert_eq!(classify(OTHER, None, TARGET), None);
        assert_eq!(classify(OTHER, Some(""), ""), None);
        assert_eq!(classify(TARGET, None, TARGET), Some(Direction::Outgoing));
    }

    #[test]
    fn decodes_hex_fields() {
        let tx = match_transaction(&raw(TARGET, Some(OTHER), Some("0xa9059cbb")), "0xabc".into(), 7, Utc::now(), TARGET)
            .unwrap()
            .unwrap();
        assert_eq!(tx.block_number, 2);
        assert_eq!(tx.value, "1000000000000000000");
        assert_eq!(tx.gas, 21_000);
        assert_eq!(tx.gas_price, "1000000000");
        assert_eq!(tx.input, "a9059cbb");
        assert_eq!(tx.direction, Direction::Outgoing);
    }

    #[test]
    fn empty_input_yields_empty_payload() {
        for input in [Some("0x"), Some(""), None] {
            let tx = match_transaction(&raw(OTHER, Some(TARGET), input), "0xabc".into(), 1, Utc::now(), TARGET)
                .unwrap()
                .unwrap();
            assert_eq!(tx.input, "");
        }
    }

    #[test]
    fn malformed_quantity_is_a_decode_error() {
        let mut bad = raw(TARGET, Some(OTHER), None);
        bad.value = Some("0xnothex".to_string());
        let err = match_transaction(&bad, "0xabc".into(), 1, Utc::now(), TARGET).unwrap_err();
        assert!(matches!(err, AppError::DecodeFailed(_)));
    }

    #[test]
    fn unrelated_transactions_are_not_decoded() {
        let mut bad = raw(OTHER, Some(OTHER), None);
        bad.value = None;
        assert!(match_transaction(&bad, "0xabc".into(), 1, Utc::now(), TARGET).unwrap().is_none());
    }
}
