use crate::types::AppError;
use alloy_primitives::U256;
use chrono::{DateTime, Utc};

/// Strips a leading `0x`/`0X`. Inputs shorter than the prefix come back unchanged.
pub fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

/// Parses a `0x`-prefixed hex quantity (block number, gas, timestamp) into a u64.
pub fn parse_hex_u64(value: &str) -> Result<u64, AppError> {
    let digits = strip_hex_prefix(value.trim());
    if digits.is_empty() {
        return Err(AppError::DecodeFailed(format!("empty hex quantity: {:?}", value)));
    }
    u64::from_str_radix(digits, 16)
        .map_err(|e| AppError::DecodeFailed(format!("invalid hex u64 {:?}: {}", value, e)))
}

/// Parses a wei-denominated hex quantity (`value`, `gasPrice`).
pub fn parse_hex_quantity(value: &str) -> Result<U256, AppError> {
    let digits = strip_hex_prefix(value.trim());
    if digits.is_empty() {
        return Err(AppError::DecodeFailed(format!("empty hex quantity: {:?}", value)));
    }
    U256::from_str_radix(digits, 16)
        .map_err(|e| AppError::DecodeFailed(format!("invalid hex quantity {:?}: {}", value, e)))
}

/// Hex quantity rendered as a base-10 string.
pub fn hex_to_decimal_string(value: &str) -> Result<String, AppError> {
    parse_hex_quantity(value).map(|quantity| quantity.to_string())
}

/// Block timestamps are hex-encoded unix seconds.
pub fn parse_hex_timestamp(value: &str) -> Result<DateTime<Utc>, AppError> {
    let seconds = parse_hex_u64(value)?;
    i64::try_from(seconds)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .ok_or_else(|| AppError::DecodeFailed(format!("timestamp out of range: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix_without_panicking_on_short_input() {
        assert_eq!(strip_hex_prefix(""), "");
        assert_eq!(strip_hex_prefix("0"), "0");
        assert_eq!(strip_hex_prefix("0x"), "");
        assert_eq!(strip_hex_prefix("0xa9059cbb"), "a9059cbb");
        assert_eq!(strip_hex_prefix("deadbeef"), "deadbeef");
    }

    #[test]
    fn parses_quantities() {
        assert_eq!(parse_hex_u64("0x5208").unwrap(), 21_000);
        assert_eq!(parse_hex_u64("0x0").unwrap(), 0);
        assert!(matches!(parse_hex_u64("0x"), Err(AppError::DecodeFailed(_))));
        assert!(matches!(parse_hex_u64("0xzz"), Err(AppError::DecodeFailed(_))));
    }

    #[test]
    fn wei_values_beyond_u128_render_in_base_ten() {
        // 1 ether
        assert_eq!(hex_to_decimal_string("0xde0b6b3a7640000").unwrap(), "1000000000000000000");
        // 2^128
        assert_eq!(
            hex_to_decimal_string("0x100000000000000000000000000000000").unwrap(),
            "340282366920938463463374607431768211456"
        );
    }

    #[test]
    fn timestamps_are_unix_seconds() {
        let ts = parse_hex_timestamp("0x5f5e1000").unwrap();
        assert_eq!(ts.timestamp(), 0x5f5e1000);
    }
}
