use super::recovery::recovery_id_from_v;
use crate::types::AppError;
use alloy_primitives::{keccak256, Address, Signature, B256, U256};

/// Prefix wallets prepend before hashing a `personal_sign` message.
pub const PERSONAL_MESSAGE_PREFIX: &str = "\x19Ethereum Signed Message:\n";

/// r (32) || s (32) || v (1)
pub const SIGNATURE_LENGTH: usize = 65;

/// Recovers the checksummed address that signed `message` with `signature`.
///
/// `signature` is hex, with or without a `0x` prefix. No public key is needed;
/// whether the recovered address is acceptable is up to the caller, see
/// [`matches_claimed_address`].
pub fn verify(message: &str, signature: &str) -> Result<String, AppError> {
    let raw = decode_signature(signature)?;
    let digest = personal_message_hash(message);
    let address = recover_address(&digest, &raw)?;
    Ok(address.to_checksum(None))
}

/// keccak256("\x19Ethereum Signed Message:\n" || len(message) || message)
pub fn personal_message_hash(message: &str) -> B256 {
    let bytes = message.as_bytes();
    let prefix = format!("{}{}", PERSONAL_MESSAGE_PREFIX, bytes.len());
    keccak256([prefix.as_bytes(), bytes].concat())
}

pub fn decode_signature(signature: &str) -> Result<[u8; SIGNATURE_LENGTH], AppError> {
    let trimmed = signature.trim();
    let hex_part = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let bytes = hex::decode(hex_part).map_err(|e| AppError::MalformedSignature(e.to_string()))?;

    <[u8; SIGNATURE_LENGTH]>::try_from(bytes.as_slice())
        .map_err(|_| AppError::InvalidSignatureLength(bytes.len()))
}

/// secp256k1 public key recovery from a prehashed digest.
pub fn recover_address(digest: &B256, raw: &[u8; SIGNATURE_LENGTH]) -> Result<Address, AppError> {
    let r = U256::from_be_slice(&raw[..32]);
    let s = U256::from_be_slice(&raw[32..64]);
    let recovery_id = recovery_id_from_v(raw[64]);

    Signature::new(r, s, recovery_id == 1)
        .recover_address_from_prehash(digest)
        .map_err(|e| AppError::RecoveryFailed(e.to_string()))
}

/// Case-insensitive address comparison.
pub fn matches_claimed_address(recovered: &str, claimed: &str) -> bool {
    recovered.trim().eq_ignore_ascii_case(claimed.trim())
}
