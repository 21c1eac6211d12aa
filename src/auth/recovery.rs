/// Maps the trailing `v` byte of a 65-byte signature to a 0/1 recovery id.
///
/// * `27`/`28` (legacy wallet encoding) map to `0`/`1`.
/// * `0`/`1` are already recovery ids.
/// * Anything else is read as an EIP-155 `v = chain_id * 2 + 35 + id`. When the
///   implied chain id is in `1..=38` the id is `(v - 35) % 2`, otherwise `v % 2`.
///
/// The last branch is a best-effort heuristic. A `v` that does not follow one of
/// these encodings still yields an id, and recovery may then return an address
/// that is not the signer's. Callers must always compare the recovered address.
pub fn recovery_id_from_v(v: u8) -> u8 {
    match v {
        27 | 28 => v - 27,
        0 | 1 => v,
        _ => {
            // v is a single byte on the wire, so the subtraction wraps
            let offset = v.wrapping_sub(35);
            let chain_id = offset / 2;
            if chain_id > 0 && chain_id <= 38 {
                offset % 2
            } else {
                v % 2
            }
        }
    }
}
