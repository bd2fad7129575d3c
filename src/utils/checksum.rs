use crate::error::{KeyError, Result};
use crate::utils::base58::{base58_decode, base58_encode};
use crate::utils::crypto::double_sha256;

pub const CHECKSUM_LEN: usize = 4;

fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = double_sha256(payload);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

/// Base58 of `payload ++ first four bytes of sha256d(payload)`.
pub fn base58check_encode(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(payload));
    base58_encode(&data)
}

/// Decodes and verifies a Base58Check string, returning the payload without
/// its checksum.
pub fn base58check_decode(text: &str) -> Result<Vec<u8>> {
    let mut data = base58_decode(text)?;
    let split = data.len().saturating_sub(CHECKSUM_LEN);
    let claimed = data.split_off(split);
    let expected = checksum(&data);
    if claimed.as_slice() != expected.as_slice() {
        return Err(KeyError::ChecksumMismatch {
            expected,
            actual: claimed,
        });
    }
    Ok(data)
}
