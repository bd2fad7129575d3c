use super::parser::COMPRESSION_MARKER;
use super::{NetworkTag, PrivateKeyRecord, PublicKeyBytes};
use crate::capability::Ripemd160Hasher;
use crate::utils::{base58check_encode, hash160, HASH160_LEN};
use zeroize::Zeroize;

/// P2PKH address: Base58Check of `version ++ hash160(pubkey)`.
pub fn derive_address(
    pubkey: &PublicKeyBytes,
    network: NetworkTag,
    hasher: &dyn Ripemd160Hasher,
) -> String {
    let mut payload = Vec::with_capacity(1 + HASH160_LEN);
    payload.push(network.p2pkh_version());
    payload.extend_from_slice(&hash160(hasher, pubkey.as_bytes()));
    base58check_encode(&payload)
}

/// WIF encoding of a private key record.
pub fn derive_wif(record: &PrivateKeyRecord) -> String {
    let mut payload = Vec::with_capacity(2 + record.scalar().len());
    payload.push(record.network().wif_version());
    payload.extend_from_slice(record.scalar());
    if record.is_compressed() {
        payload.push(COMPRESSION_MARKER);
    }
    let wif = base58check_encode(&payload);
    payload.zeroize();
    wif
}
