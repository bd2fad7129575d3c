//! Codec and hashing utilities
//!
//! Base58, the Base58Check envelope built on it, and the SHA-256 based
//! hash pipeline used for checksums and address fingerprints.

pub mod base58;
pub mod checksum;
pub mod crypto;

pub use base58::{base58_decode, base58_encode, ALPHABET};
pub use checksum::{base58check_decode, base58check_encode, CHECKSUM_LEN};
pub use crypto::{double_sha256, hash160, sha256_digest, HASH160_LEN};
