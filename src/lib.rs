//! # keyconv - Bitcoin private key conversion
//!
//! Takes a private key as 64 hex characters or as WIF and produces the
//! normalized scalar, its public key, the P2PKH address and the WIF
//! re-encoding for the requested network and compression.
//!
//! ## How the code is organized
//! - `utils/`: Base58, the Base58Check envelope and the SHA-256/RIPEMD-160 hash pipeline
//! - `keys/`: network version bytes, format detection, address and WIF producers
//! - `capability/`: RIPEMD-160, secp256k1 and entropy behind injectable traits
//! - `wallet/`: the parse, override, derive pipeline that produces a `KeyReport`
//! - `config/`: environment-driven settings for the CLI
//! - `cli/`: argument parsing and output rendering
//!
//! ## Reading order
//! 1. `utils/base58.rs` and `utils/checksum.rs` for the wire format
//! 2. `keys/parser.rs` for how input is classified
//! 3. `wallet/derive.rs` for the end-to-end flow
//!
//! Curve math and RIPEMD-160 are never called directly outside
//! `capability/`, so everything above it can be tested with stand-ins.

pub mod capability;
pub mod cli;
pub mod config;
pub mod error;
pub mod keys;
pub mod utils;
pub mod wallet;

// Re-export commonly used types for convenience
pub use capability::{
    Capabilities, EntropySource, PublicKeyDeriver, Ripemd160Hasher, DEFAULT_CAPABILITIES,
};
pub use cli::{Command, Opt};
pub use config::{Config, GLOBAL_CONFIG};
pub use error::{KeyError, Result};
pub use keys::{
    derive_address, derive_wif, detect_format, parse_private_key, KeyFormat, KeyOverrides,
    NetworkTag, PrivateKeyRecord, PublicKeyBytes,
};
pub use utils::{
    base58_decode, base58_encode, base58check_decode, base58check_encode, double_sha256, hash160,
    sha256_digest,
};
pub use wallet::{derive_full_record, generate_full_record, KeyReport};
