//! Private key formats
//!
//! Parsing of raw hex and WIF input into a normalized record, and the
//! producers for P2PKH addresses and WIF strings.

pub mod address;
pub mod network;
pub mod parser;
pub mod public_key;
pub mod record;

pub use address::{derive_address, derive_wif};
pub use network::NetworkTag;
pub use parser::{
    detect_and_parse, detect_format, parse_private_key, KeyFormat, KeyOverrides,
    RAW_HEX_DEFAULT_COMPRESSED, RAW_HEX_DEFAULT_NETWORK,
};
pub use public_key::{KeyShape, PublicKeyBytes};
pub use record::{PrivateKeyRecord, SCALAR_LEN};
