//! Error handling for key conversion
//!
//! Every codec, parser and capability failure maps to one variant here.
//! Nothing below the CLI ever turns one of these into a default value.

use std::fmt;

/// Result type alias for key conversion operations
pub type Result<T> = std::result::Result<T, KeyError>;

/// Error kinds for codec, parsing and derivation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// A character outside the Base58 alphabet
    InvalidCharacter { character: char, position: usize },
    /// Recomputed checksum disagrees with the one carried in the text
    ChecksumMismatch { expected: [u8; 4], actual: Vec<u8> },
    /// WIF version byte is neither mainnet nor testnet
    UnsupportedVersionByte(u8),
    /// WIF payload length does not leave exactly 32 key bytes
    InvalidPayloadLength(usize),
    /// Hex input decoded to something other than 32 bytes
    InvalidHexLength(usize),
    /// Input is not hexadecimal
    InvalidHex(String),
    /// Public key is neither 33 nor 65 bytes
    InvalidPublicKey(usize),
    /// Scalar rejected by the curve (zero or not below the group order)
    InvalidScalar(String),
    /// A required capability is not present in this process
    MissingCapability(String),
    /// Configuration errors
    Config(String),
    /// Serialization errors
    Serialization(String),
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "Invalid Base58 character {character:?} at position {position}"
            ),
            KeyError::ChecksumMismatch { expected, actual } => write!(
                f,
                "Bad Base58Check checksum: expected {}, found {}",
                data_encoding::HEXLOWER.encode(expected),
                data_encoding::HEXLOWER.encode(actual)
            ),
            KeyError::UnsupportedVersionByte(version) => {
                write!(f, "Unknown WIF version byte: 0x{version:02x}")
            }
            KeyError::InvalidPayloadLength(len) => {
                write!(f, "Unexpected WIF payload length: {len} bytes")
            }
            KeyError::InvalidHexLength(len) => {
                write!(f, "Hex private key must be 32 bytes, got {len}")
            }
            KeyError::InvalidHex(msg) => write!(f, "Invalid hex: {msg}"),
            KeyError::InvalidPublicKey(len) => {
                write!(f, "Public key must be 33 or 65 bytes, got {len}")
            }
            KeyError::InvalidScalar(msg) => write!(f, "Invalid private key scalar: {msg}"),
            KeyError::MissingCapability(name) => write!(f, "Capability unavailable: {name}"),
            KeyError::Config(msg) => write!(f, "Configuration error: {msg}"),
            KeyError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for KeyError {}

impl From<data_encoding::DecodeError> for KeyError {
    fn from(err: data_encoding::DecodeError) -> Self {
        KeyError::InvalidHex(err.to_string())
    }
}

impl From<serde_json::Error> for KeyError {
    fn from(err: serde_json::Error) -> Self {
        KeyError::Serialization(err.to_string())
    }
}
