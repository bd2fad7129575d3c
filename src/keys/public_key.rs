use data_encoding::HEXLOWER;
use serde::{Serialize, Serializer};

use crate::error::{KeyError, Result};

pub const COMPRESSED_LEN: usize = 33;
pub const UNCOMPRESSED_LEN: usize = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyShape {
    Compressed,
    Uncompressed,
}

/// SEC1-serialized public key, kept as opaque bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyBytes {
    bytes: Vec<u8>,
    shape: KeyShape,
}

impl PublicKeyBytes {
    /// Accepts 33 bytes with a `0x02`/`0x03` prefix or 65 bytes with `0x04`.
    pub fn from_slice(bytes: &[u8]) -> Result<PublicKeyBytes> {
        let shape = match (bytes.len(), bytes.first()) {
            (COMPRESSED_LEN, Some(0x02 | 0x03)) => KeyShape::Compressed,
            (UNCOMPRESSED_LEN, Some(0x04)) => KeyShape::Uncompressed,
            (len, _) => return Err(KeyError::InvalidPublicKey(len)),
        };
        Ok(PublicKeyBytes {
            bytes: bytes.to_vec(),
            shape,
        })
    }

    pub fn from_hex(text: &str) -> Result<PublicKeyBytes> {
        let bytes = data_encoding::HEXLOWER_PERMISSIVE.decode(text.trim().as_bytes())?;
        PublicKeyBytes::from_slice(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    pub fn shape(&self) -> KeyShape {
        self.shape
    }

    pub fn is_compressed(&self) -> bool {
        self.shape == KeyShape::Compressed
    }

    pub fn to_hex(&self) -> String {
        HEXLOWER.encode(&self.bytes)
    }
}

impl Serialize for PublicKeyBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
