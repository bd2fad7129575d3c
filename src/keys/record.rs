use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};
use serde::{Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::NetworkTag;
use crate::error::{KeyError, Result};

pub const SCALAR_LEN: usize = 32;

/// A normalized private key: the raw scalar plus how it should be rendered.
///
/// The scalar is wiped when the record is dropped.
#[derive(Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKeyRecord {
    #[serde(rename = "private_key", serialize_with = "serialize_scalar")]
    scalar: [u8; SCALAR_LEN],
    #[zeroize(skip)]
    compressed: bool,
    #[zeroize(skip)]
    network: NetworkTag,
}

fn serialize_scalar<S: Serializer>(
    scalar: &[u8; SCALAR_LEN],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&HEXLOWER.encode(scalar))
}

impl PrivateKeyRecord {
    pub fn new(scalar: [u8; SCALAR_LEN], compressed: bool, network: NetworkTag) -> Self {
        PrivateKeyRecord {
            scalar,
            compressed,
            network,
        }
    }

    /// Decodes exactly 32 bytes of hex (either case) into a scalar.
    pub fn scalar_from_hex(text: &str) -> Result<[u8; SCALAR_LEN]> {
        let mut bytes = HEXLOWER_PERMISSIVE.decode(text.as_bytes())?;
        if bytes.len() != SCALAR_LEN {
            let len = bytes.len();
            bytes.zeroize();
            return Err(KeyError::InvalidHexLength(len));
        }
        let mut scalar = [0u8; SCALAR_LEN];
        scalar.copy_from_slice(&bytes);
        bytes.zeroize();
        Ok(scalar)
    }

    pub fn scalar(&self) -> &[u8; SCALAR_LEN] {
        &self.scalar
    }

    pub fn scalar_hex(&self) -> String {
        HEXLOWER.encode(&self.scalar)
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    pub fn network(&self) -> NetworkTag {
        self.network
    }

    pub fn set_network(&mut self, network: NetworkTag) {
        self.network = network;
    }

    pub fn set_compressed(&mut self, compressed: bool) {
        self.compressed = compressed;
    }
}

impl std::fmt::Debug for PrivateKeyRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKeyRecord")
            .field("scalar", &"[REDACTED]")
            .field("compressed", &self.compressed)
            .field("network", &self.network)
            .finish()
    }
}
