use k256::ecdsa::SigningKey;

use super::PublicKeyDeriver;
use crate::error::{KeyError, Result};
use crate::keys::PublicKeyBytes;

/// secp256k1 point derivation backed by `k256`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Deriver;

impl PublicKeyDeriver for Secp256k1Deriver {
    fn derive_public_key(&self, scalar: &[u8; 32], compressed: bool) -> Result<PublicKeyBytes> {
        let signing_key = SigningKey::from_slice(scalar)
            .map_err(|_| KeyError::InvalidScalar("must be in [1, n-1]".to_string()))?;
        let point = signing_key.verifying_key().to_encoded_point(compressed);
        PublicKeyBytes::from_slice(point.as_bytes())
    }
}
