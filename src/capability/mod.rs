//! External capabilities
//!
//! RIPEMD-160, secp256k1 point derivation and secure randomness are consumed
//! through the traits below. A `Capabilities` set is assembled once per
//! process; a slot left empty surfaces as `KeyError::MissingCapability` at the
//! first call that needs it.

pub mod entropy;
pub mod ripemd160;
pub mod secp256k1;

pub use entropy::OsEntropy;
pub use ripemd160::RipemdCrateHasher;
pub use secp256k1::Secp256k1Deriver;

use crate::error::{KeyError, Result};
use crate::keys::PublicKeyBytes;
use log::debug;
use once_cell::sync::Lazy;

/// Default capability set, chosen once at process start.
pub static DEFAULT_CAPABILITIES: Lazy<Capabilities> = Lazy::new(Capabilities::detect);

/// 20-byte RIPEMD-160 digest over arbitrary bytes.
pub trait Ripemd160Hasher: Send + Sync {
    fn digest(&self, data: &[u8]) -> [u8; 20];

    fn name(&self) -> &'static str;
}

/// Scalar-to-point multiplication on the curve.
///
/// Range checking of the scalar belongs to the implementation.
pub trait PublicKeyDeriver: Send + Sync {
    fn derive_public_key(&self, scalar: &[u8; 32], compressed: bool) -> Result<PublicKeyBytes>;
}

/// Source of fresh 32-byte secrets for key generation.
pub trait EntropySource: Send + Sync {
    fn fill_scalar(&self) -> Result<[u8; 32]>;
}

#[derive(Default)]
pub struct Capabilities {
    ripemd160: Option<Box<dyn Ripemd160Hasher>>,
    deriver: Option<Box<dyn PublicKeyDeriver>>,
    entropy: Option<Box<dyn EntropySource>>,
}

impl Capabilities {
    /// The implementations linked into this build.
    pub fn detect() -> Capabilities {
        let hasher = RipemdCrateHasher;
        debug!("Using {} for RIPEMD-160", hasher.name());
        Capabilities::empty()
            .with_ripemd160(hasher)
            .with_deriver(Secp256k1Deriver)
            .with_entropy(OsEntropy)
    }

    /// A set with nothing installed.
    pub fn empty() -> Capabilities {
        Capabilities::default()
    }

    pub fn with_ripemd160(mut self, hasher: impl Ripemd160Hasher + 'static) -> Self {
        self.ripemd160 = Some(Box::new(hasher));
        self
    }

    pub fn with_deriver(mut self, deriver: impl PublicKeyDeriver + 'static) -> Self {
        self.deriver = Some(Box::new(deriver));
        self
    }

    pub fn with_entropy(mut self, entropy: impl EntropySource + 'static) -> Self {
        self.entropy = Some(Box::new(entropy));
        self
    }

    pub fn ripemd160(&self) -> Result<&dyn Ripemd160Hasher> {
        self.ripemd160
            .as_deref()
            .ok_or_else(|| KeyError::MissingCapability("RIPEMD-160".to_string()))
    }

    pub fn deriver(&self) -> Result<&dyn PublicKeyDeriver> {
        self.deriver
            .as_deref()
            .ok_or_else(|| KeyError::MissingCapability("public key derivation".to_string()))
    }

    pub fn entropy(&self) -> Result<&dyn EntropySource> {
        self.entropy
            .as_deref()
            .ok_or_else(|| KeyError::MissingCapability("secure randomness".to_string()))
    }
}
