use ripemd::{Digest as RipemdDigest, Ripemd160};

use super::Ripemd160Hasher;

/// RIPEMD-160 from the `ripemd` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RipemdCrateHasher;

impl Ripemd160Hasher for RipemdCrateHasher {
    fn digest(&self, data: &[u8]) -> [u8; 20] {
        let mut hasher = Ripemd160::new();
        hasher.update(data);
        hasher.finalize().into()
    }

    fn name(&self) -> &'static str {
        "ripemd"
    }
}
