use rand::rngs::OsRng;
use rand::RngCore;

use super::EntropySource;
use crate::error::{KeyError, Result};

/// Operating system randomness.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_scalar(&self) -> Result<[u8; 32]> {
        let mut bytes = [0u8; 32];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| KeyError::MissingCapability(format!("secure randomness: {e}")))?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_scalar_differs() {
        let a = OsEntropy.fill_scalar().unwrap();
        let b = OsEntropy.fill_scalar().unwrap();
        assert_ne!(a, b);
    }
}
