use ring::digest::{Context, SHA256};

use crate::capability::Ripemd160Hasher;

pub const SHA256_LEN: usize = 32;
pub const HASH160_LEN: usize = 20;

pub fn sha256_digest(data: &[u8]) -> [u8; SHA256_LEN] {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    let mut out = [0u8; SHA256_LEN];
    out.copy_from_slice(digest.as_ref());
    out
}

/// sha256(sha256(data)), used for Base58Check checksums.
pub fn double_sha256(data: &[u8]) -> [u8; SHA256_LEN] {
    sha256_digest(&sha256_digest(data))
}

/// ripemd160(sha256(data)), used for P2PKH address bodies.
pub fn hash160(hasher: &dyn Ripemd160Hasher, data: &[u8]) -> [u8; HASH160_LEN] {
    hasher.digest(&sha256_digest(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::RipemdCrateHasher;
    use data_encoding::HEXLOWER;

    #[test]
    fn test_sha256_empty() {
        assert_eq!(
            HEXLOWER.encode(&sha256_digest(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_double_sha256_hello() {
        // sha256d("hello") is a widely published value
        assert_eq!(
            HEXLOWER.encode(&double_sha256(b"hello")),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
    }

    #[test]
    fn test_hash160_generator_point() {
        let pubkey = HEXLOWER
            .decode(b"0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798")
            .unwrap();
        let digest = hash160(&RipemdCrateHasher, &pubkey);
        assert_eq!(
            HEXLOWER.encode(&digest),
            "751e76e8199196d454941c45d1b3a323f1433bd6"
        );
    }
}
