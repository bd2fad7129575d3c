//! Key conversion integration tests
//!
//! End-to-end checks through the public API: the codec properties the
//! format depends on, and the full hex/WIF to address pipeline.

use keyconv::capability::{Capabilities, RipemdCrateHasher};
use keyconv::keys::KeyShape;
use keyconv::{
    base58_decode, base58_encode, base58check_decode, base58check_encode, derive_full_record,
    detect_format, parse_private_key, KeyError, KeyFormat, KeyOverrides, NetworkTag,
};
use rand::{Rng, RngCore};

const ONE_HEX: &str = "0000000000000000000000000000000000000000000000000000000000000001";
const ONE_PUBKEY: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
const ONE_ADDRESS: &str = "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH";
const ONE_WIF: &str = "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn";

fn random_buffers() -> Vec<Vec<u8>> {
    let mut rng = rand::thread_rng();
    let mut buffers = vec![vec![], vec![0], vec![0; 40], vec![0, 0, 1]];
    for _ in 0..64 {
        let len = rng.gen_range(0..80);
        let zeros = rng.gen_range(0..4).min(len);
        let mut buf = vec![0u8; len];
        rng.fill_bytes(&mut buf[zeros..]);
        buffers.push(buf);
    }
    buffers
}

#[test]
fn test_base58_round_trip() {
    for buf in random_buffers() {
        let encoded = base58_encode(&buf);
        assert_eq!(base58_decode(&encoded).unwrap(), buf);
        assert_eq!(base58_encode(&base58_decode(&encoded).unwrap()), encoded);
    }
}

#[test]
fn test_base58check_round_trip() {
    for buf in random_buffers() {
        let encoded = base58check_encode(&buf);
        assert_eq!(base58check_decode(&encoded).unwrap(), buf);
    }
}

#[test]
fn test_leading_zero_bytes_survive() {
    let decoded = base58_decode(&base58_encode(&[0x00, 0x00, 0x01])).unwrap();
    assert_eq!(decoded, vec![0x00, 0x00, 0x01]);
}

#[test]
fn test_known_vector_end_to_end() {
    let caps = Capabilities::detect();
    for input in [ONE_HEX, ONE_WIF, "  KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn  "] {
        let report = derive_full_record(input, KeyOverrides::default(), &caps).unwrap();
        assert_eq!(report.record().scalar_hex(), ONE_HEX);
        assert_eq!(report.network(), NetworkTag::Mainnet);
        assert!(report.is_compressed());
        assert_eq!(report.public_key().to_hex(), ONE_PUBKEY);
        assert_eq!(report.address(), ONE_ADDRESS);
        assert_eq!(report.wif(), ONE_WIF);
    }
}

#[test]
fn test_uncompressed_mainnet_vector() {
    let report = derive_full_record(
        ONE_HEX,
        KeyOverrides::new(None, Some(false)),
        &Capabilities::detect(),
    )
    .unwrap();
    assert_eq!(report.public_key().shape(), KeyShape::Uncompressed);
    assert_eq!(report.address(), "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm");
    assert_eq!(
        report.wif(),
        "5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf"
    );
}

#[test]
fn test_override_keeps_scalar() {
    let caps = Capabilities::detect();
    let report = derive_full_record(
        ONE_WIF,
        KeyOverrides::new(Some(NetworkTag::Testnet), Some(false)),
        &caps,
    )
    .unwrap();
    assert_eq!(report.record().scalar_hex(), ONE_HEX);
    assert_eq!(report.network(), NetworkTag::Testnet);
    assert!(!report.is_compressed());

    // the produced WIF carries the overrides and parses back to the same scalar
    let reparsed = parse_private_key(report.wif()).unwrap();
    assert_eq!(reparsed.scalar(), report.scalar());
    assert_eq!(reparsed.network(), NetworkTag::Testnet);
    assert!(!reparsed.is_compressed());

    let address_payload = base58check_decode(report.address()).unwrap();
    assert_eq!(address_payload[0], 0x6f);
}

#[test]
fn test_format_detection() {
    assert_eq!(detect_format(ONE_HEX).unwrap(), KeyFormat::RawHex);
    assert_eq!(detect_format(ONE_WIF).unwrap(), KeyFormat::Wif);
    assert!(detect_format(&ONE_HEX[..63]).is_err());
    assert!(detect_format(&format!("{ONE_HEX}0")).is_err());
}

#[test]
fn test_single_byte_mutation_in_wif_rejected() {
    let raw = base58_decode(ONE_WIF).unwrap();
    for i in 0..raw.len() {
        let mut mutated = raw.clone();
        mutated[i] = mutated[i].wrapping_add(1);
        let text = base58_encode(&mutated);
        assert!(
            matches!(
                parse_private_key(&text),
                Err(KeyError::ChecksumMismatch { .. })
            ),
            "mutating byte {i} was not caught"
        );
    }
}

#[test]
fn test_missing_ripemd_capability() {
    let caps = Capabilities::empty().with_deriver(keyconv::capability::Secp256k1Deriver);
    assert_eq!(
        derive_full_record(ONE_HEX, KeyOverrides::default(), &caps).unwrap_err(),
        KeyError::MissingCapability("RIPEMD-160".to_string())
    );

    let complete = caps.with_ripemd160(RipemdCrateHasher);
    assert!(derive_full_record(ONE_HEX, KeyOverrides::default(), &complete).is_ok());
}

#[test]
fn test_random_scalars_round_trip_through_wif() {
    let caps = Capabilities::detect();
    let mut rng = rand::thread_rng();
    for _ in 0..16 {
        let mut scalar = [0u8; 32];
        rng.fill_bytes(&mut scalar);
        scalar[0] &= 0x7f; // stay below the curve order
        scalar[31] |= 0x01; // and above zero
        let hex: String = scalar.iter().map(|b| format!("{b:02x}")).collect();

        for network in [NetworkTag::Mainnet, NetworkTag::Testnet] {
            for compressed in [true, false] {
                let overrides = KeyOverrides::new(Some(network), Some(compressed));
                let from_hex = derive_full_record(&hex, overrides, &caps).unwrap();
                let from_wif = derive_full_record(from_hex.wif(), KeyOverrides::default(), &caps)
                    .unwrap();
                assert_eq!(from_wif.scalar(), &scalar);
                assert_eq!(from_wif.address(), from_hex.address());
                assert_eq!(from_wif.wif(), from_hex.wif());
            }
        }
    }
}
