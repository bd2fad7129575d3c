//! Base58 codec over the Bitcoin alphabet.
//!
//! The payload is treated as one big-endian integer, so leading zero bytes
//! carry no magnitude and are written out as leading `'1'` characters instead.

use num_bigint::BigUint;
use once_cell::sync::Lazy;

use crate::error::{KeyError, Result};

pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const RADIX: u32 = 58;
const ZERO_SYMBOL: char = '1';

/// Reverse lookup from ASCII byte to alphabet index.
static ALPHABET_INDEX: Lazy<[Option<u8>; 128]> = Lazy::new(|| {
    let mut index = [None; 128];
    for (i, &symbol) in ALPHABET.iter().enumerate() {
        index[symbol as usize] = Some(i as u8);
    }
    index
});

fn symbol_index(character: char) -> Option<u8> {
    if character.is_ascii() {
        ALPHABET_INDEX[character as usize]
    } else {
        None
    }
}

pub fn base58_encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&b| b == 0).count();

    let radix = BigUint::from(RADIX);
    let zero = BigUint::default();
    let mut value = BigUint::from_bytes_be(data);
    let mut digits: Vec<u8> = Vec::new();
    while value != zero {
        let remainder = &value % &radix;
        let digit = remainder.to_u32_digits().first().copied().unwrap_or(0);
        digits.push(ALPHABET[digit as usize]);
        value /= &radix;
    }
    digits.extend(std::iter::repeat(ALPHABET[0]).take(zeros));
    digits.reverse();

    // every byte came from ALPHABET
    digits.into_iter().map(char::from).collect()
}

pub fn base58_decode(text: &str) -> Result<Vec<u8>> {
    let radix = BigUint::from(RADIX);
    let mut value = BigUint::default();
    for (position, character) in text.chars().enumerate() {
        let index = symbol_index(character).ok_or(KeyError::InvalidCharacter {
            character,
            position,
        })?;
        value = value * &radix + BigUint::from(index);
    }

    let zeros = text.chars().take_while(|&c| c == ZERO_SYMBOL).count();
    let mut bytes = vec![0u8; zeros];
    if value != BigUint::default() {
        bytes.extend(value.to_bytes_be());
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_encoding::HEXLOWER;

    // Pairs from the Bitcoin Core base58 encode/decode vectors.
    const VECTORS: &[(&str, &str)] = &[
        ("", ""),
        ("61", "2g"),
        ("626262", "a3gV"),
        ("636363", "aPEr"),
        (
            "73696d706c792061206c6f6e6720737472696e67",
            "2cFupjhnEsSn59qHXstmK2ffpLv2",
        ),
        (
            "00eb15231dfceb60925886b67d065299925915aeb172c06647",
            "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L",
        ),
        ("516b6fcd0f", "ABnLTmg"),
        ("bf4f89001e670274dd", "3SEo3LWLoPntC"),
        ("572e4794", "3EFU7m"),
        ("ecac89cad93923c02321", "EJDM8drfXA6uyA"),
        ("10c8511e", "Rt5zm"),
        ("00000000000000000000", "1111111111"),
    ];

    #[test]
    fn test_known_vectors() {
        for (hex, encoded) in VECTORS {
            let bytes = HEXLOWER.decode(hex.as_bytes()).unwrap();
            assert_eq!(base58_encode(&bytes), *encoded, "encoding {hex}");
            assert_eq!(base58_decode(encoded).unwrap(), bytes, "decoding {encoded}");
        }
    }

    #[test]
    fn test_leading_zero_preservation() {
        let data = [0x00, 0x00, 0x01];
        let encoded = base58_encode(&data);
        assert_eq!(encoded, "112");
        assert_eq!(base58_decode(&encoded).unwrap(), data.to_vec());
    }

    #[test]
    fn test_all_zero_and_empty() {
        assert_eq!(base58_encode(&[]), "");
        assert_eq!(base58_decode("").unwrap(), Vec::<u8>::new());
        assert_eq!(base58_encode(&[0, 0, 0]), "111");
        assert_eq!(base58_decode("111").unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn test_matches_bs58_crate() {
        let samples: Vec<Vec<u8>> = vec![
            vec![0xff; 32],
            (0u8..=255).collect(),
            vec![0, 0, 0, 0x80, 0x01, 0x02],
            vec![0x80; 38],
        ];
        for sample in samples {
            let ours = base58_encode(&sample);
            assert_eq!(ours, bs58::encode(&sample).into_string());
            assert_eq!(base58_decode(&ours).unwrap(), sample);
        }
    }

    #[test]
    fn test_rejects_ambiguous_characters() {
        for (text, bad, position) in [("12O4", 'O', 2), ("0abc", '0', 0), ("abIc", 'I', 2), ("xyzl", 'l', 3)] {
            assert_eq!(
                base58_decode(text),
                Err(KeyError::InvalidCharacter {
                    character: bad,
                    position,
                })
            );
        }
    }

    #[test]
    fn test_rejects_non_ascii() {
        let err = base58_decode("abcé").unwrap_err();
        assert_eq!(
            err,
            KeyError::InvalidCharacter {
                character: 'é',
                position: 3,
            }
        );
    }
}
