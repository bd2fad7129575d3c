//! Private key format detection.
//!
//! Input is tried against each format in `FORMAT_ORDER`. An attempt either
//! matches, declines (the input is not in that format, so the next one is
//! tried) or rejects (the input is in that format but invalid, which ends the
//! parse). Raw hex can only decline; WIF is the last resort and only rejects.

use log::debug;
use std::fmt;
use zeroize::Zeroize;

use super::record::{PrivateKeyRecord, SCALAR_LEN};
use super::NetworkTag;
use crate::error::{KeyError, Result};
use crate::utils::base58check_decode;

/// Network assumed for raw hex input, which carries no network of its own.
pub const RAW_HEX_DEFAULT_NETWORK: NetworkTag = NetworkTag::Mainnet;
/// Compression assumed for raw hex input.
pub const RAW_HEX_DEFAULT_COMPRESSED: bool = true;

/// Trailing byte marking a WIF key as belonging to a compressed public key.
pub const COMPRESSION_MARKER: u8 = 0x01;
/// version + scalar
pub const WIF_UNCOMPRESSED_PAYLOAD_LEN: usize = 1 + SCALAR_LEN;
/// version + scalar + marker
pub const WIF_COMPRESSED_PAYLOAD_LEN: usize = 1 + SCALAR_LEN + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFormat {
    RawHex,
    Wif,
}

pub const FORMAT_ORDER: [KeyFormat; 2] = [KeyFormat::RawHex, KeyFormat::Wif];

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyFormat::RawHex => write!(f, "raw hex"),
            KeyFormat::Wif => write!(f, "WIF"),
        }
    }
}

#[derive(Debug)]
pub enum Attempt {
    Matched(PrivateKeyRecord),
    Declined(KeyError),
    Rejected(KeyError),
}

impl KeyFormat {
    /// Runs this format's parser over already-trimmed input.
    pub fn attempt(self, input: &str) -> Attempt {
        match self {
            KeyFormat::RawHex => match parse_raw_hex(input) {
                Ok(record) => Attempt::Matched(record),
                Err(err) => Attempt::Declined(err),
            },
            KeyFormat::Wif => match parse_wif(input) {
                Ok(record) => Attempt::Matched(record),
                Err(err) => Attempt::Rejected(err),
            },
        }
    }
}

/// Caller intent that replaces parsed or defaulted fields after parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyOverrides {
    pub network: Option<NetworkTag>,
    pub compressed: Option<bool>,
}

impl KeyOverrides {
    pub fn new(network: Option<NetworkTag>, compressed: Option<bool>) -> Self {
        KeyOverrides {
            network,
            compressed,
        }
    }

    pub fn apply(&self, record: &mut PrivateKeyRecord) {
        if let Some(network) = self.network {
            record.set_network(network);
        }
        if let Some(compressed) = self.compressed {
            record.set_compressed(compressed);
        }
    }
}

/// Classifies and normalizes a private key given as 64 hex characters or WIF.
pub fn parse_private_key(input: &str) -> Result<PrivateKeyRecord> {
    detect_and_parse(input).map(|(_, record)| record)
}

/// Reports which format accepted the input.
pub fn detect_format(input: &str) -> Result<KeyFormat> {
    detect_and_parse(input).map(|(format, _)| format)
}

pub fn detect_and_parse(input: &str) -> Result<(KeyFormat, PrivateKeyRecord)> {
    let input = input.trim();
    let mut last_declined = None;
    for format in FORMAT_ORDER {
        match format.attempt(input) {
            Attempt::Matched(record) => {
                debug!("Private key accepted as {format}");
                return Ok((format, record));
            }
            Attempt::Declined(err) => {
                debug!("Input is not {format}: {err}");
                last_declined = Some(err);
            }
            Attempt::Rejected(err) => {
                debug!("Input rejected as {format}: {err}");
                return Err(err);
            }
        }
    }
    Err(last_declined
        .unwrap_or_else(|| KeyError::InvalidHex("no key format accepted input".to_string())))
}

fn parse_raw_hex(input: &str) -> Result<PrivateKeyRecord> {
    let scalar = PrivateKeyRecord::scalar_from_hex(input)?;
    Ok(PrivateKeyRecord::new(
        scalar,
        RAW_HEX_DEFAULT_COMPRESSED,
        RAW_HEX_DEFAULT_NETWORK,
    ))
}

fn parse_wif(input: &str) -> Result<PrivateKeyRecord> {
    let mut payload = base58check_decode(input)?;
    let record = record_from_wif_payload(&payload);
    payload.zeroize();
    record
}

fn record_from_wif_payload(payload: &[u8]) -> Result<PrivateKeyRecord> {
    let (&version, body) = payload
        .split_first()
        .ok_or(KeyError::InvalidPayloadLength(0))?;
    let network = NetworkTag::from_wif_version(version)?;

    let (key_bytes, compressed) = match (payload.len(), body.last()) {
        (WIF_COMPRESSED_PAYLOAD_LEN, Some(&COMPRESSION_MARKER)) => (&body[..SCALAR_LEN], true),
        (WIF_UNCOMPRESSED_PAYLOAD_LEN, _) => (body, false),
        (len, _) => return Err(KeyError::InvalidPayloadLength(len)),
    };

    let scalar: [u8; SCALAR_LEN] = key_bytes
        .try_into()
        .map_err(|_| KeyError::InvalidPayloadLength(payload.len()))?;
    Ok(PrivateKeyRecord::new(scalar, compressed, network))
}
