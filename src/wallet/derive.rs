use data_encoding::HEXLOWER;
use log::debug;
use zeroize::Zeroize;

use super::KeyReport;
use crate::capability::Capabilities;
use crate::error::Result;
use crate::keys::{derive_address, derive_wif, parse_private_key, KeyOverrides};

/// Parses `input`, applies `overrides` and derives the public key, address
/// and WIF for the resulting record.
pub fn derive_full_record(
    input: &str,
    overrides: KeyOverrides,
    capabilities: &Capabilities,
) -> Result<KeyReport> {
    let mut record = parse_private_key(input)?;
    overrides.apply(&mut record);

    let public_key = capabilities
        .deriver()?
        .derive_public_key(record.scalar(), record.is_compressed())?;
    let address = derive_address(&public_key, record.network(), capabilities.ripemd160()?);
    let wif = derive_wif(&record);
    debug!(
        "Derived {} {} key for {address}",
        record.network(),
        if record.is_compressed() {
            "compressed"
        } else {
            "uncompressed"
        }
    );

    Ok(KeyReport::new(record, public_key, address, wif))
}

/// Draws a fresh non-zero 32-byte secret and runs it through
/// `derive_full_record` as raw hex.
pub fn generate_full_record(
    overrides: KeyOverrides,
    capabilities: &Capabilities,
) -> Result<KeyReport> {
    let entropy = capabilities.entropy()?;
    let mut scalar = entropy.fill_scalar()?;
    while scalar.iter().all(|&b| b == 0) {
        debug!("Entropy source returned an all-zero scalar, drawing again");
        scalar = entropy.fill_scalar()?;
    }

    let mut hex = HEXLOWER.encode(&scalar);
    scalar.zeroize();
    let report = derive_full_record(&hex, overrides, capabilities);
    hex.zeroize();
    report
}
