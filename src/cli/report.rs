use crate::error::Result;
use crate::wallet::KeyReport;

pub const INPUT_HINTS: &str = "\
Your input isn't a valid 64-character hex private key or WIF.
WIF tip: mainnet starts with '5', 'K' or 'L', testnet starts with '9' or 'c'.
If you only have a passphrase or mnemonic, derive a key from it first (BIP39/BIP32); that is not supported here.";

pub const GENERATE_NOTE: &str = "NOTE: Keep your private key secret. Use testnet for demos.";

fn preview(hex: &str, chars: usize) -> String {
    if chars < hex.len() {
        format!("{}...", &hex[..chars])
    } else {
        hex.to_string()
    }
}

/// Aligned `label : value` lines, public key cut to `pubkey_preview` characters.
pub fn render_text(report: &KeyReport, pubkey_preview: usize) -> String {
    let rows = [
        ("hex_priv", report.record().scalar_hex()),
        ("network", report.network().to_string()),
        ("compressed", report.is_compressed().to_string()),
        ("pubkey", preview(&report.public_key().to_hex(), pubkey_preview)),
        ("address", report.address().to_string()),
        ("wif", report.wif().to_string()),
    ];
    rows.iter()
        .map(|(label, value)| format!("{label:<10} : {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(report: &KeyReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
