use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{KeyError, Result};

/// Which chain a key or address belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkTag {
    Mainnet,
    Testnet,
}

impl NetworkTag {
    /// Leading byte of a WIF payload.
    pub const fn wif_version(self) -> u8 {
        match self {
            NetworkTag::Mainnet => 0x80,
            NetworkTag::Testnet => 0xef,
        }
    }

    /// Leading byte of a P2PKH address payload.
    pub const fn p2pkh_version(self) -> u8 {
        match self {
            NetworkTag::Mainnet => 0x00,
            NetworkTag::Testnet => 0x6f,
        }
    }

    pub fn from_wif_version(version: u8) -> Result<NetworkTag> {
        match version {
            0x80 => Ok(NetworkTag::Mainnet),
            0xef => Ok(NetworkTag::Testnet),
            other => Err(KeyError::UnsupportedVersionByte(other)),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            NetworkTag::Mainnet => "mainnet",
            NetworkTag::Testnet => "testnet",
        }
    }
}

impl FromStr for NetworkTag {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" | "bitcoin" => Ok(NetworkTag::Mainnet),
            "testnet" | "test" => Ok(NetworkTag::Testnet),
            _ => Err(format!(
                "Invalid network: {s}. Valid options: mainnet, testnet"
            )),
        }
    }
}

impl fmt::Display for NetworkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
