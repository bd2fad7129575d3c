use clap::{Args, Parser, Subcommand};

use crate::keys::{KeyOverrides, NetworkTag};

/// Network and compression flags shared by the key commands
#[derive(Debug, Clone, Args)]
pub struct OverrideArgs {
    #[arg(long = "network", help = "Force the network (mainnet, testnet)")]
    pub network: Option<NetworkTag>,
    #[arg(
        long = "compressed",
        conflicts_with = "uncompressed",
        help = "Force a compressed public key"
    )]
    pub compressed: bool,
    #[arg(long = "uncompressed", help = "Force an uncompressed public key")]
    pub uncompressed: bool,
}

impl OverrideArgs {
    pub fn compression(&self) -> Option<bool> {
        if self.compressed {
            Some(true)
        } else if self.uncompressed {
            Some(false)
        } else {
            None
        }
    }

    pub fn to_overrides(&self) -> KeyOverrides {
        KeyOverrides::new(self.network, self.compression())
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "keyconv",
    about = "Convert Bitcoin private keys between hex and WIF and derive their P2PKH address"
)]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(
        name = "inspect",
        about = "Show the public key, address and WIF for a hex or WIF private key"
    )]
    Inspect {
        #[arg(help = "64 hex characters or a WIF string")]
        key: String,
        #[command(flatten)]
        overrides: OverrideArgs,
        #[arg(long = "json", help = "Print the result as JSON")]
        json: bool,
    },
    #[command(name = "generate", about = "Generate a new private key")]
    Generate {
        #[command(flatten)]
        overrides: OverrideArgs,
        #[arg(long = "json", help = "Print the result as JSON")]
        json: bool,
    },
    #[command(name = "address", about = "Derive the P2PKH address of a public key")]
    Address {
        #[arg(help = "Public key as 66 or 130 hex characters")]
        pubkey: String,
        #[arg(
            long = "network",
            default_value = "mainnet",
            help = "Address network (mainnet, testnet)"
        )]
        network: NetworkTag,
    },
}
