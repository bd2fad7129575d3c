use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::sync::RwLock;

use crate::error::{KeyError, Result};
use crate::keys::NetworkTag;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

pub const DEFAULT_GENERATE_NETWORK: NetworkTag = NetworkTag::Testnet;
pub const DEFAULT_PUBKEY_PREVIEW: usize = 20;
/// Generated keys pair with a compressed public key unless told otherwise.
pub const DEFAULT_GENERATE_COMPRESSED: bool = true;

const GENERATE_NETWORK_KEY: &str = "KEYCONV_GENERATE_NETWORK";
const PUBKEY_PREVIEW_KEY: &str = "KEYCONV_PUBKEY_PREVIEW";

pub struct Config {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Seeds the settings from the environment.
    pub fn new() -> Config {
        let mut map = HashMap::new();
        for key in [GENERATE_NETWORK_KEY, PUBKEY_PREVIEW_KEY] {
            if let Ok(value) = env::var(key) {
                map.insert(String::from(key), value);
            }
        }
        Config {
            inner: RwLock::new(map),
        }
    }

    /// Settings with nothing read from the environment.
    pub fn empty() -> Config {
        Config {
            inner: RwLock::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on config - this should never happen");
        inner.get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        inner.insert(String::from(key), value);
    }

    /// Network used by `generate` when none is given on the command line.
    pub fn get_generate_network(&self) -> Result<NetworkTag> {
        match self.get(GENERATE_NETWORK_KEY) {
            Some(value) => value
                .parse()
                .map_err(|e| KeyError::Config(format!("{GENERATE_NETWORK_KEY}: {e}"))),
            None => Ok(DEFAULT_GENERATE_NETWORK),
        }
    }

    pub fn set_generate_network(&self, network: NetworkTag) {
        self.set(GENERATE_NETWORK_KEY, network.to_string());
    }

    /// Number of public key hex characters shown in text output.
    pub fn get_pubkey_preview(&self) -> Result<usize> {
        match self.get(PUBKEY_PREVIEW_KEY) {
            Some(value) => value.trim().parse().map_err(|e| {
                KeyError::Config(format!("{PUBKEY_PREVIEW_KEY}={value}: {e}"))
            }),
            None => Ok(DEFAULT_PUBKEY_PREVIEW),
        }
    }

    pub fn set_pubkey_preview(&self, chars: usize) {
        self.set(PUBKEY_PREVIEW_KEY, chars.to_string());
    }
}
