//! Configuration management
//!
//! Process-wide settings for the CLI, read from `KEYCONV_*` environment
//! variables.

pub mod settings;

pub use settings::{
    Config, DEFAULT_GENERATE_COMPRESSED, DEFAULT_GENERATE_NETWORK, DEFAULT_PUBKEY_PREVIEW,
    GLOBAL_CONFIG,
};
