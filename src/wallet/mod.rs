//! Key derivation pipeline
//!
//! Ties the parser, the capabilities and the producers together into a
//! single `KeyReport` per input.

pub mod derive;
pub mod report;

pub use derive::{derive_full_record, generate_full_record};
pub use report::KeyReport;
