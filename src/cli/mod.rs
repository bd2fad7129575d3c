//! Command-line interface
//!
//! Argument parsing for the `keyconv` binary and the text/JSON rendering
//! of key reports.

pub mod commands;
pub mod report;

pub use commands::{Command, Opt, OverrideArgs};
pub use report::{render_json, render_text, GENERATE_NOTE, INPUT_HINTS};
