// Entry point for the keyconv CLI
// The library does the work; this file wires clap and logging to it and
// decides what gets printed.
use clap::Parser;
use keyconv::cli::{render_json, render_text, GENERATE_NOTE, INPUT_HINTS};
use keyconv::config::DEFAULT_GENERATE_COMPRESSED;
use keyconv::{
    derive_address, derive_full_record, generate_full_record, Command, KeyError, KeyReport, Opt,
    PublicKeyBytes, DEFAULT_CAPABILITIES, GLOBAL_CONFIG,
};
use log::{error, LevelFilter};
use std::process;

fn main() {
    // Warnings by default so the report on stdout stays clean; RUST_LOG still wins
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let opt = Opt::parse();

    // Key failures are reported inside run_command; anything reaching here is
    // a configuration or output problem
    if let Err(e) = run_command(opt.command) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    let capabilities = &*DEFAULT_CAPABILITIES;
    match command {
        // Hex or WIF in, everything derivable out
        Command::Inspect {
            key,
            overrides,
            json,
        } => match derive_full_record(&key, overrides.to_overrides(), capabilities) {
            Ok(report) => print_report(&report, json)?,
            Err(e) => {
                println!("Error: {e}");
                println!();
                println!("{INPUT_HINTS}");
            }
        },
        // A fresh key defaults to the configured network and a compressed pubkey
        Command::Generate { overrides, json } => {
            let mut key_overrides = overrides.to_overrides();
            if key_overrides.network.is_none() {
                key_overrides.network = Some(GLOBAL_CONFIG.get_generate_network()?);
            }
            if key_overrides.compressed.is_none() {
                key_overrides.compressed = Some(DEFAULT_GENERATE_COMPRESSED);
            }

            match generate_full_record(key_overrides, capabilities) {
                Ok(report) => {
                    if !json {
                        println!("Generated new private key:");
                    }
                    print_report(&report, json)?;
                    if !json {
                        println!();
                        println!("{GENERATE_NOTE}");
                    }
                }
                Err(e) => println!("Error: {e}"),
            }
        }
        // Address for a public key the user already has
        Command::Address { pubkey, network } => {
            let result = PublicKeyBytes::from_hex(&pubkey).and_then(|pubkey| {
                let hasher = capabilities.ripemd160()?;
                Ok::<_, KeyError>(derive_address(&pubkey, network, hasher))
            });
            match result {
                Ok(address) => println!("{address}"),
                Err(e) => println!("Error: {e}"),
            }
        }
    }
    Ok(())
}

fn print_report(report: &KeyReport, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", render_json(report)?);
    } else {
        let preview = GLOBAL_CONFIG.get_pubkey_preview()?;
        println!("{}", render_text(report, preview));
    }
    Ok(())
}
