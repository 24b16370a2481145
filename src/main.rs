//! Thunderstore Packager - builds registry upload archives.
//!
//! This binary validates package metadata, icon and README, then writes
//! `<name>.zip` with the registry's fixed layout.

use std::process;
use thunderstore_packager::cli;

fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run() {
        Ok(code) => code,
        Err(e) => {
            log::debug!("Packaging failed: {e:?}");
            let output = cli::OutputManager::new(false, false);
            if output.error(&e.to_string(), &e.recovery_suggestions()).is_err() {
                eprintln!("Error: {}", e);
            }
            1
        }
    };

    process::exit(exit_code);
}
