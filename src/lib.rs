//! Thunderstore package archive builder
//!
//! This library assembles the zip archive a Thunderstore-style mod registry
//! expects for upload:
//! - `README.md` from inline text or a file
//! - `manifest.json` with the registry's fixed schema
//! - `icon.png`, a 256x256 PNG
//! - any additional files and directory trees, flattened
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{CliError, PackagerError, Result};
