//! Command line interface for the packager.
//!
//! Parses arguments, turns them into a
//! [`PackageRequest`](crate::bundler::PackageRequest) and runs the
//! [`Bundler`].

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::bundler::Bundler;
use crate::error::Result;

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args)
}

/// Runs the packager for already parsed arguments
pub fn execute(args: &Args) -> Result<i32> {
    let config = RuntimeConfig::from(args);
    args.validate()?;

    let request = args.to_request();
    config.progress(&format!(
        "Packaging {} {} into {}",
        request.name(),
        request.version(),
        request.archive_path().display()
    ))?;
    config.verbose_println(&format!("Icon: {}", request.icon_path().display()))?;
    for path in request.additional_paths() {
        config.verbose_println(&format!("Including: {}", path.display()))?;
    }

    let archive = Bundler::new(request).bundle()?;

    config.verbose_println(&format!(
        "{} entries, {} bytes",
        archive.entries, archive.size
    ))?;
    config.success(&format!(
        "Successfully created package '{}.zip'",
        archive.name
    ))?;

    Ok(0)
}
