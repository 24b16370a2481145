//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap and the conversion of
//! parsed arguments into a [`PackageRequest`].

use crate::bundler::PackageRequest;
use crate::error::CliError;
use anyhow::Context;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Thunderstore package archive builder
#[derive(Parser, Debug)]
#[command(
    name = "thunderstore-packager",
    about = "Builds an upload-ready Thunderstore package archive",
    long_about = "Builds an upload-ready Thunderstore package archive.

Writes <name>.zip containing README.md, manifest.json, icon.png and any extra
files or directories. Directories are flattened: their contents land at the
archive root with subdirectories preserved.

Usage:
  thunderstore-packager --name My_Mod --description \"Does things\" --version 1.0.0 --readmefile README.md --files plugins
  thunderstore-packager --name My_Mod --description \"A mod\" --version 1.0.0 --readme \"Hello\\nWorld\" --icon art/icon.png

Exit code 0 = archive written.",
    group(ArgGroup::new("readme_source").args(["readme", "readme_file"]).required(true).multiple(false))
)]
pub struct Args {
    /// Additional files or directories to pack into the package
    #[arg(long = "files", value_name = "PATH", num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// The name of this package (letters, digits and underscores)
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// The description of this package (max 250 characters, backslash escapes allowed)
    #[arg(long, value_name = "TEXT")]
    pub description: String,

    /// The version of this package (e.g. 1.0.0)
    #[arg(long, value_name = "VERSION")]
    pub version: String,

    /// The website of this package
    #[arg(long, value_name = "URL", default_value = "")]
    pub website: String,

    /// The dependency strings of this package
    #[arg(long, value_name = "DEPENDENCY", num_args = 1..)]
    pub dependencies: Vec<String>,

    /// The icon file for this package (256x256)
    #[arg(long, value_name = "PATH", default_value = "./icon.png")]
    pub icon: PathBuf,

    /// The README text for this package (backslash escapes allowed)
    #[arg(long, value_name = "TEXT")]
    pub readme: Option<String>,

    /// The README file for this package
    #[arg(long = "readmefile", value_name = "PATH")]
    pub readme_file: Option<PathBuf>,

    /// Directory to write <name>.zip into
    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        default_value = ".",
        env = "THUNDERSTORE_OUTPUT_DIR"
    )]
    pub output_dir: PathBuf,

    /// Print each step
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments that are not part of the package itself
    pub fn validate(&self) -> crate::error::Result<()> {
        let metadata = std::fs::metadata(&self.output_dir).with_context(|| {
            format!(
                "Output directory {} is not accessible",
                self.output_dir.display()
            )
        })?;

        if !metadata.is_dir() {
            return Err(CliError::InvalidArguments {
                reason: format!(
                    "Output path {} is not a directory",
                    self.output_dir.display()
                ),
            }
            .into());
        }

        Ok(())
    }

    /// Build the package request described by these arguments
    pub fn to_request(&self) -> PackageRequest {
        let mut builder = PackageRequest::builder()
            .name(&self.name)
            .description(&self.description)
            .version(&self.version)
            .dependencies(&self.dependencies)
            .icon_path(&self.icon)
            .additional_paths(&self.files)
            .output_dir(&self.output_dir);

        if !self.website.is_empty() {
            builder = builder.website(&self.website);
        }
        if let Some(text) = &self.readme {
            builder = builder.readme_text(text);
        }
        if let Some(path) = &self.readme_file {
            builder = builder.readme_file(path);
        }

        builder.build()
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(args.verbose, args.quiet);
        Self { output }
    }
}

impl RuntimeConfig {
    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("thunderstore-packager").chain(args.iter().copied()))
    }

    const BASE: [&str; 6] = ["--name", "Mod", "--description", "A mod", "--version", "1.0.0"];

    #[test]
    fn command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = parse(&[&BASE[..], &["--readme", "Hi"][..]].concat()).expect("parse");
        assert_eq!(args.icon, Path::new("./icon.png"));
        assert_eq!(args.website, "");
        assert!(args.files.is_empty());
        assert!(args.dependencies.is_empty());

        let request = args.to_request();
        assert_eq!(request.readme_text(), Some("Hi"));
        assert_eq!(request.readme_file(), None);
        assert_eq!(request.website(), "");
    }

    #[test]
    fn repeatable_lists() {
        let args = parse(
            &[
                &BASE[..],
                &[
                    "--readmefile", "README.md",
                    "--dependencies", "a-b-1.0.0", "c-d-2.0.0",
                    "--dependencies", "a-b-1.0.0",
                    "--files", "plugins", "LICENSE",
                    "--files", "CHANGELOG.md",
                ][..],
            ]
            .concat(),
        )
        .expect("parse");
        assert_eq!(args.dependencies, ["a-b-1.0.0", "c-d-2.0.0", "a-b-1.0.0"]);
        assert_eq!(
            args.files,
            [
                PathBuf::from("plugins"),
                PathBuf::from("LICENSE"),
                PathBuf::from("CHANGELOG.md")
            ]
        );
        assert_eq!(args.to_request().readme_file(), Some(Path::new("README.md")));
    }

    #[test]
    fn readme_sources_are_exclusive_and_required() {
        assert!(parse(&[&BASE[..], &["--readme", "Hi", "--readmefile", "R.md"][..]].concat()).is_err());
        assert!(parse(&BASE).is_err());
    }

    #[test]
    fn output_dir_must_be_a_directory() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let file = dir.path().join("file");
        std::fs::write(&file, "x").expect("write");

        let mut args = parse(&[&BASE[..], &["--readme", "Hi"][..]].concat()).expect("parse");
        args.output_dir = dir.path().to_path_buf();
        args.validate().expect("directory is fine");

        args.output_dir = file;
        assert!(args.validate().is_err());

        args.output_dir = dir.path().join("missing");
        assert!(args.validate().is_err());
    }
}
