//! Package bundling library.
//!
//! Turns a [`PackageRequest`] into an upload-ready registry archive:
//!
//! ```text
//! README.md        UTF-8 text
//! manifest.json    compact JSON (name, description, version_number, dependencies, website_url)
//! icon.png         256x256 PNG
//! <additional files, flattened>
//! ```
//!
//! [`Bundler`] runs the whole pipeline; the stages are public so they can be
//! driven and tested on their own:
//!
//! - [`mod@validate`] checks the request without touching the output
//! - [`manifest`] builds `manifest.json`
//! - [`flatten`] expands additional files and directories
//! - [`archive`] writes the zip

pub mod archive;
mod builder;
pub mod error;
pub mod flatten;
pub mod icon;
pub mod manifest;
mod settings;
pub mod utils;
pub mod validate;

pub use archive::{ArchiveEntry, AssembledArchive, EntrySource, FixedEntries};
pub use builder::{Bundler, PackagedArchive};
pub use error::{Error, ErrorExt, Result, ValidationError};
pub use icon::Icon;
pub use manifest::ManifestRecord;
pub use settings::{PackageRequest, PackageVersion, ReadmeSource, RequestBuilder};
pub use validate::{ValidatedRequest, validate};
