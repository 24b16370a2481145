//! Main bundler orchestration.
//!
//! This module provides the [`Bundler`] orchestrator that ties validation,
//! manifest generation, flattening and archive assembly together.

use crate::bundler::{
    archive::{self, ArchiveEntry, EntrySource, FixedEntries},
    error::Result,
    flatten::flatten,
    manifest,
    settings::{PackageRequest, ReadmeSource},
    utils::fs::read_text,
    validate::{ValidatedRequest, validate},
};
use std::path::{Path, PathBuf};

/// A package archive written to disk.
#[derive(Debug, Clone)]
pub struct PackagedArchive {
    /// Package name, also the archive stem.
    pub name: String,
    /// Path of the written `<name>.zip`.
    pub path: PathBuf,
    /// Number of entries in the archive, fixed entries included.
    pub entries: usize,
    /// Archive size in bytes.
    pub size: u64,
}

/// Main bundler orchestrator.
///
/// Owns one [`PackageRequest`] and turns it into one archive. Each bundler is
/// independent; nothing is shared between instances.
///
/// # Examples
///
/// ```no_run
/// use thunderstore_packager::bundler::{Bundler, PackageRequest};
///
/// # fn example(request: PackageRequest) -> thunderstore_packager::bundler::Result<()> {
/// let bundler = Bundler::new(request);
/// let archive = bundler.bundle()?;
/// println!("Created {}", archive.path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    request: PackageRequest,
}

impl Bundler {
    /// Creates a bundler for `request`.
    pub fn new(request: PackageRequest) -> Self {
        Self { request }
    }

    /// Validates the request and writes the archive.
    ///
    /// Validation failures return before the output file is touched. Any
    /// later failure leaves the previous archive removed and no partial one
    /// in its place.
    pub fn bundle(&self) -> Result<PackagedArchive> {
        log::info!(
            "Packaging {} {}",
            self.request.name(),
            self.request.version()
        );

        let validated = validate(&self.request)?;
        self.bundle_validated(&validated)
    }

    /// Writes the archive for an already validated request.
    pub fn bundle_validated(&self, validated: &ValidatedRequest) -> Result<PackagedArchive> {
        let fixed = FixedEntries {
            readme: resolve_readme(validated.readme())?,
            manifest: manifest::build(validated)?,
            icon_png: validated.icon().to_png_bytes()?,
        };

        let archive_path = validated.archive_path();
        let flattened = without_previous_archive(
            flatten(validated.additional_paths())?,
            &archive_path,
        );
        log::debug!(
            "{} additional entries from {} paths",
            flattened.len(),
            validated.additional_paths().len()
        );

        let assembled = archive::assemble(&archive_path, fixed, flattened)?;

        Ok(PackagedArchive {
            name: validated.name().to_string(),
            path: assembled.path,
            entries: assembled.entries,
            size: assembled.size,
        })
    }
}

/// Drops the archive being replaced when the output directory is itself
/// one of the flattened inputs.
fn without_previous_archive(entries: Vec<ArchiveEntry>, archive_path: &Path) -> Vec<ArchiveEntry> {
    let Ok(previous) = std::fs::canonicalize(archive_path) else {
        return entries;
    };

    entries
        .into_iter()
        .filter(|entry| match entry.source() {
            EntrySource::File(path) if *path == previous => {
                log::debug!("Skipping previous archive {}", previous.display());
                false
            }
            _ => true,
        })
        .collect()
}

fn resolve_readme(source: &ReadmeSource) -> Result<String> {
    match source {
        ReadmeSource::Text(text) => Ok(text.clone()),
        ReadmeSource::File(path) => read_text(path),
    }
}
