//! Zip archive assembly.
//!
//! The archive always starts with three fixed entries, in this order:
//! `README.md`, `manifest.json`, `icon.png`. Flattened additional files
//! follow in the order they were computed.
//!
//! Output is written to a temporary file next to the target and renamed into
//! place only after the zip is finalized, so a failed run never leaves a
//! truncated `<name>.zip` behind. Every entry uses the same timestamp and
//! permissions, making the output byte-identical for identical inputs.

use crate::bundler::{
    error::{Error, ErrorExt, Result},
    manifest::MANIFEST_FILE_NAME,
    utils::fs::remove_file_if_exists,
};
use std::{
    collections::HashMap,
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf},
};
use zip::{CompressionMethod, DateTime, ZipWriter, write::SimpleFileOptions};

/// Archive entry name of the README.
pub const README_FILE_NAME: &str = "README.md";

/// Archive entry name of the icon.
pub const ICON_FILE_NAME: &str = "icon.png";

/// Where an entry's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySource {
    /// Generated in memory.
    Bytes(Vec<u8>),
    /// Streamed from a file on disk.
    File(PathBuf),
}

/// One file inside the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    source: EntrySource,
    archive_path: String,
}

impl ArchiveEntry {
    /// Entry generated from in-memory bytes.
    pub fn bytes(contents: Vec<u8>, archive_path: impl Into<String>) -> Self {
        Self {
            source: EntrySource::Bytes(contents),
            archive_path: archive_path.into(),
        }
    }

    /// Entry copied from a file on disk.
    pub fn file(path: PathBuf, archive_path: impl Into<String>) -> Self {
        Self {
            source: EntrySource::File(path),
            archive_path: archive_path.into(),
        }
    }

    /// Forward-slash path inside the archive.
    pub fn archive_path(&self) -> &str {
        &self.archive_path
    }

    /// Where the bytes come from.
    pub fn source(&self) -> &EntrySource {
        &self.source
    }

    fn describe_source(&self) -> String {
        match &self.source {
            EntrySource::Bytes(_) => format!("generated {}", self.archive_path),
            EntrySource::File(path) => path.display().to_string(),
        }
    }
}

/// The three entries every package starts with.
#[derive(Debug, Clone)]
pub struct FixedEntries {
    /// UTF-8 README contents.
    pub readme: String,
    /// Serialized manifest.
    pub manifest: Vec<u8>,
    /// PNG encoded icon.
    pub icon_png: Vec<u8>,
}

impl FixedEntries {
    /// Returns the entries in archive order.
    pub fn into_entries(self) -> [ArchiveEntry; 3] {
        [
            ArchiveEntry::bytes(self.readme.into_bytes(), README_FILE_NAME),
            ArchiveEntry::bytes(self.manifest, MANIFEST_FILE_NAME),
            ArchiveEntry::bytes(self.icon_png, ICON_FILE_NAME),
        ]
    }
}

/// Result of a successful [`assemble`].
#[derive(Debug, Clone)]
pub struct AssembledArchive {
    /// Final archive path.
    pub path: PathBuf,
    /// Number of entries written.
    pub entries: usize,
    /// Archive size in bytes.
    pub size: u64,
}

/// Fails with [`Error::PathCollision`] if two entries share an archive path.
///
/// Comparison is exact (case-sensitive), matching how zip readers look up
/// entries.
pub fn check_collisions(entries: &[ArchiveEntry]) -> Result<()> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if let Some(&first) = seen.get(entry.archive_path()) {
            return Err(Error::PathCollision {
                archive_path: entry.archive_path().to_string(),
                sources: vec![entries[first].describe_source(), entry.describe_source()],
            });
        }
        seen.insert(entry.archive_path(), index);
    }
    Ok(())
}

/// Writes the fixed entries followed by `flattened` into `output_path`.
///
/// An existing file at `output_path` is replaced, never merged. Collisions
/// are checked before anything on disk changes.
pub fn assemble(
    output_path: &Path,
    fixed: FixedEntries,
    flattened: Vec<ArchiveEntry>,
) -> Result<AssembledArchive> {
    let mut entries = Vec::with_capacity(flattened.len() + 3);
    entries.extend(fixed.into_entries());
    entries.extend(flattened);
    check_collisions(&entries)?;

    remove_file_if_exists(output_path)?;

    let output_dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let temp = tempfile::Builder::new()
        .prefix(".package-")
        .suffix(".zip.tmp")
        .tempfile_in(output_dir)
        .fs_context("creating temporary archive in", output_dir)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .fs_context("setting archive permissions", temp.path())?;
    }

    let mut zip = ZipWriter::new(temp);
    for entry in &entries {
        write_entry(&mut zip, entry)?;
    }
    let temp = zip.finish()?;

    temp.persist(output_path)
        .map_err(|e| e.error)
        .fs_context("writing archive", output_path)?;

    let size = std::fs::metadata(output_path)
        .fs_context("reading archive metadata", output_path)?
        .len();

    log::info!(
        "Wrote {} ({} entries, {} bytes)",
        output_path.display(),
        entries.len(),
        size
    );

    Ok(AssembledArchive {
        path: output_path.to_path_buf(),
        entries: entries.len(),
        size,
    })
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644)
}

fn write_entry<W: Write + io::Seek>(zip: &mut ZipWriter<W>, entry: &ArchiveEntry) -> Result<()> {
    log::debug!("Adding {} ({})", entry.archive_path(), entry.describe_source());

    match entry.source() {
        EntrySource::Bytes(contents) => {
            zip.start_file(entry.archive_path(), entry_options())?;
            zip.write_all(contents)
                .fs_context("writing archive entry", entry.archive_path())?;
        }
        EntrySource::File(path) => {
            let mut file = File::open(path).fs_context("opening file for archive", path)?;
            let len = file
                .metadata()
                .fs_context("reading file metadata", path)?
                .len();
            let options = entry_options().large_file(len >= u64::from(u32::MAX));
            zip.start_file(entry.archive_path(), options)?;
            io::copy(&mut file, zip).fs_context("copying file into archive", path)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, io::Read};
    use tempfile::TempDir;
    use zip::ZipArchive;

    fn fixed() -> FixedEntries {
        FixedEntries {
            readme: "Hello".into(),
            manifest: br#"{"name":"Mod"}"#.to_vec(),
            icon_png: vec![0x89, b'P', b'N', b'G'],
        }
    }

    fn read_entries(path: &Path) -> Vec<(String, Vec<u8>)> {
        let mut archive = ZipArchive::new(File::open(path).expect("open")).expect("zip");
        (0..archive.len())
            .map(|i| {
                let mut file = archive.by_index(i).expect("entry");
                let mut contents = Vec::new();
                file.read_to_end(&mut contents).expect("read");
                (file.name().to_string(), contents)
            })
            .collect()
    }

    #[test]
    fn fixed_entries_come_first_in_order() {
        let dir = TempDir::new().expect("temp dir");
        let extra = dir.path().join("extra.txt");
        fs::write(&extra, "extra").expect("write");
        let output = dir.path().join("Mod.zip");

        let result = assemble(
            &output,
            fixed(),
            vec![ArchiveEntry::file(extra, "sub/extra.txt")],
        )
        .expect("assemble");
        assert_eq!(result.entries, 4);
        assert_eq!(result.size, fs::metadata(&output).unwrap().len());

        let entries = read_entries(&output);
        let names: Vec<_> = entries.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["README.md", "manifest.json", "icon.png", "sub/extra.txt"]);
        assert_eq!(entries[0].1, b"Hello");
        assert_eq!(entries[3].1, b"extra");
    }

    #[test]
    fn existing_archive_is_replaced() {
        let dir = TempDir::new().expect("temp dir");
        let output = dir.path().join("Mod.zip");
        fs::write(&output, "not a zip").expect("write");

        assemble(&output, fixed(), vec![]).expect("assemble");
        assert_eq!(read_entries(&output).len(), 3);
    }

    #[test]
    fn collision_with_fixed_entry_fails_before_writing() {
        let dir = TempDir::new().expect("temp dir");
        let clash = dir.path().join("manifest.json");
        fs::write(&clash, "{}").expect("write");
        let output = dir.path().join("Mod.zip");
        fs::write(&output, "previous").expect("write");

        let err = assemble(
            &output,
            fixed(),
            vec![ArchiveEntry::file(clash.clone(), "manifest.json")],
        )
        .unwrap_err();
        match err {
            Error::PathCollision { archive_path, sources } => {
                assert_eq!(archive_path, "manifest.json");
                assert_eq!(sources[1], clash.display().to_string());
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn collision_between_flattened_entries() {
        let entries = vec![
            ArchiveEntry::file("/a/config.cfg".into(), "config.cfg"),
            ArchiveEntry::file("/b/config.cfg".into(), "config.cfg"),
        ];
        assert!(matches!(
            check_collisions(&entries),
            Err(Error::PathCollision { .. })
        ));
        assert!(check_collisions(&entries[..1]).is_ok());
    }

    #[test]
    fn failure_mid_write_leaves_no_archive() {
        let dir = TempDir::new().expect("temp dir");
        let output = dir.path().join("Mod.zip");

        let err = assemble(
            &output,
            fixed(),
            vec![ArchiveEntry::file(dir.path().join("vanished.bin"), "vanished.bin")],
        )
        .unwrap_err();
        assert!(matches!(err, Error::Fs { .. }));
        assert!(!output.exists());
        let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert!(leftovers.is_empty(), "temporary file should be cleaned up");
    }

    #[test]
    fn output_is_byte_identical_across_runs() {
        let dir = TempDir::new().expect("temp dir");
        let output = dir.path().join("Mod.zip");

        assemble(&output, fixed(), vec![]).expect("first");
        let first = fs::read(&output).unwrap();
        assemble(&output, fixed(), vec![]).expect("second");
        assert_eq!(first, fs::read(&output).unwrap());
    }
}
