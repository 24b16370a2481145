//! Flattening of additional files and directory trees into archive entries.
//!
//! A standalone file lands at the archive root under its base name. A
//! directory contributes every file below it, at its path relative to the
//! directory itself, so `assets/sub/file.txt` becomes `sub/file.txt`.

use crate::bundler::{
    archive::ArchiveEntry,
    error::{Error, Result, ValidationError},
    utils::fs::{PathKind, canonicalize, path_kind},
};
use std::{
    cmp::Ordering,
    path::{Component, Path, PathBuf},
};
use walkdir::{DirEntry, WalkDir};

/// Expands `paths` into archive entries, in input order.
///
/// Each directory is walked depth-first with files before subdirectories at
/// every level, and siblings sorted by name.
pub fn flatten(paths: &[PathBuf]) -> Result<Vec<ArchiveEntry>> {
    let mut entries = Vec::new();

    for path in paths {
        match path_kind(path) {
            PathKind::File => entries.push(flatten_file(path)?),
            PathKind::Directory => {
                let before = entries.len();
                flatten_dir(path, &mut entries)?;
                log::debug!(
                    "Flattened {} files from {}",
                    entries.len() - before,
                    path.display()
                );
            }
            PathKind::Missing => return Err(ValidationError::file_not_found(path).into()),
        }
    }

    Ok(entries)
}

/// The entry name is the base name as given, so a symlink keeps its own
/// name; only the source location is resolved.
fn flatten_file(path: &Path) -> Result<ArchiveEntry> {
    let source = canonicalize(path)?;
    let name = path
        .file_name()
        .or_else(|| source.file_name())
        .ok_or_else(|| Error::InvalidArchivePath {
            path: path.to_path_buf(),
        })?
        .to_str()
        .ok_or_else(|| Error::InvalidArchivePath {
            path: path.to_path_buf(),
        })?
        .to_string();
    Ok(ArchiveEntry::file(source, name))
}

fn flatten_dir(dir: &Path, entries: &mut Vec<ArchiveEntry>) -> Result<()> {
    let root = canonicalize(dir)?;

    let walker = WalkDir::new(&root)
        .min_depth(1)
        .follow_links(true)
        .sort_by(files_first);

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let archive_path = relative_archive_path(&root, entry.path())?;
        entries.push(ArchiveEntry::file(entry.into_path(), archive_path));
    }

    Ok(())
}

/// Orders siblings so that files come before directories, then by name.
fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    let is_dir = |e: &DirEntry| e.file_type().is_dir();
    is_dir(a)
        .cmp(&is_dir(b))
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Returns `path` relative to `root` as a forward-slash archive path.
///
/// Only the leading components equal to `root` are removed; a later component
/// that happens to repeat the root's text is kept.
pub fn relative_archive_path(root: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| Error::InvalidArchivePath {
            path: path.to_path_buf(),
        })?;

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str().ok_or_else(|| {
                Error::InvalidArchivePath {
                    path: path.to_path_buf(),
                }
            })?),
            _ => {
                return Err(Error::InvalidArchivePath {
                    path: path.to_path_buf(),
                });
            }
        }
    }

    if parts.is_empty() {
        return Err(Error::InvalidArchivePath {
            path: path.to_path_buf(),
        });
    }
    Ok(parts.join("/"))
}
