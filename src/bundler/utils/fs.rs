//! File system utilities for packaging.
//!
//! Thin wrappers over `std::fs` that are idempotent where the pipeline needs
//! them to be and that attach the path to every error.

use crate::bundler::error::{ErrorExt, Result};
use std::{
    fs,
    io::{self},
    path::{Path, PathBuf},
};

/// Kind of filesystem object a path resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Regular file (symlinks are followed)
    File,
    /// Directory (symlinks are followed)
    Directory,
    /// Nothing usable at that path
    Missing,
}

/// Classifies a path, following symlinks.
///
/// Anything that is neither a file nor a directory (broken symlink, socket,
/// permission denied on the parent) counts as missing.
pub fn path_kind(path: &Path) -> PathKind {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => PathKind::File,
        Ok(meta) if meta.is_dir() => PathKind::Directory,
        _ => PathKind::Missing,
    }
}

/// Returns every path in `paths` that is neither a file nor a directory,
/// preserving input order.
pub fn missing_paths<'a, I>(paths: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = &'a PathBuf>,
{
    paths
        .into_iter()
        .filter(|p| path_kind(p) == PathKind::Missing)
        .cloned()
        .collect()
}

/// Removes a file if it exists.
pub fn remove_file_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            log::debug!("Removed existing {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e).fs_context("removing existing archive", path),
    }
}

/// Reads a UTF-8 text file, stripping a leading byte order mark.
pub fn read_text(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).fs_context("reading text file", path)?;
    Ok(match text.strip_prefix('\u{FEFF}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Canonicalizes `path`, attaching the path to the error.
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).fs_context("resolving path", path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn classifies_paths() {
        let dir = TempDir::new().expect("temp dir");
        let file = dir.path().join("a.txt");
        fs::write(&file, "a").expect("write");

        assert_eq!(path_kind(&file), PathKind::File);
        assert_eq!(path_kind(dir.path()), PathKind::Directory);
        assert_eq!(path_kind(&dir.path().join("nope")), PathKind::Missing);
    }

    #[test]
    fn missing_paths_keeps_order() {
        let dir = TempDir::new().expect("temp dir");
        let present = dir.path().join("present");
        fs::write(&present, "x").expect("write");
        let gone_a = dir.path().join("gone_a");
        let gone_b = dir.path().join("gone_b");

        let inputs = vec![gone_b.clone(), present, gone_a.clone()];
        assert_eq!(missing_paths(&inputs), vec![gone_b, gone_a]);
    }

    #[test]
    fn remove_file_is_idempotent() {
        let dir = TempDir::new().expect("temp dir");
        let file = dir.path().join("Mod.zip");
        fs::write(&file, "old").expect("write");

        remove_file_if_exists(&file).expect("first removal");
        assert!(!file.exists());
        remove_file_if_exists(&file).expect("second removal is a no-op");
    }

    #[test]
    fn read_text_strips_bom() {
        let dir = TempDir::new().expect("temp dir");
        let file = dir.path().join("README.md");
        fs::write(&file, "\u{FEFF}# Title").expect("write");
        assert_eq!(read_text(&file).expect("read"), "# Title");
    }
}
