//! Error types for the packaging pipeline.
//!
//! [`ValidationError`] covers everything that is rejected before any file is
//! touched; [`Error`] covers the whole pipeline, including I/O and archive
//! failures during assembly.

use std::path::{Path, PathBuf};
use thiserror::Error as DeriveError;

/// Result type alias for packaging operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Maximum description length accepted by the registry.
pub const MAX_DESCRIPTION_LEN: usize = 250;

/// Rejections raised while checking a [`PackageRequest`](crate::bundler::PackageRequest).
#[derive(DeriveError, Debug)]
pub enum ValidationError {
    /// Name contains a character outside `[A-Za-z0-9_]`.
    #[error("Invalid name '{name}', allowed characters are 'a-z', 'A-Z', '0-9' and '_'")]
    InvalidName {
        /// Offending name
        name: String,
    },

    /// Description exceeds [`MAX_DESCRIPTION_LEN`].
    #[error("Description is {length} characters long, maximum allowed is {max}")]
    DescriptionTooLong {
        /// Measured length in UTF-16 code units
        length: usize,
        /// Allowed maximum
        max: usize,
    },

    /// A backslash escape could not be decoded.
    #[error("Invalid escape sequence in {field}: {reason}")]
    InvalidEscape {
        /// Which input held the bad escape (`description`, `readme`)
        field: &'static str,
        /// What went wrong
        reason: String,
    },

    /// Version is not a dotted numeric version.
    #[error("Invalid version string '{version}', expected a dotted numeric version such as 1.0.0")]
    InvalidVersion {
        /// Offending version string
        version: String,
    },

    /// Both or neither README sources were supplied.
    #[error("{}", readme_message(.both_set))]
    AmbiguousReadmeSource {
        /// `true` when both were set, `false` when neither was
        both_set: bool,
    },

    /// One or more input paths do not exist.
    #[error("Could not find the specified file(s): {}", join_paths(.paths))]
    FileNotFound {
        /// Every missing path, in input order
        paths: Vec<PathBuf>,
    },

    /// Icon decoded fine but is not 256x256.
    #[error("Icon {} is {width}x{height}, expected 256x256", .path.display())]
    InvalidIconDimensions {
        /// Icon path
        path: PathBuf,
        /// Decoded width in pixels
        width: u32,
        /// Decoded height in pixels
        height: u32,
    },

    /// Icon exists but could not be decoded as an image.
    #[error("Could not decode icon {}: {source}", .path.display())]
    IconDecode {
        /// Icon path
        path: PathBuf,
        /// Decoder error
        #[source]
        source: image::ImageError,
    },
}

impl ValidationError {
    /// Builds a [`ValidationError::FileNotFound`] for a single path.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound {
            paths: vec![path.into()],
        }
    }
}

fn readme_message(both_set: &bool) -> &'static str {
    if *both_set {
        "Both README text and README file were given, only one is allowed"
    } else {
        "A README is required, pass either README text or a README file"
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" ; ")
}

/// Errors raised anywhere in the packaging pipeline.
#[derive(DeriveError, Debug)]
pub enum Error {
    /// Input rejected before assembly started.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Filesystem failure with context about what was being attempted.
    #[error("{context} {}: {source}", .path.display())]
    Fs {
        /// Operation being performed
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Zip writer failure.
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Image encoding failure.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Manifest serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Directory traversal failure.
    #[error("Directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Two entries resolve to the same archive path.
    #[error("Archive path '{archive_path}' is produced by more than one source: {}", join_sources(.sources))]
    PathCollision {
        /// Colliding archive path
        archive_path: String,
        /// Human readable description of each source
        sources: Vec<String>,
    },

    /// A file cannot be given a relative, UTF-8 archive path.
    #[error("Cannot store {} in the archive: no valid relative UTF-8 path", .path.display())]
    InvalidArchivePath {
        /// Offending path
        path: PathBuf,
    },
}

fn join_sources(sources: &[String]) -> String {
    sources.join(", ")
}

/// Attaches a filesystem context to I/O results.
pub trait ErrorExt<T> {
    /// Wraps the error in [`Error::Fs`] naming the operation and path.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}
