//! README source selection.

use crate::bundler::error::ValidationError;
use std::path::{Path, PathBuf};

/// Where the archive's `README.md` comes from.
///
/// Exactly one source exists by construction; [`ReadmeSource::from_options`]
/// is the only place that deals with the "both or neither" case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadmeSource {
    /// Inline text, already unescaped.
    Text(String),
    /// File read as UTF-8 at assembly time.
    File(PathBuf),
}

impl ReadmeSource {
    /// Picks the single README source out of the two optional CLI inputs.
    ///
    /// Inline text is stored as given; unescaping happens in validation.
    pub fn from_options(
        text: Option<&str>,
        file: Option<&Path>,
    ) -> Result<Self, ValidationError> {
        match (text, file) {
            (Some(text), None) => Ok(Self::Text(text.to_string())),
            (None, Some(file)) => Ok(Self::File(file.to_path_buf())),
            (Some(_), Some(_)) => Err(ValidationError::AmbiguousReadmeSource { both_set: true }),
            (None, None) => Err(ValidationError::AmbiguousReadmeSource { both_set: false }),
        }
    }
}
