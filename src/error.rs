//! Top-level error types for the packager binary.
//!
//! This module defines the errors surfaced to the user, with recovery hints
//! for the common mistakes.

use crate::bundler::{self, ValidationError};
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, PackagerError>;

/// Main error type for all packager operations
#[derive(Error, Debug)]
pub enum PackagerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Packaging errors
    #[error("{0}")]
    Bundler(#[from] bundler::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl PackagerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        let validation = match self {
            Self::Bundler(bundler::Error::Validation(v)) => v,
            Self::Bundler(bundler::Error::PathCollision { archive_path, .. }) => {
                return vec![format!(
                    "Rename or remove one of the files that would be stored as '{archive_path}'"
                )];
            }
            _ => return vec!["Check the error message above for specific details".to_string()],
        };

        let hint = match validation {
            ValidationError::InvalidName { .. } => {
                "Use only letters, digits and underscores in --name (e.g. My_Mod)"
            }
            ValidationError::DescriptionTooLong { .. } => "Shorten --description to 250 characters",
            ValidationError::InvalidEscape { .. } => {
                "Escape a literal backslash as \\\\, or remove the unsupported escape"
            }
            ValidationError::InvalidVersion { .. } => {
                "Use a numeric version such as 1.0.0 for --version"
            }
            ValidationError::AmbiguousReadmeSource { .. } => {
                "Pass exactly one of --readme or --readmefile"
            }
            ValidationError::FileNotFound { .. } => "Check the listed paths exist",
            ValidationError::InvalidIconDimensions { .. } => "Resize the icon to 256x256 pixels",
            ValidationError::IconDecode { .. } => "Provide the icon as a PNG, JPEG, BMP or GIF image",
        };
        vec![hint.to_string()]
    }

    /// Check if this error is the user's input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Cli(_)
                | Self::Bundler(bundler::Error::Validation(_))
                | Self::Bundler(bundler::Error::PathCollision { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_get_specific_hints() {
        let err = PackagerError::from(bundler::Error::from(ValidationError::InvalidVersion {
            version: "abc".into(),
        }));
        assert!(err.is_input_error());
        assert!(err.recovery_suggestions()[0].contains("1.0.0"));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn io_errors_are_not_input_errors() {
        let err = PackagerError::from(std::io::Error::other("disk full"));
        assert!(!err.is_input_error());
        assert_eq!(err.recovery_suggestions().len(), 1);
    }
}
