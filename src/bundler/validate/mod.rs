//! Request validation.
//!
//! [`validate`] runs every check on a [`PackageRequest`] before anything is
//! written to disk. Checks run in a fixed order and stop at the first
//! failure:
//!
//! 1. name characters
//! 2. description length, then its escapes
//! 3. version format
//! 4. README source (exactly one), then inline text escapes
//! 5. icon exists
//! 6. icon decodes to 256x256
//! 7. README file exists
//! 8. every additional path exists (all missing paths reported together)

mod name;

pub use name::is_valid_name;

use crate::bundler::{
    error::{MAX_DESCRIPTION_LEN, ValidationError},
    icon::Icon,
    settings::{PackageRequest, PackageVersion, ReadmeSource},
    utils::{
        escape::unescape,
        fs::{PathKind, missing_paths, path_kind},
    },
};
use std::path::{Path, PathBuf};

/// A request that passed every check in [`validate`].
///
/// Holds the processed forms of the inputs: unescaped text, the parsed
/// version, the single README source and the decoded icon.
#[derive(Debug)]
pub struct ValidatedRequest {
    name: String,
    description: String,
    version: PackageVersion,
    website: String,
    dependencies: Vec<String>,
    icon: Icon,
    readme: ReadmeSource,
    additional_paths: Vec<PathBuf>,
    output_dir: PathBuf,
}

impl ValidatedRequest {
    /// Package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description with escapes decoded.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Parsed version.
    pub fn version(&self) -> &PackageVersion {
        &self.version
    }

    /// Website, empty when none was given.
    pub fn website(&self) -> &str {
        &self.website
    }

    /// Dependency strings in input order.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Decoded 256x256 icon.
    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    /// README source; inline text is already unescaped.
    pub fn readme(&self) -> &ReadmeSource {
        &self.readme
    }

    /// Extra files and directories, all known to exist at validation time.
    pub fn additional_paths(&self) -> &[PathBuf] {
        &self.additional_paths
    }

    /// Directory the archive is written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Full path of `<name>.zip` in the output directory.
    pub fn archive_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.zip", self.name))
    }
}

/// Checks `request` and returns its validated form.
///
/// Reads the icon (to decode it) and stats the other input paths, but never
/// creates, truncates or opens the output archive.
pub fn validate(request: &PackageRequest) -> Result<ValidatedRequest, ValidationError> {
    if !is_valid_name(request.name()) {
        return Err(ValidationError::InvalidName {
            name: request.name().to_string(),
        });
    }

    // UTF-16 code units, the unit the registry counts in.
    let length = request.description().encode_utf16().count();
    if length > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooLong {
            length,
            max: MAX_DESCRIPTION_LEN,
        });
    }
    let description = unescape(request.description()).map_err(|reason| {
        ValidationError::InvalidEscape {
            field: "description",
            reason,
        }
    })?;

    let version = request
        .version()
        .parse::<PackageVersion>()
        .map_err(|_| ValidationError::InvalidVersion {
            version: request.version().to_string(),
        })?;

    let readme = match ReadmeSource::from_options(request.readme_text(), request.readme_file())? {
        ReadmeSource::Text(text) => {
            ReadmeSource::Text(unescape(&text).map_err(|reason| ValidationError::InvalidEscape {
                field: "readme",
                reason,
            })?)
        }
        file => file,
    };

    if path_kind(request.icon_path()) != PathKind::File {
        return Err(ValidationError::file_not_found(request.icon_path()));
    }
    let icon = Icon::load(request.icon_path())?;
    icon.ensure_dimensions()?;

    if let ReadmeSource::File(path) = &readme {
        if path_kind(path) != PathKind::File {
            return Err(ValidationError::file_not_found(path));
        }
    }

    let missing = missing_paths(request.additional_paths());
    if !missing.is_empty() {
        return Err(ValidationError::FileNotFound { paths: missing });
    }

    log::debug!(
        "Validated package {} {} ({} dependencies, {} additional paths)",
        request.name(),
        version,
        request.dependencies().len(),
        request.additional_paths().len()
    );

    Ok(ValidatedRequest {
        name: request.name().to_string(),
        description,
        version,
        website: request.website().to_string(),
        dependencies: request.dependencies().to_vec(),
        icon,
        readme,
        additional_paths: request.additional_paths().to_vec(),
        output_dir: request.output_dir().to_path_buf(),
    })
}
