//! Package metadata and inputs.

use std::path::{Path, PathBuf};

use super::RequestBuilder;

/// Raw inputs for one package archive.
///
/// Mirrors the command line one to one. Nothing here has been checked yet;
/// pass it through [`validate`](crate::bundler::validate) before use.
///
/// # Examples
///
/// ```no_run
/// use thunderstore_packager::bundler::PackageRequest;
///
/// let request = PackageRequest::builder()
///     .name("Test_Mod")
///     .description("A mod")
///     .version("1.0.0")
///     .icon_path("icon.png")
///     .readme_text("Hello")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackageRequest {
    /// Package name, `[A-Za-z0-9_]+`.
    pub(crate) name: String,

    /// Description, may contain backslash escapes.
    pub(crate) description: String,

    /// Dotted numeric version, emitted verbatim as `version_number`.
    pub(crate) version: String,

    /// Website URL.
    ///
    /// Default: None (written as an empty string)
    pub(crate) website: Option<String>,

    /// Dependency strings in the order given. Not deduplicated.
    pub(crate) dependencies: Vec<String>,

    /// Icon image, must decode to 256x256.
    pub(crate) icon_path: PathBuf,

    /// Inline README text, may contain backslash escapes.
    pub(crate) readme_text: Option<String>,

    /// README file read as UTF-8.
    pub(crate) readme_file: Option<PathBuf>,

    /// Extra files and directories flattened into the archive.
    pub(crate) additional_paths: Vec<PathBuf>,

    /// Directory the archive is written to.
    pub(crate) output_dir: PathBuf,
}

impl PackageRequest {
    /// Starts a [`RequestBuilder`].
    pub fn builder() -> RequestBuilder {
        RequestBuilder::new()
    }

    /// Returns the package name as given.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw (still escaped) description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the raw version string.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the website, or an empty string when unset.
    pub fn website(&self) -> &str {
        self.website.as_deref().unwrap_or_default()
    }

    /// Returns the dependency strings in input order.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Returns the icon path.
    pub fn icon_path(&self) -> &Path {
        &self.icon_path
    }

    /// Returns the inline README text, if given.
    pub fn readme_text(&self) -> Option<&str> {
        self.readme_text.as_deref()
    }

    /// Returns the README file path, if given.
    pub fn readme_file(&self) -> Option<&Path> {
        self.readme_file.as_deref()
    }

    /// Returns the extra files and directories.
    pub fn additional_paths(&self) -> &[PathBuf] {
        &self.additional_paths
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// File name of the archive, `<name>.zip`.
    pub fn archive_file_name(&self) -> String {
        format!("{}.zip", self.name)
    }

    /// Full path of the archive inside the output directory.
    pub fn archive_path(&self) -> PathBuf {
        self.output_dir.join(self.archive_file_name())
    }
}
