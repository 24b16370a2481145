//! Builder for constructing a PackageRequest.

use super::PackageRequest;
use std::path::{Path, PathBuf};

/// Builder for constructing [`PackageRequest`].
///
/// Every setter is infallible; the checks live in
/// [`validate`](crate::bundler::validate) so that their order and error
/// reporting stay in one place.
///
/// # Examples
///
/// ```no_run
/// use thunderstore_packager::bundler::RequestBuilder;
///
/// let request = RequestBuilder::new()
///     .name("Test_Mod")
///     .description("A mod")
///     .version("1.0.0")
///     .website("https://example.com")
///     .dependencies(["BepInEx-BepInExPack-5.4.2100"])
///     .icon_path("icon.png")
///     .readme_file("README.md")
///     .additional_paths(["plugins", "CHANGELOG.md"])
///     .output_dir("dist")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct RequestBuilder {
    request: PackageRequest,
}

impl RequestBuilder {
    /// Creates a new builder.
    ///
    /// The output directory defaults to `.` and the icon to `./icon.png`.
    pub fn new() -> Self {
        Self {
            request: PackageRequest {
                icon_path: PathBuf::from("./icon.png"),
                output_dir: PathBuf::from("."),
                ..Default::default()
            },
        }
    }

    /// Sets the package name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.request.name = name.into();
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.request.description = description.into();
        self
    }

    /// Sets the version string.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.request.version = version.into();
        self
    }

    /// Sets the website URL.
    ///
    /// Default: None
    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.request.website = Some(website.into());
        self
    }

    /// Replaces the dependency list.
    pub fn dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the icon path.
    pub fn icon_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.request.icon_path = path.as_ref().to_path_buf();
        self
    }

    /// Sets inline README text.
    pub fn readme_text(mut self, text: impl Into<String>) -> Self {
        self.request.readme_text = Some(text.into());
        self
    }

    /// Sets the README file.
    pub fn readme_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.request.readme_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Replaces the list of extra files and directories.
    pub fn additional_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.request.additional_paths = paths
            .into_iter()
            .map(|p| p.as_ref().to_path_buf())
            .collect();
        self
    }

    /// Sets the output directory.
    ///
    /// Default: `.`
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.request.output_dir = path.as_ref().to_path_buf();
        self
    }

    /// Finishes the request.
    pub fn build(self) -> PackageRequest {
        self.request
    }
}
