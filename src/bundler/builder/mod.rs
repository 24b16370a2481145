//! Package orchestration.
//!
//! This module provides the main [`Bundler`] orchestrator that runs a
//! [`PackageRequest`](crate::bundler::PackageRequest) through the whole
//! pipeline and produces the package archive.
//!
//! # Overview
//!
//! The bundler:
//! 1. Validates the request (nothing on disk changes if this fails)
//! 2. Builds `manifest.json`
//! 3. Resolves the README and re-encodes the icon as PNG
//! 4. Flattens additional files and directories
//! 5. Writes `<name>.zip` and returns a [`PackagedArchive`]
//!
//! # Example
//!
//! ```no_run
//! use thunderstore_packager::bundler::{Bundler, PackageRequest};
//!
//! # fn example() -> thunderstore_packager::bundler::Result<()> {
//! let request = PackageRequest::builder()
//!     .name("Test_Mod")
//!     .description("A mod")
//!     .version("1.0.0")
//!     .icon_path("icon.png")
//!     .readme_file("README.md")
//!     .additional_paths(["plugins"])
//!     .build();
//!
//! let archive = Bundler::new(request).bundle()?;
//! println!("Created: {} ({} bytes)", archive.path.display(), archive.size);
//! # Ok(())
//! # }
//! ```

mod orchestrator;

pub use orchestrator::{Bundler, PackagedArchive};
