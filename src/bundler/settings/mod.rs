//! Input types for a packaging run.
//!
//! A [`PackageRequest`] is the raw, unchecked bundle of CLI inputs. It is
//! built once with [`RequestBuilder`] and handed to
//! [`validate`](crate::bundler::validate). The stronger types here
//! ([`ReadmeSource`], [`PackageVersion`]) only exist after validation.

mod builder;
mod package;
mod readme;
mod version;

pub use builder::RequestBuilder;
pub use package::PackageRequest;
pub use readme::ReadmeSource;
pub use version::PackageVersion;
