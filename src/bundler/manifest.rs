//! Registry manifest (`manifest.json`) generation.
//!
//! The field names and their order are the registry's schema and must not
//! change: `name`, `description`, `version_number`, `dependencies`,
//! `website_url`. `serde` serializes struct fields in declaration order, so
//! the order below is the wire order.

use crate::bundler::{error::Result, validate::ValidatedRequest};
use serde::{Deserialize, Serialize};

/// Archive entry name of the manifest.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Package metadata as stored in the archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRecord {
    /// Package name.
    pub name: String,
    /// Unescaped description.
    pub description: String,
    /// Version, verbatim.
    #[serde(rename = "version_number")]
    pub version: String,
    /// Dependency strings in input order.
    pub dependencies: Vec<String>,
    /// Website, empty when absent.
    #[serde(rename = "website_url")]
    pub website: String,
}

impl ManifestRecord {
    /// Builds the record from a validated request.
    pub fn from_request(request: &ValidatedRequest) -> Self {
        Self {
            name: request.name().to_string(),
            description: request.description().to_string(),
            version: request.version().as_str().to_string(),
            dependencies: request.dependencies().to_vec(),
            website: request.website().to_string(),
        }
    }

    /// Serializes to compact UTF-8 JSON.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Builds the manifest for `request` and returns its serialized bytes.
pub fn build(request: &ValidatedRequest) -> Result<Vec<u8>> {
    ManifestRecord::from_request(request).to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ManifestRecord {
        ManifestRecord {
            name: "Test_Mod".into(),
            description: "A mod".into(),
            version: "1.0.0".into(),
            dependencies: vec![],
            website: String::new(),
        }
    }

    #[test]
    fn serializes_compact_in_schema_order() {
        let json = String::from_utf8(record().to_bytes().unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Test_Mod","description":"A mod","version_number":"1.0.0","dependencies":[],"website_url":""}"#
        );
    }

    #[test]
    fn dependencies_and_special_characters() {
        let mut manifest = record();
        manifest.description = "Line \"one\"\nLine two".into();
        manifest.dependencies = vec!["b-dep-2.0.0".into(), "a-dep-1.0.0".into()];
        manifest.website = "https://example.com".into();

        let json = String::from_utf8(manifest.to_bytes().unwrap()).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"name":"Test_Mod","description":"Line \"one\"\nLine two","version_number":"1.0.0","#,
                r#""dependencies":["b-dep-2.0.0","a-dep-1.0.0"],"website_url":"https://example.com"}"#
            )
        );

        let parsed: ManifestRecord = serde_json::from_slice(json.as_bytes()).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn serialization_is_deterministic() {
        assert_eq!(record().to_bytes().unwrap(), record().to_bytes().unwrap());
    }
}
