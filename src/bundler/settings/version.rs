//! Dotted numeric package versions.

use std::{fmt, str::FromStr};

/// A version of two to four dot-separated non-negative integers.
///
/// `1.0`, `1.2.3` and `1.2.3.4` parse; `1`, `1.2.x`, `-1.0` and `1..2` do
/// not. Each component must fit in an `i32`. The original string is kept so
/// the manifest can emit it verbatim (`01.2.3` stays `01.2.3`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageVersion {
    raw: String,
}

/// Returned when a string is not a dotted numeric version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVersionError;

impl fmt::Display for ParseVersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not a dotted numeric version")
    }
}

impl std::error::Error for ParseVersionError {}

impl PackageVersion {
    /// Returns the version exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for PackageVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut count = 0;
        for part in s.split('.') {
            parse_component(part)?;
            count += 1;
        }

        if !(2..=4).contains(&count) {
            return Err(ParseVersionError);
        }

        Ok(Self { raw: s.to_string() })
    }
}

fn parse_component(part: &str) -> Result<u32, ParseVersionError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseVersionError);
    }
    part.parse::<i32>()
        .ok()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(ParseVersionError)
}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_dotted_numeric_versions() {
        for ok in ["1.0", "1.2.3", "0.0.0", "1.2.3.4", "10.20.30"] {
            assert!(ok.parse::<PackageVersion>().is_ok(), "{ok} should parse");
        }
    }

    #[test]
    fn rejects_everything_else() {
        for bad in ["abc", "1.2.x", "1", "", "1..2", "1.2.3.4.5", "-1.0", "+1.0", " 1.0", "1.0-beta", "1.99999999999"] {
            assert_eq!(
                bad.parse::<PackageVersion>(),
                Err(ParseVersionError),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn keeps_original_text() {
        let version: PackageVersion = "01.2.3".parse().unwrap();
        assert_eq!(version.as_str(), "01.2.3");
        assert_eq!(version.to_string(), "01.2.3");
    }
}
