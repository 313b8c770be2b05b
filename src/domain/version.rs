use crate::domain::channel::Channel;
use crate::error::{DocReleaseError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Matches every recognized shape: `X.Y.Z`, `X.Y.Z-rcN`, `X.Y.Z-SNAPSHOT`,
/// `X.Y.Z.F` and `X.Y.Z.F-SNAPSHOT`. Shape combinations are checked after the match.
///
/// Numeric segments have no leading zeros, so every version has one spelling.
fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:\.(0|[1-9]\d*))?(?:-([A-Za-z0-9]+))?$",
        )
        .expect("version pattern is valid")
    })
}

/// Decimal digits without a leading zero (a lone `0` is fine)
pub(crate) fn is_canonical_number(text: &str) -> bool {
    !text.is_empty()
        && text.chars().all(|c| c.is_ascii_digit())
        && (text == "0" || !text.starts_with('0'))
}

fn parse_component(text: &str, name: &str) -> Result<u32> {
    text.parse::<u32>()
        .map_err(|_| DocReleaseError::version(format!("Invalid {} version: {}", name, text)))
}

/// Base version triple (`MAJOR.MINOR.PATCH`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a strict `X.Y.Z` string (no prefix, no suffix)
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split('.').collect();
        let well_formed = parts.len() == 3 && parts.iter().all(|p| is_canonical_number(p));
        if !well_formed {
            return Err(DocReleaseError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                text
            )));
        }

        Ok(Version {
            major: parse_component(parts[0], "major")?,
            minor: parse_component(parts[1], "minor")?,
            patch: parse_component(parts[2], "patch")?,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// A parsed version string with its structured components.
///
/// `1.2.3-rc4` has base `1.2.3` and channel `ReleaseCandidate(4)`;
/// `1.2.3.1-SNAPSHOT` has base `1.2.3`, fix revision `1` and channel `Snapshot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReleaseVersion {
    pub base: Version,
    /// Dependent-ecosystem fix revision appended as a fourth segment
    pub fix: Option<u32>,
    pub channel: Channel,
}

impl ReleaseVersion {
    pub fn new(base: Version, fix: Option<u32>, channel: Channel) -> Self {
        ReleaseVersion { base, fix, channel }
    }

    /// Snapshot of a declared base version (`X.Y.Z[.F]-SNAPSHOT`)
    pub fn snapshot_of(base: Version, fix: Option<u32>) -> Self {
        ReleaseVersion::new(base, fix, Channel::Snapshot)
    }

    /// Parse any recognized version shape.
    ///
    /// # Returns
    /// * `Ok(ReleaseVersion)` - Structured components
    /// * `Err` - A `Version` error when the string fits no shape
    ///
    /// # Example
    /// ```ignore
    /// let v = ReleaseVersion::parse("1.2.3-rc4")?;
    /// assert_eq!(v.rc(), Some(4));
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let caps = version_regex().captures(text).ok_or_else(|| {
            DocReleaseError::version(format!("Invalid version format: {}", text))
        })?;

        let base = Version::new(
            parse_component(&caps[1], "major")?,
            parse_component(&caps[2], "minor")?,
            parse_component(&caps[3], "patch")?,
        );
        let fix = caps
            .get(4)
            .map(|m| parse_component(m.as_str(), "fix"))
            .transpose()?;
        let channel = match caps.get(5) {
            Some(suffix) => Channel::parse(suffix.as_str())?,
            None => Channel::Final,
        };

        if fix.is_some() && channel.rc().is_some() {
            return Err(DocReleaseError::version(format!(
                "Release candidates cannot carry a fix revision: {}",
                text
            )));
        }

        Ok(ReleaseVersion { base, fix, channel })
    }

    /// Release-candidate ordinal, if any
    pub fn rc(&self) -> Option<u32> {
        self.channel.rc()
    }

    pub fn is_final(&self) -> bool {
        self.channel.is_final()
    }

    pub fn is_snapshot(&self) -> bool {
        self.channel.is_snapshot()
    }

    /// Base version including the fix revision, without channel suffix
    pub fn base_string(&self) -> String {
        match self.fix {
            Some(fix) => format!("{}.{}", self.base, fix),
            None => self.base.to_string(),
        }
    }
}

impl FromStr for ReleaseVersion {
    type Err = DocReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        ReleaseVersion::parse(s)
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base_string(), self.channel)
    }
}

/// Validate a release tag: `X.Y.Z` or `X.Y.Z-rcN`.
///
/// Snapshot suffixes and fix revisions are not valid tag shapes.
pub fn validate_version(text: &str) -> bool {
    matches!(
        ReleaseVersion::parse(text),
        Ok(v) if v.fix.is_none() && !v.is_snapshot()
    )
}

/// Validate a release tag when fix revisions are enabled: also accepts `X.Y.Z.F`.
pub fn validate_version_with_fix(text: &str) -> bool {
    matches!(ReleaseVersion::parse(text), Ok(v) if !v.is_snapshot())
}

/// Split a release tag into its base version and release-candidate ordinal.
///
/// # Example
/// ```ignore
/// assert_eq!(split_version("1.2.3-rc4")?, ("1.2.3".to_string(), Some(4)));
/// assert_eq!(split_version("1.2.3")?, ("1.2.3".to_string(), None));
/// ```
pub fn split_version(text: &str) -> Result<(String, Option<u32>)> {
    if !validate_version(text) {
        return Err(DocReleaseError::version(format!(
            "Invalid version format: {}",
            text
        )));
    }

    let version = ReleaseVersion::parse(text)?;
    Ok((version.base_string(), version.rc()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("1.2.3.4").is_err());
        assert!(Version::parse("v1.2.3").is_err());
        assert!(Version::parse("1..3").is_err());
        assert!(Version::parse("1.2.+3").is_err());
        assert!(Version::parse("01.2.3").is_err());
        assert!(Version::parse("1.02.3").is_err());
    }

    #[test]
    fn test_leading_zeros_rejected() {
        assert!(ReleaseVersion::parse("01.0.0").is_err());
        assert!(ReleaseVersion::parse("1.00.0").is_err());
        assert!(ReleaseVersion::parse("1.0.00").is_err());
        assert!(ReleaseVersion::parse("1.0.0.01").is_err());
        assert!(ReleaseVersion::parse("1.0.0-rc01").is_err());
        assert!(!validate_version("01.2.3"));

        let v = ReleaseVersion::parse("0.10.0.0").unwrap();
        assert_eq!(v.to_string(), "0.10.0.0");
    }

    #[test]
    fn test_validate_version_valid_formats() {
        assert!(validate_version("1.2.3"));
        assert!(validate_version("0.0.1"));
        assert!(validate_version("10.20.30"));
        assert!(validate_version("1.2.3-rc1"));
        assert!(validate_version("1.2.3-rc15"));
    }

    #[test]
    fn test_validate_version_invalid_formats() {
        assert!(!validate_version("1.2"));
        assert!(!validate_version("1.2.3.4"));
        assert!(!validate_version("1.2.3-alpha1"));
        assert!(!validate_version("1.2.3-SNAPSHOT"));
        assert!(!validate_version("1.2.3-rc0"));
        assert!(!validate_version("1.x.3"));
        assert!(!validate_version("invalid"));
        assert!(!validate_version(""));
        assert!(!validate_version(" 1.2.3"));
    }

    #[test]
    fn test_validate_version_with_fix() {
        assert!(validate_version_with_fix("1.2.3.4"));
        assert!(validate_version_with_fix("1.2.3-rc2"));
        assert!(!validate_version_with_fix("1.2.3.4-SNAPSHOT"));
        assert!(!validate_version_with_fix("1.2.3.4.5"));
    }

    #[test]
    fn test_split_version() {
        assert_eq!(
            split_version("1.2.3-rc4").unwrap(),
            ("1.2.3".to_string(), Some(4))
        );
        assert_eq!(split_version("1.2.3").unwrap(), ("1.2.3".to_string(), None));
    }

    #[test]
    fn test_split_version_malformed_is_error() {
        let err = split_version("1.2.3-beta").unwrap_err();
        assert!(matches!(err, DocReleaseError::Version(_)));
    }

    #[test]
    fn test_release_version_shapes() {
        let v = ReleaseVersion::parse("1.2.3").unwrap();
        assert!(v.is_final());
        assert_eq!(v.fix, None);

        let v = ReleaseVersion::parse("1.2.3-rc2").unwrap();
        assert_eq!(v.rc(), Some(2));

        let v = ReleaseVersion::parse("1.2.3-SNAPSHOT").unwrap();
        assert!(v.is_snapshot());

        let v = ReleaseVersion::parse("1.2.3.7").unwrap();
        assert_eq!(v.fix, Some(7));
        assert!(v.is_final());

        let v = ReleaseVersion::parse("1.2.3.7-SNAPSHOT").unwrap();
        assert_eq!(v.fix, Some(7));
        assert!(v.is_snapshot());
    }

    #[test]
    fn test_release_version_rejects_fix_with_rc() {
        assert!(ReleaseVersion::parse("1.2.3.1-rc1").is_err());
    }

    #[test]
    fn test_release_version_rejects_overflow() {
        assert!(ReleaseVersion::parse("99999999999.0.0").is_err());
    }

    #[test]
    fn test_release_version_display_round_trips() {
        for text in ["0.9.0", "1.0.0-rc2", "2.1.0-SNAPSHOT", "3.0.1.2", "3.0.1.2-SNAPSHOT"] {
            assert_eq!(ReleaseVersion::parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_snapshot_of() {
        let v = ReleaseVersion::snapshot_of(Version::new(1, 2, 3), None);
        assert_eq!(v.to_string(), "1.2.3-SNAPSHOT");

        let v = ReleaseVersion::snapshot_of(Version::new(1, 2, 3), Some(2));
        assert_eq!(v.to_string(), "1.2.3.2-SNAPSHOT");
    }

    #[test]
    fn test_release_version_from_str() {
        let v: ReleaseVersion = "4.5.6-rc1".parse().unwrap();
        assert_eq!(v.base, Version::new(4, 5, 6));
        assert_eq!(v.base_string(), "4.5.6");
    }
}
