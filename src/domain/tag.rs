use crate::domain::version::{validate_version, validate_version_with_fix, ReleaseVersion};
use crate::error::{DocReleaseError, Result};

/// Represents a release tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Whether the tag has a valid release shape.
    ///
    /// `allow_fix` additionally accepts a fourth fix-revision segment.
    pub fn is_valid(&self, allow_fix: bool) -> bool {
        if allow_fix {
            validate_version_with_fix(&self.name)
        } else {
            validate_version(&self.name)
        }
    }

    /// Base version of the tag with any rc suffix removed
    /// (e.g., "1.2.3-rc1" -> "1.2.3", "1.2.3.2" -> "1.2.3.2")
    pub fn version_part(&self, allow_fix: bool) -> Result<String> {
        if !self.is_valid(allow_fix) {
            return Err(DocReleaseError::version(format!(
                "Invalid tag format: {}",
                self.name
            )));
        }
        Ok(ReleaseVersion::parse(&self.name)?.base_string())
    }
}

/// Tags that release a declared version: the exact version or the version
/// followed by a `-` suffix or a `.` fix revision.
#[derive(Debug, Clone)]
pub struct TagPattern {
    pub version: String,
}

impl TagPattern {
    /// Create a pattern for a declared version string
    pub fn new(version: impl Into<String>) -> Self {
        TagPattern {
            version: version.into(),
        }
    }

    /// Glob for listing candidate tags (e.g., "1.2.3" -> "1.2.3*")
    pub fn glob(&self) -> String {
        format!("{}*", self.version)
    }

    /// Validate if a tag releases this version.
    ///
    /// The glob also lists tags such as `1.2.30` for `1.2.3`; those do not match.
    pub fn matches(&self, tag: &str) -> Result<bool> {
        if self.version.is_empty() {
            return Err(DocReleaseError::version("Empty version in tag pattern"));
        }

        let escaped = regex::escape(&self.version);
        match regex::Regex::new(&format!(r"^{}(?:[-.].*)?$", escaped)) {
            Ok(re) => Ok(re.is_match(tag)),
            Err(_) => Err(DocReleaseError::version("Invalid tag pattern")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_version_part_strips_rc() {
        assert_eq!(Tag::new("1.2.3-rc1").version_part(false).unwrap(), "1.2.3");
        assert_eq!(Tag::new("1.2.3").version_part(false).unwrap(), "1.2.3");
    }

    #[test]
    fn test_tag_version_part_with_fix() {
        assert!(Tag::new("1.2.3.2").version_part(false).is_err());
        assert_eq!(Tag::new("1.2.3.2").version_part(true).unwrap(), "1.2.3.2");
    }

    #[test]
    fn test_tag_invalid() {
        assert!(!Tag::new("v1.2.3").is_valid(false));
        assert!(Tag::new("v1.2.3").version_part(true).is_err());
    }

    #[test]
    fn test_pattern_glob() {
        assert_eq!(TagPattern::new("1.2.3").glob(), "1.2.3*");
    }

    #[test]
    fn test_pattern_matches() {
        let pattern = TagPattern::new("1.2.3");
        assert!(pattern.matches("1.2.3").unwrap());
        assert!(pattern.matches("1.2.3-rc2").unwrap());
        assert!(pattern.matches("1.2.3.1").unwrap());
        assert!(!pattern.matches("1.2.30").unwrap());
        assert!(!pattern.matches("1.2.4").unwrap());
        assert!(!pattern.matches("11.2.3").unwrap());
    }

    #[test]
    fn test_pattern_escapes_dots() {
        let pattern = TagPattern::new("1.2.3");
        assert!(!pattern.matches("1x2x3").unwrap());
    }
}
