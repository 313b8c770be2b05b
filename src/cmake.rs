//! Declared project version from the CMake build configuration.
//!
//! The version comes from a `PROJECT(<name> VERSION X.Y.Z ...)` call. When
//! fix revisions are enabled, a `SET(VERSION_CPPFIX "N")` call appends a
//! fix revision; otherwise it is ignored.

use crate::domain::version::is_canonical_number;
use crate::domain::{validate_version, validate_version_with_fix, ReleaseVersion, Version};
use crate::error::{DocReleaseError, Result};
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Default build configuration file name
pub const BUILD_FILE: &str = "CMakeLists.txt";

fn project_version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?im)PROJECT\s*\([^)]*VERSION\s+(\d+\.\d+\.\d+)[^)]*\)")
            .expect("project version pattern is valid")
    })
}

fn fix_revision_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)SET\s*\(\s*VERSION_CPPFIX\s+"?([^")\s]*)"?\s*\)"#)
            .expect("fix revision pattern is valid")
    })
}

/// Version declared by the build configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclaredVersion {
    pub base: Version,
    pub fix: Option<u32>,
}

impl DeclaredVersion {
    pub fn new(base: Version, fix: Option<u32>) -> Self {
        DeclaredVersion { base, fix }
    }

    /// The `-SNAPSHOT` version built from this declaration
    pub fn snapshot(&self) -> ReleaseVersion {
        ReleaseVersion::snapshot_of(self.base, self.fix)
    }
}

impl fmt::Display for DeclaredVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fix {
            Some(fix) => write!(f, "{}.{}", self.base, fix),
            None => write!(f, "{}", self.base),
        }
    }
}

/// Extract the declared version from build configuration text.
///
/// `allow_fix` reads `VERSION_CPPFIX` as the fix revision; without it the
/// declared version is the bare `PROJECT` version.
///
/// # Returns
/// * `Ok(DeclaredVersion)` - The `PROJECT` version and optional fix revision
/// * `Err` - A `Declaration` error when no usable `PROJECT` version exists or
///   the fix revision is not a number
pub fn parse_declared_version(content: &str, allow_fix: bool) -> Result<DeclaredVersion> {
    let caps = project_version_regex()
        .captures(content)
        .ok_or_else(|| DocReleaseError::declaration("Could not extract PROJECT VERSION"))?;

    let text = &caps[1];
    let base = Version::parse(text).map_err(|_| {
        DocReleaseError::declaration(format!(
            "Invalid base version format in build configuration: {}",
            text
        ))
    })?;

    if !allow_fix {
        return Ok(DeclaredVersion { base, fix: None });
    }

    let fix = match fix_revision_regex().captures(content) {
        Some(caps) => {
            let raw = caps[1].trim();
            if raw.is_empty() {
                None
            } else {
                let fix = raw
                    .parse::<u32>()
                    .ok()
                    .filter(|_| is_canonical_number(raw))
                    .ok_or_else(|| {
                        DocReleaseError::declaration(format!(
                            "Invalid VERSION_CPPFIX value: '{}'",
                            raw
                        ))
                    })?;
                Some(fix)
            }
        }
        None => None,
    };

    Ok(DeclaredVersion { base, fix })
}

/// Read the declared version from a build configuration file.
///
/// # Returns
/// * `Err(NotFound)` - If the file does not exist
/// * `Err(Declaration)` - If the file has no usable declaration
pub fn read_declared_version(path: &Path, allow_fix: bool) -> Result<DeclaredVersion> {
    if !path.exists() {
        return Err(DocReleaseError::not_found(path));
    }

    let content = fs::read_to_string(path)?;
    let declared = parse_declared_version(&content, allow_fix)?;
    tracing::debug!(path = %path.display(), version = %declared, "read declared version");
    Ok(declared)
}

/// Resolve the version to stamp or publish.
///
/// An explicit version must be a valid release tag; `allow_fix` additionally
/// accepts `X.Y.Z.F`. Without one, the declared version from `build_file`
/// is used with a `-SNAPSHOT` suffix; its fix revision is included only
/// under `allow_fix`.
pub fn resolve_version(
    explicit: Option<&str>,
    build_file: &Path,
    allow_fix: bool,
) -> Result<String> {
    match explicit {
        Some(version) => {
            let valid = if allow_fix {
                validate_version_with_fix(version)
            } else {
                validate_version(version)
            };
            if !valid {
                return Err(DocReleaseError::version(format!(
                    "Invalid version format: {}",
                    version
                )));
            }
            Ok(version.to_string())
        }
        None => Ok(read_declared_version(build_file, allow_fix)?
            .snapshot()
            .to_string()),
    }
}
