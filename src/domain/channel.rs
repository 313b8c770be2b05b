//! Release channel handling for version strings
//!
//! A version string carries at most one channel suffix: `-rcN` for a release
//! candidate (N >= 1) or `-SNAPSHOT` for in-development builds. No suffix
//! means a final release.

use crate::error::{DocReleaseError, Result};
use std::fmt;
use std::str::FromStr;

/// Suffix marking an unreleased, in-development version
pub const SNAPSHOT_SUFFIX: &str = "SNAPSHOT";

/// Release channel of a version.
///
/// Variant order is the channel precedence for the same base version:
/// a snapshot is older than any release candidate, which is older than the
/// final release. Candidates compare by ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Channel {
    /// In-development build (`-SNAPSHOT`)
    Snapshot,
    /// Release candidate with its ordinal (`-rcN`)
    ReleaseCandidate(u32),
    /// Final release (no suffix)
    Final,
}

impl Channel {
    /// Parse a channel from the suffix that follows the `-` separator.
    ///
    /// Accepts `"rcN"` with N >= 1 and `"SNAPSHOT"` (case-sensitive).
    ///
    /// # Examples
    /// ```ignore
    /// assert_eq!(Channel::parse("rc2")?, Channel::ReleaseCandidate(2));
    /// assert_eq!(Channel::parse("SNAPSHOT")?, Channel::Snapshot);
    /// ```
    pub fn parse(suffix: &str) -> Result<Self> {
        suffix.parse()
    }

    /// Release-candidate ordinal, if any
    pub fn rc(&self) -> Option<u32> {
        match self {
            Channel::ReleaseCandidate(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, Channel::Final)
    }

    pub fn is_snapshot(&self) -> bool {
        matches!(self, Channel::Snapshot)
    }
}

impl FromStr for Channel {
    type Err = DocReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        if s == SNAPSHOT_SUFFIX {
            return Ok(Channel::Snapshot);
        }

        let ordinal = s.strip_prefix("rc").ok_or_else(|| {
            DocReleaseError::version(format!("Unrecognized version suffix: '{}'", s))
        })?;

        if !crate::domain::version::is_canonical_number(ordinal) {
            return Err(DocReleaseError::version(format!(
                "Invalid release candidate number: '{}'",
                ordinal
            )));
        }

        let n = ordinal.parse::<u32>().map_err(|_| {
            DocReleaseError::version(format!("Release candidate number out of range: '{}'", ordinal))
        })?;

        if n == 0 {
            return Err(DocReleaseError::version(
                "Release candidate numbers start at 1".to_string(),
            ));
        }

        Ok(Channel::ReleaseCandidate(n))
    }
}

/// Formats the suffix including its `-` separator, empty for final releases
impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Snapshot => write!(f, "-{}", SNAPSHOT_SUFFIX),
            Channel::ReleaseCandidate(n) => write!(f, "-rc{}", n),
            Channel::Final => Ok(()),
        }
    }
}
