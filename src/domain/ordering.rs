//! Version ordering for published documentation directories
//!
//! One convention applies everywhere: across bases the higher
//! `MAJOR.MINOR.PATCH[.FIX]` is newer; within a base a final release is newer
//! than its release candidates (higher ordinal newer), which are newer than
//! its snapshot. Names that are not versions sort after every version in a
//! newest-first listing.

use crate::domain::channel::Channel;
use crate::domain::version::ReleaseVersion;
use std::cmp::Ordering;

/// Sortable projection of a version string.
///
/// Ascending order runs from oldest to newest. `Unparseable` is the single
/// sentinel for every malformed name and compares below all versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SortKey {
    Unparseable,
    Version {
        major: u32,
        minor: u32,
        patch: u32,
        fix: Option<u32>,
        channel: Channel,
    },
}

impl SortKey {
    /// Compute the key for a version string, never failing
    pub fn of(name: &str) -> Self {
        match ReleaseVersion::parse(name) {
            Ok(version) => SortKey::from(&version),
            Err(_) => SortKey::Unparseable,
        }
    }
}

impl From<&ReleaseVersion> for SortKey {
    fn from(version: &ReleaseVersion) -> Self {
        SortKey::Version {
            major: version.base.major,
            minor: version.base.minor,
            patch: version.base.patch,
            fix: version.fix,
            channel: version.channel,
        }
    }
}

/// Compare two names for a newest-first listing.
///
/// Distinct version names always have distinct keys; unparseable names share
/// one key and fall back to lexical order so the listing is deterministic.
pub fn newest_first(a: &str, b: &str) -> Ordering {
    SortKey::of(b)
        .cmp(&SortKey::of(a))
        .then_with(|| a.cmp(b))
}

/// Sort names newest first in place
pub fn sort_newest_first<S: AsRef<str>>(names: &mut [S]) {
    names.sort_by(|a, b| newest_first(a.as_ref(), b.as_ref()));
}

/// Newest final release among the names, if any
pub fn latest_stable<S: AsRef<str>>(names: &[S]) -> Option<&str> {
    names
        .iter()
        .map(|name| name.as_ref())
        .filter_map(|name| ReleaseVersion::parse(name).ok().map(|v| (name, v)))
        .filter(|(_, version)| version.is_final())
        .max_by(|(a, va), (b, vb)| {
            SortKey::from(va)
                .cmp(&SortKey::from(vb))
                .then_with(|| b.cmp(a))
        })
        .map(|(name, _)| name)
}
