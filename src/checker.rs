//! Release tag consistency checks against the declared project version

use crate::cmake::DeclaredVersion;
use crate::domain::{Tag, TagPattern};
use crate::error::{DocReleaseError, Result};
use crate::git::Repository;

/// What a successful check established
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The tag's base version matches the declared version
    Release { tag: String },
    /// No release of the declared version exists yet
    Snapshot { version: String },
}

/// Checks release tags against the declared version.
pub struct VersionChecker<'a, R: Repository> {
    repo: &'a R,
    remote: String,
    allow_fix: bool,
}

impl<'a, R: Repository> VersionChecker<'a, R> {
    pub fn new(repo: &'a R, remote: impl Into<String>) -> Self {
        VersionChecker {
            repo,
            remote: remote.into(),
            allow_fix: false,
        }
    }

    /// Accept `X.Y.Z.F` tags and compare fix revisions
    pub fn with_fix_revision(mut self, allow_fix: bool) -> Self {
        self.allow_fix = allow_fix;
        self
    }

    /// Run the check.
    ///
    /// With a tag (release mode), the tag must be well formed and its base
    /// version, rc suffix removed, must equal the declared version.
    /// Without one (snapshot mode), no tag releasing the declared version may
    /// exist on the remote.
    pub fn check(&self, declared: &DeclaredVersion, tag: Option<&str>) -> Result<CheckOutcome> {
        let declared = declared.to_string();
        tracing::info!("Base version in build configuration: '{}'", declared);

        match tag {
            Some(tag) => self.check_release(&declared, tag),
            None => self.check_snapshot(&declared),
        }
    }

    fn check_release(&self, declared: &str, tag: &str) -> Result<CheckOutcome> {
        let tag = Tag::new(tag);
        if !tag.is_valid(self.allow_fix) {
            return Err(DocReleaseError::version(format!(
                "Invalid tag format: {}",
                tag.name
            )));
        }

        tracing::info!("Input tag: '{}'", tag.name);
        tracing::info!("Release mode: checking version consistency...");

        let tag_base = tag.version_part(self.allow_fix)?;
        if tag_base != declared {
            return Err(DocReleaseError::Mismatch {
                tag: tag_base,
                declared: declared.to_string(),
            });
        }

        tracing::info!("Version consistency check passed: '{}'", tag.name);
        Ok(CheckOutcome::Release { tag: tag.name })
    }

    fn check_snapshot(&self, declared: &str) -> Result<CheckOutcome> {
        tracing::info!("Snapshot mode: fetching tags...");
        self.repo.fetch_tags(&self.remote)?;

        let pattern = TagPattern::new(declared);
        let mut released = Vec::new();
        for tag in self.repo.list_tags(&pattern.glob())? {
            if pattern.matches(&tag)? {
                released.push(tag);
            }
        }

        if !released.is_empty() {
            tracing::debug!(tags = ?released, "existing release tags");
            return Err(DocReleaseError::AlreadyReleased(declared.to_string()));
        }

        let snapshot = format!("{}-SNAPSHOT", declared);
        tracing::info!("Version '{}' not yet released", snapshot);
        Ok(CheckOutcome::Snapshot { version: snapshot })
    }
}
