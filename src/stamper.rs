//! Version stamping of the documentation generator configuration

use crate::error::{DocReleaseError, Result};
use crate::warning::PublishWarning;
use std::fs;
use std::path::{Path, PathBuf};

/// Token replaced with the resolved version
pub const PLACEHOLDER: &str = "%PROJECT_VERSION%";

/// Result of stamping one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampOutcome {
    pub path: PathBuf,
    pub placeholder: String,
    pub version: String,
    /// Number of placeholder occurrences replaced; zero when already stamped
    pub replacements: usize,
}

impl StampOutcome {
    /// Warning to report when nothing was replaced
    pub fn warning(&self) -> Option<PublishWarning> {
        (self.replacements == 0).then(|| PublishWarning::PlaceholderMissing {
            path: self.path.clone(),
            placeholder: self.placeholder.clone(),
        })
    }
}

/// Replace every occurrence of `placeholder` in `text`.
///
/// Returns the new text and the number of replacements.
pub fn stamp_text(text: &str, placeholder: &str, version: &str) -> (String, usize) {
    if placeholder.is_empty() {
        return (text.to_string(), 0);
    }
    let count = text.matches(placeholder).count();
    (text.replace(placeholder, version), count)
}

/// Stamp a configuration file in place.
///
/// # Returns
/// * `Ok(StampOutcome)` - Replacements made; none leaves the file untouched
/// * `Err(NotFound)` - If the file does not exist
/// * `Err(Io)` - If reading or writing back fails
pub fn stamp_file(path: &Path, placeholder: &str, version: &str) -> Result<StampOutcome> {
    if !path.exists() {
        return Err(DocReleaseError::not_found(path));
    }

    let content = fs::read_to_string(path)?;
    let (updated, replacements) = stamp_text(&content, placeholder, version);

    if replacements == 0 {
        tracing::debug!(path = %path.display(), "placeholder not found");
    } else {
        fs::write(path, updated)?;
        tracing::info!(path = %path.display(), version, "updated with version");
    }

    Ok(StampOutcome {
        path: path.to_path_buf(),
        placeholder: placeholder.to_string(),
        version: version.to_string(),
        replacements,
    })
}
