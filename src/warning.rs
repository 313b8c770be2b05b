use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions met while stamping or publishing.
/// These are reported to the user but never fail a run.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishWarning {
    /// No final release is published, so no latest-stable row or alias
    NoStableRelease,
    /// The configuration file holds no placeholder (already stamped)
    PlaceholderMissing { path: PathBuf, placeholder: String },
    /// A leftover working copy was deleted before cloning
    StaleCheckoutRemoved { path: PathBuf },
    /// A directory on the hosting branch is not a version and was left out of the index
    UnrecognizedEntry { name: String },
}

impl fmt::Display for PublishWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishWarning::NoStableRelease => {
                write!(f, "No final release published yet; latest-stable not updated")
            }
            PublishWarning::PlaceholderMissing { path, placeholder } => write!(
                f,
                "No '{}' placeholder in {} (already stamped?)",
                placeholder,
                path.display()
            ),
            PublishWarning::StaleCheckoutRemoved { path } => {
                write!(f, "Removed stale checkout at {}", path.display())
            }
            PublishWarning::UnrecognizedEntry { name } => {
                write!(f, "Skipping '{}': not a version directory", name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_missing_display() {
        let warning = PublishWarning::PlaceholderMissing {
            path: PathBuf::from("Doxyfile"),
            placeholder: "%PROJECT_VERSION%".to_string(),
        };
        let msg = warning.to_string();
        assert!(msg.contains("%PROJECT_VERSION%"));
        assert!(msg.contains("Doxyfile"));
    }

    #[test]
    fn test_unrecognized_entry_display() {
        let warning = PublishWarning::UnrecognizedEntry {
            name: "assets".to_string(),
        };
        assert_eq!(warning.to_string(), "Skipping 'assets': not a version directory");
    }
}
