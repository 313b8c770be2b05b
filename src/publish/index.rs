//! Version index of the documentation hosting branch.
//!
//! The index is regenerated from the directories on disk on every publish;
//! nothing is carried over from the previous index file.

use crate::domain::ordering::{latest_stable, sort_newest_first};
use crate::domain::ReleaseVersion;
use crate::error::Result;
use crate::warning::PublishWarning;
use std::fs;
use std::path::{Path, PathBuf};

/// Version directories found under a documentation root
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VersionScan {
    /// Version directory names, unordered
    pub versions: Vec<String>,
    /// Visible directories that are not versions
    pub skipped: Vec<String>,
}

/// Scan immediate subdirectories of `root` for version names.
///
/// Symbolic links (such as the latest-stable alias), plain files and hidden
/// entries are ignored.
pub fn scan_versions(root: &Path) -> Result<VersionScan> {
    let mut scan = VersionScan::default();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if !file_type.is_dir() || file_type.is_symlink() {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }

        if ReleaseVersion::parse(&name).is_ok() {
            scan.versions.push(name);
        } else {
            scan.skipped.push(name);
        }
    }

    Ok(scan)
}

/// Render the index document.
///
/// `versions` must already be ordered newest first. When `latest` names one
/// of them, a pinned row for the alias is placed right above its natural row.
pub fn render_index(versions: &[String], latest: Option<&str>, alias: &str) -> String {
    let mut out = String::new();
    out.push_str("# Documentation versions\n\n");
    out.push_str("| Version | Link |\n");
    out.push_str("|---------|------|\n");

    for name in versions {
        if latest == Some(name.as_str()) {
            out.push_str(&format!(
                "| {alias} ({name}) | [{alias}](./{alias}/) |\n"
            ));
        }
        out.push_str(&format!("| {name} | [{name}](./{name}/) |\n"));
    }

    out
}

/// Written index and what it lists
#[derive(Debug, Clone, PartialEq)]
pub struct IndexSummary {
    pub path: PathBuf,
    /// Listed versions, newest first
    pub versions: Vec<String>,
    pub latest_stable: Option<String>,
    pub warnings: Vec<PublishWarning>,
}

/// Regenerate the index file `file_name` under `root` from scratch.
pub fn write_index(root: &Path, file_name: &str, alias: &str) -> Result<IndexSummary> {
    let scan = scan_versions(root)?;
    let mut versions = scan.versions;
    sort_newest_first(&mut versions);
    let latest = latest_stable(&versions).map(str::to_string);

    let mut warnings: Vec<PublishWarning> = scan
        .skipped
        .into_iter()
        .map(|name| PublishWarning::UnrecognizedEntry { name })
        .collect();
    if latest.is_none() {
        warnings.push(PublishWarning::NoStableRelease);
    }

    let path = root.join(file_name);
    fs::write(&path, render_index(&versions, latest.as_deref(), alias))?;
    tracing::info!(
        path = %path.display(),
        count = versions.len(),
        "generated versions list"
    );

    Ok(IndexSummary {
        path,
        versions,
        latest_stable: latest,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_pins_latest_above_natural_row() {
        let versions = names(&["1.1.0-rc1", "1.0.0", "0.9.0"]);
        let doc = render_index(&versions, Some("1.0.0"), "latest-stable");
        let rows: Vec<&str> = doc.lines().filter(|l| l.starts_with("| ")).collect();

        assert_eq!(
            rows,
            vec![
                "| Version | Link |",
                "| 1.1.0-rc1 | [1.1.0-rc1](./1.1.0-rc1/) |",
                "| latest-stable (1.0.0) | [latest-stable](./latest-stable/) |",
                "| 1.0.0 | [1.0.0](./1.0.0/) |",
                "| 0.9.0 | [0.9.0](./0.9.0/) |",
            ]
        );
    }

    #[test]
    fn test_render_without_latest() {
        let doc = render_index(&names(&["2.0.0-SNAPSHOT"]), None, "latest-stable");
        assert!(!doc.contains("latest-stable"));
        assert!(doc.contains("| 2.0.0-SNAPSHOT |"));
    }

    #[test]
    fn test_scan_filters_entries() {
        let root = tempfile::tempdir().unwrap();
        for dir in ["1.0.0", "1.1.0-SNAPSHOT", "assets", ".git"] {
            fs::create_dir(root.path().join(dir)).unwrap();
        }
        fs::write(root.path().join("2.0.0"), "a file, not a directory").unwrap();

        let mut scan = scan_versions(root.path()).unwrap();
        scan.versions.sort();
        assert_eq!(scan.versions, names(&["1.0.0", "1.1.0-SNAPSHOT"]));
        assert_eq!(scan.skipped, names(&["assets"]));
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_ignores_alias_symlink() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("1.0.0")).unwrap();
        std::os::unix::fs::symlink("1.0.0", root.path().join("2.0.0")).unwrap();

        let scan = scan_versions(root.path()).unwrap();
        assert_eq!(scan.versions, names(&["1.0.0"]));
    }

    #[test]
    fn test_write_index_orders_and_warns() {
        let root = tempfile::tempdir().unwrap();
        for dir in ["0.9.0", "1.0.0-rc1", "1.0.0-rc2", "misc"] {
            fs::create_dir(root.path().join(dir)).unwrap();
        }

        let summary = write_index(root.path(), "versions.md", "latest-stable").unwrap();
        assert_eq!(summary.versions, names(&["1.0.0-rc2", "1.0.0-rc1", "0.9.0"]));
        assert_eq!(summary.latest_stable.as_deref(), Some("0.9.0"));
        assert_eq!(
            summary.warnings,
            vec![PublishWarning::UnrecognizedEntry {
                name: "misc".to_string()
            }]
        );
        assert!(fs::read_to_string(root.path().join("versions.md"))
            .unwrap()
            .contains("| latest-stable (0.9.0) |"));
    }
}
