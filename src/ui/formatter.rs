//! Formatting functions for UI output.
//!
//! `format_*` functions are pure and testable; `display_*` functions print.

use std::path::Path;

use console::style;

use crate::publish::PublishReport;
use crate::warning::PublishWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Display a non-fatal warning to the user.
pub fn display_warning(warning: &PublishWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Summary lines for a publish run, without styling.
pub fn format_publish_report(report: &PublishReport) -> Vec<String> {
    let mut lines = vec![format!(
        "Published {} ({} files) to {}",
        report.version,
        report.files_copied,
        report.version_dir.display()
    )];

    if !report.pruned.is_empty() {
        lines.push(format!("Removed snapshots: {}", report.pruned.join(", ")));
    }

    match &report.latest_stable {
        Some(version) => lines.push(format!(
            "{} now points to {}",
            report.latest_alias, version
        )),
        None => lines.push(format!("{} unchanged", report.latest_alias)),
    }

    lines.push(format!("Version index: {}", report.index_path.display()));
    lines
}

/// Display the publish summary followed by its warnings.
pub fn display_publish_report(report: &PublishReport) {
    for warning in &report.warnings {
        display_warning(warning);
    }
    for line in format_publish_report(report) {
        display_success(&line);
    }
}

/// Display the git commands that publish the prepared checkout.
///
/// # Arguments
/// * `checkout` - Working copy of the hosting branch
/// * `branch` - The hosting branch (e.g., "gh-pages")
pub fn display_manual_push_instruction(checkout: &Path, branch: &str) {
    println!(
        "\n{} To publish, commit and push the checkout:\n  {}",
        style("→").yellow(),
        style(format!(
            "git -C {} add -A && git -C {} commit -m 'Update documentation' && git -C {} push origin {}",
            checkout.display(),
            checkout.display(),
            checkout.display(),
            branch
        ))
        .cyan()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn report(latest: Option<&str>, pruned: &[&str]) -> PublishReport {
        PublishReport {
            version: "1.0.0".to_string(),
            version_dir: PathBuf::from("site/1.0.0"),
            files_copied: 3,
            pruned: pruned.iter().map(|s| s.to_string()).collect(),
            latest_alias: "latest-stable".to_string(),
            latest_stable: latest.map(str::to_string),
            index_path: PathBuf::from("site/versions.md"),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_format_publish_report_final() {
        let lines = format_publish_report(&report(Some("1.0.0"), &["1.0.0-SNAPSHOT"]));
        assert_eq!(lines[0], "Published 1.0.0 (3 files) to site/1.0.0");
        assert_eq!(lines[1], "Removed snapshots: 1.0.0-SNAPSHOT");
        assert_eq!(lines[2], "latest-stable now points to 1.0.0");
        assert_eq!(lines[3], "Version index: site/versions.md");
    }

    #[test]
    fn test_format_publish_report_candidate() {
        let lines = format_publish_report(&report(None, &[]));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "latest-stable unchanged");
    }

    #[test]
    fn test_format_publish_report_uses_configured_alias() {
        let mut custom = report(Some("1.0.0"), &[]);
        custom.latest_alias = "stable".to_string();
        assert_eq!(format_publish_report(&custom)[1], "stable now points to 1.0.0");

        custom.latest_stable = None;
        assert_eq!(format_publish_report(&custom)[1], "stable unchanged");
    }

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_warning() {
        // Visual verification test - output is printed to stderr
        display_warning(&PublishWarning::NoStableRelease);
    }
}
