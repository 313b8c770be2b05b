//! Documentation publishing onto the hosting branch
//!
//! A publish run works on a fresh clone of the hosting branch:
//!
//! 1. Resolve the version (explicit, or declared version + `-SNAPSHOT`)
//! 2. Re-clone the hosting branch, discarding any stale working copy
//! 3. For a final release, prune superseded snapshot directories
//! 4. Copy the generated documentation into the version directory
//! 5. For a final release, point the latest-stable alias at the newest final
//!    release on the branch and rewrite `robots.txt`
//! 6. Regenerate the version index
//!
//! Committing and pushing the result is left to the caller. Every step
//! takes explicit paths; the process working directory is never changed.

pub mod copy;
pub mod index;
pub mod lock;

pub use lock::PublishLock;

use crate::cmake::resolve_version;
use crate::config::Config;
use crate::domain::ordering::latest_stable;
use crate::domain::ReleaseVersion;
use crate::error::{DocReleaseError, Result};
use crate::git::Repository;
use crate::warning::PublishWarning;
use std::fs;
use std::path::{Path, PathBuf};

/// Crawler policy written next to a final release
pub const ROBOTS_TXT: &str =
    "User-agent: *\nAllow: /\nAllow: /latest-stable/\nDisallow: /*/[0-9]*/\n";

/// Everything a publish run needs, with paths already resolved
#[derive(Debug, Clone, PartialEq)]
pub struct PublishRequest {
    /// Explicit version; `None` publishes a snapshot of the declared version
    pub version: Option<String>,
    pub repo_url: String,
    pub branch: String,
    pub checkout_dir: PathBuf,
    pub docs_dir: PathBuf,
    pub build_file: PathBuf,
    pub index_file: String,
    pub latest_alias: String,
    pub prune_snapshots: bool,
    pub allow_fix: bool,
}

impl PublishRequest {
    /// Build a request from configuration for a GitHub organization and repository
    pub fn from_config(
        config: &Config,
        project_dir: &Path,
        github_org: &str,
        repo_name: &str,
        version: Option<String>,
    ) -> Self {
        PublishRequest {
            version,
            repo_url: config.git.repo_url(github_org, repo_name),
            branch: config.publish.branch.clone(),
            checkout_dir: config.publish.checkout_path(project_dir),
            docs_dir: config.docs_path(project_dir),
            build_file: config.build_file_path(project_dir),
            index_file: config.publish.index_file.clone(),
            latest_alias: config.publish.latest_alias.clone(),
            prune_snapshots: config.publish.prune_snapshots,
            allow_fix: config.project.fix_revision,
        }
    }
}

/// Result of a successful publish run
#[derive(Debug, Clone, PartialEq)]
pub struct PublishReport {
    pub version: String,
    pub version_dir: PathBuf,
    pub files_copied: usize,
    /// Snapshot directories removed
    pub pruned: Vec<String>,
    /// Alias name, as configured
    pub latest_alias: String,
    /// Alias target, set when this run published a final release
    pub latest_stable: Option<String>,
    pub index_path: PathBuf,
    pub warnings: Vec<PublishWarning>,
}

/// Publishes generated documentation through a [Repository].
pub struct DocPublisher<'a, R: Repository> {
    repo: &'a R,
}

impl<'a, R: Repository> DocPublisher<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        DocPublisher { repo }
    }

    /// Run a publish.
    ///
    /// The caller must hold `lock` for the whole call; dropping it afterwards
    /// releases it on both success and failure.
    pub fn publish(&self, lock: &PublishLock, request: &PublishRequest) -> Result<PublishReport> {
        tracing::debug!(lock = %lock.path().display(), "publishing under lock");
        let mut warnings = Vec::new();

        let version_name = resolve_version(
            request.version.as_deref(),
            &request.build_file,
            request.allow_fix,
        )?;
        let version = ReleaseVersion::parse(&version_name)?;
        tracing::info!("Using version: {}", version_name);

        if !request.docs_dir.is_dir() {
            return Err(DocReleaseError::not_found(&request.docs_dir));
        }

        let checkout = &request.checkout_dir;
        if checkout.exists() {
            fs::remove_dir_all(checkout)?;
            warnings.push(PublishWarning::StaleCheckoutRemoved {
                path: checkout.clone(),
            });
        }
        tracing::info!("Clone {} ({})...", request.repo_url, request.branch);
        self.repo
            .clone_branch(&request.repo_url, &request.branch, checkout)?;

        let pruned = if version.is_final() && request.prune_snapshots {
            prune_snapshots(checkout, &version)?
        } else {
            Vec::new()
        };

        tracing::info!("Create target directory {}...", version_name);
        let version_dir = checkout.join(&version_name);
        fs::create_dir_all(&version_dir)?;

        tracing::info!("Copy generated documentation...");
        let files_copied = copy::copy_tree_guarded(&request.docs_dir, &version_dir)?;

        let alias_target = if version.is_final() {
            let scan = index::scan_versions(checkout)?;
            let target = latest_stable(&scan.versions)
                .unwrap_or(version_name.as_str())
                .to_string();
            if target != version_name {
                tracing::info!(
                    "{} is older than {}; {} stays on {}",
                    version_name,
                    target,
                    request.latest_alias,
                    target
                );
            }

            tracing::info!("Creating {} symlink...", request.latest_alias);
            update_latest_alias(checkout, &request.latest_alias, &target)?;
            tracing::info!("Writing robots.txt...");
            write_robots(checkout, &request.latest_alias)?;
            Some(target)
        } else {
            None
        };

        tracing::info!("Generating versions list...");
        let summary = index::write_index(checkout, &request.index_file, &request.latest_alias)?;
        warnings.extend(summary.warnings);

        Ok(PublishReport {
            version: version_name,
            version_dir,
            files_copied,
            pruned,
            latest_alias: request.latest_alias.clone(),
            latest_stable: alias_target,
            index_path: summary.path,
            warnings,
        })
    }
}

/// Remove snapshot directories whose base is not newer than `released`.
///
/// Returns the removed directory names, sorted.
pub fn prune_snapshots(root: &Path, released: &ReleaseVersion) -> Result<Vec<String>> {
    let mut pruned = Vec::new();

    for name in index::scan_versions(root)?.versions {
        let Ok(candidate) = ReleaseVersion::parse(&name) else {
            continue;
        };
        let superseded = (candidate.base, candidate.fix) <= (released.base, released.fix);
        if candidate.is_snapshot() && superseded {
            tracing::info!("Removing superseded snapshot {}", name);
            fs::remove_dir_all(root.join(&name))?;
            pruned.push(name);
        }
    }

    pruned.sort();
    Ok(pruned)
}

/// Point `root/alias` at the sibling directory `target`, replacing any
/// existing directory, file or link of that name.
pub fn update_latest_alias(root: &Path, alias: &str, target: &str) -> Result<()> {
    let link = root.join(alias);

    if let Ok(meta) = fs::symlink_metadata(&link) {
        if meta.is_dir() {
            tracing::info!("Removing {} directory: {}", alias, link.display());
            fs::remove_dir_all(&link)?;
        } else {
            fs::remove_file(&link)?;
        }
    }

    create_dir_symlink(Path::new(target), &link)?;
    Ok(())
}

#[cfg(unix)]
pub(crate) fn create_dir_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
pub(crate) fn create_dir_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

/// Write the crawler policy: the root and the alias are crawlable, versioned
/// paths are not.
pub fn write_robots(root: &Path, alias: &str) -> Result<()> {
    let content = ROBOTS_TXT.replace("/latest-stable/", &format!("/{}/", alias));
    fs::write(root.join("robots.txt"), content)?;
    Ok(())
}
