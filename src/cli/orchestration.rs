//! Workflow orchestration for the command-line tools
//!
//! Each binary only parses arguments and reports the outcome; the workflows
//! live here so they can be called programmatically, and the `*_with`
//! variants take the git collaborator and configuration explicitly.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::checker::{CheckOutcome, VersionChecker};
use crate::cmake::{read_declared_version, resolve_version};
use crate::config::{load_config, Config};
use crate::git::{Git2Repository, Repository};
use crate::publish::{DocPublisher, PublishLock, PublishReport, PublishRequest};
use crate::stamper::{stamp_file, StampOutcome};

/// Arguments for the version check
#[derive(Debug, Clone, PartialEq)]
pub struct CheckArgs {
    /// Release tag; `None` runs the snapshot check
    pub tag: Option<String>,
    pub project_dir: PathBuf,
    pub config_path: Option<PathBuf>,
}

/// Arguments for stamping a documentation generator configuration
#[derive(Debug, Clone, PartialEq)]
pub struct StampArgs {
    pub config_file: PathBuf,
    pub version: Option<String>,
    pub project_dir: PathBuf,
    pub config_path: Option<PathBuf>,
}

/// Arguments for publishing documentation
#[derive(Debug, Clone, PartialEq)]
pub struct PublishArgs {
    pub github_org: String,
    pub repo_name: String,
    pub version: Option<String>,
    pub project_dir: PathBuf,
    pub config_path: Option<PathBuf>,
}

fn load(config_path: Option<&PathBuf>, project_dir: &std::path::Path) -> Result<Config> {
    load_config(config_path.map(|p| p.as_path()), project_dir)
        .context("Error loading configuration")
}

/// Check the release tag, or the absence of a release in snapshot mode.
///
/// Release mode needs no local repository; snapshot mode opens the one
/// containing the project directory.
pub fn run_check(args: &CheckArgs) -> Result<CheckOutcome> {
    let config = load(args.config_path.as_ref(), &args.project_dir)?;
    let repo = if args.tag.is_some() {
        Git2Repository::standalone()
    } else {
        Git2Repository::open(&args.project_dir).context("Git repository error")?
    };
    run_check_with(args, &config, &repo)
}

pub fn run_check_with<R: Repository>(
    args: &CheckArgs,
    config: &Config,
    repo: &R,
) -> Result<CheckOutcome> {
    let declared = read_declared_version(
        &config.build_file_path(&args.project_dir),
        config.project.fix_revision,
    )?;
    let outcome = VersionChecker::new(repo, config.git.remote.clone())
        .with_fix_revision(config.project.fix_revision)
        .check(&declared, args.tag.as_deref())?;
    Ok(outcome)
}

/// Stamp the resolved version into the given configuration file.
pub fn run_stamp(args: &StampArgs) -> Result<StampOutcome> {
    let config = load(args.config_path.as_ref(), &args.project_dir)?;
    run_stamp_with(args, &config)
}

pub fn run_stamp_with(args: &StampArgs, config: &Config) -> Result<StampOutcome> {
    tracing::info!("Computing current API version...");
    let version = resolve_version(
        args.version.as_deref(),
        &config.build_file_path(&args.project_dir),
        config.project.fix_revision,
    )?;
    tracing::info!("Using API version: {}", version);

    Ok(stamp_file(&args.config_file, &config.project.placeholder, &version)?)
}

/// Acquire the publish lock and publish through git.
///
/// The lock is held until this function returns, whether or not the
/// publish succeeded.
pub fn run_publish(args: &PublishArgs) -> Result<(PublishReport, PublishRequest)> {
    let config = load(args.config_path.as_ref(), &args.project_dir)?;
    let lock = PublishLock::acquire(&config.publish.lock_file)?;
    let repo = Git2Repository::standalone();
    run_publish_with(args, &config, &repo, &lock)
}

pub fn run_publish_with<R: Repository>(
    args: &PublishArgs,
    config: &Config,
    repo: &R,
    lock: &PublishLock,
) -> Result<(PublishReport, PublishRequest)> {
    let request = PublishRequest::from_config(
        config,
        &args.project_dir,
        &args.github_org,
        &args.repo_name,
        args.version.clone(),
    );
    let report = DocPublisher::new(repo)
        .publish(lock, &request)
        .context("Documentation preparation failed")?;
    Ok((report, request))
}
