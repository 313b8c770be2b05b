use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DocReleaseError, Result};

/// Configuration file name looked up in the project directory
pub const CONFIG_FILE: &str = "docrelease.toml";

/// Represents the complete configuration for doc-release.
///
/// Contains project file conventions, git remote settings and the publishing layout.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub publish: PublishConfig,
}

fn default_build_file() -> String {
    crate::cmake::BUILD_FILE.to_string()
}

fn default_placeholder() -> String {
    crate::stamper::PLACEHOLDER.to_string()
}

/// Build configuration conventions of the documented project.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProjectConfig {
    /// Build configuration file, relative to the project directory
    #[serde(default = "default_build_file")]
    pub build_file: String,

    /// Token replaced by the stamper
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Accept `X.Y.Z.F` release tags
    #[serde(default)]
    pub fix_revision: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        ProjectConfig {
            build_file: default_build_file(),
            placeholder: default_placeholder(),
            fix_revision: false,
        }
    }
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_url_template() -> String {
    "https://github.com/{org}/{repo}.git".to_string()
}

/// Git remote settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Clone URL with `{org}` and `{repo}` placeholders
    #[serde(default = "default_url_template")]
    pub url_template: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            remote: default_remote(),
            url_template: default_url_template(),
        }
    }
}

impl GitConfig {
    /// Format the clone URL for an organization and repository
    pub fn repo_url(&self, org: &str, repo: &str) -> String {
        self.url_template
            .replace("{org}", org)
            .replace("{repo}", repo)
    }
}

fn default_branch() -> String {
    "gh-pages".to_string()
}

fn default_docs_dir() -> String {
    ".github/doxygen/out/html".to_string()
}

fn default_lock_file() -> PathBuf {
    PathBuf::from("/tmp/doc_manager.lock")
}

fn default_index_file() -> String {
    "versions.md".to_string()
}

fn default_latest_alias() -> String {
    "latest-stable".to_string()
}

fn default_true() -> bool {
    true
}

/// Documentation hosting layout.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PublishConfig {
    /// Hosting branch cloned on every publish
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Generated documentation, relative to the project directory
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,

    /// Working copy of the hosting branch; defaults to a directory named after
    /// the project directory, inside it
    #[serde(default)]
    pub checkout_dir: Option<PathBuf>,

    #[serde(default = "default_lock_file")]
    pub lock_file: PathBuf,

    #[serde(default = "default_index_file")]
    pub index_file: String,

    #[serde(default = "default_latest_alias")]
    pub latest_alias: String,

    /// Remove superseded snapshot directories when publishing a final release
    #[serde(default = "default_true")]
    pub prune_snapshots: bool,
}

impl Default for PublishConfig {
    fn default() -> Self {
        PublishConfig {
            branch: default_branch(),
            docs_dir: default_docs_dir(),
            checkout_dir: None,
            lock_file: default_lock_file(),
            index_file: default_index_file(),
            latest_alias: default_latest_alias(),
            prune_snapshots: true,
        }
    }
}

impl PublishConfig {
    /// Resolve the checkout directory against the project directory
    pub fn checkout_path(&self, project_dir: &Path) -> PathBuf {
        match &self.checkout_dir {
            Some(dir) => project_dir.join(dir),
            None => {
                let name = project_dir
                    .canonicalize()
                    .ok()
                    .and_then(|p| p.file_name().map(|n| n.to_os_string()))
                    .unwrap_or_else(|| "gh-pages".into());
                project_dir.join(name)
            }
        }
    }
}

impl Config {
    /// Build configuration file inside the project directory
    pub fn build_file_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.project.build_file)
    }

    /// Generated documentation directory inside the project directory
    pub fn docs_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.publish.docs_dir)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `docrelease.toml` in the project directory
/// 3. `.docrelease.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `project_dir` - Project root searched for `docrelease.toml`
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, project_dir: &Path) -> Result<Config> {
    let local = project_dir.join(CONFIG_FILE);

    let path = if let Some(path) = config_path {
        if !path.exists() {
            return Err(DocReleaseError::not_found(path));
        }
        path.to_path_buf()
    } else if local.exists() {
        local
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(format!(".{}", CONFIG_FILE));
        if user_path.exists() {
            user_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&config_str).map_err(|e| {
        DocReleaseError::config(format!("Cannot parse {}: {}", path.display(), e))
    })?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}
