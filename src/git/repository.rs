use crate::error::{DocReleaseError, Result};
use git2::build::RepoBuilder;
use git2::{Cred, CredentialType, FetchOptions, RemoteCallbacks, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
///
/// Cloning needs no local repository, so the wrapper can also be created
/// standalone; tag operations then fail with a remote error.
pub struct Git2Repository {
    repo: Option<Git2Repo>,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo: Some(repo) })
    }

    /// Create a wrapper that is not bound to a local repository
    pub fn standalone() -> Self {
        Git2Repository { repo: None }
    }

    fn repo(&self) -> Result<&Git2Repo> {
        self.repo
            .as_ref()
            .ok_or_else(|| DocReleaseError::remote("Not in a git repository"))
    }
}

/// Credential callbacks for SSH keys in ~/.ssh, the SSH agent, then defaults.
fn remote_callbacks<'a>() -> RemoteCallbacks<'a> {
    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(|_url, username_from_url, allowed_types| {
        let username = username_from_url.unwrap_or("git");

        if allowed_types.contains(CredentialType::SSH_KEY) {
            if let Some(home) = dirs::home_dir() {
                for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                    let path = home.join(".ssh").join(key);
                    if path.exists() {
                        if let Ok(cred) = Cred::ssh_key(username, None, &path, None) {
                            return Ok(cred);
                        }
                    }
                }
            }

            if let Ok(cred) = Cred::ssh_key_from_agent(username) {
                return Ok(cred);
            }
        }

        Cred::default()
    });
    callbacks
}

fn fetch_options<'a>() -> FetchOptions<'a> {
    let mut options = FetchOptions::new();
    options.remote_callbacks(remote_callbacks());
    options
}

impl super::Repository for Git2Repository {
    fn fetch_tags(&self, remote: &str) -> Result<()> {
        let repo = self.repo()?;
        let mut remote_handle = repo
            .find_remote(remote)
            .map_err(|e| DocReleaseError::remote(format!("Cannot find remote '{}': {}", remote, e)))?;

        remote_handle
            .fetch(
                &["+refs/tags/*:refs/tags/*"],
                Some(&mut fetch_options()),
                None,
            )
            .map_err(|e| {
                DocReleaseError::remote(format!("Failed to fetch tags from '{}': {}", remote, e))
            })?;

        Ok(())
    }

    fn list_tags(&self, pattern: &str) -> Result<Vec<String>> {
        let tags = self.repo()?.tag_names(Some(pattern))?;

        let mut names: Vec<String> = tags.iter().flatten().map(|s| s.to_string()).collect();
        names.sort();
        Ok(names)
    }

    fn clone_branch(&self, url: &str, branch: &str, dest: &Path) -> Result<()> {
        RepoBuilder::new()
            .branch(branch)
            .fetch_options(fetch_options())
            .clone(url, dest)
            .map_err(|e| {
                DocReleaseError::remote(format!(
                    "Failed to clone branch '{}' of {}: {}",
                    branch, url, e
                ))
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::Repository;

    #[test]
    fn test_standalone_has_no_tags() {
        let repo = Git2Repository::standalone();
        assert!(matches!(
            repo.list_tags("*").unwrap_err(),
            DocReleaseError::Remote(_)
        ));
    }

    #[test]
    fn test_open_discovers_enclosing_repository() {
        let dir = tempfile::tempdir().unwrap();
        Git2Repo::init(dir.path()).unwrap();
        let nested = dir.path().join("docs/api");
        std::fs::create_dir_all(&nested).unwrap();

        let repo = Git2Repository::open(&nested).unwrap();
        assert!(repo.list_tags("*").unwrap().is_empty());
    }

    #[test]
    fn test_open_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Git2Repository::open(dir.path().join("missing")).err();
        assert!(matches!(err, Some(DocReleaseError::Git(_))));
    }
}
