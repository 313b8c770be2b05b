use crate::error::{DocReleaseError, Result};
use crate::git::Repository;
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use walkdir::WalkDir;

/// Mock repository for testing without actual git operations
///
/// Tags are held in memory; cloning copies an optional template directory
/// standing in for the remote branch contents.
pub struct MockRepository {
    tags: Vec<String>,
    branch_template: Option<PathBuf>,
    fetch_error: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            branch_template: None,
            fetch_error: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Add a tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Contents copied into the destination of every clone
    pub fn set_branch_template(&mut self, path: impl Into<PathBuf>) {
        self.branch_template = Some(path.into());
    }

    /// Make `fetch_tags` fail with a remote error
    pub fn fail_fetch(&mut self, message: impl Into<String>) {
        self.fetch_error = Some(message.into());
    }

    /// Operations performed so far, e.g. `fetch origin`, `list 1.2.3*`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry.map_err(|e| DocReleaseError::Io(e.into()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|_| DocReleaseError::PathTraversal(entry.path().to_path_buf()))?;
        let target = dest.join(relative);

        if entry.file_type().is_symlink() {
            let link_target = fs::read_link(entry.path())?;
            crate::publish::create_dir_symlink(&link_target, &target)?;
        } else if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

impl Repository for MockRepository {
    fn fetch_tags(&self, remote: &str) -> Result<()> {
        self.record(format!("fetch {}", remote));
        match &self.fetch_error {
            Some(message) => Err(DocReleaseError::remote(message.clone())),
            None => Ok(()),
        }
    }

    fn list_tags(&self, pattern: &str) -> Result<Vec<String>> {
        self.record(format!("list {}", pattern));
        let pattern = Pattern::new(pattern).map_err(|e| {
            DocReleaseError::version(format!("Invalid tag pattern '{}': {}", pattern, e))
        })?;
        let mut tags: Vec<String> = self
            .tags
            .iter()
            .filter(|tag| pattern.matches(tag))
            .cloned()
            .collect();
        tags.sort();
        Ok(tags)
    }

    fn clone_branch(&self, url: &str, branch: &str, dest: &Path) -> Result<()> {
        self.record(format!("clone {} {}", branch, url));
        if dest.exists() {
            return Err(DocReleaseError::remote(format!(
                "destination path '{}' already exists",
                dest.display()
            )));
        }

        fs::create_dir_all(dest)?;
        if let Some(template) = &self.branch_template {
            copy_tree(template, dest)?;
        }
        Ok(())
    }
}
