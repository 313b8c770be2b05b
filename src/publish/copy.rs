//! Copying generated documentation with a path-traversal guard.

use crate::error::{DocReleaseError, Result};
use std::fs;
use std::path::{Component, Path};
use walkdir::WalkDir;

/// Copy the contents of `src` into the existing directory `dest`.
///
/// Both roots are canonicalized. Every source entry, symlinks resolved, must
/// stay under the source root and every target under the destination root;
/// otherwise the copy stops with [DocReleaseError::PathTraversal]. Existing
/// files in `dest` are overwritten.
///
/// Returns the number of files copied.
pub fn copy_tree_guarded(src: &Path, dest: &Path) -> Result<usize> {
    if !src.is_dir() {
        return Err(DocReleaseError::not_found(src));
    }

    let src_root = src.canonicalize()?;
    let dest_root = dest.canonicalize()?;
    let mut copied = 0;

    for entry in WalkDir::new(&src_root).min_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| DocReleaseError::Io(e.into()))?;
        let resolved = entry.path().canonicalize()?;
        if !resolved.starts_with(&src_root) {
            return Err(DocReleaseError::PathTraversal(entry.path().to_path_buf()));
        }

        let relative = entry
            .path()
            .strip_prefix(&src_root)
            .map_err(|_| DocReleaseError::PathTraversal(entry.path().to_path_buf()))?;
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(DocReleaseError::PathTraversal(entry.path().to_path_buf()));
        }

        let target = dest_root.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(&resolved, &target)?;
            copied += 1;
        }
    }

    tracing::debug!(
        src = %src_root.display(),
        dest = %dest_root.display(),
        files = copied,
        "copied documentation"
    );
    Ok(copied)
}
