//! Advisory lock serializing documentation publishing on one host.
//!
//! The lock is an exclusive `flock`-style lock on a well-known file. It only
//! coordinates cooperating processes. Acquisition never waits: a held lock
//! is an immediate [DocReleaseError::AlreadyRunning].

use crate::error::{DocReleaseError, Result};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// Held publish lock, released on drop.
#[derive(Debug)]
pub struct PublishLock {
    file: File,
    path: PathBuf,
}

impl PublishLock {
    /// Try to acquire the lock at `path`, creating the file if needed.
    pub fn acquire(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&path)?;

        if let Err(e) = file.try_lock_exclusive() {
            let contended = fs2::lock_contended_error();
            if e.kind() == std::io::ErrorKind::WouldBlock
                || (e.raw_os_error().is_some() && e.raw_os_error() == contended.raw_os_error())
            {
                return Err(DocReleaseError::AlreadyRunning(path));
            }
            return Err(DocReleaseError::Io(e));
        }

        tracing::debug!(path = %path.display(), "acquired publish lock");
        Ok(PublishLock { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for PublishLock {
    fn drop(&mut self) {
        if let Err(e) = self.file.unlock() {
            tracing::warn!(path = %self.path.display(), "failed to release publish lock: {}", e);
        } else {
            tracing::debug!(path = %self.path.display(), "released publish lock");
        }
    }
}
