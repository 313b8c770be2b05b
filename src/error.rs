use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for doc-release operations
#[derive(Error, Debug)]
pub enum DocReleaseError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Malformed declaration: {0}")]
    Declaration(String),

    #[error("Version mismatch: tag base version '{tag}' differs from declared version '{declared}'")]
    Mismatch { tag: String, declared: String },

    #[error("Version '{0}' or its release candidates already released")]
    AlreadyReleased(String),

    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Another documentation process is running (lock: {})", .0.display())]
    AlreadyRunning(PathBuf),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("Potential path traversal detected: {}", .0.display())]
    PathTraversal(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in doc-release
pub type Result<T> = std::result::Result<T, DocReleaseError>;

impl DocReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DocReleaseError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        DocReleaseError::Version(msg.into())
    }

    /// Create a malformed-declaration error with context
    pub fn declaration(msg: impl Into<String>) -> Self {
        DocReleaseError::Declaration(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        DocReleaseError::Remote(msg.into())
    }

    /// Create a missing-resource error for a path
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        DocReleaseError::NotFound(path.into())
    }
}
