//! Git operations abstraction layer
//!
//! The version checker and the documentation publisher only need three
//! things from version control: refresh the tags from a remote, list tags
//! matching a glob, and clone a single branch into a directory. The
//! [Repository] trait captures exactly that so both components can run
//! against [mock::MockRepository] in tests.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! ```rust
//! # use doc_release::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> doc_release::Result<()> {
//! repo.fetch_tags("origin")?;
//! let released = repo.list_tags("1.2.3*")?;
//! # let _ = released;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use std::path::Path;

/// Version-control collaborator used by the checker and the publisher
///
/// All methods return [crate::error::Result<T>]. Implementations map
/// underlying failures (like `git2::Error`) to
/// [crate::error::DocReleaseError::Git] or
/// [crate::error::DocReleaseError::Remote].
pub trait Repository {
    /// Fetch all tags from a remote
    ///
    /// # Arguments
    /// * `remote` - Name of the remote (e.g., "origin")
    fn fetch_tags(&self, remote: &str) -> Result<()>;

    /// List local tags matching a glob pattern
    ///
    /// # Arguments
    /// * `pattern` - fnmatch-style glob (e.g., "1.2.3*")
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Matching tag names, sorted
    fn list_tags(&self, pattern: &str) -> Result<Vec<String>>;

    /// Clone a single branch of a remote repository
    ///
    /// # Arguments
    /// * `url` - Clone URL
    /// * `branch` - Branch to check out (e.g., "gh-pages")
    /// * `dest` - Destination directory; must not exist
    fn clone_branch(&self, url: &str, branch: &str, dest: &Path) -> Result<()>;
}
