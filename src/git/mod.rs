//! Git operations abstraction layer
//!
//! The release pipeline only needs a handful of version-control operations.
//! They are collected in the [Repository] trait so the workflow can run
//! against a real repository or a recording fake.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! ```rust
//! # use gen_semver::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> gen_semver::Result<()> {
//! match repo.describe_tags()? {
//!     Some(description) => println!("nearest tag: {}", description),
//!     None => println!("no tags yet"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::{GitCall, MockRepository};
pub use repository::Git2Repository;

use crate::error::Result;
use std::path::Path;

/// Version-control operations used by the release pipeline
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map
/// underlying errors (like `git2::Error`) to the matching
/// [crate::error::GenSemverError] variants. No operation is retried.
pub trait Repository {
    /// Describe HEAD relative to the nearest reachable tag
    ///
    /// Equivalent of `git describe --tags`: returns the tag name when HEAD is
    /// tagged, or `<tag>-<distance>-g<hash>` when commits exist since it.
    ///
    /// # Returns
    /// * `Ok(Some(String))` - The describe output
    /// * `Ok(None)` - If the describe operation fails, which includes a
    ///   repository without any tags
    fn describe_tags(&self) -> Result<Option<String>>;

    /// Full message of the HEAD commit (`git log -1 --pretty=%B`)
    fn last_commit_message(&self) -> Result<String>;

    /// Add a file to the index even if it is ignored (`git add -f`)
    fn stage_file_forced(&self, path: &Path) -> Result<()>;

    /// Commit the current index on top of HEAD
    fn commit(&self, message: &str) -> Result<()>;

    /// Push HEAD to `refs/heads/<branch>` on the remote
    fn push_head(&self, remote: &str, branch: &str) -> Result<()>;

    /// Set the URL used when pushing to the remote
    fn set_push_url(&self, remote: &str, url: &str) -> Result<()>;

    /// Create a lightweight tag on HEAD
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the tag already exists or HEAD cannot be resolved
    fn create_tag(&self, name: &str) -> Result<()>;

    /// Push a single tag to the remote
    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()>;
}
