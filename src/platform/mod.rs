//! Remote project API used to read merge request labels
//!
//! [ProjectApi] is the narrow surface the release workflow needs. The real
//! implementation talks to GitLab's REST API; [mock::MockProjectApi] stands
//! in for it in tests.

pub mod gitlab;
pub mod mock;

pub use gitlab::GitLabClient;
pub use mock::MockProjectApi;

use crate::domain::LabelSet;
use crate::error::Result;

/// A project as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Project {
    pub id: u64,
    #[serde(default)]
    pub path_with_namespace: String,
}

/// Project-management API operations
pub trait ProjectApi {
    /// Check the token, returning the authenticated user's name
    fn authenticate(&self) -> Result<String>;

    /// Fetch a project by numeric id or full path
    fn project(&self, project_id: &str) -> Result<Project>;

    /// Labels of a merge request, by project-local id
    fn merge_request_labels(&self, project: &Project, iid: u64) -> Result<LabelSet>;
}
