//! GitLab REST API client

use crate::domain::LabelSet;
use crate::error::{GenSemverError, Result};
use crate::platform::{Project, ProjectApi};
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize)]
struct CurrentUser {
    username: String,
}

#[derive(Deserialize)]
struct MergeRequest {
    iid: u64,
    #[serde(default)]
    labels: Vec<String>,
}

/// Blocking GitLab client authenticated with a private token
pub struct GitLabClient {
    client: Client,
    base_url: String,
    token: String,
}

impl GitLabClient {
    /// Create a client for the server at `base_url` (e.g. `https://gitlab.com`)
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("gen-semver/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GenSemverError::api(format!("failed to create HTTP client: {}", e)))?;

        Ok(GitLabClient {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v4{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.client
            .get(self.api_url(path))
            .header("PRIVATE-TOKEN", &self.token)
    }

    fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "GET");
        let value = self
            .get(path)
            .send()?
            .error_for_status()
            .map_err(|e| GenSemverError::api(e.to_string()))?
            .json()?;
        Ok(value)
    }
}

impl ProjectApi for GitLabClient {
    fn authenticate(&self) -> Result<String> {
        let user: CurrentUser = self.fetch("/user")?;
        debug!(username = %user.username, "authenticated");
        Ok(user.username)
    }

    fn project(&self, project_id: &str) -> Result<Project> {
        let project: Project =
            self.fetch(&format!("/projects/{}", urlencoding::encode(project_id)))?;
        debug!(project_id = project.id, path = %project.path_with_namespace, "found project");
        Ok(project)
    }

    fn merge_request_labels(&self, project: &Project, iid: u64) -> Result<LabelSet> {
        let mr: MergeRequest =
            self.fetch(&format!("/projects/{}/merge_requests/{}", project.id, iid))?;
        debug!(mr_iid = mr.iid, labels = ?mr.labels, "fetched merge request");
        Ok(LabelSet::new(mr.labels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_strips_trailing_slash() {
        let client = GitLabClient::new("https://gitlab.example.com/", "t").unwrap();
        assert_eq!(
            client.api_url("/projects/1"),
            "https://gitlab.example.com/api/v4/projects/1"
        );
    }

    #[test]
    fn test_merge_request_labels_default_to_empty() {
        let mr: MergeRequest = serde_json::from_str(r#"{"iid": 3}"#).unwrap();
        assert!(mr.labels.is_empty());
        assert_eq!(mr.iid, 3);
    }
}
