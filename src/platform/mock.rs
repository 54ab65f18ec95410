use crate::domain::LabelSet;
use crate::error::{GenSemverError, Result};
use crate::platform::{Project, ProjectApi};
use std::cell::RefCell;

/// In-memory project API for workflow tests
pub struct MockProjectApi {
    labels: Vec<String>,
    reject_token: bool,
    requests: RefCell<Vec<String>>,
}

impl MockProjectApi {
    /// A server where every merge request carries `labels`
    pub fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockProjectApi {
            labels: labels.into_iter().map(Into::into).collect(),
            reject_token: false,
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Make authentication fail like a 401 would
    pub fn rejecting_token(mut self) -> Self {
        self.reject_token = true;
        self
    }

    /// Requests made so far, e.g. `["user", "project 42", "merge_request 42!7"]`
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl ProjectApi for MockProjectApi {
    fn authenticate(&self) -> Result<String> {
        self.requests.borrow_mut().push("user".to_string());
        if self.reject_token {
            return Err(GenSemverError::api("401 Unauthorized"));
        }
        Ok("release-bot".to_string())
    }

    fn project(&self, project_id: &str) -> Result<Project> {
        self.requests
            .borrow_mut()
            .push(format!("project {}", project_id));
        let id = project_id
            .parse::<u64>()
            .map_err(|_| GenSemverError::api(format!("404 Project Not Found: {}", project_id)))?;
        Ok(Project {
            id,
            path_with_namespace: "group/project".to_string(),
        })
    }

    fn merge_request_labels(&self, project: &Project, iid: u64) -> Result<LabelSet> {
        self.requests
            .borrow_mut()
            .push(format!("merge_request {}!{}", project.id, iid));
        Ok(LabelSet::new(self.labels.iter().cloned()))
    }
}
