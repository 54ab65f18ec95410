use crate::error::{GenSemverError, Result};
use regex::Regex;
use std::fmt;

/// Matches `group/project!42` style references anywhere in a commit message.
const REFERENCE_PATTERN: &str = r"(?im)(\S*/\S*!)(\d+)";

/// A merge request reference found in a commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequestRef {
    /// The `namespace/project` part, without the trailing `!`
    pub path: String,
    /// Project-local merge request id
    pub iid: u64,
}

impl MergeRequestRef {
    /// Extract the first merge request reference from a commit message.
    ///
    /// GitLab's default merge commit message ends with
    /// `See merge request group/project!42`, which is what this looks for.
    ///
    /// # Returns
    /// * `Ok(MergeRequestRef)` - The first reference in the message
    /// * `Err` - If the message contains no `namespace/project!number` reference
    pub fn extract(message: &str) -> Result<Self> {
        let re = Regex::new(REFERENCE_PATTERN)
            .map_err(|e| GenSemverError::reference(format!("Invalid pattern: {}", e)))?;

        let captures = re.captures(message).ok_or_else(|| {
            GenSemverError::reference(format!(
                "Unable to extract merge request id from commit message: {:?}",
                message
            ))
        })?;

        let path = captures
            .get(1)
            .map(|m| m.as_str().trim_end_matches('!').to_string())
            .unwrap_or_default();
        let digits = captures.get(2).map(|m| m.as_str()).unwrap_or_default();
        let iid = digits.parse::<u64>().map_err(|_| {
            GenSemverError::reference(format!("Merge request id out of range: {}", digits))
        })?;

        Ok(MergeRequestRef { path, iid })
    }
}

impl fmt::Display for MergeRequestRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}", self.path, self.iid)
    }
}
