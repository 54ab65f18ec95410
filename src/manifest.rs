//! JSON manifest (`package.json` and friends) version rewriting

use crate::error::{GenSemverError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Set the `version` field of the JSON manifest at `path`.
///
/// Other keys keep their values and their order. The file is rewritten with
/// 2-space indentation.
///
/// # Returns
/// * `Ok(())` - Manifest rewritten
/// * `Err` - If the file is missing or unwritable, is not valid JSON, or is
///   not a JSON object
pub fn update_version(path: &Path, version: &str) -> Result<()> {
    let contents = fs::read_to_string(path)?;
    let updated = set_version(&contents, version)?;
    fs::write(path, updated)?;

    debug!(path = %path.display(), version, "updated manifest");
    Ok(())
}

/// Pure form of [update_version] working on the document text.
pub fn set_version(contents: &str, version: &str) -> Result<String> {
    let mut document: Value = serde_json::from_str(contents)?;

    let object = document.as_object_mut().ok_or_else(|| {
        GenSemverError::manifest("top-level JSON value must be an object")
    })?;
    object.insert("version".to_string(), Value::String(version.to_string()));

    Ok(serde_json::to_string_pretty(&document)?)
}
