//! `package.json` rewriting for generated projects.

use std::path::Path;

use serde_json::Value;

use crate::error::{Result, ScaffoldError};

pub const MANIFEST_FILE: &str = "package.json";

/// Set `name` and `description` in a `package.json` document. Every other
/// key keeps its value and position.
pub fn rewrite(contents: &[u8], name: &str, description: &str, origin: &Path) -> Result<String> {
    let mut manifest: Value =
        serde_json::from_slice(contents).map_err(|e| ScaffoldError::ManifestParse {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })?;

    let object = manifest
        .as_object_mut()
        .ok_or_else(|| ScaffoldError::ManifestParse {
            path: origin.to_path_buf(),
            reason: "top-level value is not an object".into(),
        })?;
    object.insert("name".into(), Value::String(name.to_string()));
    object.insert("description".into(), Value::String(description.to_string()));

    let mut out = serde_json::to_string_pretty(&manifest).map_err(|e| ScaffoldError::ManifestParse {
        path: origin.to_path_buf(),
        reason: e.to_string(),
    })?;
    out.push('\n');
    Ok(out)
}
