//! Field-level patch documents applied to update DTOs.
//!
//! A document is a JSON array such as
//! `[{ "op": "replace", "path": "/titulo", "value": "Matrix" }]`. Paths address a
//! single top-level field of the DTO (matched case-insensitively). `remove` drops the
//! field so that deserialization falls back to the DTO's `#[serde(default)]`.

use anyhow::Context;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use validator::Validate;

use crate::error::{AppResult, ValidationProblem};

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Replace { path: String, value: Value },
    Remove { path: String },
}

impl PatchOperation {
    pub fn path(&self) -> &str {
        match self {
            PatchOperation::Add { path, .. }
            | PatchOperation::Replace { path, .. }
            | PatchOperation::Remove { path } => path,
        }
    }
}

/// Applies `operations` to a copy of `target` and validates the result.
///
/// Unknown paths, values of the wrong type and rule violations are all reported as a
/// [`ValidationProblem`]; `target` itself is never modified.
pub fn apply<T>(target: &T, operations: &[PatchOperation]) -> AppResult<T>
where
    T: Serialize + DeserializeOwned + Validate,
{
    let mut document = match serde_json::to_value(target).context("serializing patch target")? {
        Value::Object(map) => map,
        other => {
            return Err(anyhow::anyhow!("patch target must be a JSON object, got {other}").into());
        },
    };

    let mut problem = ValidationProblem::default();
    for operation in operations {
        let Some(field) = resolve(&document, operation.path()) else {
            problem.add(
                field_label(operation.path()),
                format!(
                    "The target location specified by path '{}' was not found.",
                    operation.path()
                ),
            );
            continue;
        };

        match operation {
            PatchOperation::Add { value, .. } | PatchOperation::Replace { value, .. } => {
                document.insert(field, value.clone());
            },
            PatchOperation::Remove { .. } => {
                document.remove(&field);
            },
        }
    }
    if !problem.is_empty() {
        return Err(problem.into());
    }

    let patched: T = serde_json::from_value(Value::Object(document))
        .map_err(|err| ValidationProblem::single("$", err.to_string()))?;
    patched.validate()?;

    Ok(patched)
}

/// Maps a JSON pointer with one reference token onto an existing key of `document`.
fn resolve(document: &Map<String, Value>, path: &str) -> Option<String> {
    let token = path.strip_prefix('/')?;
    if token.is_empty() || token.contains('/') {
        return None;
    }
    let token = token.replace("~1", "/").replace("~0", "~");
    document.keys().find(|key| key.eq_ignore_ascii_case(&token)).cloned()
}

fn field_label(path: &str) -> String {
    let label = path.trim_start_matches('/');
    if label.is_empty() { "$".to_string() } else { label.to_string() }
}
