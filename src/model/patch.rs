//! Wire representation of patch requests.
//!
//! A patch request is a JSON array of operations in a JSON-Patch inspired
//! notation (not full RFC 6902):
//!
//! ```json
//! [
//!   {"operation": "REPLACE", "path": "/idleSessionTimeoutPeriod", "value": "30"},
//!   {"operation": "ADD", "path": "/homeRealmIdentifiers/0", "value": "localhost"},
//!   {"operation": "REMOVE", "path": "/homeRealmIdentifiers/2"}
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Patch operation name as sent on the wire.
///
/// Operation names the engine does not support deserialize to
/// [`PatchOperation::Unsupported`] so they are rejected as invalid input
/// rather than as malformed JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PatchOperation {
    #[serde(alias = "add")]
    Add,
    #[serde(alias = "remove")]
    Remove,
    #[serde(alias = "replace")]
    Replace,
    #[serde(other)]
    Unsupported,
}

impl fmt::Display for PatchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PatchOperation::Add => "ADD",
            PatchOperation::Remove => "REMOVE",
            PatchOperation::Replace => "REPLACE",
            PatchOperation::Unsupported => "UNSUPPORTED",
        };
        f.write_str(name)
    }
}

/// A single patch operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    #[serde(rename = "operation", alias = "op")]
    pub operation: PatchOperation,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Patch {
    pub fn new(operation: PatchOperation, path: impl Into<String>, value: Option<String>) -> Self {
        Self {
            operation,
            path: path.into(),
            value,
        }
    }

    pub fn replace(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(PatchOperation::Replace, path, Some(value.into()))
    }

    pub fn add(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(PatchOperation::Add, path, Some(value.into()))
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self::new(PatchOperation::Remove, path, None)
    }
}
