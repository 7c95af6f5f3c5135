//! Field paths and field-level validation errors

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

/// Dotted pointer to a configuration field, e.g. `modules.cloudHub.websocket.port`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    pub fn new(root: impl Into<String>) -> Self {
        FieldPath {
            segments: vec![root.into()],
        }
    }

    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        FieldPath { segments }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("{field}: Invalid value: {bad_value}: {detail}")]
pub struct FieldError {
    pub field: FieldPath,
    pub bad_value: Value,
    pub detail: String,
}

impl FieldError {
    pub fn invalid(field: &FieldPath, bad_value: impl Into<Value>, detail: impl Into<String>) -> Self {
        FieldError {
            field: field.clone(),
            bad_value: bad_value.into(),
            detail: detail.into(),
        }
    }
}

pub type ErrorList = Vec<FieldError>;
