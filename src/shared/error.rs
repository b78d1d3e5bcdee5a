/**
 * Shared Error Types
 *
 * This module defines the validation error type produced by the schema
 * checks in `shared::validation`. It is independent of HTTP so it can be
 * used anywhere a payload needs checking; the backend maps it to a
 * 422 response.
 */

use serde::Serialize;
use thiserror::Error;

/// A single field-level violation
///
/// Rendered in the same shape joi uses: the quoted field name followed by
/// the reason, e.g. `"name" is not allowed to be empty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the offending field (`value` for the payload itself)
    pub field: String,
    /// Reason the field was rejected
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" {}", self.field, self.message)
    }
}

/// All violations found in one validation pass
///
/// Validation never stops at the first problem; every rule is evaluated and
/// each failure contributes one `FieldError`. An instance is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", render(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

fn render(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    /// Build from collected violations, or `None` when there were none
    pub fn from_errors(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// Shorthand for a single violation
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(field, message)],
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Human-readable messages, one per violation, in rule order
    pub fn details(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}
