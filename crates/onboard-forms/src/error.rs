//! Error types for forms.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Form-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// Invalid field value.
    #[error("invalid value for field {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// The rule a field value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ErrorKind {
    /// The value was empty.
    Required,
    /// The value had fewer than `min` characters.
    TooShort { min: usize },
}

impl ErrorKind {
    /// Returns the default message for this kind.
    pub fn default_message(self) -> String {
        match self {
            Self::Required => "This field is required.".to_string(),
            Self::TooShort { min } => {
                format!("Ensure this value has at least {min} characters.")
            }
        }
    }
}

/// A single field error: what went wrong plus the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// The broken rule.
    #[serde(flatten)]
    pub kind: ErrorKind,
    /// Human readable message.
    pub message: String,
}

impl FieldError {
    /// Creates an error with the default message for `kind`.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: kind.default_message(),
        }
    }

    /// Creates an error with a custom message.
    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validation errors keyed by field name.
///
/// Each field carries at most one error; the first rule that fails wins.
/// Fields iterate in name order so two passes over the same input compare
/// equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, FieldError>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Adds an error for a field unless the field already has one.
    pub fn add(&mut self, field: &str, error: FieldError) {
        self.errors.entry(field.to_string()).or_insert(error);
    }

    /// Removes the error of a field, returning it.
    pub fn remove(&mut self, field: &str) -> Option<FieldError> {
        self.errors.remove(field)
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the error for a specific field.
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// Returns the message for a specific field.
    pub fn message(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(|e| e.message.as_str())
    }

    /// Returns the broken rule for a specific field.
    pub fn kind(&self, field: &str) -> Option<ErrorKind> {
        self.errors.get(field).map(|e| e.kind)
    }

    /// Returns the names of all fields with errors.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// Iterates over `(field, error)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.errors.iter().map(|(f, e)| (f.as_str(), e))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, error) in &self.errors {
            writeln!(f, "{field}: {}", error.message)?;
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
