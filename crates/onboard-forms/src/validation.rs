//! Form field validators.

use crate::error::{ErrorKind, FieldError};

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns the field error if invalid.
    fn validate(&self, value: &str) -> Result<(), FieldError>;
}

/// Validator that requires a non-empty value.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
    message: String,
    allow_whitespace: bool,
}

impl RequiredValidator {
    /// Creates a new RequiredValidator with default message.
    pub fn new() -> Self {
        Self {
            message: ErrorKind::Required.default_message(),
            allow_whitespace: false,
        }
    }

    /// Creates a new RequiredValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            allow_whitespace: false,
        }
    }

    /// Only the exact empty string fails; whitespace counts as a value.
    #[must_use]
    pub fn allow_whitespace(mut self) -> Self {
        self.allow_whitespace = true;
        self
    }
}

impl Default for RequiredValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, value: &str) -> Result<(), FieldError> {
        let empty = if self.allow_whitespace {
            value.is_empty()
        } else {
            value.trim().is_empty()
        };

        if empty {
            Err(FieldError::with_message(ErrorKind::Required, &self.message))
        } else {
            Ok(())
        }
    }
}

/// Validator that enforces a minimum length in characters.
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
    min_length: usize,
    message: String,
}

impl MinLengthValidator {
    /// Creates a new MinLengthValidator.
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            message: ErrorKind::TooShort { min: min_length }.default_message(),
        }
    }

    /// Returns the minimum accepted length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: &str) -> Result<(), FieldError> {
        if value.chars().count() < self.min_length {
            Err(FieldError::with_message(
                ErrorKind::TooShort {
                    min: self.min_length,
                },
                &self.message,
            ))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_validator() {
        let v = RequiredValidator::new();
        assert!(v.validate("hello").is_ok());
        assert!(v.validate("").is_err());
        assert!(v.validate("   ").is_err());
    }

    #[test]
    fn test_required_validator_allow_whitespace() {
        let v = RequiredValidator::with_message("Cors is required").allow_whitespace();
        assert!(v.validate(" ").is_ok());

        let err = v.validate("").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Required);
        assert_eq!(err.message, "Cors is required");
    }

    #[test]
    fn test_min_length_validator() {
        let v = MinLengthValidator::new(3);
        assert!(v.validate("abc").is_ok());
        assert!(v.validate("hello world").is_ok());

        let err = v.validate("ab").unwrap_err();
        assert_eq!(err.kind, ErrorKind::TooShort { min: 3 });
        assert_eq!(err.message, "Ensure this value has at least 3 characters.");
    }

    #[test]
    fn test_min_length_counts_characters() {
        let v = MinLengthValidator::new(3);
        // Two characters, four bytes.
        assert!(v.validate("éé").is_err());
        assert!(v.validate("ééé").is_ok());
    }
}
