//! Validation rules for the onboarding form.
//!
//! All rules live in one composite validator so the conditional CORS rule
//! sees the mode it depends on. Validation is a pure function of the values
//! and is re-run on every submit.

use onboard_forms::validation::{MinLengthValidator, RequiredValidator, Validator};
use onboard_forms::ValidationErrors;

use crate::values::{Field, FormValues, Mode};

/// Default minimum length of organization and project names.
pub const DEFAULT_MIN_NAME_LENGTH: usize = 3;

/// Message attached to `cors` when a website has no origin.
pub const CORS_REQUIRED_MESSAGE: &str = "Cors is required";

/// Composite validator for [`FormValues`].
#[derive(Debug, Clone)]
pub struct FieldSchema {
    name: MinLengthValidator,
    cors: RequiredValidator,
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_NAME_LENGTH)
    }
}

impl FieldSchema {
    /// Creates a schema requiring names of at least `min_name_length` characters.
    pub fn new(min_name_length: usize) -> Self {
        Self {
            name: MinLengthValidator::new(min_name_length),
            // Only the exact empty string counts as missing.
            cors: RequiredValidator::with_message(CORS_REQUIRED_MESSAGE).allow_whitespace(),
        }
    }

    /// Returns the minimum name length.
    pub fn min_name_length(&self) -> usize {
        self.name.min_length()
    }

    /// Validates a snapshot of the form; an empty result means valid.
    pub fn validate(&self, values: &FormValues) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        for field in [Field::Organization, Field::Project] {
            if let Err(error) = self.name.validate(values.get(field)) {
                errors.add(field.as_str(), error);
            }
        }

        if values.mode == Mode::Website {
            if let Err(error) = self.cors.validate(values.get(Field::Cors)) {
                errors.add(Field::Cors.as_str(), error);
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onboard_forms::ErrorKind;

    fn schema() -> FieldSchema {
        FieldSchema::default()
    }

    #[test]
    fn test_valid_website() {
        let values = FormValues::new("Acme", "Web").with_cors("https://acme.com");
        assert!(schema().validate(&values).is_empty());
    }

    #[test]
    fn test_short_names_fail_regardless_of_mode() {
        for short in ["", "A", "Ac"] {
            for mode in Mode::ALL {
                let values = FormValues::new(short, short)
                    .with_mode(mode)
                    .with_cors("https://acme.com");
                let errors = schema().validate(&values);

                assert_eq!(
                    errors.kind("organization"),
                    Some(ErrorKind::TooShort { min: 3 })
                );
                assert_eq!(errors.kind("project"), Some(ErrorKind::TooShort { min: 3 }));
            }
        }
    }

    #[test]
    fn test_website_requires_cors() {
        let values = FormValues::new("Acme", "Web");
        let errors = schema().validate(&values);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.kind("cors"), Some(ErrorKind::Required));
        assert_eq!(errors.message("cors"), Some(CORS_REQUIRED_MESSAGE));
    }

    #[test]
    fn test_website_null_cors_is_missing() {
        let mut values = FormValues::new("Acme", "Web");
        values.cors = None;
        assert_eq!(schema().validate(&values).kind("cors"), Some(ErrorKind::Required));
    }

    #[test]
    fn test_other_mode_skips_cors() {
        for cors in [None, Some(""), Some("not a url"), Some("https://acme.com")] {
            let mut values = FormValues::new("Acme", "Web").with_mode(Mode::Other);
            values.cors = cors.map(str::to_string);
            assert!(schema().validate(&values).is_empty());
        }
    }

    #[test]
    fn test_revalidation_is_stable() {
        let values = FormValues::new("Ac", "W");
        assert_eq!(schema().validate(&values), schema().validate(&values));
    }

    #[test]
    fn test_custom_min_length() {
        let schema = FieldSchema::new(5);
        let values = FormValues::new("Acme", "Websites").with_cors("https://acme.com");
        let errors = schema.validate(&values);

        assert_eq!(schema.min_name_length(), 5);
        assert_eq!(errors.kind("organization"), Some(ErrorKind::TooShort { min: 5 }));
        assert!(errors.get("project").is_none());
    }
}
