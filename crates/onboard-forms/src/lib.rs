//! # onboard-forms
//!
//! Form definitions, validation and Bootstrap 5 rendering used by the
//! onboarding flow.
//!
//! This crate provides:
//! - Form field definitions with ordered validators
//! - Structured field errors (`ErrorKind` + message) collected per field
//! - Bootstrap 5 widgets (text inputs and a tab selector)
//! - Form rendering with a global error alert and a busy state
//!
//! ## Quick Start
//!
//! ```rust
//! use onboard_forms::fields::{tabs_field, text_field};
//! use onboard_forms::{render_bootstrap_form, FormBuilder, FormOptions, ValidationErrors};
//! use std::collections::HashMap;
//!
//! let fields = FormBuilder::new()
//!     .field(text_field("organization", "Organization name", Some(3), true))
//!     .field(tabs_field("mode", "Mode", vec![
//!         ("website", "Website"),
//!         ("other", "Other"),
//!     ]))
//!     .build();
//!
//! let html = render_bootstrap_form(
//!     &fields,
//!     &HashMap::new(),
//!     &ValidationErrors::new(),
//!     &FormOptions::new("/onboarding").submit_label("Create"),
//! );
//! assert!(html.contains("Organization name *"));
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use onboard_forms::fields::text_field;
//! use onboard_forms::{ErrorKind, ValidationErrors};
//!
//! let field = text_field("project", "Project name", Some(3), true);
//!
//! let mut errors = ValidationErrors::new();
//! if let Err(error) = field.validate("ab") {
//!     errors.add(&field.name, error);
//! }
//! assert_eq!(errors.kind("project"), Some(ErrorKind::TooShort { min: 3 }));
//! ```

mod error;
pub mod fields;
mod form;
pub mod validation;
pub mod widgets;

pub use error::{ErrorKind, FieldError, FormError, Result, ValidationErrors};
pub use form::{
    render_bootstrap_field, render_bootstrap_form, Form, FormBuilder, FormFieldDef, FormOptions,
};
