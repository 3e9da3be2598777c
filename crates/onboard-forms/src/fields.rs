//! Field constructors for common inputs.

use crate::form::FormFieldDef;
use crate::validation::{MinLengthValidator, RequiredValidator};
use crate::widgets::{BootstrapTabs, BootstrapTextInput};

/// Creates a text field, optionally with a minimum length.
pub fn text_field(
    name: &str,
    label: &str,
    min_length: Option<usize>,
    required: bool,
) -> FormFieldDef {
    let mut field = FormFieldDef::new(name, label, BootstrapTextInput::new().placeholder(label));

    if required {
        field = field.required().validator(RequiredValidator::new());
    }

    if let Some(min) = min_length {
        field = field.validator(MinLengthValidator::new(min));
    }

    field
}

/// Creates a tab selector over a fixed set of choices.
pub fn tabs_field(name: &str, label: &str, choices: Vec<(&str, &str)>) -> FormFieldDef {
    let initial = choices.first().map(|(v, _)| (*v).to_string());
    let mut field = FormFieldDef::new(name, label, BootstrapTabs::new(choices));

    if let Some(initial) = initial {
        field = field.initial(initial);
    }

    field
}
