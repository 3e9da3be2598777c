//! Editing view of the onboarding form.

use ironhtml::typed::Element;
use ironhtml_elements::{Div, H1, P};
use onboard_forms::fields::{tabs_field, text_field};
use onboard_forms::validation::RequiredValidator;
use onboard_forms::widgets::BootstrapTextInput;
use onboard_forms::{render_bootstrap_form, FormBuilder, FormFieldDef, FormOptions, ValidationErrors};

use crate::config::DEFAULT_ACTION;
use crate::schema::{FieldSchema, CORS_REQUIRED_MESSAGE};
use crate::values::{FormValues, Mode};

/// Shown under the mode tabs when no CORS origin is needed.
pub const SECRET_NOTICE: &str = "🔑 You will get a secret to use for your API requests.";

/// Submission-related parts of the editing view.
#[derive(Debug, Clone, Default)]
pub struct FormStatus {
    /// Failure of the last submission, shown above the fields.
    pub global_error: Option<String>,
    /// Whether a submission is in flight.
    pub busy: bool,
}

/// Returns the fields shown for `mode`.
///
/// The CORS input exists only for websites; other modes show a notice
/// about the client secret instead.
pub fn form_fields(mode: Mode, schema: &FieldSchema) -> Vec<FormFieldDef> {
    let min = Some(schema.min_name_length());
    let choices = Mode::ALL.iter().map(|m| (m.as_str(), m.label())).collect();

    let mut mode_field = tabs_field("mode", "Where will you use it?", choices);
    if mode == Mode::Other {
        mode_field = mode_field.help_text(SECRET_NOTICE);
    }

    FormBuilder::new()
        .field(text_field("organization", "Organization name", min, true))
        .field(text_field("project", "Project name", min, true))
        .field(mode_field)
        .field_if(mode == Mode::Website, || {
            FormFieldDef::new(
                "cors",
                "Cors",
                BootstrapTextInput::url().placeholder("https://example.com"),
            )
            .required()
            .validator(RequiredValidator::with_message(CORS_REQUIRED_MESSAGE).allow_whitespace())
        })
        .build()
}

/// Renders the editing view.
pub fn render_form(
    values: &FormValues,
    errors: &ValidationErrors,
    status: &FormStatus,
    schema: &FieldSchema,
) -> String {
    render_form_to(values, errors, status, schema, &FormOptions::new(DEFAULT_ACTION))
}

pub(crate) fn render_form_to(
    values: &FormValues,
    errors: &ValidationErrors,
    status: &FormStatus,
    schema: &FieldSchema,
    options: &FormOptions,
) -> String {
    let fields = form_fields(values.mode, schema);
    let options = options
        .clone()
        .submit_label("Create")
        .global_error(status.global_error.as_deref())
        .busy(status.busy);
    let form_html = render_bootstrap_form(&fields, &values.to_data(), errors, &options);

    Element::<Div>::new()
        .class("card p-4 p-md-5")
        .child::<H1, _>(|h| h.class("fw-medium fs-2").text("Welcome"))
        .child::<P, _>(|p| {
            p.class("fs-5 mb-4").text(
                "Create your organization below (can be personal or a company) \
                 and your first project.",
            )
        })
        .raw(&form_html)
        .render()
}
