//! Form trait and form rendering.

use std::collections::HashMap;

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::{Button, Div, Span};

use crate::error::{FieldError, Result, ValidationErrors};
use crate::validation::Validator;
use crate::widgets::{Widget, WidgetAttrs};

/// Definition of a form field.
pub struct FormFieldDef {
    /// Field name.
    pub name: String,
    /// Field label.
    pub label: String,
    /// Whether the field is required.
    pub required: bool,
    /// The widget to render.
    pub widget: Box<dyn Widget>,
    /// Help text.
    pub help_text: Option<String>,
    /// Initial value.
    pub initial: Option<String>,
    /// Validators.
    pub validators: Vec<Box<dyn Validator>>,
    /// Widget attributes.
    pub attrs: WidgetAttrs,
    /// Whether the field is disabled.
    pub disabled: bool,
}

impl std::fmt::Debug for FormFieldDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormFieldDef")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("required", &self.required)
            .field("help_text", &self.help_text)
            .field("initial", &self.initial)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

impl FormFieldDef {
    /// Creates a new field definition.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        widget: impl Widget + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            required: false,
            widget: Box::new(widget),
            help_text: None,
            initial: None,
            validators: Vec::new(),
            attrs: WidgetAttrs::new(),
            disabled: false,
        }
    }

    /// Makes the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets help text.
    #[must_use]
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    /// Sets initial value.
    #[must_use]
    pub fn initial(mut self, value: impl Into<String>) -> Self {
        self.initial = Some(value.into());
        self
    }

    /// Adds a validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Sets a widget attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Disables the field.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Runs the validators in order and returns the first failure.
    pub fn validate(&self, value: &str) -> std::result::Result<(), FieldError> {
        self.validators.iter().try_for_each(|v| v.validate(value))
    }
}

/// Trait for form types.
pub trait Form: Sized {
    /// Returns the field definitions for this form.
    fn fields() -> Vec<FormFieldDef>;

    /// Validates the form data.
    fn validate(&self) -> std::result::Result<(), ValidationErrors>;

    /// Creates a form instance from submitted data.
    fn from_data(data: &HashMap<String, String>) -> Result<Self>;

    /// Renders the form as Bootstrap 5 HTML.
    fn as_bootstrap(&self) -> String;
}

/// Form-level rendering options.
#[derive(Debug, Clone)]
pub struct FormOptions {
    /// Form action URL.
    pub action: String,
    /// HTTP method.
    pub method: String,
    /// Text of the submit button.
    pub submit_label: String,
    /// Error that belongs to no single field.
    pub global_error: Option<String>,
    /// Whether a submission is in progress; disables inputs and the button.
    pub busy: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            action: String::new(),
            method: "POST".to_string(),
            submit_label: "Submit".to_string(),
            global_error: None,
            busy: false,
        }
    }
}

impl FormOptions {
    /// Creates options posting to `action`.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Default::default()
        }
    }

    /// Sets the submit button text.
    #[must_use]
    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    /// Sets the global error.
    #[must_use]
    pub fn global_error(mut self, error: Option<impl Into<String>>) -> Self {
        self.global_error = error.map(Into::into);
        self
    }

    /// Marks the form as busy.
    #[must_use]
    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }
}

/// Renders a form field with Bootstrap 5 styling.
pub fn render_bootstrap_field(
    field: &FormFieldDef,
    value: Option<&str>,
    error: Option<&FieldError>,
) -> String {
    render_field(field, value, error, false)
}

fn render_field(
    field: &FormFieldDef,
    value: Option<&str>,
    error: Option<&FieldError>,
    locked: bool,
) -> String {
    let id = format!("id_{}", field.name);

    let required_marker = if field.required { " *" } else { "" };
    let label_text = format!("{}{}", field.label, required_marker);

    let mut attrs = field.attrs.clone();
    attrs.set("id", &id);

    if error.is_some() {
        let current_class = attrs.get("class").cloned().unwrap_or_default();
        attrs.set("class", format!("{current_class} is-invalid").trim());
    }

    if field.disabled || locked {
        attrs.set("disabled", "disabled");
    }

    if field.required {
        attrs.set("required", "required");
    }

    let actual_value = value.or(field.initial.as_deref());
    let widget_html = field.widget.render(&field.name, actual_value, &attrs);

    let label_el = html! {
        label.for_(#id).class("form-label") { #label_text }
    };

    let help_text = field.help_text.clone();

    html! { div.class("mb-3") }
        .raw(label_el.render())
        .raw(&widget_html)
        .when(error.is_some(), |d| {
            d.child::<Div, _>(|e| {
                e.class("invalid-feedback d-block")
                    .text(error.map(|e| e.message.as_str()).unwrap_or(""))
            })
        })
        .when(help_text.is_some(), |d| {
            d.child::<Div, _>(|h| {
                h.class("form-text")
                    .text(help_text.as_deref().unwrap_or(""))
            })
        })
        .render()
}

/// Renders a complete form with Bootstrap 5 styling.
///
/// With `options.busy` every field is disabled and the submit button shows
/// a spinner.
pub fn render_bootstrap_form(
    fields: &[FormFieldDef],
    values: &HashMap<String, String>,
    errors: &ValidationErrors,
    options: &FormOptions,
) -> String {
    let action = options.action.as_str();
    let method = options.method.as_str();
    let mut form = html! {
        form.action(#action).method(#method)
    };

    if let Some(global) = &options.global_error {
        form = form.child::<Div, _>(|d| {
            d.class("alert alert-danger")
                .attr("role", "alert")
                .text(global)
        });
    }

    for field in fields {
        let value = values.get(&field.name).map(String::as_str);
        let field_html = render_field(field, value, errors.get(&field.name), options.busy);
        form = form.child::<Div, _>(|d| d.raw(&field_html));
    }

    let busy = options.busy;
    let label = &options.submit_label;
    form = form.child::<Div, _>(|d| {
        d.class("d-flex justify-content-end").child::<Button, _>(|b| {
            b.attr("type", "submit")
                .class("btn btn-primary btn-lg")
                .when(busy, |b: Element<Button>| {
                    b.attr("disabled", "disabled").child::<Span, _>(|s| {
                        s.class("spinner-border spinner-border-sm me-2")
                            .attr("aria-hidden", "true")
                    })
                })
                .text(label)
        })
    });

    form.render()
}

/// A simple form builder for creating forms programmatically.
#[derive(Debug, Default)]
pub struct FormBuilder {
    fields: Vec<FormFieldDef>,
}

impl FormBuilder {
    /// Creates a new form builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the form.
    #[must_use]
    pub fn field(mut self, field: FormFieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds a field only when `condition` holds.
    #[must_use]
    pub fn field_if(self, condition: bool, field: impl FnOnce() -> FormFieldDef) -> Self {
        if condition {
            self.field(field())
        } else {
            self
        }
    }

    /// Returns the field definitions.
    pub fn build(self) -> Vec<FormFieldDef> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::validation::{MinLengthValidator, RequiredValidator};
    use crate::widgets::BootstrapTextInput;

    #[test]
    fn test_field_def_builder() {
        let field = FormFieldDef::new("organization", "Organization name", BootstrapTextInput::new())
            .required()
            .help_text("Can be personal or a company")
            .attr("autocomplete", "organization");

        assert_eq!(field.name, "organization");
        assert_eq!(field.label, "Organization name");
        assert!(field.required);
        assert_eq!(
            field.help_text,
            Some("Can be personal or a company".to_string())
        );
    }

    #[test]
    fn test_field_validate_first_failure_wins() {
        let field = FormFieldDef::new("project", "Project name", BootstrapTextInput::new())
            .validator(RequiredValidator::new())
            .validator(MinLengthValidator::new(3));

        assert_eq!(field.validate("").unwrap_err().kind, ErrorKind::Required);
        assert_eq!(
            field.validate("ab").unwrap_err().kind,
            ErrorKind::TooShort { min: 3 }
        );
        assert!(field.validate("Web").is_ok());
    }

    #[test]
    fn test_render_field_no_errors() {
        let field = FormFieldDef::new("project", "Project name", BootstrapTextInput::new())
            .required()
            .help_text("Your first project");

        let html = render_bootstrap_field(&field, Some("Web"), None);
        assert!(html.contains("form-label"));
        assert!(html.contains("Project name *"));
        assert!(html.contains("Your first project"));
        assert!(!html.contains("is-invalid"));
    }

    #[test]
    fn test_render_field_with_error() {
        let field = FormFieldDef::new("project", "Project name", BootstrapTextInput::new());
        let error = FieldError::new(ErrorKind::TooShort { min: 3 });

        let html = render_bootstrap_field(&field, Some("ab"), Some(&error));
        assert!(html.contains("is-invalid"));
        assert!(html.contains("Ensure this value has at least 3 characters."));
    }

    #[test]
    fn test_render_form_global_error_and_busy() {
        let fields = FormBuilder::new()
            .field(FormFieldDef::new("project", "Project name", BootstrapTextInput::new()))
            .build();
        let options = FormOptions::new("/onboarding")
            .submit_label("Create")
            .global_error(Some("name_taken"))
            .busy(true);

        let html = render_bootstrap_form(&fields, &HashMap::new(), &ValidationErrors::new(), &options);
        assert!(html.contains("alert alert-danger"));
        assert!(html.contains("name_taken"));
        assert!(html.contains("spinner-border"));
        assert!(html.contains("Create"));
        assert!(html.contains(r#"disabled="disabled""#));
    }

    #[test]
    fn test_render_form_wraps_fields_inside_form() {
        let fields = FormBuilder::new()
            .field(FormFieldDef::new("organization", "Organization", BootstrapTextInput::new()))
            .field(FormFieldDef::new("project", "Project", BootstrapTextInput::new()))
            .build();
        let mut values = HashMap::new();
        values.insert("project".to_string(), "Web".to_string());

        let html = render_bootstrap_form(
            &fields,
            &values,
            &ValidationErrors::new(),
            &FormOptions::new("/onboarding").busy(true),
        );

        assert!(html.starts_with("<form"));
        assert!(html.ends_with("</form>"));
        let form_open = html.find("<form").unwrap();
        let project = html.find(r#"name="project""#).unwrap();
        let button = html.find("<button").unwrap();
        assert!(form_open < project && project < button);
        assert!(html.contains(r#"value="Web""#));
        assert_eq!(html[..button].matches(r#"disabled="disabled""#).count(), 2);
    }

    #[test]
    fn test_render_form_idle() {
        let fields = FormBuilder::new()
            .field(FormFieldDef::new("project", "Project name", BootstrapTextInput::new()))
            .build();

        let html = render_bootstrap_form(
            &fields,
            &HashMap::new(),
            &ValidationErrors::new(),
            &FormOptions::new("/onboarding"),
        );
        assert!(!html.contains("alert"));
        assert!(!html.contains("disabled"));
        assert!(!html.contains("spinner-border"));
    }

    #[test]
    fn test_form_builder_field_if() {
        let fields = FormBuilder::new()
            .field(FormFieldDef::new("project", "Project", BootstrapTextInput::new()))
            .field_if(false, || {
                FormFieldDef::new("cors", "Cors", BootstrapTextInput::url())
            })
            .build();

        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "project");
    }
}
