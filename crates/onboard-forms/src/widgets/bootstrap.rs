//! Bootstrap 5 form widgets.

use super::{html_escape, Widget, WidgetAttrs};

/// Bootstrap 5 text input widget.
#[derive(Debug, Clone)]
pub struct BootstrapTextInput {
    /// The HTML input type (text, url, etc.).
    pub input_type: String,
    /// Placeholder text.
    pub placeholder: Option<String>,
}

impl Default for BootstrapTextInput {
    fn default() -> Self {
        Self {
            input_type: "text".to_string(),
            placeholder: None,
        }
    }
}

impl BootstrapTextInput {
    /// Creates a new text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a URL input.
    pub fn url() -> Self {
        Self {
            input_type: "url".to_string(),
            ..Default::default()
        }
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }
}

impl Widget for BootstrapTextInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let value_attr = value
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();

        let placeholder_attr = self
            .placeholder
            .as_ref()
            .map(|p| format!(r#" placeholder="{}""#, html_escape(p)))
            .unwrap_or_default();

        let id = attrs
            .get("id")
            .cloned()
            .unwrap_or_else(|| format!("id_{name}"));

        let mut class = "form-control".to_string();
        if let Some(extra_class) = attrs.get("class") {
            class = format!("{class} {extra_class}");
        }

        let extra_attrs = attrs.to_html_except(&["class", "id"]);

        format!(
            r#"<input type="{}" class="{}" id="{}" name="{}"{}{}{extra_attrs}>"#,
            self.input_type, class, id, name, value_attr, placeholder_attr
        )
    }
}

/// Bootstrap 5 segmented radio group, rendered as a row of toggle buttons.
///
/// Exactly one choice is checked: the current value when it matches a
/// choice, the first choice otherwise.
#[derive(Debug, Clone, Default)]
pub struct BootstrapTabs {
    /// Available choices (value, label).
    pub choices: Vec<(String, String)>,
}

impl BootstrapTabs {
    /// Creates a new tab group with the given choices.
    pub fn new(choices: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            choices: choices
                .into_iter()
                .map(|(v, l)| (v.into(), l.into()))
                .collect(),
        }
    }
}

impl Widget for BootstrapTabs {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let active = value
            .filter(|v| self.choices.iter().any(|(c, _)| c == v))
            .or_else(|| self.choices.first().map(|(c, _)| c.as_str()));

        let disabled_attr = if attrs.contains("disabled") {
            " disabled"
        } else {
            ""
        };

        let mut html = format!(r#"<div class="btn-group" role="group" id="id_{name}">"#);

        for (opt_value, label) in &self.choices {
            let id = format!("id_{name}_{opt_value}");
            let checked_attr = if active == Some(opt_value.as_str()) {
                " checked"
            } else {
                ""
            };

            html.push_str(&format!(
                r#"<input type="radio" class="btn-check" name="{}" id="{}" value="{}" autocomplete="off"{checked_attr}{disabled_attr}><label class="btn btn-outline-primary" for="{}">{}</label>"#,
                name,
                id,
                html_escape(opt_value),
                id,
                html_escape(label)
            ));
        }

        html.push_str("</div>");
        html
    }
}
