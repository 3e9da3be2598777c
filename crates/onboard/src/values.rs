//! Onboarding form values.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use onboard_forms::{Form, FormError, FormFieldDef, ValidationErrors};
use serde::{Deserialize, Serialize};

use crate::error::OnboardError;
use crate::schema::FieldSchema;
use crate::view;

/// Deployment context of the first project.
///
/// A website needs a CORS origin; anything else gets a client secret instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Browser tracking from a website.
    #[default]
    Website,
    /// Servers, apps and everything else.
    Other,
}

impl Mode {
    /// Both modes, in display order.
    pub const ALL: [Self; 2] = [Self::Website, Self::Other];

    /// Returns the wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Other => "other",
        }
    }

    /// Returns the tab label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = OnboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "website" => Ok(Self::Website),
            "other" => Ok(Self::Other),
            _ => Err(OnboardError::InvalidMode(s.to_string())),
        }
    }
}

/// An editable text field of the onboarding form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Organization name.
    Organization,
    /// First project name.
    Project,
    /// CORS origin, only meaningful for websites.
    Cors,
}

impl Field {
    /// Returns the form field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Organization => "organization",
            Self::Project => "project",
            Self::Cors => "cors",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = OnboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "organization" => Ok(Self::Organization),
            "project" => Ok(Self::Project),
            "cors" => Ok(Self::Cors),
            _ => Err(OnboardError::UnknownField(s.to_string())),
        }
    }
}

/// Current contents of the onboarding form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    /// Organization name.
    pub organization: String,
    /// Project name.
    pub project: String,
    /// CORS origin. Kept while in `Other` mode but never sent.
    pub cors: Option<String>,
    /// Selected mode.
    #[serde(default)]
    pub mode: Mode,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            organization: String::new(),
            project: String::new(),
            cors: Some(String::new()),
            mode: Mode::Website,
        }
    }
}

impl FormValues {
    /// Creates values for an organization and project in website mode.
    pub fn new(organization: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            project: project.into(),
            ..Default::default()
        }
    }

    /// Sets the mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the CORS origin.
    #[must_use]
    pub fn with_cors(mut self, cors: impl Into<String>) -> Self {
        self.cors = Some(cors.into());
        self
    }

    /// Returns the text of a field; a null CORS origin reads as empty.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Organization => &self.organization,
            Field::Project => &self.project,
            Field::Cors => self.cors.as_deref().unwrap_or(""),
        }
    }

    /// Replaces the text of one field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Organization => self.organization = value,
            Field::Project => self.project = value,
            Field::Cors => self.cors = Some(value),
        }
    }

    /// Returns the values as a name/value map for rendering.
    pub fn to_data(&self) -> HashMap<String, String> {
        let mut data = HashMap::new();
        data.insert("organization".to_string(), self.organization.clone());
        data.insert("project".to_string(), self.project.clone());
        data.insert("mode".to_string(), self.mode.to_string());
        if let Some(cors) = &self.cors {
            data.insert("cors".to_string(), cors.clone());
        }
        data
    }
}

impl Form for FormValues {
    fn fields() -> Vec<FormFieldDef> {
        view::form_fields(Mode::Website, &FieldSchema::default())
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let errors = FieldSchema::default().validate(self);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn from_data(data: &HashMap<String, String>) -> onboard_forms::Result<Self> {
        let mode = match data.get("mode") {
            Some(raw) => raw.parse().map_err(|e: OnboardError| FormError::InvalidValue {
                field: "mode".to_string(),
                message: e.to_string(),
            })?,
            None => Mode::default(),
        };

        Ok(Self {
            organization: data.get("organization").cloned().unwrap_or_default(),
            project: data.get("project").cloned().unwrap_or_default(),
            cors: data.get("cors").cloned(),
            mode,
        })
    }

    fn as_bootstrap(&self) -> String {
        view::render_form(
            self,
            &ValidationErrors::new(),
            &view::FormStatus::default(),
            &FieldSchema::default(),
        )
    }
}
