//! Onboarding configuration.

use serde::{Deserialize, Serialize};

use crate::schema::{FieldSchema, DEFAULT_MIN_NAME_LENGTH};

/// Default documentation link shown after a successful onboarding.
pub const DEFAULT_DOCS_URL: &str = "https://docs.openpanel.dev/docs";

/// Default form action URL.
pub const DEFAULT_ACTION: &str = "/onboarding";

/// Settings a host can tune without touching the flow itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingConfig {
    /// Target of the "Read docs" link on the result view.
    pub docs_url: String,
    /// Minimum length of organization and project names.
    pub min_name_length: usize,
    /// Form action URL.
    pub action: String,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            docs_url: DEFAULT_DOCS_URL.to_string(),
            min_name_length: DEFAULT_MIN_NAME_LENGTH,
            action: DEFAULT_ACTION.to_string(),
        }
    }
}

impl OnboardingConfig {
    /// Parses a JSON configuration; missing keys take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Sets the documentation link.
    #[must_use]
    pub fn docs_url(mut self, url: impl Into<String>) -> Self {
        self.docs_url = url.into();
        self
    }

    /// Sets the minimum name length.
    #[must_use]
    pub fn min_name_length(mut self, min: usize) -> Self {
        self.min_name_length = min;
        self
    }

    /// Sets the form action URL.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Builds the validation schema for these settings.
    pub fn schema(&self) -> FieldSchema {
        FieldSchema::new(self.min_name_length)
    }
}
