//! One onboarding session from first edit to created client.

use onboard_forms::FormOptions;
use tracing::info;

use crate::config::OnboardingConfig;
use crate::controller::{ClientCreator, SubmissionController};
use crate::error::{OnboardError, Result};
use crate::result_view::{Navigator, ResultView};
use crate::schema::FieldSchema;
use crate::state::{FormState, Phase, SubmitAttempt};
use crate::values::{Field, FormValues, Mode};
use crate::view::{self, FormStatus};

/// Drives a [`FormState`] through validation and one creation call per
/// accepted submit.
#[derive(Debug)]
pub struct OnboardingSession<C> {
    state: FormState,
    controller: SubmissionController<C>,
    schema: FieldSchema,
    config: OnboardingConfig,
}

impl<C: ClientCreator> OnboardingSession<C> {
    /// Starts a session with default values.
    pub fn new(creator: C, config: OnboardingConfig) -> Self {
        Self::with_values(creator, config, FormValues::default())
    }

    /// Starts a session with prefilled values.
    pub fn with_values(creator: C, config: OnboardingConfig, values: FormValues) -> Self {
        Self {
            state: FormState::with_values(values),
            controller: SubmissionController::new(creator),
            schema: config.schema(),
            config,
        }
    }

    /// Returns the form state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Returns the current values.
    pub fn values(&self) -> &FormValues {
        self.state.values()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns the configuration.
    pub fn config(&self) -> &OnboardingConfig {
        &self.config
    }

    /// Returns the creation backend.
    pub fn creator(&self) -> &C {
        self.controller.creator()
    }

    /// Replaces one field.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        self.state.edit(field, value)
    }

    /// Replaces one field addressed by its form name.
    pub fn edit_named(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.edit(name.parse()?, value)
    }

    /// Switches the mode.
    pub fn select_mode(&mut self, mode: Mode) -> Result<()> {
        self.state.select_mode(mode)
    }

    /// Validates and, when valid, makes exactly one creation call.
    ///
    /// Returns the attempt as decided before the call; the call's result is
    /// visible through [`OnboardingSession::phase`] and the state.
    pub async fn submit(&mut self) -> Result<SubmitAttempt> {
        let attempt = self.state.begin_submit(&self.schema);
        if let SubmitAttempt::Accepted(request) = &attempt {
            let outcome = self.controller.send(request.clone()).await;
            self.state.apply(outcome)?;
        }
        Ok(attempt)
    }

    /// Returns the result view once the session succeeded.
    pub fn result_view(&self) -> Option<ResultView<'_>> {
        self.state
            .created_client()
            .map(|client| ResultView::new(client, &self.config.docs_url))
    }

    /// Returns the result view, or why there is none yet.
    ///
    /// A remote rejection comes back as [`OnboardError::Submission`].
    pub fn completed(&self) -> Result<ResultView<'_>> {
        if let Some(view) = self.result_view() {
            return Ok(view);
        }
        match self.state.global_error() {
            Some(error) => Err(error.clone().into()),
            None => Err(OnboardError::NotCompleted),
        }
    }

    /// Renders the current view: the form while editing or submitting, the
    /// result view after success.
    pub fn render(&self) -> String {
        if let Some(view) = self.result_view() {
            return view.render();
        }

        let status = FormStatus {
            global_error: self.state.global_error().map(|e| e.reason.clone()),
            busy: self.state.is_loading(),
        };
        view::render_form_to(
            self.state.values(),
            self.state.errors(),
            &status,
            &self.schema,
            &FormOptions::new(self.config.action.as_str()),
        )
    }

    /// Hands control back to the host after success.
    pub fn proceed(&self, navigator: &dyn Navigator) -> Result<()> {
        if self.phase() != Phase::Succeeded {
            return Err(OnboardError::NotCompleted);
        }
        info!("Onboarding complete, continuing to the application");
        navigator.proceed();
        Ok(())
    }
}
