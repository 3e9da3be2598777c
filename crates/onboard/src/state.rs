//! Form state and its transitions.
//!
//! ```text
//! Editing --submit(invalid)--> Editing (field errors)
//! Editing --submit(valid)----> Submitting
//! Submitting --success-------> Succeeded (terminal)
//! Submitting --failure-------> Editing (global error)
//! ```
//!
//! The in-flight request is represented by `SubmissionOutcome::Pending`;
//! while it is set, edits, mode changes and further submits are refused.

use onboard_forms::ValidationErrors;
use tracing::{debug, info, warn};

use crate::controller::{CreateRequest, CreatedClient};
use crate::error::{OnboardError, Result, SubmissionError};
use crate::schema::FieldSchema;
use crate::values::{Field, FormValues, Mode};

/// Result of the most recent accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The creation call is in flight.
    Pending,
    /// The creation call failed; the reason is shown as a global notice.
    Failed(SubmissionError),
    /// The creation call succeeded.
    Succeeded(CreatedClient),
}

/// Coarse state of a session, derived from the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Inputs are editable.
    Editing,
    /// A creation call is in flight; inputs are locked.
    Submitting,
    /// Resources were created; the form is frozen.
    Succeeded,
}

/// What a submit event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Values passed validation; send this payload exactly once.
    Accepted(CreateRequest),
    /// Values failed validation; nothing is sent.
    Rejected(ValidationErrors),
    /// A call is already in flight; the event is ignored.
    InFlight,
    /// The session already succeeded; the event is ignored.
    Completed,
}

/// Values, last validation result and submission outcome of one session.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: FormValues,
    errors: ValidationErrors,
    outcome: Option<SubmissionOutcome>,
}

impl FormState {
    /// Creates a state with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state with the given values.
    pub fn with_values(values: FormValues) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Returns the current values.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Returns the field errors of the last validation pass.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Returns the outcome of the last accepted submission.
    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        self.outcome.as_ref()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        match self.outcome {
            Some(SubmissionOutcome::Pending) => Phase::Submitting,
            Some(SubmissionOutcome::Succeeded(_)) => Phase::Succeeded,
            Some(SubmissionOutcome::Failed(_)) | None => Phase::Editing,
        }
    }

    /// Returns whether a creation call is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase() == Phase::Submitting
    }

    /// Returns the global error of the last failed submission.
    pub fn global_error(&self) -> Option<&SubmissionError> {
        match &self.outcome {
            Some(SubmissionOutcome::Failed(error)) => Some(error),
            _ => None,
        }
    }

    /// Returns the created client once the session succeeded.
    pub fn created_client(&self) -> Option<&CreatedClient> {
        match &self.outcome {
            Some(SubmissionOutcome::Succeeded(client)) => Some(client),
            _ => None,
        }
    }

    fn ensure_editable(&self) -> Result<()> {
        match self.phase() {
            Phase::Editing => Ok(()),
            Phase::Submitting => Err(OnboardError::Locked),
            Phase::Succeeded => Err(OnboardError::Completed),
        }
    }

    /// Replaces one field and clears that field's error.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        self.ensure_editable()?;
        self.values.set(field, value);
        self.errors.remove(field.as_str());
        debug!("Edited field {}", field);
        Ok(())
    }

    /// Switches the mode; values and errors are left as they are.
    pub fn select_mode(&mut self, mode: Mode) -> Result<()> {
        self.ensure_editable()?;
        self.values.mode = mode;
        debug!("Selected mode {}", mode);
        Ok(())
    }

    /// Handles a submit event.
    ///
    /// Validation runs on every attempt. On success the state moves to
    /// `Submitting` and the caller must send the returned payload and report
    /// back through [`FormState::resolve`].
    pub fn begin_submit(&mut self, schema: &FieldSchema) -> SubmitAttempt {
        match self.phase() {
            Phase::Submitting => {
                warn!("Ignoring submit while a request is in flight");
                return SubmitAttempt::InFlight;
            }
            Phase::Succeeded => {
                warn!("Ignoring submit after onboarding completed");
                return SubmitAttempt::Completed;
            }
            Phase::Editing => {}
        }

        let errors = schema.validate(&self.values);
        if !errors.is_empty() {
            debug!("Submit rejected with {} field error(s)", errors.len());
            self.errors = errors.clone();
            return SubmitAttempt::Rejected(errors);
        }

        self.errors = ValidationErrors::new();
        self.outcome = Some(SubmissionOutcome::Pending);
        info!(
            "Submitting organization {} with project {} ({})",
            self.values.organization, self.values.project, self.values.mode
        );
        SubmitAttempt::Accepted(CreateRequest::from_values(&self.values))
    }

    /// Records the result of the in-flight creation call.
    pub fn resolve(
        &mut self,
        result: std::result::Result<CreatedClient, SubmissionError>,
    ) -> Result<()> {
        if !self.is_loading() {
            return Err(OnboardError::NotSubmitting);
        }

        self.outcome = Some(match result {
            Ok(client) => SubmissionOutcome::Succeeded(client),
            Err(error) => SubmissionOutcome::Failed(error),
        });
        Ok(())
    }

    /// Records a controller outcome; `Pending` is not a resolution.
    pub fn apply(&mut self, outcome: SubmissionOutcome) -> Result<()> {
        match outcome {
            SubmissionOutcome::Pending => Err(OnboardError::NotSubmitting),
            SubmissionOutcome::Failed(error) => self.resolve(Err(error)),
            SubmissionOutcome::Succeeded(client) => self.resolve(Ok(client)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onboard_forms::ErrorKind;

    fn valid_values() -> FormValues {
        FormValues::new("Acme", "Web").with_cors("https://acme.com")
    }

    fn client() -> CreatedClient {
        CreatedClient {
            id: "client-1".to_string(),
            secret: None,
            cors: Some("https://acme.com".to_string()),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = FormState::new();
        assert_eq!(state.phase(), Phase::Editing);
        assert!(state.outcome().is_none());
        assert!(state.errors().is_empty());
        assert_eq!(state.values().mode, Mode::Website);
    }

    #[test]
    fn test_invalid_submit_stays_editing() {
        let mut state = FormState::with_values(FormValues::new("Ac", "Web").with_cors("x"));
        let attempt = state.begin_submit(&FieldSchema::default());

        let SubmitAttempt::Rejected(errors) = attempt else {
            panic!("expected rejection");
        };
        assert_eq!(errors.kind("organization"), Some(ErrorKind::TooShort { min: 3 }));
        assert_eq!(state.phase(), Phase::Editing);
        assert!(state.outcome().is_none());
        assert_eq!(state.errors(), &errors);
    }

    #[test]
    fn test_invalid_submit_keeps_previous_failure() {
        let mut state = FormState::with_values(valid_values());
        assert!(matches!(state.begin_submit(&FieldSchema::default()), SubmitAttempt::Accepted(_)));
        state.resolve(Err(SubmissionError::new("name_taken"))).unwrap();

        state.edit(Field::Organization, "Ac").unwrap();
        assert!(matches!(state.begin_submit(&FieldSchema::default()), SubmitAttempt::Rejected(_)));
        assert_eq!(state.global_error(), Some(&SubmissionError::new("name_taken")));
    }

    #[test]
    fn test_edit_clears_only_that_field_error() {
        let mut state = FormState::with_values(FormValues::new("Ac", "W"));
        state.begin_submit(&FieldSchema::default());
        assert_eq!(state.errors().len(), 3);

        state.edit(Field::Project, "Web").unwrap();
        assert!(state.errors().get("project").is_none());
        assert!(state.errors().get("organization").is_some());
        assert!(state.errors().get("cors").is_some());
        assert_eq!(state.values().organization, "Ac");
    }

    #[test]
    fn test_mode_switch_keeps_errors_and_values() {
        let mut state = FormState::with_values(FormValues::new("Acme", "Web"));
        state.begin_submit(&FieldSchema::default());
        assert!(state.errors().get("cors").is_some());

        state.select_mode(Mode::Other).unwrap();
        assert_eq!(state.values().mode, Mode::Other);
        assert!(state.errors().get("cors").is_some());
        assert_eq!(state.values().cors.as_deref(), Some(""));

        assert!(matches!(state.begin_submit(&FieldSchema::default()), SubmitAttempt::Accepted(_)));
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_single_flight() {
        let mut state = FormState::with_values(valid_values());
        let schema = FieldSchema::default();

        assert!(matches!(state.begin_submit(&schema), SubmitAttempt::Accepted(_)));
        assert!(state.is_loading());
        assert_eq!(state.begin_submit(&schema), SubmitAttempt::InFlight);
        assert_eq!(state.phase(), Phase::Submitting);
    }

    #[test]
    fn test_inputs_locked_while_submitting() {
        let mut state = FormState::with_values(valid_values());
        state.begin_submit(&FieldSchema::default());

        assert!(matches!(state.edit(Field::Project, "Api"), Err(OnboardError::Locked)));
        assert!(matches!(state.select_mode(Mode::Other), Err(OnboardError::Locked)));
        assert_eq!(state.values(), &valid_values());
    }

    #[test]
    fn test_failure_returns_to_editing() {
        let mut state = FormState::with_values(valid_values());
        state.begin_submit(&FieldSchema::default());
        state.resolve(Err(SubmissionError::new("name_taken"))).unwrap();

        assert_eq!(state.phase(), Phase::Editing);
        assert_eq!(state.global_error().map(ToString::to_string).as_deref(), Some("name_taken"));
        assert_eq!(state.values(), &valid_values());
        assert!(state.errors().is_empty());

        state.edit(Field::Organization, "Acme Inc").unwrap();
        assert!(matches!(state.begin_submit(&FieldSchema::default()), SubmitAttempt::Accepted(_)));
        assert!(state.global_error().is_none());
    }

    #[test]
    fn test_success_is_terminal() {
        let mut state = FormState::with_values(valid_values());
        state.begin_submit(&FieldSchema::default());
        state.apply(SubmissionOutcome::Succeeded(client())).unwrap();

        assert_eq!(state.phase(), Phase::Succeeded);
        assert_eq!(state.created_client(), Some(&client()));
        assert!(matches!(state.edit(Field::Project, "Api"), Err(OnboardError::Completed)));
        assert!(matches!(state.select_mode(Mode::Other), Err(OnboardError::Completed)));
        assert_eq!(state.begin_submit(&FieldSchema::default()), SubmitAttempt::Completed);
    }

    #[test]
    fn test_resolve_without_request() {
        let mut state = FormState::new();
        assert!(matches!(state.resolve(Ok(client())), Err(OnboardError::NotSubmitting)));
        assert!(matches!(
            state.apply(SubmissionOutcome::Pending),
            Err(OnboardError::NotSubmitting)
        ));
    }

    #[test]
    fn test_accepted_payload_is_normalized() {
        let mut state = FormState::with_values(valid_values().with_mode(Mode::Other));
        let SubmitAttempt::Accepted(request) = state.begin_submit(&FieldSchema::default()) else {
            panic!("expected acceptance");
        };
        assert_eq!(request.cors, None);
    }
}
