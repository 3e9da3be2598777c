//! # onboard
//!
//! Onboarding flow that creates an organization, its first project and an
//! API client in a single submit.
//!
//! This crate provides:
//! - `FormValues` and the `Mode` selector (`website` or `other`)
//! - `FieldSchema`, one composite validator including the conditional CORS rule
//! - `FormState`, an explicit state machine (editing, submitting, succeeded)
//! - `SubmissionController` and the `ClientCreator` seam to the remote side
//! - `ResultView` for the created client's credentials and next steps
//! - `InMemoryCreator`, an in-process backend for tests and the CLI
//!
//! ## Quick Start
//!
//! ```rust
//! use onboard::{
//!     Field, InMemoryCreator, OnboardingConfig, OnboardingSession, Phase, SubmitAttempt,
//! };
//!
//! # tokio_test::block_on(async {
//! let mut session = OnboardingSession::new(InMemoryCreator::new(), OnboardingConfig::default());
//! session.edit(Field::Organization, "Acme").unwrap();
//! session.edit(Field::Project, "Web").unwrap();
//! session.edit(Field::Cors, "https://acme.com").unwrap();
//!
//! let attempt = session.submit().await.unwrap();
//! assert!(matches!(attempt, SubmitAttempt::Accepted(_)));
//! assert_eq!(session.phase(), Phase::Succeeded);
//! # });
//! ```
//!
//! ## Conditional validation
//!
//! The CORS origin is only required for websites. In `other` mode it is
//! never checked and never sent, whatever the field holds.
//!
//! ```rust
//! use onboard::{CreateRequest, FieldSchema, FormValues, Mode};
//!
//! let values = FormValues::new("Acme", "Web").with_mode(Mode::Other);
//! assert!(FieldSchema::default().validate(&values).is_empty());
//! assert_eq!(CreateRequest::from_values(&values).cors, None);
//! ```
//!
//! ## Driving the state machine by hand
//!
//! Hosts with their own event loop can split a submit into
//! [`FormState::begin_submit`] and [`FormState::resolve`]. While a request
//! is in flight further submits return [`SubmitAttempt::InFlight`] and
//! edits fail with [`OnboardError::Locked`].

mod config;
mod controller;
mod error;
mod memory;
mod result_view;
mod schema;
mod session;
mod state;
mod values;
pub mod view;

pub use config::{OnboardingConfig, DEFAULT_ACTION, DEFAULT_DOCS_URL};
pub use controller::{
    BoxFuture, ClientCreator, CreateRequest, CreatedClient, FnCreator, SubmissionController,
};
pub use error::{OnboardError, Result, SubmissionError};
pub use memory::{InMemoryCreator, NAME_TAKEN};
pub use result_view::{Navigator, NextStep, ResultView};
pub use schema::{FieldSchema, CORS_REQUIRED_MESSAGE, DEFAULT_MIN_NAME_LENGTH};
pub use session::OnboardingSession;
pub use state::{FormState, Phase, SubmissionOutcome, SubmitAttempt};
pub use values::{Field, FormValues, Mode};
