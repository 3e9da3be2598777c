//! Submission of validated values to the remote creation operation.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::SubmissionError;
use crate::state::SubmissionOutcome;
use crate::values::{FormValues, Mode};

/// A boxed future for async creation calls.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Client credentials returned by the creation operation.
///
/// Passed through to the result view exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedClient {
    /// Client identifier.
    pub id: String,
    /// Client secret, only issued to non-website clients.
    pub secret: Option<String>,
    /// CORS origin the client was registered with.
    #[serde(default)]
    pub cors: Option<String>,
}

/// Outbound payload of the creation operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRequest {
    /// Organization name.
    pub organization: String,
    /// Project name.
    pub project: String,
    /// CORS origin; always null outside website mode.
    pub cors: Option<String>,
}

impl CreateRequest {
    /// Normalizes form values into a payload.
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            organization: values.organization.clone(),
            project: values.project.clone(),
            cors: match values.mode {
                Mode::Website => values.cors.clone(),
                Mode::Other => None,
            },
        }
    }
}

/// The remote operation that creates the organization, project and client.
pub trait ClientCreator: Send + Sync {
    /// Creates the resources described by `request`.
    fn create(&self, request: CreateRequest)
        -> BoxFuture<'_, Result<CreatedClient, SubmissionError>>;
}

impl<T: ClientCreator + ?Sized> ClientCreator for Arc<T> {
    fn create(
        &self,
        request: CreateRequest,
    ) -> BoxFuture<'_, Result<CreatedClient, SubmissionError>> {
        (**self).create(request)
    }
}

/// A creator backed by a closure.
pub struct FnCreator<F>
where
    F: Fn(CreateRequest) -> BoxFuture<'static, Result<CreatedClient, SubmissionError>>
        + Send
        + Sync,
{
    handler: F,
}

impl<F> FnCreator<F>
where
    F: Fn(CreateRequest) -> BoxFuture<'static, Result<CreatedClient, SubmissionError>>
        + Send
        + Sync,
{
    /// Wraps `handler`.
    pub fn new(handler: F) -> Self {
        Self { handler }
    }
}

impl<F> ClientCreator for FnCreator<F>
where
    F: Fn(CreateRequest) -> BoxFuture<'static, Result<CreatedClient, SubmissionError>>
        + Send
        + Sync,
{
    fn create(
        &self,
        request: CreateRequest,
    ) -> BoxFuture<'_, Result<CreatedClient, SubmissionError>> {
        (self.handler)(request)
    }
}

/// Sends validated values to a [`ClientCreator`].
///
/// Callers validate first; this type does not re-validate and never retries.
#[derive(Debug, Clone)]
pub struct SubmissionController<C> {
    creator: C,
}

impl<C: ClientCreator> SubmissionController<C> {
    /// Creates a controller over `creator`.
    pub fn new(creator: C) -> Self {
        Self { creator }
    }

    /// Returns the underlying creator.
    pub fn creator(&self) -> &C {
        &self.creator
    }

    /// Normalizes `values` and makes exactly one creation call.
    pub async fn submit(&self, values: &FormValues) -> SubmissionOutcome {
        self.send(CreateRequest::from_values(values)).await
    }

    /// Makes exactly one creation call with an already normalized payload.
    pub async fn send(&self, request: CreateRequest) -> SubmissionOutcome {
        let organization = request.organization.clone();
        match self.creator.create(request).await {
            Ok(client) => {
                info!("Created client {} for organization {}", client.id, organization);
                SubmissionOutcome::Succeeded(client)
            }
            Err(error) => {
                warn!("Creating organization {} failed: {}", organization, error);
                SubmissionOutcome::Failed(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct Recording {
        seen: Mutex<Vec<CreateRequest>>,
    }

    impl ClientCreator for Recording {
        fn create(
            &self,
            request: CreateRequest,
        ) -> BoxFuture<'_, Result<CreatedClient, SubmissionError>> {
            self.seen.lock().unwrap().push(request.clone());
            Box::pin(async move {
                Ok(CreatedClient {
                    id: "client-1".to_string(),
                    secret: None,
                    cors: request.cors,
                })
            })
        }
    }

    #[test]
    fn test_website_keeps_cors() {
        let values = FormValues::new("Acme", "Web").with_cors("https://acme.com");
        let request = CreateRequest::from_values(&values);
        assert_eq!(request.cors.as_deref(), Some("https://acme.com"));
    }

    #[test]
    fn test_other_nulls_cors() {
        let values = FormValues::new("Acme", "Web")
            .with_cors("https://left-over.example")
            .with_mode(Mode::Other);
        let request = CreateRequest::from_values(&values);

        assert_eq!(request.organization, "Acme");
        assert_eq!(request.project, "Web");
        assert_eq!(request.cors, None);
    }

    #[test]
    fn test_request_serializes_null_cors() {
        let values = FormValues::new("Acme", "Web").with_mode(Mode::Other);
        let json = serde_json::to_value(CreateRequest::from_values(&values)).unwrap();
        assert!(json["cors"].is_null());
    }

    #[tokio::test]
    async fn test_submit_calls_creator_once() {
        let controller = SubmissionController::new(Recording {
            seen: Mutex::new(Vec::new()),
        });

        let values = FormValues::new("Acme", "Web").with_mode(Mode::Other);
        let outcome = controller.submit(&values).await;

        assert!(matches!(outcome, SubmissionOutcome::Succeeded(ref c) if c.id == "client-1"));
        let seen = controller.creator().seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].cors, None);
    }

    #[tokio::test]
    async fn test_submit_maps_failure() {
        let controller = SubmissionController::new(FnCreator::new(|_| {
            Box::pin(async { Err(SubmissionError::new("name_taken")) }) as BoxFuture<'static, _>
        }));

        let values = FormValues::new("Acme", "Web").with_cors("https://acme.com");
        let outcome = controller.submit(&values).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Failed(SubmissionError::new("name_taken"))
        );
    }
}
