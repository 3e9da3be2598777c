//! In-process creation backend.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Mutex;
use tracing::debug;

use crate::controller::{BoxFuture, ClientCreator, CreateRequest, CreatedClient};
use crate::error::SubmissionError;

/// Failure reason for an organization name that is already registered.
pub const NAME_TAKEN: &str = "name_taken";

/// Creates clients in memory.
///
/// Organization names are unique ignoring case. Clients without a CORS
/// origin receive a secret.
#[derive(Debug, Default)]
pub struct InMemoryCreator {
    organizations: Mutex<HashSet<String>>,
    requests: Mutex<Vec<CreateRequest>>,
    calls: AtomicUsize,
    failure: Option<String>,
}

impl InMemoryCreator {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend with organization names already taken.
    pub fn with_taken<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            organizations: Mutex::new(
                names
                    .into_iter()
                    .map(|n| n.as_ref().to_lowercase())
                    .collect(),
            ),
            ..Self::default()
        }
    }

    /// Creates a backend that rejects every call with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Returns how many creation calls were made.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Returns every payload received, in order.
    pub async fn requests(&self) -> Vec<CreateRequest> {
        self.requests.lock().await.clone()
    }

    /// Returns whether an organization name is registered.
    pub async fn is_taken(&self, organization: &str) -> bool {
        self.organizations
            .lock()
            .await
            .contains(&organization.to_lowercase())
    }
}

impl ClientCreator for InMemoryCreator {
    fn create(
        &self,
        request: CreateRequest,
    ) -> BoxFuture<'_, Result<CreatedClient, SubmissionError>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().await.push(request.clone());

            if let Some(reason) = &self.failure {
                return Err(SubmissionError::new(reason.clone()));
            }

            if !self
                .organizations
                .lock()
                .await
                .insert(request.organization.to_lowercase())
            {
                return Err(SubmissionError::new(NAME_TAKEN));
            }

            let client = CreatedClient {
                id: generate_client_id(),
                secret: request.cors.is_none().then(generate_secret),
                cors: request.cors,
            };
            debug!("Registered organization {}", request.organization);
            Ok(client)
        })
    }
}

fn random_hex(len: usize) -> String {
    use rand::RngExt;
    let mut rng = rand::rng();
    let mut bytes = vec![0u8; len];
    rng.fill(bytes.as_mut_slice());
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Generates a client id formatted as a UUID.
fn generate_client_id() -> String {
    let hex = random_hex(16);
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

fn generate_secret() -> String {
    format!("sec_{}", random_hex(32))
}
