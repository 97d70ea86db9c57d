// Project listing service - core business logic.
//
// Walks the API version candidates in order, asks the client for the project
// page of each one, and records what happened. The first ok response wins.
//
// NO HTTP or console dependencies here.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use super::project_config::{ListerConfig, PAT_KEY};
use super::project_models::{ApiResponse, Attempt, Credential, Endpoint, ListingReport, ResponseMeta};

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("{key} environment variable not found")]
    MissingCredential { key: String },

    #[error("{0}")]
    Transport(String),

    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected project payload (status {status}): {reason}")]
    MalformedBody { status: u16, reason: String },

    #[error("Failed to list projects with API versions {}", .versions.join(", "))]
    Exhausted { versions: Vec<String> },
}

// ============================================================================
// PORTS
// ============================================================================

/// Key/value lookup for configuration. Production reads the environment;
/// tests hand in a map.
pub trait ConfigSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// The single HTTP call the service needs.
#[async_trait]
pub trait DevOpsClient: Send + Sync {
    /// GET `url` with basic auth (empty username, `credential` as password).
    ///
    /// Any response, including 4xx/5xx, is `Ok`. `Err` is reserved for
    /// `ListingError::Transport`.
    async fn get(&self, url: &str, credential: &Credential) -> Result<ApiResponse, ListingError>;
}

// ============================================================================
// SERVICE
// ============================================================================

pub struct ProjectLister<C: DevOpsClient, S: ConfigSource> {
    client: C,
    source: S,
}

impl<C, S> ProjectLister<C, S>
where
    C: DevOpsClient,
    S: ConfigSource,
{
    pub fn new(client: C, source: S) -> Self {
        Self { client, source }
    }

    /// Try each configured API version until one lists projects.
    ///
    /// Only a missing credential is returned as `Err`; per-attempt failures
    /// are recorded in the report and exhaustion is read off
    /// `ListingReport::outcome`.
    pub async fn run(&self) -> Result<ListingReport, ListingError> {
        let credential = self
            .source
            .get(PAT_KEY)
            .filter(|secret| !secret.is_empty())
            .map(Credential::new)
            .ok_or_else(|| ListingError::MissingCredential {
                key: PAT_KEY.to_string(),
            })?;

        let config = ListerConfig::from_source(&self.source);
        let mut report = ListingReport::default();

        for version in &config.api_versions {
            let endpoint = Endpoint::new(&config.organization, version);
            let attempt = self.attempt(&config, endpoint, &credential).await;
            let done = attempt.succeeded();
            tracing::debug!("Finished {} (ok: {})", attempt.url, done);
            report.attempts.push(attempt);

            if done {
                break;
            }
        }

        match report.outcome() {
            Ok(projects) => tracing::info!("Listed {} projects", projects.len()),
            Err(e) => tracing::warn!("{}", e),
        }

        Ok(report)
    }

    async fn attempt(
        &self,
        config: &ListerConfig,
        endpoint: Endpoint,
        credential: &Credential,
    ) -> Attempt {
        let url = endpoint.projects_url(&config.base_url);
        tracing::info!("Trying API version {}", endpoint.api_version);
        tracing::debug!("GET {}", url);

        let response = match self.client.get(&url, credential).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Request for API version {} failed: {}", endpoint.api_version, e);
                return Attempt {
                    endpoint,
                    url,
                    response: None,
                    result: Err(e),
                };
            }
        };

        let result = if response.is_ok() {
            response.projects()
        } else {
            Err(ListingError::Api {
                status: response.status,
                body: response.body.clone(),
            })
        };

        if let Err(e) = &result {
            tracing::warn!("API version {} rejected: {}", endpoint.api_version, e);
        }

        Attempt {
            endpoint,
            url,
            response: Some(ResponseMeta::from(&response)),
            result,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
