use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;

use crate::core::projects::{ApiResponse, Credential, DevOpsClient, ListingError};

/// Azure DevOps REST client. It only performs the authenticated GET the core
/// layer asks for and leaves status handling to the service.
pub struct DevOpsApiClient {
    client: Client,
}

impl DevOpsApiClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("devops-project-lister/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self { client })
    }

    /// Flatten a header map, joining repeated names with ", ".
    fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
        let mut collected: BTreeMap<String, String> = BTreeMap::new();
        for (name, value) in headers {
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            collected
                .entry(name.as_str().to_string())
                .and_modify(|existing| {
                    existing.push_str(", ");
                    existing.push_str(&value);
                })
                .or_insert(value);
        }
        collected
    }
}

#[async_trait]
impl DevOpsClient for DevOpsApiClient {
    async fn get(&self, url: &str, credential: &Credential) -> Result<ApiResponse, ListingError> {
        let resp = self
            .client
            .get(url)
            .basic_auth("", Some(credential.secret()))
            .send()
            .await
            .map_err(|e| ListingError::Transport(e.to_string()))?;

        let status = resp.status().as_u16();
        let headers = Self::collect_headers(resp.headers());
        let body = resp
            .text()
            .await
            .map_err(|e| ListingError::Transport(e.to_string()))?;

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}
