// Domain models for the project listing workflow.
// Nothing here knows about reqwest or the console; the infra layer maps HTTP
// responses into `ApiResponse` and the console layer renders the report.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use super::project_service::ListingError;

// ============================================================================
// REQUEST SIDE
// ============================================================================

/// Personal access token used as the basic-auth password.
///
/// `Debug` is redacted so the secret never lands in logs or test output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// One organization + API version pair to try.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub organization: String,
    pub api_version: String,
}

impl Endpoint {
    pub fn new(organization: &str, api_version: &str) -> Self {
        Self {
            organization: organization.to_string(),
            api_version: api_version.to_string(),
        }
    }

    /// Project listing URL for this endpoint under `base_url`.
    pub fn projects_url(&self, base_url: &str) -> String {
        format!(
            "{}/{}/_apis/projects?api-version={}",
            base_url.trim_end_matches('/'),
            self.organization,
            self.api_version
        )
    }
}

// ============================================================================
// RESPONSE SIDE
// ============================================================================

/// Raw response handed back by a `DevOpsClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ApiResponse {
    /// True for 2xx statuses.
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as a project page.
    pub fn projects(&self) -> Result<Vec<ProjectRecord>, ListingError> {
        serde_json::from_str::<ProjectPage>(&self.body)
            .map(|page| page.value)
            .map_err(|e| ListingError::MalformedBody {
                status: self.status,
                reason: e.to_string(),
            })
    }
}

/// Status and headers of a response, kept on the attempt for printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMeta {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
}

impl From<&ApiResponse> for ResponseMeta {
    fn from(response: &ApiResponse) -> Self {
        Self {
            status: response.status,
            headers: response.headers.clone(),
        }
    }
}

/// A single project as returned in the `value` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub id: String,
}

#[derive(Debug, Deserialize)]
struct ProjectPage {
    // Absent `value` means no projects, not a malformed body.
    #[serde(default)]
    value: Vec<ProjectRecord>,
}

// ============================================================================
// REPORT
// ============================================================================

/// What happened for one API version candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    pub endpoint: Endpoint,
    pub url: String,
    /// `None` when the request never produced a response.
    pub response: Option<ResponseMeta>,
    pub result: Result<Vec<ProjectRecord>, ListingError>,
}

impl Attempt {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Every attempt made by one `ProjectLister::run`, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingReport {
    pub attempts: Vec<Attempt>,
}

impl ListingReport {
    /// Projects from the successful attempt, or `Exhausted` naming every version tried.
    pub fn outcome(&self) -> Result<&[ProjectRecord], ListingError> {
        self.attempts
            .iter()
            .find_map(|attempt| attempt.result.as_ref().ok())
            .map(Vec::as_slice)
            .ok_or_else(|| ListingError::Exhausted {
                versions: self
                    .attempts
                    .iter()
                    .map(|a| a.endpoint.api_version.clone())
                    .collect(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            headers: BTreeMap::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_projects_url() {
        let endpoint = Endpoint::new("aalcloud", "7.0");
        assert_eq!(
            endpoint.projects_url("https://dev.azure.com/"),
            "https://dev.azure.com/aalcloud/_apis/projects?api-version=7.0"
        );
    }

    #[test]
    fn test_ok_range() {
        assert!(response(200, "").is_ok());
        assert!(response(204, "").is_ok());
        assert!(!response(199, "").is_ok());
        assert!(!response(302, "").is_ok());
        assert!(!response(401, "").is_ok());
    }

    #[test]
    fn test_missing_value_is_empty() {
        let projects = response(200, r#"{"count":0}"#).projects().unwrap();
        assert!(projects.is_empty());
    }

    #[test]
    fn test_record_without_id_is_malformed() {
        let err = response(200, r#"{"value":[{"name":"Proj1"}]}"#)
            .projects()
            .unwrap_err();
        assert!(matches!(err, ListingError::MalformedBody { status: 200, .. }));
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::new("super-secret");
        assert_eq!(format!("{:?}", credential), "Credential(***)");
        assert_eq!(credential.secret(), "super-secret");
    }
}
