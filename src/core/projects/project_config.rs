use super::project_service::ConfigSource;

pub const PAT_KEY: &str = "AZURE_DEVOPS_PAT";
pub const ORG_KEY: &str = "AZURE_DEVOPS_ORG";
pub const API_VERSIONS_KEY: &str = "AZURE_DEVOPS_API_VERSIONS";
pub const BASE_URL_KEY: &str = "AZURE_DEVOPS_BASE_URL";

pub const DEFAULT_ORGANIZATION: &str = "aalcloud";
pub const DEFAULT_API_VERSIONS: &[&str] = &["7.0"];
pub const DEFAULT_BASE_URL: &str = "https://dev.azure.com";

/// Non-secret settings for a listing run. Every field has a default so an
/// empty source still produces a usable config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListerConfig {
    pub organization: String,
    /// Tried in order until one succeeds. Never empty.
    pub api_versions: Vec<String>,
    pub base_url: String,
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self {
            organization: DEFAULT_ORGANIZATION.to_string(),
            api_versions: DEFAULT_API_VERSIONS.iter().map(|v| v.to_string()).collect(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ListerConfig {
    pub fn from_source(source: &dyn ConfigSource) -> Self {
        let defaults = Self::default();

        let organization = non_blank(source.get(ORG_KEY)).unwrap_or(defaults.organization);

        let api_versions = source
            .get(API_VERSIONS_KEY)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|versions| !versions.is_empty())
            .unwrap_or(defaults.api_versions);

        let base_url = non_blank(source.get(BASE_URL_KEY))
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);

        Self {
            organization,
            api_versions,
            base_url,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_source_is_empty() {
        let config = ListerConfig::from_source(&source(&[]));
        assert_eq!(config, ListerConfig::default());
        assert_eq!(config.api_versions, vec!["7.0".to_string()]);
    }

    #[test]
    fn test_overrides() {
        let config = ListerConfig::from_source(&source(&[
            (ORG_KEY, "contoso"),
            (API_VERSIONS_KEY, " 7.1-preview.4, ,7.0 "),
            (BASE_URL_KEY, "http://localhost:8080/"),
        ]));

        assert_eq!(config.organization, "contoso");
        assert_eq!(config.api_versions, vec!["7.1-preview.4", "7.0"]);
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_blank_versions_fall_back() {
        let config = ListerConfig::from_source(&source(&[(API_VERSIONS_KEY, " , ")]));
        assert_eq!(config.api_versions, vec!["7.0".to_string()]);
    }
}
