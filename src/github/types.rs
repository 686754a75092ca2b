//! Wire types for the GitHub repositories proxy.

use serde::{Deserialize, Serialize};

/// Default description when a repository has none upstream.
const NO_DESCRIPTION: &str = "No description available.";

/// Default language when GitHub reports none.
const NO_LANGUAGE: &str = "N/A";

/// One repository as returned by the GitHub REST API.
///
/// Every field is optional: GitHub sends `null` for repositories without a
/// description or detected language, and the projection substitutes defaults
/// instead of failing.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRepo {
    /// Repository name.
    #[serde(default)]
    pub name: Option<String>,
    /// Free-form description, often null.
    #[serde(default)]
    pub description: Option<String>,
    /// Web URL of the repository.
    #[serde(default)]
    pub html_url: Option<String>,
    /// Primary language, null for empty repositories.
    #[serde(default)]
    pub language: Option<String>,
    /// Last update timestamp, ISO 8601.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One entry of the projects list served to the frontend.
///
/// Covers both shapes of the endpoint: a projected repository
/// (`title, description, url, language, last_updated`) and the failure
/// sentinel (`title, status, description, url`). Optional fields are
/// skipped during serialization so each shape emits only its own keys.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectSummary {
    /// Repository name, or the sentinel title.
    pub title: String,
    /// "OFFLINE" on the sentinel entry only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    /// Repository description, or a diagnostic message.
    pub description: String,
    /// Repository URL; "#" on the sentinel entry.
    pub url: String,
    /// Primary language; absent on the sentinel entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Upstream `updated_at`, passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl ProjectSummary {
    /// The single fallback entry returned when the upstream call fails.
    pub fn error_sentinel() -> Self {
        Self {
            title: "Error Fetching Projects".to_string(),
            status: Some("OFFLINE"),
            description: "Could not retrieve projects from GitHub. Check backend logs for details."
                .to_string(),
            url: "#".to_string(),
            language: None,
            last_updated: None,
        }
    }
}

impl From<GithubRepo> for ProjectSummary {
    fn from(repo: GithubRepo) -> Self {
        Self {
            title: repo.name.unwrap_or_default(),
            status: None,
            description: repo
                .description
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            url: repo.html_url.unwrap_or_default(),
            language: Some(repo.language.unwrap_or_else(|| NO_LANGUAGE.to_string())),
            last_updated: Some(repo.updated_at.unwrap_or_default()),
        }
    }
}
