//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === GitHub Proxy ===
    /// GitHub account whose repositories are listed on /api/projects.
    #[serde(default = "default_github_user")]
    pub github_user: String,

    /// GitHub REST API base URL (overridable for tests).
    #[serde(default = "default_github_api_url")]
    pub github_api_url: String,

    // === Bundled Resources ===
    /// Path to the CV text file served on /api/cv.
    #[serde(default = "default_cv_path")]
    pub cv_path: String,

    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_github_user() -> String {
    "DomiTe".to_string()
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_cv_path() -> String {
    "resources/cv.txt".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.github_user.is_empty() {
            return Err("GITHUB_USER must not be empty".to_string());
        }

        if !self.github_api_url.starts_with("http") {
            return Err("GITHUB_API_URL must be an http(s) URL".to_string());
        }

        if self.cv_path.is_empty() {
            return Err("CV_PATH must not be empty".to_string());
        }

        Ok(())
    }

    /// URL of the repository listing endpoint for the configured user.
    pub fn repos_url(&self) -> String {
        format!(
            "{}/users/{}/repos",
            self.github_api_url.trim_end_matches('/'),
            self.github_user
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_user: default_github_user(),
            github_api_url: default_github_api_url(),
            cv_path: default_cv_path(),
            port: default_port(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        let config = Config::default();
        assert_eq!(config.github_api_url, "https://api.github.com");
        assert_eq!(config.cv_path, "resources/cv.txt");
        assert_eq!(config.port, 8080);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_github_user() {
        let config = Config {
            github_user: String::new(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_http_api_url() {
        let config = Config {
            github_api_url: "ftp://api.github.com".to_string(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn repos_url_handles_trailing_slash() {
        let config = Config {
            github_api_url: "http://127.0.0.1:9000/".to_string(),
            github_user: "octocat".to_string(),
            ..Config::default()
        };

        assert_eq!(config.repos_url(), "http://127.0.0.1:9000/users/octocat/repos");
    }
}
