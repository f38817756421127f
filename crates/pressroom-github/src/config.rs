//! GitHub credentials and endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::error::{GithubError, GithubResult};

/// Environment variable names, also used in missing-config reports.
pub const ENV_OWNER: &str = "GITHUB_OWNER";
pub const ENV_REPO: &str = "GITHUB_REPO";
pub const ENV_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_BRANCH: &str = "GITHUB_BRANCH";
pub const ENV_API_URL: &str = "GITHUB_API_URL";
pub const ENV_TIMEOUT: &str = "GITHUB_TIMEOUT";

/// Configuration for one target repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// Account or organization owning the repository.
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Access token, sent as a bearer credential.
    pub token: String,

    /// Branch to publish to.
    #[serde(default = "default_branch")]
    pub branch: String,

    /// API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl GithubConfig {
    /// Create a config from explicit credentials, defaults elsewhere.
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            token: token.into(),
            branch: default_branch(),
            api_url: default_api_url(),
            timeout_secs: default_timeout(),
        }
    }

    /// Assemble a config from optional credential values, reporting every
    /// absent one by its environment variable name.
    ///
    /// Kept separate from [`GithubConfig::from_env`] so the missing-variable
    /// logic is testable without touching the process environment.
    pub fn resolve(
        owner: Option<String>,
        repo: Option<String>,
        token: Option<String>,
    ) -> GithubResult<Self> {
        fn present(value: &Option<String>) -> bool {
            value.as_deref().is_some_and(|s| !s.is_empty())
        }

        let mut missing = Vec::new();
        if !present(&owner) {
            missing.push(ENV_OWNER.to_string());
        }
        if !present(&repo) {
            missing.push(ENV_REPO.to_string());
        }
        if !present(&token) {
            missing.push(ENV_TOKEN.to_string());
        }
        if !missing.is_empty() {
            return Err(GithubError::Config { missing });
        }

        Ok(Self::new(
            owner.unwrap_or_default(),
            repo.unwrap_or_default(),
            token.unwrap_or_default(),
        ))
    }

    /// Read configuration from the environment.
    pub fn from_env() -> GithubResult<Self> {
        let mut config = Self::resolve(
            std::env::var(ENV_OWNER).ok(),
            std::env::var(ENV_REPO).ok(),
            std::env::var(ENV_TOKEN).ok(),
        )?;
        if let Ok(branch) = std::env::var(ENV_BRANCH) {
            if !branch.is_empty() {
                config.branch = branch;
            }
        }
        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.is_empty() {
                config.api_url = url;
            }
        }
        if let Some(timeout) = std::env::var(ENV_TIMEOUT).ok().and_then(|v| v.parse().ok()) {
            config.timeout_secs = timeout;
        }
        Ok(config)
    }

    /// Set the branch.
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    /// Set the API base URL (mainly for tests against a local server).
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}
