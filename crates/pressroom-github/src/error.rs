//! Error types for the GitHub client and publisher.

use thiserror::Error;

/// The step of the publish sequence that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStage {
    ResolveRef,
    LoadCommit,
    CreateBlob,
    CreateTree,
    CreateCommit,
    UpdateRef,
}

impl std::fmt::Display for PublishStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ResolveRef => "resolving branch ref",
            Self::LoadCommit => "loading head commit",
            Self::CreateBlob => "creating blobs",
            Self::CreateTree => "creating tree",
            Self::CreateCommit => "creating commit",
            Self::UpdateRef => "updating branch ref",
        };
        f.write_str(name)
    }
}

/// GitHub client errors.
#[derive(Debug, Error)]
pub enum GithubError {
    /// Required configuration is missing.
    #[error("GitHub configuration incomplete, missing environment variables: {}", missing.join(", "))]
    Config { missing: Vec<String> },

    /// Non-success status from the GitHub API.
    #[error("GitHub API error: {status} {message}")]
    Api { status: u16, message: String },

    /// The path resolved to a directory listing, not a file.
    #[error("path {path} is a directory, not a file")]
    NotAFile { path: String },

    /// A file fetch failed; carries the path with the underlying cause.
    #[error("failed to fetch file {path}: {source}")]
    Fetch {
        path: String,
        #[source]
        source: Box<GithubError>,
    },

    /// One stage of the publish sequence failed; no later stage ran.
    #[error("publish failed while {stage}: {source}")]
    Publish {
        stage: PublishStage,
        #[source]
        source: Box<GithubError>,
    },

    /// The branch head moved between ref resolution and ref update.
    #[error("branch {branch} changed during publish; commit not applied")]
    RefConflict { branch: String },

    /// Transport-level failure.
    #[error("network error: {message}")]
    Network { message: String },

    /// The API answered with a body the client could not parse.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },
}

impl From<reqwest::Error> for GithubError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

/// Result type for GitHub operations.
pub type GithubResult<T> = Result<T, GithubError>;
