//! GitHub client: repository contents plus the Git data API.
//!
//! Public API: no status code knowledge. All HTTP/status mapping in http.rs.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Method;
use tracing::debug;

use crate::config::GithubConfig;
use crate::error::{GithubError, GithubResult};
use crate::types::{
    ContentsResponse, GitCommit, GitRef, NewBlob, NewCommit, NewTree, ObjectSha, RefUpdate,
    RepoFile, TreeEntry,
};

mod helpers;
mod http;

use helpers::decode_base64_text;
use http::HttpBackend;

const USER_AGENT_VALUE: &str = concat!("pressroom/", env!("CARGO_PKG_VERSION"));

/// Client for one configured repository.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: HttpBackend,
}

impl GithubClient {
    pub fn new(config: GithubConfig) -> GithubResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|e| GithubError::Network {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        let config = GithubConfig {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            ..config
        };

        Ok(Self {
            http: HttpBackend { client, config },
        })
    }

    pub fn from_env() -> GithubResult<Self> {
        Self::new(GithubConfig::from_env()?)
    }

    /// The configured target branch.
    pub fn branch(&self) -> &str {
        &self.http.config.branch
    }

    fn repo_url(&self, tail: &str) -> String {
        let c = &self.http.config;
        format!("{}/repos/{}/{}/{}", c.api_url, c.owner, c.repo, tail)
    }

    /// Resolve `heads/<branch>` to the commit it points at.
    pub async fn get_ref(&self, branch: &str) -> GithubResult<GitRef> {
        let url = self.repo_url(&format!("git/ref/heads/{branch}"));
        self.http.get_json(&url).await
    }

    /// Fetch one commit object (used for its tree sha).
    pub async fn get_commit(&self, sha: &str) -> GithubResult<GitCommit> {
        let url = self.repo_url(&format!("git/commits/{sha}"));
        self.http.get_json(&url).await
    }

    /// Create a blob from text content; returns its sha.
    pub async fn create_blob(&self, content: &str) -> GithubResult<String> {
        let url = self.repo_url("git/blobs");
        let blob: ObjectSha = self
            .http
            .send_json(Method::POST, &url, &NewBlob::from_text(content))
            .await?;
        Ok(blob.sha)
    }

    /// Create a tree layering `entries` onto `base_tree`; returns its sha.
    pub async fn create_tree(
        &self,
        base_tree: &str,
        entries: Vec<TreeEntry>,
    ) -> GithubResult<String> {
        let url = self.repo_url("git/trees");
        let body = NewTree {
            base_tree: base_tree.to_string(),
            tree: entries,
        };
        let tree: ObjectSha = self.http.send_json(Method::POST, &url, &body).await?;
        Ok(tree.sha)
    }

    /// Create a commit with a single parent; returns its sha.
    pub async fn create_commit(
        &self,
        message: &str,
        tree: &str,
        parent: &str,
    ) -> GithubResult<String> {
        let url = self.repo_url("git/commits");
        let body = NewCommit {
            message: message.to_string(),
            tree: tree.to_string(),
            parents: vec![parent.to_string()],
        };
        let commit: ObjectSha = self.http.send_json(Method::POST, &url, &body).await?;
        Ok(commit.sha)
    }

    /// Advance `heads/<branch>` to `sha`, fast-forward only.
    pub async fn update_ref(&self, branch: &str, sha: &str) -> GithubResult<()> {
        let url = self.repo_url(&format!("git/refs/heads/{branch}"));
        let body = RefUpdate {
            sha: sha.to_string(),
            force: false,
        };
        self.http
            .send_raw(Method::PATCH, &url, Some(&body))
            .await
            .map(|_| ())
    }

    /// Fetch one file's decoded content by repository-relative path.
    ///
    /// A path that resolves to a directory fails with
    /// [`GithubError::NotAFile`]; any other failure is wrapped with the
    /// path as [`GithubError::Fetch`].
    pub async fn get_file(&self, path: &str) -> GithubResult<RepoFile> {
        match self.fetch_file(path).await {
            Ok(file) => Ok(file),
            Err(e @ GithubError::NotAFile { .. }) => Err(e),
            Err(other) => Err(GithubError::Fetch {
                path: path.to_string(),
                source: Box::new(other),
            }),
        }
    }

    async fn fetch_file(&self, path: &str) -> GithubResult<RepoFile> {
        let url = self.repo_url(&format!("contents/{path}"));
        debug!(path = %path, "fetching repository file");

        match self.http.get_json(&url).await? {
            ContentsResponse::Directory(_) => Err(GithubError::NotAFile {
                path: path.to_string(),
            }),
            ContentsResponse::File(file) => Ok(RepoFile {
                content: decode_base64_text(&file.content)?,
                name: file.name,
                path: file.path,
                sha: file.sha,
            }),
        }
    }
}
