//! GitHub publishing for Pressroom.
//!
//! This crate implements the remote half of the pipeline:
//!
//! - An authenticated client for the GitHub REST and Git data APIs
//! - The atomic multi-file publisher: N files land on a branch as exactly
//!   one commit (blobs → tree → commit → ref update), or the branch is
//!   left untouched
//!
//! # Quick Start
//!
//! ```no_run
//! use pressroom_core::content::CommitFile;
//! use pressroom_github::GithubClient;
//!
//! # async fn example() -> Result<(), pressroom_github::GithubError> {
//! let client = GithubClient::from_env()?;
//!
//! let files = vec![CommitFile {
//!     path: "content/hello-world.md".into(),
//!     content: "---\nHello World\n---\n\n\nHi".into(),
//! }];
//! let receipt = client.publish(&files, "Publish 1 post(s)").await?;
//! println!("branch now at {}", receipt.commit_sha);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `GITHUB_OWNER` | Account or organization owning the target repository (required) |
//! | `GITHUB_REPO` | Target repository name (required) |
//! | `GITHUB_TOKEN` | Access token sent as a bearer credential (required) |
//! | `GITHUB_BRANCH` | Branch to publish to (default: `main`) |
//! | `GITHUB_API_URL` | API base URL (default: `https://api.github.com`) |
//! | `GITHUB_TIMEOUT` | Request timeout in seconds (default: 30) |
//!
//! Requests are never retried: any non-success response aborts the whole
//! operation and is surfaced with its status code. Objects already created
//! in the store by an aborted publish are unreferenced and inert.

pub mod client;
pub mod config;
pub mod error;
pub mod publish;
pub mod types;

pub use client::GithubClient;
pub use config::GithubConfig;
pub use error::{GithubError, GithubResult, PublishStage};
pub use publish::PublishReceipt;
pub use types::RepoFile;
