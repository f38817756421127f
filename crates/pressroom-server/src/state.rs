//! Shared state behind the router.

use std::sync::Arc;

use pressroom_core::store::DraftStore;
use pressroom_github::{GithubClient, GithubError};

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Injected draft persistence port.
    pub store: Arc<dyn DraftStore>,

    /// GitHub client, resolved once at startup. A missing configuration is
    /// kept and reported per request so the draft endpoints stay usable
    /// without credentials.
    pub github: Arc<Result<GithubClient, GithubError>>,
}

impl AppState {
    pub fn new(store: Arc<dyn DraftStore>, github: Result<GithubClient, GithubError>) -> Self {
        Self {
            store,
            github: Arc::new(github),
        }
    }
}
