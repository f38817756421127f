//! Route handlers for the content and draft APIs.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use pressroom_core::content::commit_files;
use pressroom_core::draft::{Draft, DraftInput};
use pressroom_github::GithubClient;

use crate::error::ApiError;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/content", get(get_content))
        .route("/api/content/publish", post(publish))
        .route(
            "/api/drafts",
            get(list_drafts).post(save_draft).delete(clear_drafts),
        )
        .route("/api/drafts/{id}", delete(delete_draft))
        .with_state(state)
}

fn github(state: &AppState) -> Result<&GithubClient, ApiError> {
    state
        .github
        .as_ref()
        .as_ref()
        .map_err(|e| ApiError::internal(e.to_string()))
}

#[derive(Debug, Deserialize)]
struct ContentQuery {
    #[serde(default)]
    path: Option<String>,
}

#[derive(Debug, Serialize)]
struct ContentResponse {
    name: String,
    path: String,
    content: String,
}

async fn get_content(
    State(state): State<AppState>,
    Query(query): Query<ContentQuery>,
) -> Result<Json<ContentResponse>, ApiError> {
    let path = match query.path.as_deref() {
        Some(p) if !p.is_empty() => p,
        _ => return Err(ApiError::bad_request("path parameter is required")),
    };

    let file = github(&state)?.get_file(path).await?;
    Ok(Json(ContentResponse {
        name: file.name,
        path: file.path,
        content: file.content,
    }))
}

#[derive(Debug, Deserialize)]
struct PublishRequest {
    #[serde(default)]
    drafts: Vec<Draft>,
}

#[derive(Debug, Serialize)]
struct PublishResponse {
    success: bool,
    message: String,
    files: Vec<String>,
}

async fn publish(
    State(state): State<AppState>,
    Json(request): Json<PublishRequest>,
) -> Result<Json<PublishResponse>, ApiError> {
    if request.drafts.is_empty() {
        return Err(ApiError::bad_request("no drafts to publish"));
    }

    // validation before any network call
    let files = commit_files(&request.drafts)?;
    let client = github(&state)?;

    let message = format!("Publish {} post(s)", request.drafts.len());
    let receipt = client.publish(&files, &message).await?;
    info!(commit = %receipt.commit_sha, files = receipt.paths.len(), "published drafts");

    Ok(Json(PublishResponse {
        success: true,
        message: format!(
            "Published {} file(s) in commit {}",
            receipt.paths.len(),
            receipt.commit_sha
        ),
        files: receipt.paths,
    }))
}

async fn list_drafts(State(state): State<AppState>) -> Result<Json<Vec<Draft>>, ApiError> {
    Ok(Json(state.store.list().await?))
}

async fn save_draft(
    State(state): State<AppState>,
    Json(input): Json<DraftInput>,
) -> Result<Json<Draft>, ApiError> {
    if input.title.trim().is_empty() && input.body.trim().is_empty() {
        return Err(ApiError::bad_request("draft needs a title or a body"));
    }
    Ok(Json(state.store.save(input).await?))
}

async fn delete_draft(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn clear_drafts(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.store.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}
