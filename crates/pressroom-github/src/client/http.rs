//! Transport layer: header attachment and status mapping.
//!
//! This is the ONLY place status codes are interpreted. client/mod.rs
//! never sees a status code.

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::GithubConfig;
use crate::error::{GithubError, GithubResult};

const ACCEPT_VALUE: &str = "application/vnd.github.v3+json";
const API_VERSION_HEADER: &str = "x-github-api-version";
const API_VERSION: &str = "2022-11-28";

/// HTTP backend holding the reqwest client and the resolved config.
#[derive(Debug, Clone)]
pub(crate) struct HttpBackend {
    pub(crate) client: reqwest::Client,
    pub(crate) config: GithubConfig,
}

impl HttpBackend {
    /// Issue one GET request and decode the JSON response.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> GithubResult<T> {
        let response = self.send_raw::<()>(Method::GET, url, None).await?;
        decode_json(response).await
    }

    /// Issue one request with a JSON body and decode the JSON response.
    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        url: &str,
        body: &B,
    ) -> GithubResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send_raw(method, url, Some(body)).await?;
        decode_json(response).await
    }

    /// Issue one request; any non-success status becomes an error carrying
    /// the numeric status and its text. No retry, no backoff: every failure
    /// aborts the caller's operation.
    pub(crate) async fn send_raw<B>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> GithubResult<Response>
    where
        B: Serialize + ?Sized,
    {
        debug!(method = %method, url = %url, "github api request");

        let mut request = self
            .client
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.token))
            .header(ACCEPT, ACCEPT_VALUE)
            .header(API_VERSION_HEADER, API_VERSION);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = status_message(status, response).await;
        Err(GithubError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> GithubResult<T> {
    response
        .json()
        .await
        .map_err(|e| GithubError::InvalidResponse {
            message: format!("failed to decode response body: {e}"),
        })
}

/// Status text plus the first part of the body, when there is one.
async fn status_message(status: StatusCode, response: Response) -> String {
    let reason = status.canonical_reason().unwrap_or("unknown status");
    match response.text().await {
        Ok(body) if !body.is_empty() => {
            let excerpt: String = body.chars().take(200).collect();
            format!("{reason}: {excerpt}")
        }
        _ => reason.to_string(),
    }
}
