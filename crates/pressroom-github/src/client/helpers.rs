//! Pure helpers: payload decoding (no HTTP, no status logic).

use base64::Engine as _;

use crate::error::{GithubError, GithubResult};

/// Decode a base64 content payload to UTF-8 text.
///
/// The contents API wraps its base64 at 60 columns, so whitespace is
/// stripped before decoding.
pub(crate) fn decode_base64_text(payload: &str) -> GithubResult<String> {
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| GithubError::InvalidResponse {
            message: format!("invalid base64 content: {e}"),
        })?;
    String::from_utf8(bytes).map_err(|e| GithubError::InvalidResponse {
        message: format!("content is not valid UTF-8: {e}"),
    })
}
