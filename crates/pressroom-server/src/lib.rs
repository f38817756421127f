//! HTTP API for Pressroom.
//!
//! Thin glue over the core crates: handlers parse requests, validate, and
//! forward to the draft store and the GitHub publisher. All responses are
//! JSON; failures carry an `{"error": "..."}` payload.

pub mod error;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
