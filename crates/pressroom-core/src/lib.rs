//! Core domain model for Pressroom.
//!
//! This crate holds everything the publishing pipeline consumes but that
//! does not talk to the network:
//!
//! - [`Draft`]: a locally held, unpublished post record
//! - [`DraftStore`]: the persistence port for drafts, with a JSON-file
//!   implementation ([`JsonDraftStore`])
//! - [`content`]: the pure mapping from drafts to committable Markdown
//!   files (slug derivation, frontmatter, collision checks)

pub mod content;
pub mod draft;
pub mod error;
pub mod store;

pub use content::{commit_files, markdown_document, slug, CommitFile};
pub use draft::{Draft, DraftInput};
pub use error::{ContentError, StoreError};
pub use store::{DraftStore, JsonDraftStore};
