//! Wire types for the GitHub REST and Git data APIs.
//!
//! Every request body is a dedicated struct with explicit fields; the
//! client never sends free-form JSON values.

use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// A named ref, as returned by `GET .../git/ref/{ref}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GitRef {
    #[serde(rename = "ref")]
    pub name: String,
    pub object: RefObject,
}

/// The object a ref points at.
#[derive(Debug, Clone, Deserialize)]
pub struct RefObject {
    pub sha: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A commit node, as returned by `GET .../git/commits/{sha}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GitCommit {
    pub sha: String,
    pub tree: TreeRef,
}

/// Reference to a tree by sha.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeRef {
    pub sha: String,
}

/// Response carrying just the sha of a created object.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectSha {
    pub sha: String,
}

/// Request body for `POST .../git/blobs`.
#[derive(Debug, Clone, Serialize)]
pub struct NewBlob {
    /// Base64-encoded file content.
    pub content: String,
    pub encoding: &'static str,
}

impl NewBlob {
    /// Encode text content for transit.
    pub fn from_text(content: &str) -> Self {
        Self {
            content: base64::engine::general_purpose::STANDARD.encode(content),
            encoding: "base64",
        }
    }
}

/// One entry of a tree-creation request.
#[derive(Debug, Clone, Serialize)]
pub struct TreeEntry {
    pub path: String,
    pub mode: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub sha: String,
}

impl TreeEntry {
    /// A regular (non-executable) file entry pointing at a blob.
    pub fn file(path: impl Into<String>, sha: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mode: "100644",
            kind: "blob",
            sha: sha.into(),
        }
    }
}

/// Request body for `POST .../git/trees`: new entries layered onto a base
/// tree. The remote store merges the entries; the client never walks or
/// reconstructs the full tree.
#[derive(Debug, Clone, Serialize)]
pub struct NewTree {
    pub base_tree: String,
    pub tree: Vec<TreeEntry>,
}

/// Request body for `POST .../git/commits`.
#[derive(Debug, Clone, Serialize)]
pub struct NewCommit {
    pub message: String,
    pub tree: String,
    pub parents: Vec<String>,
}

/// Request body for `PATCH .../git/refs/{ref}`.
#[derive(Debug, Clone, Serialize)]
pub struct RefUpdate {
    pub sha: String,
    /// Fast-forward only; the API rejects the update if the branch moved.
    pub force: bool,
}

/// `GET .../contents/{path}` resolves to either a single file object or a
/// directory listing. The listing case is how a directory path is detected.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContentsResponse {
    Directory(Vec<ContentsListing>),
    File(ContentsFile),
}

/// A file object from the contents API, content still base64-encoded.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentsFile {
    pub name: String,
    pub path: String,
    pub sha: String,
    #[serde(default)]
    pub content: String,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentsListing {
    pub name: String,
    pub path: String,
}

/// A repository file with its content decoded to text.
#[derive(Debug, Clone, Serialize)]
pub struct RepoFile {
    pub name: String,
    pub path: String,
    pub content: String,
    pub sha: String,
}
