//! Pure mapping from drafts to committable Markdown files.
//!
//! No I/O and no failure modes beyond path collisions; everything here is
//! deterministic on its input.

use std::collections::HashSet;

use crate::draft::Draft;
use crate::error::ContentError;

/// Directory in the target repository that receives published posts.
pub const CONTENT_DIR: &str = "content";

/// A repository-relative path paired with the file content to commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitFile {
    pub path: String,
    pub content: String,
}

/// Derive a path-safe slug from a title.
///
/// Lowercases, collapses every maximal run of non-alphanumeric characters
/// into a single hyphen, and strips hyphens from both ends. Idempotent on
/// its own output. A title with no alphanumeric characters yields an empty
/// string; [`draft_path`] supplies the fallback for that case.
pub fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    if out.ends_with('-') {
        out.pop();
    }
    out
}

/// Render the Markdown document for a post: a frontmatter block holding
/// the raw title line, then the body.
pub fn markdown_document(title: &str, body: &str) -> String {
    format!("---\n{title}\n---\n\n\n{body}")
}

/// Destination path for one draft: `content/<slug>.md`.
///
/// A draft whose title produces an empty slug falls back to
/// `untitled-<first 8 chars of the draft id>` so the path is never
/// `content/.md`.
pub fn draft_path(draft: &Draft) -> String {
    let s = slug(&draft.title);
    let basename = if s.is_empty() {
        let tag: String = draft.id.chars().take(8).collect();
        format!("untitled-{tag}")
    } else {
        s
    };
    format!("{CONTENT_DIR}/{basename}.md")
}

/// Map a batch of drafts to commit files.
///
/// Destination paths must be unique within the batch; a collision is
/// rejected here, before any network call is made on the caller's behalf.
pub fn commit_files(drafts: &[Draft]) -> Result<Vec<CommitFile>, ContentError> {
    let mut seen = HashSet::new();
    let mut files = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let path = draft_path(draft);
        if !seen.insert(path.clone()) {
            return Err(ContentError::DuplicatePath { path });
        }
        files.push(CommitFile {
            path,
            content: markdown_document(&draft.title, &draft.body),
        });
    }
    Ok(files)
}
