//! The atomic multi-file publisher.
//!
//! Exactly one commit lands on the branch per publish: blobs, then a tree
//! layered onto the current head's tree, then a commit, then the ref
//! update. The ref update is the last write; any earlier failure leaves
//! the branch untouched and only orphans unreferenced objects in the
//! store, which the remote garbage-collects on its own schedule.

use futures::future::try_join_all;
use pressroom_core::content::CommitFile;
use tracing::{debug, info};

use crate::client::GithubClient;
use crate::error::{GithubError, GithubResult, PublishStage};
use crate::types::TreeEntry;

/// Outcome of a successful publish.
#[derive(Debug, Clone)]
pub struct PublishReceipt {
    /// The new branch head.
    pub commit_sha: String,

    /// The head observed before publishing; parent of `commit_sha`.
    pub parent_sha: String,

    /// Repository-relative paths contained in the commit.
    pub paths: Vec<String>,
}

impl GithubClient {
    /// Commit every file in `files` to the configured branch as one new
    /// commit and advance the branch to it.
    ///
    /// Callers validate the batch: `files` must be non-empty and free of
    /// path collisions. Blob creation fans out concurrently and joins
    /// all-or-nothing; no later stage runs after any failure. If the
    /// branch head moved since it was resolved, the ref update is
    /// rejected by the remote and surfaces as
    /// [`GithubError::RefConflict`].
    pub async fn publish(
        &self,
        files: &[CommitFile],
        message: &str,
    ) -> GithubResult<PublishReceipt> {
        let branch = self.branch().to_string();

        let head = stage(PublishStage::ResolveRef, self.get_ref(&branch).await)?;
        let parent_sha = head.object.sha;
        debug!(branch = %branch, head = %parent_sha, "resolved branch head");

        let base = stage(PublishStage::LoadCommit, self.get_commit(&parent_sha).await)?;
        let base_tree_sha = base.tree.sha;

        let blobs = try_join_all(files.iter().map(|file| self.create_blob(&file.content)));
        let blob_shas = stage(PublishStage::CreateBlob, blobs.await)?;
        let entries: Vec<TreeEntry> = files
            .iter()
            .zip(blob_shas)
            .map(|(file, sha)| TreeEntry::file(file.path.clone(), sha))
            .collect();

        let tree_sha = stage(
            PublishStage::CreateTree,
            self.create_tree(&base_tree_sha, entries).await,
        )?;
        let commit_sha = stage(
            PublishStage::CreateCommit,
            self.create_commit(message, &tree_sha, &parent_sha).await,
        )?;
        stage(
            PublishStage::UpdateRef,
            map_ref_conflict(self.update_ref(&branch, &commit_sha).await, &branch),
        )?;

        info!(branch = %branch, commit = %commit_sha, files = files.len(), "published");
        Ok(PublishReceipt {
            commit_sha,
            parent_sha,
            paths: files.iter().map(|file| file.path.clone()).collect(),
        })
    }
}

/// Tag a failed step with the stage it belongs to. A ref conflict passes
/// through unwrapped so callers can match on it directly.
fn stage<T>(stage: PublishStage, result: GithubResult<T>) -> GithubResult<T> {
    result.map_err(|e| match e {
        conflict @ GithubError::RefConflict { .. } => conflict,
        other => GithubError::Publish {
            stage,
            source: Box::new(other),
        },
    })
}

/// A non-fast-forward rejection means the branch moved since the head was
/// resolved; surface it as a conflict rather than a generic API error.
fn map_ref_conflict(result: GithubResult<()>, branch: &str) -> GithubResult<()> {
    match result {
        Err(GithubError::Api {
            status: 409 | 422, ..
        }) => Err(GithubError::RefConflict {
            branch: branch.to_string(),
        }),
        other => other,
    }
}
