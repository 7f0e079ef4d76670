pub mod git;
pub mod status;

#[cfg(test)]
pub mod mock;

use std::path::PathBuf;

use crate::error::Result;
use crate::model::{BranchRecord, CommitRecord, FileRecord};

/// Repository information resolved at startup.
#[derive(Debug, Clone)]
pub struct RepoInfo {
    pub root_path: PathBuf,
}

/// Outcome of a push. "Already up-to-date" is a distinct success, never
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    Pushed,
    AlreadyUpToDate,
}

/// The version-control collaborator the session drives. The session never
/// implements version control itself; it interprets these results and keeps
/// its own state consistent with them. The session is single-threaded, so
/// implementations are used from exactly one thread of control.
pub trait Backend {
    /// Repository information
    fn info(&self) -> &RepoInfo;

    /// Parsed working-tree status, one record per changed path.
    fn status(&self) -> Result<Vec<FileRecord>>;

    /// At most `limit` commits walking back from HEAD, newest first.
    /// Exhausting history before `limit` is not an error.
    fn log(&self, limit: usize) -> Result<Vec<CommitRecord>>;

    /// Local branches; exactly one carries `is_current` unless HEAD is
    /// detached or the repository has no branches.
    fn branches(&self) -> Result<Vec<BranchRecord>>;

    /// Stage a single path.
    fn stage(&self, path: &str) -> Result<()>;

    /// Commit staged changes, returning the new short commit id.
    fn commit(&self, message: &str) -> Result<String>;

    /// Checkout an existing branch.
    fn checkout(&self, branch: &str) -> Result<()>;

    /// Create a new branch and switch to it.
    fn create_branch(&self, name: &str) -> Result<()>;

    /// Push `branch` to origin.
    fn push(&self, branch: &str) -> Result<PushOutcome>;

    /// Pull `branch` from origin.
    fn pull(&self, branch: &str) -> Result<()>;

    /// Unified diff for one path. An empty string is a valid result and
    /// means "no changes".
    fn diff(&self, path: &str) -> Result<String>;
}
