//! Git backend: git2 for read-side queries (discovery, history, branches),
//! the `git` CLI for everything that mutates the repository or talks to a
//! remote, mirroring how the tool is expected to behave alongside a user's
//! own git configuration.

use std::path::Path;
use std::process::Command;

use git2::Repository;

use crate::auth::Credential;
use crate::error::{Result, StashlyError};
use crate::model::{BranchRecord, CommitRecord, FileRecord};
use crate::vcs::status::parse_porcelain;
use crate::vcs::{Backend, PushOutcome, RepoInfo};

/// Length of the short hash shown in the commits panel.
const SHORT_HASH_LEN: usize = 7;

pub struct GitBackend {
    repo: Repository,
    info: RepoInfo,
    credential: Credential,
}

impl GitBackend {
    /// Discover a git repository from the current directory.
    pub fn discover(credential: Credential) -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| StashlyError::BackendUnavailable(format!("cannot read cwd: {e}")))?;
        let repo = Repository::discover(&cwd)
            .map_err(|_| StashlyError::BackendUnavailable("not a git repository".to_string()))?;

        let root_path = repo
            .workdir()
            .ok_or_else(|| {
                StashlyError::BackendUnavailable("bare repositories are not supported".to_string())
            })?
            .to_path_buf();

        let info = RepoInfo { root_path };

        Ok(Self {
            repo,
            info,
            credential,
        })
    }

    /// Run a git subcommand in the repository root, returning stdout.
    /// A non-zero exit maps to a recoverable backend error carrying the
    /// tool's own stderr.
    fn run_git(&self, args: &[&str]) -> Result<String> {
        run_git_command(&self.info.root_path, args, None)
    }

    /// Same as `run_git` but with the resolved ssh credential applied,
    /// for commands that reach a remote.
    fn run_git_remote(&self, args: &[&str]) -> Result<String> {
        run_git_command(&self.info.root_path, args, self.credential.ssh_command())
    }
}

fn run_git_command(root: &Path, args: &[&str], ssh_command: Option<String>) -> Result<String> {
    let mut cmd = Command::new("git");
    cmd.current_dir(root).args(args);
    if let Some(ssh) = ssh_command {
        cmd.env("GIT_SSH_COMMAND", ssh);
    }

    let output = cmd
        .output()
        .map_err(|e| StashlyError::Backend(format!("failed to run git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let detail = if stderr.is_empty() {
            format!("git {} failed", args.first().unwrap_or(&""))
        } else {
            stderr
        };
        return Err(StashlyError::Backend(detail));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

impl Backend for GitBackend {
    fn info(&self) -> &RepoInfo {
        &self.info
    }

    fn status(&self) -> Result<Vec<FileRecord>> {
        let output = self.run_git(&["status", "--porcelain"])?;
        Ok(parse_porcelain(&output))
    }

    fn log(&self, limit: usize) -> Result<Vec<CommitRecord>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let mut revwalk = self.repo.revwalk()?;
        if revwalk.push_head().is_err() {
            // Unborn HEAD: a fresh repository has no history yet.
            return Ok(Vec::new());
        }

        let mut commits = Vec::new();
        for oid in revwalk.take(limit) {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;

            let id = oid.to_string();
            let short_hash = id[..SHORT_HASH_LEN.min(id.len())].to_string();
            let message = commit.summary().unwrap_or("(no message)").to_string();

            commits.push(CommitRecord {
                short_hash,
                message,
            });
        }

        Ok(commits)
    }

    fn branches(&self) -> Result<Vec<BranchRecord>> {
        let mut branches = Vec::new();
        for entry in self.repo.branches(Some(git2::BranchType::Local))? {
            let (branch, _) = entry?;
            let Some(name) = branch.name()? else {
                continue;
            };
            branches.push(BranchRecord {
                name: name.to_string(),
                is_current: branch.is_head(),
            });
        }
        Ok(branches)
    }

    fn stage(&self, path: &str) -> Result<()> {
        self.run_git(&["add", "--", path])?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<String> {
        self.run_git(&["commit", "-m", message])?;
        let short_id = self.run_git(&["rev-parse", "--short=7", "HEAD"])?;
        Ok(short_id.trim().to_string())
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.run_git(&["checkout", branch])?;
        Ok(())
    }

    fn create_branch(&self, name: &str) -> Result<()> {
        self.run_git(&["checkout", "-b", name])?;
        Ok(())
    }

    fn push(&self, branch: &str) -> Result<PushOutcome> {
        let mut cmd = Command::new("git");
        cmd.current_dir(&self.info.root_path)
            .args(["push", "origin", branch]);
        if let Some(ssh) = self.credential.ssh_command() {
            cmd.env("GIT_SSH_COMMAND", ssh);
        }

        let output = cmd
            .output()
            .map_err(|e| StashlyError::Backend(format!("failed to run git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(StashlyError::Backend(stderr));
        }

        // git reports "Everything up-to-date" on stderr with a zero exit.
        let stderr = String::from_utf8_lossy(&output.stderr);
        if stderr.contains("Everything up-to-date") {
            Ok(PushOutcome::AlreadyUpToDate)
        } else {
            Ok(PushOutcome::Pushed)
        }
    }

    fn pull(&self, branch: &str) -> Result<()> {
        self.run_git_remote(&["pull", "origin", branch])?;
        Ok(())
    }

    fn diff(&self, path: &str) -> Result<String> {
        self.run_git(&["diff", "--", path])
    }
}
