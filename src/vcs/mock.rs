//! Scripted backend for session tests.
//!
//! State lives behind `Rc<RefCell<..>>` so a test can keep a handle, mutate
//! the pretend repository between refreshes, and assert on recorded calls.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::rc::Rc;

use crate::error::{Result, StashlyError};
use crate::model::{BranchRecord, CommitRecord, FileKind, FileRecord};
use crate::vcs::{Backend, PushOutcome, RepoInfo};

#[derive(Default)]
pub struct Calls {
    pub stage: Vec<String>,
    pub commit: Vec<String>,
    pub checkout: Vec<String>,
    pub create_branch: Vec<String>,
    pub push: Vec<String>,
    pub pull: Vec<String>,
    pub diff: Vec<String>,
}

pub struct MockState {
    pub files: Vec<FileRecord>,
    pub commits: Vec<CommitRecord>,
    pub branches: Vec<BranchRecord>,
    pub diffs: HashMap<String, String>,
    pub fail_stage: HashSet<String>,
    pub fail_status: bool,
    pub fail_commit: bool,
    pub fail_checkout: bool,
    pub fail_pull: bool,
    pub push_outcome: PushOutcome,
    pub calls: Calls,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            commits: Vec::new(),
            branches: vec![BranchRecord {
                name: "main".to_string(),
                is_current: true,
            }],
            diffs: HashMap::new(),
            fail_stage: HashSet::new(),
            fail_status: false,
            fail_commit: false,
            fail_checkout: false,
            fail_pull: false,
            push_outcome: PushOutcome::Pushed,
            calls: Calls::default(),
        }
    }
}

pub struct MockBackend {
    info: RepoInfo,
    state: Rc<RefCell<MockState>>,
}

impl MockBackend {
    pub fn new(state: MockState) -> Self {
        Self {
            info: RepoInfo {
                root_path: PathBuf::from("/mock/repo"),
            },
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Handle the test keeps to script and inspect the backend.
    pub fn handle(&self) -> Rc<RefCell<MockState>> {
        Rc::clone(&self.state)
    }
}

pub fn file(path: &str, kind: FileKind) -> FileRecord {
    FileRecord {
        path: path.to_string(),
        kind,
    }
}

impl Backend for MockBackend {
    fn info(&self) -> &RepoInfo {
        &self.info
    }

    fn status(&self) -> Result<Vec<FileRecord>> {
        let state = self.state.borrow();
        if state.fail_status {
            return Err(StashlyError::Backend("status query failed".to_string()));
        }
        Ok(state.files.clone())
    }

    fn log(&self, limit: usize) -> Result<Vec<CommitRecord>> {
        Ok(self
            .state
            .borrow()
            .commits
            .iter()
            .take(limit)
            .cloned()
            .collect())
    }

    fn branches(&self) -> Result<Vec<BranchRecord>> {
        Ok(self.state.borrow().branches.clone())
    }

    fn stage(&self, path: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.calls.stage.push(path.to_string());
        if state.fail_stage.contains(path) {
            return Err(StashlyError::Backend(format!("cannot stage {path}")));
        }
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<String> {
        let mut state = self.state.borrow_mut();
        state.calls.commit.push(message.to_string());
        if state.fail_commit {
            return Err(StashlyError::Backend("nothing to commit".to_string()));
        }
        // A successful commit consumes the pending changes.
        state.files.clear();
        state.commits.insert(
            0,
            CommitRecord {
                short_hash: "abc1234".to_string(),
                message: message.to_string(),
            },
        );
        Ok("abc1234".to_string())
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.calls.checkout.push(branch.to_string());
        if state.fail_checkout {
            return Err(StashlyError::Backend(format!(
                "cannot checkout {branch}: local changes would be overwritten"
            )));
        }
        for record in &mut state.branches {
            record.is_current = record.name == branch;
        }
        Ok(())
    }

    fn create_branch(&self, name: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.calls.create_branch.push(name.to_string());
        for record in &mut state.branches {
            record.is_current = false;
        }
        state.branches.push(BranchRecord {
            name: name.to_string(),
            is_current: true,
        });
        Ok(())
    }

    fn push(&self, branch: &str) -> Result<PushOutcome> {
        let mut state = self.state.borrow_mut();
        state.calls.push.push(branch.to_string());
        Ok(state.push_outcome)
    }

    fn pull(&self, branch: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.calls.pull.push(branch.to_string());
        if state.fail_pull {
            return Err(StashlyError::Backend("no remote configured".to_string()));
        }
        Ok(())
    }

    fn diff(&self, path: &str) -> Result<String> {
        let mut state = self.state.borrow_mut();
        state.calls.diff.push(path.to_string());
        Ok(state.diffs.get(path).cloned().unwrap_or_default())
    }
}
