//! The interactive review session.
//!
//! Owns the in-memory model of the repository (snapshot, history, branches),
//! the selection and focus state, the modal overlay, and the single-slot
//! diff cache. The dispatcher methods on `App` are the only place that
//! mutates repository state, always through the backend collaborator, and
//! every mutating call is followed by a refresh of whatever it could have
//! invalidated.

use std::collections::HashSet;

use crate::filter::FileFilter;
use crate::logger::SessionLogger;
use crate::model::{BranchRecord, CommitRecord, FileRecord};
use crate::theme::Theme;
use crate::vcs::{Backend, PushOutcome};

/// Shown in the diff panel when a file has no unstaged changes, so the view
/// is never ambiguous between "loading" and "nothing there".
pub const NO_CHANGES_PLACEHOLDER: &str = "no changes to show";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPanel {
    Files,
    Commits,
    Branches,
}

impl FocusedPanel {
    /// Cyclic successor, mod 3.
    pub fn next(self) -> Self {
        match self {
            FocusedPanel::Files => FocusedPanel::Commits,
            FocusedPanel::Commits => FocusedPanel::Branches,
            FocusedPanel::Branches => FocusedPanel::Files,
        }
    }

    /// Cyclic predecessor; exact inverse of `next`.
    pub fn prev(self) -> Self {
        match self {
            FocusedPanel::Files => FocusedPanel::Branches,
            FocusedPanel::Commits => FocusedPanel::Files,
            FocusedPanel::Branches => FocusedPanel::Commits,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FocusedPanel::Files => " Files ",
            FocusedPanel::Commits => " Commits ",
            FocusedPanel::Branches => " Branches ",
        }
    }

    /// Operator help for the status bar; a pure function of the state.
    pub fn help_text(self) -> &'static str {
        match self {
            FocusedPanel::Files => {
                " j/k:move  space:mark  c:commit marked  p:push  Tab:panel  r:reload  q:quit "
            }
            FocusedPanel::Commits => " j/k:move  Tab:panel  r:reload  q:quit ",
            FocusedPanel::Branches => {
                " j/k:move  c:checkout  n:new branch  p:pull  Tab:panel  r:reload  q:quit "
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    CommitMessage,
    BranchName,
}

/// A transient input prompt. While one exists it exclusively owns the
/// keyboard; the panel focus active at entry is restored on exit.
#[derive(Debug)]
pub struct Modal {
    pub kind: ModalKind,
    pub buffer: String,
    return_focus: FocusedPanel,
}

impl Modal {
    pub fn title(&self) -> &'static str {
        match self.kind {
            ModalKind::CommitMessage => " Commit message ",
            ModalKind::BranchName => " New branch name ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub content: String,
    pub message_type: MessageType,
}

/// Paths marked for staging. Always a subset of the current snapshot;
/// independent of highlight and focus.
#[derive(Debug, Default)]
pub struct Selection {
    marked: HashSet<String>,
}

impl Selection {
    /// Toggle a path. Paths not present in the snapshot are ignored.
    pub fn toggle(&mut self, path: &str, snapshot: &[FileRecord]) {
        if !snapshot.iter().any(|f| f.path == path) {
            return;
        }
        if !self.marked.remove(path) {
            self.marked.insert(path.to_string());
        }
    }

    pub fn is_selected(&self, path: &str) -> bool {
        self.marked.contains(path)
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    /// Marked paths in snapshot order.
    pub fn selected_in(&self, snapshot: &[FileRecord]) -> Vec<String> {
        snapshot
            .iter()
            .filter(|f| self.marked.contains(&f.path))
            .map(|f| f.path.clone())
            .collect()
    }

    /// Drop marks for paths that disappeared from a refreshed snapshot.
    pub fn prune(&mut self, snapshot: &[FileRecord]) {
        self.marked
            .retain(|path| snapshot.iter().any(|f| &f.path == path));
    }
}

/// Single-slot cache for the diff of the currently highlighted file.
#[derive(Debug)]
pub struct DiffCacheEntry {
    pub path: String,
    pub text: String,
    valid_at: usize,
}

pub struct SessionConfig {
    pub theme: Theme,
    pub filter: FileFilter,
    pub commit_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            filter: FileFilter::default(),
            commit_limit: crate::config::DEFAULT_COMMIT_LIMIT,
        }
    }
}

pub struct App {
    pub backend: Box<dyn Backend>,
    pub logger: SessionLogger,
    pub theme: Theme,
    filter: FileFilter,
    commit_limit: usize,

    pub files: Vec<FileRecord>,
    pub commits: Vec<CommitRecord>,
    pub branches: Vec<BranchRecord>,

    pub selection: Selection,
    pub focus: FocusedPanel,
    pub modal: Option<Modal>,

    pub file_cursor: usize,
    pub commit_cursor: usize,
    pub branch_cursor: usize,

    pub diff_cache: Option<DiffCacheEntry>,
    pub message: Option<Message>,
    pub should_quit: bool,
}

impl App {
    /// Build the session, performing the initial loads. Any load failure
    /// here is fatal: the session refuses to start on a broken backend.
    pub fn new(
        backend: Box<dyn Backend>,
        logger: SessionLogger,
        config: SessionConfig,
    ) -> crate::error::Result<Self> {
        let files = load_snapshot(backend.as_ref(), &config.filter)?;
        let commits = backend.log(config.commit_limit)?;
        let branches = backend.branches()?;

        Ok(Self {
            backend,
            logger,
            theme: config.theme,
            filter: config.filter,
            commit_limit: config.commit_limit,
            files,
            commits,
            branches,
            selection: Selection::default(),
            focus: FocusedPanel::Files,
            modal: None,
            file_cursor: 0,
            commit_cursor: 0,
            branch_cursor: 0,
            diff_cache: None,
            message: None,
            should_quit: false,
        })
    }

    // --- messages ---

    pub fn set_message(&mut self, content: impl Into<String>) {
        self.message = Some(Message {
            content: content.into(),
            message_type: MessageType::Info,
        });
    }

    pub fn set_warning(&mut self, content: impl Into<String>) {
        self.message = Some(Message {
            content: content.into(),
            message_type: MessageType::Warning,
        });
    }

    pub fn set_error(&mut self, content: impl Into<String>) {
        self.message = Some(Message {
            content: content.into(),
            message_type: MessageType::Error,
        });
    }

    // --- refresh ---

    /// Re-fetch the status snapshot. On success stale selection entries are
    /// pruned, the highlight clamped, and the diff cache invalidated; on
    /// failure the previous snapshot stays in place and the error is
    /// surfaced.
    pub fn refresh_snapshot(&mut self) {
        match load_snapshot(self.backend.as_ref(), &self.filter) {
            Ok(files) => {
                self.files = files;
                self.selection.prune(&self.files);
                self.file_cursor = clamp_cursor(self.file_cursor, self.files.len());
                self.diff_cache = None;
            }
            Err(e) => {
                self.logger.error(&format!("status refresh failed: {e}"));
                self.set_error(format!("Status refresh failed: {e}"));
            }
        }
    }

    pub fn refresh_commits(&mut self) {
        match self.backend.log(self.commit_limit) {
            Ok(commits) => {
                self.commits = commits;
                self.commit_cursor = clamp_cursor(self.commit_cursor, self.commits.len());
            }
            Err(e) => {
                self.logger.error(&format!("history refresh failed: {e}"));
                self.set_error(format!("History refresh failed: {e}"));
            }
        }
    }

    pub fn refresh_branches(&mut self) {
        match self.backend.branches() {
            Ok(branches) => {
                self.branches = branches;
                self.branch_cursor = clamp_cursor(self.branch_cursor, self.branches.len());
            }
            Err(e) => {
                self.logger.error(&format!("branch refresh failed: {e}"));
                self.set_error(format!("Branch refresh failed: {e}"));
            }
        }
    }

    pub fn refresh_all(&mut self) {
        self.refresh_snapshot();
        self.refresh_commits();
        self.refresh_branches();
    }

    // --- navigation ---

    fn focused_len(&self) -> usize {
        match self.focus {
            FocusedPanel::Files => self.files.len(),
            FocusedPanel::Commits => self.commits.len(),
            FocusedPanel::Branches => self.branches.len(),
        }
    }

    fn focused_cursor_mut(&mut self) -> &mut usize {
        match self.focus {
            FocusedPanel::Files => &mut self.file_cursor,
            FocusedPanel::Commits => &mut self.commit_cursor,
            FocusedPanel::Branches => &mut self.branch_cursor,
        }
    }

    pub fn move_cursor_down(&mut self, n: usize) {
        let len = self.focused_len();
        if len == 0 {
            return;
        }
        let cursor = self.focused_cursor_mut();
        *cursor = (*cursor + n).min(len - 1);
    }

    pub fn move_cursor_up(&mut self, n: usize) {
        let cursor = self.focused_cursor_mut();
        *cursor = cursor.saturating_sub(n);
    }

    pub fn go_to_top(&mut self) {
        *self.focused_cursor_mut() = 0;
    }

    pub fn go_to_bottom(&mut self) {
        let len = self.focused_len();
        *self.focused_cursor_mut() = len.saturating_sub(1);
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn highlighted_file(&self) -> Option<&FileRecord> {
        self.files.get(self.file_cursor)
    }

    pub fn highlighted_branch(&self) -> Option<&BranchRecord> {
        self.branches.get(self.branch_cursor)
    }

    pub fn current_branch(&self) -> Option<&BranchRecord> {
        self.branches.iter().find(|b| b.is_current)
    }

    // --- diff cache ---

    /// Make the cached diff match the highlighted file, fetching only when
    /// the highlight moved since the last fetch. Plain navigation is the
    /// only thing that changes this value.
    pub fn ensure_diff(&mut self) {
        let Some(record) = self.files.get(self.file_cursor) else {
            self.diff_cache = None;
            return;
        };

        if self
            .diff_cache
            .as_ref()
            .is_some_and(|e| e.valid_at == self.file_cursor && e.path == record.path)
        {
            return;
        }

        let path = record.path.clone();
        let text = match self.backend.diff(&path) {
            Ok(text) if text.trim().is_empty() => NO_CHANGES_PLACEHOLDER.to_string(),
            Ok(text) => text,
            Err(e) => {
                self.logger.error(&format!("diff failed for {path}: {e}"));
                format!("failed to load diff: {e}")
            }
        };

        self.diff_cache = Some(DiffCacheEntry {
            path,
            text,
            valid_at: self.file_cursor,
        });
    }

    // --- selection ---

    pub fn toggle_highlighted(&mut self) {
        let Some(path) = self.highlighted_file().map(|f| f.path.clone()) else {
            return;
        };
        self.selection.toggle(&path, &self.files);
    }

    // --- modal overlay ---

    fn open_modal(&mut self, kind: ModalKind) {
        self.modal = Some(Modal {
            kind,
            buffer: String::new(),
            return_focus: self.focus,
        });
    }

    pub fn cancel_modal(&mut self) {
        if let Some(modal) = self.modal.take() {
            self.focus = modal.return_focus;
        }
    }

    /// Confirm the active prompt. An empty buffer is treated as a
    /// cancellation: the modal closes and no backend call is made.
    pub fn submit_modal(&mut self) {
        let Some(modal) = self.modal.take() else {
            return;
        };
        self.focus = modal.return_focus;

        let input = modal.buffer.trim().to_string();
        if input.is_empty() {
            return;
        }

        match modal.kind {
            ModalKind::CommitMessage => self.commit_with_message(&input),
            ModalKind::BranchName => self.create_branch(&input),
        }
    }

    // --- repository actions ---

    /// Stage every marked file (best effort, per-item error isolation),
    /// then open the commit prompt. A failure for one file never aborts the
    /// rest of the batch, but it is surfaced and logged.
    pub fn begin_commit(&mut self) {
        if self.selection.is_empty() {
            self.set_warning("No files marked for staging");
            return;
        }

        let paths = self.selection.selected_in(&self.files);
        let mut staged = 0usize;
        let mut failed = 0usize;

        for path in &paths {
            match self.backend.stage(path) {
                Ok(()) => {
                    staged += 1;
                    self.logger.info(&format!("staged {path}"));
                }
                Err(e) => {
                    failed += 1;
                    self.logger.error(&format!("failed to stage {path}: {e}"));
                }
            }
        }

        self.refresh_snapshot();

        if staged == 0 {
            self.set_error(format!("Staging failed for all {failed} marked file(s)"));
            return;
        }
        if failed > 0 {
            self.logger
                .warn(&format!("staged {staged} file(s), {failed} failed"));
            self.set_warning(format!("Staged {staged} file(s), {failed} failed"));
        } else {
            self.set_message(format!("Staged {staged} file(s)"));
        }

        self.open_modal(ModalKind::CommitMessage);
    }

    fn commit_with_message(&mut self, message: &str) {
        match self.backend.commit(message) {
            Ok(id) => {
                self.logger.info(&format!("committed {id}: {message}"));
                self.set_message(format!("Committed {id}"));
                self.refresh_snapshot();
                self.refresh_commits();
            }
            Err(e) => {
                self.logger.error(&format!("commit failed: {e}"));
                self.set_error(format!("Commit failed: {e}"));
            }
        }
    }

    pub fn open_branch_prompt(&mut self) {
        self.open_modal(ModalKind::BranchName);
    }

    fn create_branch(&mut self, name: &str) {
        match self.backend.create_branch(name) {
            Ok(()) => {
                self.logger.info(&format!("created branch {name}"));
                self.set_message(format!("Created branch {name}"));
                self.refresh_branches();
                self.refresh_snapshot();
            }
            Err(e) => {
                self.logger.error(&format!("branch creation failed: {e}"));
                self.set_error(format!("Branch creation failed: {e}"));
            }
        }
    }

    /// Checkout the highlighted branch. On failure the displayed branch
    /// list is left untouched and the error is surfaced.
    pub fn checkout_highlighted(&mut self) {
        let Some(name) = self.highlighted_branch().map(|b| b.name.clone()) else {
            return;
        };

        match self.backend.checkout(&name) {
            Ok(()) => {
                self.logger.info(&format!("checked out {name}"));
                self.set_message(format!("Switched to {name}"));
                self.refresh_all();
            }
            Err(e) => {
                self.logger.error(&format!("checkout of {name} failed: {e}"));
                self.set_error(format!("Checkout failed: {e}"));
            }
        }
    }

    pub fn push_current(&mut self) {
        let Some(name) = self.current_branch().map(|b| b.name.clone()) else {
            self.set_error("No current branch to push");
            return;
        };

        match self.backend.push(&name) {
            Ok(PushOutcome::Pushed) => {
                self.logger.info(&format!("pushed {name}"));
                self.set_message(format!("Pushed {name}"));
                self.refresh_commits();
            }
            Ok(PushOutcome::AlreadyUpToDate) => {
                self.set_message("Already up-to-date");
            }
            Err(e) => {
                self.logger.error(&format!("push of {name} failed: {e}"));
                self.set_error(format!("Push failed: {e}"));
            }
        }
    }

    pub fn pull_current(&mut self) {
        let Some(name) = self.current_branch().map(|b| b.name.clone()) else {
            self.set_error("No current branch to pull");
            return;
        };

        match self.backend.pull(&name) {
            Ok(()) => {
                self.logger.info(&format!("pulled {name}"));
                self.set_message(format!("Pulled {name}"));
                self.refresh_all();
            }
            Err(e) => {
                self.logger.error(&format!("pull of {name} failed: {e}"));
                self.set_error(format!("Pull failed: {e}"));
            }
        }
    }
}

/// Snapshot load: raw status filtered down to the reviewable set plus the
/// configured path filters.
fn load_snapshot(backend: &dyn Backend, filter: &FileFilter) -> crate::error::Result<Vec<FileRecord>> {
    let records = backend.status()?;
    Ok(records
        .into_iter()
        .filter(|f| f.kind.is_reviewable() && filter.matches(&f.path))
        .collect())
}

fn clamp_cursor(cursor: usize, len: usize) -> usize {
    if len == 0 { 0 } else { cursor.min(len - 1) }
}
