//! Action dispatch: (focus, action) to session operations.
//!
//! Handlers stay thin; the session methods on `App` do the work and keep
//! displayed state consistent with the backend afterwards.

use crate::app::App;
use crate::input::Action;
use crate::text_edit::{delete_char, delete_word};

/// Actions available on every panel.
fn handle_common_action(app: &mut App, action: Action) {
    match action {
        Action::CursorDown(n) => app.move_cursor_down(n),
        Action::CursorUp(n) => app.move_cursor_up(n),
        Action::GoToTop => app.go_to_top(),
        Action::GoToBottom => app.go_to_bottom(),
        Action::NextPanel => app.focus_next(),
        Action::PrevPanel => app.focus_prev(),
        Action::Refresh => app.refresh_all(),
        Action::Quit => app.should_quit = true,
        _ => {}
    }
}

pub fn handle_files_action(app: &mut App, action: Action) {
    match action {
        Action::ToggleSelect => app.toggle_highlighted(),
        Action::OpenCommitPrompt => app.begin_commit(),
        Action::Push => app.push_current(),
        other => handle_common_action(app, other),
    }
}

pub fn handle_commits_action(app: &mut App, action: Action) {
    handle_common_action(app, action);
}

pub fn handle_branches_action(app: &mut App, action: Action) {
    match action {
        Action::Checkout => app.checkout_highlighted(),
        Action::OpenBranchPrompt => app.open_branch_prompt(),
        Action::Pull => app.pull_current(),
        other => handle_common_action(app, other),
    }
}

/// Text entry while a prompt owns the keyboard.
pub fn handle_prompt_action(app: &mut App, action: Action) {
    match action {
        Action::InsertChar(c) => {
            if let Some(modal) = app.modal.as_mut() {
                modal.buffer.push(c);
            }
        }
        Action::DeleteChar => {
            if let Some(modal) = app.modal.as_mut() {
                delete_char(&mut modal.buffer);
            }
        }
        Action::DeleteWord => {
            if let Some(modal) = app.modal.as_mut() {
                delete_word(&mut modal.buffer);
            }
        }
        Action::ClearLine => {
            if let Some(modal) = app.modal.as_mut() {
                modal.buffer.clear();
            }
        }
        Action::Submit => app.submit_modal(),
        Action::Cancel => app.cancel_modal(),
        _ => {}
    }
}
