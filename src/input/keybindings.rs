use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::FocusedPanel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    CursorDown(usize),
    CursorUp(usize),
    GoToTop,
    GoToBottom,

    // Panel focus
    NextPanel,
    PrevPanel,

    // Repository actions
    ToggleSelect,
    OpenCommitPrompt,
    Push,
    Pull,
    Checkout,
    OpenBranchPrompt,
    Refresh,

    // Session
    Quit,

    // Prompt text input
    InsertChar(char),
    DeleteChar,
    DeleteWord,
    ClearLine,
    Submit,
    Cancel,

    // No-op
    None,
}

/// Map a key event to an action. While a prompt is open it exclusively owns
/// the keyboard; otherwise the mapping depends on the focused panel.
pub fn map_key_to_action(key: KeyEvent, focus: FocusedPanel, prompt_open: bool) -> Action {
    if prompt_open {
        return map_prompt_keys(key);
    }

    match focus {
        FocusedPanel::Files => map_files_keys(key),
        FocusedPanel::Commits => map_commits_keys(key),
        FocusedPanel::Branches => map_branches_keys(key),
    }
}

/// Keys shared by every panel: navigation, focus cycling, refresh, quit.
fn map_panel_common(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('j') | KeyCode::Down, KeyModifiers::NONE) => Action::CursorDown(1),
        (KeyCode::Char('k') | KeyCode::Up, KeyModifiers::NONE) => Action::CursorUp(1),
        (KeyCode::Char('g'), KeyModifiers::NONE) => Action::GoToTop,
        (KeyCode::Char('G'), _) => Action::GoToBottom,
        (KeyCode::Tab, KeyModifiers::NONE) => Action::NextPanel,
        (KeyCode::BackTab, _) => Action::PrevPanel,
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::Refresh,
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        _ => Action::None,
    }
}

fn map_files_keys(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::ToggleSelect,
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::OpenCommitPrompt,
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::Push,
        _ => map_panel_common(key),
    }
}

fn map_commits_keys(key: KeyEvent) -> Action {
    map_panel_common(key)
}

fn map_branches_keys(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::Checkout,
        (KeyCode::Char('n'), KeyModifiers::NONE) => Action::OpenBranchPrompt,
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::Pull,
        _ => map_panel_common(key),
    }
}

fn map_prompt_keys(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, KeyModifiers::NONE) => Action::Cancel,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Cancel,
        (KeyCode::Enter, KeyModifiers::NONE) => Action::Submit,
        (KeyCode::Backspace, KeyModifiers::NONE) => Action::DeleteChar,
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => Action::DeleteWord,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearLine,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InsertChar(c),
        _ => Action::None,
    }
}
