use ratatui::style::{Modifier, Style};

use crate::app::MessageType;
use crate::model::FileKind;
use crate::theme::Theme;

pub fn border_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        Style::default().fg(theme.border_focused)
    } else {
        Style::default().fg(theme.border_unfocused)
    }
}

pub fn highlight_style(theme: &Theme) -> Style {
    Style::default().bg(theme.bg_highlight).fg(theme.fg_primary)
}

pub fn dim_style(theme: &Theme) -> Style {
    Style::default().fg(theme.fg_dim)
}

pub fn header_style(theme: &Theme) -> Style {
    Style::default()
        .bg(theme.status_bar_bg)
        .fg(theme.fg_primary)
        .add_modifier(Modifier::BOLD)
}

pub fn status_bar_style(theme: &Theme) -> Style {
    Style::default()
        .bg(theme.status_bar_bg)
        .fg(theme.fg_secondary)
}

pub fn file_kind_style(theme: &Theme, kind: FileKind) -> Style {
    let color = match kind {
        FileKind::New | FileKind::Copied => theme.file_new,
        FileKind::Modified => theme.file_modified,
        FileKind::Deleted => theme.file_deleted,
        FileKind::Renamed => theme.file_renamed,
        _ => theme.fg_secondary,
    };
    Style::default().fg(color)
}

pub fn selection_mark_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.selection_mark)
        .add_modifier(Modifier::BOLD)
}

pub fn hash_style(theme: &Theme) -> Style {
    Style::default().fg(theme.commit_hash)
}

pub fn current_branch_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.current_branch)
        .add_modifier(Modifier::BOLD)
}

pub fn diff_add_style(theme: &Theme) -> Style {
    Style::default().fg(theme.diff_add)
}

pub fn diff_del_style(theme: &Theme) -> Style {
    Style::default().fg(theme.diff_del)
}

pub fn diff_hunk_header_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.diff_hunk_header)
        .add_modifier(Modifier::BOLD)
}

pub fn diff_context_style(theme: &Theme) -> Style {
    Style::default().fg(theme.fg_secondary)
}

pub fn message_style(theme: &Theme, message_type: MessageType) -> Style {
    let (fg, bg) = match message_type {
        MessageType::Info => (theme.message_info_fg, theme.message_info_bg),
        MessageType::Warning => (theme.message_warning_fg, theme.message_warning_bg),
        MessageType::Error => (theme.message_error_fg, theme.message_error_bg),
    };
    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}
