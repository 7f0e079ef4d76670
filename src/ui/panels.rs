use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, FocusedPanel, NO_CHANGES_PLACEHOLDER};
use crate::ui::styles;

/// First visible row so the highlighted row stays inside the viewport.
fn scroll_offset(cursor: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    (cursor + 1).saturating_sub(height)
}

pub fn render_files(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let focused = app.focus == FocusedPanel::Files;

    let block = Block::default()
        .title(FocusedPanel::Files.title())
        .borders(Borders::ALL)
        .border_style(styles::border_style(theme, focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.files.is_empty() {
        let empty = Paragraph::new(Span::styled(
            " nothing to review ",
            styles::dim_style(theme),
        ));
        frame.render_widget(empty, inner);
        return;
    }

    let lines: Vec<Line> = app
        .files
        .iter()
        .enumerate()
        .map(|(i, file)| {
            let is_highlighted = i == app.file_cursor;
            let mark = if app.selection.is_selected(&file.path) {
                "x"
            } else {
                " "
            };

            let path_style = if is_highlighted {
                styles::highlight_style(theme)
            } else {
                Style::default().fg(theme.fg_primary)
            };

            Line::from(vec![
                Span::styled(format!("[{mark}]"), styles::selection_mark_style(theme)),
                Span::styled(
                    format!(" {} ", file.kind.as_char()),
                    styles::file_kind_style(theme, file.kind),
                ),
                Span::styled(file.path.clone(), path_style),
            ])
        })
        .skip(scroll_offset(app.file_cursor, inner.height as usize))
        .take(inner.height as usize)
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn render_commits(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let focused = app.focus == FocusedPanel::Commits;

    let block = Block::default()
        .title(FocusedPanel::Commits.title())
        .borders(Borders::ALL)
        .border_style(styles::border_style(theme, focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .commits
        .iter()
        .enumerate()
        .map(|(i, commit)| {
            let message_style = if i == app.commit_cursor && focused {
                styles::highlight_style(theme)
            } else {
                Style::default().fg(theme.fg_secondary)
            };
            Line::from(vec![
                Span::styled(format!("{} ", commit.short_hash), styles::hash_style(theme)),
                Span::styled(commit.message.clone(), message_style),
            ])
        })
        .skip(scroll_offset(app.commit_cursor, inner.height as usize))
        .take(inner.height as usize)
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn render_branches(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let focused = app.focus == FocusedPanel::Branches;

    let block = Block::default()
        .title(FocusedPanel::Branches.title())
        .borders(Borders::ALL)
        .border_style(styles::border_style(theme, focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .branches
        .iter()
        .enumerate()
        .map(|(i, branch)| {
            let marker = if branch.is_current { "* " } else { "  " };
            let name_style = if i == app.branch_cursor && focused {
                styles::highlight_style(theme)
            } else if branch.is_current {
                styles::current_branch_style(theme)
            } else {
                Style::default().fg(theme.fg_primary)
            };
            Line::from(vec![
                Span::styled(marker, styles::current_branch_style(theme)),
                Span::styled(branch.name.clone(), name_style),
            ])
        })
        .skip(scroll_offset(app.branch_cursor, inner.height as usize))
        .take(inner.height as usize)
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn render_diff(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let title = match app.highlighted_file() {
        Some(file) => format!(" Diff: {} ", file.path),
        None => " Diff ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(styles::border_style(theme, false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(entry) = app.diff_cache.as_ref() else {
        return;
    };

    if entry.text == NO_CHANGES_PLACEHOLDER {
        let placeholder = Paragraph::new(Span::styled(
            format!(" ({NO_CHANGES_PLACEHOLDER}) "),
            styles::dim_style(theme),
        ));
        frame.render_widget(placeholder, inner);
        return;
    }

    let lines: Vec<Line> = entry
        .text
        .lines()
        .take(inner.height as usize)
        .map(|line| {
            let style = if line.starts_with("@@") {
                styles::diff_hunk_header_style(theme)
            } else if line.starts_with('+') {
                styles::diff_add_style(theme)
            } else if line.starts_with('-') {
                styles::diff_del_style(theme)
            } else if line.starts_with("diff ") || line.starts_with("index ") {
                styles::dim_style(theme)
            } else {
                styles::diff_context_style(theme)
            };
            Line::from(Span::styled(line.to_string(), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
