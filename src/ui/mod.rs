mod modal;
mod panels;
mod status_bar;
pub mod styles;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    status_bar::render_header(frame, app, chunks[0]);
    render_main_content(frame, app, chunks[1]);
    status_bar::render_status_bar(frame, app, chunks[2]);

    // Prompt popup on top when active
    modal::render_prompt(frame, app);
}

fn render_main_content(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Panel column
            Constraint::Percentage(65), // Diff view
        ])
        .split(area);

    let panel_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(columns[0]);

    panels::render_files(frame, app, panel_rows[0]);
    panels::render_commits(frame, app, panel_rows[1]);
    panels::render_branches(frame, app, panel_rows[2]);
    panels::render_diff(frame, app, columns[1]);
}
