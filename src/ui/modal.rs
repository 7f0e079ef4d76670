use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::ui::styles;

/// Render the active prompt as a centered single-line popup. While it is
/// visible the panels underneath receive no input.
pub fn render_prompt(frame: &mut Frame, app: &App) {
    let Some(modal) = app.modal.as_ref() else {
        return;
    };
    let theme = &app.theme;

    let area = centered_rect(frame.area(), 60, 3);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(modal.title())
        .borders(Borders::ALL)
        .border_style(styles::border_style(theme, true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = Paragraph::new(Line::from(vec![
        Span::raw(format!(" {}", modal.buffer)),
        Span::styled("█", styles::dim_style(theme)),
    ]));
    frame.render_widget(input, inner);
}

/// A rect of `percent_x` width and fixed height, centered in `area`.
fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let width = ((area.width as u32 * percent_x as u32 / 100) as u16)
        .max(20)
        .min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
