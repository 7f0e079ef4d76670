use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, Message};
use crate::theme::Theme;
use crate::ui::styles;

pub fn build_message_span(message: Option<&Message>, theme: &Theme) -> (Span<'static>, usize) {
    if let Some(msg) = message {
        let content = format!(" {} ", msg.content);
        let width = content.chars().count();
        (
            Span::styled(content, styles::message_style(theme, msg.message_type)),
            width,
        )
    } else {
        (Span::raw(""), 0)
    }
}

/// Pad the left spans so the message sits right-aligned on the bar.
pub fn build_right_aligned_spans<'a>(
    mut left_spans: Vec<Span<'a>>,
    message_span: Span<'a>,
    message_width: usize,
    total_width: usize,
) -> Vec<Span<'a>> {
    let left_width: usize = left_spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_width = total_width.saturating_sub(left_width + message_width);
    left_spans.push(Span::raw(" ".repeat(padding_width)));
    if message_width > 0 {
        left_spans.push(message_span);
    }
    left_spans
}

pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let branch = app
        .current_branch()
        .map(|b| b.name.as_str())
        .unwrap_or("detached");

    let repo_name = app
        .backend
        .info()
        .root_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("repo");

    let title = Span::styled(" stashly - Review ", styles::header_style(theme));
    let repo = Span::styled(
        format!("[{repo_name}:{branch}] "),
        styles::status_bar_style(theme),
    );
    let changes = Span::styled(
        format!("{} file(s) to review ", app.files.len()),
        styles::dim_style(theme),
    );

    let header = Paragraph::new(Line::from(vec![title, repo, changes]))
        .style(styles::status_bar_style(theme));
    frame.render_widget(header, area);
}

pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    // The help line is a pure function of the focus state, except while a
    // prompt owns the keyboard.
    let hints = if app.modal.is_some() {
        " type message  Enter:confirm  Esc:cancel "
    } else {
        app.focus.help_text()
    };
    let left_spans = vec![Span::styled(hints, styles::status_bar_style(theme))];

    let (message_span, message_width) = build_message_span(app.message.as_ref(), theme);
    let spans = build_right_aligned_spans(
        left_spans,
        message_span,
        message_width,
        area.width as usize,
    );

    let status = Paragraph::new(Line::from(spans)).style(styles::status_bar_style(theme));
    frame.render_widget(status, area);
}
