//! Bottom status bar: game, draw count, last message, key hints.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::input;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;

    let message_style = match app.status_level {
        StatusLevel::Info => Style::default().fg(theme.text_secondary),
        StatusLevel::Warning => Style::default().fg(theme.warning),
        StatusLevel::Error => Style::default().fg(theme.alert),
    };

    let game = app.controller.game().name.clone();
    let draws = app.controller.history().len();
    let source = if app.synthetic { " (synthetic)" } else { "" };

    let mut spans = vec![
        Span::styled(
            format!(" {game} \u{2502} {draws} draws{source} \u{2502} "),
            Style::default().fg(theme.text_primary),
        ),
        Span::styled(app.status.clone(), message_style),
    ];

    // Right-pad the hints if there is room left.
    let used: usize = spans.iter().map(|s| s.content.len()).sum();
    let hints = input::key_hints();
    if used + hints.len() + 2 <= area.width as usize {
        let pad = area.width as usize - used - hints.len() - 1;
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(hints, Style::default().fg(theme.muted)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
