//! Date selectors — the range slider and the single-date slider rows.
//!
//! Both sliders snap to actual draw dates, so handle positions come from the
//! date's index among the snap values, not from calendar arithmetic.

use chrono::NaiveDate;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::AppState;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_range_slider(f, halves[0], app);
    render_date_slider(f, halves[1], app);
}

fn render_range_slider(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let view = app.controller.view();
    let dates = app.controller.snap_dates();

    let value = format!(
        "{} to {}",
        view.range_start.format("%m/%d/%y"),
        view.range_end.format("%m/%d/%y")
    );
    let title = Line::from(vec![
        Span::styled(" Date Range ", Style::default().fg(theme.text_primary)),
        Span::styled(value, Style::default().fg(theme.text_secondary)),
        Span::raw(" "),
    ]);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.muted));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 4 || inner.height < 1 {
        return;
    }

    let buf = f.buffer_mut();
    let y = inner.y;
    let start_x = handle_x(inner, fraction(dates, view.range_start));
    let end_x = handle_x(inner, fraction(dates, view.range_end));

    for x in inner.x..inner.right() {
        let (symbol, style) = if x > start_x && x < end_x {
            ("\u{2550}", Style::default().fg(theme.accent)) // ═
        } else {
            ("\u{2500}", Style::default().fg(theme.muted)) // ─
        };
        buf.set_string(x, y, symbol, style);
    }
    let handle = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);
    buf.set_string(start_x, y, "\u{2503}", handle); // ┃
    buf.set_string(end_x, y, "\u{2503}", handle);
}

fn render_date_slider(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let view = app.controller.view();
    let dates = app.controller.snap_dates();

    let value = view.selected_date.format("%m/%d/%y").to_string();
    let title = Line::from(vec![
        Span::styled(" Draw Date ", Style::default().fg(theme.text_primary)),
        Span::styled(
            value,
            Style::default()
                .fg(theme.tint_color(app.controller.tint()))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ]);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.muted));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 4 || inner.height < 1 {
        return;
    }

    let buf = f.buffer_mut();
    let y = inner.y;
    for x in inner.x..inner.right() {
        buf.set_string(x, y, "\u{2500}", Style::default().fg(theme.muted));
    }
    let x = handle_x(inner, fraction(dates, view.selected_date));
    buf.set_string(
        x,
        y,
        "\u{25CF}", // ●
        Style::default()
            .fg(theme.tint_color(app.controller.tint()))
            .add_modifier(Modifier::BOLD),
    );
}

/// Position of `date` among the snap values, as a fraction in `[0, 1]`.
pub(crate) fn fraction(dates: &[NaiveDate], date: NaiveDate) -> f64 {
    if dates.len() < 2 {
        return 0.0;
    }
    let index = dates
        .partition_point(|&d| d < date)
        .min(dates.len() - 1);
    index as f64 / (dates.len() - 1) as f64
}

fn handle_x(inner: Rect, frac: f64) -> u16 {
    inner.x + (frac * f64::from(inner.width - 1)).round() as u16
}
