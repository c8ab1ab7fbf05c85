//! Top-level UI layout — slider row, four chart quadrants, status bar.

pub mod histogram_panel;
pub mod sliders;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use drawlab_core::chart::DomainView;

use crate::app::AppState;
use self::histogram_panel::{HistogramPanel, OverlayMarker};

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(f.area());

    sliders::render(f, chunks[0], app);
    draw_charts(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);
}

/// The 2×2 chart grid: raw and ranked views for main and special domains.
/// The main-domain column gets more width, matching its larger domain.
fn draw_charts(f: &mut Frame, area: Rect, app: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(area);
    let main_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[0]);
    let special_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);

    let game = app.controller.game();
    let main = app.controller.main_view();
    let special = app.controller.special_view();

    f.render_widget(
        raw_panel(
            format!(
                "Ball Numbers ({} to {})",
                game.main_domain.min(),
                game.main_domain.max()
            ),
            main,
            main_markers(app, false),
            app,
        ),
        main_rows[0],
    );
    f.render_widget(
        ranked_panel("Ball Numbers by Frequency".into(), main, main_markers(app, true), app),
        main_rows[1],
    );

    f.render_widget(
        raw_panel(
            format!(
                "Special ({} to {})",
                game.special_domain.min(),
                game.special_domain.max()
            ),
            special,
            special_markers(app, false),
            app,
        ),
        special_rows[0],
    );
    f.render_widget(
        ranked_panel("Special by Frequency".into(), special, special_markers(app, true), app),
        special_rows[1],
    );
}

fn raw_panel<'a>(
    title: String,
    view: &'a DomainView,
    markers: Vec<OverlayMarker>,
    app: &'a AppState,
) -> HistogramPanel<'a> {
    HistogramPanel::new(
        title,
        view.histogram.bins().collect(),
        &view.raw_colors,
        markers,
        view.y_bounds().y_max,
        &app.theme,
    )
}

fn ranked_panel<'a>(
    title: String,
    view: &'a DomainView,
    markers: Vec<OverlayMarker>,
    app: &'a AppState,
) -> HistogramPanel<'a> {
    HistogramPanel::new(
        title,
        view.ranked.bins().to_vec(),
        &view.ranked_colors,
        markers,
        view.y_bounds().y_max,
        &app.theme,
    )
}

/// Overlay markers for the main quadrants. In the raw view a slot's x is the
/// ball value (1-based); in the ranked view it is the rank position.
fn main_markers(app: &AppState, ranked: bool) -> Vec<OverlayMarker> {
    app.controller
        .main_annotations()
        .iter()
        .map(|slot| {
            let marker = if ranked { slot.ranked } else { slot.raw };
            OverlayMarker {
                text: slot.text.clone(),
                bar: if ranked {
                    marker.x as usize
                } else {
                    (marker.x as usize).saturating_sub(1)
                },
                y: marker.y,
            }
        })
        .collect()
}

fn special_markers(app: &AppState, ranked: bool) -> Vec<OverlayMarker> {
    app.controller
        .special_annotation()
        .map(|slot| {
            let marker = if ranked { slot.ranked } else { slot.raw };
            OverlayMarker {
                text: slot.text.clone(),
                bar: if ranked {
                    marker.x as usize
                } else {
                    (marker.x as usize).saturating_sub(1)
                },
                y: marker.y,
            }
        })
        .into_iter()
        .collect()
}
