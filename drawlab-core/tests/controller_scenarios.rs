//! End-to-end controller scenarios: slider events against a small history.

use chrono::NaiveDate;

use drawlab_core::chart::{ChartController, SliderTint};
use drawlab_core::domain::{DrawHistory, DrawRecord, GameConfig};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn history() -> DrawHistory {
    DrawHistory::new(vec![
        DrawRecord {
            date: d(2024, 1, 1),
            main: [10, 2, 3, 4, 5],
            special: 7,
        },
        DrawRecord {
            date: d(2024, 1, 4),
            main: [10, 20, 30, 40, 50],
            special: 9,
        },
        DrawRecord {
            date: d(2024, 1, 8),
            main: [1, 11, 21, 31, 41],
            special: 7,
        },
    ])
}

#[test]
fn full_window_ranks_the_repeat_ahead_of_everything() {
    let controller = ChartController::new(GameConfig::powerball(), history());
    let ranked = &controller.main_view().ranked;
    // Ball 10 was drawn twice; every other ball at most once.
    assert_eq!(ranked.bins()[0], (10, 2));
    // Count-1 bins all rank ahead of count-0 bins.
    let first_zero = ranked
        .bins()
        .iter()
        .position(|&(_, c)| c == 0)
        .unwrap();
    assert!(ranked.bins()[..first_zero].iter().all(|&(_, c)| c >= 1));
    assert!(ranked.bins()[first_zero..].iter().all(|&(_, c)| c == 0));
}

#[test]
fn narrowing_the_range_rebuilds_colors_and_annotations() {
    let mut controller = ChartController::new(GameConfig::powerball(), history());
    controller.set_selected_date(d(2024, 1, 4));

    let wide_colors = controller.main_view().raw_colors.clone();
    controller.set_range(d(2024, 1, 4), d(2024, 1, 8));
    let narrow_colors = controller.main_view().raw_colors.clone();

    // Ball 20 was mid-ramp in the wide window (count 1 of max 2) and tops
    // the ramp once the repeat draw leaves the window.
    assert_ne!(wide_colors[19], narrow_colors[19]);

    // The overlay still points at the 2024-01-04 draw, repositioned for the
    // new ranking.
    let slots = controller.annotations();
    assert_eq!(slots.len(), 6);
    assert_eq!(slots[0].text, "10");
}

#[test]
fn date_slider_walk_updates_tint_and_overlay() {
    let mut controller = ChartController::new(GameConfig::powerball(), history());
    controller.set_range(d(2024, 1, 1), d(2024, 1, 4));

    // Selected is still the last draw (2024-01-08), outside the window.
    assert_eq!(controller.tint(), SliderTint::Red);

    controller.step_selected(-1);
    assert_eq!(controller.view().selected_date, d(2024, 1, 4));
    assert_eq!(controller.tint(), SliderTint::Black);
    assert_eq!(controller.annotations()[5].text, "9");

    controller.step_selected(-1);
    assert_eq!(controller.view().selected_date, d(2024, 1, 1));
    assert_eq!(controller.annotations()[5].text, "7");

    // Walking past the first draw is a no-op.
    controller.step_selected(-1);
    assert_eq!(controller.view().selected_date, d(2024, 1, 1));
}

#[test]
fn range_edges_cannot_cross() {
    let mut controller = ChartController::new(GameConfig::powerball(), history());
    controller.set_range(d(2024, 1, 4), d(2024, 1, 8));

    controller.step_range_end(-1);
    controller.step_range_start(1);
    let view = controller.view();
    assert!(view.range_start < view.range_end);
    assert_eq!(view.range_start, d(2024, 1, 4));
    assert_eq!(view.range_end, d(2024, 1, 8));
}

#[test]
fn empty_history_controller_is_inert() {
    let controller = ChartController::new(GameConfig::powerball(), DrawHistory::default());
    assert_eq!(controller.main_view().histogram.total(), 0);
    assert!(controller.annotations().is_empty());

    let mut controller = controller;
    controller.step_selected(1);
    controller.step_range_start(-1);
    controller.step_range_end(1);
    assert_eq!(controller.main_view().histogram.total(), 0);
}
