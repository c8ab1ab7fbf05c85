//! Chart controller — selector events, recompute orchestration, view state.
//!
//! One controller owns the read-only history plus everything derived from
//! it: both domain views (histogram, ranking, colors), the annotation
//! overlay, and the selector state. Events arrive serially from the UI
//! event loop; each one runs to completion before the next is handled.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::chart::annotate::{AnnotationSlot, AnnotationTracker, AxisBounds};
use crate::chart::color::{colorize, Rgb};
use crate::chart::histogram::{BallKind, Histogram};
use crate::chart::rank::RankedHistogram;
use crate::domain::{DrawHistory, GameConfig};

/// Selector state: the inclusive date window plus the single selected date.
///
/// `selected_date` may fall outside the window — that is a valid, flagged
/// state, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
    pub selected_date: NaiveDate,
}

/// Tint of the single-date value label: black while the selected date sits
/// inside the active range, red once it falls outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderTint {
    Black,
    Red,
}

/// What the current event-handling pass is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    RangeChanging,
    DateChanging,
}

/// Everything one histogram pair (raw + ranked quadrant) needs for a redraw.
#[derive(Debug, Clone)]
pub struct DomainView {
    pub histogram: Histogram,
    pub ranked: RankedHistogram,
    pub raw_colors: Vec<Rgb>,
    pub ranked_colors: Vec<Rgb>,
}

impl DomainView {
    fn compute(
        history: &DrawHistory,
        game: &GameConfig,
        kind: BallKind,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        let domain = match kind {
            BallKind::Main => game.main_domain,
            BallKind::Special => game.special_domain,
        };
        let histogram = Histogram::build(history, domain, kind, start, end);
        let ranked = RankedHistogram::rank(&histogram);
        let raw_colors = colorize(histogram.counts());
        let ranked_colors = colorize(&ranked.counts());
        Self {
            histogram,
            ranked,
            raw_colors,
            ranked_colors,
        }
    }

    /// Visible y window shared by the raw and ranked quadrants.
    pub fn y_bounds(&self) -> AxisBounds {
        AxisBounds {
            y_min: 0.0,
            y_max: f64::from(self.histogram.max_count().max(1)),
        }
    }
}

/// Drives the four chart quadrants from the two selectors.
#[derive(Debug)]
pub struct ChartController {
    game: GameConfig,
    history: DrawHistory,
    dates: Vec<NaiveDate>,
    view: ViewState,
    phase: Phase,
    main: DomainView,
    special: DomainView,
    tracker: AnnotationTracker,
    tint: SliderTint,
}

impl ChartController {
    /// Build a controller over a loaded history. The initial window spans
    /// the whole history and the most recent draw is selected.
    pub fn new(game: GameConfig, history: DrawHistory) -> Self {
        let dates = history.dates();
        let range_start = history.first_date().unwrap_or_default();
        let range_end = history.last_date().unwrap_or_default();
        let view = ViewState {
            range_start,
            range_end,
            selected_date: range_end,
        };
        let main = DomainView::compute(&history, &game, BallKind::Main, range_start, range_end);
        let special =
            DomainView::compute(&history, &game, BallKind::Special, range_start, range_end);
        let mut controller = Self {
            game,
            history,
            dates,
            view,
            phase: Phase::Idle,
            main,
            special,
            tracker: AnnotationTracker::new(),
            tint: SliderTint::Black,
        };
        controller.refresh_annotations();
        controller.finish();
        controller
    }

    pub fn game(&self) -> &GameConfig {
        &self.game
    }

    pub fn history(&self) -> &DrawHistory {
        &self.history
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn main_view(&self) -> &DomainView {
        &self.main
    }

    pub fn special_view(&self) -> &DomainView {
        &self.special
    }

    pub fn annotations(&self) -> &[AnnotationSlot] {
        self.tracker.slots()
    }

    pub fn main_annotations(&self) -> &[AnnotationSlot] {
        self.tracker.main_slots()
    }

    pub fn special_annotation(&self) -> Option<&AnnotationSlot> {
        self.tracker.special_slot()
    }

    pub fn tint(&self) -> SliderTint {
        self.tint
    }

    /// Draw dates in ascending order — the selector snap values.
    pub fn snap_dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Range selector moved. Recomputes both domains, then the overlay
    /// (bin geometry moved, so annotation x positions move with it).
    pub fn set_range(&mut self, start: NaiveDate, end: NaiveDate) {
        debug_assert_eq!(self.phase, Phase::Idle);
        self.phase = Phase::RangeChanging;
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        self.view.range_start = start;
        self.view.range_end = end;
        self.recompute_histograms();
        self.refresh_annotations();
        self.finish();
    }

    /// Single-date selector moved. Histograms stay untouched.
    pub fn set_selected_date(&mut self, date: NaiveDate) {
        debug_assert_eq!(self.phase, Phase::Idle);
        self.phase = Phase::DateChanging;
        self.view.selected_date = date;
        self.refresh_annotations();
        self.finish();
    }

    /// Step the single-date selector to the adjacent snapped draw date.
    /// A step past either end of the history is a no-op.
    pub fn step_selected(&mut self, delta: i32) {
        if let Some(date) = self.stepped(self.view.selected_date, delta) {
            self.set_selected_date(date);
        }
    }

    /// Step the window's start edge by one snapped draw date, keeping
    /// `range_start < range_end`. A violating move is a no-op.
    pub fn step_range_start(&mut self, delta: i32) {
        if let Some(start) = self.stepped(self.view.range_start, delta) {
            if start < self.view.range_end {
                self.set_range(start, self.view.range_end);
            }
        }
    }

    /// Step the window's end edge by one snapped draw date, keeping
    /// `range_start < range_end`. A violating move is a no-op.
    pub fn step_range_end(&mut self, delta: i32) {
        if let Some(end) = self.stepped(self.view.range_end, delta) {
            if end > self.view.range_start {
                self.set_range(self.view.range_start, end);
            }
        }
    }

    /// Reset the window to the full history.
    pub fn reset_range(&mut self) {
        if let (Some(first), Some(last)) = (self.history.first_date(), self.history.last_date()) {
            self.set_range(first, last);
        }
    }

    fn recompute_histograms(&mut self) {
        let ViewState {
            range_start,
            range_end,
            ..
        } = self.view;
        self.main = DomainView::compute(
            &self.history,
            &self.game,
            BallKind::Main,
            range_start,
            range_end,
        );
        self.special = DomainView::compute(
            &self.history,
            &self.game,
            BallKind::Special,
            range_start,
            range_end,
        );
    }

    fn refresh_annotations(&mut self) {
        // NoDrawOnDate is expected when the selector sits on a gap day; the
        // previous overlay stays visible.
        let _ = self.tracker.update(
            self.view.selected_date,
            &self.history,
            &self.main.ranked,
            &self.special.ranked,
            self.main.y_bounds(),
            self.special.y_bounds(),
        );
    }

    fn finish(&mut self) {
        let inside = self.view.range_start <= self.view.selected_date
            && self.view.selected_date <= self.view.range_end;
        self.tint = if inside {
            SliderTint::Black
        } else {
            SliderTint::Red
        };
        self.phase = Phase::Idle;
    }

    /// The snapped date `delta` steps away from `from`, or `None` when the
    /// step leaves the history. A `from` that is not itself a snap value
    /// resolves to the nearest date at or after it first.
    fn stepped(&self, from: NaiveDate, delta: i32) -> Option<NaiveDate> {
        if self.dates.is_empty() {
            return None;
        }
        let index = self
            .dates
            .partition_point(|&d| d < from)
            .min(self.dates.len() - 1);
        let target = index as i64 + i64::from(delta);
        if target < 0 || target >= self.dates.len() as i64 {
            return None;
        }
        Some(self.dates[target as usize])
    }
}
