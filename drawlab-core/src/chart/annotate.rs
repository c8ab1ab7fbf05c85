//! Annotation overlay — marker labels for one selected draw date.
//!
//! Each of the six balls drawn on the selected date gets a floating label on
//! the raw histogram and on the rank-sorted histogram. The tracker owns a
//! fixed slot table so repeated selector ticks update labels in place rather
//! than leaking one overlay object per tick.

use chrono::NaiveDate;
use thiserror::Error;

use crate::chart::rank::RankedHistogram;
use crate::domain::{DrawHistory, MAIN_BALLS};

/// Total overlay labels: five main balls plus the special ball.
pub const SLOT_COUNT: usize = MAIN_BALLS + 1;

/// Visible y window of a chart quadrant, in axis (count) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub y_min: f64,
    pub y_max: f64,
}

/// One marker position in axis coordinates.
///
/// `x` is the ball value in the raw view and the zero-based rank position in
/// the ranked view; `y` is a count-axis offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
}

/// A single overlay label: the ball text plus its marker in the raw-order
/// chart and in the rank-sorted chart.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationSlot {
    pub text: String,
    pub raw: Marker,
    pub ranked: Marker,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnnotationError {
    #[error("no draw recorded on {0}")]
    NoDrawOnDate(NaiveDate),
}

/// Tracks the six overlay labels across selector ticks.
///
/// The first successful update creates the slots; every later one reuses the
/// same slot identities and only rewrites text and positions. A failed
/// lookup leaves the previous contents untouched so the caller can keep the
/// prior overlay visible.
#[derive(Debug, Default)]
pub struct AnnotationTracker {
    slots: Vec<AnnotationSlot>,
}

impl AnnotationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute all marker positions for the draw on `selected`.
    pub fn update(
        &mut self,
        selected: NaiveDate,
        history: &DrawHistory,
        main_ranked: &RankedHistogram,
        special_ranked: &RankedHistogram,
        main_bounds: AxisBounds,
        special_bounds: AxisBounds,
    ) -> Result<&[AnnotationSlot], AnnotationError> {
        let record = history
            .draw_on(selected)
            .ok_or(AnnotationError::NoDrawOnDate(selected))?;

        self.ensure_slots();

        for (i, &ball) in record.main.iter().enumerate() {
            let y = spread(main_bounds, i);
            let ranked_x = main_ranked
                .position_of(ball)
                .expect("ranked bins cover the whole domain") as f64;
            let slot = &mut self.slots[i];
            slot.text = ball.to_string();
            slot.raw = Marker {
                x: f64::from(ball),
                y,
            };
            slot.ranked = Marker { x: ranked_x, y };
        }

        // The special label sits at the third spread step, clear of the
        // bottom edge in the narrower special quadrants.
        let y = spread(special_bounds, 2);
        let ranked_x = special_ranked
            .position_of(record.special)
            .expect("ranked bins cover the whole domain") as f64;
        let slot = &mut self.slots[MAIN_BALLS];
        slot.text = record.special.to_string();
        slot.raw = Marker {
            x: f64::from(record.special),
            y,
        };
        slot.ranked = Marker { x: ranked_x, y };

        Ok(&self.slots)
    }

    /// Current slot contents. Empty until the first successful update.
    pub fn slots(&self) -> &[AnnotationSlot] {
        &self.slots
    }

    /// The five main-ball labels.
    pub fn main_slots(&self) -> &[AnnotationSlot] {
        &self.slots[..self.slots.len().min(MAIN_BALLS)]
    }

    /// The special-ball label, once created.
    pub fn special_slot(&self) -> Option<&AnnotationSlot> {
        self.slots.get(MAIN_BALLS)
    }

    fn ensure_slots(&mut self) {
        if self.slots.is_empty() {
            let empty = AnnotationSlot {
                text: String::new(),
                raw: Marker { x: 0.0, y: 0.0 },
                ranked: Marker { x: 0.0, y: 0.0 },
            };
            self.slots = vec![empty; SLOT_COUNT];
        }
    }
}

/// Evenly spread y offsets: step `index` of `MAIN_BALLS` across the visible
/// y range, starting at the bottom edge.
fn spread(bounds: AxisBounds, index: usize) -> f64 {
    bounds.y_min + (index as f64 / MAIN_BALLS as f64) * (bounds.y_max - bounds.y_min)
}
