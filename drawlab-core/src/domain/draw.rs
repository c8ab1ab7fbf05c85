//! Draw records — the fundamental lottery data unit.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::game::MAIN_BALLS;

/// One lottery drawing: five main balls and one special ball on a date.
///
/// Balls are stored in file order, not sorted. Domain membership is enforced
/// at the ingest boundary, so a loaded record is always within its game's
/// configured ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRecord {
    pub date: NaiveDate,
    pub main: [u8; MAIN_BALLS],
    pub special: u8,
}

/// Full draw history for one game, sorted ascending by date.
///
/// Built once at load time, read-only thereafter. Dates are unique per day
/// in practice (one draw per date) but the structure does not enforce it.
#[derive(Debug, Clone, Default)]
pub struct DrawHistory {
    records: Vec<DrawRecord>,
}

impl DrawHistory {
    /// Build a history from records in any order. Sorts ascending by date.
    pub fn new(mut records: Vec<DrawRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records }
    }

    pub fn records(&self) -> &[DrawRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.first().map(|r| r.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.date)
    }

    /// All draw dates in ascending order — the selector snap values.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.records.iter().map(|r| r.date).collect()
    }

    /// Records with date in `[start, end]` inclusive.
    ///
    /// An empty window is valid and yields an empty slice.
    pub fn in_range(&self, start: NaiveDate, end: NaiveDate) -> &[DrawRecord] {
        let lo = self.records.partition_point(|r| r.date < start);
        let hi = self.records.partition_point(|r| r.date <= end);
        &self.records[lo..hi]
    }

    /// The record drawn in the half-day window starting at `date`.
    ///
    /// Source timestamps can carry time-of-day noise, so the lookup window
    /// is `[date 00:00, date 12:00)` rather than exact equality.
    pub fn draw_on(&self, date: NaiveDate) -> Option<&DrawRecord> {
        let start = date.and_hms_opt(0, 0, 0).unwrap();
        let end = start + Duration::hours(12);
        self.records.iter().find(|r| {
            let ts = r.date.and_hms_opt(0, 0, 0).unwrap();
            start <= ts && ts < end
        })
    }
}
