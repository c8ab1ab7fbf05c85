//! Frequency histograms over a date window.

use chrono::NaiveDate;

use crate::domain::{BallDomain, DrawHistory};

/// Which ball column a histogram counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallKind {
    Main,
    Special,
}

/// Occurrence counts per ball value over a filtered window.
///
/// Bins cover the whole domain: a value never drawn in the window still has
/// a zero-count bin, so every chart shows the same x axis regardless of the
/// selected range. An empty window is valid and yields all zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    domain: BallDomain,
    counts: Vec<u32>,
}

impl Histogram {
    /// Count draws with date in `[start, end]` inclusive.
    pub fn build(
        history: &DrawHistory,
        domain: BallDomain,
        kind: BallKind,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        let mut counts = vec![0u32; domain.size()];
        for record in history.in_range(start, end) {
            match kind {
                BallKind::Main => {
                    for &ball in &record.main {
                        if domain.contains(ball) {
                            counts[(ball - 1) as usize] += 1;
                        }
                    }
                }
                BallKind::Special => {
                    if domain.contains(record.special) {
                        counts[(record.special - 1) as usize] += 1;
                    }
                }
            }
        }
        Self { domain, counts }
    }

    pub fn domain(&self) -> BallDomain {
        self.domain
    }

    /// Counts in ascending ball-value order.
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// `(value, count)` pairs in ascending ball-value order.
    pub fn bins(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.domain.values().zip(self.counts.iter().copied())
    }

    pub fn count_of(&self, value: u8) -> Option<u32> {
        if !self.domain.contains(value) {
            return None;
        }
        Some(self.counts[(value - 1) as usize])
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }
}
