//! Ranked histogram — bins reordered by descending frequency.

use crate::chart::histogram::Histogram;

/// Histogram bins sorted by count descending.
///
/// The sort is stable: equal-count bins keep ascending ball-value order, so
/// the "best numbers" listing is reproducible run to run on the same data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedHistogram {
    bins: Vec<(u8, u32)>,
}

impl RankedHistogram {
    pub fn rank(histogram: &Histogram) -> Self {
        let mut bins: Vec<(u8, u32)> = histogram.bins().collect();
        // Vec::sort_by is stable; ties keep their ascending-value input order.
        bins.sort_by(|a, b| b.1.cmp(&a.1));
        Self { bins }
    }

    /// `(value, count)` pairs, highest count first.
    pub fn bins(&self) -> &[(u8, u32)] {
        &self.bins
    }

    /// Counts in ranked order, for colorizing.
    pub fn counts(&self) -> Vec<u32> {
        self.bins.iter().map(|&(_, c)| c).collect()
    }

    /// Zero-based chart position of `value` in the ranked ordering.
    pub fn position_of(&self, value: u8) -> Option<usize> {
        self.bins.iter().position(|&(v, _)| v == value)
    }

    /// The `n` most-drawn bins (fewer if the domain is smaller).
    pub fn top(&self, n: usize) -> &[(u8, u32)] {
        &self.bins[..n.min(self.bins.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::histogram::BallKind;
    use crate::domain::{BallDomain, DrawHistory, DrawRecord};
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn two_record_history() -> DrawHistory {
        DrawHistory::new(vec![
            DrawRecord {
                date: d(2024, 1, 1),
                main: [10, 2, 3, 4, 5],
                special: 1,
            },
            DrawRecord {
                date: d(2024, 1, 3),
                main: [10, 20, 30, 40, 50],
                special: 2,
            },
        ])
    }

    fn build(history: &DrawHistory) -> Histogram {
        Histogram::build(
            history,
            BallDomain::new(70),
            BallKind::Main,
            d(2024, 1, 1),
            d(2024, 1, 3),
        )
    }

    #[test]
    fn twice_drawn_value_ranks_first() {
        let ranked = RankedHistogram::rank(&build(&two_record_history()));
        assert_eq!(ranked.bins()[0], (10, 2));
        assert_eq!(ranked.position_of(10), Some(0));
    }

    #[test]
    fn counts_are_non_increasing() {
        let ranked = RankedHistogram::rank(&build(&two_record_history()));
        let counts = ranked.counts();
        for pair in counts.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn ties_keep_ascending_value_order() {
        let ranked = RankedHistogram::rank(&build(&two_record_history()));
        // The count-1 bins are 2,3,4,5,20,30,40,50 — ascending value order.
        let ones: Vec<u8> = ranked
            .bins()
            .iter()
            .filter(|&&(_, c)| c == 1)
            .map(|&(v, _)| v)
            .collect();
        assert_eq!(ones, vec![2, 3, 4, 5, 20, 30, 40, 50]);
        // The zero-count tail is also ascending.
        let zeros: Vec<u8> = ranked
            .bins()
            .iter()
            .filter(|&&(_, c)| c == 0)
            .map(|&(v, _)| v)
            .collect();
        let mut sorted = zeros.clone();
        sorted.sort_unstable();
        assert_eq!(zeros, sorted);
    }

    #[test]
    fn ranking_is_a_permutation_of_the_domain() {
        let ranked = RankedHistogram::rank(&build(&two_record_history()));
        assert_eq!(ranked.bins().len(), 70);
        let mut values: Vec<u8> = ranked.bins().iter().map(|&(v, _)| v).collect();
        values.sort_unstable();
        let expected: Vec<u8> = (1..=70).collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn top_clamps_to_domain_size() {
        let ranked = RankedHistogram::rank(&build(&two_record_history()));
        assert_eq!(ranked.top(5).len(), 5);
        assert_eq!(ranked.top(1000).len(), 70);
    }
}
