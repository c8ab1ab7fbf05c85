//! Synthetic draw histories for offline demos and tests.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

use crate::domain::{DrawHistory, DrawRecord, GameConfig, MAIN_BALLS};

/// Generate `draws` records ending at `end`, spaced like the real twice-to-
/// thrice-weekly schedule. Deterministic for a given seed.
///
/// Main balls within one draw are distinct, matching real drawings.
pub fn synthetic_history(game: &GameConfig, draws: usize, end: NaiveDate, seed: u64) -> DrawHistory {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::with_capacity(draws);
    let mut date = end;

    for _ in 0..draws {
        let picks = sample(&mut rng, game.main_domain.size(), MAIN_BALLS);
        let mut main = [0u8; MAIN_BALLS];
        for (slot, pick) in main.iter_mut().zip(picks.iter()) {
            *slot = pick as u8 + 1;
        }
        let special = rng.gen_range(1..=game.special_domain.max());

        records.push(DrawRecord {
            date,
            main,
            special,
        });
        date = date - Duration::days(rng.gen_range(3..=4));
    }

    DrawHistory::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn deterministic_for_a_seed() {
        let game = GameConfig::powerball();
        let a = synthetic_history(&game, 50, end(), 42);
        let b = synthetic_history(&game, 50, end(), 42);
        assert_eq!(a.records(), b.records());
    }

    #[test]
    fn different_seeds_differ() {
        let game = GameConfig::powerball();
        let a = synthetic_history(&game, 50, end(), 42);
        let b = synthetic_history(&game, 50, end(), 43);
        assert_ne!(a.records(), b.records());
    }

    #[test]
    fn all_balls_are_in_domain_and_mains_distinct() {
        let game = GameConfig::mega_millions();
        let history = synthetic_history(&game, 200, end(), 7);
        assert_eq!(history.len(), 200);
        for record in history.records() {
            for &ball in &record.main {
                assert!(game.main_domain.contains(ball));
            }
            assert!(game.special_domain.contains(record.special));
            let mut sorted = record.main;
            sorted.sort_unstable();
            sorted.windows(2).for_each(|w| assert_ne!(w[0], w[1]));
        }
    }

    #[test]
    fn ends_at_the_requested_date() {
        let game = GameConfig::powerball();
        let history = synthetic_history(&game, 10, end(), 1);
        assert_eq!(history.last_date(), Some(end()));
    }
}
