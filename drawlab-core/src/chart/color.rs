//! Count-to-color mapping over a fixed cold→hot gradient.
//!
//! Counts are normalized against the min/max observed in the batch being
//! drawn, not any historical extreme, so colors always use the full ramp for
//! the current window.

use serde::{Deserialize, Serialize};

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Anchor stops, cold to hot: blue → cyan → green → yellow → red.
const GRADIENT: [Rgb; 5] = [
    Rgb::new(0, 0, 191),
    Rgb::new(0, 223, 255),
    Rgb::new(0, 224, 0),
    Rgb::new(255, 224, 0),
    Rgb::new(208, 0, 0),
];

/// Map each count to a gradient color, one per input, same order.
///
/// When min == max (all-zero histogram, or every value drawn equally often)
/// every bin gets the cold end of the ramp instead of dividing by zero.
pub fn colorize(counts: &[u32]) -> Vec<Rgb> {
    let Some(&min) = counts.iter().min() else {
        return Vec::new();
    };
    let max = counts.iter().copied().max().unwrap_or(min);
    let span = (max - min) as f64;
    counts
        .iter()
        .map(|&count| {
            let t = if span == 0.0 {
                0.0
            } else {
                (count - min) as f64 / span
            };
            sample(t)
        })
        .collect()
}

/// Sample the gradient at `t` in `[0, 1]` by piecewise-linear interpolation
/// between the anchor stops. Higher `t` is strictly later along the ramp.
pub fn sample(t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let scaled = t * (GRADIENT.len() - 1) as f64;
    let i = (scaled.floor() as usize).min(GRADIENT.len() - 2);
    let frac = scaled - i as f64;
    lerp(GRADIENT[i], GRADIENT[i + 1], frac)
}

fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let channel = |x: u8, y: u8| -> u8 {
        (f64::from(x) + (f64::from(y) - f64::from(x)) * t).round() as u8
    };
    Rgb::new(
        channel(a.r, b.r),
        channel(a.g, b.g),
        channel(a.b, b.b),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_count_gets_one_color() {
        let colors = colorize(&[5]);
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0], GRADIENT[0]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(colorize(&[]).is_empty());
    }

    #[test]
    fn extremes_are_distinct_and_ordered() {
        let colors = colorize(&[0, 10]);
        assert_eq!(colors.len(), 2);
        assert_ne!(colors[0], colors[1]);
        assert_eq!(colors[0], GRADIENT[0]);
        assert_eq!(colors[1], GRADIENT[GRADIENT.len() - 1]);
    }

    #[test]
    fn all_equal_counts_share_the_cold_end() {
        let colors = colorize(&[3, 3, 3, 3]);
        assert!(colors.iter().all(|&c| c == GRADIENT[0]));
    }

    #[test]
    fn equal_counts_get_equal_colors() {
        let colors = colorize(&[0, 7, 7, 10]);
        assert_eq!(colors[1], colors[2]);
    }

    #[test]
    fn gradient_is_monotone_over_distinct_counts() {
        let counts: Vec<u32> = (0..=20).collect();
        let colors = colorize(&counts);
        for pair in colors.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn sample_hits_every_anchor() {
        let n = (GRADIENT.len() - 1) as f64;
        for (i, &anchor) in GRADIENT.iter().enumerate() {
            assert_eq!(sample(i as f64 / n), anchor);
        }
    }

    #[test]
    fn sample_clamps_out_of_range_input() {
        assert_eq!(sample(-0.5), GRADIENT[0]);
        assert_eq!(sample(1.5), GRADIENT[GRADIENT.len() - 1]);
    }
}
