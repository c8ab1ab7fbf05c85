//! Theme tokens for the DrawLab TUI.
//!
//! Dark background with high-contrast accents. Bar colors come straight
//! from the core gradient; the theme only covers chrome and text.

use drawlab_core::chart::{Rgb, SliderTint};
use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Near-black background (primary surface)
    pub background: Color,
    /// Cyan accent (focus, slider tracks)
    pub accent: Color,
    /// Red (out-of-range date selection, errors)
    pub alert: Color,
    /// Amber (warnings)
    pub warning: Color,
    /// Steel blue (muted chrome, axis labels)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
    /// Light gray (secondary text)
    pub text_secondary: Color,
    /// Marker bubble background
    pub marker_bg: Color,
    /// Marker bubble text
    pub marker_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(16, 16, 20),
            accent: Color::Rgb(0, 220, 220),
            alert: Color::Rgb(255, 70, 70),
            warning: Color::Rgb(255, 170, 0),
            muted: Color::Rgb(110, 140, 190),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
            marker_bg: Color::Rgb(235, 235, 235),
            marker_fg: Color::Rgb(20, 20, 20),
        }
    }
}

impl Theme {
    /// Bar color from the core gradient.
    pub fn ball_color(&self, rgb: Rgb) -> Color {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }

    /// Draw-date value label color per the controller's tint.
    pub fn tint_color(&self, tint: SliderTint) -> Color {
        match tint {
            SliderTint::Black => self.text_primary,
            SliderTint::Red => self.alert,
        }
    }
}
