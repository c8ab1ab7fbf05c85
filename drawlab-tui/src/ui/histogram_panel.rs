//! Histogram quadrant — colored frequency bars with overlay markers.
//!
//! Bars render one terminal column each when the quadrant is wide enough;
//! narrower quadrants fold adjacent bins into one column and keep the
//! hottest count of the fold. Overlay markers are drawn last so the
//! selected draw's balls sit on top of the bars.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};

use drawlab_core::chart::Rgb;

use crate::theme::Theme;

/// One overlay label in bar coordinates: `bar` indexes the display order,
/// `y` is in count coordinates (0 at the axis, `y_max` at the top).
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayMarker {
    pub text: String,
    pub bar: usize,
    pub y: f64,
}

/// One chart quadrant.
pub struct HistogramPanel<'a> {
    title: String,
    bars: Vec<(u8, u32)>,
    colors: &'a [Rgb],
    markers: Vec<OverlayMarker>,
    y_max: f64,
    theme: &'a Theme,
}

impl<'a> HistogramPanel<'a> {
    pub fn new(
        title: String,
        bars: Vec<(u8, u32)>,
        colors: &'a [Rgb],
        markers: Vec<OverlayMarker>,
        y_max: f64,
        theme: &'a Theme,
    ) -> Self {
        Self {
            title,
            bars,
            colors,
            markers,
            y_max: y_max.max(1.0),
            theme,
        }
    }
}

impl Widget for HistogramPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.muted))
            .style(Style::default().bg(self.theme.background));

        let inner = block.inner(area);
        block.render(area, buf);

        if self.bars.is_empty() || inner.width < 8 || inner.height < 4 {
            return;
        }

        // Bottom row holds the axis extremes; everything above is plot.
        let plot_h = inner.height - 1;
        let plot_bottom = inner.y + plot_h - 1;

        let n = self.bars.len();
        let step = n.div_ceil(inner.width as usize);
        let n_cols = n.div_ceil(step);

        for col in 0..n_cols {
            let lo = col * step;
            let hi = (lo + step).min(n);
            let count = self.bars[lo..hi]
                .iter()
                .map(|&(_, c)| c)
                .max()
                .unwrap_or(0);
            let color = self
                .colors
                .get(lo)
                .copied()
                .unwrap_or(Rgb::new(128, 128, 128));

            let height =
                (f64::from(count) / self.y_max * f64::from(plot_h)).round() as u16;
            let x = inner.x + col as u16;
            for h in 0..height.min(plot_h) {
                let y = plot_bottom - h;
                buf.set_string(
                    x,
                    y,
                    "\u{2588}", // █
                    Style::default().fg(self.theme.ball_color(color)),
                );
            }
        }

        // Axis extremes under the plot.
        let axis_y = inner.y + plot_h;
        let left_label = self.bars[0].0.to_string();
        let right_label = self.bars[n - 1].0.to_string();
        let axis_style = Style::default().fg(self.theme.muted);
        buf.set_string(inner.x, axis_y, &left_label, axis_style);
        let right_x = inner
            .right()
            .saturating_sub(right_label.len() as u16);
        if right_x > inner.x + left_label.len() as u16 {
            buf.set_string(right_x, axis_y, &right_label, axis_style);
        }

        // Overlay markers on top of the bars.
        let marker_style = Style::default()
            .fg(self.theme.marker_fg)
            .bg(self.theme.marker_bg)
            .add_modifier(Modifier::BOLD);
        for marker in &self.markers {
            let col = (marker.bar / step) as u16;
            let x = inner.x + col.min(inner.width - 1);
            let frac = (marker.y / self.y_max).clamp(0.0, 1.0);
            let rise = (frac * f64::from(plot_h - 1)).round() as u16;
            let y = plot_bottom - rise;
            if x + marker.text.len() as u16 <= inner.right() {
                buf.set_string(x, y, &marker.text, marker_style);
            }
        }
    }
}
