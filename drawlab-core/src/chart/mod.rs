//! Chart core: histogram build → rank → colorize, annotation tracking, and
//! the controller that keeps both selectors and all four chart views in sync.

pub mod annotate;
pub mod color;
pub mod controller;
pub mod histogram;
pub mod rank;

pub use annotate::{AnnotationError, AnnotationSlot, AnnotationTracker, AxisBounds, Marker};
pub use color::{colorize, Rgb};
pub use controller::{ChartController, DomainView, SliderTint, ViewState};
pub use histogram::{BallKind, Histogram};
pub use rank::RankedHistogram;
