//! Domain types: draw records, histories, and game configurations.

pub mod draw;
pub mod game;

pub use draw::{DrawHistory, DrawRecord};
pub use game::{BallDomain, GameConfig, GameConfigError, MAIN_BALLS};
