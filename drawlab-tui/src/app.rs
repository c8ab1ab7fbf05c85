//! Application state — single-owner, main-thread only.
//!
//! Everything is driven from the one event loop: no worker thread, no
//! locking. The history is loaded before the loop starts and the controller
//! handles one selector event at a time.

use drawlab_core::chart::ChartController;
use drawlab_core::data::{load_history, DrawCache, NoProgress};
use drawlab_core::domain::GameConfig;

use crate::theme::Theme;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

pub struct AppState {
    pub controller: ChartController,
    pub cache: DrawCache,
    pub theme: Theme,
    pub status: String,
    pub status_level: StatusLevel,
    /// The current history is a synthetic demo, not real draws.
    pub synthetic: bool,
    pub running: bool,
}

impl AppState {
    pub fn new(controller: ChartController, cache: DrawCache) -> Self {
        Self {
            controller,
            cache,
            theme: Theme::default(),
            status: String::new(),
            status_level: StatusLevel::Info,
            synthetic: false,
            running: true,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
        self.status_level = StatusLevel::Info;
    }

    pub fn set_warning(&mut self, message: impl Into<String>) {
        self.status = message.into();
        self.status_level = StatusLevel::Warning;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = message.into();
        self.status_level = StatusLevel::Error;
    }

    /// Switch between the two built-in games, loading the other game's
    /// cached history. With nothing cached the current view stays put.
    pub fn toggle_game(&mut self) {
        let next = if self.controller.game().name == GameConfig::powerball().name {
            GameConfig::mega_millions()
        } else {
            GameConfig::powerball()
        };

        match load_history(None, &self.cache, &next, &NoProgress) {
            Ok(history) => {
                let draws = history.len();
                self.controller = ChartController::new(next, history);
                self.synthetic = false;
                let name = self.controller.game().name.clone();
                self.set_status(format!("{name}: {draws} draws"));
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use drawlab_core::data::synthetic_history;

    fn app() -> AppState {
        let game = GameConfig::powerball();
        let end = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let history = synthetic_history(&game, 20, end, 1);
        let cache = DrawCache::new(std::env::temp_dir().join("drawlab_app_test_cache"));
        AppState::new(ChartController::new(game, history), cache)
    }

    #[test]
    fn status_levels_track_last_message() {
        let mut app = app();
        app.set_status("ok");
        assert_eq!(app.status_level, StatusLevel::Info);
        app.set_error("boom");
        assert_eq!(app.status_level, StatusLevel::Error);
        assert_eq!(app.status, "boom");
    }

    #[test]
    fn toggle_without_cache_keeps_current_game() {
        let mut app = app();
        app.toggle_game();
        assert_eq!(app.controller.game().name, "Powerball");
        assert_eq!(app.status_level, StatusLevel::Error);
    }
}
