//! App state persistence — JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use drawlab_core::chart::ViewState;

use crate::app::AppState;

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub game: String,
    pub view: Option<ViewState>,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            game: "powerball".into(),
            view: None,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        game: app.controller.game().name.clone(),
        view: Some(app.controller.view()),
    }
}

/// Apply persisted selector state. The controller clamps and normalizes, so
/// stale dates from an older cache degrade to sensible views.
pub fn apply(app: &mut AppState, state: PersistedState) {
    if let Some(view) = state.view {
        app.controller.set_range(view.range_start, view.range_end);
        app.controller.set_selected_date(view.selected_date);
    }
}
