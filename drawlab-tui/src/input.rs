//! Keyboard input dispatch — selector stepping and global keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::AppState;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }

        // Plain arrows step the draw-date selector; Shift moves the window's
        // end edge, Alt its start edge. The controller rejects any step that
        // would cross the edges or leave the history.
        KeyCode::Left => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.controller.step_range_end(-1);
            } else if key.modifiers.contains(KeyModifiers::ALT) {
                app.controller.step_range_start(-1);
            } else {
                app.controller.step_selected(-1);
            }
        }
        KeyCode::Right => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.controller.step_range_end(1);
            } else if key.modifiers.contains(KeyModifiers::ALT) {
                app.controller.step_range_start(1);
            } else {
                app.controller.step_selected(1);
            }
        }

        KeyCode::Char('g') => app.toggle_game(),
        KeyCode::Char('r') => app.controller.reset_range(),
        _ => {}
    }
}

/// Key bindings help text for the status bar.
pub fn key_hints() -> &'static str {
    "←→ date │ Shift+←→ end │ Alt+←→ start │ r reset │ g game │ q quit"
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use drawlab_core::chart::ChartController;
    use drawlab_core::data::{synthetic_history, DrawCache};
    use drawlab_core::domain::GameConfig;

    fn app() -> AppState {
        let game = GameConfig::powerball();
        let end = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let history = synthetic_history(&game, 10, end, 1);
        let cache = DrawCache::new(std::env::temp_dir().join("drawlab_input_test_cache"));
        AppState::new(ChartController::new(game, history), cache)
    }

    #[test]
    fn quit_on_q() {
        let mut app = app();
        handle_key(&mut app, KeyEvent::from(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn quit_on_ctrl_c() {
        let mut app = app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(!app.running);
    }

    #[test]
    fn plain_left_steps_the_date_selector() {
        let mut app = app();
        let before = app.controller.view().selected_date;
        handle_key(&mut app, KeyEvent::from(KeyCode::Left));
        let after = app.controller.view().selected_date;
        assert!(after < before);

        handle_key(&mut app, KeyEvent::from(KeyCode::Right));
        assert_eq!(app.controller.view().selected_date, before);
    }

    #[test]
    fn shift_left_pulls_in_the_range_end() {
        let mut app = app();
        let before = app.controller.view();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT),
        );
        let after = app.controller.view();
        assert!(after.range_end < before.range_end);
        assert_eq!(after.range_start, before.range_start);
    }

    #[test]
    fn alt_right_pushes_the_range_start() {
        let mut app = app();
        let before = app.controller.view();
        handle_key(&mut app, KeyEvent::new(KeyCode::Right, KeyModifiers::ALT));
        let after = app.controller.view();
        assert!(after.range_start > before.range_start);
        assert_eq!(after.range_end, before.range_end);
    }

    #[test]
    fn reset_restores_the_full_window() {
        let mut app = app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT),
        );
        handle_key(&mut app, KeyEvent::from(KeyCode::Char('r')));
        let view = app.controller.view();
        assert_eq!(Some(view.range_start), app.controller.history().first_date());
        assert_eq!(Some(view.range_end), app.controller.history().last_date());
    }
}
