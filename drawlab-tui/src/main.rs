//! DrawLab TUI — four-quadrant lottery histogram charts with date sliders.
//!
//! Quadrants:
//! - Raw main-ball histogram and its rank-sorted twin
//! - Raw special-ball histogram and its rank-sorted twin
//!
//! The range slider picks the counted date window; the draw-date slider
//! overlays the balls drawn on one date across all four quadrants. The TUI
//! never touches the network: it charts the CLI's cached downloads and
//! falls back to a synthetic demo history when nothing is cached.

mod app;
mod input;
mod persistence;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use drawlab_core::chart::ChartController;
use drawlab_core::data::{load_history, synthetic_history, DrawCache, NoProgress};
use drawlab_core::domain::GameConfig;

use crate::app::AppState;

const DEMO_DRAWS: usize = 156;
const DEMO_SEED: u64 = 0x5EED;

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Paths
    let cache = DrawCache::new("data");
    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("drawlab")
        .join("state.json");

    // Load persisted state and the matching game's cached history.
    let persisted = persistence::load(&state_path);
    let game = GameConfig::builtin(&persisted.game).unwrap_or_else(GameConfig::powerball);

    let (history, synthetic) = match load_history(None, &cache, &game, &NoProgress) {
        Ok(history) => (history, false),
        Err(_) => {
            let end = chrono::Local::now().date_naive();
            (synthetic_history(&game, DEMO_DRAWS, end, DEMO_SEED), true)
        }
    };

    let draws = history.len();
    let mut app = AppState::new(ChartController::new(game, history), cache);
    if synthetic {
        app.synthetic = true;
        app.set_warning("no cached draw data — synthetic demo (run `drawlab download powerball`)");
    } else {
        app.set_status(format!("{draws} draws loaded"));
        persistence::apply(&mut app, persisted);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save selector state before exit
    let persisted = persistence::extract(&app);
    let _ = persistence::save(&state_path, &persisted);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick). Events
        //    are handled one at a time; each selector event finishes its
        //    recompute before the next is read.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
