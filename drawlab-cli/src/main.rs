//! DrawLab CLI — download, summarize, and cache management commands.
//!
//! Commands:
//! - `download` — fetch a game's draw history CSV and cache it
//! - `summary` — print the ranked "best numbers" table for a date window
//! - `cache status` — report cached games, date ranges, and row counts
//! - `cache clean` — remove cached draw files

mod console;

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use crossterm::style::{Color, Stylize};

use drawlab_core::chart::{colorize, BallKind, Histogram, RankedHistogram};
use drawlab_core::data::{
    download_game, load_history, synthetic_history, DrawCache, HttpCsvProvider,
};
use drawlab_core::domain::{DrawHistory, GameConfig};

use crate::console::{Console, ConsoleProgress};

#[derive(Parser)]
#[command(name = "drawlab", about = "DrawLab CLI — lottery draw history charts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a game's full draw history and cache it.
    Download {
        /// Built-in game name: powerball, megamillions.
        game: String,

        /// TOML file defining a custom game (overrides the name lookup).
        #[arg(long)]
        game_file: Option<PathBuf>,

        /// Force re-download even if cached.
        #[arg(long, default_value_t = false)]
        force: bool,

        /// Cache directory. Defaults to ./data.
        #[arg(long, default_value = "data")]
        cache_dir: PathBuf,
    },
    /// Print the ranked number frequencies for a date window.
    Summary {
        /// Built-in game name: powerball, megamillions.
        game: String,

        /// TOML file defining a custom game (overrides the name lookup).
        #[arg(long)]
        game_file: Option<PathBuf>,

        /// Window start (YYYY-MM-DD). Defaults to the first cached draw.
        #[arg(long)]
        start: Option<String>,

        /// Window end (YYYY-MM-DD). Defaults to the last cached draw.
        #[arg(long)]
        end: Option<String>,

        /// How many top main balls to list.
        #[arg(long, default_value_t = 10)]
        top: usize,

        /// Offline mode: cache only, no network fallback.
        #[arg(long, default_value_t = false)]
        offline: bool,

        /// Use a seeded synthetic history instead of real draws.
        #[arg(long, default_value_t = false)]
        synthetic: bool,

        /// Cache directory. Defaults to ./data.
        #[arg(long, default_value = "data")]
        cache_dir: PathBuf,
    },
    /// Cache management commands.
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand)]
enum CacheAction {
    /// Report cached games, date ranges, and row counts.
    Status {
        /// Cache directory. Defaults to ./data.
        #[arg(long, default_value = "data")]
        cache_dir: PathBuf,
    },
    /// Remove cached draw files.
    Clean {
        /// Remove only this game (built-in name). Omit to remove everything.
        #[arg(long)]
        game: Option<String>,

        /// Cache directory. Defaults to ./data.
        #[arg(long, default_value = "data")]
        cache_dir: PathBuf,

        /// Actually delete (without this flag, only previews what would be removed).
        #[arg(long, default_value_t = false)]
        confirm: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let console = Console::new();

    match cli.command {
        Commands::Download {
            game,
            game_file,
            force,
            cache_dir,
        } => run_download(&console, &game, game_file.as_deref(), force, &cache_dir),
        Commands::Summary {
            game,
            game_file,
            start,
            end,
            top,
            offline,
            synthetic,
            cache_dir,
        } => run_summary(
            &console,
            &game,
            game_file.as_deref(),
            start.as_deref(),
            end.as_deref(),
            top,
            offline,
            synthetic,
            &cache_dir,
        ),
        Commands::Cache { action } => match action {
            CacheAction::Status { cache_dir } => run_cache_status(&console, &cache_dir),
            CacheAction::Clean {
                game,
                cache_dir,
                confirm,
            } => run_cache_clean(&console, game.as_deref(), &cache_dir, confirm),
        },
    }
}

fn resolve_game(name: &str, game_file: Option<&Path>) -> Result<GameConfig> {
    if let Some(path) = game_file {
        return Ok(GameConfig::from_file(path)?);
    }
    match GameConfig::builtin(name) {
        Some(game) => Ok(game),
        None => bail!(
            "unknown game '{name}'. Valid: {} (or pass --game-file)",
            GameConfig::builtin_names().join(", ")
        ),
    }
}

fn run_download(
    console: &Console,
    game: &str,
    game_file: Option<&Path>,
    force: bool,
    cache_dir: &Path,
) -> Result<()> {
    let game = resolve_game(game, game_file)?;
    let cache = DrawCache::new(cache_dir);
    let provider = HttpCsvProvider::new();
    let progress = ConsoleProgress { console: *console };

    match download_game(&provider, &cache, &game, force, &progress) {
        Ok(outcome) => {
            let (start, end) = outcome.date_range;
            let origin = if outcome.from_cache {
                "already cached"
            } else {
                "downloaded"
            };
            console.done(format!(
                "{}: {} draws ({start} to {end}), {origin}",
                game.name, outcome.rows
            ));
            Ok(())
        }
        Err(e) => {
            console.error(e.to_string());
            std::process::exit(1);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run_summary(
    console: &Console,
    game: &str,
    game_file: Option<&Path>,
    start: Option<&str>,
    end: Option<&str>,
    top: usize,
    offline: bool,
    synthetic: bool,
    cache_dir: &Path,
) -> Result<()> {
    let game = resolve_game(game, game_file)?;

    let history = if synthetic {
        let end = chrono::Local::now().date_naive();
        console.warn("using a seeded synthetic history, not real draws");
        synthetic_history(&game, 156, end, 0x5EED)
    } else {
        let cache = DrawCache::new(cache_dir);
        let provider = HttpCsvProvider::new();
        let provider_ref: Option<&dyn drawlab_core::data::DrawProvider> =
            if offline { None } else { Some(&provider) };
        let progress = ConsoleProgress { console: *console };
        match load_history(provider_ref, &cache, &game, &progress) {
            Ok(history) => history,
            Err(e) => {
                console.error(e.to_string());
                std::process::exit(1);
            }
        }
    };

    let window_start = parse_date_arg(start)?.or(history.first_date());
    let window_end = parse_date_arg(end)?.or(history.last_date());
    let (Some(window_start), Some(window_end)) = (window_start, window_end) else {
        bail!("history is empty");
    };

    print_summary(console, &game, &history, window_start, window_end, top);
    Ok(())
}

fn parse_date_arg(arg: Option<&str>) -> Result<Option<NaiveDate>> {
    Ok(arg
        .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .transpose()?)
}

fn print_summary(
    console: &Console,
    game: &GameConfig,
    history: &DrawHistory,
    start: NaiveDate,
    end: NaiveDate,
    top: usize,
) {
    let in_window = history.in_range(start, end).len();
    println!();
    println!("=== {} — {start} to {end} ({in_window} draws) ===", game.name);

    let main = Histogram::build(history, game.main_domain, BallKind::Main, start, end);
    let special = Histogram::build(history, game.special_domain, BallKind::Special, start, end);

    println!();
    println!(
        "Main balls — top {} of {}:",
        top.min(game.main_domain.size()),
        game.main_domain.size()
    );
    print_ranked_table(console, &main, top);

    println!();
    println!(
        "Special — top {} of {}:",
        top.min(game.special_domain.size()),
        game.special_domain.size()
    );
    print_ranked_table(console, &special, top);
    println!();
}

fn print_ranked_table(console: &Console, histogram: &Histogram, top: usize) {
    let ranked = RankedHistogram::rank(histogram);
    let colors = colorize(&ranked.counts());
    let max = histogram.max_count().max(1);

    for (i, &(value, count)) in ranked.top(top).iter().enumerate() {
        let bar_len = (count * 30 / max) as usize;
        let bar = "\u{2587}".repeat(bar_len);
        let rgb = colors[i];
        let bar = if console.colored() {
            format!(
                "{}",
                bar.with(Color::Rgb {
                    r: rgb.r,
                    g: rgb.g,
                    b: rgb.b
                })
            )
        } else {
            bar
        };
        println!("{:>4}. ball {:>2} \u{00d7} {:<5} {bar}", i + 1, value, count);
    }
}

fn run_cache_status(console: &Console, cache_dir: &Path) -> Result<()> {
    if !cache_dir.exists() {
        console.warn(format!(
            "cache directory does not exist: {}",
            cache_dir.display()
        ));
        return Ok(());
    }

    let cache = DrawCache::new(cache_dir);
    let metas = cache.status();
    if metas.is_empty() {
        console.warn(format!("cache is empty: {}", cache_dir.display()));
        return Ok(());
    }

    println!("Cache: {}", cache_dir.display());
    println!();
    println!(
        "{:<16} {:<26} {:>8} {:<20}",
        "Game", "Date Range", "Draws", "Fetched"
    );
    println!("{}", "-".repeat(72));
    for meta in &metas {
        println!(
            "{:<16} {:<26} {:>8} {:<20}",
            meta.game,
            format!("{} to {}", meta.start_date, meta.end_date),
            meta.rows,
            meta.fetched_at.format("%Y-%m-%d %H:%M"),
        );
    }

    Ok(())
}

fn run_cache_clean(
    console: &Console,
    game: Option<&str>,
    cache_dir: &Path,
    confirm: bool,
) -> Result<()> {
    if !cache_dir.exists() {
        console.warn(format!(
            "cache directory does not exist: {}",
            cache_dir.display()
        ));
        return Ok(());
    }

    if let Some(name) = game {
        let game = resolve_game(name, None)?;
        if !confirm {
            console.info(format!(
                "would remove {} — pass --confirm to actually delete",
                game.name
            ));
            return Ok(());
        }
        DrawCache::new(cache_dir).remove(&game)?;
        console.done(format!("removed {}", game.name));
        return Ok(());
    }

    // No game given: sweep every cached draw file in the directory.
    let mut to_remove: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(cache_dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.ends_with(".csv") || name.ends_with(".meta.json") {
            to_remove.push(entry.path());
        }
    }

    if to_remove.is_empty() {
        console.info("nothing to remove");
        return Ok(());
    }

    for path in &to_remove {
        console.info(format!("  {}", path.display()));
    }
    if !confirm {
        console.info("dry run — pass --confirm to actually delete");
        return Ok(());
    }
    for path in &to_remove {
        std::fs::remove_file(path)?;
    }
    console.done(format!("removed {} file(s)", to_remove.len()));
    Ok(())
}
