//! Download orchestration: fetch → parse → cache, and cached-history loads.

use chrono::NaiveDate;

use crate::data::cache::{CacheMeta, DrawCache};
use crate::data::ingest::parse_draw_csv;
use crate::data::provider::{DataError, DownloadProgress, DrawProvider};
use crate::domain::{DrawHistory, GameConfig};

/// Result of a download run.
#[derive(Debug)]
pub struct DownloadOutcome {
    pub meta: CacheMeta,
    pub rows: usize,
    pub date_range: (NaiveDate, NaiveDate),
    pub from_cache: bool,
}

/// Fetch a game's history and cache it.
///
/// A fresh cache entry short-circuits the network unless `force` is set.
/// The payload is parsed before it is cached, so a malformed export never
/// replaces a good cached file.
pub fn download_game(
    provider: &dyn DrawProvider,
    cache: &DrawCache,
    game: &GameConfig,
    force: bool,
    progress: &dyn DownloadProgress,
) -> Result<DownloadOutcome, DataError> {
    if !force {
        if let Ok(body) = cache.load(game) {
            let report = parse_draw_csv(game, &body)?;
            let meta = cache.meta(game).ok_or_else(|| DataError::NoCachedData {
                game: game.name.clone(),
            })?;
            return Ok(DownloadOutcome {
                rows: report.rows,
                date_range: (meta.start_date, meta.end_date),
                meta,
                from_cache: true,
            });
        }
    }

    progress.on_fetch_start(&game.name, &game.csv_url);
    let payload = provider.fetch(game)?;
    let report = parse_draw_csv(game, &payload.body)?;
    progress.on_rows_parsed(&game.name, report.rows);

    let meta = cache.store(game, &payload.body, &report)?;
    progress.on_cached(&game.name, &cache.csv_path(game));

    Ok(DownloadOutcome {
        rows: report.rows,
        date_range: (meta.start_date, meta.end_date),
        meta,
        from_cache: false,
    })
}

/// Load a game's history for charting: cache first, then the provider.
///
/// With no provider (offline), a cache miss surfaces as `NoCachedData`.
pub fn load_history(
    provider: Option<&dyn DrawProvider>,
    cache: &DrawCache,
    game: &GameConfig,
    progress: &dyn DownloadProgress,
) -> Result<DrawHistory, DataError> {
    match cache.load(game) {
        Ok(body) => Ok(parse_draw_csv(game, &body)?.history),
        Err(DataError::NoCachedData { .. }) => match provider {
            Some(provider) => {
                download_game(provider, cache, game, false, progress)?;
                let body = cache.load(game)?;
                Ok(parse_draw_csv(game, &body)?.history)
            }
            None => Err(DataError::NoCachedData {
                game: game.name.clone(),
            }),
        },
        Err(e) => Err(e),
    }
}
