//! Draw-source trait and structured error types.
//!
//! The DrawProvider trait abstracts over where a game's CSV export comes
//! from (state lottery site, a local file in tests) so the download path can
//! be exercised without the network.

use std::path::Path;

use thiserror::Error;

use crate::domain::GameConfig;

/// Raw CSV payload from a draw source, before parsing and validation.
#[derive(Debug, Clone)]
pub struct FetchPayload {
    pub game: String,
    pub body: String,
    pub source: DrawSource,
}

/// Where a history came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawSource {
    StateLottery,
    LocalFile,
    Cache,
    Synthetic,
}

/// Structured error types for data operations.
///
/// Designed to be displayable in both CLI and TUI contexts. Nothing in the
/// chart core produces these; they belong to the load boundary.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("HTTP {status} from draw source for '{game}'")]
    HttpStatus { game: String, status: u16 },

    #[error("row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("empty draw file for '{game}'")]
    EmptyFile { game: String },

    #[error("cache error: {0}")]
    CacheError(String),

    #[error("no cached data for '{game}' — run `download {game}` first")]
    NoCachedData { game: String },

    #[error("data error: {0}")]
    Other(String),
}

/// Trait for draw-history sources.
pub trait DrawProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch the full CSV export for a game.
    fn fetch(&self, game: &GameConfig) -> Result<FetchPayload, DataError>;
}

/// Progress callbacks for a download run.
pub trait DownloadProgress {
    /// Called before the network fetch starts.
    fn on_fetch_start(&self, game: &str, url: &str);

    /// Called once the payload parsed cleanly.
    fn on_rows_parsed(&self, game: &str, rows: usize);

    /// Called after the payload was written to the cache.
    fn on_cached(&self, game: &str, path: &Path);
}

/// Progress sink that reports nothing. Used by the TUI's startup load.
pub struct NoProgress;

impl DownloadProgress for NoProgress {
    fn on_fetch_start(&self, _game: &str, _url: &str) {}
    fn on_rows_parsed(&self, _game: &str, _rows: usize) {}
    fn on_cached(&self, _game: &str, _path: &Path) {}
}
