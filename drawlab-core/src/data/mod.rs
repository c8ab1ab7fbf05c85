//! Data layer: CSV ingest, HTTP draw provider, file cache, synthetic histories.

pub mod cache;
pub mod download;
pub mod http;
pub mod ingest;
pub mod provider;
pub mod synthetic;

pub use cache::{CacheMeta, DrawCache};
pub use download::{download_game, load_history, DownloadOutcome};
pub use http::HttpCsvProvider;
pub use ingest::{parse_draw_csv, IngestReport};
pub use provider::{DataError, DownloadProgress, DrawProvider, DrawSource, FetchPayload, NoProgress};
pub use synthetic::synthetic_history;
