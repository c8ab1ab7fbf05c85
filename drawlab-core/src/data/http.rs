//! HTTP draw provider — fetches a game's CSV export from the lottery site.
//!
//! One GET per fetch, no retry loop: the exports are small static files and
//! the caller falls back to the cache when the site is unreachable.

use std::time::Duration;

use crate::data::provider::{DataError, DrawProvider, DrawSource, FetchPayload};
use crate::domain::GameConfig;

pub struct HttpCsvProvider {
    client: reqwest::blocking::Client,
}

impl HttpCsvProvider {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("drawlab/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");
        Self { client }
    }
}

impl Default for HttpCsvProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawProvider for HttpCsvProvider {
    fn name(&self) -> &str {
        "state_lottery_csv"
    }

    fn fetch(&self, game: &GameConfig) -> Result<FetchPayload, DataError> {
        let response = self
            .client
            .get(&game.csv_url)
            .send()
            .map_err(|e| DataError::NetworkUnreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::HttpStatus {
                game: game.name.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| DataError::Other(format!("failed to read response body: {e}")))?;

        if body.trim().is_empty() {
            return Err(DataError::EmptyFile {
                game: game.name.clone(),
            });
        }

        Ok(FetchPayload {
            game: game.name.clone(),
            body,
            source: DrawSource::StateLottery,
        })
    }
}
