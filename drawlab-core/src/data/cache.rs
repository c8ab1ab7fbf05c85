//! Draw-file cache — one CSV per game with a JSON metadata sidecar.
//!
//! The sidecar carries the row count, covered date range, fetch time, and a
//! blake3 digest of the CSV body. The digest is checked on load so a
//! half-written or hand-edited file surfaces as a cache error instead of a
//! parse failure deep in ingest.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::data::ingest::IngestReport;
use crate::data::provider::DataError;
use crate::domain::GameConfig;

/// Sidecar metadata for one cached draw file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheMeta {
    pub game: String,
    pub rows: usize,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub fetched_at: NaiveDateTime,
    pub digest: String,
}

/// File cache for downloaded draw histories.
#[derive(Debug, Clone)]
pub struct DrawCache {
    dir: PathBuf,
}

impl DrawCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn csv_path(&self, game: &GameConfig) -> PathBuf {
        self.dir.join(&game.cache_file)
    }

    fn meta_path(&self, game: &GameConfig) -> PathBuf {
        let mut path = self.csv_path(game);
        path.set_extension("meta.json");
        path
    }

    /// Write the CSV body and its sidecar. Replaces any existing entry.
    pub fn store(
        &self,
        game: &GameConfig,
        body: &str,
        report: &IngestReport,
    ) -> Result<CacheMeta, DataError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| DataError::CacheError(format!("create {}: {e}", self.dir.display())))?;

        let csv_path = self.csv_path(game);
        fs::write(&csv_path, body)
            .map_err(|e| DataError::CacheError(format!("write {}: {e}", csv_path.display())))?;

        let meta = CacheMeta {
            game: game.name.clone(),
            rows: report.rows,
            start_date: report.history.first_date().unwrap_or_default(),
            end_date: report.history.last_date().unwrap_or_default(),
            fetched_at: chrono::Local::now().naive_local(),
            digest: blake3::hash(body.as_bytes()).to_hex().to_string(),
        };
        let meta_path = self.meta_path(game);
        let json = serde_json::to_string_pretty(&meta)
            .map_err(|e| DataError::CacheError(format!("serialize meta: {e}")))?;
        fs::write(&meta_path, json)
            .map_err(|e| DataError::CacheError(format!("write {}: {e}", meta_path.display())))?;

        Ok(meta)
    }

    /// Read back a cached CSV body, verifying the sidecar digest.
    pub fn load(&self, game: &GameConfig) -> Result<String, DataError> {
        let meta = self.meta(game).ok_or_else(|| DataError::NoCachedData {
            game: game.name.clone(),
        })?;

        let csv_path = self.csv_path(game);
        let body = fs::read_to_string(&csv_path).map_err(|_| DataError::NoCachedData {
            game: game.name.clone(),
        })?;

        let digest = blake3::hash(body.as_bytes()).to_hex().to_string();
        if digest != meta.digest {
            return Err(DataError::CacheError(format!(
                "digest mismatch for {} — cached file was modified or truncated",
                csv_path.display()
            )));
        }

        Ok(body)
    }

    /// Sidecar metadata for one game, if cached.
    pub fn meta(&self, game: &GameConfig) -> Option<CacheMeta> {
        let content = fs::read_to_string(self.meta_path(game)).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// All sidecars in the cache directory, sorted by game name.
    pub fn status(&self) -> Vec<CacheMeta> {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return Vec::new();
        };
        let mut metas: Vec<CacheMeta> = entries
            .flatten()
            .filter(|e| {
                e.file_name()
                    .to_string_lossy()
                    .ends_with(".meta.json")
            })
            .filter_map(|e| {
                let content = fs::read_to_string(e.path()).ok()?;
                serde_json::from_str(&content).ok()
            })
            .collect();
        metas.sort_by(|a, b| a.game.cmp(&b.game));
        metas
    }

    /// Remove one game's CSV and sidecar.
    pub fn remove(&self, game: &GameConfig) -> Result<(), DataError> {
        for path in [self.csv_path(game), self.meta_path(game)] {
            if path.exists() {
                fs::remove_file(&path).map_err(|e| {
                    DataError::CacheError(format!("remove {}: {e}", path.display()))
                })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ingest::parse_draw_csv;

    const BODY: &str = "Game Name,Month,Day,Year,Num1,Num2,Num3,Num4,Num5,Special,Multiplier\n\
                        Powerball,1,3,2024,1,2,3,4,5,7,3\n\
                        Powerball,1,6,2024,5,12,33,44,69,26,2\n";

    #[test]
    fn store_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DrawCache::new(dir.path());
        let game = GameConfig::powerball();
        let report = parse_draw_csv(&game, BODY).unwrap();

        let meta = cache.store(&game, BODY, &report).unwrap();
        assert_eq!(meta.rows, 2);
        assert_eq!(meta.start_date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        assert_eq!(meta.end_date, NaiveDate::from_ymd_opt(2024, 1, 6).unwrap());

        let body = cache.load(&game).unwrap();
        assert_eq!(body, BODY);
    }

    #[test]
    fn load_without_cache_reports_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DrawCache::new(dir.path());
        let err = cache.load(&GameConfig::powerball()).unwrap_err();
        assert!(matches!(err, DataError::NoCachedData { .. }));
    }

    #[test]
    fn modified_file_fails_the_digest_check() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DrawCache::new(dir.path());
        let game = GameConfig::powerball();
        let report = parse_draw_csv(&game, BODY).unwrap();
        cache.store(&game, BODY, &report).unwrap();

        fs::write(cache.csv_path(&game), "tampered").unwrap();
        let err = cache.load(&game).unwrap_err();
        assert!(matches!(err, DataError::CacheError(_)));
    }

    #[test]
    fn status_lists_stored_games() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DrawCache::new(dir.path());
        let game = GameConfig::powerball();
        let report = parse_draw_csv(&game, BODY).unwrap();
        cache.store(&game, BODY, &report).unwrap();

        let metas = cache.status();
        assert_eq!(metas.len(), 1);
        assert_eq!(metas[0].game, "Powerball");
    }

    #[test]
    fn remove_clears_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DrawCache::new(dir.path());
        let game = GameConfig::powerball();
        let report = parse_draw_csv(&game, BODY).unwrap();
        cache.store(&game, BODY, &report).unwrap();

        cache.remove(&game).unwrap();
        assert!(cache.status().is_empty());
        assert!(matches!(
            cache.load(&game).unwrap_err(),
            DataError::NoCachedData { .. }
        ));
    }
}
