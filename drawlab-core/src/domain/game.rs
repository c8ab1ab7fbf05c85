//! Game configuration — ball domains and data sources.
//!
//! Two games ship built in (Powerball, Mega Millions). A TOML file can
//! define a further game with the same five-plus-one shape.

use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main balls drawn per drawing.
pub const MAIN_BALLS: usize = 5;

/// Inclusive range `[1, max]` of legal ball values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BallDomain {
    max: u8,
}

impl BallDomain {
    pub const fn new(max: u8) -> Self {
        Self { max }
    }

    pub fn min(&self) -> u8 {
        1
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    /// Number of bins a histogram over this domain carries.
    pub fn size(&self) -> usize {
        self.max as usize
    }

    pub fn contains(&self, value: u8) -> bool {
        (1..=self.max).contains(&value)
    }

    pub fn values(&self) -> RangeInclusive<u8> {
        1..=self.max
    }
}

/// Static description of one lottery game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub name: String,
    pub main_domain: BallDomain,
    pub special_domain: BallDomain,
    /// CSV export endpoint for the full draw history.
    pub csv_url: String,
    /// File name the cached CSV is stored under.
    pub cache_file: String,
}

#[derive(Debug, Error)]
pub enum GameConfigError {
    #[error("failed to read game file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse game file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid game config: {0}")]
    Invalid(String),
}

/// On-disk shape of a custom game definition.
#[derive(Debug, Deserialize)]
struct GameFile {
    game: GameSection,
}

#[derive(Debug, Deserialize)]
struct GameSection {
    name: String,
    main_max: u8,
    special_max: u8,
    csv_url: String,
    cache_file: Option<String>,
}

impl GameConfig {
    pub fn powerball() -> Self {
        Self {
            name: "Powerball".into(),
            main_domain: BallDomain::new(69),
            special_domain: BallDomain::new(26),
            csv_url: "https://www.texaslottery.com/export/sites/lottery/Games/Powerball/Winning_Numbers/powerball.csv".into(),
            cache_file: "powerball.csv".into(),
        }
    }

    pub fn mega_millions() -> Self {
        Self {
            name: "Mega Millions".into(),
            main_domain: BallDomain::new(70),
            special_domain: BallDomain::new(25),
            csv_url: "https://www.texaslottery.com/export/sites/lottery/Games/Mega_Millions/Winning_Numbers/megamillions.csv".into(),
            cache_file: "megamillions.csv".into(),
        }
    }

    /// Look up a built-in game by name. Case, spaces, and hyphens are
    /// ignored so display names round-trip ("Mega Millions" → Mega Millions).
    pub fn builtin(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "powerball" | "pb" => Some(Self::powerball()),
            "megamillions" | "mm" => Some(Self::mega_millions()),
            _ => None,
        }
    }

    /// Names accepted by [`GameConfig::builtin`], for error messages.
    pub fn builtin_names() -> &'static [&'static str] {
        &["powerball", "megamillions"]
    }

    /// Load a custom game definition from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, GameConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, GameConfigError> {
        let file: GameFile = toml::from_str(content)?;
        let section = file.game;
        if section.name.trim().is_empty() {
            return Err(GameConfigError::Invalid("name must not be empty".into()));
        }
        if (section.main_max as usize) < MAIN_BALLS {
            return Err(GameConfigError::Invalid(format!(
                "main_max must be at least {MAIN_BALLS}"
            )));
        }
        if section.special_max < 1 {
            return Err(GameConfigError::Invalid(
                "special_max must be at least 1".into(),
            ));
        }
        let cache_file = section
            .cache_file
            .unwrap_or_else(|| format!("{}.csv", section.name.to_ascii_lowercase().replace(' ', "_")));
        Ok(Self {
            name: section.name,
            main_domain: BallDomain::new(section.main_max),
            special_domain: BallDomain::new(section.special_max),
            csv_url: section.csv_url,
            cache_file,
        })
    }
}
