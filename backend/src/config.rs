//! Service configuration.
//!
//! Settings are read from a `dayplan.toml` file (every field optional) and
//! then overridden by environment variables:
//!
//! - `DAYPLAN_CONFIG`: explicit path to the configuration file
//! - `HOST` / `PORT`: bind address of the HTTP server
//! - `CALENDAR_API_BASE`: Google Calendar API base URL
//! - `CALENDAR_ID`: calendar to read (default: `primary`)
//! - `PLANNER_UTC_OFFSET_MINUTES`: offset used to find "tomorrow"
//!
//! The keyword tables and the familiar-location list live here too, so the
//! categorizer and travel-mode detector receive them as plain data.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Category;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub calendar: CalendarSettings,
    #[serde(default)]
    pub planning: PlanningSettings,
    #[serde(default)]
    pub travel: TravelSettings,
    /// Keyword rules; earlier entries win when several match
    #[serde(default = "default_category_rules")]
    pub categories: Vec<CategoryRule>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            calendar: CalendarSettings::default(),
            planning: PlanningSettings::default(),
            travel: TravelSettings::default(),
            categories: default_category_rules(),
        }
    }
}

/// HTTP bind settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Google Calendar access settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarSettings {
    #[serde(default = "default_calendar_base_url")]
    pub base_url: String,
    #[serde(default = "default_calendar_id")]
    pub calendar_id: String,
    /// Whole-request timeout for the events call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            base_url: default_calendar_base_url(),
            calendar_id: default_calendar_id(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_calendar_base_url() -> String {
    "https://www.googleapis.com/calendar/v3".to_string()
}

fn default_calendar_id() -> String {
    "primary".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

/// Where and when the user lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningSettings {
    /// Offset from UTC used to decide which day is "tomorrow"
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
    /// City reported by the simulated forecast
    #[serde(default = "default_city")]
    pub city: String,
    /// Locations that never switch travel mode on (substring match)
    #[serde(default = "default_familiar_locations")]
    pub familiar_locations: Vec<String>,
}

impl Default for PlanningSettings {
    fn default() -> Self {
        Self {
            utc_offset_minutes: default_utc_offset_minutes(),
            city: default_city(),
            familiar_locations: default_familiar_locations(),
        }
    }
}

fn default_utc_offset_minutes() -> i32 {
    -180
}

fn default_city() -> String {
    "São Paulo".to_string()
}

fn default_familiar_locations() -> Vec<String> {
    ["casa", "trabalho", "academia", "escola", "São Paulo", "SP", "casa dos pais"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl PlanningSettings {
    /// The configured offset, or UTC when out of range.
    pub fn offset(&self) -> FixedOffset {
        self.checked_offset().unwrap_or_else(|| Utc.fix())
    }

    fn checked_offset(&self) -> Option<FixedOffset> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
    }

    /// The day after `now` in the configured offset.
    pub fn tomorrow(&self, now: DateTime<Utc>) -> NaiveDate {
        let today = now.with_timezone(&self.offset()).date_naive();
        today.succ_opt().unwrap_or(today)
    }
}

/// Knobs of the travel-time estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelSettings {
    /// Smallest gap (minutes) that receives a travel block
    #[serde(default = "default_min_gap_minutes")]
    pub min_gap_minutes: i64,
    /// Share of the gap assumed to be spent travelling
    #[serde(default = "default_travel_ratio_percent")]
    pub travel_ratio_percent: i64,
    /// Minutes of the gap always left free
    #[serde(default = "default_min_slack_minutes")]
    pub min_slack_minutes: i64,
    /// Share of the travel time reported as slack
    #[serde(default = "default_buffer_percent")]
    pub buffer_percent: i64,
}

impl Default for TravelSettings {
    fn default() -> Self {
        Self {
            min_gap_minutes: default_min_gap_minutes(),
            travel_ratio_percent: default_travel_ratio_percent(),
            min_slack_minutes: default_min_slack_minutes(),
            buffer_percent: default_buffer_percent(),
        }
    }
}

fn default_min_gap_minutes() -> i64 {
    10
}

fn default_travel_ratio_percent() -> i64 {
    70
}

fn default_min_slack_minutes() -> i64 {
    5
}

fn default_buffer_percent() -> i64 {
    20
}

/// Keywords that select a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(category: Category, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Built-in keyword table, highest priority first.
pub fn default_category_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new(Category::Tattoo, &["tatuagem", "tattoo"]),
        CategoryRule::new(Category::Child, &["filho", "criança", "escola"]),
        CategoryRule::new(Category::Family, &["família", "pais", "irmão", "irmã"]),
        CategoryRule::new(Category::Partner, &["namorada", "namorado", "date", "encontro"]),
        CategoryRule::new(Category::Gaming, &["jogo", "jogar", "game"]),
        CategoryRule::new(Category::Fitness, &["treino", "academia", "exercício"]),
        CategoryRule::new(Category::Work, &["trabalho", "reunião", "cliente"]),
        CategoryRule::new(Category::Trip, &["viagem", "voo", "hotel"]),
    ]
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the configuration used by the server.
    ///
    /// Uses `DAYPLAN_CONFIG` when set, otherwise the first `dayplan.toml`
    /// found in the current directory, `backend/` or the parent directory,
    /// otherwise built-in defaults. Environment overrides are applied last.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::config_path() {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading configuration file");
                Self::from_file(&path)?
            }
            None => {
                tracing::info!("No dayplan.toml found, using built-in defaults");
                Self::default()
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn config_path() -> Option<PathBuf> {
        if let Ok(explicit) = std::env::var("DAYPLAN_CONFIG") {
            return Some(PathBuf::from(explicit));
        }

        [
            PathBuf::from("dayplan.toml"),
            PathBuf::from("backend/dayplan.toml"),
            PathBuf::from("../dayplan.toml"),
        ]
        .into_iter()
        .find(|path| path.exists())
    }

    /// Apply environment-style overrides looked up through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("PORT must be a valid port number, got '{}'", port)))?;
        }
        if let Some(base_url) = lookup("CALENDAR_API_BASE") {
            self.calendar.base_url = base_url;
        }
        if let Some(calendar_id) = lookup("CALENDAR_ID") {
            self.calendar.calendar_id = calendar_id;
        }
        if let Some(offset) = lookup("PLANNER_UTC_OFFSET_MINUTES") {
            self.planning.utc_offset_minutes = offset.parse().map_err(|_| {
                ConfigError::Invalid(format!(
                    "PLANNER_UTC_OFFSET_MINUTES must be an integer, got '{}'",
                    offset
                ))
            })?;
        }
        Ok(())
    }

    /// Reject settings the pipeline cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.planning.checked_offset().is_none() {
            return Err(ConfigError::Invalid(format!(
                "utc_offset_minutes out of range: {}",
                self.planning.utc_offset_minutes
            )));
        }
        if self.travel.min_gap_minutes < 0 {
            return Err(ConfigError::Invalid("min_gap_minutes must not be negative".to_string()));
        }
        if self.travel.travel_ratio_percent < 0 || self.travel.buffer_percent < 0 {
            return Err(ConfigError::Invalid("travel percentages must not be negative".to_string()));
        }
        if self.categories.iter().any(|rule| rule.category == Category::Transit) {
            return Err(ConfigError::Invalid(
                "the travel category is reserved for synthesized events".to_string(),
            ));
        }
        Ok(())
    }

    /// Socket address string for the HTTP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
