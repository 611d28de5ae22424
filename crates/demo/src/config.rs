//! Demo configuration, read from the environment once at startup.

use anyhow::{Context, Result};
use chrono::Datelike;

use bookstore_observability::LogFormat;

pub const CURRENT_YEAR_VAR: &str = "BOOKSTORE_CURRENT_YEAR";
pub const OUTDATED_YEARS_VAR: &str = "BOOKSTORE_OUTDATED_YEARS";
pub const LOG_FORMAT_VAR: &str = "BOOKSTORE_LOG_FORMAT";

const DEFAULT_OUTDATED_YEARS: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Reference year for eviction (defaults to the current UTC year).
    pub current_year: i32,
    /// Items older than this many years are evicted.
    pub outdated_years: i32,
    pub log_format: LogFormat,
}

impl DemoConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let current_year = match lookup(CURRENT_YEAR_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<i32>()
                .with_context(|| format!("{CURRENT_YEAR_VAR} must be an integer year, got {raw:?}"))?,
            None => chrono::Utc::now().year(),
        };

        let outdated_years = match lookup(OUTDATED_YEARS_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<i32>()
                .with_context(|| format!("{OUTDATED_YEARS_VAR} must be an integer, got {raw:?}"))?,
            None => DEFAULT_OUTDATED_YEARS,
        };
        if outdated_years < 0 {
            anyhow::bail!("{OUTDATED_YEARS_VAR} cannot be negative, got {outdated_years}");
        }

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|e| anyhow::anyhow!("{LOG_FORMAT_VAR}: {e}"))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            current_year,
            outdated_years,
            log_format,
        })
    }
}
