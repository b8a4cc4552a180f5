//! Runtime settings loaded from environment variables.

use anyhow::{Context, Result};
use chrono::Weekday;
use std::path::PathBuf;

use crate::calendar::parse_week_start;

pub const DEFAULT_PORT: u16 = 8080;

/// Server and calendar settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub port: u16,
    /// JSON events file; the built-in schedule is used when unset
    pub events_file: Option<PathBuf>,
    pub week_start: Weekday,
    /// Directory served at `/` for images referenced by events
    pub public_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            events_file: None,
            week_start: Weekday::Sun,
            public_dir: PathBuf::from("public"),
        }
    }
}

impl Settings {
    /// Load settings from the environment.
    ///
    /// Reads `SCHALE_PORT`, `SCHALE_EVENTS`, `SCHALE_WEEK_START` and
    /// `SCHALE_PUBLIC_DIR`, either from the environment or a `.env` file.
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(port) = lookup("SCHALE_PORT") {
            settings.port = port
                .trim()
                .parse()
                .with_context(|| format!("SCHALE_PORT is not a valid port: {port}"))?;
        }

        if let Some(path) = lookup("SCHALE_EVENTS").filter(|p| !p.trim().is_empty()) {
            settings.events_file = Some(PathBuf::from(path));
        }

        if let Some(day) = lookup("SCHALE_WEEK_START") {
            settings.week_start = parse_week_start(&day).context("SCHALE_WEEK_START")?;
        }

        if let Some(dir) = lookup("SCHALE_PUBLIC_DIR") {
            settings.public_dir = PathBuf::from(dir);
        }

        Ok(settings)
    }
}
