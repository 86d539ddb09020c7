//! Search defaults loaded from a TOML file.
//!
//! Lookup order for the file: `--config`, then `$FREETIME_CONFIG`, then
//! `<config dir>/freetime/config.toml`. Command-line flags override file
//! values; file values override the built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono_tz::Tz;
use free_time_engine::{TimeOfDay, WeekStartDay};
use serde::Deserialize;
use tracing::debug;

const CONFIG_ENV: &str = "FREETIME_CONFIG";

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub timezone: Option<String>,
    pub start_of_day: Option<TimeOfDay>,
    pub end_of_day: Option<TimeOfDay>,
    pub min_free: Option<TimeOfDay>,
    pub transit: Option<TimeOfDay>,
    pub ignore_all_day: Option<bool>,
    pub ignore_holidays: Option<bool>,
    pub week_start: Option<WeekStartDay>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("freetime").join("config.toml"))
}

/// Load the defaults file.
///
/// A missing file at the default location is not an error; a missing file
/// named explicitly (flag or environment) is.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let (path, required) = match explicit {
        Some(p) => (p.to_path_buf(), true),
        None => match std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            Some(p) => (PathBuf::from(p), true),
            None => match default_config_path() {
                Some(p) => (p, false),
                None => return Ok(Config::default()),
            },
        },
    };

    if !required && !path.exists() {
        debug!(path = %path.display(), "no config file, using built-in defaults");
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Values that vary per invocation, taken from command-line flags.
#[derive(Debug, Default)]
pub struct Overrides {
    pub timezone: Option<String>,
    pub start_of_day: Option<TimeOfDay>,
    pub end_of_day: Option<TimeOfDay>,
    pub min_free: Option<TimeOfDay>,
    pub transit: Option<TimeOfDay>,
    pub include_all_day: bool,
    pub include_holidays: bool,
    pub week_start: Option<WeekStartDay>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub timezone: Tz,
    pub start_of_day: TimeOfDay,
    pub end_of_day: TimeOfDay,
    pub min_free: TimeOfDay,
    pub transit: TimeOfDay,
    pub ignore_all_day: bool,
    pub ignore_holidays: bool,
    pub week_start: WeekStartDay,
}

impl Settings {
    pub fn resolve(config: Config, overrides: Overrides) -> Result<Self> {
        let tz_name = overrides
            .timezone
            .or(config.timezone)
            .unwrap_or_else(|| "UTC".to_string());
        let timezone: Tz = tz_name
            .parse()
            .map_err(|_| anyhow::anyhow!("Unknown timezone: '{}'", tz_name))?;

        Ok(Settings {
            timezone,
            start_of_day: overrides
                .start_of_day
                .or(config.start_of_day)
                .unwrap_or(clock(9, 0)),
            end_of_day: overrides
                .end_of_day
                .or(config.end_of_day)
                .unwrap_or(clock(18, 0)),
            min_free: overrides.min_free.or(config.min_free).unwrap_or(clock(1, 0)),
            transit: overrides
                .transit
                .or(config.transit)
                .unwrap_or(TimeOfDay::MIDNIGHT),
            ignore_all_day: !overrides.include_all_day && config.ignore_all_day.unwrap_or(true),
            ignore_holidays: !overrides.include_holidays
                && config.ignore_holidays.unwrap_or(true),
            week_start: overrides
                .week_start
                .or(config.week_start)
                .unwrap_or_default(),
        })
    }
}

fn clock(hour: u32, minute: u32) -> TimeOfDay {
    TimeOfDay::new(hour, minute).unwrap_or(TimeOfDay::MIDNIGHT)
}
