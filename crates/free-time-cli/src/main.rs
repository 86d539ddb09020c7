//! `freetime` CLI: find free time between calendar events from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Free slots today, 09:00-18:00, at least one hour, 15 min travel around meetings
//! freetime search -i events.json --preset today --start 09:00 --end 18:00 \
//!     --min-free 01:00 --transit 00:15 --timezone Europe/Berlin
//!
//! # Explicit range, events on stdin, human-readable output
//! cat events.json | freetime search --from 2026-03-02 --to 2026-03-06 --format text
//!
//! # Count holidays and all-day events as busy
//! freetime search -i events.json --preset next-week --include-all-day --include-holidays
//!
//! # Show the absolute work window of each day in a range
//! freetime window --from 2026-03-28 --to 2026-03-30 --timezone Europe/Berlin
//! ```
//!
//! Events are a JSON array of `{"start", "end", "all_day", "holiday"}` objects with
//! RFC 3339 timestamps. Logging goes to stderr, filtered by `FREETIME_LOG`.

mod config;

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand, ValueEnum};
use free_time_engine::{
    BusyEvent, DayWindowCalculator, FreeInterval, FreeTimeFinder, SearchParameters, SearchPreset,
    SearchWindow, TimeOfDay, WeekStartDay,
};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::{load_config, Overrides, Settings};

#[derive(Parser)]
#[command(
    name = "freetime",
    version,
    about = "Find free time between calendar events"
)]
struct Cli {
    /// TOML file with default search settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find free intervals between busy events
    Search {
        #[command(flatten)]
        range: RangeArgs,
        #[command(flatten)]
        work: WorkWindowArgs,
        /// Shortest free interval to report (HH:MM)
        #[arg(long)]
        min_free: Option<TimeOfDay>,
        /// Travel time required before and after every event (HH:MM)
        #[arg(long)]
        transit: Option<TimeOfDay>,
        /// Treat all-day events as busy
        #[arg(long)]
        include_all_day: bool,
        /// Treat holidays as busy
        #[arg(long)]
        include_holidays: bool,
        /// Events JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Print the absolute work window of each day in a range
    Window {
        #[command(flatten)]
        range: RangeArgs,
        #[command(flatten)]
        work: WorkWindowArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Args)]
struct RangeArgs {
    /// First day to search (YYYY-MM-DD)
    #[arg(long, conflicts_with = "preset")]
    from: Option<NaiveDate>,
    /// Last day to search, inclusive (defaults to --from)
    #[arg(long, requires = "from")]
    to: Option<NaiveDate>,
    /// Named range: today, tomorrow, this-week, next-week
    #[arg(long)]
    preset: Option<SearchPreset>,
    /// Anchor date for presets (defaults to the current date in --timezone)
    #[arg(long)]
    today: Option<NaiveDate>,
    /// First day of the week for week presets: monday or sunday
    #[arg(long)]
    week_start: Option<WeekStartDay>,
}

#[derive(Args)]
struct WorkWindowArgs {
    /// Start of the working day (HH:MM)
    #[arg(long)]
    start: Option<TimeOfDay>,
    /// End of the working day (HH:MM)
    #[arg(long)]
    end: Option<TimeOfDay>,
    /// IANA timezone the working hours are expressed in
    #[arg(long)]
    timezone: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// A result interval rendered in the search time zone.
#[derive(Serialize)]
struct LocalInterval {
    start: String,
    end: String,
    duration_minutes: i64,
}

#[derive(Serialize)]
struct LocalDayWindow {
    day: NaiveDate,
    start: String,
    end: String,
    empty: bool,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Search {
            range,
            work,
            min_free,
            transit,
            include_all_day,
            include_holidays,
            input,
            output,
            format,
        } => {
            let settings = Settings::resolve(
                config,
                Overrides {
                    timezone: work.timezone,
                    start_of_day: work.start,
                    end_of_day: work.end,
                    min_free,
                    transit,
                    include_all_day,
                    include_holidays,
                    week_start: range.week_start,
                },
            )?;
            let window = resolve_range(&range, &settings)?;

            let raw = read_input(input.as_deref())?;
            let events: Vec<BusyEvent> =
                serde_json::from_str(&raw).context("Failed to parse events JSON")?;
            debug!(events = events.len(), "read events");

            let params = SearchParameters {
                window,
                start_of_day: settings.start_of_day,
                end_of_day: settings.end_of_day,
                min_free: settings.min_free,
                transit: settings.transit,
                ignore_all_day: settings.ignore_all_day,
                ignore_holidays: settings.ignore_holidays,
            };
            let finder = FreeTimeFinder::new(DayWindowCalculator::new(settings.timezone));
            let slots = finder
                .find_checked(&events, &params)
                .context("Invalid search parameters")?;
            info!(
                from = %window.from,
                to = %window.to,
                slots = slots.len(),
                "search complete"
            );

            let rendered = match format {
                OutputFormat::Json => render_json(&slots, settings.timezone)?,
                OutputFormat::Text => render_text(&slots, settings.timezone),
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Window {
            range,
            work,
            format,
        } => {
            let settings = Settings::resolve(
                config,
                Overrides {
                    timezone: work.timezone,
                    start_of_day: work.start,
                    end_of_day: work.end,
                    week_start: range.week_start,
                    ..Overrides::default()
                },
            )?;
            let window = resolve_range(&range, &settings)?;
            let calculator = DayWindowCalculator::new(settings.timezone);

            let days: Vec<LocalDayWindow> = window
                .days()
                .map(|day| {
                    let w = calculator.day_window(day, settings.start_of_day, settings.end_of_day);
                    LocalDayWindow {
                        day,
                        start: local_rfc3339(w.start, settings.timezone),
                        end: local_rfc3339(w.end, settings.timezone),
                        empty: w.is_empty(),
                    }
                })
                .collect();

            let rendered = match format {
                OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&days)?),
                OutputFormat::Text => days
                    .iter()
                    .map(|d| {
                        if d.empty {
                            format!("{}  (no work window)\n", d.day)
                        } else {
                            format!("{}  {}  {}\n", d.day, d.start, d.end)
                        }
                    })
                    .collect(),
            };
            write_output(None, &rendered)?;
        }
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("FREETIME_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Turn --from/--to or --preset into a day range. Defaults to today.
fn resolve_range(range: &RangeArgs, settings: &Settings) -> Result<SearchWindow> {
    let preset = match (range.from, range.preset) {
        (Some(from), _) => SearchPreset::Custom {
            from,
            to: range.to.unwrap_or(from),
        },
        (None, Some(preset)) => preset,
        (None, None) => SearchPreset::Today,
    };

    let today = range
        .today
        .unwrap_or_else(|| Utc::now().with_timezone(&settings.timezone).date_naive());

    preset
        .resolve(today, settings.week_start)
        .with_context(|| format!("Invalid search range '{}'", preset))
}

fn local_rfc3339(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).to_rfc3339()
}

fn render_json(slots: &[FreeInterval], tz: Tz) -> Result<String> {
    let local: Vec<LocalInterval> = slots
        .iter()
        .map(|s| LocalInterval {
            start: local_rfc3339(s.start, tz),
            end: local_rfc3339(s.end, tz),
            duration_minutes: s.duration_minutes,
        })
        .collect();
    Ok(format!("{}\n", serde_json::to_string_pretty(&local)?))
}

/// One line per slot: `2026-03-02  09:00-11:45  (2h45m)`.
fn render_text(slots: &[FreeInterval], tz: Tz) -> String {
    if slots.is_empty() {
        return "No free time found.\n".to_string();
    }

    slots
        .iter()
        .map(|s| {
            let start = s.start.with_timezone(&tz);
            let end = s.end.with_timezone(&tz);
            format!(
                "{}  {}-{}  ({}h{:02}m)\n",
                start.format("%Y-%m-%d"),
                start.format("%H:%M"),
                end.format("%H:%M"),
                s.duration_minutes / 60,
                s.duration_minutes % 60
            )
        })
        .collect()
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
