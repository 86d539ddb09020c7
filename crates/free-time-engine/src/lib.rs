//! # free-time-engine
//!
//! Deterministic free-time search over a person's busy calendar events.
//!
//! Given busy events and a set of search parameters (a range of days, a daily
//! work window, a minimum free duration and a transit buffer around every
//! commitment), the engine returns the ordered, disjoint free intervals that
//! satisfy all constraints. It performs no I/O and reads no clock.
//!
//! ## Modules
//!
//! - [`calculator`]: Day + time-of-day pair → absolute work window; time-of-day → duration
//! - [`finder`]: Day-by-day search orchestration and exclusion flags
//! - [`freebusy`]: Clip, buffer, merge and complement busy intervals
//! - [`params`]: Search window and parameters, with the validity predicate
//! - [`preset`]: Today / tomorrow / this week / next week ranges
//! - [`time_of_day`]: Date-less `HH:MM` values
//! - [`event`]: Busy calendar events
//! - [`dst`]: DST gap handling for work-window boundaries
//! - [`error`]: Error types

pub mod calculator;
pub mod dst;
pub mod error;
pub mod event;
pub mod finder;
pub mod freebusy;
pub mod params;
pub mod preset;
pub mod time_of_day;

pub use calculator::{DayWindowCalculator, DayWorkWindow};
pub use dst::DstPolicy;
pub use error::FinderError;
pub use event::BusyEvent;
pub use finder::{find_free_time, FreeTimeFinder};
pub use freebusy::FreeInterval;
pub use params::{SearchParameters, SearchWindow};
pub use preset::{SearchPreset, WeekStartDay};
pub use time_of_day::TimeOfDay;
