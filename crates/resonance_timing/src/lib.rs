//! Time-of-day and day-level timing.
//!
//! This crate provides:
//! - [`SolarDay`]: 24 unequal planetary hours from sunrise/sunset instants
//! - [`score_day`]: the weighted composite score of a day and its labels

pub mod daily;
pub mod error;
pub mod hours;

pub use daily::{CycleState, TimingPolicy, TimingQuality, TimingScoreBreakdown, score_day};
pub use error::{HourError, TimingError};
pub use hours::{CurrentHour, HOURS_PER_DAY, HOURS_PER_SEGMENT, PlanetaryHourWindow, SolarDay};
