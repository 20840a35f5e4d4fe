//! Error types for hour partitioning and daily scoring.

use chrono::{DateTime, Utc};
use resonance_base::Planet;
use thiserror::Error;

/// Rejected sunrise/sunset input or an instant outside the solar day.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum HourError {
    #[error("sunset {sunset} is not after sunrise {sunrise}")]
    SunsetNotAfterSunrise {
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
    },

    #[error("next sunrise {next_sunrise} is not after sunset {sunset}")]
    NextSunriseNotAfterSunset {
        sunset: DateTime<Utc>,
        next_sunrise: DateTime<Utc>,
    },

    /// Segment too long to express in nanoseconds.
    #[error("solar day segment starting {start} is too long")]
    SegmentTooLong { start: DateTime<Utc> },

    #[error("{instant} is outside the solar day [{sunrise}, {next_sunrise})")]
    OutsideSolarDay {
        instant: DateTime<Utc>,
        sunrise: DateTime<Utc>,
        next_sunrise: DateTime<Utc>,
    },
}

/// Rejected input to the daily scorer.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimingError {
    #[error("no strength score for {0}")]
    MissingPlanet(Planet),

    #[error("more than one strength score for {0}")]
    DuplicatePlanet(Planet),

    #[error("power {power} for {planet} exceeds 100")]
    PowerOutOfRange { planet: Planet, power: u8 },

    #[error("invalid timing policy value for '{field}': {reason}")]
    InvalidPolicy {
        field: &'static str,
        reason: &'static str,
    },
}
