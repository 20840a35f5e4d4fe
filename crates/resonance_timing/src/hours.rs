//! Planetary hours.
//!
//! A solar day runs from sunrise to the next sunrise. Its daytime segment
//! (sunrise to sunset) and night segment (sunset to next sunrise) are each
//! cut into 12 equal hours, so day and night hours generally differ in
//! length. Rulers follow the Chaldean order continuously through all 24
//! hours, starting from the weekday's ruler at sunrise.
//!
//! Boundaries are computed in integer nanoseconds from the segment start,
//! so the windows partition each segment exactly.

use chrono::{DateTime, FixedOffset, TimeDelta, Utc, Weekday};
use resonance_base::{Planet, chaldean_successor, day_ruler, local_weekday};
use serde::{Deserialize, Serialize};

use crate::error::HourError;

/// Hours in each of the day and night segments.
pub const HOURS_PER_SEGMENT: usize = 12;

/// Hours in one solar day.
pub const HOURS_PER_DAY: usize = 2 * HOURS_PER_SEGMENT;

/// One ruled window of a solar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetaryHourWindow {
    /// 1-based position within its segment, 1..=12.
    pub index: u8,
    pub is_daytime: bool,
    pub ruling_planet: Planet,
    pub start: DateTime<Utc>,
    /// Exclusive.
    pub end: DateTime<Utc>,
}

impl PlanetaryHourWindow {
    /// 0-based position within the whole solar day, 0..24.
    pub fn ordinal(&self) -> usize {
        let offset = if self.is_daytime { 0 } else { HOURS_PER_SEGMENT };
        offset + self.index as usize - 1
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// `start <= instant < end`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// The window containing "now", with progress through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentHour {
    pub window: PlanetaryHourWindow,
    /// Whole seconds since the window started.
    pub elapsed_seconds: i64,
    /// Whole seconds until the window ends.
    pub remaining_seconds: i64,
    /// `None` during the last night hour; the following window belongs to
    /// the next solar day.
    pub next: Option<PlanetaryHourWindow>,
}

/// Validated sunrise, sunset and next sunrise of one solar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarDay {
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
    next_sunrise: DateTime<Utc>,
    weekday: Weekday,
    day_nanos: i64,
    night_nanos: i64,
}

impl SolarDay {
    /// Requires `sunrise < sunset < next_sunrise`.
    pub fn new(
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
        next_sunrise: DateTime<Utc>,
        weekday: Weekday,
    ) -> Result<Self, HourError> {
        if sunset <= sunrise {
            return Err(HourError::SunsetNotAfterSunrise { sunrise, sunset });
        }
        if next_sunrise <= sunset {
            return Err(HourError::NextSunriseNotAfterSunset {
                sunset,
                next_sunrise,
            });
        }
        let day_nanos = (sunset - sunrise)
            .num_nanoseconds()
            .ok_or(HourError::SegmentTooLong { start: sunrise })?;
        let night_nanos = (next_sunrise - sunset)
            .num_nanoseconds()
            .ok_or(HourError::SegmentTooLong { start: sunset })?;
        Ok(Self {
            sunrise,
            sunset,
            next_sunrise,
            weekday,
            day_nanos,
            night_nanos,
        })
    }

    /// Like [`SolarDay::new`], taking the weekday on which sunrise falls in
    /// the local `offset`.
    pub fn with_offset(
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
        next_sunrise: DateTime<Utc>,
        offset: FixedOffset,
    ) -> Result<Self, HourError> {
        Self::new(sunrise, sunset, next_sunrise, local_weekday(sunrise, offset))
    }

    pub fn sunrise(&self) -> DateTime<Utc> {
        self.sunrise
    }

    pub fn sunset(&self) -> DateTime<Utc> {
        self.sunset
    }

    pub fn next_sunrise(&self) -> DateTime<Utc> {
        self.next_sunrise
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Ruler of the first daytime hour.
    pub fn day_ruler(&self) -> Planet {
        day_ruler(self.weekday)
    }

    pub fn day_length(&self) -> TimeDelta {
        self.sunset - self.sunrise
    }

    pub fn night_length(&self) -> TimeDelta {
        self.next_sunrise - self.sunset
    }

    /// Nominal daytime hour length, truncated to whole nanoseconds.
    pub fn day_hour_length(&self) -> TimeDelta {
        TimeDelta::nanoseconds(self.day_nanos / HOURS_PER_SEGMENT as i64)
    }

    /// Nominal night hour length, truncated to whole nanoseconds.
    pub fn night_hour_length(&self) -> TimeDelta {
        TimeDelta::nanoseconds(self.night_nanos / HOURS_PER_SEGMENT as i64)
    }

    /// `sunrise <= instant < next_sunrise`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.sunrise <= instant && instant < self.next_sunrise
    }

    /// Window at `ordinal` (0..24); `None` past the end of the day.
    pub fn window(&self, ordinal: usize) -> Option<PlanetaryHourWindow> {
        (ordinal < HOURS_PER_DAY).then(|| self.build_window(ordinal))
    }

    /// All 24 windows, daytime first.
    pub fn schedule(&self) -> [PlanetaryHourWindow; HOURS_PER_DAY] {
        std::array::from_fn(|ordinal| self.build_window(ordinal))
    }

    /// Window containing `instant`, if it falls within this solar day.
    pub fn window_at(&self, instant: DateTime<Utc>) -> Option<PlanetaryHourWindow> {
        if !self.contains(instant) {
            return None;
        }
        (0..HOURS_PER_DAY)
            .map(|ordinal| self.build_window(ordinal))
            .find(|w| w.contains(instant))
    }

    /// Current window, progress through it and the following window.
    pub fn current(&self, now: DateTime<Utc>) -> Result<CurrentHour, HourError> {
        let window = self.window_at(now).ok_or(HourError::OutsideSolarDay {
            instant: now,
            sunrise: self.sunrise,
            next_sunrise: self.next_sunrise,
        })?;
        Ok(CurrentHour {
            window,
            elapsed_seconds: (now - window.start).num_seconds(),
            remaining_seconds: (window.end - now).num_seconds(),
            next: self.window(window.ordinal() + 1),
        })
    }

    fn build_window(&self, ordinal: usize) -> PlanetaryHourWindow {
        let is_daytime = ordinal < HOURS_PER_SEGMENT;
        let k = ordinal % HOURS_PER_SEGMENT;
        let (origin, span) = if is_daytime {
            (self.sunrise, self.day_nanos)
        } else {
            (self.sunset, self.night_nanos)
        };
        PlanetaryHourWindow {
            index: (k + 1) as u8,
            is_daytime,
            ruling_planet: chaldean_successor(self.day_ruler(), ordinal),
            start: origin + boundary(span, k),
            end: origin + boundary(span, k + 1),
        }
    }
}

/// Offset of the `k`-th of 12 boundaries within a segment of `span` ns.
fn boundary(span: i64, k: usize) -> TimeDelta {
    let nanos = i128::from(span) * k as i128 / HOURS_PER_SEGMENT as i128;
    // k <= 12, so nanos <= span
    TimeDelta::nanoseconds(nanos as i64)
}
