//! Mean-motion estimates, the last rung of the resolution ladder.
//!
//! Longitude = (L0 + n * days_since_epoch) mod 360, with L0 the mean
//! longitude at J2000.0 and n the mean daily motion. Mercury and Venus never
//! stray far from the Sun, so their mean values are the Sun's.

use chrono::{DateTime, TimeZone, Utc};
use resonance_base::Planet;
use resonance_base::util::normalize_360;

/// Mean elements of one planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanElements {
    /// Mean longitude at J2000.0, degrees.
    pub epoch_longitude_deg: f64,
    /// Mean daily motion, degrees per day.
    pub daily_motion_deg: f64,
}

const SUN: MeanElements = MeanElements {
    epoch_longitude_deg: 280.460,
    daily_motion_deg: 0.985_647_4,
};

/// Mean elements for `planet`.
pub const fn mean_elements(planet: Planet) -> MeanElements {
    match planet {
        Planet::Sun | Planet::Mercury | Planet::Venus => SUN,
        Planet::Moon => MeanElements {
            epoch_longitude_deg: 218.316,
            daily_motion_deg: 13.176_396,
        },
        Planet::Mars => MeanElements {
            epoch_longitude_deg: 355.433,
            daily_motion_deg: 0.524_020_8,
        },
        Planet::Jupiter => MeanElements {
            epoch_longitude_deg: 34.351,
            daily_motion_deg: 0.083_085_3,
        },
        Planet::Saturn => MeanElements {
            epoch_longitude_deg: 50.077,
            daily_motion_deg: 0.033_444_3,
        },
    }
}

const SECONDS_PER_DAY: f64 = 86_400.0;

/// J2000.0 as a UTC instant (2000-01-01T12:00:00Z).
pub fn j2000() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Fractional days from J2000.0 to `instant`; negative before the epoch.
pub fn days_since_j2000(instant: DateTime<Utc>) -> f64 {
    let delta = instant - j2000();
    delta.num_milliseconds() as f64 / (1000.0 * SECONDS_PER_DAY)
}

/// Mean longitude of `planet` at `instant`, in [0, 360).
pub fn mean_longitude(planet: Planet, instant: DateTime<Utc>) -> f64 {
    let el = mean_elements(planet);
    normalize_360(el.epoch_longitude_deg + el.daily_motion_deg * days_since_j2000(instant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use resonance_base::ALL_PLANETS;

    #[test]
    fn epoch_is_noon() {
        assert_eq!(j2000().to_rfc3339(), "2000-01-01T12:00:00+00:00");
        assert_eq!(days_since_j2000(j2000()), 0.0);
    }

    #[test]
    fn at_epoch_equals_table() {
        assert!((mean_longitude(Planet::Mars, j2000()) - 355.433).abs() < 1e-9);
        assert!((mean_longitude(Planet::Moon, j2000()) - 218.316).abs() < 1e-9);
    }

    #[test]
    fn one_day_later_advances_by_daily_motion() {
        let later = j2000() + chrono::Duration::days(1);
        let moon = mean_longitude(Planet::Moon, later);
        assert!((moon - (218.316 + 13.176_396)).abs() < 1e-9);
        // Mars wraps past 360
        let mars = mean_longitude(Planet::Mars, j2000() + chrono::Duration::days(10));
        assert!((mars - (355.433 + 5.240_208 - 360.0)).abs() < 1e-9);
    }

    #[test]
    fn inner_planets_follow_the_sun() {
        let t = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let sun = mean_longitude(Planet::Sun, t);
        assert_eq!(mean_longitude(Planet::Mercury, t), sun);
        assert_eq!(mean_longitude(Planet::Venus, t), sun);
    }

    #[test]
    fn always_in_range_before_and_after_epoch() {
        for planet in ALL_PLANETS {
            for years in [-150i64, -1, 0, 1, 25, 300] {
                let t = j2000() + chrono::Duration::days(years * 365);
                let lon = mean_longitude(planet, t);
                assert!((0.0..360.0).contains(&lon), "{planet} {years}y: {lon}");
            }
        }
    }
}
