//! Linear interpolation of longitudes across the 0/360 seam.

use chrono::NaiveDate;
use resonance_base::util::{normalize_360, signed_delta};

/// Interpolate from `from` to `to` at fraction `t`.
///
/// The difference is taken the short way round the circle, so 350 to 10
/// passes through 0 rather than 180. `t = 0` gives `from`, `t = 1` gives `to`
/// (both normalized to [0, 360)).
pub fn interpolate_longitude(from: f64, to: f64, t: f64) -> f64 {
    normalize_360(from + signed_delta(from, to) * t)
}

/// Fraction of the way from `before` to `after` (both at 00:00 UTC) that
/// `days_after_before` days lies. `None` unless `before < after`.
pub fn bracket_fraction(before: NaiveDate, after: NaiveDate, days_after_before: f64) -> Option<f64> {
    let span = (after - before).num_days();
    (span > 0).then(|| days_after_before / span as f64)
}

/// Apparent direction between two bracketing samples: retrograde when the
/// short-way difference is negative.
pub fn is_retrograde_motion(from: f64, to: f64) -> bool {
    signed_delta(from, to) < 0.0
}
