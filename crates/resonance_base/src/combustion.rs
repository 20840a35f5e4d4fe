//! Combustion detection.
//!
//! A planet is combust when it is too close to the Sun, with thresholds
//! varying by planet and, for Mercury and Venus, by retrograde status.
//! The luminaries are never combust.

use crate::planet::Planet;
use crate::util::angular_separation;

/// Combustion threshold (degrees from the Sun) for a planet.
///
/// Returns `None` for the Sun and the Moon.
/// For Mercury and Venus, retrograde thresholds are tighter.
pub const fn combustion_threshold(planet: Planet, is_retrograde: bool) -> Option<f64> {
    match planet {
        Planet::Sun | Planet::Moon => None,
        Planet::Mars => Some(17.0),
        Planet::Mercury => {
            if is_retrograde {
                Some(12.0)
            } else {
                Some(14.0)
            }
        }
        Planet::Jupiter => Some(11.0),
        Planet::Venus => {
            if is_retrograde {
                Some(8.0)
            } else {
                Some(10.0)
            }
        }
        Planet::Saturn => Some(15.0),
    }
}

/// Check if a planet is combust.
///
/// Uses angular distance on the ecliptic circle. A planet at exactly the
/// threshold distance is **not** combust (strict less-than).
pub fn is_combust(planet: Planet, planet_lon: f64, sun_lon: f64, is_retrograde: bool) -> bool {
    let Some(threshold) = combustion_threshold(planet, is_retrograde) else {
        return false;
    };
    angular_separation(planet_lon, sun_lon) < threshold
}
