//! Resolved celestial position of a planet.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::planet::Planet;
use crate::sign::{Sign, SignPlacement, sign_from_longitude};
use crate::util::normalize_360;

/// How a position was obtained, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Cached value for the exact date.
    Exact,
    /// Linear interpolation between two cached dates.
    Interpolated,
    /// Mean-motion estimate from a fixed epoch.
    Synthetic,
}

/// Ecliptic position of one planet.
///
/// Only the longitude is stored; sign and degree are always derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "PositionRecord")]
pub struct CelestialPosition {
    planet: Planet,
    longitude_deg: f64,
    retrograde: bool,
    confidence: Confidence,
}

impl CelestialPosition {
    /// Build a position, rejecting non-finite longitudes or longitudes
    /// outside [0, 360).
    pub fn new(
        planet: Planet,
        longitude_deg: f64,
        retrograde: bool,
        confidence: Confidence,
    ) -> Result<Self, ValidationError> {
        validate_longitude(longitude_deg)?;
        Ok(Self {
            planet,
            longitude_deg,
            retrograde: retrograde && planet.can_retrograde(),
            confidence,
        })
    }

    /// Build a position from a computed longitude, wrapping it into [0, 360).
    ///
    /// For engine-derived values only; a non-finite longitude becomes 0.
    pub fn wrapped(planet: Planet, longitude_deg: f64, retrograde: bool, confidence: Confidence) -> Self {
        let longitude_deg = if longitude_deg.is_finite() {
            normalize_360(longitude_deg)
        } else {
            0.0
        };
        Self {
            planet,
            longitude_deg,
            retrograde: retrograde && planet.can_retrograde(),
            confidence,
        }
    }

    pub fn planet(&self) -> Planet {
        self.planet
    }

    /// Ecliptic longitude in [0, 360).
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn retrograde(&self) -> bool {
        self.retrograde
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    pub fn placement(&self) -> SignPlacement {
        sign_from_longitude(self.longitude_deg)
    }

    pub fn sign(&self) -> Sign {
        self.placement().sign
    }

    /// `floor(longitude / 30)`.
    pub fn sign_index(&self) -> u8 {
        self.placement().sign_index
    }

    /// `longitude - 30 * sign_index`, in [0, 30).
    pub fn sign_degree(&self) -> f64 {
        self.placement().sign_degree
    }
}

/// Check that a longitude is finite and in [0, 360).
pub fn validate_longitude(longitude_deg: f64) -> Result<(), ValidationError> {
    if longitude_deg.is_finite() && (0.0..360.0).contains(&longitude_deg) {
        Ok(())
    } else {
        Err(ValidationError::LongitudeOutOfRange(longitude_deg))
    }
}

/// Serialized form, with the derived sign fields spelled out.
#[derive(Debug, Clone, Serialize)]
struct PositionRecord {
    planet: Planet,
    ecliptic_longitude_deg: f64,
    sign_index: u8,
    sign: Sign,
    sign_degree: f64,
    retrograde: bool,
    confidence: Confidence,
}

impl From<CelestialPosition> for PositionRecord {
    fn from(p: CelestialPosition) -> Self {
        let placement = p.placement();
        Self {
            planet: p.planet,
            ecliptic_longitude_deg: p.longitude_deg,
            sign_index: placement.sign_index,
            sign: placement.sign,
            sign_degree: placement.sign_degree,
            retrograde: p.retrograde,
            confidence: p.confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_sign_fields() {
        let p = CelestialPosition::new(Planet::Mars, 295.0, false, Confidence::Exact).unwrap();
        assert_eq!(p.sign(), Sign::Capricorn);
        assert_eq!(p.sign_index(), 9);
        assert!((p.sign_degree() - 25.0).abs() < 1e-10);
    }

    #[test]
    fn rejects_360() {
        assert_eq!(
            CelestialPosition::new(Planet::Sun, 360.0, false, Confidence::Exact),
            Err(ValidationError::LongitudeOutOfRange(360.0))
        );
    }

    #[test]
    fn rejects_negative_and_nan() {
        assert!(CelestialPosition::new(Planet::Sun, -0.5, false, Confidence::Exact).is_err());
        assert!(CelestialPosition::new(Planet::Sun, f64::NAN, false, Confidence::Exact).is_err());
    }

    #[test]
    fn luminaries_never_retrograde() {
        let p = CelestialPosition::new(Planet::Moon, 10.0, true, Confidence::Exact).unwrap();
        assert!(!p.retrograde());
    }

    #[test]
    fn serializes_derived_fields() {
        let p = CelestialPosition::new(Planet::Venus, 45.5, true, Confidence::Interpolated).unwrap();
        let json = serde_json::to_value(p).unwrap();
        assert_eq!(json["planet"], "venus");
        assert_eq!(json["sign_index"], 1);
        assert_eq!(json["sign"], "Taurus");
        assert_eq!(json["confidence"], "interpolated");
        assert_eq!(json["retrograde"], true);
    }

    #[test]
    fn wrapped_normalizes() {
        let p = CelestialPosition::wrapped(Planet::Saturn, 365.0, true, Confidence::Synthetic);
        assert!((p.longitude_deg() - 5.0).abs() < 1e-9);
        assert!(p.retrograde());
        let p = CelestialPosition::wrapped(Planet::Sun, -30.0, true, Confidence::Synthetic);
        assert!((p.longitude_deg() - 330.0).abs() < 1e-9);
        assert!(!p.retrograde());
    }

    #[test]
    fn confidence_orders_best_first() {
        assert!(Confidence::Exact < Confidence::Interpolated);
        assert!(Confidence::Interpolated < Confidence::Synthetic);
    }
}
