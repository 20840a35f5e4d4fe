//! Classical planetary strength.
//!
//! Pure math, no I/O. The score is additive:
//!
//! ```text
//! final = clamp(round(base + dignity + combustion + retrograde), 0, 100)
//! ```
//!
//! 1. Dignity: rulership and exaltation add, detriment and fall subtract.
//! 2. Combustion: fixed penalty when combust (never the luminaries, and
//!    not for synthetic Mercury or Venus, whose mean longitude is the Sun's).
//! 3. Retrograde: fixed penalty when retrograde (never the luminaries).
//!
//! Early-degree and low-confidence caveats are reported as warnings only.
//! All point values come from [`StrengthPolicy`].

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::combustion::is_combust;
use crate::dignity::{Dignity, dignity_in_sign};
use crate::error::ValidationError;
use crate::planet::Planet;
use crate::position::{CelestialPosition, Confidence, validate_longitude};
use crate::sign::{SIGN_SPAN_DEG, Sign, sign_from_longitude};

/// Tolerance when checking a sign/degree pair against its longitude.
const SIGN_CONSISTENCY_TOLERANCE_DEG: f64 = 1e-6;

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Point values and thresholds of the strength model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengthPolicy {
    /// Starting power before any modifier.
    pub base_power: f64,
    pub rulership_bonus: f64,
    /// Smaller than `rulership_bonus`.
    pub exaltation_bonus: f64,
    /// Magnitude subtracted in detriment.
    pub detriment_penalty: f64,
    /// Magnitude subtracted in fall; larger than `detriment_penalty`.
    pub fall_penalty: f64,
    pub combustion_penalty: f64,
    pub retrograde_penalty: f64,
    /// Degrees into a sign below which a "just entered sign" warning is raised.
    pub early_degree_threshold: f64,
    /// Minimum final power for outward action.
    pub outer_floor: u8,
    /// Minimum final power for reflective work.
    pub inner_floor: u8,
}

impl Default for StrengthPolicy {
    fn default() -> Self {
        Self {
            base_power: 50.0,
            rulership_bonus: 30.0,
            exaltation_bonus: 20.0,
            detriment_penalty: 15.0,
            fall_penalty: 25.0,
            combustion_penalty: 20.0,
            retrograde_penalty: 10.0,
            early_degree_threshold: 1.0,
            outer_floor: 60,
            inner_floor: 40,
        }
    }
}

impl StrengthPolicy {
    /// Reject tables that break the ordering of the dignity scale.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let magnitudes = [
            ("base_power", self.base_power),
            ("rulership_bonus", self.rulership_bonus),
            ("exaltation_bonus", self.exaltation_bonus),
            ("detriment_penalty", self.detriment_penalty),
            ("fall_penalty", self.fall_penalty),
            ("combustion_penalty", self.combustion_penalty),
            ("retrograde_penalty", self.retrograde_penalty),
        ];
        for (field, value) in magnitudes {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidPolicy {
                    field,
                    reason: "must be a finite non-negative number",
                });
            }
        }
        if self.base_power > 100.0 {
            return Err(ValidationError::InvalidPolicy {
                field: "base_power",
                reason: "must not exceed 100",
            });
        }
        if self.exaltation_bonus > self.rulership_bonus {
            return Err(ValidationError::InvalidPolicy {
                field: "exaltation_bonus",
                reason: "must not exceed rulership_bonus",
            });
        }
        if self.detriment_penalty > self.fall_penalty {
            return Err(ValidationError::InvalidPolicy {
                field: "detriment_penalty",
                reason: "must not exceed fall_penalty",
            });
        }
        if !(0.0..SIGN_SPAN_DEG).contains(&self.early_degree_threshold) {
            return Err(ValidationError::InvalidPolicy {
                field: "early_degree_threshold",
                reason: "must lie in [0, 30)",
            });
        }
        if self.outer_floor > 100 || self.inner_floor > 100 {
            return Err(ValidationError::InvalidPolicy {
                field: "outer_floor",
                reason: "suitability floors must lie in [0, 100]",
            });
        }
        Ok(())
    }

    /// Signed dignity contribution.
    pub fn dignity_points(&self, dignity: Dignity) -> f64 {
        match dignity {
            Dignity::Rulership => self.rulership_bonus,
            Dignity::Exaltation => self.exaltation_bonus,
            Dignity::Neutral => 0.0,
            Dignity::Detriment => -self.detriment_penalty,
            Dignity::Fall => -self.fall_penalty,
        }
    }
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Caveat attached to a valid strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthWarning {
    Detriment,
    Fall,
    Combust,
    JustEnteredSign,
    Retrograde,
    LowConfidencePosition,
}

impl StrengthWarning {
    /// Stable warning code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Detriment => "detriment",
            Self::Fall => "fall",
            Self::Combust => "combust",
            Self::JustEnteredSign => "just_entered_sign",
            Self::Retrograde => "retrograde",
            Self::LowConfidencePosition => "low_confidence_position",
        }
    }
}

impl Display for StrengthWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// What the planet's power is good for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Suitability {
    /// Strong enough for outward action.
    pub outer: bool,
    /// Strong enough for reflective work.
    pub inner: bool,
}

/// Input to [`planetary_strength`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthInput {
    pub planet: Planet,
    pub sign_index: u8,
    pub sign_degree: f64,
    pub longitude_deg: f64,
    pub sun_longitude_deg: f64,
    pub retrograde: bool,
    pub confidence: Confidence,
}

impl StrengthInput {
    /// Input for an exact position given only the longitude.
    pub fn from_longitude(
        planet: Planet,
        longitude_deg: f64,
        sun_longitude_deg: f64,
        retrograde: bool,
    ) -> Self {
        let placement = sign_from_longitude(longitude_deg);
        Self {
            planet,
            sign_index: placement.sign_index,
            sign_degree: placement.sign_degree,
            longitude_deg,
            sun_longitude_deg,
            retrograde,
            confidence: Confidence::Exact,
        }
    }

    /// Input for a resolved position.
    pub fn from_position(position: &CelestialPosition, sun_longitude_deg: f64) -> Self {
        Self {
            planet: position.planet(),
            sign_index: position.sign_index(),
            sign_degree: position.sign_degree(),
            longitude_deg: position.longitude_deg(),
            sun_longitude_deg,
            retrograde: position.retrograde(),
            confidence: position.confidence(),
        }
    }

    fn validate(&self) -> Result<Sign, ValidationError> {
        validate_longitude(self.longitude_deg)?;
        validate_longitude(self.sun_longitude_deg)?;
        let sign = Sign::from_index(self.sign_index)?;
        if !self.sign_degree.is_finite() || !(0.0..SIGN_SPAN_DEG).contains(&self.sign_degree) {
            return Err(ValidationError::SignDegreeOutOfRange(self.sign_degree));
        }
        let derived = self.sign_index as f64 * SIGN_SPAN_DEG + self.sign_degree;
        if (derived - self.longitude_deg).abs() > SIGN_CONSISTENCY_TOLERANCE_DEG {
            return Err(ValidationError::InconsistentSign {
                longitude: self.longitude_deg,
                sign_index: self.sign_index,
                sign_degree: self.sign_degree,
            });
        }
        Ok(sign)
    }

    /// Synthetic Mercury and Venus sit on the mean Sun, so their elongation
    /// carries no information.
    fn combustion_known(&self) -> bool {
        !(self.confidence == Confidence::Synthetic
            && matches!(self.planet, Planet::Mercury | Planet::Venus))
    }
}

/// Strength score for one planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetaryStrengthScore {
    pub planet: Planet,
    /// Integer power in [0, 100].
    pub final_power: u8,
    pub dignity: Dignity,
    /// Signed dignity points.
    pub dignity_component: f64,
    /// Zero or negative.
    pub combustion_penalty: f64,
    /// Zero or negative.
    pub retrograde_modifier: f64,
    /// In evaluation order.
    pub warnings: Vec<StrengthWarning>,
    pub suitability: Suitability,
}

impl PlanetaryStrengthScore {
    pub fn has_warning(&self, warning: StrengthWarning) -> bool {
        self.warnings.contains(&warning)
    }
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Score one planet's classical strength.
///
/// Identical inputs always produce identical output.
pub fn planetary_strength(
    input: &StrengthInput,
    policy: &StrengthPolicy,
) -> Result<PlanetaryStrengthScore, ValidationError> {
    let sign = input.validate()?;
    let mut warnings = Vec::new();

    let dignity = dignity_in_sign(input.planet, sign);
    let dignity_component = policy.dignity_points(dignity);
    match dignity {
        Dignity::Detriment => warnings.push(StrengthWarning::Detriment),
        Dignity::Fall => warnings.push(StrengthWarning::Fall),
        _ => {}
    }

    let combustion_penalty = if input.combustion_known()
        && is_combust(
            input.planet,
            input.longitude_deg,
            input.sun_longitude_deg,
            input.retrograde,
        )
    {
        warnings.push(StrengthWarning::Combust);
        -policy.combustion_penalty
    } else {
        0.0
    };

    if input.sign_degree < policy.early_degree_threshold {
        warnings.push(StrengthWarning::JustEnteredSign);
    }

    let retrograde_modifier = if input.retrograde && input.planet.can_retrograde() {
        warnings.push(StrengthWarning::Retrograde);
        -policy.retrograde_penalty
    } else {
        0.0
    };

    if input.confidence == Confidence::Synthetic {
        warnings.push(StrengthWarning::LowConfidencePosition);
    }

    let raw = policy.base_power + dignity_component + combustion_penalty + retrograde_modifier;
    let final_power = raw.round().clamp(0.0, 100.0) as u8;

    Ok(PlanetaryStrengthScore {
        planet: input.planet,
        final_power,
        dignity,
        dignity_component,
        combustion_penalty,
        retrograde_modifier,
        warnings,
        suitability: Suitability {
            outer: final_power >= policy.outer_floor,
            inner: final_power >= policy.inner_floor,
        },
    })
}

/// Score every position against the Sun found among them.
///
/// Output order follows input order.
pub fn strengths_for_positions(
    positions: &[CelestialPosition],
    policy: &StrengthPolicy,
) -> Result<Vec<PlanetaryStrengthScore>, ValidationError> {
    let sun = positions
        .iter()
        .find(|p| p.planet() == Planet::Sun)
        .ok_or(ValidationError::MissingPlanet(Planet::Sun))?;
    positions
        .iter()
        .map(|p| planetary_strength(&StrengthInput::from_position(p, sun.longitude_deg()), policy))
        .collect()
}
