//! Validation errors for caller-supplied input.

use thiserror::Error;

use crate::planet::Planet;

/// Input rejected at the boundary of a pure computation.
///
/// Invalid values are never clamped into a plausible-looking result;
/// the caller gets one of these instead.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// Planet identifier is not one of the seven classical bodies.
    #[error("unknown planet identifier: {0:?}")]
    UnknownPlanet(String),

    /// Element value is not one of fire, water, air, earth.
    #[error("unknown element: {0:?}")]
    UnknownElement(String),

    /// Ecliptic longitude outside [0, 360) or not finite.
    #[error("longitude out of range [0, 360): {0}")]
    LongitudeOutOfRange(f64),

    /// Sign index outside [0, 11].
    #[error("sign index out of range [0, 11]: {0}")]
    SignIndexOutOfRange(u8),

    /// Degree within sign outside [0, 30) or not finite.
    #[error("sign degree out of range [0, 30): {0}")]
    SignDegreeOutOfRange(f64),

    /// Sign index/degree pair does not describe the given longitude.
    #[error("sign {sign_index} at {sign_degree} deg does not match longitude {longitude}")]
    InconsistentSign {
        longitude: f64,
        sign_index: u8,
        sign_degree: f64,
    },

    /// A planet required by the computation was not supplied.
    #[error("missing planet: {0}")]
    MissingPlanet(Planet),

    /// A planet was supplied more than once.
    #[error("duplicate planet: {0}")]
    DuplicatePlanet(Planet),

    /// A policy table value is unusable.
    #[error("invalid policy value for '{field}': {reason}")]
    InvalidPolicy {
        field: &'static str,
        reason: &'static str,
    },
}
