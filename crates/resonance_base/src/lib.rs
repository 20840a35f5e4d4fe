//! Pure building blocks of the resonance engine.
//!
//! This crate provides:
//! - The seven classical planets, twelve signs and four elements
//! - Essential dignity, combustion and the 0-100 strength model
//! - User/moment elemental alignment
//! - Deterministic, seeded content selection
//!
//! Every function here is pure: no I/O, no clock, no shared state.

pub mod alignment;
pub mod combustion;
pub mod dignity;
pub mod element;
pub mod error;
pub mod planet;
pub mod position;
pub mod selection;
pub mod sign;
pub mod strength;
pub mod util;
pub mod weekday;

pub use alignment::{
    AlignmentPolicy, AlignmentQuality, AlignmentResult, ElementSource, ElementalProfile,
    MAX_HARMONY, MIN_HARMONY, MomentInput, MomentSource, UserElementInput, alignment,
    resolve_moment_element, resolve_user_element, score_pair,
};
pub use combustion::{combustion_threshold, is_combust};
pub use dignity::{Dignity, detriment_signs, dignity_in_sign, exaltation_sign, fall_sign, ruled_signs};
pub use element::{ALL_ELEMENTS, Element, Interaction, interaction};
pub use error::ValidationError;
pub use planet::{ALL_PLANETS, CHALDEAN_ORDER, Planet, chaldean_successor, sign_ruler};
pub use position::{CelestialPosition, Confidence, validate_longitude};
pub use selection::{
    ContentCandidate, SelectionCriteria, best_matches, select, seed_hash, selection_seed,
};
pub use sign::{ALL_SIGNS, SIGN_SPAN_DEG, Sign, SignPlacement, sign_from_longitude};
pub use strength::{
    PlanetaryStrengthScore, StrengthInput, StrengthPolicy, StrengthWarning, Suitability,
    planetary_strength, strengths_for_positions,
};
pub use util::{angular_separation, normalize_360, signed_delta};
pub use weekday::{day_ruler, local_weekday};
