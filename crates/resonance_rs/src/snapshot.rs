//! Request and output types of a full engine pass.

use chrono::{DateTime, FixedOffset, Utc, Weekday};
use resonance_base::{
    AlignmentResult, CelestialPosition, ContentCandidate, Planet, PlanetaryStrengthScore,
    SelectionCriteria, UserElementInput,
};
use resonance_timing::{CurrentHour, TimingScoreBreakdown};
use serde::Serialize;

/// Content pool and criteria for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRequest {
    pub category: String,
    pub candidates: Vec<ContentCandidate>,
    pub criteria: SelectionCriteria,
}

/// Everything the caller knows about the moment and the user.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotRequest {
    pub now: DateTime<Utc>,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub next_sunrise: DateTime<Utc>,
    /// Local offset used for the weekday and the content date.
    pub utc_offset: FixedOffset,
    pub user: UserElementInput,
    pub content: Option<ContentRequest>,
}

/// Serializable result of one engine pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResonanceSnapshot {
    pub generated_at: DateTime<Utc>,
    pub weekday: Weekday,
    pub day_ruler: Planet,
    /// Weekday order.
    pub positions: Vec<CelestialPosition>,
    pub current_hour: CurrentHour,
    /// Weekday order.
    pub strengths: Vec<PlanetaryStrengthScore>,
    pub timing: TimingScoreBreakdown,
    pub alignment: AlignmentResult,
    pub content: Option<ContentCandidate>,
}
