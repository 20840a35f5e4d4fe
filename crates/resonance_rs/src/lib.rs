//! Convenience facade for the timing and resonance engine.
//!
//! Owns an injected ephemeris store and the loaded policies, and runs hour
//! partitioning, position resolution, strength scoring, daily scoring,
//! alignment and content selection in one call.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use resonance_rs::*;
//!
//! let engine = TimingEngine::with_defaults(Arc::new(InMemoryStore::new()));
//! let snapshot = engine.snapshot(&request)?;
//! println!("{}", serde_json::to_string_pretty(&snapshot)?);
//! ```

pub mod engine;
pub mod error;
pub mod snapshot;

pub use engine::TimingEngine;
pub use error::ResonanceError;
pub use snapshot::{ContentRequest, ResonanceSnapshot, SnapshotRequest};

// Re-export the types callers need to build requests and read snapshots.
pub use resonance_base::{
    AlignmentQuality, AlignmentResult, CelestialPosition, Confidence, ContentCandidate, Element,
    ElementSource, ElementalProfile, MomentSource, Planet, PlanetaryStrengthScore,
    SelectionCriteria, StrengthWarning, UserElementInput, ValidationError,
};
pub use resonance_config::{ConfigError, ResonanceConfig};
pub use resonance_ephemeris::{CacheEntry, EphemerisStore, InMemoryStore};
pub use resonance_timing::{
    CurrentHour, CycleState, HourError, PlanetaryHourWindow, SolarDay, TimingError, TimingQuality,
    TimingScoreBreakdown,
};
