//! Approximate planet positions for classical reckoning.
//!
//! This crate provides:
//! - The [`EphemerisStore`] seam and an in-memory [`InMemoryStore`]
//! - Wraparound-safe linear interpolation of longitudes
//! - A J2000.0 mean-motion table for the synthetic fallback
//! - [`EphemerisResolver`], which walks exact, interpolated and synthetic
//!   tiers and always returns a position

pub mod interpolate;
pub mod mean_motion;
pub mod resolver;
pub mod store;

pub use interpolate::{bracket_fraction, interpolate_longitude, is_retrograde_motion};
pub use mean_motion::{MeanElements, days_since_j2000, j2000, mean_elements, mean_longitude};
pub use resolver::{EphemerisResolver, ResolverPolicy};
pub use store::{CacheEntry, EphemerisStore, InMemoryStore};
