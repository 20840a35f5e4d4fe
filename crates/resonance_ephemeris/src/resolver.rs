//! Position resolution ladder: exact cache hit, bracketed interpolation,
//! then mean-motion estimate.
//!
//! The resolver never fails. Unusable cache entries are skipped with a
//! warning and resolution continues on the next rung.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use resonance_base::{ALL_PLANETS, CelestialPosition, Confidence, Planet, validate_longitude};
use serde::{Deserialize, Serialize};

use crate::interpolate::{bracket_fraction, interpolate_longitude, is_retrograde_motion};
use crate::mean_motion::mean_longitude;
use crate::store::{CacheEntry, EphemerisStore};

/// Tunables of the resolution ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverPolicy {
    /// Widest bracket, in days, that may be interpolated across.
    pub max_interpolation_span_days: u32,
}

impl Default for ResolverPolicy {
    fn default() -> Self {
        Self {
            max_interpolation_span_days: 4,
        }
    }
}

/// Resolves planet positions against an injected store.
#[derive(Clone)]
pub struct EphemerisResolver {
    store: Arc<dyn EphemerisStore>,
    policy: ResolverPolicy,
}

impl std::fmt::Debug for EphemerisResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EphemerisResolver")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl EphemerisResolver {
    pub fn new(store: Arc<dyn EphemerisStore>, policy: ResolverPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> &ResolverPolicy {
        &self.policy
    }

    /// Position of `planet` at `instant`.
    pub fn resolve(&self, planet: Planet, instant: DateTime<Utc>) -> CelestialPosition {
        let date = instant.date_naive();
        self.exact(planet, date)
            .or_else(|| self.interpolated(planet, date, instant))
            .unwrap_or_else(|| synthetic(planet, instant))
    }

    /// Positions of all seven planets at `instant`, in weekday order.
    pub fn resolve_all(&self, instant: DateTime<Utc>) -> Vec<CelestialPosition> {
        ALL_PLANETS.iter().map(|&p| self.resolve(p, instant)).collect()
    }

    fn exact(&self, planet: Planet, date: NaiveDate) -> Option<CelestialPosition> {
        let entry = usable(planet, date, self.store.entry(planet, date)?)?;
        tracing::debug!(%planet, %date, "ephemeris: exact cache hit");
        CelestialPosition::new(planet, entry.longitude_deg, entry.retrograde, Confidence::Exact).ok()
    }

    fn interpolated(
        &self,
        planet: Planet,
        date: NaiveDate,
        instant: DateTime<Utc>,
    ) -> Option<CelestialPosition> {
        let (before_date, before) = self.store.nearest_before(planet, date)?;
        let (after_date, after) = self.store.nearest_after(planet, date)?;
        let before = usable(planet, before_date, before)?;
        let after = usable(planet, after_date, after)?;

        let span = (after_date - before_date).num_days();
        if span > i64::from(self.policy.max_interpolation_span_days) {
            tracing::debug!(
                %planet,
                %before_date,
                %after_date,
                span,
                "ephemeris: bracket too wide to interpolate"
            );
            return None;
        }

        let t = bracket_fraction(before_date, after_date, days_since_midnight_of(before_date, instant))?;
        let longitude = interpolate_longitude(before.longitude_deg, after.longitude_deg, t);
        let retrograde = is_retrograde_motion(before.longitude_deg, after.longitude_deg);
        tracing::debug!(%planet, %before_date, %after_date, t, "ephemeris: interpolated");
        CelestialPosition::new(planet, longitude, retrograde, Confidence::Interpolated).ok()
    }
}

/// Fractional days from `date` 00:00 UTC to `instant`.
fn days_since_midnight_of(date: NaiveDate, instant: DateTime<Utc>) -> f64 {
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    (instant - midnight).num_milliseconds() as f64 / 86_400_000.0
}

/// The entry, unless its longitude is unusable.
fn usable(planet: Planet, date: NaiveDate, entry: CacheEntry) -> Option<CacheEntry> {
    match validate_longitude(entry.longitude_deg) {
        Ok(()) => Some(entry),
        Err(error) => {
            tracing::warn!(%planet, %date, %error, "ephemeris: ignoring invalid cache entry");
            None
        }
    }
}

/// Mean-motion position; never retrograde.
fn synthetic(planet: Planet, instant: DateTime<Utc>) -> CelestialPosition {
    let longitude = mean_longitude(planet, instant);
    tracing::debug!(%planet, %instant, longitude, "ephemeris: synthetic fallback");
    CelestialPosition::wrapped(planet, longitude, false, Confidence::Synthetic)
}
