//! [`TimingEngine`]: one owner for the store, the policies and a full pass.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use resonance_base::{
    AlignmentResult, CelestialPosition, ContentCandidate, MomentInput, Planet,
    PlanetaryStrengthScore, SelectionCriteria, UserElementInput, alignment, day_ruler, select,
    selection_seed, strengths_for_positions,
};
use resonance_config::ResonanceConfig;
use resonance_ephemeris::{EphemerisResolver, EphemerisStore};
use resonance_timing::{SolarDay, TimingScoreBreakdown, score_day};

use crate::error::ResonanceError;
use crate::snapshot::{ResonanceSnapshot, SnapshotRequest};

/// Resolves positions against an injected store and runs every scorer with
/// the configured policies. Cheap to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct TimingEngine {
    resolver: EphemerisResolver,
    config: ResonanceConfig,
}

impl TimingEngine {
    /// Engine with a validated configuration.
    pub fn new(
        store: Arc<dyn EphemerisStore>,
        config: ResonanceConfig,
    ) -> Result<Self, ResonanceError> {
        config.validate()?;
        let resolver = EphemerisResolver::new(store, config.ephemeris.clone());
        Ok(Self { resolver, config })
    }

    /// Engine with built-in default policies.
    pub fn with_defaults(store: Arc<dyn EphemerisStore>) -> Self {
        let config = ResonanceConfig::default();
        Self {
            resolver: EphemerisResolver::new(store, config.ephemeris.clone()),
            config,
        }
    }

    /// Engine with policies loaded from files and environment.
    pub fn from_environment(store: Arc<dyn EphemerisStore>) -> Result<Self, ResonanceError> {
        Self::new(store, ResonanceConfig::load()?)
    }

    pub fn config(&self) -> &ResonanceConfig {
        &self.config
    }

    /// All seven positions at `instant`, weekday order.
    pub fn positions(&self, instant: DateTime<Utc>) -> Vec<CelestialPosition> {
        self.resolver.resolve_all(instant)
    }

    /// Position of one planet at `instant`.
    pub fn position(&self, planet: Planet, instant: DateTime<Utc>) -> CelestialPosition {
        self.resolver.resolve(planet, instant)
    }

    /// Strength of every planet at `instant`, weekday order.
    pub fn strengths(
        &self,
        instant: DateTime<Utc>,
    ) -> Result<Vec<PlanetaryStrengthScore>, ResonanceError> {
        let strengths = strengths_for_positions(&self.positions(instant), &self.config.strength)?;
        trace_debilities(&strengths);
        Ok(strengths)
    }

    /// Daily score from the strengths at `instant`.
    pub fn daily_score(
        &self,
        instant: DateTime<Utc>,
        weekday: Weekday,
    ) -> Result<TimingScoreBreakdown, ResonanceError> {
        Ok(score_day(&self.strengths(instant)?, weekday, &self.config.timing)?)
    }

    /// Alignment of the user with the hour ruler, or the day ruler when no
    /// hour is known.
    pub fn alignment(
        &self,
        user: &UserElementInput,
        hour_ruler: Option<Planet>,
        weekday: Weekday,
    ) -> AlignmentResult {
        let moment = MomentInput {
            hour_ruler,
            day_ruler: day_ruler(weekday),
        };
        alignment(user, &moment, &self.config.alignment)
    }

    /// Content for `category` on `date`; `None` for an empty pool.
    pub fn select_content<'a>(
        &self,
        candidates: &'a [ContentCandidate],
        criteria: &SelectionCriteria,
        date: NaiveDate,
        category: &str,
    ) -> Option<&'a ContentCandidate> {
        select(candidates, criteria, &selection_seed(date, category))
    }

    /// Run every component for one moment.
    pub fn snapshot(&self, request: &SnapshotRequest) -> Result<ResonanceSnapshot, ResonanceError> {
        let span = tracing::info_span!("snapshot", now = %request.now);
        let _guard = span.enter();

        let day = SolarDay::with_offset(
            request.sunrise,
            request.sunset,
            request.next_sunrise,
            request.utc_offset,
        )?;
        let current_hour = day.current(request.now)?;

        let positions = self.positions(request.now);
        let strengths = strengths_for_positions(&positions, &self.config.strength)?;
        trace_debilities(&strengths);
        let timing = score_day(&strengths, day.weekday(), &self.config.timing)?;
        let alignment = self.alignment(
            &request.user,
            Some(current_hour.window.ruling_planet),
            day.weekday(),
        );

        let local_date = request
            .sunrise
            .with_timezone(&request.utc_offset)
            .date_naive();
        let content = request.content.as_ref().and_then(|c| {
            self.select_content(&c.candidates, &c.criteria, local_date, &c.category)
                .cloned()
        });

        tracing::debug!(
            weekday = %day.weekday(),
            hour_ruler = %current_hour.window.ruling_planet,
            total = timing.total_score,
            harmony = alignment.harmony_score,
            content = content.as_ref().map(|c| c.id.as_str()),
            "snapshot assembled"
        );

        Ok(ResonanceSnapshot {
            generated_at: request.now,
            weekday: day.weekday(),
            day_ruler: day.day_ruler(),
            positions,
            current_hour,
            strengths,
            timing,
            alignment,
            content,
        })
    }
}

/// Debug event per weakened planet, with its warning codes.
fn trace_debilities(strengths: &[PlanetaryStrengthScore]) {
    for score in strengths.iter().filter(|s| s.dignity.is_debility()) {
        let codes: Vec<&str> = score.warnings.iter().map(|w| w.code()).collect();
        tracing::debug!(
            planet = %score.planet,
            dignity = %score.dignity,
            power = score.final_power,
            warnings = %codes.join(","),
            "debilitated planet"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resonance_ephemeris::InMemoryStore;

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TimingEngine>();
    }

    #[test]
    fn invalid_config_rejected() {
        let mut config = ResonanceConfig::default();
        config.timing.others_weight = 0.9;
        assert!(matches!(
            TimingEngine::new(Arc::new(InMemoryStore::new()), config),
            Err(ResonanceError::Config(_))
        ));
    }

    #[test]
    fn alignment_falls_back_to_day_ruler() {
        let engine = TimingEngine::with_defaults(Arc::new(InMemoryStore::new()));
        let result = engine.alignment(&UserElementInput::default(), None, Weekday::Sat);
        assert_eq!(result.moment_element, Planet::Saturn.element());
        assert_eq!(result.user_element, resonance_base::Element::Earth);
        assert_eq!(result.quality, resonance_base::AlignmentQuality::Perfect);
    }
}
