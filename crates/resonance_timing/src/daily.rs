//! Composite daily timing score.
//!
//! ```text
//! total = round(day_ruler * 0.50 + moon * 0.30 + others_average * 0.20)
//! ```
//!
//! The others average skips bodies below the weak floor and falls back to
//! a neutral default when none remain. Weights, floors and label
//! breakpoints come from [`TimingPolicy`].

use chrono::Weekday;
use resonance_base::{ALL_PLANETS, Planet, PlanetaryStrengthScore, day_ruler};
use serde::{Deserialize, Serialize};

use crate::error::TimingError;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Weights, floors and breakpoints of the daily score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingPolicy {
    pub day_ruler_weight: f64,
    pub moon_weight: f64,
    pub others_weight: f64,
    /// Other bodies below this power are left out of the average.
    pub weak_floor: u8,
    /// Others average when every other body is below the floor.
    pub neutral_default: f64,
    pub favorable_min: u8,
    pub neutral_min: u8,
    pub growth_min: u8,
    pub initiation_min: u8,
    pub review_min: u8,
}

impl Default for TimingPolicy {
    fn default() -> Self {
        Self {
            day_ruler_weight: 0.50,
            moon_weight: 0.30,
            others_weight: 0.20,
            weak_floor: 30,
            neutral_default: 40.0,
            favorable_min: 70,
            neutral_min: 40,
            growth_min: 75,
            initiation_min: 55,
            review_min: 35,
        }
    }
}

impl TimingPolicy {
    pub fn validate(&self) -> Result<(), TimingError> {
        let weights = [self.day_ruler_weight, self.moon_weight, self.others_weight];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(TimingError::InvalidPolicy {
                field: "weights",
                reason: "must be finite and non-negative",
            });
        }
        if (weights.iter().sum::<f64>() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(TimingError::InvalidPolicy {
                field: "weights",
                reason: "must sum to 1",
            });
        }
        if !(0.0..=100.0).contains(&self.neutral_default) {
            return Err(TimingError::InvalidPolicy {
                field: "neutral_default",
                reason: "must lie in [0, 100]",
            });
        }
        if self.weak_floor > 100 {
            return Err(TimingError::InvalidPolicy {
                field: "weak_floor",
                reason: "must lie in [0, 100]",
            });
        }
        if !(self.neutral_min < self.favorable_min && self.favorable_min <= 100) {
            return Err(TimingError::InvalidPolicy {
                field: "favorable_min",
                reason: "quality breakpoints must increase and stay within 100",
            });
        }
        if !(self.review_min < self.initiation_min
            && self.initiation_min < self.growth_min
            && self.growth_min <= 100)
        {
            return Err(TimingError::InvalidPolicy {
                field: "growth_min",
                reason: "cycle breakpoints must increase and stay within 100",
            });
        }
        Ok(())
    }

    pub fn quality(&self, total: u8) -> TimingQuality {
        if total >= self.favorable_min {
            TimingQuality::Favorable
        } else if total >= self.neutral_min {
            TimingQuality::Neutral
        } else {
            TimingQuality::Delicate
        }
    }

    pub fn cycle_state(&self, total: u8) -> CycleState {
        if total >= self.growth_min {
            CycleState::GrowthExpansion
        } else if total >= self.initiation_min {
            CycleState::Initiation
        } else if total >= self.review_min {
            CycleState::ReviewRestraint
        } else {
            CycleState::CompletionClosure
        }
    }
}

/// Three-state label of the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingQuality {
    Favorable,
    Neutral,
    Delicate,
}

/// Four-state cycle label of the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CycleState {
    GrowthExpansion,
    Initiation,
    ReviewRestraint,
    CompletionClosure,
}

/// Every term of a daily score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingScoreBreakdown {
    pub day_ruler: Planet,
    pub day_ruler_power: u8,
    pub day_ruler_contribution: f64,
    pub moon_power: u8,
    pub moon_contribution: f64,
    pub others_average: f64,
    pub others_contribution: f64,
    /// Other bodies at or above the weak floor.
    pub others_counted: u8,
    pub total_score: u8,
    pub cycle_state: CycleState,
    pub timing_quality: TimingQuality,
}

/// Score a day from one strength score per planet.
///
/// Input order does not matter. On Mondays the Moon is also the day ruler
/// and the others are the six remaining bodies.
pub fn score_day(
    scores: &[PlanetaryStrengthScore],
    weekday: Weekday,
    policy: &TimingPolicy,
) -> Result<TimingScoreBreakdown, TimingError> {
    let powers = collect_powers(scores)?;
    let power_of = |p: Planet| powers[p.index() as usize];

    let ruler = day_ruler(weekday);
    let day_ruler_power = power_of(ruler);
    let moon_power = power_of(Planet::Moon);

    let counted: Vec<u8> = ALL_PLANETS
        .iter()
        .filter(|&&p| p != ruler && p != Planet::Moon)
        .map(|&p| power_of(p))
        .filter(|&power| power >= policy.weak_floor)
        .collect();
    let others_average = if !counted.is_empty() {
        counted.iter().map(|&p| f64::from(p)).sum::<f64>() / counted.len() as f64
    } else if powers.iter().all(|&p| p == 0) {
        // a fully powerless day stays at zero
        0.0
    } else {
        policy.neutral_default
    };

    let day_ruler_contribution = f64::from(day_ruler_power) * policy.day_ruler_weight;
    let moon_contribution = f64::from(moon_power) * policy.moon_weight;
    let others_contribution = others_average * policy.others_weight;
    let total = day_ruler_contribution + moon_contribution + others_contribution;
    let total_score = total.round().clamp(0.0, 100.0) as u8;

    Ok(TimingScoreBreakdown {
        day_ruler: ruler,
        day_ruler_power,
        day_ruler_contribution,
        moon_power,
        moon_contribution,
        others_average,
        others_contribution,
        others_counted: counted.len() as u8,
        total_score,
        cycle_state: policy.cycle_state(total_score),
        timing_quality: policy.quality(total_score),
    })
}

/// Powers indexed by [`Planet::index`], each planet exactly once.
fn collect_powers(scores: &[PlanetaryStrengthScore]) -> Result<[u8; 7], TimingError> {
    let mut slots: [Option<u8>; 7] = [None; 7];
    for score in scores {
        if score.final_power > 100 {
            return Err(TimingError::PowerOutOfRange {
                planet: score.planet,
                power: score.final_power,
            });
        }
        let slot = &mut slots[score.planet.index() as usize];
        if slot.is_some() {
            return Err(TimingError::DuplicatePlanet(score.planet));
        }
        *slot = Some(score.final_power);
    }
    let mut powers = [0u8; 7];
    for planet in ALL_PLANETS {
        powers[planet.index() as usize] =
            slots[planet.index() as usize].ok_or(TimingError::MissingPlanet(planet))?;
    }
    Ok(powers)
}
