//! Elemental alignment between a person and a moment.
//!
//! The person's element comes from their profile when one is supplied,
//! otherwise from a caller-derived fallback, otherwise from the policy
//! default. The moment's element comes from the current hour's ruler, or
//! the day ruler when no hour is known. The result always records which
//! source was used.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Interaction, interaction};
use crate::error::ValidationError;
use crate::planet::Planet;

/// Elemental profile of a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementalProfile {
    pub primary: Element,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Element>,
}

impl ElementalProfile {
    pub fn new(primary: Element) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    pub fn with_secondary(mut self, secondary: Element) -> Self {
        self.secondary = Some(secondary);
        self
    }
}

/// Where the user element came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementSource {
    /// Explicit profile value.
    Primary,
    /// Derived fallback supplied by the caller.
    Fallback,
    /// Unconditioned policy default.
    Default,
}

/// Where the moment element came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MomentSource {
    CurrentHour,
    DayRuler,
}

/// Alignment quality, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentQuality {
    Perfect,
    Strong,
    Moderate,
    Weak,
    Opposing,
}

/// Tunable scores of the alignment model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentPolicy {
    pub perfect_score: u8,
    pub strong_score: u8,
    pub moderate_score: u8,
    pub weak_score: u8,
    pub opposing_score: u8,
    /// Points added or removed when the secondary element agrees or disagrees.
    pub secondary_nudge: u8,
    /// User element when neither profile nor fallback is known.
    pub default_element: Element,
}

/// Lowest reportable harmony score.
pub const MIN_HARMONY: u8 = 20;
/// Highest reportable harmony score.
pub const MAX_HARMONY: u8 = 100;

impl Default for AlignmentPolicy {
    fn default() -> Self {
        Self {
            perfect_score: 100,
            strong_score: 80,
            moderate_score: 60,
            weak_score: 40,
            opposing_score: 25,
            secondary_nudge: 5,
            default_element: Element::Earth,
        }
    }
}

impl AlignmentPolicy {
    pub fn base_score(&self, quality: AlignmentQuality) -> u8 {
        match quality {
            AlignmentQuality::Perfect => self.perfect_score,
            AlignmentQuality::Strong => self.strong_score,
            AlignmentQuality::Moderate => self.moderate_score,
            AlignmentQuality::Weak => self.weak_score,
            AlignmentQuality::Opposing => self.opposing_score,
        }
    }

    /// Base scores must fall strictly with quality and stay in [20, 100].
    pub fn validate(&self) -> Result<(), ValidationError> {
        let scores = [
            self.perfect_score,
            self.strong_score,
            self.moderate_score,
            self.weak_score,
            self.opposing_score,
        ];
        if scores.windows(2).any(|w| w[0] <= w[1]) {
            return Err(ValidationError::InvalidPolicy {
                field: "alignment scores",
                reason: "must strictly decrease from perfect to opposing",
            });
        }
        if self.perfect_score > MAX_HARMONY || self.opposing_score < MIN_HARMONY {
            return Err(ValidationError::InvalidPolicy {
                field: "alignment scores",
                reason: "must lie in [20, 100]",
            });
        }
        Ok(())
    }
}

/// Everything known about the user's element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UserElementInput {
    pub profile: Option<ElementalProfile>,
    /// Element derived by the caller when no profile is available.
    pub fallback: Option<Element>,
}

/// Everything known about the moment's element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentInput {
    pub hour_ruler: Option<Planet>,
    pub day_ruler: Planet,
}

/// Outcome of an alignment check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentResult {
    pub element_source: ElementSource,
    pub user_element: Element,
    pub moment_source: MomentSource,
    pub moment_element: Element,
    pub quality: AlignmentQuality,
    /// In [20, 100].
    pub harmony_score: u8,
}

/// Pick the user element and report where it came from.
pub fn resolve_user_element(
    input: &UserElementInput,
    policy: &AlignmentPolicy,
) -> (Element, Option<Element>, ElementSource) {
    match (input.profile, input.fallback) {
        (Some(profile), _) => (profile.primary, profile.secondary, ElementSource::Primary),
        (None, Some(fallback)) => (fallback, None, ElementSource::Fallback),
        (None, None) => (policy.default_element, None, ElementSource::Default),
    }
}

/// Pick the moment element and report where it came from.
pub fn resolve_moment_element(input: &MomentInput) -> (Element, MomentSource) {
    match input.hour_ruler {
        Some(ruler) => (ruler.element(), MomentSource::CurrentHour),
        None => (input.day_ruler.element(), MomentSource::DayRuler),
    }
}

/// Compare the user's element against the moment's element.
pub fn alignment(
    user: &UserElementInput,
    moment: &MomentInput,
    policy: &AlignmentPolicy,
) -> AlignmentResult {
    let (user_element, secondary, element_source) = resolve_user_element(user, policy);
    let (moment_element, moment_source) = resolve_moment_element(moment);
    let (quality, harmony_score) = score_pair(user_element, secondary, moment_element, policy);
    AlignmentResult {
        element_source,
        user_element,
        moment_source,
        moment_element,
        quality,
        harmony_score,
    }
}

/// Quality and harmony score for a primary/secondary pair against a moment.
pub fn score_pair(
    primary: Element,
    secondary: Option<Element>,
    moment: Element,
    policy: &AlignmentPolicy,
) -> (AlignmentQuality, u8) {
    let secondary_interaction = secondary.map(|s| interaction(s, moment));
    let agrees = secondary_interaction.is_some_and(Interaction::agrees);
    let disagrees = secondary_interaction == Some(Interaction::Opposing);

    let (quality, reclassified) = match interaction(primary, moment) {
        Interaction::Same => (AlignmentQuality::Perfect, false),
        Interaction::Supportive => (AlignmentQuality::Strong, false),
        Interaction::Neutral if disagrees => (AlignmentQuality::Weak, true),
        Interaction::Neutral => (AlignmentQuality::Moderate, false),
        Interaction::Opposing if agrees => (AlignmentQuality::Weak, true),
        Interaction::Opposing => (AlignmentQuality::Opposing, false),
    };

    let base = policy.base_score(quality) as i16;
    let nudge = policy.secondary_nudge as i16;
    let adjusted = match (reclassified, agrees, disagrees) {
        (false, true, _) => base + nudge,
        (false, _, true) => base - nudge,
        _ => base,
    };
    let harmony = adjusted.clamp(MIN_HARMONY as i16, MAX_HARMONY as i16) as u8;
    (quality, harmony)
}
