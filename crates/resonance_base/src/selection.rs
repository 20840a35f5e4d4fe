//! Deterministic content selection.
//!
//! Candidates are ranked by tag overlap with the criteria; ties among the
//! best-ranked candidates are broken with a 32-bit polynomial rolling hash
//! of a seed string (`hash = hash * 31 + code_unit`, wrapping). The hash is
//! fixed so the same date and category pick the same candidate
//! on every platform. No state is read or written between calls.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::element::Element;

/// Multiplier of the rolling hash.
pub const SEED_HASH_MULTIPLIER: i32 = 31;

/// A piece of reflective content that can be selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCandidate {
    pub id: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub element_affinities: BTreeSet<Element>,
}

impl ContentCandidate {
    pub fn new<I, S>(id: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            element_affinities: BTreeSet::new(),
        }
    }

    pub fn with_affinity(mut self, element: Element) -> Self {
        self.element_affinities.insert(element);
        self
    }
}

/// What the caller is looking for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionCriteria {
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Moment element; matches a candidate's element affinities.
    #[serde(default)]
    pub element: Option<Element>,
}

impl SelectionCriteria {
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            element: None,
        }
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    /// Additive match score: one point per shared tag, one for element affinity.
    pub fn score(&self, candidate: &ContentCandidate) -> u32 {
        let tag_points = candidate.tags.intersection(&self.tags).count() as u32;
        let element_point = match self.element {
            Some(e) if candidate.element_affinities.contains(&e) => 1,
            _ => 0,
        };
        tag_points + element_point
    }
}

/// Seed for a date and content category: `YYYY-MM-DD-category`.
pub fn selection_seed(date: NaiveDate, category: &str) -> String {
    format!("{}-{category}", date.format("%Y-%m-%d"))
}

/// Rolling hash of a seed, as a non-negative value.
///
/// Folds the UTF-16 code units of `seed` with signed 32-bit wrapping
/// arithmetic, then takes the absolute value. `i32::MIN` maps to 2^31.
pub fn seed_hash(seed: &str) -> u32 {
    seed.encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_mul(SEED_HASH_MULTIPLIER).wrapping_add(unit as i32)
        })
        .unsigned_abs()
}

/// Candidates sharing the best match score, in input order.
pub fn best_matches<'a>(
    candidates: &'a [ContentCandidate],
    criteria: &SelectionCriteria,
) -> Vec<&'a ContentCandidate> {
    let scored: Vec<(u32, &ContentCandidate)> =
        candidates.iter().map(|c| (criteria.score(c), c)).collect();
    let Some(best) = scored.iter().map(|(s, _)| *s).max() else {
        return Vec::new();
    };
    scored
        .into_iter()
        .filter(|(s, _)| *s == best)
        .map(|(_, c)| c)
        .collect()
}

/// Pick one candidate for a seed.
///
/// Returns `None` only when `candidates` is empty.
pub fn select<'a>(
    candidates: &'a [ContentCandidate],
    criteria: &SelectionCriteria,
    seed: &str,
) -> Option<&'a ContentCandidate> {
    let pool = best_matches(candidates, criteria);
    if pool.is_empty() {
        return None;
    }
    let index = seed_hash(seed) as usize % pool.len();
    Some(pool[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> Vec<ContentCandidate> {
        vec![
            ContentCandidate::new("patience", ["calm", "evening"]),
            ContentCandidate::new("gratitude", ["morning", "calm"]),
            ContentCandidate::new("courage", ["morning", "action"]),
            ContentCandidate::new("stillness", ["evening"]).with_affinity(Element::Water),
            ContentCandidate::new("focus", ["action"]).with_affinity(Element::Fire),
        ]
    }

    #[test]
    fn hash_known_values() {
        assert_eq!(seed_hash(""), 0);
        assert_eq!(seed_hash("a"), 97);
        assert_eq!(seed_hash("ab"), 3105);
        assert_eq!(seed_hash("hello"), 99_162_322);
    }

    #[test]
    fn hash_wraps_like_signed_32_bit() {
        assert_eq!(seed_hash("2024-03-17-reflection"), 973_833_493);
        assert_eq!(seed_hash("2024-03-18-reflection"), 1_102_916_212);
    }

    #[test]
    fn hash_uses_utf16_code_units() {
        assert_eq!(seed_hash("é"), 233);
        // surrogate pair 0xD83D 0xDE00
        assert_eq!(seed_hash("😀"), 1_772_899);
    }

    #[test]
    fn seed_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(selection_seed(date, "reflection"), "2024-03-07-reflection");
    }

    #[test]
    fn scoring_is_additive() {
        let criteria = SelectionCriteria::with_tags(["calm", "evening"]).with_element(Element::Water);
        let lib = library();
        assert_eq!(criteria.score(&lib[0]), 2);
        assert_eq!(criteria.score(&lib[1]), 1);
        assert_eq!(criteria.score(&lib[2]), 0);
        assert_eq!(criteria.score(&lib[3]), 2);
    }

    #[test]
    fn best_matches_keeps_ties_in_order() {
        let criteria = SelectionCriteria::with_tags(["morning"]);
        let lib = library();
        let ids: Vec<&str> = best_matches(&lib, &criteria).iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["gratitude", "courage"]);
    }

    #[test]
    fn no_overlap_keeps_everyone() {
        let criteria = SelectionCriteria::with_tags(["unrelated"]);
        assert_eq!(best_matches(&library(), &criteria).len(), 5);
    }

    #[test]
    fn empty_library_selects_nothing() {
        assert!(select(&[], &SelectionCriteria::default(), "seed").is_none());
    }

    #[test]
    fn single_best_match_always_wins() {
        let criteria = SelectionCriteria::with_tags(["action"]).with_element(Element::Fire);
        let lib = library();
        for seed in ["a", "b", "2024-01-01-x"] {
            assert_eq!(select(&lib, &criteria, seed).unwrap().id, "focus");
        }
    }

    #[test]
    fn literal_pick_for_seed() {
        // no tag criteria: pool of 5, "hello" hashes to 99162322, mod 5 = 2
        let lib = library();
        let pick = select(&lib, &SelectionCriteria::default(), "hello").unwrap();
        assert_eq!(pick.id, "courage");
    }
}
