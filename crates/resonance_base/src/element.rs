//! The four classical elements and their pairwise interaction.
//!
//! Signs cycle fire, earth, air, water from Aries. Each planet carries one
//! classical element, used to tone a planetary hour or a day.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Classical element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Air,
    Earth,
}

/// All 4 elements.
pub const ALL_ELEMENTS: [Element; 4] = [Element::Fire, Element::Water, Element::Air, Element::Earth];

impl Element {
    /// Lowercase identifier, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Air => "air",
            Self::Earth => "earth",
        }
    }

    /// 0-based index into [`ALL_ELEMENTS`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Fire => 0,
            Self::Water => 1,
            Self::Air => 2,
            Self::Earth => 3,
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fire" => Ok(Self::Fire),
            "water" => Ok(Self::Water),
            "air" => Ok(Self::Air),
            "earth" => Ok(Self::Earth),
            _ => Err(ValidationError::UnknownElement(s.to_string())),
        }
    }
}

/// How two elements interact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interaction {
    Same,
    Supportive,
    Neutral,
    Opposing,
}

impl Interaction {
    /// Same element or a supportive pairing.
    pub const fn agrees(self) -> bool {
        matches!(self, Self::Same | Self::Supportive)
    }
}

/// Interaction matrix, indexed by [`Element::index`].
///
/// Symmetric: fire-air and water-earth support, fire-water and air-earth
/// oppose, fire-earth and water-air are neutral.
#[rustfmt::skip]
const INTERACTION_MATRIX: [[Interaction; 4]; 4] = {
    use Interaction::*;
    [
        //  Fire        Water       Air         Earth
        [Same,       Opposing,   Supportive, Neutral   ], // Fire
        [Opposing,   Same,       Neutral,    Supportive], // Water
        [Supportive, Neutral,    Same,       Opposing  ], // Air
        [Neutral,    Supportive, Opposing,   Same      ], // Earth
    ]
};

/// Interaction between two elements. Order does not matter.
pub const fn interaction(a: Element, b: Element) -> Interaction {
    INTERACTION_MATRIX[a.index() as usize][b.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_is_symmetric() {
        for a in ALL_ELEMENTS {
            for b in ALL_ELEMENTS {
                assert_eq!(interaction(a, b), interaction(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn diagonal_is_same() {
        for e in ALL_ELEMENTS {
            assert_eq!(interaction(e, e), Interaction::Same);
        }
    }

    #[test]
    fn classical_pairs() {
        assert_eq!(interaction(Element::Fire, Element::Air), Interaction::Supportive);
        assert_eq!(interaction(Element::Water, Element::Earth), Interaction::Supportive);
        assert_eq!(interaction(Element::Fire, Element::Water), Interaction::Opposing);
        assert_eq!(interaction(Element::Air, Element::Earth), Interaction::Opposing);
        assert_eq!(interaction(Element::Fire, Element::Earth), Interaction::Neutral);
        assert_eq!(interaction(Element::Water, Element::Air), Interaction::Neutral);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Fire".parse::<Element>(), Ok(Element::Fire));
        assert_eq!(" WATER ".parse::<Element>(), Ok(Element::Water));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "aether".parse::<Element>(),
            Err(ValidationError::UnknownElement("aether".into()))
        );
    }

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }
}
