//! The seven classical planets, sign rulership and Chaldean order.
//!
//! Sun and Moon are counted as planets, as in classical reckoning.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::ValidationError;
use crate::sign::Sign;

/// The 7 classical planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
}

/// All 7 planets in weekday order (Sunday's ruler first).
pub const ALL_PLANETS: [Planet; 7] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
];

/// Descending Chaldean order, slowest to fastest apparent motion.
pub const CHALDEAN_ORDER: [Planet; 7] = [
    Planet::Saturn,
    Planet::Jupiter,
    Planet::Mars,
    Planet::Sun,
    Planet::Venus,
    Planet::Mercury,
    Planet::Moon,
];

impl Planet {
    /// Lowercase identifier, as accepted by [`FromStr`].
    pub const fn id(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mars => "mars",
            Self::Mercury => "mercury",
            Self::Jupiter => "jupiter",
            Self::Venus => "venus",
            Self::Saturn => "saturn",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
        }
    }

    /// 0-based index into [`ALL_PLANETS`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mars => 2,
            Self::Mercury => 3,
            Self::Jupiter => 4,
            Self::Venus => 5,
            Self::Saturn => 6,
        }
    }

    /// Position in [`CHALDEAN_ORDER`].
    pub const fn chaldean_index(self) -> u8 {
        match self {
            Self::Saturn => 0,
            Self::Jupiter => 1,
            Self::Mars => 2,
            Self::Sun => 3,
            Self::Venus => 4,
            Self::Mercury => 5,
            Self::Moon => 6,
        }
    }

    /// Classical element of the planet.
    pub const fn element(self) -> Element {
        match self {
            Self::Sun | Self::Mars => Element::Fire,
            Self::Moon | Self::Venus => Element::Water,
            Self::Mercury | Self::Jupiter => Element::Air,
            Self::Saturn => Element::Earth,
        }
    }

    /// The luminaries never station, so retrograde does not apply.
    pub const fn can_retrograde(self) -> bool {
        !matches!(self, Self::Sun | Self::Moon)
    }
}

impl Display for Planet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_lowercase();
        ALL_PLANETS
            .into_iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| ValidationError::UnknownPlanet(s.to_string()))
    }
}

/// Planetary ruler of a sign.
///
/// - Aries/Scorpio → Mars
/// - Taurus/Libra → Venus
/// - Gemini/Virgo → Mercury
/// - Cancer → Moon
/// - Leo → Sun
/// - Sagittarius/Pisces → Jupiter
/// - Capricorn/Aquarius → Saturn
pub const fn sign_ruler(sign: Sign) -> Planet {
    match sign {
        Sign::Aries | Sign::Scorpio => Planet::Mars,
        Sign::Taurus | Sign::Libra => Planet::Venus,
        Sign::Gemini | Sign::Virgo => Planet::Mercury,
        Sign::Cancer => Planet::Moon,
        Sign::Leo => Planet::Sun,
        Sign::Sagittarius | Sign::Pisces => Planet::Jupiter,
        Sign::Capricorn | Sign::Aquarius => Planet::Saturn,
    }
}

/// Planet `offset` steps after `start` in the Chaldean sequence, wrapping.
pub const fn chaldean_successor(start: Planet, offset: usize) -> Planet {
    CHALDEAN_ORDER[(start.chaldean_index() as usize + offset) % 7]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, p) in ALL_PLANETS.iter().enumerate() {
            assert_eq!(p.index() as usize, i);
        }
    }

    #[test]
    fn chaldean_indices_match_table() {
        for (i, p) in CHALDEAN_ORDER.iter().enumerate() {
            assert_eq!(p.chaldean_index() as usize, i);
        }
    }

    #[test]
    fn parse_ids() {
        for p in ALL_PLANETS {
            assert_eq!(p.id().parse::<Planet>(), Ok(p));
            assert_eq!(p.name().parse::<Planet>(), Ok(p));
        }
    }

    #[test]
    fn parse_rejects_nodes() {
        assert_eq!(
            "rahu".parse::<Planet>(),
            Err(ValidationError::UnknownPlanet("rahu".into()))
        );
    }

    #[test]
    fn rulership_dual_ruled() {
        assert_eq!(sign_ruler(Sign::Aries), Planet::Mars);
        assert_eq!(sign_ruler(Sign::Scorpio), Planet::Mars);
        assert_eq!(sign_ruler(Sign::Taurus), Planet::Venus);
        assert_eq!(sign_ruler(Sign::Libra), Planet::Venus);
        assert_eq!(sign_ruler(Sign::Capricorn), Planet::Saturn);
        assert_eq!(sign_ruler(Sign::Aquarius), Planet::Saturn);
    }

    #[test]
    fn luminaries_single_sign() {
        assert_eq!(sign_ruler(Sign::Leo), Planet::Sun);
        assert_eq!(sign_ruler(Sign::Cancer), Planet::Moon);
    }

    #[test]
    fn chaldean_wraps() {
        assert_eq!(chaldean_successor(Planet::Moon, 1), Planet::Saturn);
        assert_eq!(chaldean_successor(Planet::Sun, 24), Planet::Moon);
    }

    #[test]
    fn retrograde_applicability() {
        assert!(!Planet::Sun.can_retrograde());
        assert!(!Planet::Moon.can_retrograde());
        assert!(Planet::Mercury.can_retrograde());
        assert!(Planet::Saturn.can_retrograde());
    }
}
