//! Essential dignity of a planet in a sign.
//!
//! Rulership and exaltation strengthen a planet; the signs opposite them
//! (detriment and fall) weaken it. Any other placement is peregrine.
//!
//! The exaltation table is the product table: Mars is exalted in Cancer
//! and falls in Capricorn.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::planet::{Planet, sign_ruler};
use crate::sign::{ALL_SIGNS, Sign};

/// Essential dignity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dignity {
    Rulership,
    Exaltation,
    Neutral,
    Detriment,
    Fall,
}

impl Dignity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rulership => "rulership",
            Self::Exaltation => "exaltation",
            Self::Neutral => "neutral",
            Self::Detriment => "detriment",
            Self::Fall => "fall",
        }
    }

    /// Whether the dignity weakens the planet.
    pub const fn is_debility(self) -> bool {
        matches!(self, Self::Detriment | Self::Fall)
    }
}

impl Display for Dignity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sign of exaltation for each planet.
pub const fn exaltation_sign(planet: Planet) -> Sign {
    match planet {
        Planet::Sun => Sign::Aries,
        Planet::Moon => Sign::Taurus,
        Planet::Mars => Sign::Cancer,
        Planet::Mercury => Sign::Virgo,
        Planet::Jupiter => Sign::Cancer,
        Planet::Venus => Sign::Pisces,
        Planet::Saturn => Sign::Libra,
    }
}

/// Sign of fall: opposite the exaltation.
pub const fn fall_sign(planet: Planet) -> Sign {
    exaltation_sign(planet).opposite()
}

/// Signs ruled by a planet (one for the luminaries, two otherwise).
pub fn ruled_signs(planet: Planet) -> impl Iterator<Item = Sign> {
    ALL_SIGNS.into_iter().filter(move |s| sign_ruler(*s) == planet)
}

/// Signs of detriment: opposite each ruled sign.
pub fn detriment_signs(planet: Planet) -> impl Iterator<Item = Sign> {
    ruled_signs(planet).map(Sign::opposite)
}

/// Dignity of `planet` placed in `sign`.
///
/// Rulership is checked first, then exaltation, fall, and detriment.
/// Mercury in Virgo is both ruler and exalted; rulership wins. Mercury in
/// Pisces is both in detriment and fall; fall wins.
pub fn dignity_in_sign(planet: Planet, sign: Sign) -> Dignity {
    if sign_ruler(sign) == planet {
        Dignity::Rulership
    } else if exaltation_sign(planet) == sign {
        Dignity::Exaltation
    } else if fall_sign(planet) == sign {
        Dignity::Fall
    } else if sign_ruler(sign.opposite()) == planet {
        Dignity::Detriment
    } else {
        Dignity::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet::ALL_PLANETS;

    #[test]
    fn mars_rules_aries() {
        assert_eq!(dignity_in_sign(Planet::Mars, Sign::Aries), Dignity::Rulership);
        assert_eq!(dignity_in_sign(Planet::Mars, Sign::Scorpio), Dignity::Rulership);
    }

    #[test]
    fn mars_falls_in_capricorn() {
        assert_eq!(dignity_in_sign(Planet::Mars, Sign::Capricorn), Dignity::Fall);
    }

    #[test]
    fn mars_detriment_libra_taurus() {
        assert_eq!(dignity_in_sign(Planet::Mars, Sign::Libra), Dignity::Detriment);
        assert_eq!(dignity_in_sign(Planet::Mars, Sign::Taurus), Dignity::Detriment);
    }

    #[test]
    fn sun_table() {
        assert_eq!(dignity_in_sign(Planet::Sun, Sign::Leo), Dignity::Rulership);
        assert_eq!(dignity_in_sign(Planet::Sun, Sign::Aries), Dignity::Exaltation);
        assert_eq!(dignity_in_sign(Planet::Sun, Sign::Aquarius), Dignity::Detriment);
        assert_eq!(dignity_in_sign(Planet::Sun, Sign::Libra), Dignity::Fall);
        assert_eq!(dignity_in_sign(Planet::Sun, Sign::Gemini), Dignity::Neutral);
    }

    #[test]
    fn mercury_overlaps_resolve() {
        assert_eq!(dignity_in_sign(Planet::Mercury, Sign::Virgo), Dignity::Rulership);
        assert_eq!(dignity_in_sign(Planet::Mercury, Sign::Pisces), Dignity::Fall);
        assert_eq!(dignity_in_sign(Planet::Mercury, Sign::Sagittarius), Dignity::Detriment);
    }

    #[test]
    fn every_planet_has_one_fall_sign() {
        for p in ALL_PLANETS {
            let falls = ALL_SIGNS
                .iter()
                .filter(|s| dignity_in_sign(p, **s) == Dignity::Fall)
                .count();
            assert_eq!(falls, 1, "{p}");
        }
    }

    #[test]
    fn ruled_sign_counts() {
        assert_eq!(ruled_signs(Planet::Sun).count(), 1);
        assert_eq!(ruled_signs(Planet::Moon).count(), 1);
        assert_eq!(ruled_signs(Planet::Saturn).count(), 2);
        assert_eq!(detriment_signs(Planet::Venus).collect::<Vec<_>>(), vec![Sign::Scorpio, Sign::Aries]);
    }

    #[test]
    fn debility_flags() {
        assert!(Dignity::Fall.is_debility());
        assert!(Dignity::Detriment.is_debility());
        assert!(!Dignity::Exaltation.is_debility());
    }

    #[test]
    fn display_matches_serde_name() {
        for d in [Dignity::Rulership, Dignity::Exaltation, Dignity::Neutral, Dignity::Detriment, Dignity::Fall] {
            assert_eq!(d.to_string(), d.name());
        }
    }
}
