//! Zodiac signs and sign placement of an ecliptic longitude.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 deg.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::ValidationError;
use crate::util::normalize_360;

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

/// Width of one sign in degrees.
pub const SIGN_SPAN_DEG: f64 = 30.0;

impl Sign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Sign for a 0-based index.
    pub fn from_index(index: u8) -> Result<Self, ValidationError> {
        ALL_SIGNS
            .get(index as usize)
            .copied()
            .ok_or(ValidationError::SignIndexOutOfRange(index))
    }

    /// Triplicity element: fire, earth, air, water repeating from Aries.
    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// The sign 180 degrees away.
    pub const fn opposite(self) -> Sign {
        ALL_SIGNS[((self.index() + 6) % 12) as usize]
    }
}

impl Display for Sign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sign placement of a longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignPlacement {
    pub sign: Sign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Decimal degrees within the sign, [0.0, 30.0).
    pub sign_degree: f64,
}

/// Place a longitude in its sign.
///
/// Any finite input is accepted and normalized to [0, 360) first.
pub fn sign_from_longitude(lon_deg: f64) -> SignPlacement {
    let lon = normalize_360(lon_deg);
    let sign_index = (lon / SIGN_SPAN_DEG).floor() as u8;
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let sign_index = sign_index.min(11);
    let sign_degree = lon - (sign_index as f64) * SIGN_SPAN_DEG;
    SignPlacement {
        sign: ALL_SIGNS[sign_index as usize],
        sign_index,
        sign_degree,
    }
}
