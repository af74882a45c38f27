//! Zodiac signs and decomposition of ecliptic longitudes.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each.
//! Given a sidereal longitude in [0, 360), [`decompose`] identifies the sign
//! the point falls in and expresses the position as decimal degrees and as
//! degrees-minutes-seconds within that sign.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The 12 zodiac signs starting from Aries at 0 degrees.
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

/// All 12 signs in order (Aries = 0 .. Pisces = 11).
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

impl Sign {
    /// English name of the sign.
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

    /// 0-based index (Aries = 0 .. Pisces = 11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sign from a 0-based index; values >= 12 wrap around the zodiac.
    pub const fn from_index(index: u16) -> Sign {
        ALL_SIGNS[(index % 12) as usize]
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [Sign; 12] {
        &ALL_SIGNS
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Degrees-minutes-seconds representation of a degree within a sign.
///
/// Each field is obtained by truncating the fractional remainder of the
/// previous one times 60. There is no rounding carry between fields: a value
/// like 14 deg 59' 59.9999" displays as `14° 59′ 59″`, it does not roll over
/// to 15 degrees. This matches the reference behavior and is covered by
/// tests; do not "fix" it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dms {
    /// Whole degrees within the sign (0..29).
    pub degrees: u8,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0..59), truncated.
    pub seconds: u8,
}

impl Dms {
    /// Decompose a decimal degree in [0, 30) by successive truncation.
    pub fn from_degrees(degree: f64) -> Self {
        let degrees = degree as u8;
        let minutes_float = (degree - degrees as f64) * 60.0;
        let minutes = minutes_float as u8;
        let seconds = ((minutes_float - minutes as f64) * 60.0) as u8;
        Self {
            degrees,
            minutes,
            seconds,
        }
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}° {}′ {}″", self.degrees, self.minutes, self.seconds)
    }
}

/// Position of a body within its zodiac sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignPlacement {
    /// The sign the longitude falls in.
    pub sign: Sign,
    /// Full-precision degree within the sign, [0, 30).
    pub degree_in_sign: f64,
}

impl SignPlacement {
    /// Degree within the sign rounded to 5 decimals for external
    /// representation. Internal computation keeps full precision.
    pub fn degree_decimal(&self) -> f64 {
        (self.degree_in_sign * 1e5).round() / 1e5
    }

    /// Degrees-minutes-seconds form of the degree within the sign.
    pub fn degree_dms(&self) -> Dms {
        Dms::from_degrees(self.degree_in_sign)
    }
}

/// Decompose an absolute ecliptic longitude into its sign placement.
///
/// Precondition: `longitude` is in [0, 360). Longitudes are validated at the
/// resolver boundary, so out-of-range values never reach this function.
pub fn decompose(longitude: f64) -> SignPlacement {
    let sign_index = ((longitude / 30.0) as u16) % 12;
    SignPlacement {
        sign: Sign::from_index(sign_index),
        degree_in_sign: longitude % 30.0,
    }
}

/// Normalize an angle in degrees to [0, 360).
pub fn normalize_360(degrees: f64) -> f64 {
    let r = degrees % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}
