//! Tracked celestial bodies.
//!
//! The chart tracks the seven classical planets plus the two lunar nodes.
//! Rahu (the ascending node) is queried from the ephemeris source; Ketu is
//! never queried and is always derived as Rahu + 180 degrees.

use serde::{Deserialize, Serialize};

/// The nine bodies placed in every chart, in fixed enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Rahu,
    Ketu,
}

/// All nine bodies in chart order. Output maps preserve this order.
pub const ALL_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Rahu,
    Body::Ketu,
];

/// The bodies resolved directly from the ephemeris source, in query order.
/// Ketu is excluded: its longitude is derived from Rahu, never queried.
pub const QUERIED_BODIES: [Body; 8] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Rahu,
];

impl Body {
    /// Display name used as the JSON key for this body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Swiss-Ephemeris-style numeric body code for the ephemeris boundary.
    ///
    /// Rahu maps to the mean lunar node. Ketu has no code because it is a
    /// derived point and must never reach the ephemeris source.
    pub const fn ephemeris_code(self) -> Option<i32> {
        match self {
            Self::Sun => Some(0),
            Self::Moon => Some(1),
            Self::Mercury => Some(2),
            Self::Venus => Some(3),
            Self::Mars => Some(4),
            Self::Jupiter => Some(5),
            Self::Saturn => Some(6),
            Self::Rahu => Some(10),
            Self::Ketu => None,
        }
    }

    /// All nine bodies in chart order.
    pub const fn all() -> &'static [Body; 9] {
        &ALL_BODIES
    }
}
