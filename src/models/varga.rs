//! Divisional (varga) chart mapping.
//!
//! A varga chart subdivides each 30-degree sign into N equal slots and remaps
//! the slot a body falls in to one of the 12 signs. Three mapping methods
//! cover every chart this service exposes:
//!
//! - `Standard`: count forward from the body's own sign, one sign per slot.
//! - `Parity`: odd signs (1-based) count forward, even signs count backward.
//! - `Cyclic`: the slot index alone picks the sign on a fixed 12-sign cycle.
//!
//! [`map_sign`] is a pure function of its arguments; there is no hidden state
//! and identical inputs always produce identical outputs.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::zodiac::{Sign, SignPlacement};

/// Sign-selection method for a divisional chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VargaMethod {
    Standard,
    Parity,
    Cyclic,
}

impl VargaMethod {
    /// Lowercase tag used in logs and serialized output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Parity => "parity",
            Self::Cyclic => "cyclic",
        }
    }
}

impl fmt::Display for VargaMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The divisional charts this service exposes, with their fixed methods.
///
/// This registry is the single source of truth for which `d<N>` charts exist
/// and how each one maps signs; the HTTP layer derives its route surface
/// from it rather than hand-writing one operation per count.
pub const VARGA_REGISTRY: [(u16, VargaMethod); 11] = [
    (7, VargaMethod::Parity),
    (10, VargaMethod::Standard),
    (12, VargaMethod::Standard),
    (20, VargaMethod::Cyclic),
    (24, VargaMethod::Standard),
    (30, VargaMethod::Cyclic),
    (40, VargaMethod::Standard),
    (45, VargaMethod::Standard),
    (60, VargaMethod::Cyclic),
    (81, VargaMethod::Cyclic),
    (144, VargaMethod::Cyclic),
];

/// Look up the mapping method for a division count, if that chart exists.
pub fn method_for(division_count: u16) -> Option<VargaMethod> {
    VARGA_REGISTRY
        .iter()
        .find(|(count, _)| *count == division_count)
        .map(|(_, method)| *method)
}

/// Compute the 0-based division slot a degree falls into.
///
/// `degree_in_sign` is strictly below 30 by construction, so the slot index
/// is strictly below `division_count`; the clamp only guards against float
/// edge cases at the top of the sign.
fn division_index(degree_in_sign: f64, division_count: u16) -> u16 {
    let division_size = 30.0 / division_count as f64;
    let index = (degree_in_sign / division_size) as u16;
    index.min(division_count - 1)
}

/// Map a sign placement to its divisional sign.
///
/// Pure and deterministic: the result depends only on the arguments.
pub fn map_sign(
    sign: Sign,
    degree_in_sign: f64,
    division_count: u16,
    method: VargaMethod,
) -> Sign {
    let sign_index = sign.index() as u16;
    let index = division_index(degree_in_sign, division_count);

    match method {
        VargaMethod::Standard => Sign::from_index(sign_index + index),
        VargaMethod::Parity => {
            // 1-based odd signs (Aries, Gemini, ...) count forward; even
            // signs count backward from sign + N.
            if sign_index % 2 == 0 {
                Sign::from_index(sign_index + index)
            } else {
                Sign::from_index(sign_index + division_count - index)
            }
        }
        VargaMethod::Cyclic => Sign::from_index(index),
    }
}

/// A body's placement in one divisional chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DivisionalPlacement {
    /// Placement in the undivided (D1) chart.
    pub original: SignPlacement,
    /// Number of slots each sign is divided into.
    pub division_count: u16,
    /// Method used to select the derived sign.
    pub method: VargaMethod,
    /// The sign this body occupies in the divisional chart.
    pub derived_sign: Sign,
}

impl DivisionalPlacement {
    /// Derive the divisional placement for a D1 sign placement.
    pub fn derive(original: SignPlacement, division_count: u16, method: VargaMethod) -> Self {
        let derived_sign = map_sign(
            original.sign,
            original.degree_in_sign,
            division_count,
            method,
        );
        Self {
            original,
            division_count,
            method,
            derived_sign,
        }
    }
}
