//! Chart computation configuration.
//!
//! The observer location, civil-time offset, and ayanamsha are an explicit
//! configuration object handed to the resolver at construction, not
//! embedded constants. Defaults reproduce the reference deployment
//! (Delhi, IST, Lahiri); environment variables override individual fields.

use std::env;
use std::str::FromStr;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

/// Sidereal reference system for the tropical-to-sidereal conversion.
///
/// Each system reduces to one parameter: its ayanamsha value at J2000.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ayanamsha {
    /// Lahiri (Chitrapaksha), the Indian government standard. The default.
    Lahiri,
    /// Krishnamurti Paddhati, minimal offset from Lahiri.
    KP,
    /// B.V. Raman, zero-ayanamsha year approximately 397 CE.
    Raman,
    /// Fagan-Bradley, the primary Western sidereal system.
    FaganBradley,
}

impl Ayanamsha {
    /// Reference ayanamsha at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::Lahiri => 23.853,
            Self::KP => 23.850,
            Self::Raman => 22.370,
            Self::FaganBradley => 24.736,
        }
    }

    /// Lowercase tag used in configuration and the health endpoint.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "lahiri",
            Self::KP => "kp",
            Self::Raman => "raman",
            Self::FaganBradley => "fagan-bradley",
        }
    }
}

impl FromStr for Ayanamsha {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lahiri" => Ok(Self::Lahiri),
            "kp" => Ok(Self::KP),
            "raman" => Ok(Self::Raman),
            "fagan-bradley" => Ok(Self::FaganBradley),
            other => Err(format!("unknown ayanamsha '{}'", other)),
        }
    }
}

/// Geographic location of the observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverLocation {
    /// Latitude in degrees, North positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, East positive.
    pub longitude_deg: f64,
}

impl ObserverLocation {
    /// Delhi, the reference deployment's observer.
    pub const fn delhi() -> Self {
        Self {
            latitude_deg: 28.6139,
            longitude_deg: 77.2090,
        }
    }
}

/// Configuration for chart computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Observer location. Charts are location-independent today (only
    /// longitudes are computed) but the observer is part of the contract.
    pub location: ObserverLocation,
    /// Fixed offset of local civil time from UT, in minutes. This is a
    /// fixed-longitude conversion, not a timezone database lookup.
    pub utc_offset_minutes: i32,
    /// Sidereal reference system.
    pub ayanamsha: Ayanamsha,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            location: ObserverLocation::delhi(),
            // IST: UT + 5h30m.
            utc_offset_minutes: 330,
            ayanamsha: Ayanamsha::Lahiri,
        }
    }
}

impl ChartConfig {
    /// Build a config from environment variables, falling back to the
    /// defaults for anything unset or unparseable:
    ///
    /// - `ASTRONIHAR_LATITUDE`, `ASTRONIHAR_LONGITUDE`
    /// - `ASTRONIHAR_UTC_OFFSET_MINUTES`
    /// - `ASTRONIHAR_AYANAMSHA`
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let latitude_deg = env_parse("ASTRONIHAR_LATITUDE")
            .unwrap_or(defaults.location.latitude_deg);
        let longitude_deg = env_parse("ASTRONIHAR_LONGITUDE")
            .unwrap_or(defaults.location.longitude_deg);
        let utc_offset_minutes = env_parse("ASTRONIHAR_UTC_OFFSET_MINUTES")
            .unwrap_or(defaults.utc_offset_minutes);
        let ayanamsha = env_parse("ASTRONIHAR_AYANAMSHA").unwrap_or(defaults.ayanamsha);

        Self {
            location: ObserverLocation {
                latitude_deg,
                longitude_deg,
            },
            utc_offset_minutes,
            ayanamsha,
        }
    }

    /// The civil-time offset as a chrono `FixedOffset`.
    pub fn civil_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60)
            .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"))
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_delhi_ist_lahiri() {
        let config = ChartConfig::default();
        assert_eq!(config.utc_offset_minutes, 330);
        assert_eq!(config.ayanamsha, Ayanamsha::Lahiri);
        assert!((config.location.latitude_deg - 28.6139).abs() < 1e-9);
        assert!((config.location.longitude_deg - 77.2090).abs() < 1e-9);
    }

    #[test]
    fn test_civil_offset_is_five_thirty() {
        let offset = ChartConfig::default().civil_offset();
        assert_eq!(offset.local_minus_utc(), 5 * 3600 + 30 * 60);
    }

    #[test]
    fn test_ayanamsha_from_str() {
        assert_eq!("lahiri".parse::<Ayanamsha>().unwrap(), Ayanamsha::Lahiri);
        assert_eq!("Lahiri".parse::<Ayanamsha>().unwrap(), Ayanamsha::Lahiri);
        assert_eq!(
            "fagan-bradley".parse::<Ayanamsha>().unwrap(),
            Ayanamsha::FaganBradley
        );
        assert!("tropical".parse::<Ayanamsha>().is_err());
    }

    #[test]
    fn test_ayanamsha_references_are_ordered_sensibly() {
        // All four systems sit within a few degrees of each other.
        for system in [
            Ayanamsha::Lahiri,
            Ayanamsha::KP,
            Ayanamsha::Raman,
            Ayanamsha::FaganBradley,
        ] {
            let reference = system.reference_j2000_deg();
            assert!((20.0..26.0).contains(&reference), "{}", system.name());
        }
    }
}
