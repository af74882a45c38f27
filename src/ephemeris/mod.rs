//! Ephemeris source boundary.
//!
//! The service does not compute planetary positions itself; it asks an
//! [`EphemerisSource`] for the sidereal ecliptic longitude of each tracked
//! body at a Julian day. The source is a blocking collaborator: calls are
//! single-attempt and any failure fails the whole chart request.

use chrono::{DateTime, Utc};

use crate::config::Ayanamsha;
use crate::models::Body;

#[cfg(feature = "mean-ephemeris")]
pub mod mean_elements;

#[cfg(feature = "mean-ephemeris")]
pub use mean_elements::MeanElementEphemeris;

/// Days elapsed since the Julian epoch (-4712-01-01 12:00 UT).
///
/// This is the native time scale of ephemeris sources; civil timestamps are
/// converted once at the resolver boundary and never travel further down.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDay(f64);

/// Julian day of the Unix epoch (1970-01-01 00:00:00 UT).
const UNIX_EPOCH_JD: f64 = 2440587.5;

/// Julian day of J2000.0 (2000-01-01 12:00:00 TT, close enough to UT here).
pub const J2000_JD: f64 = 2451545.0;

impl JulianDay {
    /// Create a Julian day from a raw day count.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Raw Julian day value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Days elapsed since J2000.0; negative before the epoch.
    pub fn days_since_j2000(&self) -> f64 {
        self.0 - J2000_JD
    }

    /// Convert a UT instant to its Julian day.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        let unix_seconds = dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 / 1e9;
        Self(unix_seconds / 86400.0 + UNIX_EPOCH_JD)
    }
}

impl From<f64> for JulianDay {
    fn from(value: f64) -> Self {
        JulianDay::new(value)
    }
}

/// Errors from the ephemeris boundary.
///
/// Every variant is terminal for the request that triggered it: there is no
/// retry and no partial chart.
#[derive(Debug, thiserror::Error)]
pub enum EphemerisError {
    /// The source cannot be reached or failed internally.
    #[error("ephemeris source unavailable: {message}")]
    Unavailable { message: String },

    /// The source returned a longitude outside [0, 360).
    #[error("ephemeris source returned invalid longitude {longitude} for {body}")]
    InvalidLongitude { body: &'static str, longitude: f64 },

    /// A body with no ephemeris code reached the source. Derived points
    /// (Ketu) must be computed by the resolver, never queried.
    #[error("body {body} cannot be queried from an ephemeris source")]
    UnsupportedBody { body: &'static str },
}

impl EphemerisError {
    /// Create an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// A source of sidereal ecliptic longitudes.
///
/// `calc` returns the sidereal ecliptic longitude in degrees [0, 360) plus
/// an auxiliary daily-motion value in degrees/day. The core only consumes
/// the longitude; the auxiliary value exists because real ephemeris
/// backends return it and adapters should not have to discard it. The
/// ayanamsha travels with every call, matching how real backends take a
/// sidereal-mode flag rather than being constructed for one system.
pub trait EphemerisSource: Send + Sync {
    /// Short identifier for logs and the health endpoint.
    fn describe(&self) -> &'static str;

    /// Sidereal ecliptic longitude and daily motion of `body` at `jd`,
    /// referenced to `ayanamsha`.
    fn calc(
        &self,
        jd: JulianDay,
        body: Body,
        ayanamsha: Ayanamsha,
    ) -> Result<(f64, f64), EphemerisError>;
}
