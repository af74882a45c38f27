//! Built-in mean-element ephemeris.
//!
//! A low-precision analytic source: each body's tropical longitude is a
//! linear mean-element series around J2000.0, the lunar node regresses at
//! its mean rate, and a linear ayanamsha model converts tropical to
//! sidereal. Positions are good to a few degrees at best, which is enough
//! for development and for exercising the full pipeline without external
//! ephemeris data. Production deployments plug a real source into
//! [`EphemerisSource`](super::EphemerisSource) instead.

use crate::config::Ayanamsha;
use crate::models::{normalize_360, Body};

use super::{EphemerisError, EphemerisSource, JulianDay};

/// Mean longitude at J2000.0 and mean daily motion, degrees.
struct MeanElements {
    longitude_j2000: f64,
    daily_motion: f64,
}

/// Linear mean elements per body, J2000.0 epoch.
///
/// Planets use geocentric mean longitudes; the node regresses (negative
/// motion). These are the classical low-precision series, not an
/// integration.
const fn elements(body: Body) -> Option<MeanElements> {
    match body {
        Body::Sun => Some(MeanElements {
            longitude_j2000: 280.460,
            daily_motion: 0.985_647_4,
        }),
        Body::Moon => Some(MeanElements {
            longitude_j2000: 218.316,
            daily_motion: 13.176_396,
        }),
        Body::Mercury => Some(MeanElements {
            longitude_j2000: 252.251,
            daily_motion: 4.092_335,
        }),
        Body::Venus => Some(MeanElements {
            longitude_j2000: 181.980,
            daily_motion: 1.602_130,
        }),
        Body::Mars => Some(MeanElements {
            longitude_j2000: 355.433,
            daily_motion: 0.524_033,
        }),
        Body::Jupiter => Some(MeanElements {
            longitude_j2000: 34.351,
            daily_motion: 0.083_056,
        }),
        Body::Saturn => Some(MeanElements {
            longitude_j2000: 50.077,
            daily_motion: 0.033_371,
        }),
        Body::Rahu => Some(MeanElements {
            longitude_j2000: 125.045,
            daily_motion: -0.052_953_8,
        }),
        Body::Ketu => None,
    }
}

/// General precession rate, arc-seconds per Julian year.
const PRECESSION_ARCSEC_PER_YEAR: f64 = 50.2888;

/// Ayanamsha in degrees at `days` since J2000.0: the system's J2000
/// reference value plus accumulated precession.
fn ayanamsha_deg(system: Ayanamsha, days_since_j2000: f64) -> f64 {
    let years = days_since_j2000 / 365.25;
    system.reference_j2000_deg() + PRECESSION_ARCSEC_PER_YEAR * years / 3600.0
}

/// The built-in analytic ephemeris source.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanElementEphemeris;

impl MeanElementEphemeris {
    /// Create the built-in source.
    pub fn new() -> Self {
        Self
    }
}

impl EphemerisSource for MeanElementEphemeris {
    fn describe(&self) -> &'static str {
        "mean-elements"
    }

    fn calc(
        &self,
        jd: JulianDay,
        body: Body,
        ayanamsha: Ayanamsha,
    ) -> Result<(f64, f64), EphemerisError> {
        let elements = elements(body).ok_or(EphemerisError::UnsupportedBody {
            body: body.name(),
        })?;

        let days = jd.days_since_j2000();
        let tropical = elements.longitude_j2000 + elements.daily_motion * days;
        let sidereal = normalize_360(tropical - ayanamsha_deg(ayanamsha, days));

        Ok((sidereal, elements.daily_motion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::J2000_JD;

    #[test]
    fn test_all_queried_bodies_resolve() {
        let source = MeanElementEphemeris::new();
        let jd = JulianDay::new(J2000_JD + 9000.0);
        for body in crate::models::QUERIED_BODIES {
            let (lon, _speed) = source.calc(jd, body, Ayanamsha::Lahiri).unwrap();
            assert!((0.0..360.0).contains(&lon), "{}: {}", body.name(), lon);
        }
    }

    #[test]
    fn test_ketu_is_rejected() {
        let source = MeanElementEphemeris::new();
        let err = source
            .calc(JulianDay::new(J2000_JD), Body::Ketu, Ayanamsha::Lahiri)
            .unwrap_err();
        assert!(matches!(err, EphemerisError::UnsupportedBody { .. }));
    }

    #[test]
    fn test_calc_is_deterministic() {
        let source = MeanElementEphemeris::new();
        let jd = JulianDay::new(J2000_JD + 1234.5678);
        let first = source.calc(jd, Body::Moon, Ayanamsha::Lahiri).unwrap();
        for _ in 0..10 {
            assert_eq!(source.calc(jd, Body::Moon, Ayanamsha::Lahiri).unwrap(), first);
        }
    }

    #[test]
    fn test_sun_at_j2000_lahiri() {
        // Tropical mean Sun at J2000 is 280.460; Lahiri ayanamsha is 23.853,
        // so the sidereal longitude is the difference.
        let source = MeanElementEphemeris::new();
        let (lon, _) = source
            .calc(JulianDay::new(J2000_JD), Body::Sun, Ayanamsha::Lahiri)
            .unwrap();
        assert!((lon - (280.460 - 23.853)).abs() < 1e-9);
    }

    #[test]
    fn test_node_regresses() {
        let source = MeanElementEphemeris::new();
        let (early, _) = source
            .calc(JulianDay::new(J2000_JD), Body::Rahu, Ayanamsha::Lahiri)
            .unwrap();
        let (later, _) = source
            .calc(JulianDay::new(J2000_JD + 10.0), Body::Rahu, Ayanamsha::Lahiri)
            .unwrap();
        // Ten days of node motion is about half a degree backward, so no
        // wraparound ambiguity at these epochs.
        assert!(later < early);
    }

    #[test]
    fn test_ayanamsha_systems_differ() {
        let source = MeanElementEphemeris::new();
        let jd = JulianDay::new(J2000_JD);
        let (lahiri, _) = source.calc(jd, Body::Sun, Ayanamsha::Lahiri).unwrap();
        let (raman, _) = source.calc(jd, Body::Sun, Ayanamsha::Raman).unwrap();
        // Raman's ayanamsha is smaller, so its sidereal longitude is ahead.
        assert!((normalize_360(raman - lahiri) - 1.483).abs() < 1e-9);
    }

    #[test]
    fn test_ayanamsha_grows_over_time() {
        let now = ayanamsha_deg(Ayanamsha::Lahiri, 0.0);
        let century_later = ayanamsha_deg(Ayanamsha::Lahiri, 36525.0);
        assert!(century_later > now);
        // Precession accumulates ~1.4 degrees per century.
        assert!((century_later - now - 1.397).abs() < 0.01);
    }
}
