//! Position resolution.
//!
//! The resolver turns a civil instant into sidereal longitudes for every
//! tracked body. It owns the only time conversion in the system (civil time
//! minus the configured fixed offset gives UT, which becomes a Julian day)
//! and the one arithmetic derivation: Ketu is always the exact antipode of
//! Rahu, never queried from the source.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};
use tracing::debug;

use crate::config::ChartConfig;
use crate::ephemeris::{EphemerisError, EphemerisSource, JulianDay};
use crate::models::{normalize_360, Body, QUERIED_BODIES};

/// Sidereal longitudes for all nine bodies, in fixed body order.
///
/// Built fresh per request and discarded after serialization; nothing is
/// cached across requests.
#[derive(Debug, Clone)]
pub struct BodyPositions {
    entries: Vec<(Body, f64)>,
}

impl BodyPositions {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, body: Body, longitude: f64) {
        self.entries.push((body, longitude));
    }

    /// Longitude of one body, if present.
    pub fn get(&self, body: Body) -> Option<f64> {
        self.entries
            .iter()
            .find(|(b, _)| *b == body)
            .map(|(_, lon)| *lon)
    }

    /// Iterate bodies and longitudes in fixed body order.
    pub fn iter(&self) -> impl Iterator<Item = (Body, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of resolved bodies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no bodies are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves sidereal longitudes for the tracked bodies at an instant.
pub struct PositionResolver {
    source: Arc<dyn EphemerisSource>,
    config: ChartConfig,
}

impl PositionResolver {
    /// Create a resolver over an ephemeris source with explicit config.
    pub fn new(source: Arc<dyn EphemerisSource>, config: ChartConfig) -> Self {
        Self { source, config }
    }

    /// The configuration this resolver was constructed with.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Identifier of the underlying ephemeris source.
    pub fn source_name(&self) -> &'static str {
        self.source.describe()
    }

    /// The current instant in configured civil time.
    pub fn civil_now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.config.civil_offset())
    }

    /// Resolve all tracked bodies at a civil instant.
    ///
    /// All-or-nothing: if the source fails or returns an out-of-range
    /// longitude for any body, the whole batch fails and no partial map is
    /// returned.
    pub fn resolve(
        &self,
        civil: DateTime<FixedOffset>,
    ) -> Result<BodyPositions, EphemerisError> {
        // The civil instant carries the fixed offset, so converting to UTC
        // is exactly the "subtract 5h30m" of the reference deployment.
        let jd = JulianDay::from_datetime(civil.with_timezone(&Utc));
        debug!(jd = jd.value(), source = self.source_name(), "resolving positions");

        let mut positions = BodyPositions::with_capacity(QUERIED_BODIES.len() + 1);
        for body in QUERIED_BODIES {
            let (longitude, _daily_motion) = self.source.calc(jd, body, self.config.ayanamsha)?;
            if !(0.0..360.0).contains(&longitude) {
                return Err(EphemerisError::InvalidLongitude {
                    body: body.name(),
                    longitude,
                });
            }
            positions.push(body, longitude);
        }

        // Ketu is the exact antipode of Rahu for every chart.
        let rahu = positions
            .get(Body::Rahu)
            .expect("Rahu is in the queried set");
        positions.push(Body::Ketu, normalize_360(rahu + 180.0));

        Ok(positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Ayanamsha;
    use crate::models::ALL_BODIES;
    use chrono::TimeZone;

    /// Scripted source: every body at a fixed longitude.
    struct FixedSource {
        rahu: f64,
        others: f64,
    }

    impl EphemerisSource for FixedSource {
        fn describe(&self) -> &'static str {
            "fixed"
        }

        fn calc(
            &self,
            _jd: JulianDay,
            body: Body,
            _ayanamsha: Ayanamsha,
        ) -> Result<(f64, f64), EphemerisError> {
            match body {
                Body::Rahu => Ok((self.rahu, -0.05)),
                _ => Ok((self.others, 1.0)),
            }
        }
    }

    /// Source that fails for one body.
    struct FailingSource {
        fail_for: Body,
    }

    impl EphemerisSource for FailingSource {
        fn describe(&self) -> &'static str {
            "failing"
        }

        fn calc(
            &self,
            _jd: JulianDay,
            body: Body,
            _ayanamsha: Ayanamsha,
        ) -> Result<(f64, f64), EphemerisError> {
            if body == self.fail_for {
                Err(EphemerisError::unavailable("scripted failure"))
            } else {
                Ok((100.0, 1.0))
            }
        }
    }

    fn civil_instant() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(330 * 60)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 1, 9, 30, 0)
            .unwrap()
    }

    fn resolver(source: impl EphemerisSource + 'static) -> PositionResolver {
        PositionResolver::new(Arc::new(source), ChartConfig::default())
    }

    #[test]
    fn test_resolves_all_nine_bodies_in_order() {
        let resolver = resolver(FixedSource {
            rahu: 350.0,
            others: 42.0,
        });
        let positions = resolver.resolve(civil_instant()).unwrap();
        assert_eq!(positions.len(), 9);
        let order: Vec<Body> = positions.iter().map(|(b, _)| b).collect();
        assert_eq!(order, ALL_BODIES.to_vec());
    }

    #[test]
    fn test_ketu_is_rahu_antipode() {
        let resolver = resolver(FixedSource {
            rahu: 350.0,
            others: 42.0,
        });
        let positions = resolver.resolve(civil_instant()).unwrap();
        assert_eq!(positions.get(Body::Ketu), Some(170.0));

        // Wraps the other way too.
        let resolver = resolver_with_rahu(10.0);
        let positions = resolver.resolve(civil_instant()).unwrap();
        assert_eq!(positions.get(Body::Ketu), Some(190.0));
    }

    fn resolver_with_rahu(rahu: f64) -> PositionResolver {
        resolver(FixedSource { rahu, others: 42.0 })
    }

    #[test]
    fn test_failure_is_all_or_nothing() {
        // Saturn is queried late in the batch; its failure must still drop
        // everything resolved before it.
        let resolver = resolver(FailingSource {
            fail_for: Body::Saturn,
        });
        let err = resolver.resolve(civil_instant()).unwrap_err();
        assert!(matches!(err, EphemerisError::Unavailable { .. }));
    }

    #[test]
    fn test_out_of_range_longitude_is_rejected() {
        struct BadSource;
        impl EphemerisSource for BadSource {
            fn describe(&self) -> &'static str {
                "bad"
            }
            fn calc(
                &self,
                _jd: JulianDay,
                body: Body,
                _ayanamsha: Ayanamsha,
            ) -> Result<(f64, f64), EphemerisError> {
                if body == Body::Moon {
                    Ok((360.0, 1.0))
                } else {
                    Ok((10.0, 1.0))
                }
            }
        }

        let resolver = resolver(BadSource);
        let err = resolver.resolve(civil_instant()).unwrap_err();
        match err {
            EphemerisError::InvalidLongitude { body, longitude } => {
                assert_eq!(body, "Moon");
                assert_eq!(longitude, 360.0);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_civil_now_uses_configured_offset() {
        let resolver = resolver(FixedSource {
            rahu: 0.0,
            others: 0.0,
        });
        let now = resolver.civil_now();
        assert_eq!(now.offset().local_minus_utc(), 330 * 60);
    }
}
