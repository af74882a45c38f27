//! Chart assembly.
//!
//! One resolve per request, then sign decomposition per body, then the
//! varga mapping per body for divisional charts. The D1 chart is the
//! degenerate case: it returns sign placements directly and never touches
//! the varga mapper.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use tracing::info;

use crate::api::{
    DivisionalBodyEntry, DivisionalChartResponse, NatalBodyEntry, NatalChartResponse,
};
use crate::config::ChartConfig;
use crate::ephemeris::{EphemerisError, EphemerisSource};
use crate::models::{decompose, method_for, DivisionalPlacement};

use super::resolver::PositionResolver;

/// Timestamp format of the `timestamp_ist` response field.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Errors from chart assembly.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// The ephemeris source failed; no partial chart is returned.
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),

    /// The requested division count has no registered chart.
    #[error("no divisional chart is registered for division count {division_count}")]
    UnsupportedChart { division_count: u16 },
}

/// Assembles natal and divisional charts for the current instant.
pub struct ChartService {
    resolver: PositionResolver,
}

impl ChartService {
    /// Create a chart service over an ephemeris source with explicit config.
    pub fn new(source: Arc<dyn EphemerisSource>, config: ChartConfig) -> Self {
        Self {
            resolver: PositionResolver::new(source, config),
        }
    }

    /// Identifier of the underlying ephemeris source, for health reporting.
    pub fn source_name(&self) -> &'static str {
        self.resolver.source_name()
    }

    /// The undivided (D1) chart for the current instant.
    pub fn natal_chart(&self) -> Result<NatalChartResponse, ChartError> {
        self.natal_chart_at(self.resolver.civil_now())
    }

    /// The undivided (D1) chart for an explicit civil instant.
    pub fn natal_chart_at(
        &self,
        civil: DateTime<FixedOffset>,
    ) -> Result<NatalChartResponse, ChartError> {
        let positions = self.resolver.resolve(civil)?;

        let planets = positions
            .iter()
            .map(|(body, longitude)| {
                let placement = decompose(longitude);
                let entry = NatalBodyEntry {
                    zodiac: placement.sign.name().to_string(),
                    degree_decimal: placement.degree_decimal(),
                    degree_dms: placement.degree_dms().to_string(),
                };
                (body, entry)
            })
            .collect();

        Ok(NatalChartResponse {
            timestamp_ist: civil.format(TIMESTAMP_FORMAT).to_string(),
            planets,
        })
    }

    /// A divisional chart for the current instant.
    ///
    /// The mapping method comes from the static varga registry; an
    /// unregistered division count is an error, not a silent identity
    /// mapping.
    pub fn divisional_chart(
        &self,
        division_count: u16,
    ) -> Result<DivisionalChartResponse, ChartError> {
        self.divisional_chart_at(self.resolver.civil_now(), division_count)
    }

    /// A divisional chart for an explicit civil instant.
    pub fn divisional_chart_at(
        &self,
        civil: DateTime<FixedOffset>,
        division_count: u16,
    ) -> Result<DivisionalChartResponse, ChartError> {
        let method = method_for(division_count)
            .ok_or(ChartError::UnsupportedChart { division_count })?;
        let positions = self.resolver.resolve(civil)?;
        info!(
            division_count,
            method = method.name(),
            "assembling divisional chart"
        );

        let bodies = positions
            .iter()
            .map(|(body, longitude)| {
                let placement =
                    DivisionalPlacement::derive(decompose(longitude), division_count, method);
                let entry = DivisionalBodyEntry {
                    original_sign: placement.original.sign.name().to_string(),
                    degree_decimal: placement.original.degree_decimal(),
                    degree_dms: placement.original.degree_dms().to_string(),
                    derived_sign: placement.derived_sign.name().to_string(),
                };
                (body, entry)
            })
            .collect();

        Ok(DivisionalChartResponse {
            timestamp_ist: civil.format(TIMESTAMP_FORMAT).to_string(),
            division_count,
            bodies,
        })
    }
}
