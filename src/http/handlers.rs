//! HTTP handlers for the chart API.
//!
//! One parameterized handler serves every divisional chart: the path
//! segment (`d7`, `d10`, ...) is parsed to a division count and looked up
//! in the static varga registry, so adding a chart means adding a registry
//! entry, not a handler.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use super::dto::HealthResponse;
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint reporting the configured ephemeris source.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        ephemeris: state.charts.source_name().to_string(),
    }))
}

/// GET /api/astronihar/{chart}
///
/// `chart` is `d1` for the undivided chart or `d<N>` for a registered
/// divisional chart. Unknown chart names and unregistered counts are 404.
pub async fn get_chart(
    State(state): State<AppState>,
    Path(chart): Path<String>,
) -> HandlerResult<Value> {
    let division_count = parse_chart_name(&chart)
        .ok_or_else(|| AppError::NotFound(format!("Unknown chart '{}'", chart)))?;

    // Ephemeris calls are blocking; keep them off the async executor.
    let charts = state.charts.clone();
    let value = tokio::task::spawn_blocking(move || -> Result<Value, AppError> {
        let value = if division_count == 1 {
            serde_json::to_value(charts.natal_chart()?)
        } else {
            serde_json::to_value(charts.divisional_chart(division_count)?)
        };
        value.map_err(|e| AppError::Internal(format!("Serialization error: {}", e)))
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(value))
}

/// Parse a chart path segment (`d1`, `d7`, ...) to its division count.
fn parse_chart_name(chart: &str) -> Option<u16> {
    let digits = chart.strip_prefix('d')?;
    // Reject forms like "d07" so each chart has exactly one URL.
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    digits.parse().ok().filter(|n| *n >= 1)
}

#[cfg(test)]
mod tests {
    use super::parse_chart_name;

    #[test]
    fn test_parse_chart_name() {
        assert_eq!(parse_chart_name("d1"), Some(1));
        assert_eq!(parse_chart_name("d7"), Some(7));
        assert_eq!(parse_chart_name("d144"), Some(144));
        assert_eq!(parse_chart_name("d0"), None);
        assert_eq!(parse_chart_name("d07"), None);
        assert_eq!(parse_chart_name("x7"), None);
        assert_eq!(parse_chart_name("d"), None);
        assert_eq!(parse_chart_name("d-1"), None);
    }
}
