//! Response types for the chart API.
//!
//! These types serialize to the exact wire contract consumers depend on.
//! Divisional responses embed the division count in their keys
//! (`d7_chart`, `d7_sign`, ...), so those types carry the count and build
//! their keys during serialization instead of deriving `Serialize`.
//! Body entries appear in fixed body enumeration order.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::models::Body;

/// One body's entry in the undivided (D1) chart.
#[derive(Debug, Clone, Serialize)]
pub struct NatalBodyEntry {
    /// Sign name, e.g. "Libra".
    pub zodiac: String,
    /// Degree within the sign, rounded to 5 decimals.
    pub degree_decimal: f64,
    /// Degrees-minutes-seconds form, e.g. `15° 30′ 0″`.
    pub degree_dms: String,
}

/// The undivided (D1) chart response.
///
/// Serializes as `{"timestamp_ist": ..., "planets": {"Sun": {...}, ...}}`.
#[derive(Debug, Clone)]
pub struct NatalChartResponse {
    /// Local civil timestamp, second precision.
    pub timestamp_ist: String,
    /// Per-body entries in fixed body order.
    pub planets: Vec<(Body, NatalBodyEntry)>,
}

impl Serialize for NatalChartResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("timestamp_ist", &self.timestamp_ist)?;
        map.serialize_entry("planets", &BodyMap(&self.planets))?;
        map.end()
    }
}

/// One body's entry in a divisional chart.
#[derive(Debug, Clone)]
pub struct DivisionalBodyEntry {
    /// Sign in the undivided chart, e.g. "Taurus".
    pub original_sign: String,
    /// Degree within the original sign, rounded to 5 decimals.
    pub degree_decimal: f64,
    /// Degrees-minutes-seconds form of the original degree.
    pub degree_dms: String,
    /// Sign in the divisional chart, serialized under `d<N>_sign`.
    pub derived_sign: String,
}

/// A divisional chart response.
///
/// Serializes as `{"timestamp_ist": ..., "d<N>_chart": {"Sun": {...}, ...}}`
/// where each body entry carries its derived sign under `d<N>_sign`.
#[derive(Debug, Clone)]
pub struct DivisionalChartResponse {
    /// Local civil timestamp, second precision.
    pub timestamp_ist: String,
    /// Division count N, embedded in the chart and sign keys.
    pub division_count: u16,
    /// Per-body entries in fixed body order.
    pub bodies: Vec<(Body, DivisionalBodyEntry)>,
}

impl Serialize for DivisionalChartResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("timestamp_ist", &self.timestamp_ist)?;
        map.serialize_entry(
            &format!("d{}_chart", self.division_count),
            &DivisionalBodyMap {
                division_count: self.division_count,
                bodies: &self.bodies,
            },
        )?;
        map.end()
    }
}

/// Serializes a body list as a map keyed by body name, preserving order.
struct BodyMap<'a>(&'a [(Body, NatalBodyEntry)]);

impl Serialize for BodyMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (body, entry) in self.0 {
            map.serialize_entry(body.name(), entry)?;
        }
        map.end()
    }
}

struct DivisionalBodyMap<'a> {
    division_count: u16,
    bodies: &'a [(Body, DivisionalBodyEntry)],
}

impl Serialize for DivisionalBodyMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.bodies.len()))?;
        for (body, entry) in self.bodies {
            map.serialize_entry(
                body.name(),
                &DivisionalEntryView {
                    division_count: self.division_count,
                    entry,
                },
            )?;
        }
        map.end()
    }
}

struct DivisionalEntryView<'a> {
    division_count: u16,
    entry: &'a DivisionalBodyEntry,
}

impl Serialize for DivisionalEntryView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("original_sign", &self.entry.original_sign)?;
        map.serialize_entry("degree_decimal", &self.entry.degree_decimal)?;
        map.serialize_entry("degree_dms", &self.entry.degree_dms)?;
        map.serialize_entry(
            &format!("d{}_sign", self.division_count),
            &self.entry.derived_sign,
        )?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_divisional() -> DivisionalChartResponse {
        DivisionalChartResponse {
            timestamp_ist: "2024-01-01 12:00:00".to_string(),
            division_count: 7,
            bodies: vec![(
                Body::Moon,
                DivisionalBodyEntry {
                    original_sign: "Taurus".to_string(),
                    degree_decimal: 10.0,
                    degree_dms: "10° 0′ 0″".to_string(),
                    derived_sign: "Libra".to_string(),
                },
            )],
        }
    }

    #[test]
    fn test_divisional_keys_embed_count() {
        let json = serde_json::to_value(sample_divisional()).unwrap();
        let chart = &json["d7_chart"];
        assert_eq!(chart["Moon"]["original_sign"], "Taurus");
        assert_eq!(chart["Moon"]["d7_sign"], "Libra");
        assert_eq!(json["timestamp_ist"], "2024-01-01 12:00:00");
    }

    #[test]
    fn test_natal_serializes_under_planets() {
        let response = NatalChartResponse {
            timestamp_ist: "2024-01-01 12:00:00".to_string(),
            planets: vec![(
                Body::Sun,
                NatalBodyEntry {
                    zodiac: "Aries".to_string(),
                    degree_decimal: 1.5,
                    degree_dms: "1° 30′ 0″".to_string(),
                },
            )],
        };
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["planets"]["Sun"]["zodiac"], "Aries");
        assert_eq!(json["planets"]["Sun"]["degree_decimal"], 1.5);
    }

    #[test]
    fn test_body_order_is_preserved_in_output() {
        let response = NatalChartResponse {
            timestamp_ist: "t".to_string(),
            planets: vec![
                (
                    Body::Rahu,
                    NatalBodyEntry {
                        zodiac: "Pisces".to_string(),
                        degree_decimal: 0.0,
                        degree_dms: "0° 0′ 0″".to_string(),
                    },
                ),
                (
                    Body::Ketu,
                    NatalBodyEntry {
                        zodiac: "Virgo".to_string(),
                        degree_decimal: 0.0,
                        degree_dms: "0° 0′ 0″".to_string(),
                    },
                ),
            ],
        };
        let text = serde_json::to_string(&response).unwrap();
        let rahu = text.find("Rahu").unwrap();
        let ketu = text.find("Ketu").unwrap();
        assert!(rahu < ketu);
    }
}
