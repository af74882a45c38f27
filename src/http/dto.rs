//! Data Transfer Objects for the HTTP API.
//!
//! The chart response DTOs live in [`crate::api`] and are re-exported here;
//! this module only adds the types specific to the HTTP surface.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    DivisionalBodyEntry, DivisionalChartResponse, NatalBodyEntry, NatalChartResponse,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Identifier of the configured ephemeris source
    pub ephemeris: String,
}
