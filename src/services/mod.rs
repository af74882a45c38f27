//! Service layer: orchestration between the ephemeris boundary and the
//! chart DTOs. Services hold no mutable state; every request resolves,
//! decomposes, and maps independently.

pub mod chart;
pub mod resolver;

pub use chart::{ChartError, ChartService};
pub use resolver::{BodyPositions, PositionResolver};
