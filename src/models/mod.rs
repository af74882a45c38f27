//! Domain types and pure chart math.
//!
//! Everything in this module is side-effect-free: sign decomposition and the
//! varga mapping are plain functions over plain values, so the orchestration
//! layers stay thin.

pub mod body;
pub mod varga;
pub mod zodiac;

pub use body::{Body, ALL_BODIES, QUERIED_BODIES};
pub use varga::{map_sign, method_for, DivisionalPlacement, VargaMethod, VARGA_REGISTRY};
pub use zodiac::{decompose, normalize_360, Dms, Sign, SignPlacement, ALL_SIGNS};
