//! # Astronihar
//!
//! Sidereal divisional-chart computation service.
//!
//! This crate computes sidereal planetary positions for a fixed observer
//! ("now" only) and derives divisional (varga) charts from them. The core
//! is the pure varga mapping: given a body's zodiac sign and its degree
//! within that sign, a division count and a sign-selection method produce
//! the sign the body occupies in the divisional chart. Results are exposed
//! over a REST API via axum.
//!
//! ## Architecture
//!
//! - [`models`]: zodiac signs, tracked bodies, and the pure varga math
//! - [`ephemeris`]: the ephemeris source boundary and the built-in
//!   mean-element source
//! - [`config`]: explicit chart configuration (observer, civil offset,
//!   ayanamsha)
//! - [`services`]: position resolution and chart assembly
//! - [`api`]: response DTOs with the `d<N>`-keyed wire contract
//! - [`http`]: axum-based HTTP server and request handlers
//!
//! Every chart request is independent: one ephemeris query batch, one
//! computation, no caching and no shared mutable state across requests.

pub mod api;
pub mod config;
pub mod ephemeris;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
