//! Core library for the `skywatch` CLI.
//!
//! This crate defines:
//! - The Open-Meteo upstream client (geocoding, current conditions, forecast)
//! - Normalization of raw payloads into a presentation-ready view model
//! - Synthetic nearby-station generation
//! - Configuration handling
//!
//! It is used by `skywatch-cli`, but can also be reused by other binaries or
//! services.

pub mod client;
pub mod codes;
pub mod config;
pub mod error;
pub mod geo;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod stations;
pub mod units;

pub use client::OpenMeteoClient;
pub use config::{Config, StationRing};
pub use error::WeatherError;
pub use model::{Coordinate, Station, WeatherViewModel};
pub use pipeline::WeatherService;
