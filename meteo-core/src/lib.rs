//! Core library for the `meteo` CLI.
//!
//! This crate defines:
//! - Scalar value extraction from raw JSON text (no JSON library involved)
//! - The fixed field list and ordered report mapping
//! - Weather-code and wind-direction translation
//! - The Open-Meteo fetcher and on-disk configuration
//!
//! It is used by `meteo-cli`, but can also be reused by other binaries or services.

pub mod codes;
pub mod config;
pub mod extract;
pub mod model;
pub mod provider;
pub mod report;

pub use codes::{NOT_AVAILABLE, describe_weather_code, describe_wind_direction};
pub use config::Config;
pub use extract::extract;
pub use model::{Location, RawDocument};
pub use provider::{FetchError, ObservationSource, OpenMeteo};
pub use report::{FIELDS, Field, WeatherReport, map_fields};
