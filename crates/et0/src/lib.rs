//! Daily weather inputs and FAO-56 reference evapotranspiration.
//!
//! This crate turns one day of weather into the reference crop water
//! demand (ET0, mm/day) used by the crop water balance.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │ LiveReading   │────▶│ WeatherSample  │────▶│  reference_et0   │
//!  │ (optional)    │     │  (validated)   │     │  (mm/day, >= 0)  │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use agrocal_et0::{WeatherSample, reference_et0};
//!
//! let weather = WeatherSample::new(25.0, 60.0, 2.0, 20.0, 0.0).unwrap();
//! let et0 = reference_et0(&weather);
//! assert!(et0 > 3.7 && et0 < 4.0);
//! ```

mod error;
mod penman;
mod weather;

pub use error::Et0Error;
pub use penman::{
    REFERENCE_ELEVATION_M, atmospheric_pressure_kpa, psychrometric_constant, reference_et0,
    saturation_vapour_pressure, vapour_pressure_slope,
};
pub use weather::{Completeness, LiveReading, SensorOverride, WeatherField, WeatherSample};
