//! Crop calendar engine for irrigation and fertilizer scheduling.
//!
//! This package re-exports the workspace crates and adds the host-facing
//! layer: TOML configuration, config conversion and logging setup.
//!
//! | Crate | Purpose |
//! |-------|---------|
//! | [`et0`] | Weather samples and FAO-56 reference ET0 |
//! | [`calendar`] | Growth stages and sowing-date arithmetic |
//! | [`reference`] | Crop, soil, root-depth and carrier tables |
//! | [`fertilizer`] | N/P/K to urea, DAP and MOP |
//! | [`engine`] | Daily water balance, forecast and advisory run |
//!
//! # Example
//!
//! ```no_run
//! use agrocal::engine::{AdvisoryRequest, run_advisory};
//! use chrono::NaiveDate;
//!
//! # fn main() -> anyhow::Result<()> {
//! agrocal::logging::init(1);
//! let config = agrocal::load_engine_config("agrocal.toml")?;
//! let sowing = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 11, 20).unwrap();
//! let request = AdvisoryRequest::new("Wheat", "loamy", 2.0, sowing, today).with_config(config);
//! let report = run_advisory(&request)?;
//! println!("day {} of {}", report.day_number, report.total_days);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use anyhow::{Context, Result};

pub mod config;
pub mod convert;
pub mod logging;

pub use agrocal_calendar as calendar;
pub use agrocal_engine as engine;
pub use agrocal_et0 as et0;
pub use agrocal_fertilizer as fertilizer;
pub use agrocal_reference as reference;

pub use config::AgrocalConfig;

/// Reads and parses an agrocal TOML configuration file.
pub fn load_config(path: impl AsRef<Path>) -> Result<AgrocalConfig> {
    let path = path.as_ref();
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: AgrocalConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;
    tracing::info!(path = %path.display(), "configuration loaded");
    Ok(config)
}

/// Reads a configuration file and builds the validated engine configuration.
pub fn load_engine_config(path: impl AsRef<Path>) -> Result<engine::EngineConfig> {
    let config = load_config(path)?;
    convert::build_engine_config(&config.engine)
}
