//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use agrocal_engine::{EngineConfig, SensorSeeding};
use agrocal_et0::Completeness;

use crate::config::EngineToml;

/// Parses a sensor seeding policy name into the corresponding enum variant.
pub fn parse_sensor_seeding(s: &str) -> Result<SensorSeeding> {
    match s.to_lowercase().as_str() {
        "skip_replay" => Ok(SensorSeeding::SkipReplay),
        "replay_history" => Ok(SensorSeeding::ReplayHistory),
        other => bail!("unknown sensor seeding policy: {other:?}"),
    }
}

/// Parses a weather completeness mode name into the corresponding enum variant.
pub fn parse_completeness(s: &str) -> Result<Completeness> {
    match s.to_lowercase().as_str() {
        "strict" => Ok(Completeness::Strict),
        "allow_partial" => Ok(Completeness::AllowPartial),
        other => bail!("unknown weather completeness mode: {other:?}"),
    }
}

/// Builds a validated [`EngineConfig`] from the TOML engine configuration.
pub fn build_engine_config(engine: &EngineToml) -> Result<EngineConfig> {
    let cfg = EngineConfig::new()
        .with_irrigation_efficiency(engine.irrigation_efficiency)
        .with_management_allowed_depletion(engine.management_allowed_depletion)
        .with_flood_trigger_mm(engine.flood_trigger_mm)
        .with_flood_standing_water_mm(engine.flood_standing_water_mm)
        .with_forecast_horizon_days(engine.forecast_horizon_days)
        .with_sensor_seeding(parse_sensor_seeding(&engine.sensor_seeding)?)
        .with_completeness(parse_completeness(&engine.weather_completeness)?)
        .with_liters_per_mm_per_acre(engine.liters_per_mm_per_acre);
    cfg.validate().context("invalid [engine] configuration")?;
    Ok(cfg)
}
