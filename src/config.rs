//! TOML configuration file layout.

use serde::Deserialize;

/// Top-level agrocal configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AgrocalConfig {
    /// Engine settings.
    #[serde(default)]
    pub engine: EngineToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineToml {
    #[serde(default = "default_irrigation_efficiency")]
    pub irrigation_efficiency: f64,
    #[serde(default = "default_management_allowed_depletion")]
    pub management_allowed_depletion: f64,
    #[serde(default = "default_flood_trigger_mm")]
    pub flood_trigger_mm: f64,
    #[serde(default = "default_flood_standing_water_mm")]
    pub flood_standing_water_mm: f64,
    #[serde(default = "default_forecast_horizon_days")]
    pub forecast_horizon_days: u32,
    /// `"skip_replay"` or `"replay_history"`.
    #[serde(default = "default_sensor_seeding")]
    pub sensor_seeding: String,
    /// `"strict"` or `"allow_partial"`.
    #[serde(default = "default_completeness")]
    pub weather_completeness: String,
    #[serde(default = "default_liters_per_mm_per_acre")]
    pub liters_per_mm_per_acre: f64,
}

impl Default for EngineToml {
    fn default() -> Self {
        Self {
            irrigation_efficiency: default_irrigation_efficiency(),
            management_allowed_depletion: default_management_allowed_depletion(),
            flood_trigger_mm: default_flood_trigger_mm(),
            flood_standing_water_mm: default_flood_standing_water_mm(),
            forecast_horizon_days: default_forecast_horizon_days(),
            sensor_seeding: default_sensor_seeding(),
            weather_completeness: default_completeness(),
            liters_per_mm_per_acre: default_liters_per_mm_per_acre(),
        }
    }
}

fn default_irrigation_efficiency() -> f64 {
    0.75
}
fn default_management_allowed_depletion() -> f64 {
    0.5
}
fn default_flood_trigger_mm() -> f64 {
    5.0
}
fn default_flood_standing_water_mm() -> f64 {
    50.0
}
fn default_forecast_horizon_days() -> u32 {
    31
}
fn default_sensor_seeding() -> String {
    "skip_replay".to_string()
}
fn default_completeness() -> String {
    "strict".to_string()
}
fn default_liters_per_mm_per_acre() -> f64 {
    agrocal_reference::LITERS_PER_MM_PER_ACRE
}
