//! Configuration for the crop calendar engine.

use agrocal_et0::Completeness;
use agrocal_reference::LITERS_PER_MM_PER_ACRE;

use crate::error::EngineError;

/// How a soil-moisture sensor reading restores a mid-cycle simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SensorSeeding {
    /// Seed depletion at the current day and continue from there.
    ///
    /// Prior days are not replayed, so the sensor reading is the only
    /// source of the current water status.
    #[default]
    SkipReplay,
    /// Seed depletion, then replay every prior day with default weather.
    ///
    /// The replay applies early-season water loss on top of a reading that
    /// already reflects it.
    ReplayHistory,
}

/// Configuration for a [`CalendarState`](crate::CalendarState).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use agrocal_engine::{EngineConfig, SensorSeeding};
///
/// let config = EngineConfig::new()
///     .with_irrigation_efficiency(0.9)
///     .with_sensor_seeding(SensorSeeding::ReplayHistory);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    irrigation_efficiency: f64,
    management_allowed_depletion: f64,
    flood_trigger_mm: f64,
    flood_standing_water_mm: f64,
    forecast_horizon_days: u32,
    sensor_seeding: SensorSeeding,
    completeness: Completeness,
    liters_per_mm_per_acre: f64,
}

impl EngineConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `irrigation_efficiency = 0.75`,
    /// `management_allowed_depletion = 0.5`, `flood_trigger_mm = 5.0`,
    /// `flood_standing_water_mm = 50.0`, `forecast_horizon_days = 31`,
    /// `sensor_seeding = SkipReplay`, `completeness = Strict`,
    /// `liters_per_mm_per_acre = 4046.86`.
    pub fn new() -> Self {
        Self {
            irrigation_efficiency: 0.75,
            management_allowed_depletion: 0.5,
            flood_trigger_mm: 5.0,
            flood_standing_water_mm: 50.0,
            forecast_horizon_days: 31,
            sensor_seeding: SensorSeeding::SkipReplay,
            completeness: Completeness::Strict,
            liters_per_mm_per_acre: LITERS_PER_MM_PER_ACRE,
        }
    }

    /// Sets the fraction of applied water that reaches the root zone.
    pub fn with_irrigation_efficiency(mut self, efficiency: f64) -> Self {
        self.irrigation_efficiency = efficiency;
        self
    }

    /// Sets the fraction of TAW that may be depleted before refilling.
    pub fn with_management_allowed_depletion(mut self, fraction: f64) -> Self {
        self.management_allowed_depletion = fraction;
        self
    }

    /// Sets the depletion (mm) above which a flooded crop is re-flooded.
    pub fn with_flood_trigger_mm(mut self, mm: f64) -> Self {
        self.flood_trigger_mm = mm;
        self
    }

    /// Sets the standing water depth (mm) added on top of a re-flood.
    pub fn with_flood_standing_water_mm(mut self, mm: f64) -> Self {
        self.flood_standing_water_mm = mm;
        self
    }

    /// Sets the maximum number of days in a forecast.
    pub fn with_forecast_horizon_days(mut self, days: u32) -> Self {
        self.forecast_horizon_days = days;
        self
    }

    /// Sets the sensor seeding policy.
    pub fn with_sensor_seeding(mut self, seeding: SensorSeeding) -> Self {
        self.sensor_seeding = seeding;
        self
    }

    /// Sets how incomplete live weather readings are treated.
    pub fn with_completeness(mut self, completeness: Completeness) -> Self {
        self.completeness = completeness;
        self
    }

    /// Sets the litres held by a 1 mm layer over one acre.
    pub fn with_liters_per_mm_per_acre(mut self, liters: f64) -> Self {
        self.liters_per_mm_per_acre = liters;
        self
    }

    // --- Accessors ---

    /// Returns the irrigation application efficiency.
    pub fn irrigation_efficiency(&self) -> f64 {
        self.irrigation_efficiency
    }

    /// Returns the management-allowed depletion fraction.
    pub fn management_allowed_depletion(&self) -> f64 {
        self.management_allowed_depletion
    }

    /// Returns the flood trigger depletion (mm).
    pub fn flood_trigger_mm(&self) -> f64 {
        self.flood_trigger_mm
    }

    /// Returns the flood standing water depth (mm).
    pub fn flood_standing_water_mm(&self) -> f64 {
        self.flood_standing_water_mm
    }

    /// Returns the forecast horizon (days).
    pub fn forecast_horizon_days(&self) -> u32 {
        self.forecast_horizon_days
    }

    /// Returns the sensor seeding policy.
    pub fn sensor_seeding(&self) -> SensorSeeding {
        self.sensor_seeding
    }

    /// Returns the weather completeness mode.
    pub fn completeness(&self) -> Completeness {
        self.completeness
    }

    /// Returns the litres per mm per acre conversion.
    pub fn liters_per_mm_per_acre(&self) -> f64 {
        self.liters_per_mm_per_acre
    }

    /// Validates this configuration.
    ///
    /// Checks that the efficiency and allowed depletion are in (0, 1], the
    /// flood depths and litre conversion are finite and non-negative, and the
    /// horizon is at least one day.
    pub fn validate(&self) -> Result<(), EngineError> {
        Self::validate_fraction(self.irrigation_efficiency, "irrigation_efficiency")?;
        Self::validate_fraction(
            self.management_allowed_depletion,
            "management_allowed_depletion",
        )?;
        Self::validate_depth(self.flood_trigger_mm, "flood_trigger_mm")?;
        Self::validate_depth(self.flood_standing_water_mm, "flood_standing_water_mm")?;
        Self::validate_depth(self.liters_per_mm_per_acre, "liters_per_mm_per_acre")?;

        if self.forecast_horizon_days == 0 {
            return Err(EngineError::InvalidConfig {
                reason: "forecast_horizon_days must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    fn validate_fraction(value: f64, name: &str) -> Result<(), EngineError> {
        if !value.is_finite() || value <= 0.0 || value > 1.0 {
            return Err(EngineError::InvalidConfig {
                reason: format!("{name} must be in (0, 1], got {value}"),
            });
        }
        Ok(())
    }

    fn validate_depth(value: f64, name: &str) -> Result<(), EngineError> {
        if !value.is_finite() || value < 0.0 {
            return Err(EngineError::InvalidConfig {
                reason: format!("{name} must be finite and non-negative, got {value}"),
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = EngineConfig::default();
        assert_eq!(c.irrigation_efficiency(), 0.75);
        assert_eq!(c.management_allowed_depletion(), 0.5);
        assert_eq!(c.flood_trigger_mm(), 5.0);
        assert_eq!(c.flood_standing_water_mm(), 50.0);
        assert_eq!(c.forecast_horizon_days(), 31);
        assert_eq!(c.sensor_seeding(), SensorSeeding::SkipReplay);
        assert_eq!(c.completeness(), Completeness::Strict);
        assert_eq!(c.liters_per_mm_per_acre(), 4046.86);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn builder_chain() {
        let c = EngineConfig::new()
            .with_irrigation_efficiency(0.9)
            .with_management_allowed_depletion(0.4)
            .with_flood_trigger_mm(8.0)
            .with_flood_standing_water_mm(30.0)
            .with_forecast_horizon_days(7)
            .with_sensor_seeding(SensorSeeding::ReplayHistory)
            .with_completeness(Completeness::AllowPartial)
            .with_liters_per_mm_per_acre(4000.0);
        assert_eq!(c.irrigation_efficiency(), 0.9);
        assert_eq!(c.management_allowed_depletion(), 0.4);
        assert_eq!(c.flood_trigger_mm(), 8.0);
        assert_eq!(c.flood_standing_water_mm(), 30.0);
        assert_eq!(c.forecast_horizon_days(), 7);
        assert_eq!(c.sensor_seeding(), SensorSeeding::ReplayHistory);
        assert_eq!(c.completeness(), Completeness::AllowPartial);
        assert_eq!(c.liters_per_mm_per_acre(), 4000.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_efficiency_rejected() {
        let err = EngineConfig::new()
            .with_irrigation_efficiency(0.0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("irrigation_efficiency"));
    }

    #[test]
    fn depletion_fraction_above_one_rejected() {
        assert!(
            EngineConfig::new()
                .with_management_allowed_depletion(1.5)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn negative_flood_depth_rejected() {
        assert!(
            EngineConfig::new()
                .with_flood_standing_water_mm(-1.0)
                .validate()
                .is_err()
        );
        assert!(
            EngineConfig::new()
                .with_flood_trigger_mm(f64::NAN)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn zero_horizon_rejected() {
        assert!(matches!(
            EngineConfig::new().with_forecast_horizon_days(0).validate(),
            Err(EngineError::InvalidConfig { .. })
        ));
    }
}
