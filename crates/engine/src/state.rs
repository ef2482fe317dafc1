//! Per-simulation crop calendar state.

use serde::Serialize;

use agrocal_calendar::{GrowthStage, StageBoundaries};
use agrocal_reference::{CropProfile, ROOT_DEPTH, SoilProfile};

use crate::config::EngineConfig;
use crate::error::EngineError;

/// Stage parameters for one cycle day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageParams {
    /// Growth stage the day falls in.
    pub stage: GrowthStage,
    /// Crop coefficient for the stage.
    pub kc: f64,
    /// Assumed root depth for the stage (m).
    pub root_depth_m: f64,
}

impl StageParams {
    /// Lower-case stage key (`"initial"`, `"mid"`, `"late"`).
    pub fn key(&self) -> &'static str {
        self.stage.key()
    }

    /// Capitalised stage label.
    pub fn label(&self) -> &'static str {
        self.stage.label()
    }
}

/// Running water balance of one crop cycle on one field.
///
/// Depletion starts at 0 on day 1 and is advanced one day at a time by
/// [`daily_advice`](Self::daily_advice), strictly in increasing day order.
/// The state records the next day it accepts and rejects anything else.
#[derive(Debug, Clone)]
pub struct CalendarState {
    crop: &'static CropProfile,
    soil: &'static SoilProfile,
    area_acres: f64,
    boundaries: StageBoundaries,
    config: EngineConfig,
    pub(crate) depletion_mm: f64,
    pub(crate) next_day: u32,
}

impl CalendarState {
    /// Creates a state from exact crop and soil names with the default
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Reference`] if the crop or soil is unknown, or
    /// [`EngineError::InvalidArea`] if `area_acres` is not a finite positive
    /// number.
    pub fn create(crop_name: &str, soil_type: &str, area_acres: f64) -> Result<Self, EngineError> {
        let crop = CropProfile::find(crop_name)?;
        let soil = SoilProfile::find(soil_type)?;
        Self::from_profiles(crop, soil, area_acres, EngineConfig::default())
    }

    /// Like [`create`](Self::create), but matches crop and soil names
    /// ignoring ASCII case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub fn resolve(
        crop_name: &str,
        soil_type: &str,
        area_acres: f64,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        let crop = CropProfile::resolve(crop_name)?;
        let soil = SoilProfile::resolve(soil_type)?;
        Self::from_profiles(crop, soil, area_acres, config)
    }

    /// Creates a state from already-resolved profiles.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidArea`] for a bad area,
    /// [`EngineError::InvalidConfig`] if `config` fails validation, or
    /// [`EngineError::Calendar`] for a zero-length crop cycle.
    pub fn from_profiles(
        crop: &'static CropProfile,
        soil: &'static SoilProfile,
        area_acres: f64,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        if !area_acres.is_finite() || area_acres <= 0.0 {
            return Err(EngineError::InvalidArea { area: area_acres });
        }
        config.validate()?;
        let boundaries = crop.stage_boundaries()?;
        Ok(Self {
            crop,
            soil,
            area_acres,
            boundaries,
            config,
            depletion_mm: 0.0,
            next_day: 1,
        })
    }

    /// Crop profile of this simulation.
    pub fn crop(&self) -> &'static CropProfile {
        self.crop
    }

    /// Soil profile of this simulation.
    pub fn soil(&self) -> &'static SoilProfile {
        self.soil
    }

    /// Field area (acres).
    pub fn area_acres(&self) -> f64 {
        self.area_acres
    }

    /// Length of the crop cycle (days).
    pub fn total_days(&self) -> u32 {
        self.boundaries.total_days()
    }

    /// Stage boundaries of the crop cycle.
    pub fn boundaries(&self) -> &StageBoundaries {
        &self.boundaries
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current soil-moisture depletion below field capacity (mm, >= 0).
    pub fn depletion_mm(&self) -> f64 {
        self.depletion_mm
    }

    /// The only day [`daily_advice`](Self::daily_advice) accepts next.
    pub fn next_day(&self) -> u32 {
        self.next_day
    }

    /// Returns `true` once every day of the cycle has been advanced.
    pub fn is_complete(&self) -> bool {
        self.next_day > self.total_days()
    }

    /// Returns the stage, crop coefficient and root depth for `day`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Calendar`] if `day` is 0 or past the cycle.
    pub fn stage_for_day(&self, day: u32) -> Result<StageParams, EngineError> {
        let stage = self.boundaries.stage_for_day(day)?;
        Ok(StageParams {
            stage,
            kc: self.crop.kc.for_stage(stage),
            root_depth_m: ROOT_DEPTH.for_stage(stage),
        })
    }

    /// Total available water (mm) for a root zone `root_depth_m` deep.
    pub fn taw_mm(&self, root_depth_m: f64) -> f64 {
        self.soil.taw_mm(root_depth_m)
    }
}
