//! End-to-end advisory for a field on a given date.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use agrocal_calendar::{completion_date, day_number};
use agrocal_fertilizer::{PlannedApplication, season_plan};

use crate::advice::round2;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::forecast::{DayWeather, ForecastDay};
use crate::state::CalendarState;

/// Inputs for [`run_advisory`].
#[derive(Debug, Clone)]
pub struct AdvisoryRequest {
    crop: String,
    soil: String,
    area_acres: f64,
    sowing: NaiveDate,
    today: NaiveDate,
    soil_moisture_pct: Option<f64>,
    today_weather: DayWeather,
    config: EngineConfig,
}

impl AdvisoryRequest {
    /// Creates a request with default weather, no sensor reading and the
    /// default configuration.
    pub fn new(
        crop: impl Into<String>,
        soil: impl Into<String>,
        area_acres: f64,
        sowing: NaiveDate,
        today: NaiveDate,
    ) -> Self {
        Self {
            crop: crop.into(),
            soil: soil.into(),
            area_acres,
            sowing,
            today,
            soil_moisture_pct: None,
            today_weather: DayWeather::Default,
            config: EngineConfig::default(),
        }
    }

    /// Sets today's soil-moisture sensor reading (%).
    pub fn with_soil_moisture(mut self, percent: f64) -> Self {
        self.soil_moisture_pct = Some(percent);
        self
    }

    /// Sets today's weather source.
    pub fn with_today_weather(mut self, weather: DayWeather) -> Self {
        self.today_weather = weather;
        self
    }

    /// Sets the engine configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }
}

/// Where the crop cycle stands on the requested date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CycleStatus {
    /// The cycle ended before today.
    Complete {
        /// Last day of the cycle.
        completed_on: Option<NaiveDate>,
    },
    /// The cycle is running.
    Active {
        /// Every scheduled fertilizer application, with dates.
        season_plan: Vec<PlannedApplication>,
        /// Depletion (mm) once the state is restored to today.
        depletion_mm: f64,
        /// Advice from today onward.
        forecast: Vec<ForecastDay>,
    },
}

/// Result of [`run_advisory`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisoryReport {
    pub crop: &'static str,
    pub soil: &'static str,
    pub area_acres: f64,
    pub sowing: NaiveDate,
    pub total_days: u32,
    /// Cycle day of the requested date (sowing day = 1).
    pub day_number: u32,
    #[serde(flatten)]
    pub status: CycleStatus,
}

impl AdvisoryReport {
    /// Returns `true` if the cycle had ended.
    pub fn is_complete(&self) -> bool {
        matches!(self.status, CycleStatus::Complete { .. })
    }

    /// Forecast days, empty for a completed cycle.
    pub fn forecast(&self) -> &[ForecastDay] {
        match &self.status {
            CycleStatus::Active { forecast, .. } => forecast,
            CycleStatus::Complete { .. } => &[],
        }
    }
}

/// Builds the advisory for a field on `request.today`.
///
/// The state is restored to today either from the sensor reading (per the
/// configured seeding policy) or by replaying every prior day with default
/// weather, then a forecast is generated from today.
///
/// # Errors
///
/// Returns [`EngineError::Reference`] for an unknown crop or soil,
/// [`EngineError::InvalidArea`] for a bad area,
/// [`EngineError::Calendar`] if sowing is after today, or any error of the
/// seeding and forecast steps.
#[tracing::instrument(skip(request), fields(crop = %request.crop, soil = %request.soil))]
pub fn run_advisory(request: &AdvisoryRequest) -> Result<AdvisoryReport, EngineError> {
    let mut state = CalendarState::resolve(
        &request.crop,
        &request.soil,
        request.area_acres,
        request.config.clone(),
    )?;
    let day = day_number(request.sowing, request.today)?;
    let total_days = state.total_days();

    let status = if day > total_days {
        let completed_on = completion_date(request.sowing, total_days);
        info!(day, total_days, ?completed_on, "crop cycle complete");
        CycleStatus::Complete { completed_on }
    } else {
        let plan = season_plan(state.crop(), state.area_acres(), Some(request.sowing))?;
        match request.soil_moisture_pct {
            Some(pct) => {
                state.seed_from_moisture(day, pct)?;
            }
            None => state.replay_until(day)?,
        }
        let depletion_mm = round2(state.depletion_mm());
        info!(day, depletion_mm, "state restored");
        let forecast = state.forecast(&request.today_weather, Some(request.sowing))?;
        CycleStatus::Active {
            season_plan: plan,
            depletion_mm,
            forecast,
        }
    };

    Ok(AdvisoryReport {
        crop: state.crop().name,
        soil: state.soil().name,
        area_acres: state.area_acres(),
        sowing: request.sowing,
        total_days,
        day_number: day,
        status,
    })
}
