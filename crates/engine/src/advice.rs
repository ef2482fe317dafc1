//! The daily water-balance transition.

use serde::Serialize;
use tracing::debug;

use agrocal_calendar::GrowthStage;
use agrocal_et0::{WeatherSample, reference_et0};
use agrocal_fertilizer::{FertilizerAdvice, advice_for_day};

use crate::error::EngineError;
use crate::state::CalendarState;

/// Which branch of the irrigation rule fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationDecision {
    /// Rain exceeded the crop's demand.
    RainSatisfied,
    /// Flooded crop re-flooded to standing water.
    FloodMaintenance,
    /// Depletion passed the refill threshold; refill to field capacity.
    Refill,
    /// Depletion is within the readily available water.
    NotNeeded,
}

impl IrrigationDecision {
    /// Returns `true` if water is applied.
    pub fn irrigates(self) -> bool {
        matches!(self, Self::FloodMaintenance | Self::Refill)
    }
}

/// Advisory record for one cycle day.
///
/// Millimetre quantities are rounded to 2 decimals. `depletion_mm` is the
/// depletion after irrigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyAdvice {
    pub day: u32,
    /// Serialized as the display label (`"Initial"`, `"Mid"`, `"Late"`).
    #[serde(serialize_with = "serialize_stage_label")]
    pub stage: GrowthStage,
    pub rainfall_mm: f64,
    pub et0_mm: f64,
    pub etc_mm: f64,
    pub taw_mm: f64,
    /// Readily available water, the refill threshold.
    pub raw_mm: f64,
    pub depletion_mm: f64,
    pub decision: IrrigationDecision,
    pub net_irrigation_mm: f64,
    /// Water to apply, after application losses.
    pub gross_irrigation_mm: f64,
    /// `ceil(gross_irrigation_mm * liters_per_mm_per_acre * area_acres)`.
    pub irrigation_liters: u64,
    pub fertilizer: FertilizerAdvice,
}

impl DailyAdvice {
    /// Capitalised stage label.
    pub fn stage_label(&self) -> &'static str {
        self.stage.label()
    }
}

impl CalendarState {
    /// Advances the water balance by one day and returns that day's advice.
    ///
    /// `day` must equal [`next_day`](Self::next_day). Depletion grows by
    /// `ETc - rain`, is clamped at 0, and the irrigation rule is applied in
    /// priority order: rain greater than demand, flood maintenance for
    /// flooded crops, refill above the readily available water, nothing.
    /// Net irrigation is subtracted from depletion; gross irrigation is net
    /// divided by the application efficiency.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CycleComplete`] if `day` is past the cycle,
    /// or [`EngineError::DayOutOfOrder`] if it is not the expected day. The
    /// state is unchanged on error.
    #[tracing::instrument(skip(self, weather), fields(crop = self.crop().name))]
    pub fn daily_advice(
        &mut self,
        day: u32,
        weather: &WeatherSample,
    ) -> Result<DailyAdvice, EngineError> {
        let total_days = self.total_days();
        if day > total_days {
            return Err(EngineError::CycleComplete { day, total_days });
        }
        if day != self.next_day {
            return Err(EngineError::DayOutOfOrder {
                expected: self.next_day,
                got: day,
            });
        }

        let params = self.stage_for_day(day)?;
        let fertilizer = advice_for_day(self.crop(), day, self.area_acres())?;

        let et0 = reference_et0(weather);
        let etc = et0 * params.kc;
        let rain = weather.precipitation_mm();
        let taw = self.taw_mm(params.root_depth_m);
        let raw = taw * self.config().management_allowed_depletion();

        let mut depletion = (self.depletion_mm + etc - rain).max(0.0);
        let (decision, net) = self.irrigation_rule(rain, etc, depletion, raw);
        let gross = if net > 0.0 {
            depletion = (depletion - net).max(0.0);
            net / self.config().irrigation_efficiency()
        } else {
            0.0
        };

        self.depletion_mm = depletion;
        self.next_day = day + 1;

        let gross_rounded = round2(gross);
        debug!(
            day,
            stage = %params.stage,
            et0,
            etc,
            depletion,
            ?decision,
            irrigates = decision.irrigates(),
            gross_irrigation_mm = gross_rounded,
            "day advanced"
        );

        Ok(DailyAdvice {
            day,
            stage: params.stage,
            rainfall_mm: round2(rain),
            et0_mm: round2(et0),
            etc_mm: round2(etc),
            taw_mm: round2(taw),
            raw_mm: round2(raw),
            depletion_mm: round2(depletion),
            decision,
            net_irrigation_mm: round2(net),
            gross_irrigation_mm: gross_rounded,
            irrigation_liters: self.liters_for(gross_rounded),
            fertilizer,
        })
    }

    fn irrigation_rule(
        &self,
        rain: f64,
        etc: f64,
        depletion: f64,
        raw: f64,
    ) -> (IrrigationDecision, f64) {
        let config = self.config();
        if rain > etc {
            (IrrigationDecision::RainSatisfied, 0.0)
        } else if self.crop().is_flooded() && depletion > config.flood_trigger_mm() {
            (
                IrrigationDecision::FloodMaintenance,
                depletion + config.flood_standing_water_mm(),
            )
        } else if depletion > raw {
            (IrrigationDecision::Refill, depletion)
        } else {
            (IrrigationDecision::NotNeeded, 0.0)
        }
    }

    /// Litres of water for `gross_mm` over the whole field, rounded up.
    pub fn liters_for(&self, gross_mm: f64) -> u64 {
        let liters = (gross_mm * self.config().liters_per_mm_per_acre() * self.area_acres()).ceil();
        if liters > 0.0 { liters as u64 } else { 0 }
    }
}

fn serialize_stage_label<S: serde::Serializer>(
    stage: &GrowthStage,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(stage.label())
}

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
