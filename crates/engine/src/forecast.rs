//! Multi-day forecast from the current state.

use chrono::NaiveDate;
use serde::Serialize;

use agrocal_calendar::{date_for_day, forecast_days};
use agrocal_et0::{LiveReading, SensorOverride, WeatherSample};

use crate::advice::DailyAdvice;
use crate::error::EngineError;
use crate::state::CalendarState;

/// Weather source for the first day of a forecast.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DayWeather {
    /// Default weather.
    #[default]
    Default,
    /// Default weather with temperature and/or humidity replaced.
    Override(SensorOverride),
    /// A live reading, resolved under the configured completeness mode.
    Live(LiveReading),
}

impl DayWeather {
    /// Resolves this source into a validated sample.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Weather`] if an override is out of range or a
    /// strict live reading is incomplete.
    pub fn resolve(&self, state: &CalendarState) -> Result<WeatherSample, EngineError> {
        let base = WeatherSample::default();
        let sample = match self {
            Self::Default => base,
            Self::Override(o) if o.is_empty() => base,
            Self::Override(o) => o.apply(&base)?,
            Self::Live(r) => r.resolve(&base, state.config().completeness())?,
        };
        Ok(sample)
    }
}

/// One forecast day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    /// Calendar date, when a sowing date is known.
    pub date: Option<NaiveDate>,
    #[serde(flatten)]
    pub advice: DailyAdvice,
}

impl CalendarState {
    /// Advances the state through the next forecast horizon.
    ///
    /// Starts at [`next_day`](Self::next_day) and emits at most
    /// `forecast_horizon_days` records, never past the end of the cycle.
    /// Only the first day uses `today`; later days use default weather.
    /// A completed cycle yields an empty forecast.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Weather`] if `today` cannot be resolved.
    #[tracing::instrument(skip(self, today), fields(crop = self.crop().name, start = self.next_day()))]
    pub fn forecast(
        &mut self,
        today: &DayWeather,
        sowing: Option<NaiveDate>,
    ) -> Result<Vec<ForecastDay>, EngineError> {
        let days = forecast_days(
            self.next_day(),
            self.config().forecast_horizon_days(),
            self.total_days(),
        );
        if days.is_empty() {
            return Ok(Vec::new());
        }
        let first = today.resolve(self)?;
        let rest = WeatherSample::default();

        let mut out = Vec::with_capacity(days.len());
        for (i, day) in days.into_iter().enumerate() {
            let weather = if i == 0 { &first } else { &rest };
            let advice = self.daily_advice(day, weather)?;
            out.push(ForecastDay {
                date: sowing.and_then(|s| date_for_day(s, day)),
                advice,
            });
        }
        tracing::info!(days = out.len(), "forecast generated");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use agrocal_et0::{Completeness, Et0Error, WeatherField};

    #[test]
    fn default_horizon_is_31() {
        let mut s = CalendarState::create("Wheat", "loamy", 1.0).unwrap();
        let f = s.forecast(&DayWeather::Default, None).unwrap();
        assert_eq!(f.len(), 31);
        assert_eq!(f[0].advice.day, 1);
        assert_eq!(f[30].advice.day, 31);
        assert_eq!(s.next_day(), 32);
    }

    #[test]
    fn override_applies_to_first_day_only() {
        let mut s = CalendarState::create("Wheat", "loamy", 1.0).unwrap();
        let hot = DayWeather::Override(SensorOverride {
            temperature_c: Some(40.0),
            relative_humidity_pct: Some(20.0),
        });
        let f = s.forecast(&hot, None).unwrap();
        assert!(f[0].advice.et0_mm > f[1].advice.et0_mm);
        assert_eq!(f[1].advice.et0_mm, f[2].advice.et0_mm);
    }

    #[test]
    fn strict_live_reading_must_be_complete() {
        let mut s = CalendarState::create("Wheat", "loamy", 1.0).unwrap();
        let partial = DayWeather::Live(LiveReading::new().with_temperature(30.0));
        let err = s.forecast(&partial, None).unwrap_err();
        assert_eq!(
            err,
            EngineError::Weather(Et0Error::IncompleteWeather {
                field: WeatherField::RelativeHumidity
            })
        );
        assert_eq!(s.next_day(), 1);
    }

    #[test]
    fn completed_cycle_ignores_today_weather() {
        let mut s = CalendarState::create("Okra", "loamy", 1.0).unwrap();
        s.replay_until(56).unwrap();
        let partial = DayWeather::Live(LiveReading::new().with_temperature(30.0));
        assert!(s.forecast(&partial, None).unwrap().is_empty());
    }

    #[test]
    fn empty_override_is_default_weather() {
        let s = CalendarState::create("Wheat", "loamy", 1.0).unwrap();
        let sample = DayWeather::Override(SensorOverride::default())
            .resolve(&s)
            .unwrap();
        assert_eq!(sample, WeatherSample::default());
    }

    #[test]
    fn partial_live_reading_allowed_when_configured() {
        let config = EngineConfig::new().with_completeness(Completeness::AllowPartial);
        let mut s = CalendarState::resolve("Wheat", "loamy", 1.0, config).unwrap();
        let partial = DayWeather::Live(LiveReading::new().with_precipitation(0.0));
        let f = s.forecast(&partial, None).unwrap();
        assert_eq!(f[0].advice.rainfall_mm, 0.0);
        assert_eq!(f[1].advice.rainfall_mm, 1.0);
    }
}
