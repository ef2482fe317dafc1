//! Daily weather samples, live readings and today-only sensor overrides.

use std::fmt;

use serde::Serialize;

use crate::error::Et0Error;

/// Identifies one field of a daily weather sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherField {
    /// Mean air temperature (°C).
    Temperature,
    /// Mean relative humidity (%).
    RelativeHumidity,
    /// Wind speed at 2 m (m/s).
    WindSpeed,
    /// Incoming solar radiation.
    SolarRadiation,
    /// Daily precipitation (mm).
    Precipitation,
}

impl WeatherField {
    /// All fields in the order they are checked.
    pub const ALL: [WeatherField; 5] = [
        Self::Temperature,
        Self::RelativeHumidity,
        Self::WindSpeed,
        Self::SolarRadiation,
        Self::Precipitation,
    ];
}

impl fmt::Display for WeatherField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Temperature => "temperature",
            Self::RelativeHumidity => "relative humidity",
            Self::WindSpeed => "wind speed",
            Self::SolarRadiation => "solar radiation",
            Self::Precipitation => "precipitation",
        };
        f.write_str(name)
    }
}

/// One day of weather driving the water balance.
///
/// Solar radiation is expressed in the units the ET0 formula converts with
/// the 0.408 factor (MJ/m²/day equivalent).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeatherSample {
    temperature_c: f64,
    relative_humidity_pct: f64,
    wind_speed_m_s: f64,
    solar_radiation: f64,
    precipitation_mm: f64,
}

impl WeatherSample {
    /// Default temperature (°C) for days without a live reading.
    pub const DEFAULT_TEMPERATURE_C: f64 = 25.0;
    /// Default relative humidity (%).
    pub const DEFAULT_RELATIVE_HUMIDITY_PCT: f64 = 60.0;
    /// Default wind speed (m/s).
    pub const DEFAULT_WIND_SPEED_M_S: f64 = 2.0;
    /// Default solar radiation.
    pub const DEFAULT_SOLAR_RADIATION: f64 = 20.0;
    /// Default precipitation (mm).
    pub const DEFAULT_PRECIPITATION_MM: f64 = 1.0;

    /// Creates a validated weather sample.
    ///
    /// # Errors
    ///
    /// Returns [`Et0Error::InvalidWeather`] if any value is non-finite,
    /// temperature is outside -50..=60 °C, humidity is outside 0..=100 %,
    /// or wind, radiation or precipitation is negative.
    pub fn new(
        temperature_c: f64,
        relative_humidity_pct: f64,
        wind_speed_m_s: f64,
        solar_radiation: f64,
        precipitation_mm: f64,
    ) -> Result<Self, Et0Error> {
        let sample = Self {
            temperature_c,
            relative_humidity_pct,
            wind_speed_m_s,
            solar_radiation,
            precipitation_mm,
        };
        sample.validate()?;
        Ok(sample)
    }

    /// Returns a copy with the temperature replaced.
    ///
    /// # Errors
    ///
    /// Returns [`Et0Error::InvalidWeather`] if the new value is out of range.
    pub fn with_temperature(mut self, temperature_c: f64) -> Result<Self, Et0Error> {
        self.temperature_c = temperature_c;
        self.validate()?;
        Ok(self)
    }

    /// Returns a copy with the relative humidity replaced.
    ///
    /// # Errors
    ///
    /// Returns [`Et0Error::InvalidWeather`] if the new value is out of range.
    pub fn with_relative_humidity(mut self, relative_humidity_pct: f64) -> Result<Self, Et0Error> {
        self.relative_humidity_pct = relative_humidity_pct;
        self.validate()?;
        Ok(self)
    }

    /// Returns a copy with the precipitation replaced.
    ///
    /// # Errors
    ///
    /// Returns [`Et0Error::InvalidWeather`] if the new value is negative or non-finite.
    pub fn with_precipitation(mut self, precipitation_mm: f64) -> Result<Self, Et0Error> {
        self.precipitation_mm = precipitation_mm;
        self.validate()?;
        Ok(self)
    }

    /// Mean air temperature (°C).
    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    /// Mean relative humidity (%).
    pub fn relative_humidity_pct(&self) -> f64 {
        self.relative_humidity_pct
    }

    /// Wind speed (m/s).
    pub fn wind_speed_m_s(&self) -> f64 {
        self.wind_speed_m_s
    }

    /// Solar radiation.
    pub fn solar_radiation(&self) -> f64 {
        self.solar_radiation
    }

    /// Daily precipitation (mm).
    pub fn precipitation_mm(&self) -> f64 {
        self.precipitation_mm
    }

    fn value(&self, field: WeatherField) -> f64 {
        match field {
            WeatherField::Temperature => self.temperature_c,
            WeatherField::RelativeHumidity => self.relative_humidity_pct,
            WeatherField::WindSpeed => self.wind_speed_m_s,
            WeatherField::SolarRadiation => self.solar_radiation,
            WeatherField::Precipitation => self.precipitation_mm,
        }
    }

    fn validate(&self) -> Result<(), Et0Error> {
        for field in WeatherField::ALL {
            check_field(field, self.value(field))?;
        }
        Ok(())
    }
}

impl Default for WeatherSample {
    fn default() -> Self {
        Self {
            temperature_c: Self::DEFAULT_TEMPERATURE_C,
            relative_humidity_pct: Self::DEFAULT_RELATIVE_HUMIDITY_PCT,
            wind_speed_m_s: Self::DEFAULT_WIND_SPEED_M_S,
            solar_radiation: Self::DEFAULT_SOLAR_RADIATION,
            precipitation_mm: Self::DEFAULT_PRECIPITATION_MM,
        }
    }
}

fn check_field(field: WeatherField, value: f64) -> Result<(), Et0Error> {
    let invalid = |reason| Et0Error::InvalidWeather {
        field,
        value,
        reason,
    };
    if !value.is_finite() {
        return Err(invalid("must be finite"));
    }
    match field {
        WeatherField::Temperature if !(-50.0..=60.0).contains(&value) => {
            Err(invalid("must be within -50..=60 °C"))
        }
        WeatherField::RelativeHumidity if !(0.0..=100.0).contains(&value) => {
            Err(invalid("must be within 0..=100 %"))
        }
        WeatherField::WindSpeed | WeatherField::SolarRadiation | WeatherField::Precipitation
            if value < 0.0 =>
        {
            Err(invalid("must be non-negative"))
        }
        _ => Ok(()),
    }
}

/// How a [`LiveReading`] with missing fields is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Completeness {
    /// Every field must be present; a gap is an error.
    #[default]
    Strict,
    /// Missing fields fall back to the base sample.
    AllowPartial,
}

/// A weather reading from a live source where any field may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LiveReading {
    temperature_c: Option<f64>,
    relative_humidity_pct: Option<f64>,
    wind_speed_m_s: Option<f64>,
    solar_radiation: Option<f64>,
    precipitation_mm: Option<f64>,
}

impl LiveReading {
    /// Creates an empty reading.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the temperature (°C).
    pub fn with_temperature(mut self, value: f64) -> Self {
        self.temperature_c = Some(value);
        self
    }

    /// Sets the relative humidity (%).
    pub fn with_relative_humidity(mut self, value: f64) -> Self {
        self.relative_humidity_pct = Some(value);
        self
    }

    /// Sets the wind speed (m/s).
    pub fn with_wind_speed(mut self, value: f64) -> Self {
        self.wind_speed_m_s = Some(value);
        self
    }

    /// Sets the solar radiation.
    pub fn with_solar_radiation(mut self, value: f64) -> Self {
        self.solar_radiation = Some(value);
        self
    }

    /// Sets the precipitation (mm).
    pub fn with_precipitation(mut self, value: f64) -> Self {
        self.precipitation_mm = Some(value);
        self
    }

    fn get(&self, field: WeatherField) -> Option<f64> {
        match field {
            WeatherField::Temperature => self.temperature_c,
            WeatherField::RelativeHumidity => self.relative_humidity_pct,
            WeatherField::WindSpeed => self.wind_speed_m_s,
            WeatherField::SolarRadiation => self.solar_radiation,
            WeatherField::Precipitation => self.precipitation_mm,
        }
    }

    /// Resolves this reading into a full sample.
    ///
    /// Under [`Completeness::Strict`] the first missing field is reported.
    /// Under [`Completeness::AllowPartial`] missing fields are taken from `base`.
    ///
    /// # Errors
    ///
    /// Returns [`Et0Error::IncompleteWeather`] for a gap in strict mode, or
    /// [`Et0Error::InvalidWeather`] if a supplied value is out of range.
    pub fn resolve(
        &self,
        base: &WeatherSample,
        completeness: Completeness,
    ) -> Result<WeatherSample, Et0Error> {
        let mut values = [0.0; 5];
        for (slot, field) in values.iter_mut().zip(WeatherField::ALL) {
            *slot = match (self.get(field), completeness) {
                (Some(v), _) => v,
                (None, Completeness::AllowPartial) => base.value(field),
                (None, Completeness::Strict) => {
                    return Err(Et0Error::IncompleteWeather { field });
                }
            };
        }
        let [t, rh, ws, rs, p] = values;
        WeatherSample::new(t, rh, ws, rs, p)
    }
}

/// A today-only override of temperature and humidity from a field sensor.
///
/// Unlike [`LiveReading`], an override is partial by construction: fields
/// left unset keep the base sample's value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SensorOverride {
    /// Measured air temperature (°C), if available.
    pub temperature_c: Option<f64>,
    /// Measured relative humidity (%), if available.
    pub relative_humidity_pct: Option<f64>,
}

impl SensorOverride {
    /// Applies the override on top of `base`.
    ///
    /// # Errors
    ///
    /// Returns [`Et0Error::InvalidWeather`] if an overriding value is out of range.
    pub fn apply(&self, base: &WeatherSample) -> Result<WeatherSample, Et0Error> {
        let mut sample = *base;
        if let Some(t) = self.temperature_c {
            sample = sample.with_temperature(t)?;
        }
        if let Some(rh) = self.relative_humidity_pct {
            sample = sample.with_relative_humidity(rh)?;
        }
        Ok(sample)
    }

    /// Returns `true` if neither field is set.
    pub fn is_empty(&self) -> bool {
        self.temperature_c.is_none() && self.relative_humidity_pct.is_none()
    }
}
