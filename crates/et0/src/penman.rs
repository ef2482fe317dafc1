//! FAO-56 Penman-Monteith reference evapotranspiration (daily, simplified).
//!
//! Net radiation is approximated by the incoming solar radiation converted
//! with the 0.408 factor, and ground heat flux is taken as zero.

use crate::weather::WeatherSample;

/// Site elevation (m) assumed for the atmospheric pressure term.
pub const REFERENCE_ELEVATION_M: f64 = 100.0;

/// Atmospheric pressure (kPa) at `elevation_m` (FAO-56 eq. 7).
pub fn atmospheric_pressure_kpa(elevation_m: f64) -> f64 {
    101.3 * ((293.0 - 0.0065 * elevation_m) / 293.0).powf(5.26)
}

/// Psychrometric constant (kPa/°C) for pressure `p_kpa` (FAO-56 eq. 8).
pub fn psychrometric_constant(p_kpa: f64) -> f64 {
    0.000665 * p_kpa
}

/// Saturation vapour pressure (kPa) at temperature `t_c` (FAO-56 eq. 11).
pub fn saturation_vapour_pressure(t_c: f64) -> f64 {
    0.6108 * (17.27 * t_c / (t_c + 237.3)).exp()
}

/// Slope of the saturation vapour pressure curve (kPa/°C) at `t_c` (FAO-56 eq. 13).
pub fn vapour_pressure_slope(t_c: f64) -> f64 {
    4098.0 * saturation_vapour_pressure(t_c) / (t_c + 237.3).powi(2)
}

/// Computes daily reference evapotranspiration ET0 (mm/day).
///
/// ```text
/// ET0 = [0.408 Δ (Rn - G) + γ (900 / (T + 273)) u2 (es - ea)]
///       / [Δ + γ (1 + 0.34 u2)]
/// ```
///
/// The result is clamped to be non-negative; a zero denominator yields 0.
pub fn reference_et0(weather: &WeatherSample) -> f64 {
    let t = weather.temperature_c();
    let u2 = weather.wind_speed_m_s();
    let rn = weather.solar_radiation() * 0.408;
    let g = 0.0;

    let p = atmospheric_pressure_kpa(REFERENCE_ELEVATION_M);
    let gamma = psychrometric_constant(p);
    let delta = vapour_pressure_slope(t);
    let es = saturation_vapour_pressure(t);
    let ea = weather.relative_humidity_pct() / 100.0 * es;

    let numerator = 0.408 * delta * (rn - g) + gamma * (900.0 / (t + 273.0)) * u2 * (es - ea);
    let denominator = delta + gamma * (1.0 + 0.34 * u2);
    if denominator == 0.0 {
        return 0.0;
    }
    (numerator / denominator).max(0.0)
}
