//! Crop calendar engine: day-by-day soil water balance with irrigation and
//! fertilizer advice.
//!
//! One [`CalendarState`] tracks one crop cycle on one field. Its only
//! evolving quantity is the soil-moisture depletion, advanced one day at a
//! time by [`CalendarState::daily_advice`].
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │ WeatherSample │────▶│ daily_advice   │────▶│   DailyAdvice    │
//!  │  ET0 x Kc     │     │ (depletion,    │     │ (irrigation mm,  │
//!  └──────────────┘     │  irrigation)   │     │  litres, NPK)    │
//!                       └────────────────┘     └──────────────────┘
//!                               ▲
//!        seed_from_moisture ────┤
//!        replay_until ──────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use agrocal_engine::{CalendarState, IrrigationDecision};
//! use agrocal_et0::WeatherSample;
//!
//! let mut state = CalendarState::create("Wheat", "loamy", 1.0).unwrap();
//! let weather = WeatherSample::new(25.0, 60.0, 2.0, 20.0, 0.0).unwrap();
//! let advice = state.daily_advice(1, &weather).unwrap();
//!
//! assert_eq!(advice.decision, IrrigationDecision::NotNeeded);
//! assert!((state.depletion_mm() - 1.325).abs() < 0.01);
//! ```
//!
//! For a full advisory from a sowing date see [`run_advisory`].

pub mod advice;
pub mod config;
pub mod error;
pub mod forecast;
pub mod run;
mod seed;
pub mod state;

pub use advice::{DailyAdvice, IrrigationDecision};
pub use config::{EngineConfig, SensorSeeding};
pub use error::EngineError;
pub use forecast::{DayWeather, ForecastDay};
pub use run::{AdvisoryReport, AdvisoryRequest, CycleStatus, run_advisory};
pub use state::{CalendarState, StageParams};
