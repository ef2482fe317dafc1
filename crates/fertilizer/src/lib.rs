//! Conversion of crop nutrient schedules into carrier fertilizer weights.
//!
//! ```text
//! NutrientDose (N, P, K per acre)
//!        |
//!        v
//!   decompose_dose ── MOP  = K / 0.60
//!        |          ── DAP  = P / 0.46
//!        |          ── Urea = max(0, N - 0.18 * DAP) / 0.46
//!        v
//!   CarrierDose ── scaled(area) ── rounded()
//!        |
//!        +──> FertilizerAdvice   (one day)
//!        +──> PlannedApplication (whole season)
//! ```
//!
//! # Quick start
//!
//! ```
//! use agrocal_fertilizer::advice_for_day;
//! use agrocal_reference::CropProfile;
//!
//! let wheat = CropProfile::find("Wheat").unwrap();
//! let advice = advice_for_day(wheat, 1, 2.0).unwrap();
//! assert_eq!(advice.to_string(), "Urea: 83.18 kg | DAP: 65.22 kg | MOP: 33.33 kg");
//! ```

mod advice;
mod decompose;
mod error;
mod plan;

pub use advice::{FertilizerAdvice, NO_FERTILIZER_MESSAGE, advice_for_day};
pub use decompose::{CarrierDose, decompose_dose, decompose_with};
pub use error::FertilizerError;
pub use plan::{PlannedApplication, season_plan};
