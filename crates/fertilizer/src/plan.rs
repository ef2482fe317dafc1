//! Whole-season fertilizer plan.

use chrono::NaiveDate;
use serde::Serialize;

use agrocal_calendar::date_for_day;
use agrocal_reference::CropProfile;

use crate::advice::check_area;
use crate::decompose::{CarrierDose, decompose_dose};
use crate::error::FertilizerError;

/// One scheduled application in a season plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedApplication {
    /// Cycle day (1 = sowing day).
    pub day: u32,
    /// Calendar date, when a sowing date is known.
    pub date: Option<NaiveDate>,
    /// Schedule note.
    pub note: &'static str,
    /// Area-scaled carrier weights, rounded to 2 decimals.
    pub carriers: CarrierDose,
}

/// Builds the application list for a whole season.
///
/// Entries follow the crop's schedule order. When `sowing` is given each
/// entry carries its date (`sowing + day - 1`).
///
/// # Errors
///
/// Returns [`FertilizerError::InvalidArea`] for a non-positive area, or
/// [`FertilizerError::InvalidDose`] for a malformed schedule entry.
pub fn season_plan(
    crop: &CropProfile,
    area_acres: f64,
    sowing: Option<NaiveDate>,
) -> Result<Vec<PlannedApplication>, FertilizerError> {
    check_area(area_acres)?;
    crop.npk_schedule
        .iter()
        .map(|dose| -> Result<PlannedApplication, FertilizerError> {
            let carriers = decompose_dose(
                dose.nitrogen_kg_per_acre,
                dose.phosphorus_kg_per_acre,
                dose.potassium_kg_per_acre,
            )?
            .scaled(area_acres)
            .rounded();
            Ok(PlannedApplication {
                day: dose.day,
                date: sowing.and_then(|s| date_for_day(s, dose.day)),
                note: dose.note,
                carriers,
            })
        })
        .collect()
}
