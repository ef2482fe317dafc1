//! Per-day fertilizer advice.

use std::fmt;

use serde::Serialize;

use agrocal_reference::CropProfile;

use crate::decompose::{CarrierDose, decompose_dose};
use crate::error::FertilizerError;

/// Message shown on days without a scheduled application.
pub const NO_FERTILIZER_MESSAGE: &str = "No fertilizer scheduled for this day";

/// Fertilizer recommendation for a single cycle day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FertilizerAdvice {
    /// A schedule entry falls on this day.
    Scheduled {
        /// Schedule note, e.g. `"Basal Dose: Urea + DAP + MOP"`.
        note: &'static str,
        /// Area-scaled carrier weights, rounded to 2 decimals.
        carriers: CarrierDose,
    },
    /// Nothing is scheduled for this day.
    NoneScheduled,
}

impl FertilizerAdvice {
    /// Returns `true` if an application is scheduled.
    pub fn is_scheduled(&self) -> bool {
        matches!(self, Self::Scheduled { .. })
    }

    /// Carrier weights, if an application is scheduled.
    pub fn carriers(&self) -> Option<&CarrierDose> {
        match self {
            Self::Scheduled { carriers, .. } => Some(carriers),
            Self::NoneScheduled => None,
        }
    }
}

impl fmt::Display for FertilizerAdvice {
    /// Lists positive carriers as `"Urea: X kg | DAP: Y kg | MOP: Z kg"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self::Scheduled { carriers, .. } = self else {
            return f.write_str(NO_FERTILIZER_MESSAGE);
        };
        let parts: Vec<String> = [
            ("Urea", carriers.urea_kg),
            ("DAP", carriers.dap_kg),
            ("MOP", carriers.mop_kg),
        ]
        .into_iter()
        .filter(|(_, kg)| *kg > 0.0)
        .map(|(name, kg)| format!("{name}: {kg:?} kg"))
        .collect();

        if parts.is_empty() {
            f.write_str(NO_FERTILIZER_MESSAGE)
        } else {
            f.write_str(&parts.join(" | "))
        }
    }
}

/// Looks up the schedule entry for `day` and converts it into area-scaled
/// carrier weights.
///
/// # Errors
///
/// Returns [`FertilizerError::InvalidArea`] if `area_acres` is not a finite
/// positive number, or [`FertilizerError::InvalidDose`] if the schedule
/// entry is malformed.
pub fn advice_for_day(
    crop: &CropProfile,
    day: u32,
    area_acres: f64,
) -> Result<FertilizerAdvice, FertilizerError> {
    check_area(area_acres)?;
    let Some(dose) = crop.dose_on(day) else {
        return Ok(FertilizerAdvice::NoneScheduled);
    };
    let carriers = decompose_dose(
        dose.nitrogen_kg_per_acre,
        dose.phosphorus_kg_per_acre,
        dose.potassium_kg_per_acre,
    )?
    .scaled(area_acres)
    .rounded();
    tracing::debug!(crop = crop.name, day, note = dose.note, "fertilizer scheduled");
    Ok(FertilizerAdvice::Scheduled {
        note: dose.note,
        carriers,
    })
}

pub(crate) fn check_area(area_acres: f64) -> Result<(), FertilizerError> {
    if area_acres.is_finite() && area_acres > 0.0 {
        Ok(())
    } else {
        Err(FertilizerError::InvalidArea { area: area_acres })
    }
}
