//! Nutrient-to-carrier decomposition.
//!
//! Potash and phosphate carriers are applied first because each supplies a
//! single dominant nutrient. The nitrogen that DAP brings along is credited
//! against the nitrogen demand, and urea tops up the remainder.

use serde::Serialize;

use agrocal_reference::{FERTILIZER_COMPOSITION, FertilizerComposition, NutrientTotals};

use crate::error::FertilizerError;

/// Carrier fertilizer weights (kg) delivering a nutrient dose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CarrierDose {
    /// Urea (kg).
    pub urea_kg: f64,
    /// Diammonium phosphate (kg).
    pub dap_kg: f64,
    /// Muriate of potash (kg).
    pub mop_kg: f64,
    /// Nitrogen delivered by DAP beyond the requested nitrogen (kg).
    pub nitrogen_surplus_kg: f64,
}

impl CarrierDose {
    /// Scales every weight by `area_acres`.
    pub fn scaled(&self, area_acres: f64) -> Self {
        Self {
            urea_kg: self.urea_kg * area_acres,
            dap_kg: self.dap_kg * area_acres,
            mop_kg: self.mop_kg * area_acres,
            nitrogen_surplus_kg: self.nitrogen_surplus_kg * area_acres,
        }
    }

    /// Rounds every weight to 2 decimal places for display.
    pub fn rounded(&self) -> Self {
        Self {
            urea_kg: round2(self.urea_kg),
            dap_kg: round2(self.dap_kg),
            mop_kg: round2(self.mop_kg),
            nitrogen_surplus_kg: round2(self.nitrogen_surplus_kg),
        }
    }

    /// Returns `true` if no carrier is applied.
    pub fn is_empty(&self) -> bool {
        self.urea_kg <= 0.0 && self.dap_kg <= 0.0 && self.mop_kg <= 0.0
    }

    /// Reconstructs the N, P and K these weights deliver under `composition`.
    pub fn delivered(&self, composition: &FertilizerComposition) -> NutrientTotals {
        let c = composition;
        let n = self.urea_kg * c.urea.nitrogen
            + self.dap_kg * c.dap.nitrogen
            + self.mop_kg * c.mop.nitrogen;
        let p = self.urea_kg * c.urea.phosphorus
            + self.dap_kg * c.dap.phosphorus
            + self.mop_kg * c.mop.phosphorus;
        let k = self.urea_kg * c.urea.potassium
            + self.dap_kg * c.dap.potassium
            + self.mop_kg * c.mop.potassium;
        NutrientTotals {
            nitrogen_kg_per_acre: n,
            phosphorus_kg_per_acre: p,
            potassium_kg_per_acre: k,
        }
    }
}

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Decomposes an N/P/K dose (kg) into carrier weights using the standard
/// composition.
///
/// # Errors
///
/// Returns [`FertilizerError::InvalidDose`] if any amount is negative or
/// non-finite.
pub fn decompose_dose(
    nitrogen_kg: f64,
    phosphorus_kg: f64,
    potassium_kg: f64,
) -> Result<CarrierDose, FertilizerError> {
    decompose_with(
        &FERTILIZER_COMPOSITION,
        nitrogen_kg,
        phosphorus_kg,
        potassium_kg,
    )
}

/// Decomposes an N/P/K dose (kg) into carrier weights under `composition`.
///
/// ```text
/// mop  = K / K_mop
/// dap  = P / P_dap
/// urea = max(0, N - dap * N_dap) / N_urea
/// ```
///
/// A zero fraction in any denominator yields 0 kg of that carrier.
///
/// # Errors
///
/// Returns [`FertilizerError::InvalidDose`] if any amount is negative or
/// non-finite.
pub fn decompose_with(
    composition: &FertilizerComposition,
    nitrogen_kg: f64,
    phosphorus_kg: f64,
    potassium_kg: f64,
) -> Result<CarrierDose, FertilizerError> {
    for (nutrient, value) in [
        ("nitrogen", nitrogen_kg),
        ("phosphorus", phosphorus_kg),
        ("potassium", potassium_kg),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(FertilizerError::InvalidDose { nutrient, value });
        }
    }

    let mop_kg = safe_div(potassium_kg, composition.mop.potassium);
    let dap_kg = safe_div(phosphorus_kg, composition.dap.phosphorus);
    let n_from_dap = dap_kg * composition.dap.nitrogen;
    let urea_kg = safe_div((nitrogen_kg - n_from_dap).max(0.0), composition.urea.nitrogen);

    Ok(CarrierDose {
        urea_kg,
        dap_kg,
        mop_kg,
        nitrogen_surplus_kg: (n_from_dap - nitrogen_kg).max(0.0),
    })
}

fn safe_div(amount: f64, fraction: f64) -> f64 {
    if fraction > 0.0 { amount / fraction } else { 0.0 }
}
