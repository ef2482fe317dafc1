//! Nutrient composition of carrier fertilizers.

use serde::Serialize;

/// Fraction by weight of N, P and K supplied by one carrier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CarrierComposition {
    /// Nitrogen fraction.
    pub nitrogen: f64,
    /// Phosphorus fraction.
    pub phosphorus: f64,
    /// Potassium fraction.
    pub potassium: f64,
}

/// Composition of the three carriers used for dose decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FertilizerComposition {
    /// Urea.
    pub urea: CarrierComposition,
    /// Diammonium phosphate (DAP).
    pub dap: CarrierComposition,
    /// Muriate of potash (MOP).
    pub mop: CarrierComposition,
}

/// Standard carrier composition: urea 46% N, DAP 18% N / 46% P, MOP 60% K.
pub const FERTILIZER_COMPOSITION: FertilizerComposition = FertilizerComposition {
    urea: CarrierComposition {
        nitrogen: 0.46,
        phosphorus: 0.0,
        potassium: 0.0,
    },
    dap: CarrierComposition {
        nitrogen: 0.18,
        phosphorus: 0.46,
        potassium: 0.0,
    },
    mop: CarrierComposition {
        nitrogen: 0.0,
        phosphorus: 0.0,
        potassium: 0.60,
    },
};

impl Default for FertilizerComposition {
    fn default() -> Self {
        FERTILIZER_COMPOSITION
    }
}
