//! Immutable agronomic reference data for the crop calendar engine.
//!
//! All tables are `static` and read-only:
//!
//! | Table | Contents |
//! |-------|----------|
//! | [`CROPS`] | Cycle length, stage Kc, irrigation policy and nutrient schedule per crop |
//! | [`SOILS`] | Available-water fraction per soil class |
//! | [`ROOT_DEPTH`] | Assumed root depth per growth stage |
//! | [`FERTILIZER_COMPOSITION`] | N/P/K fractions of urea, DAP and MOP |
//!
//! ```
//! use agrocal_reference::{CropProfile, SoilProfile};
//!
//! let wheat = CropProfile::resolve("wheat").unwrap();
//! let loamy = SoilProfile::resolve("loamy").unwrap();
//! assert_eq!(wheat.total_days, 130);
//! assert!((loamy.taw_mm(0.2) - 32.0).abs() < 1e-9);
//! ```

mod composition;
mod crop;
mod error;
mod root_depth;
mod soil;

pub use composition::{CarrierComposition, FERTILIZER_COMPOSITION, FertilizerComposition};
pub use crop::{
    CROPS, CropCoefficients, CropProfile, IrrigationPolicy, NutrientDose, NutrientTotals,
};
pub use error::ReferenceError;
pub use root_depth::{ROOT_DEPTH, RootDepthTable};
pub use soil::{SOILS, SoilProfile};

/// Litres of water in a 1 mm layer over one acre.
pub const LITERS_PER_MM_PER_ACRE: f64 = 4046.86;
