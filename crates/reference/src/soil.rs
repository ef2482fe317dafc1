//! Soil water-holding properties.

use serde::Serialize;

use crate::error::ReferenceError;

/// Water-holding property of one soil class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SoilProfile {
    /// Soil class name (lower case), also the lookup key.
    pub name: &'static str,
    /// Usable water retained per unit depth of soil column (m³/m³).
    pub available_water_fraction: f64,
}

impl SoilProfile {
    /// Looks up a soil class by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::UnknownSoil`] if no class has that name.
    pub fn find(name: &str) -> Result<&'static SoilProfile, ReferenceError> {
        SOILS
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| ReferenceError::UnknownSoil {
                name: name.to_string(),
            })
    }

    /// Looks up a soil class ignoring ASCII case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::UnknownSoil`] if nothing matches.
    pub fn resolve(name: &str) -> Result<&'static SoilProfile, ReferenceError> {
        let wanted = name.trim();
        SOILS
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ReferenceError::UnknownSoil {
                name: name.to_string(),
            })
    }

    /// Total available water (mm) held by a root zone `root_depth_m` deep.
    pub fn taw_mm(&self, root_depth_m: f64) -> f64 {
        self.available_water_fraction * 1000.0 * root_depth_m
    }
}

/// Every soil class known to the engine.
#[rustfmt::skip]
pub static SOILS: &[SoilProfile] = &[
    SoilProfile { name: "alluvial", available_water_fraction: 0.19 },
    SoilProfile { name: "clayey", available_water_fraction: 0.18 },
    SoilProfile { name: "loamy", available_water_fraction: 0.16 },
    SoilProfile { name: "sandy", available_water_fraction: 0.07 },
    SoilProfile { name: "black", available_water_fraction: 0.20 },
    SoilProfile { name: "red and yellow", available_water_fraction: 0.13 },
    SoilProfile { name: "laterite", available_water_fraction: 0.09 },
    SoilProfile { name: "arid", available_water_fraction: 0.09 },
    SoilProfile { name: "forest", available_water_fraction: 0.17 },
];
