//! Assumed effective root depth per growth stage.

use serde::Serialize;

use agrocal_calendar::GrowthStage;

/// Root depth (m) assumed for each growth stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RootDepthTable {
    /// Depth during establishment (m).
    pub initial_m: f64,
    /// Depth at full canopy (m).
    pub mid_m: f64,
    /// Depth during maturation (m).
    pub late_m: f64,
}

impl RootDepthTable {
    /// Returns the depth (m) for `stage`.
    pub fn for_stage(&self, stage: GrowthStage) -> f64 {
        match stage {
            GrowthStage::Initial => self.initial_m,
            GrowthStage::Mid => self.mid_m,
            GrowthStage::Late => self.late_m,
        }
    }
}

/// Root depths used for every crop.
pub const ROOT_DEPTH: RootDepthTable = RootDepthTable {
    initial_m: 0.2,
    mid_m: 0.6,
    late_m: 0.5,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depths_by_stage() {
        assert_eq!(ROOT_DEPTH.for_stage(GrowthStage::Initial), 0.2);
        assert_eq!(ROOT_DEPTH.for_stage(GrowthStage::Mid), 0.6);
        assert_eq!(ROOT_DEPTH.for_stage(GrowthStage::Late), 0.5);
    }
}
