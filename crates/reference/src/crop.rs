//! Crop agronomic profiles.
//!
//! The table is static data: profiles are looked up by name and never
//! mutated at runtime.

use serde::Serialize;

use agrocal_calendar::{CalendarError, GrowthStage, StageBoundaries};

use crate::error::ReferenceError;

/// Per-stage crop coefficient (Kc) converting ET0 into crop demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CropCoefficients {
    /// Kc during establishment.
    pub initial: f64,
    /// Kc at full canopy.
    pub mid: f64,
    /// Kc during maturation.
    pub late: f64,
}

impl CropCoefficients {
    /// Returns the coefficient for `stage`.
    pub fn for_stage(&self, stage: GrowthStage) -> f64 {
        match stage {
            GrowthStage::Initial => self.initial,
            GrowthStage::Mid => self.mid,
            GrowthStage::Late => self.late,
        }
    }
}

/// How the crop's irrigation need is triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationPolicy {
    /// Refill to field capacity once depletion passes the readily available water.
    ThresholdRefill,
    /// Keep standing water: refill plus a flood depth once depletion passes a small trigger.
    FloodMaintenance,
}

/// One scheduled nutrient application, per acre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientDose {
    /// Cycle day of the application (1 = sowing day).
    pub day: u32,
    /// Elemental nitrogen (kg/acre).
    pub nitrogen_kg_per_acre: f64,
    /// Elemental phosphorus as P (kg/acre).
    pub phosphorus_kg_per_acre: f64,
    /// Elemental potassium as K (kg/acre).
    pub potassium_kg_per_acre: f64,
    /// Agronomic note describing the split.
    pub note: &'static str,
}

const fn dose(day: u32, n: f64, p: f64, k: f64, note: &'static str) -> NutrientDose {
    NutrientDose {
        day,
        nitrogen_kg_per_acre: n,
        phosphorus_kg_per_acre: p,
        potassium_kg_per_acre: k,
        note,
    }
}

/// Seasonal N/P/K totals (kg/acre).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutrientTotals {
    /// Nitrogen (kg/acre).
    pub nitrogen_kg_per_acre: f64,
    /// Phosphorus (kg/acre).
    pub phosphorus_kg_per_acre: f64,
    /// Potassium (kg/acre).
    pub potassium_kg_per_acre: f64,
}

/// Agronomic parameters of one crop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CropProfile {
    /// Display name, also the lookup key.
    pub name: &'static str,
    /// Length of the cycle from sowing to harvest (days).
    pub total_days: u32,
    /// Stage crop coefficients.
    pub kc: CropCoefficients,
    /// Irrigation trigger policy.
    pub irrigation_policy: IrrigationPolicy,
    /// Nominal interval between waterings under typical conditions (days).
    pub watering_interval_days: u32,
    /// Daily sunlight requirement.
    pub sunlight: &'static str,
    /// Nutrient applications ordered by day.
    pub npk_schedule: &'static [NutrientDose],
}

impl CropProfile {
    /// Looks up a crop by its exact display name.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::UnknownCrop`] if no profile has that name.
    pub fn find(name: &str) -> Result<&'static CropProfile, ReferenceError> {
        CROPS
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| ReferenceError::UnknownCrop {
                name: name.to_string(),
            })
    }

    /// Looks up a crop ignoring ASCII case and surrounding whitespace.
    ///
    /// `" wheat"` and `"PADDY (RICE)"` both resolve.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::UnknownCrop`] if nothing matches.
    pub fn resolve(name: &str) -> Result<&'static CropProfile, ReferenceError> {
        let wanted = name.trim();
        CROPS
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ReferenceError::UnknownCrop {
                name: name.to_string(),
            })
    }

    /// Returns the stage boundaries of this crop's cycle.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidCycleLength`] for a zero-length cycle.
    pub fn stage_boundaries(&self) -> Result<StageBoundaries, CalendarError> {
        StageBoundaries::new(self.total_days)
    }

    /// Returns the dose scheduled on `day`, if any.
    pub fn dose_on(&self, day: u32) -> Option<&'static NutrientDose> {
        self.npk_schedule.iter().find(|d| d.day == day)
    }

    /// Sums the schedule into seasonal totals.
    pub fn seasonal_totals(&self) -> NutrientTotals {
        self.npk_schedule
            .iter()
            .fold(NutrientTotals::default(), |acc, d| NutrientTotals {
                nitrogen_kg_per_acre: acc.nitrogen_kg_per_acre + d.nitrogen_kg_per_acre,
                phosphorus_kg_per_acre: acc.phosphorus_kg_per_acre + d.phosphorus_kg_per_acre,
                potassium_kg_per_acre: acc.potassium_kg_per_acre + d.potassium_kg_per_acre,
            })
    }

    /// Returns `true` if the crop is grown under standing water.
    pub fn is_flooded(&self) -> bool {
        self.irrigation_policy == IrrigationPolicy::FloodMaintenance
    }
}

/// Every crop known to the engine.
#[rustfmt::skip]
pub static CROPS: &[CropProfile] = &[
    CropProfile {
        name: "Wheat",
        total_days: 130,
        kc: CropCoefficients { initial: 0.35, mid: 1.15, late: 0.4 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 15,
        sunlight: "6+ hours",
        npk_schedule: &[
            dose(1, 25.0, 15.0, 10.0, "Basal Dose: Urea + DAP + MOP"),
            dose(20, 20.0, 0.0, 0.0, "Mid: Crown Root Initiation / Tillering (Only Nitrogen)"),
            dose(45, 15.0, 0.0, 0.0, "Last: Before Heading / Booting (Boost tillers)"),
        ],
    },
    CropProfile {
        name: "Paddy (Rice)",
        total_days: 140,
        kc: CropCoefficients { initial: 1.05, mid: 1.2, late: 0.95 },
        irrigation_policy: IrrigationPolicy::FloodMaintenance,
        watering_interval_days: 2,
        sunlight: "6-8 hours",
        npk_schedule: &[
            dose(1, 20.0, 10.0, 15.0, "Basal Dose: Transplanting (DAP + MOP)"),
            dose(30, 18.0, 0.0, 5.0, "Mid: Tillering (Nitrogen booster)"),
            dose(45, 12.0, 0.0, 5.0, "Last: Panicle Initiation (Grain formation support)"),
        ],
    },
    CropProfile {
        name: "Maize",
        total_days: 105,
        kc: CropCoefficients { initial: 0.35, mid: 1.2, late: 0.6 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 6,
        sunlight: "6-8 hours",
        npk_schedule: &[
            dose(1, 20.0, 10.0, 10.0, "Basal Dose: Sowing (Starter fertilizer)"),
            dose(25, 30.0, 0.0, 5.0, "Mid: Knee-high / Vegetative (Rapid growth)"),
            dose(45, 20.0, 0.0, 5.0, "Last: Before Tasseling (Cob filling support)"),
        ],
    },
    CropProfile {
        name: "Banana",
        total_days: 400,
        kc: CropCoefficients { initial: 0.5, mid: 1.1, late: 0.9 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 2,
        sunlight: "6-8 hours",
        npk_schedule: &[
            dose(1, 48.6, 60.7, 182.1, "Basal Dose (Generic)"),
            dose(161, 36.4, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(241, 36.4, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Brinjal",
        total_days: 135,
        kc: CropCoefficients { initial: 0.6, mid: 1.1, late: 0.9 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 2,
        sunlight: "6+ hours",
        npk_schedule: &[
            dose(1, 19.4, 24.3, 28.3, "Basal Dose (Generic)"),
            dose(54, 14.6, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(81, 14.6, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Cabbage",
        total_days: 105,
        kc: CropCoefficients { initial: 0.7, mid: 1.05, late: 0.95 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 2,
        sunlight: "6-8 hours",
        npk_schedule: &[
            dose(1, 16.2, 20.2, 20.2, "Basal Dose (Generic)"),
            dose(42, 12.1, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(63, 12.1, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Cauliflower",
        total_days: 105,
        kc: CropCoefficients { initial: 0.7, mid: 1.05, late: 0.95 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 2,
        sunlight: "6+ hours",
        npk_schedule: &[
            dose(1, 16.2, 20.2, 20.2, "Basal Dose (Generic)"),
            dose(42, 12.1, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(63, 12.1, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Cucumber",
        total_days: 70,
        kc: CropCoefficients { initial: 0.6, mid: 1.0, late: 0.75 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 1,
        sunlight: "6-8 hours",
        npk_schedule: &[
            dose(1, 16.2, 20.2, 32.4, "Basal Dose (Generic)"),
            dose(28, 12.1, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(42, 12.1, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Garlic",
        total_days: 195,
        kc: CropCoefficients { initial: 0.7, mid: 1.05, late: 0.8 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 3,
        sunlight: "6-8 hours",
        npk_schedule: &[
            dose(1, 16.2, 20.2, 20.2, "Basal Dose (Generic)"),
            dose(78, 12.1, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(117, 12.1, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Ginger",
        total_days: 220,
        kc: CropCoefficients { initial: 0.75, mid: 1.1, late: 0.8 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 3,
        sunlight: "3-5 hours",
        npk_schedule: &[
            dose(1, 24.3, 30.4, 40.5, "Basal Dose (Generic)"),
            dose(88, 18.2, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(132, 18.2, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Green Chilli",
        total_days: 135,
        kc: CropCoefficients { initial: 0.6, mid: 1.05, late: 0.9 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 2,
        sunlight: "6+ hours",
        npk_schedule: &[
            dose(1, 19.4, 24.3, 28.3, "Basal Dose (Generic)"),
            dose(54, 14.6, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(81, 14.6, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Okra",
        total_days: 55,
        kc: CropCoefficients { initial: 0.6, mid: 1.1, late: 0.9 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 2,
        sunlight: "6-8 hours",
        npk_schedule: &[
            dose(1, 16.2, 20.2, 20.2, "Basal Dose (Generic)"),
            dose(22, 12.1, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(33, 12.1, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Onion",
        total_days: 135,
        kc: CropCoefficients { initial: 0.7, mid: 1.05, late: 0.8 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 3,
        sunlight: "6+ hours",
        npk_schedule: &[
            dose(1, 16.2, 20.2, 40.5, "Basal Dose (Generic)"),
            dose(54, 14.6, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(81, 14.6, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Peas",
        total_days: 80,
        kc: CropCoefficients { initial: 0.5, mid: 1.15, late: 1.05 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 6,
        sunlight: "6+ hours",
        npk_schedule: &[
            dose(1, 3.2, 24.3, 12.1, "Basal Dose (Generic)"),
            dose(32, 2.4, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(48, 2.4, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Potato",
        total_days: 100,
        kc: CropCoefficients { initial: 0.5, mid: 1.15, late: 0.75 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 4,
        sunlight: "6+ hours",
        npk_schedule: &[
            dose(1, 17.8, 22.3, 34.4, "Basal Dose (Generic)"),
            dose(40, 13.4, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(60, 13.4, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Tomato",
        total_days: 120,
        kc: CropCoefficients { initial: 0.6, mid: 1.15, late: 0.85 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 2,
        sunlight: "6-8 hours",
        npk_schedule: &[
            dose(1, 24.3, 32.4, 32.4, "Basal Dose (Generic)"),
            dose(48, 18.2, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(72, 18.2, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Watermelon",
        total_days: 80,
        kc: CropCoefficients { initial: 0.4, mid: 1.0, late: 0.75 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 4,
        sunlight: "8+ hours",
        npk_schedule: &[
            dose(1, 13.0, 24.3, 48.6, "Basal Dose (Generic)"),
            dose(32, 9.7, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(48, 9.7, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Bajra",
        total_days: 80,
        kc: CropCoefficients { initial: 0.3, mid: 1.05, late: 0.55 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 7,
        sunlight: "6-8 hours",
        npk_schedule: &[
            dose(1, 13.0, 16.2, 12.1, "Basal Dose (Generic)"),
            dose(32, 9.7, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(48, 9.7, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Cotton",
        total_days: 165,
        kc: CropCoefficients { initial: 0.35, mid: 1.2, late: 0.6 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 7,
        sunlight: "8-10 hours",
        npk_schedule: &[
            dose(1, 16.2, 20.2, 28.3, "Basal Dose (Generic)"),
            dose(66, 12.1, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(99, 12.1, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Guava",
        total_days: 365,
        kc: CropCoefficients { initial: 0.5, mid: 0.8, late: 0.65 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 7,
        sunlight: "6-8 hours",
        npk_schedule: &[
            dose(1, 24.3, 20.2, 40.5, "Basal Dose (Generic)"),
            dose(146, 18.2, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(219, 18.2, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Jowar",
        total_days: 110,
        kc: CropCoefficients { initial: 0.3, mid: 1.05, late: 0.55 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 7,
        sunlight: "6+ hours",
        npk_schedule: &[
            dose(1, 16.2, 20.2, 16.2, "Basal Dose (Generic)"),
            dose(44, 12.1, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(66, 12.1, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Lemon",
        total_days: 365,
        kc: CropCoefficients { initial: 0.6, mid: 0.75, late: 0.65 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 7,
        sunlight: "6-8 hours",
        npk_schedule: &[
            dose(1, 16.2, 16.2, 32.4, "Basal Dose (Generic)"),
            dose(146, 12.1, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(219, 12.1, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Mango",
        total_days: 365,
        kc: CropCoefficients { initial: 0.55, mid: 0.85, late: 0.7 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 7,
        sunlight: "6+ hours",
        npk_schedule: &[
            dose(1, 16.2, 16.2, 32.4, "Basal Dose (Generic)"),
            dose(146, 12.1, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(219, 12.1, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Mustard",
        total_days: 120,
        kc: CropCoefficients { initial: 0.35, mid: 1.1, late: 0.35 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 15,
        sunlight: "6+ hours",
        npk_schedule: &[
            dose(1, 13.0, 16.2, 16.2, "Basal Dose (Generic)"),
            dose(48, 9.7, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(72, 9.7, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Orange",
        total_days: 365,
        kc: CropCoefficients { initial: 0.6, mid: 0.75, late: 0.65 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 10,
        sunlight: "6-8 hours",
        npk_schedule: &[
            dose(1, 16.2, 16.2, 32.4, "Basal Dose (Generic)"),
            dose(146, 12.1, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(219, 12.1, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Soyabean",
        total_days: 100,
        kc: CropCoefficients { initial: 0.4, mid: 1.15, late: 0.5 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 10,
        sunlight: "6+ hours",
        npk_schedule: &[
            dose(1, 3.2, 24.3, 16.2, "Basal Dose (Generic)"),
            dose(40, 2.4, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(60, 2.4, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Sugarcane",
        total_days: 365,
        kc: CropCoefficients { initial: 0.4, mid: 1.25, late: 0.75 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 7,
        sunlight: "8-10 hours",
        npk_schedule: &[
            dose(1, 40.5, 32.4, 48.6, "Basal Dose (Generic)"),
            dose(146, 30.4, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(219, 30.4, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
    CropProfile {
        name: "Sunflower",
        total_days: 90,
        kc: CropCoefficients { initial: 0.35, mid: 1.15, late: 0.45 },
        irrigation_policy: IrrigationPolicy::ThresholdRefill,
        watering_interval_days: 10,
        sunlight: "6-8 hours",
        npk_schedule: &[
            dose(1, 13.0, 16.2, 16.2, "Basal Dose (Generic)"),
            dose(36, 9.7, 0.0, 0.0, "Top Dressing 1 (Generic)"),
            dose(54, 9.7, 0.0, 0.0, "Top Dressing 2 (Generic)"),
        ],
    },
];
