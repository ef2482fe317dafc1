use std::collections::HashSet;

use agrocal_calendar::GrowthStage;
use agrocal_reference::{CROPS, CropProfile, FERTILIZER_COMPOSITION, ROOT_DEPTH, SOILS, SoilProfile};

#[test]
fn crop_table_has_every_crop() {
    assert_eq!(CROPS.len(), 28);
    let names: HashSet<_> = CROPS.iter().map(|c| c.name.to_ascii_lowercase()).collect();
    assert_eq!(names.len(), CROPS.len(), "crop names must be unique ignoring case");
}

#[test]
fn schedules_are_ordered_and_inside_cycle() {
    for crop in CROPS {
        assert!(!crop.npk_schedule.is_empty(), "{} has no schedule", crop.name);
        assert_eq!(crop.npk_schedule[0].day, 1, "{} lacks a basal dose", crop.name);
        assert!(
            crop.npk_schedule.windows(2).all(|w| w[0].day < w[1].day),
            "{} schedule not strictly increasing",
            crop.name
        );
        for d in crop.npk_schedule {
            assert!(d.day <= crop.total_days, "{} dose on day {}", crop.name, d.day);
            assert!(d.nitrogen_kg_per_acre >= 0.0);
            assert!(d.phosphorus_kg_per_acre >= 0.0);
            assert!(d.potassium_kg_per_acre >= 0.0);
        }
    }
}

#[test]
fn crop_coefficients_plausible() {
    for crop in CROPS {
        for stage in GrowthStage::ALL {
            let kc = crop.kc.for_stage(stage);
            assert!(kc > 0.0 && kc <= 1.5, "{} {stage} kc {kc}", crop.name);
        }
        assert!(crop.kc.mid >= crop.kc.initial, "{}", crop.name);
    }
}

#[test]
fn every_crop_resolves_by_lower_case_name() {
    for crop in CROPS {
        let lower = crop.name.to_lowercase();
        assert_eq!(CropProfile::resolve(&lower).unwrap().name, crop.name);
    }
}

#[test]
fn soils_resolve_and_hold_water() {
    assert_eq!(SOILS.len(), 9);
    for soil in SOILS {
        assert!(soil.available_water_fraction > 0.0 && soil.available_water_fraction < 1.0);
        assert_eq!(SoilProfile::resolve(&soil.name.to_uppercase()).unwrap(), soil);
    }
}

#[test]
fn root_depth_deepest_at_mid_stage() {
    assert!(ROOT_DEPTH.mid_m > ROOT_DEPTH.initial_m);
    assert!(ROOT_DEPTH.mid_m > ROOT_DEPTH.late_m);
}

#[test]
fn carriers_are_single_nutrient_dominant() {
    let c = FERTILIZER_COMPOSITION;
    assert_eq!(c.urea.nitrogen, 0.46);
    assert_eq!(c.dap.nitrogen, 0.18);
    assert_eq!(c.dap.phosphorus, 0.46);
    assert_eq!(c.mop.potassium, 0.60);
    assert_eq!(c.urea.phosphorus + c.urea.potassium, 0.0);
    assert_eq!(c.mop.nitrogen + c.mop.phosphorus, 0.0);
}
