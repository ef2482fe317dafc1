use agrocal_calendar::{GrowthStage, StageBoundaries};

/// Cycle lengths found in the crop table plus small edge cases.
const CYCLE_LENGTHS: &[u32] = &[
    1, 2, 4, 5, 9, 10, 55, 70, 80, 90, 100, 105, 110, 120, 130, 135, 140, 165, 195, 220, 365,
    400,
];

#[test]
fn every_day_maps_to_exactly_one_stage() {
    for &total in CYCLE_LENGTHS {
        let b = StageBoundaries::new(total).unwrap();
        let mut counts = [0u32; 3];
        for day in 1..=total {
            let stage = b.stage_for_day(day).unwrap();
            counts[stage.as_index()] += 1;
        }
        assert_eq!(counts.iter().sum::<u32>(), total, "total {total}");
        assert_eq!(counts[0], b.initial_duration(), "total {total}");
        assert_eq!(counts[1], b.mid_duration(), "total {total}");
        assert_eq!(counts[2], b.late_duration(), "total {total}");
    }
}

#[test]
fn stages_are_monotonic() {
    for &total in CYCLE_LENGTHS {
        let b = StageBoundaries::new(total).unwrap();
        let stages: Vec<GrowthStage> = (1..=total).map(|d| b.stage_for_day(d).unwrap()).collect();
        assert!(
            stages.windows(2).all(|w| w[0] <= w[1]),
            "stage sequence regresses for total {total}"
        );
    }
}

#[test]
fn edge_stages_are_a_fifth_of_the_cycle() {
    for &total in CYCLE_LENGTHS {
        let b = StageBoundaries::new(total).unwrap();
        assert_eq!(b.initial_duration(), total / 5, "total {total}");
        assert_eq!(b.late_duration(), total / 5, "total {total}");
    }
}
