use agrocal_calendar::{StageBoundaries, date_for_day, day_number, forecast_days};
use chrono::NaiveDate;

#[test]
fn forecast_never_passes_cycle_end() {
    for total in [55, 105, 130, 365] {
        for start in 1..=total + 5 {
            let days = forecast_days(start, 31, total);
            assert!(days.iter().all(|&d| d <= total));
            assert!(days.len() <= 31);
            if start <= total {
                assert_eq!(days[0], start);
            }
        }
    }
}

#[test]
fn forecast_days_classify_cleanly() {
    let b = StageBoundaries::new(105).unwrap();
    for day in forecast_days(90, 31, 105) {
        assert!(b.stage_for_day(day).is_ok());
    }
}

#[test]
fn dates_align_with_day_numbers() {
    let sowing = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
    let today = NaiveDate::from_ymd_opt(2025, 7, 20).unwrap();
    let current = day_number(sowing, today).unwrap();
    assert_eq!(current, 31);
    assert_eq!(date_for_day(sowing, current), Some(today));
}
