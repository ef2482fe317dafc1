use std::io::Write;

use chrono::NaiveDate;
use tempfile::NamedTempFile;

use agrocal::engine::{AdvisoryRequest, SensorSeeding, run_advisory};
use agrocal::et0::Completeness;
use agrocal::{load_config, load_engine_config};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn empty_file_uses_defaults() {
    let file = write_config("");
    let cfg = load_engine_config(file.path()).unwrap();
    assert_eq!(cfg.irrigation_efficiency(), 0.75);
    assert_eq!(cfg.forecast_horizon_days(), 31);
    assert_eq!(cfg.sensor_seeding(), SensorSeeding::SkipReplay);
    assert_eq!(cfg.completeness(), Completeness::Strict);
}

#[test]
fn engine_table_overrides() {
    let file = write_config(
        r#"
[engine]
irrigation_efficiency = 0.9
forecast_horizon_days = 7
sensor_seeding = "replay_history"
weather_completeness = "allow_partial"
"#,
    );
    let cfg = load_engine_config(file.path()).unwrap();
    assert_eq!(cfg.irrigation_efficiency(), 0.9);
    assert_eq!(cfg.forecast_horizon_days(), 7);
    assert_eq!(cfg.sensor_seeding(), SensorSeeding::ReplayHistory);
    assert_eq!(cfg.completeness(), Completeness::AllowPartial);
    assert_eq!(cfg.management_allowed_depletion(), 0.5);
}

#[test]
fn unknown_keys_rejected() {
    let file = write_config("[engine]\nefficiency = 0.9\n");
    let err = load_config(file.path()).unwrap_err();
    assert_eq!(err.to_string(), "failed to parse TOML config");
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().starts_with("failed to read config file:"));
}

#[test]
fn bad_policy_name_rejected() {
    let file = write_config("[engine]\nsensor_seeding = \"always\"\n");
    assert!(load_engine_config(file.path()).is_err());
}

#[test]
fn configured_horizon_limits_forecast() {
    let file = write_config("[engine]\nforecast_horizon_days = 5\n");
    let cfg = load_engine_config(file.path()).unwrap();
    let sowing = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 11, 4).unwrap();
    let report =
        run_advisory(&AdvisoryRequest::new("Maize", "alluvial", 1.5, sowing, today).with_config(cfg))
            .unwrap();
    assert_eq!(report.forecast().len(), 5);
}
