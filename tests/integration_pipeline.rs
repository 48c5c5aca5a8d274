//! End-to-end tests for the load → generate → merge → plot pipeline.

mod common;

use balance_sim::config::RunConfig;
use balance_sim::pipeline;
use balance_sim::signals::price::{OFF_PEAK_RATE, PEAK_RATE, STANDARD_RATE};

/// Builds a run configuration pointing at a freshly written full-day
/// dataset inside `dir`.
fn full_day_config(dir: &tempfile::TempDir, missing_every: usize) -> RunConfig {
    let data_path = dir.path().join("household_power_consumption.txt");
    common::write_full_day_dataset(&data_path, missing_every);

    let mut cfg = RunConfig::default();
    cfg.input.data_path = data_path;
    cfg.output.image_path = dir.path().join("simulation.png");
    cfg.output.width = 800;
    cfg.output.height = 450;
    cfg
}

#[test]
fn full_day_produces_one_row_per_minute() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = full_day_config(&dir, 0);

    let frame = pipeline::build_frame(&cfg).expect("pipeline should succeed");
    assert_eq!(frame.len(), 1440);
    assert_eq!(frame.demand_kw.len(), 1440);
    assert_eq!(frame.solar_kw.len(), 1440);
    assert_eq!(frame.price_per_kwh.len(), 1440);
    assert_eq!(frame.grid_event.len(), 1440);
}

#[test]
fn full_run_writes_a_non_empty_image() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = full_day_config(&dir, 0);

    let frame = pipeline::run(&cfg).expect("pipeline should succeed");
    assert_eq!(frame.len(), 1440);

    let meta = std::fs::metadata(&cfg.output.image_path).expect("image should exist");
    assert!(meta.len() > 0, "image should not be empty");
}

#[test]
fn identical_seeds_produce_identical_frames() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = full_day_config(&dir, 0);

    let a = pipeline::build_frame(&cfg).expect("first run should succeed");
    let b = pipeline::build_frame(&cfg).expect("second run should succeed");

    assert_eq!(a.index, b.index);
    assert_eq!(a.demand_kw, b.demand_kw);
    assert_eq!(a.solar_kw, b.solar_kw);
    assert_eq!(a.price_per_kwh, b.price_per_kwh);
    assert_eq!(a.grid_event, b.grid_event);
}

#[test]
fn different_seeds_change_only_the_random_columns() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = full_day_config(&dir, 0);

    let a = pipeline::build_frame(&cfg).expect("first run should succeed");
    cfg.simulation.seed = cfg.simulation.seed.wrapping_add(1);
    let b = pipeline::build_frame(&cfg).expect("second run should succeed");

    assert_eq!(a.demand_kw, b.demand_kw);
    assert_eq!(a.price_per_kwh, b.price_per_kwh);
    assert_ne!(a.solar_kw, b.solar_kw);
}

#[test]
fn demand_column_matches_source_data() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = full_day_config(&dir, 0);

    let frame = pipeline::build_frame(&cfg).expect("pipeline should succeed");
    for minute in [0_usize, 360, 720, 1439] {
        let expected = format!("{:.3}", common::demand_at(minute));
        let actual = format!("{:.3}", frame.demand_kw[minute]);
        assert_eq!(actual, expected, "demand mismatch at minute {minute}");
    }
}

#[test]
fn missing_readings_are_forward_filled() {
    let dir = tempfile::tempdir().expect("tempdir");
    // Every 10th minute is a `?` row; minute 0 fills from the previous day.
    let cfg = full_day_config(&dir, 10);

    let frame = pipeline::build_frame(&cfg).expect("pipeline should succeed");
    assert_eq!(frame.len(), 1440);

    let prev = format!("{:.3}", common::demand_at(1439));
    assert_eq!(format!("{:.3}", frame.demand_kw[0]), prev);
    assert_eq!(frame.demand_kw[10], frame.demand_kw[9]);
    assert_eq!(frame.demand_kw[20], frame.demand_kw[19]);
}

#[test]
fn solar_is_non_negative_and_dark_at_midnight() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = full_day_config(&dir, 0);

    let frame = pipeline::build_frame(&cfg).expect("pipeline should succeed");
    assert!(frame.solar_kw.iter().all(|v| *v >= 0.0));

    // Noise can leak small positives at night; the curve itself is zero.
    let midnight_max = frame.solar_kw[..60]
        .iter()
        .fold(0.0_f32, |m, v| m.max(*v));
    let noon_max = frame.solar_kw[710..730]
        .iter()
        .fold(0.0_f32, |m, v| m.max(*v));
    assert!(
        noon_max > midnight_max + 1.0,
        "noon ({noon_max}) should dominate midnight ({midnight_max})"
    );
}

#[test]
fn price_column_follows_the_tariff_buckets() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = full_day_config(&dir, 0);

    let frame = pipeline::build_frame(&cfg).expect("pipeline should succeed");
    assert_eq!(frame.price_per_kwh[0], OFF_PEAK_RATE);
    assert_eq!(frame.price_per_kwh[6 * 60 + 59], OFF_PEAK_RATE);
    assert_eq!(frame.price_per_kwh[7 * 60], STANDARD_RATE);
    assert_eq!(frame.price_per_kwh[16 * 60 + 59], STANDARD_RATE);
    assert_eq!(frame.price_per_kwh[17 * 60], PEAK_RATE);
    assert_eq!(frame.price_per_kwh[20 * 60 + 59], PEAK_RATE);
    assert_eq!(frame.price_per_kwh[21 * 60], OFF_PEAK_RATE);
}

#[test]
fn absent_day_fails_with_clear_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = full_day_config(&dir, 0);
    cfg.input.day = chrono::NaiveDate::from_ymd_opt(2010, 1, 1).expect("valid date");

    let err = pipeline::build_frame(&cfg);
    let msg = err.err().map(|e| e.to_string()).unwrap_or_default();
    assert!(msg.contains("2010-01-01"), "unexpected message: {msg}");
}
