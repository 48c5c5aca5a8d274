//! Shared fixtures for integration tests: synthetic UCI-style datasets.

use std::fs;
use std::path::Path;

/// Column header matching the UCI household power consumption layout.
const UCI_HEADER: &str = "Date;Time;Global_active_power;Global_reactive_power;Voltage;\
                          Global_intensity;Sub_metering_1;Sub_metering_2;Sub_metering_3";

/// Writes a UCI-style dataset covering one full day (1440 per-minute rows)
/// preceded by a few rows from the previous day, so forward-fill has a
/// prior reading to draw on.
///
/// Demand follows a smooth deterministic daily pattern; minutes where
/// `minute % missing_every == 0` are written as `?` when `missing_every`
/// is non-zero.
pub fn write_full_day_dataset(path: &Path, missing_every: usize) {
    let mut out = String::from(UCI_HEADER);
    out.push('\n');

    // Tail of the previous day
    for minute in 1438..1440 {
        out.push_str(&row("31/5/2008", minute, demand_at(minute)));
    }

    // The simulated day
    for minute in 0..1440 {
        if missing_every != 0 && minute % missing_every == 0 {
            out.push_str(&missing_row("1/6/2008", minute));
        } else {
            out.push_str(&row("1/6/2008", minute, demand_at(minute)));
        }
    }

    fs::write(path, out).expect("test dataset should be writable");
}

/// Deterministic demand value (kW) for a minute of the day.
pub fn demand_at(minute: usize) -> f32 {
    let hour = minute as f32 / 60.0;
    1.0 + 0.8 * ((hour - 6.0) * std::f32::consts::PI / 12.0).sin().abs()
}

fn row(date: &str, minute: usize, power: f32) -> String {
    format!(
        "{date};{:02}:{:02}:00;{power:.3};0.100;240.00;1.0;0.0;0.0;0.0\n",
        minute / 60,
        minute % 60
    )
}

fn missing_row(date: &str, minute: usize) -> String {
    format!(
        "{date};{:02}:{:02}:00;?;?;?;?;?;?;?\n",
        minute / 60,
        minute % 60
    )
}
