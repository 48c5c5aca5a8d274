//! Time-of-use electricity price signal.

use chrono::{NaiveDateTime, Timelike};

/// Rate during the standard daytime window ($/kWh).
pub const STANDARD_RATE: f32 = 0.15;
/// Rate during the evening peak window ($/kWh).
pub const PEAK_RATE: f32 = 0.40;
/// Overnight off-peak rate ($/kWh).
pub const OFF_PEAK_RATE: f32 = 0.10;

/// First hour of the standard window (inclusive).
const STANDARD_START_HOUR: u32 = 7;
/// First hour of the peak window (inclusive).
const PEAK_START_HOUR: u32 = 17;
/// End of the peak window (exclusive).
const PEAK_END_HOUR: u32 = 21;

/// Flat-rate tariff selected by hour-of-day bucket.
///
/// Deterministic; hours `[7, 17)` take the standard rate, `[17, 21)` the
/// peak rate, everything else the off-peak rate.
#[derive(Debug, Clone, Copy)]
pub struct TimeOfUseTariff {
    /// Standard daytime rate ($/kWh).
    pub standard: f32,
    /// Evening peak rate ($/kWh).
    pub peak: f32,
    /// Overnight off-peak rate ($/kWh).
    pub off_peak: f32,
}

impl Default for TimeOfUseTariff {
    fn default() -> Self {
        Self {
            standard: STANDARD_RATE,
            peak: PEAK_RATE,
            off_peak: OFF_PEAK_RATE,
        }
    }
}

impl TimeOfUseTariff {
    /// Rate for a given hour of day.
    pub fn rate_at(&self, hour: u32) -> f32 {
        if (STANDARD_START_HOUR..PEAK_START_HOUR).contains(&hour) {
            self.standard
        } else if (PEAK_START_HOUR..PEAK_END_HOUR).contains(&hour) {
            self.peak
        } else {
            self.off_peak
        }
    }

    /// Generates one price value ($/kWh) per index timestamp.
    pub fn generate(&self, index: &[NaiveDateTime]) -> Vec<f32> {
        index.iter().map(|ts| self.rate_at(ts.hour())).collect()
    }
}
