//! The merged simulation frame: four data columns on a shared time index.

use std::fmt;

use chrono::{NaiveDateTime, Timelike};

use crate::demand::DemandSeries;

/// Column length mismatch detected while merging onto the shared index.
#[derive(Debug)]
pub struct FrameError {
    /// Name of the offending column.
    pub column: &'static str,
    /// Index length the column was expected to match.
    pub expected: usize,
    /// Actual column length.
    pub actual: usize,
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frame merge error: column \"{}\" has {} values but the index has {}",
            self.column, self.actual, self.expected
        )
    }
}

impl std::error::Error for FrameError {}

/// One simulated day as a time-indexed table.
///
/// All columns share the timestamp index taken from the demand data; a full
/// day has one row per minute (1440 rows).
#[derive(Debug, Clone)]
pub struct SimulationFrame {
    /// Per-minute timestamps, ascending.
    pub index: Vec<NaiveDateTime>,
    /// Measured household demand (kW).
    pub demand_kw: Vec<f32>,
    /// Synthetic solar generation (kW).
    pub solar_kw: Vec<f32>,
    /// Time-of-use electricity price ($/kWh).
    pub price_per_kwh: Vec<f32>,
    /// Whether a grid demand-response event fired this minute.
    pub grid_event: Vec<bool>,
}

impl SimulationFrame {
    /// Merges the demand series and the three generated columns.
    ///
    /// The generators are driven by the demand index, so every column must
    /// already be aligned; a length mismatch indicates an upstream bug.
    ///
    /// # Errors
    ///
    /// Returns a `FrameError` naming the first misaligned column.
    pub fn merge(
        demand: DemandSeries,
        solar_kw: Vec<f32>,
        price_per_kwh: Vec<f32>,
        grid_event: Vec<bool>,
    ) -> Result<Self, FrameError> {
        let expected = demand.index.len();
        check_len("demand_kw", demand.demand_kw.len(), expected)?;
        check_len("solar_kw", solar_kw.len(), expected)?;
        check_len("price_per_kwh", price_per_kwh.len(), expected)?;
        check_len("grid_event", grid_event.len(), expected)?;

        Ok(Self {
            index: demand.index,
            demand_kw: demand.demand_kw,
            solar_kw,
            price_per_kwh,
            grid_event,
        })
    }

    /// Number of rows in the frame.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the frame has no rows.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Timestamps of the minutes where a grid event fired.
    pub fn event_minutes(&self) -> Vec<NaiveDateTime> {
        self.index
            .iter()
            .zip(self.grid_event.iter())
            .filter_map(|(ts, &fired)| fired.then_some(*ts))
            .collect()
    }

    /// Total number of grid events in the frame.
    pub fn event_count(&self) -> usize {
        self.grid_event.iter().filter(|&&e| e).count()
    }
}

fn check_len(column: &'static str, actual: usize, expected: usize) -> Result<(), FrameError> {
    if actual == expected {
        Ok(())
    } else {
        Err(FrameError {
            column,
            expected,
            actual,
        })
    }
}

/// Fractional hour of day for a timestamp (e.g., 14:30 → 14.5).
pub fn hour_of_day(ts: &NaiveDateTime) -> f32 {
    ts.hour() as f32 + ts.minute() as f32 / 60.0
}
