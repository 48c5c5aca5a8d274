//! Loads real per-minute household demand readings from the UCI dataset.
//!
//! The source file is semicolon-separated with `Date` (day-first `d/m/Y`),
//! `Time` (`H:M:S`), and `Global_active_power` columns, one reading per
//! minute, with `?` marking missing values.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Column index of the `Date` field in the UCI layout.
const DATE_COL: usize = 0;
/// Column index of the `Time` field in the UCI layout.
const TIME_COL: usize = 1;
/// Column index of the `Global_active_power` field in the UCI layout.
const POWER_COL: usize = 2;

/// Missing-value marker used by the dataset.
const NA_MARKER: &str = "?";

/// Timestamped household demand for one calendar day, in kilowatts.
#[derive(Debug, Clone)]
pub struct DemandSeries {
    /// Per-minute timestamps, ascending.
    pub index: Vec<NaiveDateTime>,
    /// Measured household power draw (kW), forward-filled where missing.
    pub demand_kw: Vec<f32>,
}

/// Error raised while loading or parsing the demand dataset.
#[derive(Debug)]
pub enum DataError {
    /// The input file does not exist.
    MissingFile(PathBuf),
    /// Underlying I/O failure.
    Io(io::Error),
    /// CSV-level read failure.
    Csv(csv::Error),
    /// A field failed to parse; carries the 1-based line number.
    Parse { line: u64, message: String },
    /// A `?` reading appeared before any valid value, so there is nothing
    /// to forward-fill from.
    MissingValue { line: u64 },
    /// The requested day has no rows in the dataset.
    DayNotFound(NaiveDate),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::MissingFile(path) => write!(
                f,
                "demand data file \"{}\" not found — download and unzip the UCI \
                 household power consumption archive into that location",
                path.display()
            ),
            DataError::Io(e) => write!(f, "demand data I/O error: {e}"),
            DataError::Csv(e) => write!(f, "demand data CSV error: {e}"),
            DataError::Parse { line, message } => {
                write!(f, "demand data parse error at line {line}: {message}")
            }
            DataError::MissingValue { line } => write!(
                f,
                "demand data missing value at line {line} with no prior reading to fill from"
            ),
            DataError::DayNotFound(day) => {
                write!(f, "no demand readings found for day {day}")
            }
        }
    }
}

impl std::error::Error for DataError {}

impl From<io::Error> for DataError {
    fn from(e: io::Error) -> Self {
        DataError::Io(e)
    }
}

impl From<csv::Error> for DataError {
    fn from(e: csv::Error) -> Self {
        DataError::Csv(e)
    }
}

/// Loads the demand series for one calendar day from the dataset at `path`.
///
/// # Errors
///
/// Returns `DataError::MissingFile` if the file does not exist, and the
/// corresponding `DataError` variant for I/O, parse, or slicing failures.
pub fn load_demand_day(path: &Path, day: NaiveDate) -> Result<DemandSeries, DataError> {
    if !path.exists() {
        return Err(DataError::MissingFile(path.to_path_buf()));
    }
    let file = File::open(path)?;
    read_demand_day(BufReader::new(file), day)
}

/// Reads the demand series for one calendar day from any reader.
///
/// Streams the whole file up to the end of the requested day, maintaining
/// the forward-fill state across earlier days so the first rows of the
/// sliced day fill correctly.
///
/// # Errors
///
/// Returns a `DataError` on malformed rows or if the day is absent.
pub fn read_demand_day(reader: impl Read, day: NaiveDate) -> Result<DemandSeries, DataError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_reader(reader);

    let mut index = Vec::new();
    let mut demand_kw = Vec::new();
    let mut last_valid: Option<f32> = None;
    let mut seen_day = false;

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());

        let date_str = field(&record, DATE_COL, line)?;
        let date = NaiveDate::parse_from_str(date_str, "%d/%m/%Y").map_err(|e| {
            DataError::Parse {
                line,
                message: format!("bad date \"{date_str}\": {e}"),
            }
        })?;

        // Rows are chronological; once past the requested day, stop reading.
        if seen_day && date != day {
            break;
        }

        let power_str = field(&record, POWER_COL, line)?;
        let value = if power_str == NA_MARKER {
            last_valid
        } else {
            let v: f32 = power_str.parse().map_err(|e| DataError::Parse {
                line,
                message: format!("bad power value \"{power_str}\": {e}"),
            })?;
            last_valid = Some(v);
            Some(v)
        };

        if date != day {
            continue;
        }
        seen_day = true;

        let time_str = field(&record, TIME_COL, line)?;
        let time = NaiveTime::parse_from_str(time_str, "%H:%M:%S").map_err(|e| {
            DataError::Parse {
                line,
                message: format!("bad time \"{time_str}\": {e}"),
            }
        })?;

        let Some(kw) = value else {
            return Err(DataError::MissingValue { line });
        };
        index.push(NaiveDateTime::new(date, time));
        demand_kw.push(kw);
    }

    if index.is_empty() {
        return Err(DataError::DayNotFound(day));
    }
    Ok(DemandSeries { index, demand_kw })
}

fn field<'r>(record: &'r csv::StringRecord, col: usize, line: u64) -> Result<&'r str, DataError> {
    record.get(col).ok_or_else(|| DataError::Parse {
        line,
        message: format!("missing column {col}"),
    })
}
