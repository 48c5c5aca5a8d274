//! The linear batch pipeline: load → generate → merge → plot.

use std::fmt;

use crate::config::RunConfig;
use crate::demand::{self, DataError};
use crate::frame::{FrameError, SimulationFrame};
use crate::plot;
use crate::signals::{GridEvents, SolarProfile, TimeOfUseTariff};

/// Seed offset for the grid-event RNG to avoid correlation with the solar
/// generator.
const GRID_SEED_OFFSET: u64 = 19;

/// Error from any stage of the pipeline.
#[derive(Debug)]
pub enum PipelineError {
    /// Demand loading or parsing failed.
    Data(DataError),
    /// Column alignment failed during the merge.
    Frame(FrameError),
    /// The chart renderer failed.
    Render(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Data(e) => write!(f, "{e}"),
            PipelineError::Frame(e) => write!(f, "{e}"),
            PipelineError::Render(msg) => write!(f, "chart render error: {msg}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<DataError> for PipelineError {
    fn from(e: DataError) -> Self {
        PipelineError::Data(e)
    }
}

impl From<FrameError> for PipelineError {
    fn from(e: FrameError) -> Self {
        PipelineError::Frame(e)
    }
}

/// Builds the merged simulation frame without rendering.
///
/// Loads the demand day, generates the solar, price, and grid-event columns
/// on the demand index, and merges everything.
///
/// # Errors
///
/// Returns a `PipelineError` if loading or merging fails.
pub fn build_frame(cfg: &RunConfig) -> Result<SimulationFrame, PipelineError> {
    println!("Loading and preparing home energy demand data...");
    let demand = demand::load_demand_day(&cfg.input.data_path, cfg.input.day)?;

    let seed = cfg.simulation.seed;

    println!("Generating simulated solar panel data...");
    let solar_kw = SolarProfile::with_defaults(seed).generate(&demand.index);

    println!("Generating simulated electricity price data...");
    let price_per_kwh = TimeOfUseTariff::default().generate(&demand.index);

    println!("Generating simulated grid stability signals...");
    let grid_event =
        GridEvents::with_defaults(seed.wrapping_add(GRID_SEED_OFFSET)).generate(&demand.index);

    println!("Merging all data sources into a single simulation frame...");
    let frame = SimulationFrame::merge(demand, solar_kw, price_per_kwh, grid_event)?;
    Ok(frame)
}

/// Runs the full pipeline: build the frame, render the chart, return the frame.
///
/// # Errors
///
/// Returns a `PipelineError` if any stage fails.
pub fn run(cfg: &RunConfig) -> Result<SimulationFrame, PipelineError> {
    let frame = build_frame(cfg)?;

    println!("Generating simulation environment plot...");
    plot::render_chart(
        &frame,
        cfg.input.day,
        &cfg.output.image_path,
        cfg.output.width,
        cfg.output.height,
    )
    .map_err(|e| PipelineError::Render(e.to_string()))?;
    println!("Plot saved as \"{}\"", cfg.output.image_path.display());

    Ok(frame)
}
