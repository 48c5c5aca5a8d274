//! Single-day household energy simulation dataset builder.
//!
//! Combines real per-minute household demand readings with generated solar,
//! time-of-use price, and grid-event signals, merges them on a shared
//! timestamp index, and renders the result as a dual-axis chart.

pub mod config;
pub mod demand;
pub mod frame;
pub mod pipeline;
pub mod plot;
pub mod signals;
