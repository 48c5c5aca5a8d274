//! Renders the merged frame as a dual-axis time-series chart.

use std::error::Error;
use std::path::Path;

use chrono::NaiveDate;
use plotters::prelude::*;

use crate::frame::{SimulationFrame, hour_of_day};

/// Width of one event span on the hour axis (one minute).
const EVENT_SPAN_HOURS: f32 = 1.0 / 60.0;

/// Shade used for grid-event spans.
const EVENT_COLOR: RGBColor = RGBColor(128, 0, 128);

/// Line color for the demand series.
const DEMAND_COLOR: RGBColor = RGBColor(31, 119, 180);
/// Line color for the solar series.
const SOLAR_COLOR: RGBColor = RGBColor(44, 160, 44);
/// Line color for the price series on the secondary axis.
const PRICE_COLOR: RGBColor = RGBColor(214, 39, 40);

/// Draws the simulation chart and writes it to `path` as a PNG.
///
/// Demand and solar share the primary power axis; price goes on the
/// secondary axis. Every grid-event minute is shaded as a translucent
/// vertical span.
///
/// # Errors
///
/// Returns an error if the frame is empty or the drawing backend fails.
pub fn render_chart(
    frame: &SimulationFrame,
    day: NaiveDate,
    path: &Path,
    width: u32,
    height: u32,
) -> Result<(), Box<dyn Error>> {
    if frame.is_empty() {
        return Err("cannot render an empty simulation frame".into());
    }

    let hours: Vec<f32> = frame.index.iter().map(hour_of_day).collect();
    let power_max = frame
        .demand_kw
        .iter()
        .chain(frame.solar_kw.iter())
        .fold(0.0_f32, |m, v| m.max(*v))
        .max(1e-3);
    let price_max = frame
        .price_per_kwh
        .iter()
        .fold(0.0_f32, |m, v| m.max(*v))
        .max(1e-3);

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Project Balance: Simulation Environment for {day}"),
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .right_y_label_area_size(60)
        .build_cartesian_2d(0.0_f32..24.0_f32, 0.0_f32..power_max * 1.1)?
        .set_secondary_coord(0.0_f32..24.0_f32, 0.0_f32..price_max * 1.2);

    chart
        .configure_mesh()
        .x_desc("Time of Day (h)")
        .y_desc("Power (kW)")
        .x_labels(13)
        .draw()?;
    chart
        .configure_secondary_axes()
        .y_desc("Price ($/kWh)")
        .draw()?;

    // Event spans go first so the line series stay readable on top.
    for ts in frame.event_minutes() {
        let start = hour_of_day(&ts);
        chart.draw_series(std::iter::once(Rectangle::new(
            [(start, 0.0), (start + EVENT_SPAN_HOURS, power_max * 1.1)],
            EVENT_COLOR.mix(0.3).filled(),
        )))?;
    }

    let demand_line = hours.iter().copied().zip(frame.demand_kw.iter().copied());
    chart
        .draw_series(LineSeries::new(demand_line, &DEMAND_COLOR))?
        .label("Home Demand")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], DEMAND_COLOR));

    let solar_line = hours.iter().copied().zip(frame.solar_kw.iter().copied());
    chart
        .draw_series(LineSeries::new(solar_line, &SOLAR_COLOR))?
        .label("Solar Generation")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], SOLAR_COLOR));

    let price_line = hours
        .iter()
        .copied()
        .zip(frame.price_per_kwh.iter().copied());
    chart
        .draw_secondary_series(LineSeries::new(price_line, &PRICE_COLOR))?
        .label("Grid Price")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], PRICE_COLOR));

    if frame.event_count() > 0 {
        chart
            .draw_series(std::iter::empty::<Rectangle<(f32, f32)>>())?
            .label("Grid Event")
            .legend(|(x, y)| {
                Rectangle::new([(x, y - 5), (x + 20, y + 5)], EVENT_COLOR.mix(0.3).filled())
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
