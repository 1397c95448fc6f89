use std::{error::Error, path::Path};

use itertools::{Itertools, MinMaxResult};
use plotters::prelude::*;

use crate::{sample::RecordedSample, types::Float};

/// Range covering every value, padded so a flat series still gets a visible axis.
fn axis_range(values: impl Iterator<Item = Float>) -> std::ops::Range<Float> {
    let (min, max) = match values.minmax() {
        MinMaxResult::NoElements => (-1.0, 1.0),
        MinMaxResult::OneElement(v) => (v, v),
        MinMaxResult::MinMax(min, max) => (min, max),
    };
    let pad = ((max - min) * 0.05).max(1e-6);
    (min - pad)..(max + pad)
}

/// Plot kinetic, potential and total energy against time.
pub fn plot_energy(samples: &[RecordedSample], path: &Path) -> Result<(), Box<dyn Error>> {
    let final_time = samples.last().map(|s| s.time).unwrap_or(1.0).max(1e-6);
    let y_range = axis_range(
        samples
            .iter()
            .flat_map(|s| [s.kinetic_energy, s.potential_energy, s.total_energy()]),
    );

    // Create a plotting area
    let root = BitMapBackend::new(path, (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    // Configure the chart
    let mut chart = ChartBuilder::on(&root)
        .caption("Energy vs. Time plot", ("sans-serif", 20))
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..final_time, y_range)?;

    chart.configure_mesh().x_desc("time").y_desc("energy").draw()?;

    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.time, s.kinetic_energy)),
            &BLUE,
        ))?
        .label("kinetic")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.time, s.potential_energy)),
            &RED,
        ))?
        .label("potential")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));
    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.time, s.total_energy())),
            &BLACK,
        ))?
        .label("total")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLACK));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Plot the paths traced by both bobs in the plane.
pub fn plot_trajectory(samples: &[RecordedSample], path: &Path) -> Result<(), Box<dyn Error>> {
    let x_range = axis_range(samples.iter().flat_map(|s| [s.x1, s.x2, 0.]));
    let y_range = axis_range(samples.iter().flat_map(|s| [s.y1, s.y2, 0.]));

    let root = BitMapBackend::new(path, (640, 640)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Bob trajectories", ("sans-serif", 20))
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(x_range, y_range)?;

    chart.configure_mesh().x_desc("x").y_desc("y").draw()?;

    chart.draw_series(LineSeries::new(samples.iter().map(|s| (s.x1, s.y1)), &BLUE))?;
    chart.draw_series(LineSeries::new(samples.iter().map(|s| (s.x2, s.y2)), &RED))?;

    root.present()?;
    Ok(())
}
