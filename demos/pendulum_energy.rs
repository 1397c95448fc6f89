use std::{error::Error, path::Path};

use double_pendulum::{
    plot::{plot_energy, plot_trajectory},
    DoublePendulum,
};
use tracing::{info, level_filters::LevelFilter};

/// Plot the kinetic and potential energy of a double pendulum during a
/// chaotic swing, along with the paths of both bobs.
pub fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::INFO)
        .init();

    let mut pendulum = DoublePendulum::new(1.0, 1.0, 1.0, 1.0, 120.0, -30.0)?;

    let final_time = 20.0;
    let dt = 0.001;
    let n_steps = (final_time / dt) as usize;
    pendulum.simulate(n_steps, dt, 10)?;

    let data = pendulum.data();
    let e0 = data[0].total_energy();
    let drift = data
        .iter()
        .map(|s| (s.total_energy() - e0).abs())
        .fold(0., f64::max);
    info!("{}: max energy drift {:.3e} J", pendulum, drift);

    plot_energy(data, Path::new("energy.png"))?;
    plot_trajectory(data, Path::new("trajectory.png"))?;
    Ok(())
}
