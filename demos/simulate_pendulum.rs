use std::{error::Error, fs::File, path::PathBuf};

use clap::Parser;
use double_pendulum::{
    config::{SimulateOptions, SimulationProfile},
    types::Float,
    DoublePendulum,
};
use tracing::{info, level_filters::LevelFilter};

/// Simulate a double pendulum and write the recorded samples to a
/// whitespace-separated data file, one row per sample.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Mass of pendulum 1
    #[arg(long, default_value_t = 1.0)]
    m1: Float,
    /// Mass of pendulum 2
    #[arg(long, default_value_t = 1.0)]
    m2: Float,
    /// Length of pendulum 1
    #[arg(long, default_value_t = 1.0)]
    l1: Float,
    /// Length of pendulum 2
    #[arg(long, default_value_t = 1.0)]
    l2: Float,
    /// Initial angle of pendulum 1 from rest, in degrees
    #[arg(long, default_value_t = 90.0, allow_negative_numbers = true)]
    theta1: Float,
    /// Initial angle of pendulum 2 from rest, in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    theta2: Float,
    /// Number of integration steps
    #[arg(long, default_value_t = 10_000)]
    n_steps: usize,
    /// Step size and sampling cadence preset, overridden by --dt / --n-record
    #[arg(long, value_enum, default_value_t = SimulationProfile::Standard)]
    profile: SimulationProfile,
    /// Integration time step
    #[arg(long)]
    dt: Option<Float>,
    /// Record one sample every n_record steps
    #[arg(long)]
    n_record: Option<usize>,
    /// Write the 7-column layout without energies
    #[arg(long)]
    legacy: bool,
    #[arg(short, long, default_value = "double_pendulum.dat")]
    output: PathBuf,
    #[arg(short, long)]
    verbose: bool,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let mut options = SimulateOptions::from_profile(args.profile);
    if let Some(dt) = args.dt {
        options.dt = dt;
    }
    if let Some(n_record) = args.n_record {
        options.n_record = n_record;
    }

    let mut pendulum = DoublePendulum::new(
        args.m1,
        args.m2,
        args.l1,
        args.l2,
        args.theta1,
        args.theta2,
    )?;
    info!("{}", pendulum);

    pendulum.simulate_with(args.n_steps, &options)?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_writer(File::create(&args.output)?);
    if args.legacy {
        for sample in pendulum.legacy_data() {
            writer.serialize(sample)?;
        }
    } else {
        for sample in pendulum.data() {
            writer.serialize(sample)?;
        }
    }
    writer.flush()?;

    info!(
        "wrote {} samples to {}",
        pendulum.data().len(),
        args.output.display()
    );
    Ok(())
}
