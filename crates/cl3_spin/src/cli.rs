use std::io::Write;
use std::num::NonZeroUsize;

use cl3::Float;
use eyre::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::cloud::{self, Spinner};
use crate::output::{self, OutputFormat};

/// Spin a random point cloud around an axis using geometric algebra rotors
///
/// Each frame is printed to stdout as the X, Y, and Z coordinates of every
/// point after rotation.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Number of points in the cloud.
    #[arg(short = 'n', long, default_value_t = 50)]
    pub points: usize,
    /// Number of frames to compute.
    #[arg(short, long, default_value_t = 600)]
    pub frames: usize,
    /// Rotation per frame, in radians.
    #[arg(short, long, default_value_t = 0.1, allow_negative_numbers = true)]
    pub step: Float,
    /// Bivector components of the rotation axis. The axis is normalized
    /// before use.
    #[arg(
        short,
        long,
        num_args = 3,
        value_names = ["X", "Y", "Z"],
        default_values_t = [10.0, -20.0, 45.0],
        allow_negative_numbers = true,
    )]
    pub axis: Vec<Float>,
    /// Scale of the point cloud.
    #[arg(short, long, default_value_t = 100.0)]
    pub radius: Float,
    /// Seed for the point cloud. A random seed is chosen if omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
    /// Only print every Nth frame.
    #[arg(long, default_value = "1")]
    pub every: NonZeroUsize,
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("generating {} points with seed {seed}", args.points);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let points = cloud::random_points(&mut rng, args.points, args.radius);

    let axis: [Float; 3] = args
        .axis
        .as_slice()
        .try_into()
        .wrap_err("rotation axis must have three components")?;
    let spinner = Spinner::new(axis, args.step, points)?;
    log::info!(
        "rotating in the plane of {} by {} radians per frame for {} frames",
        spinner.axis(),
        args.step,
        args.frames,
    );

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    for index in (0..args.frames).step_by(args.every.get()) {
        output::write_frame(&mut out, args.format, &spinner.frame(index))?;
    }
    out.flush().wrap_err("error flushing output")?;

    Ok(())
}
