//! Validates a point cloud against two clipping planes.
//!
//! ```text
//! planeclip <POINTS> <PLANES> [-t] [--voxel-size <SIZE>]
//! ```
//!
//! The accepted points are written to `<POINTS base name>_good.txt` and the rejected ones
//! to `<POINTS base name>_wrong.txt`. Set `RUST_LOG=debug` for detailed logs.

use clap::Parser;
use core::error::Error;
use planeclip3d::math::Real;
use planeclip3d::pipeline::{self, PipelineOptions};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "planeclip", version, about)]
struct Args {
    /// Whitespace-separated `x y z` points to classify.
    points: PathBuf,

    /// Exactly six points: the first three define the first plane, the last three the
    /// second plane.
    planes: PathBuf,

    /// Print the time spent in each stage.
    #[arg(short = 't', long)]
    timing: bool,

    /// Downsample both outputs on a voxel grid of this size before saving them.
    #[arg(long, value_name = "SIZE")]
    voxel_size: Option<Real>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut options = PipelineOptions::new(args.points, args.planes);
    options.voxel_size = args.voxel_size;

    match pipeline::run(&options) {
        Ok(report) => {
            println!("{}", report.summary());
            if args.timing {
                print!("{}", report.timings);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
