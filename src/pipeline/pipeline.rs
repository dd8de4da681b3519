use crate::io::{self, OutputPaths};
use crate::math::{Point, Real};
use crate::pipeline::{PipelineError, StageTimings};
use crate::query::{self, Classification};
use crate::shape::HalfSpace;
use crate::transformation;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Configuration of a [`run`].
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineOptions {
    /// The point file to classify.
    pub points_path: PathBuf,
    /// The file containing the six points defining the two half-spaces.
    pub planes_path: PathBuf,
    /// If set, both outputs are downsampled on a voxel grid of this size before
    /// being saved.
    pub voxel_size: Option<Real>,
}

impl PipelineOptions {
    /// Options classifying `points_path` against the planes of `planes_path`,
    /// without downsampling.
    pub fn new(points_path: impl Into<PathBuf>, planes_path: impl Into<PathBuf>) -> Self {
        PipelineOptions {
            points_path: points_path.into(),
            planes_path: planes_path.into(),
            voxel_size: None,
        }
    }

    /// Sets the voxel size used to downsample the outputs.
    pub fn with_voxel_size(mut self, voxel_size: Real) -> Self {
        self.voxel_size = Some(voxel_size);
        self
    }
}

/// The outcome of a successful [`run`].
#[derive(Clone, Debug)]
pub struct PipelineReport {
    /// The two half-spaces the points were validated against.
    pub half_spaces: [HalfSpace; 2],
    /// The accepted and rejected points, before any downsampling.
    pub classification: Classification,
    /// Where the accepted and rejected points were saved.
    pub outputs: OutputPaths,
    /// Time spent in each stage.
    pub timings: StageTimings,
}

impl PipelineReport {
    /// The one-line count summary of the run.
    ///
    /// Percentages are truncated toward zero and reported as zero if there was no point.
    pub fn summary(&self) -> String {
        let classification = &self.classification;
        format!(
            "Total points: {} | Valid: {} ({}%) | Invalid: {} ({}%)",
            classification.total(),
            classification.accepted.len(),
            classification.accepted_percent(),
            classification.rejected.len(),
            classification.rejected_percent()
        )
    }
}

/// Classifies the points of `options.points_path` against the two half-spaces defined
/// in `options.planes_path` and saves both partitions.
///
/// Stops at the first error. The plane-definition file is fully validated before any
/// output is written; if saving the rejected points fails, the accepted points have
/// already been saved.
pub fn run(options: &PipelineOptions) -> Result<PipelineReport, PipelineError> {
    if let Some(voxel_size) = options.voxel_size {
        transformation::check_voxel_size(voxel_size)?;
    }

    let mut timings = StageTimings::default();
    let start = Instant::now();

    let mut stage = Instant::now();
    let points = io::load_points(&options.points_path)?;
    timings.load_points = stage.elapsed();

    if points.is_empty() {
        log::warn!("No point could be read from {}.", options.points_path.display());
    }

    stage = Instant::now();
    let plane_points = io::load_points(&options.planes_path)?;
    timings.load_plane_points = stage.elapsed();

    stage = Instant::now();
    let half_spaces = HalfSpace::pair_from_points(&plane_points)?;
    timings.construct_planes = stage.elapsed();

    for (i, hs) in half_spaces.iter().enumerate() {
        log::info!(
            "Plane {}: normal = [{}, {}, {}], offset = {}.",
            i + 1,
            hs.normal.x,
            hs.normal.y,
            hs.normal.z,
            hs.offset
        );
    }

    stage = Instant::now();
    let classification = query::classify(points, &half_spaces)?;
    timings.classification = stage.elapsed();

    let outputs = OutputPaths::from_input(&options.points_path);

    stage = Instant::now();
    save(&outputs.accepted, &classification.accepted, options.voxel_size)?;
    timings.save_accepted = stage.elapsed();

    stage = Instant::now();
    save(&outputs.rejected, &classification.rejected, options.voxel_size)?;
    timings.save_rejected = stage.elapsed();

    timings.total = start.elapsed();

    log::info!(
        "Saved accepted points to {} and rejected points to {}.",
        outputs.accepted.display(),
        outputs.rejected.display()
    );

    Ok(PipelineReport {
        half_spaces,
        classification,
        outputs,
        timings,
    })
}

fn save(
    path: &Path,
    points: &[Point<Real>],
    voxel_size: Option<Real>,
) -> Result<(), PipelineError> {
    match voxel_size {
        Some(voxel_size) => {
            let downsampled = transformation::voxel_downsample(points, voxel_size)?;
            io::save_points(path, &downsampled)?;
        }
        None => io::save_points(path, points)?,
    }

    Ok(())
}
