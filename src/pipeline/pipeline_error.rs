use crate::io::PointCloudError;
use crate::query::ClassifyError;
use crate::shape::PlaneDefinitionError;
use crate::transformation::VoxelFilterError;

/// Errors aborting a [`run`](crate::pipeline::run).
///
/// Every error is terminal: nothing is retried, and no output file is written if the
/// error happens before the saving stages.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    /// A point file could not be read or written.
    #[error(transparent)]
    PointCloud(#[from] PointCloudError),
    /// The plane-definition file does not describe two valid planes.
    #[error(transparent)]
    PlaneDefinition(#[from] PlaneDefinitionError),
    /// The points could not be classified.
    #[error(transparent)]
    Classify(#[from] ClassifyError),
    /// The outputs could not be downsampled.
    #[error(transparent)]
    VoxelFilter(#[from] VoxelFilterError),
}
