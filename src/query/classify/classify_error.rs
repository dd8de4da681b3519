/// Errors that can occur when classifying a point cloud.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// No validation region was given, so no point could ever be accepted.
    #[error("at least one half-space is required to classify points")]
    NoHalfSpaces,
}
