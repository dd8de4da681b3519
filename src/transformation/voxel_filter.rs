use crate::math::{Point, Real};
use crate::utils;
use hashbrown::HashSet;

/// Errors that can occur when downsampling a point cloud on a voxel grid.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum VoxelFilterError {
    /// The voxel size is zero, negative, or not finite.
    #[error("voxel size must be a positive finite number, got {0}")]
    InvalidVoxelSize(Real),
}

/// Checks that `voxel_size` can be used to downsample a point cloud.
pub(crate) fn check_voxel_size(voxel_size: Real) -> Result<(), VoxelFilterError> {
    if voxel_size > 0.0 && voxel_size.is_finite() {
        Ok(())
    } else {
        Err(VoxelFilterError::InvalidVoxelSize(voxel_size))
    }
}

/// Downsamples `points` by keeping a single point per voxel.
///
/// Space is divided into cubic voxels of side `voxel_size`, aligned with the origin.
/// The first point (in input order) falling into each voxel is kept, every other point
/// of the same voxel is discarded. The relative order of the kept points is preserved.
///
/// ```
/// use planeclip3d::na::Point3;
/// use planeclip3d::transformation::voxel_downsample;
///
/// let points = [
///     Point3::new(0.01, 0.01, 0.0),
///     Point3::new(0.02, 0.03, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
/// ];
/// let kept = voxel_downsample(&points, 0.5).unwrap();
/// assert_eq!(kept, vec![points[0], points[2]]);
/// ```
pub fn voxel_downsample(
    points: &[Point<Real>],
    voxel_size: Real,
) -> Result<Vec<Point<Real>>, VoxelFilterError> {
    check_voxel_size(voxel_size)?;

    let mut occupied = HashSet::with_capacity(points.len());
    let kept: Vec<_> = points
        .iter()
        .filter(|pt| occupied.insert(utils::voxel_key(pt, voxel_size)))
        .copied()
        .collect();

    log::debug!(
        "Voxel downsampling with size {}: kept {} of {} points.",
        voxel_size,
        kept.len(),
        points.len()
    );

    Ok(kept)
}
