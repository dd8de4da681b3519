use crate::math::{Point, Real, DIM};

/// The integer coordinates of the voxel of side `voxel_size` containing `pt`.
///
/// Voxel `[i, j, k]` spans `[i * voxel_size, (i + 1) * voxel_size)` along each axis.
/// Coordinates beyond the range of `i64` saturate.
#[inline]
pub fn voxel_key(pt: &Point<Real>, voxel_size: Real) -> [i64; DIM] {
    pt.coords.map(|e| (e / voxel_size).floor() as i64).into()
}
