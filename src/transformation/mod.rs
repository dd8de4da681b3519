//! Transformation and simplification of point clouds.

pub(crate) use self::voxel_filter::check_voxel_size;
pub use self::voxel_filter::{voxel_downsample, VoxelFilterError};

mod voxel_filter;
