//! Various unsorted geometrical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::voxel_key::voxel_key;

mod ccw_face_normal;
mod voxel_key;
