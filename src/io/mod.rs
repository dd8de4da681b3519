//! Reading and writing point clouds as whitespace-separated text.
//!
//! A point file is a sequence of real numbers separated by any whitespace. Every three
//! consecutive numbers form one point, so a point does not need to sit on its own line.
//! Points are always written back one per line.

pub use self::output_paths::OutputPaths;
pub use self::point_cloud::{
    format_points, load_points, parse_points, read_points, save_points, write_points,
};
pub use self::point_cloud_error::PointCloudError;

mod output_paths;
mod point_cloud;
mod point_cloud_error;
