/*!
planeclip3d
===========

**planeclip3d** validates 3D point clouds against a pair of oriented clipping
half-spaces. Each half-space is defined by three points; a point is accepted
when it lies on or behind at least one of the planes, and rejected otherwise.

The crate is split the same way the command-line tool is:

* [`shape::HalfSpace`] builds the oriented planes.
* [`query::classify()`] partitions a point cloud against them.
* [`io`] reads and writes whitespace-separated point files.
* [`transformation::voxel_downsample`] thins out point clouds on a voxel grid.
* [`pipeline`] chains all of the above with per-stage timings.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(clippy::module_inception)]
#![deny(unused_qualifications)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod io;
pub mod pipeline;
pub mod query;
pub mod shape;
pub mod transformation;
pub mod utils;

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use na::{Point3, UnitVector3, Vector3};

    /// The scalar type used throughout this crate.
    pub use f64 as Real;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;
}
