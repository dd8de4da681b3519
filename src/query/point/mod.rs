//! Point inclusion and projection.

#[doc(inline)]
pub use self::point_query::{PointProjection, PointQuery};

mod point_halfspace;
#[doc(hidden)]
pub mod point_query;
