//! Non-persistent geometric queries.
//!
//! * [`query::classify()`](crate::query::classify()) partitions a point cloud into accepted and
//!   rejected points against a set of validation regions.
//! * [`query::PointQuery`](crate::query::PointQuery) tests point inclusion and point projection
//!   on a single shape.

pub use self::classify::{classify, is_accepted, Classification, ClassifyError};
pub use self::point::{PointProjection, PointQuery};

mod classify;
pub mod point;
