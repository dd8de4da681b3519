use crate::math::{Point, Real};

/// Description of the projection of a point on a shape.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PointProjection {
    /// Whether or not the point to project was inside of the shape.
    pub is_inside: bool,
    /// The projection result.
    pub point: Point<Real>,
}

impl PointProjection {
    /// Initializes a new `PointProjection`.
    pub fn new(is_inside: bool, point: Point<Real>) -> Self {
        PointProjection { is_inside, point }
    }
}

/// Trait of objects that can be tested for point inclusion and point projection.
///
/// This is the seam used by [`classify`](crate::query::classify): any shape implementing
/// it can act as a validation region for a point cloud.
pub trait PointQuery {
    /// Projects a point on `self`.
    ///
    /// If `solid` is `true` and the point is inside of the shape, the point itself is returned.
    fn project_local_point(&self, pt: &Point<Real>, solid: bool) -> PointProjection;

    /// Computes the signed distance between a point and `self`.
    ///
    /// The result is negative if the point is inside of the shape, unless `solid`
    /// is `true`, in which case inside points are at distance zero.
    fn distance_to_local_point(&self, pt: &Point<Real>, solid: bool) -> Real {
        let proj = self.project_local_point(pt, solid);
        let dist = na::distance(pt, &proj.point);

        if solid || !proj.is_inside {
            dist
        } else {
            -dist
        }
    }

    /// Tests if the given point is inside of `self`.
    fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        self.project_local_point(pt, true).is_inside
    }
}
