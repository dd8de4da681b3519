use crate::math::{Point, Real};

/// Errors that can occur while building half-spaces from their defining points.
///
/// A half-space is defined by three points, and a plane-definition file must contain
/// exactly two such triples (see [`HalfSpace::pair_from_points`]).
///
/// ```
/// use planeclip3d::na::Point3;
/// use planeclip3d::shape::{HalfSpace, PlaneDefinitionError};
///
/// let collinear = HalfSpace::from_points(
///     &Point3::origin(),
///     &Point3::new(1.0, 0.0, 0.0),
///     &Point3::new(2.0, 0.0, 0.0),
/// );
/// assert!(matches!(collinear, Err(PlaneDefinitionError::Degenerate { .. })));
/// ```
///
/// [`HalfSpace::pair_from_points`]: crate::shape::HalfSpace::pair_from_points
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PlaneDefinitionError {
    /// The plane-definition input did not contain exactly
    /// [`HalfSpace::PAIR_POINT_COUNT`](crate::shape::HalfSpace::PAIR_POINT_COUNT) points.
    #[error("plane file must contain exactly 6 points (2 planes), found {found}")]
    WrongPointCount {
        /// The number of points actually read.
        found: usize,
    },

    /// The three points are collinear or coincident, or too far apart for their edges to
    /// be represented, so no plane orientation can be derived from them.
    #[error("points {a}, {b} and {c} do not define a plane (collinear, coincident, or out of range)")]
    Degenerate {
        /// The first defining point.
        a: Point<Real>,
        /// The second defining point.
        b: Point<Real>,
        /// The third defining point.
        c: Point<Real>,
    },
}
