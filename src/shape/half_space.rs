//! Oriented HalfSpace shape built from three points.
use crate::math::{Point, Real, Vector};
use crate::shape::PlaneDefinitionError;
use crate::utils;
use approx::{AbsDiffEq, RelativeEq};
use na::Unit;

/// A closed half-space delimited by an infinite oriented plane.
///
/// The boundary plane is the set of points `p` such that `normal · p + offset = 0`.
/// The half-space contains every point with `normal · p + offset <= 0`, i.e., the
/// points lying on the plane or behind it, opposite to the normal.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct HalfSpace {
    /// The halfspace planar boundary's unit normal.
    pub normal: Unit<Vector<Real>>,
    /// The signed offset of the boundary plane along `-normal`.
    pub offset: Real,
}

impl HalfSpace {
    /// The number of points a plane-definition input must contain to
    /// build a pair of half-spaces.
    pub const PAIR_POINT_COUNT: usize = 6;

    /// Builds a new halfspace from its normal and the offset of its boundary plane.
    #[inline]
    pub fn new(normal: Unit<Vector<Real>>, offset: Real) -> HalfSpace {
        HalfSpace { normal, offset }
    }

    /// Builds the halfspace whose boundary plane passes through `a`, `b`, and `c`.
    ///
    /// The normal is `(b - a) × (c - a)` normalized, so the orientation of the
    /// half-space depends on the order of the three points: swapping any two
    /// of them yields the complementary half-space.
    ///
    /// Returns [`PlaneDefinitionError::Degenerate`] if the points are collinear
    /// or coincident, or if the differences between them overflow.
    pub fn from_points(
        a: &Point<Real>,
        b: &Point<Real>,
        c: &Point<Real>,
    ) -> Result<HalfSpace, PlaneDefinitionError> {
        let normal = utils::ccw_face_normal([a, b, c]).ok_or(PlaneDefinitionError::Degenerate {
            a: *a,
            b: *b,
            c: *c,
        })?;
        let offset = -normal.dot(&a.coords);

        Ok(HalfSpace { normal, offset })
    }

    /// Builds two half-spaces from exactly [`Self::PAIR_POINT_COUNT`] points.
    ///
    /// Points `0..3` define the first half-space and points `3..6` the second one.
    /// The point count is checked before any plane is constructed.
    pub fn pair_from_points(
        points: &[Point<Real>],
    ) -> Result<[HalfSpace; 2], PlaneDefinitionError> {
        let [a1, b1, c1, a2, b2, c2] = points else {
            return Err(PlaneDefinitionError::WrongPointCount {
                found: points.len(),
            });
        };

        Ok([
            HalfSpace::from_points(a1, b1, c1)?,
            HalfSpace::from_points(a2, b2, c2)?,
        ])
    }

    /// The signed distance from `pt` to the boundary plane.
    ///
    /// This is negative behind the plane, zero on the plane, and positive in front of it.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) + self.offset
    }

    /// The complementary half-space, sharing the same boundary plane with
    /// the opposite orientation.
    #[inline]
    pub fn flipped(&self) -> HalfSpace {
        HalfSpace {
            normal: Unit::new_unchecked(-*self.normal),
            offset: -self.offset,
        }
    }

    /// Some point lying on the boundary plane.
    #[inline]
    pub fn plane_point(&self) -> Point<Real> {
        Point::from(*self.normal * -self.offset)
    }
}

impl AbsDiffEq for HalfSpace {
    type Epsilon = Real;

    #[inline]
    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.normal.abs_diff_eq(&other.normal, epsilon)
            && self.offset.abs_diff_eq(&other.offset, epsilon)
    }
}

impl RelativeEq for HalfSpace {
    #[inline]
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.normal.relative_eq(&other.normal, epsilon, max_relative)
            && self.offset.relative_eq(&other.offset, epsilon, max_relative)
    }
}
