use crate::math::*;

/// Computes the normal of a counter-clock-wise triangle.
///
/// The normal follows the right-hand rule over `pts[0] -> pts[1] -> pts[2]`.
/// Both edges are rescaled by their largest component before the cross product, so
/// triangles with very large or very small coordinates keep a well-defined normal.
///
/// Returns `None` if the triangle is degenerate, i.e., if its points are collinear
/// or coincident, or if its edges are not finite.
#[inline]
pub fn ccw_face_normal(pts: [&Point<Real>; 3]) -> Option<UnitVector<Real>> {
    let ab = rescaled(*pts[1] - *pts[0])?;
    let ac = rescaled(*pts[2] - *pts[0])?;
    let res = ab.cross(&ac);

    UnitVector::try_new_and_get(res, 0.0)
        .filter(|(_, norm)| norm.is_finite())
        .map(|(normal, _)| normal)
}

/// Divides `v` by its largest absolute component, or `None` if `v` is not finite.
fn rescaled(v: Vector<Real>) -> Option<Vector<Real>> {
    if !v.iter().all(|e| e.is_finite()) {
        return None;
    }

    let scale = v.amax();
    Some(if scale > 0.0 { v / scale } else { v })
}
