use crate::math::{Point, Real};
use crate::query::{Classification, ClassifyError, PointQuery};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Tests if `pt` lies inside of at least one of the given validation regions.
#[inline]
pub fn is_accepted<S: PointQuery>(pt: &Point<Real>, regions: &[S]) -> bool {
    regions.iter().any(|region| region.contains_local_point(pt))
}

/// Partitions `points` into the points accepted by at least one of the `regions`
/// and the points rejected by all of them.
///
/// Each input point ends up in exactly one of the two output sequences, and the relative
/// order of the input is preserved in both. Returns [`ClassifyError::NoHalfSpaces`] if
/// `regions` is empty.
///
/// ```
/// use planeclip3d::na::{Point3, Vector3};
/// use planeclip3d::query::classify;
/// use planeclip3d::shape::HalfSpace;
///
/// let below_ground = HalfSpace::new(Vector3::z_axis(), 0.0);
/// let points = vec![
///     Point3::new(0.0, 0.0, 1.0),
///     Point3::new(0.0, 0.0, -1.0),
///     Point3::new(0.0, 0.0, 0.0),
/// ];
///
/// let classification = classify(points, &[below_ground]).unwrap();
/// assert_eq!(classification.accepted.len(), 2);
/// assert_eq!(classification.rejected, vec![Point3::new(0.0, 0.0, 1.0)]);
/// ```
#[cfg(not(feature = "parallel"))]
pub fn classify<S: PointQuery>(
    points: Vec<Point<Real>>,
    regions: &[S],
) -> Result<Classification, ClassifyError> {
    if regions.is_empty() {
        return Err(ClassifyError::NoHalfSpaces);
    }

    let (accepted, rejected): (Vec<_>, Vec<_>) = points
        .into_iter()
        .partition(|pt| is_accepted(pt, regions));

    Ok(finish(accepted, rejected, regions.len()))
}

/// Partitions `points` into the points accepted by at least one of the `regions`
/// and the points rejected by all of them.
///
/// Each input point ends up in exactly one of the two output sequences, and the relative
/// order of the input is preserved in both. Returns [`ClassifyError::NoHalfSpaces`] if
/// `regions` is empty.
///
/// The per-point tests are distributed over the `rayon` thread pool.
#[cfg(feature = "parallel")]
pub fn classify<S: PointQuery + Sync>(
    points: Vec<Point<Real>>,
    regions: &[S],
) -> Result<Classification, ClassifyError> {
    if regions.is_empty() {
        return Err(ClassifyError::NoHalfSpaces);
    }

    let (accepted, rejected): (Vec<_>, Vec<_>) = points
        .into_par_iter()
        .partition(|pt| is_accepted(pt, regions));

    Ok(finish(accepted, rejected, regions.len()))
}

fn finish(
    accepted: Vec<Point<Real>>,
    rejected: Vec<Point<Real>>,
    num_regions: usize,
) -> Classification {
    log::debug!(
        "Classified {} points against {} regions: {} accepted, {} rejected.",
        accepted.len() + rejected.len(),
        num_regions,
        accepted.len(),
        rejected.len()
    );

    Classification { accepted, rejected }
}
