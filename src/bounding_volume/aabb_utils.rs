use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real};

/// Computes the AABB of a set of points transformed by `m`.
///
/// # Panics
///
/// Panics if `pts` yields no point.
pub fn point_cloud_aabb<'a, I>(m: &Isometry<Real>, pts: I) -> Aabb
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    local_point_cloud_aabb(pts.into_iter().map(|pt| m * pt))
}

/// Computes the AABB of a set of points.
///
/// # Panics
///
/// Panics if `pts` yields no point.
pub fn local_point_cloud_aabb<I>(pts: I) -> Aabb
where
    I: IntoIterator<Item = Point<Real>>,
{
    let mut it = pts.into_iter();

    let p0 = it.next().expect(
        "Point cloud AABB construction: the input iterator should yield at least one point.",
    );
    let mut min: Point<Real> = p0;
    let mut max: Point<Real> = p0;

    for pt in it {
        min = min.inf(&pt);
        max = max.sup(&pt);
    }

    Aabb::new(min, max)
}
