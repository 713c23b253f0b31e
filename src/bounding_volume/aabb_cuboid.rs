use crate::bounding_volume::{details::point_cloud_aabb, Aabb};
use crate::math::{Isometry, Point, Real};
use crate::shape::Cuboid;

impl Cuboid {
    /// Computes the world-space AABB of this cuboid, transformed by `pos`.
    ///
    /// This is the componentwise min/max of the eight transformed corners.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        point_cloud_aabb(pos, &self.local_aabb().vertices())
    }

    /// Computes the local-space AABB of this cuboid.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let half_extents = Point::from(self.half_extents);

        Aabb::new(-half_extents, half_extents)
    }
}
