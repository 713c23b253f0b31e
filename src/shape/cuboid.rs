//! Definition of the cuboid shape.

use crate::math::{Point, Real, Vector, DIM};
use crate::shape::InvalidGeometry;

/// Shape of a box.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive or zero.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }

    /// Creates a new box, checking that every half-extent is finite and non-negative.
    pub fn try_new(half_extents: Vector<Real>) -> Result<Cuboid, InvalidGeometry> {
        for axis in 0..DIM {
            let value = half_extents[axis];

            if !value.is_finite() {
                return Err(InvalidGeometry::NonFiniteInput);
            }

            if value < 0.0 {
                return Err(InvalidGeometry::NegativeHalfExtent { axis, value });
            }
        }

        Ok(Cuboid::new(half_extents))
    }

    /// The eight corners of this cuboid, in its local frame.
    ///
    /// They follow the ordering of [`Aabb::vertices`](crate::bounding_volume::Aabb::vertices).
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 8] {
        self.local_aabb().vertices()
    }
}
