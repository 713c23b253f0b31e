//! Definition of the triangle shape.

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::InvalidGeometry;


/// A triangle shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// Creates a triangle from three points, rejecting non-finite or collinear vertices.
    pub fn try_new(
        a: Point<Real>,
        b: Point<Real>,
        c: Point<Real>,
    ) -> Result<Triangle, InvalidGeometry> {
        let all_finite = [a, b, c]
            .iter()
            .all(|pt| pt.coords.iter().all(|e| e.is_finite()));

        if !all_finite {
            return Err(InvalidGeometry::NonFiniteInput);
        }

        let triangle = Triangle::new(a, b, c);

        if triangle.is_affinely_dependent() {
            Err(InvalidGeometry::DegenerateTriangle)
        } else {
            Ok(triangle)
        }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns a new triangle with vertices transformed by `m`.
    #[inline]
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        Triangle::new(m * self.a, m * self.b, m * self.c)
    }

    /// A vector normal of this triangle.
    ///
    /// The vector points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product).
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * na::convert::<f64, Real>(0.5)
    }

    /// Tests if this triangle is affinely dependent, i.e., its points are almost aligned.
    ///
    /// The tolerance scales with the squared length of the longest edge, so the
    /// result does not depend on the size of the triangle.
    pub fn is_affinely_dependent(&self) -> bool {
        const EPS: Real = crate::math::DEFAULT_EPSILON * 100.0;

        let p1p2 = self.b - self.a;
        let p1p3 = self.c - self.a;
        let p2p3 = self.c - self.b;
        let longest_sq = p1p2
            .norm_squared()
            .max(p1p3.norm_squared())
            .max(p2p3.norm_squared());

        p1p2.cross(&p1p3).norm() <= EPS * longest_sq
    }
}
