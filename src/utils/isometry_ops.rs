use crate::math::{Isometry, Matrix, Point, Real, Vector};

/// Extra operations with isometries.
pub trait IsometryOps {
    /// Transform a vector by the absolute value of the homogeneous matrix
    /// equivalent to `self`.
    fn absolute_transform_vector(&self, v: &Vector<Real>) -> Vector<Real>;

    /// The rotation part of `self` as a 3x3 matrix with every entry replaced by
    /// its absolute value.
    fn absolute_rotation_matrix(&self) -> Matrix<Real>;

    /// The translation part of `self`, as a point.
    fn origin(&self) -> Point<Real>;
}

impl IsometryOps for Isometry<Real> {
    #[inline]
    fn absolute_transform_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.absolute_rotation_matrix() * *v
    }

    #[inline]
    fn absolute_rotation_matrix(&self) -> Matrix<Real> {
        self.rotation.to_rotation_matrix().into_inner().abs()
    }

    #[inline]
    fn origin(&self) -> Point<Real> {
        Point::from(self.translation.vector)
    }
}
