use crate::math::Real;

/// Reasons a shape cannot be inserted into a collision model.
///
/// Rejection is always local: the shape is not inserted and the model is left
/// exactly as it was before the call.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum InvalidGeometry {
    /// A cuboid half-extent is negative.
    #[error("the cuboid half-extent along axis {axis} is negative: {value}")]
    NegativeHalfExtent {
        /// The axis (0, 1 or 2) of the offending half-extent.
        axis: usize,
        /// The offending half-extent.
        value: Real,
    },
    /// A ball radius is negative.
    #[error("the ball radius is negative: {0}")]
    NegativeRadius(Real),
    /// A dimension, vertex, or placement contains a NaN or infinite value.
    #[error("the shape or its placement contains a non-finite value")]
    NonFiniteInput,
    /// The three vertices of a triangle are (almost) collinear.
    #[error("the triangle vertices are collinear")]
    DegenerateTriangle,
}
