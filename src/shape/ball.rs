use crate::math::Real;
use crate::shape::InvalidGeometry;

/// A Ball shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Ball {
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball with the given radius.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        Ball { radius }
    }

    /// Creates a new ball, checking that its radius is finite and non-negative.
    pub fn try_new(radius: Real) -> Result<Ball, InvalidGeometry> {
        if !radius.is_finite() {
            Err(InvalidGeometry::NonFiniteInput)
        } else if radius < 0.0 {
            Err(InvalidGeometry::NegativeRadius(radius))
        } else {
            Ok(Ball::new(radius))
        }
    }
}
