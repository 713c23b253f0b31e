//! Shapes that can be attached to a collision model.

pub use self::ball::Ball;
pub use self::cuboid::Cuboid;
pub use self::error::InvalidGeometry;
#[doc(inline)]
pub use self::shape::{Shape, ShapeType, TypedShape};
pub use self::shared_shape::SharedShape;
pub use self::triangle::Triangle;

mod ball;
mod cuboid;
mod error;
mod shape;
mod shared_shape;
mod triangle;
