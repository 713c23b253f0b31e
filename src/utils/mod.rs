//! Various unsorted geometrical operators.

pub use self::isometry_ops::IsometryOps;

mod isometry_ops;
