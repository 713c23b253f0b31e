//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
pub use crate::bounding_volume::aabb_accumulator::{AabbAccumulator, TrackedAabb};
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::BoundingVolume;

#[doc(hidden)]
pub mod bounding_volume;

#[doc(hidden)]
pub mod aabb;
mod aabb_accumulator;
mod aabb_ball;
mod aabb_cuboid;
mod aabb_triangle;
mod aabb_utils;

/// Free functions for some special cases of bounding-volume computation.
pub mod details {
    pub use super::aabb_ball::{ball_aabb, local_ball_aabb};
    pub use super::aabb_utils::{local_point_cloud_aabb, point_cloud_aabb};
}
