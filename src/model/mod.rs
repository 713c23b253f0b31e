//! Per-body collision models tracking the bounding box of the whole body.

pub use self::collision_model::CollisionModel;
pub use self::shape_store::{ShapeIndex, ShapeList, ShapeStore};

mod collision_model;
mod shape_store;
