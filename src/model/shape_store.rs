use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real};
use crate::shape::SharedShape;

/// Index of a shape inside of a collision model.
pub type ShapeIndex = u32;

/// Storage of the shapes of a single-node collision model.
///
/// This is the part of a collision model that the narrow-phase works with. A
/// [`CollisionModel`](crate::model::CollisionModel) validates every shape and
/// computes its bounding box before registering it here, so implementors never
/// see an invalid shape and cannot make an insertion fail.
pub trait ShapeStore {
    /// Registers a shape placed at `position` relative to the model, with `aabb`
    /// its bounding box in the model frame. Returns the index of the new shape.
    fn insert(&mut self, position: Isometry<Real>, shape: SharedShape, aabb: Aabb) -> ShapeIndex;

    /// The number of shapes registered so far.
    fn len(&self) -> usize;

    /// Is this store empty?
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The bounding box, in the model frame, of the `i`-th shape.
    fn shape_aabb(&self, i: ShapeIndex) -> Option<Aabb>;
}

/// The default [`ShapeStore`]: an insertion-ordered list of placed shapes.
#[derive(Clone, Debug, Default)]
pub struct ShapeList {
    shapes: Vec<(Isometry<Real>, SharedShape)>,
    aabbs: Vec<Aabb>,
}

impl ShapeList {
    /// An empty shape list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shapes of this list, with their placement, in insertion order.
    pub fn shapes(&self) -> &[(Isometry<Real>, SharedShape)] {
        &self.shapes[..]
    }

    /// The model-frame bounding box of each shape, in insertion order.
    pub fn aabbs(&self) -> &[Aabb] {
        &self.aabbs[..]
    }

    /// The `i`-th shape and its placement.
    pub fn get(&self, i: ShapeIndex) -> Option<&(Isometry<Real>, SharedShape)> {
        self.shapes.get(i as usize)
    }
}

impl ShapeStore for ShapeList {
    fn insert(&mut self, position: Isometry<Real>, shape: SharedShape, aabb: Aabb) -> ShapeIndex {
        let index = self.shapes.len() as ShapeIndex;
        self.shapes.push((position, shape));
        self.aabbs.push(aabb);
        index
    }

    fn len(&self) -> usize {
        self.shapes.len()
    }

    fn shape_aabb(&self, i: ShapeIndex) -> Option<Aabb> {
        self.aabbs.get(i as usize).copied()
    }
}
