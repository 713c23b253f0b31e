use crate::bounding_volume::{Aabb, AabbAccumulator, TrackedAabb};
use crate::math::{Isometry, Point, Real, Rotation, Translation, Vector};
use crate::model::{ShapeIndex, ShapeList, ShapeStore};
use crate::shape::{Ball, Cuboid, InvalidGeometry, Shape, SharedShape, Triangle, TypedShape};

/// The collision model of a single rigid body, tracking the bounding box of the whole body.
///
/// Shapes are validated, bounded, then handed over to the underlying
/// [`ShapeStore`]. The union of their bounding boxes, expressed in the body
/// frame, is available through [`CollisionModel::aabb`] and is what a domain
/// decomposition classifies the body with.
///
/// The bounding box is computed while the body is being built. It is meant to be
/// read once, before the simulation starts stepping, and is never updated as the
/// body moves.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use distcol3d::math::Point;
/// use distcol3d::model::CollisionModel;
///
/// let mut model = CollisionModel::new();
/// assert!(model.aabb().is_none());
///
/// model.add_ball(1.0, &Point::new(2.0, 0.0, 0.0)).unwrap();
/// let aabb = model.aabb().unwrap();
/// assert_eq!(aabb.mins, Point::new(1.0, -1.0, -1.0));
/// assert_eq!(aabb.maxs, Point::new(3.0, 1.0, 1.0));
///
/// // Invalid shapes are rejected and leave the model untouched.
/// assert!(model.add_ball(-1.0, &Point::origin()).is_err());
/// assert_eq!(model.aabb(), Some(aabb));
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct CollisionModel<S = ShapeList> {
    store: S,
    aabb: AabbAccumulator,
}

impl Default for CollisionModel<ShapeList> {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionModel<ShapeList> {
    /// Creates an empty collision model backed by a [`ShapeList`].
    pub fn new() -> Self {
        Self::with_store(ShapeList::new())
    }
}

impl<S: ShapeStore> CollisionModel<S> {
    /// Creates a collision model on top of the given shape store.
    ///
    /// Shapes already registered in `store` contribute to the model bounding box.
    pub fn with_store(store: S) -> Self {
        let mut aabb = AabbAccumulator::new();

        for i in 0..store.len() {
            if let Some(shape_aabb) = store.shape_aabb(i as ShapeIndex) {
                aabb.expand(&shape_aabb);
            }
        }

        Self { store, aabb }
    }

    /// Adds a box with half-extents `hx`, `hy`, `hz`, centered at `pos` and rotated by `rot`.
    ///
    /// Fails without modifying the model if a half-extent is negative.
    pub fn add_cuboid(
        &mut self,
        hx: Real,
        hy: Real,
        hz: Real,
        pos: &Point<Real>,
        rot: &Rotation<Real>,
    ) -> Result<ShapeIndex, InvalidGeometry> {
        let cuboid = Cuboid::try_new(Vector::new(hx, hy, hz)).map_err(rejected)?;
        let position = placement(pos, rot)?;
        let aabb = cuboid.aabb(&position);
        Ok(self.register(position, SharedShape::new(cuboid), aabb))
    }

    /// Adds a ball of the given `radius` centered at `pos`.
    ///
    /// Fails without modifying the model if `radius` is negative.
    pub fn add_ball(
        &mut self,
        radius: Real,
        pos: &Point<Real>,
    ) -> Result<ShapeIndex, InvalidGeometry> {
        let ball = Ball::try_new(radius).map_err(rejected)?;
        let position = placement(pos, &Rotation::identity())?;
        let aabb = ball.aabb(&position);
        Ok(self.register(position, SharedShape::new(ball), aabb))
    }

    /// Adds the triangle `a`, `b`, `c`, rotated by `rot` then translated by `pos`.
    ///
    /// Fails without modifying the model if the vertices are collinear.
    pub fn add_triangle(
        &mut self,
        a: Point<Real>,
        b: Point<Real>,
        c: Point<Real>,
        pos: &Point<Real>,
        rot: &Rotation<Real>,
    ) -> Result<ShapeIndex, InvalidGeometry> {
        let triangle = Triangle::try_new(a, b, c).map_err(rejected)?;
        let position = placement(pos, rot)?;
        let aabb = triangle.aabb(&position);
        Ok(self.register(position, SharedShape::new(triangle), aabb))
    }

    /// Adds an arbitrary shape placed at `position`.
    ///
    /// Balls, cuboids and triangles go through the same checks as with the
    /// dedicated `add_*` methods. Custom shapes are only required to produce a
    /// finite bounding box.
    pub fn add_shape(
        &mut self,
        position: Isometry<Real>,
        shape: SharedShape,
    ) -> Result<ShapeIndex, InvalidGeometry> {
        validate(&shape).map_err(rejected)?;
        let aabb = shape.compute_aabb(&position);

        if !aabb.is_well_formed() {
            return Err(rejected(InvalidGeometry::NonFiniteInput));
        }

        Ok(self.register(position, shape, aabb))
    }

    fn register(&mut self, position: Isometry<Real>, shape: SharedShape, aabb: Aabb) -> ShapeIndex {
        let index = self.store.insert(position, shape, aabb);
        self.aabb.expand(&aabb);
        log::trace!(
            "Shape {} added, model AABB is now {:?}",
            index,
            self.aabb.read().aabb
        );
        index
    }

    /// The bounding box of every shape added so far, in the body frame.
    ///
    /// Returns `None` if no shape was successfully added.
    #[inline]
    pub fn aabb(&self) -> Option<Aabb> {
        self.aabb.get()
    }

    /// The bounding box of every shape added so far, or [`Aabb::zero`] if there is none.
    ///
    /// The zero box cannot be told apart from a model made of a single
    /// zero-sized shape at the origin. Use [`CollisionModel::aabb`] when that
    /// matters.
    #[inline]
    pub fn aabb_or_degenerate(&self) -> Aabb {
        self.aabb.read().aabb
    }

    /// The bounding box of this model together with its validity flag.
    #[inline]
    pub fn tracked_aabb(&self) -> TrackedAabb {
        self.aabb.read()
    }

    /// The number of shapes successfully added to this model.
    #[inline]
    pub fn num_shapes(&self) -> usize {
        self.store.len()
    }

    /// The shape store backing this model.
    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes this model, returning its shape store.
    pub fn into_store(self) -> S {
        self.store
    }
}

fn placement(pos: &Point<Real>, rot: &Rotation<Real>) -> Result<Isometry<Real>, InvalidGeometry> {
    let finite = pos.coords.iter().all(|e| e.is_finite())
        && rot.coords.iter().all(|e| e.is_finite());

    if finite {
        Ok(Isometry::from_parts(Translation::from(pos.coords), *rot))
    } else {
        Err(rejected(InvalidGeometry::NonFiniteInput))
    }
}

fn validate(shape: &SharedShape) -> Result<(), InvalidGeometry> {
    match shape.as_typed_shape() {
        TypedShape::Ball(ball) => Ball::try_new(ball.radius).map(|_| ()),
        TypedShape::Cuboid(cuboid) => Cuboid::try_new(cuboid.half_extents).map(|_| ()),
        TypedShape::Triangle(tri) => Triangle::try_new(tri.a, tri.b, tri.c).map(|_| ()),
        TypedShape::Custom(_) => Ok(()),
    }
}

fn rejected(err: InvalidGeometry) -> InvalidGeometry {
    log::debug!("Shape rejected by the collision model: {}", err);
    err
}
