/*!
distcol3d
=========

**distcol3d** computes whole-body bounding boxes for the collision models of a
domain-decomposed rigid-body simulation, and classifies those boxes against the
sub-domains owned by each compute node.

A [`CollisionModel`](model::CollisionModel) accumulates the axis-aligned
bounding box of every shape inserted into it. Once the body is fully built, its
box is handed to a [`Decomposition`](partitioning::Decomposition) which reports
every sub-domain the body overlaps. A body overlapping more than one sub-domain
must be replicated as a ghost on the nodes owning the extra sub-domains.

The box is computed once, while the body is built. It is **not** kept up to
date as the body moves during time-stepping.

```
# #[cfg(feature = "f32")] {
use distcol3d::math::{Point, Rotation};
use distcol3d::model::CollisionModel;
use distcol3d::partitioning::{Decomposition, SlabDecomposition};

let mut model = CollisionModel::new();
model
    .add_cuboid(1.0, 1.0, 1.0, &Point::new(4.0, 0.0, 0.0), &Rotation::identity())
    .unwrap();

let slabs = SlabDecomposition::new(0, vec![0.0, 5.0, 10.0]).unwrap();
let aabb = model.aabb().unwrap();
assert_eq!(slabs.classify(&aabb).subdomains(), &[0, 1]);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod model;
pub mod partitioning;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Matrix3, Point3, Translation3, UnitVector3, Vector3};
    use na::UnitQuaternion;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}
