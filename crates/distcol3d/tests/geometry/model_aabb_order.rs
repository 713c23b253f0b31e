use distcol3d::math::{Point, Real, Rotation};
use distcol3d::model::CollisionModel;
use oorandom::Rand32;

#[derive(Copy, Clone, Debug)]
enum TestShape {
    Cuboid([Real; 3], Point<Real>, Rotation<Real>),
    Ball(Real, Point<Real>),
    Triangle([Point<Real>; 3], Point<Real>, Rotation<Real>),
}

impl TestShape {
    fn add_to(&self, model: &mut CollisionModel) {
        let inserted = match self {
            TestShape::Cuboid(h, pos, rot) => model.add_cuboid(h[0], h[1], h[2], pos, rot),
            TestShape::Ball(radius, pos) => model.add_ball(*radius, pos),
            TestShape::Triangle(pts, pos, rot) => {
                model.add_triangle(pts[0], pts[1], pts[2], pos, rot)
            }
        };
        assert!(inserted.is_ok(), "{:?}", self);
    }
}

fn random_point(rng: &mut Rand32, scale: Real) -> Point<Real> {
    Point::new(
        (rng.rand_float() as Real - 0.5) * scale,
        (rng.rand_float() as Real - 0.5) * scale,
        (rng.rand_float() as Real - 0.5) * scale,
    )
}

fn random_rotation(rng: &mut Rand32) -> Rotation<Real> {
    Rotation::from_euler_angles(
        rng.rand_float() as Real * 6.0,
        rng.rand_float() as Real * 6.0,
        rng.rand_float() as Real * 6.0,
    )
}

fn random_shapes(rng: &mut Rand32, count: usize) -> Vec<TestShape> {
    (0..count)
        .map(|i| match i % 3 {
            0 => TestShape::Cuboid(
                [
                    rng.rand_float() as Real + 0.1,
                    rng.rand_float() as Real + 0.1,
                    rng.rand_float() as Real + 0.1,
                ],
                random_point(rng, 20.0),
                random_rotation(rng),
            ),
            1 => TestShape::Ball(rng.rand_float() as Real * 2.0, random_point(rng, 20.0)),
            _ => TestShape::Triangle(
                [
                    Point::new(0.0, 0.0, 0.0),
                    Point::new(1.0 + rng.rand_float() as Real, 0.0, 0.0),
                    Point::new(0.0, 1.0 + rng.rand_float() as Real, 0.5),
                ],
                random_point(rng, 20.0),
                random_rotation(rng),
            ),
        })
        .collect()
}

fn shuffle<T>(rng: &mut Rand32, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.rand_range(0..(i as u32 + 1)) as usize;
        items.swap(i, j);
    }
}

#[test]
fn permuted_insertions_give_identical_aabbs() {
    let mut rng = Rand32::new(0x5eed);
    let mut shapes = random_shapes(&mut rng, 15);

    let mut reference = CollisionModel::new();
    for shape in &shapes {
        shape.add_to(&mut reference);
    }
    let expected = reference.aabb().unwrap();

    for _ in 0..20 {
        shuffle(&mut rng, &mut shapes);
        let mut model = CollisionModel::new();
        for shape in &shapes {
            shape.add_to(&mut model);
        }

        // Bit-identical, not just approximately equal.
        assert_eq!(model.aabb().unwrap(), expected);
    }
}
