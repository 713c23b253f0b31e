use distcol3d::bounding_volume::{Aabb, BoundingVolume};
use distcol3d::math::{Isometry, Point, Real, Rotation, Translation, Vector};
use distcol3d::model::CollisionModel;
use distcol3d::shape::InvalidGeometry;
use na::RealField;

fn rot_z(angle: Real) -> Rotation<Real> {
    Rotation::from_axis_angle(&Vector::z_axis(), angle)
}

fn placed(pos: &Point<Real>, rot: &Rotation<Real>) -> Isometry<Real> {
    Isometry::from_parts(Translation::from(pos.coords), *rot)
}

#[test]
fn rotated_cube_aabb() {
    let mut model = CollisionModel::new();
    let _ = model
        .add_cuboid(1.0, 1.0, 1.0, &Point::origin(), &rot_z(Real::frac_pi_4()))
        .unwrap();

    let sqrt2 = Real::sqrt(2.0);
    let aabb = model.aabb().unwrap();
    assert_relative_eq!(aabb.mins, Point::new(-sqrt2, -sqrt2, -1.0), epsilon = 1.0e-5);
    assert_relative_eq!(aabb.maxs, Point::new(sqrt2, sqrt2, 1.0), epsilon = 1.0e-5);
}

#[test]
fn ball_aabb() {
    let mut model = CollisionModel::new();
    let _ = model.add_ball(1.0, &Point::new(2.0, 0.0, 0.0)).unwrap();

    let aabb = model.aabb().unwrap();
    assert_eq!(aabb.mins, Point::new(1.0, -1.0, -1.0));
    assert_eq!(aabb.maxs, Point::new(3.0, 1.0, 1.0));
}

#[test]
fn model_aabb_is_union_of_shape_extents() {
    let box_pos = Point::new(1.0, -2.0, 0.5);
    let box_rot = Rotation::from_euler_angles(0.3, -0.2, 1.1);
    let half = Vector::new(0.5, 1.5, 0.25);

    let ball_center = Point::new(-3.0, 1.0, 2.0);
    let radius = 0.75;

    let tri = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 2.0, 1.0),
    ];
    let tri_pos = Point::new(4.0, 4.0, -4.0);
    let tri_rot = Rotation::from_euler_angles(-0.7, 0.4, 0.0);

    let mut model = CollisionModel::new();
    let _ = model
        .add_cuboid(half.x, half.y, half.z, &box_pos, &box_rot)
        .unwrap();
    let _ = model.add_ball(radius, &ball_center).unwrap();
    let _ = model
        .add_triangle(tri[0], tri[1], tri[2], &tri_pos, &tri_rot)
        .unwrap();

    // Explicit enumeration of every extremal point.
    let mut points = Vec::new();
    let box_iso = placed(&box_pos, &box_rot);
    for sx in [-1.0, 1.0] {
        for sy in [-1.0, 1.0] {
            for sz in [-1.0, 1.0] {
                let corner = Point::new(sx * half.x, sy * half.y, sz * half.z);
                points.push(box_iso * corner);
            }
        }
    }
    points.push(ball_center + Vector::repeat(radius));
    points.push(ball_center - Vector::repeat(radius));
    let tri_iso = placed(&tri_pos, &tri_rot);
    points.extend(tri.iter().map(|pt| tri_iso * pt));

    let expected = Aabb::from_points(points);
    let aabb = model.aabb().unwrap();
    assert_relative_eq!(aabb.mins, expected.mins, epsilon = 1.0e-5);
    assert_relative_eq!(aabb.maxs, expected.maxs, epsilon = 1.0e-5);
    assert_eq!(model.num_shapes(), 3);
}

#[test]
fn rejected_cuboid_leaves_aabb_unchanged() {
    let mut model = CollisionModel::new();
    let _ = model.add_ball(2.0, &Point::new(1.0, 1.0, 1.0)).unwrap();
    let before = model.tracked_aabb();

    assert_eq!(
        model.add_cuboid(-1.0, 1.0, 1.0, &Point::origin(), &Rotation::identity()),
        Err(InvalidGeometry::NegativeHalfExtent {
            axis: 0,
            value: -1.0
        })
    );
    assert_eq!(model.tracked_aabb(), before);
    assert_eq!(model.num_shapes(), 1);
}

#[test]
fn rejection_on_empty_model_keeps_it_empty() {
    let mut model = CollisionModel::new();
    assert!(model
        .add_cuboid(1.0, -1.0, 1.0, &Point::new(9.0, 9.0, 9.0), &Rotation::identity())
        .is_err());

    assert_eq!(model.aabb(), None);
    assert_eq!(model.aabb_or_degenerate(), Aabb::zero());
}

#[test]
fn empty_model_query_is_degenerate() {
    let model = CollisionModel::new();
    let aabb = model.aabb_or_degenerate();

    assert_eq!(aabb.mins, aabb.maxs);
    assert!(!model.tracked_aabb().valid);
    assert_eq!(model.aabb(), None);
}

#[test]
fn contained_shape_leaves_aabb_unchanged() {
    let mut model = CollisionModel::new();
    let _ = model
        .add_cuboid(5.0, 5.0, 5.0, &Point::origin(), &Rotation::identity())
        .unwrap();
    let before = model.aabb().unwrap();

    let _ = model.add_ball(1.0, &Point::new(1.0, -2.0, 3.0)).unwrap();
    let _ = model
        .add_triangle(
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            &Point::new(-2.0, 2.0, 0.0),
            &rot_z(0.3),
        )
        .unwrap();

    assert_eq!(model.aabb().unwrap(), before);
}

#[test]
fn inserting_never_shrinks_aabb() {
    let mut model = CollisionModel::new();
    let _ = model.add_ball(1.0, &Point::origin()).unwrap();
    let mut previous = model.aabb().unwrap();

    for i in 0..10 {
        let t = i as Real;
        let _ = model
            .add_cuboid(0.1 * t, 0.2, 0.3, &Point::new(t, -t, 0.5 * t), &rot_z(t))
            .unwrap();
        let current = model.aabb().unwrap();
        assert!(current.contains(&previous));
        previous = current;
    }
}

#[test]
fn small_triangle_is_not_degenerate() {
    let mut model = CollisionModel::new();
    let index = model.add_triangle(
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0e-3, 0.0, 0.0),
        Point::new(0.0, 1.0e-3, 0.0),
        &Point::origin(),
        &Rotation::identity(),
    );
    assert_eq!(index, Ok(0));

    let aabb = model.aabb().unwrap();
    assert_eq!(aabb.mins, Point::new(0.0, 0.0, 0.0));
    assert_eq!(aabb.maxs, Point::new(1.0e-3, 1.0e-3, 0.0));

    assert_eq!(
        model.add_triangle(
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(2.0, 1.0e-15, 0.0),
            &Point::origin(),
            &Rotation::identity(),
        ),
        Err(InvalidGeometry::DegenerateTriangle)
    );
    assert_eq!(model.num_shapes(), 1);
}
