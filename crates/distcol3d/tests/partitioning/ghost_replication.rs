use distcol3d::math::{Point, Real, Rotation};
use distcol3d::model::CollisionModel;
use distcol3d::partitioning::{
    classify_model, Decomposition, GridDecomposition, SlabDecomposition,
};

fn body(x: Real, y: Real, half: Real) -> CollisionModel {
    let mut model = CollisionModel::new();
    let _ = model
        .add_cuboid(half, half, half, &Point::new(x, y, 0.0), &Rotation::identity())
        .unwrap();
    model
}

#[test]
fn owner_keeps_body_and_neighbours_get_ghosts() {
    let slabs = SlabDecomposition::covering(0, &[0.0, 10.0]).unwrap();
    let model = body(9.5, 0.0, 1.0);

    let classification = classify_model(&slabs, &model).unwrap();
    let owner = slabs
        .subdomain_containing(&Point::new(9.5, 0.0, 0.0))
        .unwrap();

    assert_eq!(owner, 1);
    assert_eq!(classification.subdomains(), &[1, 2]);
    assert_eq!(classification.ghosts(owner).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn body_in_grid_corner_is_ghosted_on_three_neighbours() {
    let grid = GridDecomposition::new(vec![
        SlabDecomposition::covering(0, &[0.0]).unwrap(),
        SlabDecomposition::covering(1, &[0.0]).unwrap(),
    ])
    .unwrap();
    let model = body(0.25, -0.25, 0.5);

    let classification = classify_model(&grid, &model).unwrap();
    let owner = grid
        .subdomain_containing(&Point::new(0.25, -0.25, 0.0))
        .unwrap();

    assert_eq!(classification.subdomains(), &[0, 1, 2, 3]);
    assert_eq!(owner, 2);
    assert_eq!(classification.ghosts(owner).count(), 3);
}

#[test]
fn well_inside_body_needs_no_ghost() {
    let slabs = SlabDecomposition::covering(1, &[-5.0, 5.0]).unwrap();
    let model = body(100.0, 0.0, 1.0);

    let classification = classify_model(&slabs, &model).unwrap();
    assert_eq!(classification.subdomains(), &[1]);
    assert_eq!(classification.ghosts(1).count(), 0);
}
