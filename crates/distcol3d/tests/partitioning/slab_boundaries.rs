use distcol3d::bounding_volume::Aabb;
use distcol3d::math::{Point, Real};
use distcol3d::partitioning::{Decomposition, SlabDecomposition};

fn x_range(min: Real, max: Real) -> Aabb {
    Aabb::new(Point::new(min, 0.0, 0.0), Point::new(max, 1.0, 1.0))
}

fn two_slabs() -> SlabDecomposition {
    SlabDecomposition::new(0, vec![0.0, 5.0, 10.0]).unwrap()
}

#[test]
fn straddling_body_intersects_both_slabs() {
    let classification = two_slabs().classify(&x_range(4.0, 6.0));
    assert_eq!(classification.subdomains(), &[0, 1]);
    assert!(classification.is_shared());
}

#[test]
fn interior_body_intersects_one_slab() {
    let classification = two_slabs().classify(&x_range(0.0, 4.0));
    assert_eq!(classification.subdomains(), &[0]);
    assert!(!classification.is_shared());
}

#[test]
fn body_starting_on_boundary_belongs_to_upper_slab_only() {
    assert_eq!(two_slabs().classify(&x_range(5.0, 7.0)).subdomains(), &[1]);
}

#[test]
fn body_ending_on_boundary_touches_upper_slab() {
    assert_eq!(two_slabs().classify(&x_range(3.0, 5.0)).subdomains(), &[0, 1]);
}

#[test]
fn other_axes_are_ignored() {
    let slabs = two_slabs();
    let tall = Aabb::new(Point::new(1.0, -1.0e6, -1.0e6), Point::new(2.0, 1.0e6, 1.0e6));
    assert_eq!(slabs.classify(&tall).subdomains(), &[0]);
}

#[test]
fn classification_is_replicated_identically() {
    // Two nodes building the same decomposition independently agree on every body.
    let node_a = SlabDecomposition::uniform(0, -10.0, 10.0, 8).unwrap();
    let node_b = SlabDecomposition::uniform(0, -10.0, 10.0, 8).unwrap();

    for i in 0..40 {
        let x = -10.0 + i as Real * 0.5;
        let aabb = x_range(x, x + 1.3);
        assert_eq!(node_a.classify(&aabb), node_b.classify(&aabb));
    }
}
