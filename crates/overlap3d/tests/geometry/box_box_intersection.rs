use approx::assert_relative_eq;
use overlap3d::na::{Matrix3, Rotation3, Translation3, UnitQuaternion};
use overlap3d::math::{build_rotation, Pose, Real, Vector};
use overlap3d::query::intersection_test_box_box;
use overlap3d::query::sat::{
    box_box_find_separating_axis, box_box_find_separating_edge_twoway,
    box_box_find_separating_normal_oneway,
};
use overlap3d::shape::{BoxShape, OrientedBox};

#[test]
fn touching_faces_intersect() {
    let unit = BoxShape::cube(0.5);
    let pos1 = Pose::identity();
    let pos2 = Pose::translation(1.0, 0.0, 0.0);

    assert!(intersection_test_box_box(&pos1, &unit, &pos2, &unit));
    assert!(intersection_test_box_box(&pos2, &unit, &pos1, &unit));
}

#[test]
fn separated_faces_do_not_intersect() {
    let unit = BoxShape::cube(0.5);
    let pos1 = Pose::identity();
    let pos2 = Pose::translation(1.01, 0.0, 0.0);

    assert!(!intersection_test_box_box(&pos1, &unit, &pos2, &unit));
    assert!(!intersection_test_box_box(&pos2, &unit, &pos1, &unit));
}

#[test]
fn rotated_touching_faces_intersect() {
    let unit = BoxShape::cube(0.5);
    let angles: [Real; 6] = [13.0, 30.0, 45.0, 60.0, 77.0, 135.0];

    for angle in angles {
        let mixes = [
            [angle, 0.0, 0.0],
            [0.0, angle, 0.0],
            [0.0, 0.0, angle],
            [angle, angle / 2.0, -angle / 3.0],
        ];

        for [pitch, yaw, roll] in mixes {
            let rot = build_rotation(pitch, yaw, roll);
            let pos1 = Pose::from_parts(Translation3::identity(), rot);

            for i in 0..3 {
                let offset = rot * Vector::ith(i, 1.0);
                let touching = Pose::from_parts(offset.into(), rot);
                let apart = Pose::from_parts((offset * 1.01).into(), rot);

                assert!(
                    intersection_test_box_box(&pos1, &unit, &touching, &unit),
                    "angles ({pitch}, {yaw}, {roll}), axis {i}"
                );
                assert!(intersection_test_box_box(&touching, &unit, &pos1, &unit));
                assert!(!intersection_test_box_box(&pos1, &unit, &apart, &unit));
                assert!(!intersection_test_box_box(&apart, &unit, &pos1, &unit));
            }
        }
    }
}

#[test]
fn touching_corners_intersect() {
    let unit = BoxShape::cube(0.5);
    let pos2 = Pose::translation(1.0, 1.0, 1.0);
    assert!(intersection_test_box_box(&Pose::identity(), &unit, &pos2, &unit));

    let pos2 = Pose::translation(1.0, 1.0, 1.001);
    assert!(!intersection_test_box_box(&Pose::identity(), &unit, &pos2, &unit));
}

#[test]
fn parallel_rotated_boxes_skip_degenerate_edge_axes() {
    // Both boxes are only rotated about X: every x-edge pair is parallel.
    let shape = BoxShape::new(Vector::new(2.0, 0.5, 0.5));
    let pos1 = Pose::from_parts(Translation3::identity(), build_rotation(30.0, 0.0, 0.0));
    let pos2 = Pose::from_parts(
        Translation3::new(3.5, 0.0, 0.0),
        build_rotation(-60.0, 0.0, 0.0),
    );

    let box1 = OrientedBox::new(&shape, &pos1);
    let box2 = OrientedBox::new(&shape, &pos2);
    let (edge_sep, edge_dir) = box_box_find_separating_edge_twoway(&box1, &box2);

    assert!(edge_sep.is_finite());
    assert!((edge_dir.norm() - 1.0).abs() < 1.0e-5);
    assert!(intersection_test_box_box(&pos1, &shape, &pos2, &shape));
}

#[test]
fn nested_boxes_intersect() {
    let outer = BoxShape::cube(10.0);
    let inner = BoxShape::new(Vector::new(0.1, 0.2, 0.3));
    let pos_inner = Pose::from_parts(
        Translation3::new(1.0, -2.0, 3.0),
        build_rotation(12.0, 34.0, 56.0),
    );

    assert!(intersection_test_box_box(
        &Pose::identity(),
        &outer,
        &pos_inner,
        &inner
    ));
    assert!(intersection_test_box_box(
        &pos_inner,
        &inner,
        &Pose::identity(),
        &outer
    ));
}

/// Builds two unit-half-extent cubes that only an edge-edge axis can separate.
///
/// The second cube has one edge along `(1, 1, -1)`, so the cross product with the first
/// cube's x edges is `(0, 1, 1)`, which is not a face normal of either cube. Along that
/// axis, the projected radii add up to about 2.780.
fn skewed_cubes(distance: Real) -> (OrientedBox, OrientedBox) {
    let e = Vector::new(1.0, 1.0, -1.0).normalize();
    let u = Vector::new(1.0, -1.0, 0.0).normalize();
    let w = e.cross(&u);
    let rot = UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(
        Matrix3::from_columns(&[e, u, w]),
    ));
    let center = Vector::new(0.0, 1.0, 1.0).normalize() * distance;

    let cube = BoxShape::cube(1.0);
    (
        OrientedBox::new(&cube, &Pose::identity()),
        OrientedBox::new(&cube, &Pose::from_parts(center.into(), rot)),
    )
}

#[test]
fn edge_edge_axis_separates_skewed_cubes() {
    let (box1, box2) = skewed_cubes(2.9);

    assert!(box_box_find_separating_normal_oneway(&box1, &box2).0 <= 0.0);
    assert!(box_box_find_separating_normal_oneway(&box2, &box1).0 <= 0.0);
    assert!(box_box_find_separating_edge_twoway(&box1, &box2).0 > 0.0);
    assert!(!overlap3d::query::intersection_test_oriented_box_oriented_box(&box1, &box2));
    assert!(!overlap3d::query::intersection_test_oriented_box_oriented_box(&box2, &box1));
}

#[test]
fn skewed_cubes_intersect_when_close() {
    let (box1, box2) = skewed_cubes(2.0);

    // One corner of the second cube lies inside the first one.
    assert!(box2.vertices().iter().any(|pt| box1.contains_point(pt)));
    assert!(overlap3d::query::intersection_test_oriented_box_oriented_box(&box1, &box2));
    assert!(box_box_find_separating_axis(&box1, &box2).0 <= 0.0);
}

fn random_pose(rng: &mut oorandom::Rand32) -> Pose {
    let mut coord = || (rng.rand_float() as Real - 0.5) * 6.0;
    let translation = Translation3::new(coord(), coord(), coord());
    let mut angle = || (rng.rand_float() as Real - 0.5) * 720.0;
    Pose::from_parts(translation, build_rotation(angle(), angle(), angle()))
}

fn random_shape(rng: &mut oorandom::Rand32) -> BoxShape {
    let mut extent = || 0.1 + rng.rand_float() as Real * 1.5;
    BoxShape::new(Vector::new(extent(), extent(), extent()))
}

#[test]
fn intersection_test_is_symmetric() {
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..5000 {
        let (pos1, box1) = (random_pose(&mut rng), random_shape(&mut rng));
        let (pos2, box2) = (random_pose(&mut rng), random_shape(&mut rng));

        assert_eq!(
            intersection_test_box_box(&pos1, &box1, &pos2, &box2),
            intersection_test_box_box(&pos2, &box2, &pos1, &box1),
            "asymmetric outcome for {pos1:?} {box1:?} / {pos2:?} {box2:?}"
        );
    }
}

#[test]
fn contained_vertices_imply_intersection() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..5000 {
        let obb1 = OrientedBox::new(&random_shape(&mut rng), &random_pose(&mut rng));
        let obb2 = OrientedBox::new(&random_shape(&mut rng), &random_pose(&mut rng));

        let vertex_inside = obb1.vertices().iter().any(|pt| obb2.contains_point(pt))
            || obb2.vertices().iter().any(|pt| obb1.contains_point(pt));

        if vertex_inside {
            assert!(overlap3d::query::intersection_test_oriented_box_oriented_box(
                &obb1, &obb2
            ));
        }
    }
}

#[test]
fn separating_axis_bounds_every_vertex_projection() {
    let mut rng = oorandom::Rand32::new(99);

    for _ in 0..2000 {
        let obb1 = OrientedBox::new(&random_shape(&mut rng), &random_pose(&mut rng));
        let obb2 = OrientedBox::new(&random_shape(&mut rng), &random_pose(&mut rng));
        let (separation, axis) = box_box_find_separating_axis(&obb1, &obb2);

        if separation > 1.0e-3 {
            let max1 = obb1
                .vertices()
                .iter()
                .map(|pt| pt.coords.dot(&axis))
                .fold(-Real::MAX, Real::max);
            let min2 = obb2
                .vertices()
                .iter()
                .map(|pt| pt.coords.dot(&axis))
                .fold(Real::MAX, Real::min);

            assert!(min2 - max1 > 0.0);
            assert_relative_eq!(min2 - max1, separation, epsilon = 1.0e-3);
        }
    }
}
