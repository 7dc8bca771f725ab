use crate::math::Pose;
use crate::query::sat;
use crate::shape::{BoxShape, OrientedBox};

/// Tests whether two boxes, each placed by its own pose, are intersecting.
///
/// Returns `true` if the boxes are touching (faces, edges or corners in contact) or
/// penetrating, and `false` if they are separated by more than the rounding tolerance
/// given by [`box_box_contact_tolerance`](crate::query::sat::box_box_contact_tolerance).
///
/// The test is symmetric: swapping `(pos1, box1)` with `(pos2, box2)` never changes the
/// outcome.
///
/// # Example
///
/// ```
/// use overlap3d::math::Pose;
/// use overlap3d::query::intersection_test_box_box;
/// use overlap3d::shape::BoxShape;
///
/// let unit = BoxShape::cube(0.5);
///
/// // Faces coincide at x = 0.5.
/// assert!(intersection_test_box_box(&Pose::identity(), &unit, &Pose::translation(1.0, 0.0, 0.0), &unit));
/// assert!(!intersection_test_box_box(&Pose::identity(), &unit, &Pose::translation(1.01, 0.0, 0.0), &unit));
/// ```
#[inline]
pub fn intersection_test_box_box(
    pos1: &Pose,
    box1: &BoxShape,
    pos2: &Pose,
    box2: &BoxShape,
) -> bool {
    intersection_test_oriented_box_oriented_box(
        &OrientedBox::new(box1, pos1),
        &OrientedBox::new(box2, pos2),
    )
}

/// Intersection test between boxes already placed in world space.
///
/// The face normals of each box are tested first, then the 9 edge-edge axes. The test
/// stops as soon as one group of axes yields a separation above the contact tolerance.
pub fn intersection_test_oriented_box_oriented_box(box1: &OrientedBox, box2: &OrientedBox) -> bool {
    let tolerance = sat::box_box_contact_tolerance(box1, box2);
    let sep1 = sat::box_box_find_separating_normal_oneway(box1, box2).0;

    if sep1 > tolerance {
        return false;
    }

    let sep2 = sat::box_box_find_separating_normal_oneway(box2, box1).0;
    if sep2 > tolerance {
        return false;
    }

    let sep3 = sat::box_box_find_separating_edge_twoway(box1, box2).0;
    sep3 <= tolerance
}
