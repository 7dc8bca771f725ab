use crate::math::{Real, Vector, DEFAULT_EPSILON, DIM};
use crate::shape::OrientedBox;

/// Computes the separation distance between two oriented boxes along a given world-space axis.
///
/// The axis is first flipped, if needed, so it points from the center of `box1` toward the
/// center of `box2`. The separation is then the distance between the two centers projected
/// on that axis, minus the projected radii of both boxes.
///
/// `axis` must be normalized for the returned separation to be a distance. Its sign does
/// not matter, and swapping `box1` with `box2` gives exactly the same separation.
///
/// # Returns
///
/// A tuple containing:
/// - `Real`: the signed separation along the axis (positive = separated, zero = touching,
///   negative = overlapping).
/// - `Vector`: the oriented axis, pointing from `box1` toward `box2`.
pub fn box_box_compute_separation_wrt_axis(
    box1: &OrientedBox,
    box2: &OrientedBox,
    axis: &Vector,
) -> (Real, Vector) {
    let dcenter = box2.center - box1.center;
    #[allow(clippy::unnecessary_cast)]
    let signum = (1.0 as Real).copysign(dcenter.dot(axis));
    let axis = axis * signum;
    let radii = box1.projected_radius(&axis) + box2.projected_radius(&axis);
    (dcenter.dot(&axis) - radii, axis)
}

/// Relative factor applied to the size of a box pair to obtain its contact tolerance.
pub const CONTACT_TOLERANCE_FACTOR: Real = 16.0 * DEFAULT_EPSILON;

/// The largest separation still treated as contact between `box1` and `box2`.
///
/// Projections of rotated boxes carry a rounding error proportional to the distance
/// between the centers and to the box sizes, so two boxes sharing a face may come out
/// separated by a few ulps. Any separation at or below this tolerance counts as touching.
///
/// The value does not change when the two boxes are swapped.
pub fn box_box_contact_tolerance(box1: &OrientedBox, box2: &OrientedBox) -> Real {
    let dcenter = box2.center - box1.center;
    let extents = box1.half_extents.norm() + box2.half_extents.norm();
    CONTACT_TOLERANCE_FACTOR * (dcenter.norm() + extents)
}

/// Finds the best separating axis among the face normals of `box1`.
///
/// This is the "one-way" test: only the 3 local axes of `box1` are tried. A complete SAT
/// test also needs the face normals of `box2` (call this again with the arguments swapped)
/// and, in 3D, the edge-edge axes given by [`box_box_find_separating_edge_twoway`].
///
/// # Returns
///
/// The maximum separation found among `box1`'s face normals and the corresponding axis,
/// pointing from `box1` toward `box2`.
pub fn box_box_find_separating_normal_oneway(
    box1: &OrientedBox,
    box2: &OrientedBox,
) -> (Real, Vector) {
    let mut best_separation = -Real::MAX;
    let mut best_dir = Vector::zeros();

    for i in 0..DIM {
        let (separation, axis) = box_box_compute_separation_wrt_axis(box1, box2, &box1.axis(i));

        if separation > best_separation {
            best_separation = separation;
            best_dir = axis;
        }
    }

    (best_separation, best_dir)
}

/// Finds the best separating axis among the 9 cross products of one edge direction of each box.
///
/// Edge directions of a box are its local axes, so the candidates are
/// `box1.axis(i).cross(&box2.axis(j))` for every `i` and `j`. Pairs of (nearly) parallel
/// edges give a cross product with a norm at or below [`DEFAULT_EPSILON`]: such an axis
/// carries no information and is skipped rather than tested.
///
/// # Returns
///
/// The maximum separation found among the non-degenerate edge-edge axes and the
/// corresponding axis. If every candidate is degenerate (both boxes have parallel axes),
/// the separation is `-Real::MAX` and the axis is zero: the face normals alone then decide.
pub fn box_box_find_separating_edge_twoway(
    box1: &OrientedBox,
    box2: &OrientedBox,
) -> (Real, Vector) {
    let mut best_separation = -Real::MAX;
    let mut best_dir = Vector::zeros();

    // We have 3 * 3 = 9 axes to test.
    for i in 0..DIM {
        let edge1 = box1.axis(i);

        for j in 0..DIM {
            let axis = edge1.cross(&box2.axis(j));
            let norm = axis.norm();

            if norm > DEFAULT_EPSILON {
                let (separation, axis) =
                    box_box_compute_separation_wrt_axis(box1, box2, &(axis / norm));

                if separation > best_separation {
                    best_separation = separation;
                    best_dir = axis;
                }
            }
        }
    }

    (best_separation, best_dir)
}

/// Finds the best separating axis among all 15 SAT candidate axes of two oriented boxes.
///
/// Unlike [`intersection_test_box_box`](crate::query::intersection_test_box_box), this does
/// not stop at the first separating axis: it always reports the largest separation, which
/// is the penetration depth (negated) when the boxes overlap. The returned axis points
/// from `box1` toward `box2`.
pub fn box_box_find_separating_axis(box1: &OrientedBox, box2: &OrientedBox) -> (Real, Vector) {
    let (sep2, dir2) = box_box_find_separating_normal_oneway(box2, box1);
    let candidates = [
        box_box_find_separating_normal_oneway(box1, box2),
        (sep2, -dir2),
        box_box_find_separating_edge_twoway(box1, box2),
    ];

    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.0 > best.0 {
            best = *candidate;
        }
    }

    best
}
