//! One-call orchestration of an overlap query against a body registry.

use crate::math::{pose_is_finite, Pose, Real, Vector};
use crate::query::{overlap, OverlapResult, QueryRegion};
use crate::scene::BodyRegistry;
use crate::shape::BoxShape;
use core::num::NonZeroUsize;

/// Runs one overlap query of the box `query_shape`, placed at `query_pose`, against every
/// body of `registry`.
///
/// The registry is borrowed for the whole scan, so its content cannot change while the
/// query runs. A non-finite query pose is reported through `log::warn!` but not rejected:
/// the outcome of such a query is unspecified.
pub fn run_query(
    query_shape: &BoxShape,
    query_pose: &Pose,
    registry: &BodyRegistry,
    capacity: NonZeroUsize,
) -> OverlapResult {
    if !pose_is_finite(query_pose) {
        log::warn!("Overlap query with a non-finite pose: {query_pose:?}.");
    }

    let region = QueryRegion::new(*query_shape, *query_pose);
    let result = overlap(&region, registry.snapshot(), capacity);

    log::debug!(
        "Overlap query against {} bodies: {} hits, {} matches.",
        registry.len(),
        result.len(),
        result.total_matches()
    );

    result
}

/// Same as [`run_query`], with the query orientation given as Euler angles in degrees.
///
/// See [`build_rotation`](crate::math::build_rotation) for the angle conventions.
pub fn run_query_euler(
    query_shape: &BoxShape,
    position: Vector,
    [pitch_deg, yaw_deg, roll_deg]: [Real; 3],
    registry: &BodyRegistry,
    capacity: NonZeroUsize,
) -> OverlapResult {
    let region =
        QueryRegion::from_euler_degrees(*query_shape, position, pitch_deg, yaw_deg, roll_deg);
    run_query(&region.shape, &region.pose, registry, capacity)
}
