use crate::query::{intersection_test_oriented_box_oriented_box, OverlapResult, QueryRegion};
use crate::scene::Body;
use core::num::NonZeroUsize;

/// The number of hits a query stores when the caller has no better estimate.
pub const DEFAULT_OVERLAP_CAPACITY: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(capacity) => capacity,
    None => panic!("the default overlap capacity must be non-zero"),
};

/// Finds the bodies intersecting the query region.
///
/// Bodies are tested in iteration order with an exact oriented box test: touching bodies
/// are reported. The first `capacity` intersecting bodies are stored as hits, in that same
/// order. The scan always covers every body, so the returned result also knows how many
/// matches were left out (see [`OverlapResult::is_truncated`]).
///
/// The query is a pure function of its inputs: the same region, bodies and capacity always
/// yield the same result.
///
/// # Example
///
/// ```
/// use overlap3d::math::{Pose, Vector};
/// use overlap3d::query::{overlap, QueryRegion, DEFAULT_OVERLAP_CAPACITY};
/// use overlap3d::scene::BodyRegistry;
/// use overlap3d::shape::BoxShape;
///
/// let mut registry = BodyRegistry::new();
/// registry.insert("near", BoxShape::cube(0.5), Pose::translation(1.0, 0.0, 0.0)).unwrap();
/// registry.insert("far", BoxShape::cube(0.5), Pose::translation(10.0, 0.0, 0.0)).unwrap();
///
/// let region = QueryRegion::new(BoxShape::cube(1.0), Pose::identity());
/// let result = overlap(&region, registry.snapshot(), DEFAULT_OVERLAP_CAPACITY);
///
/// assert_eq!(result.len(), 1);
/// assert_eq!(result.hits()[0].body_id(), "near");
/// ```
pub fn overlap<'a>(
    region: &QueryRegion,
    bodies: impl IntoIterator<Item = &'a Body>,
    capacity: NonZeroUsize,
) -> OverlapResult {
    overlap_with_filter(region, bodies, capacity, |_| true)
}

/// Same as [`overlap`], but only considers the bodies accepted by `filter`.
///
/// Rejected bodies are neither tested nor counted in
/// [`OverlapResult::total_matches`].
pub fn overlap_with_filter<'a>(
    region: &QueryRegion,
    bodies: impl IntoIterator<Item = &'a Body>,
    capacity: NonZeroUsize,
    mut filter: impl FnMut(&Body) -> bool,
) -> OverlapResult {
    let query_box = region.oriented_box();
    let mut result = OverlapResult::new(capacity);

    for body in bodies {
        if !filter(body) {
            continue;
        }

        if intersection_test_oriented_box_oriented_box(&query_box, &body.oriented_box()) {
            let stored = result.record_match(body);
            log::trace!("Body `{}` overlaps the query region (stored: {stored}).", body.id());
        }
    }

    if result.is_truncated() {
        log::debug!(
            "Overlap query truncated: {} matches for a capacity of {}.",
            result.total_matches(),
            capacity
        );
    }

    result
}
