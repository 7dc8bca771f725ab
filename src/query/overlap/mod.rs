//! Overlap queries of a box against a set of static bodies.

pub use self::overlap::{overlap, overlap_with_filter, DEFAULT_OVERLAP_CAPACITY};
pub use self::overlap_hit::OverlapHit;
pub use self::overlap_result::OverlapResult;
pub use self::query_region::QueryRegion;

mod overlap;
mod overlap_hit;
mod overlap_result;
mod query_region;
