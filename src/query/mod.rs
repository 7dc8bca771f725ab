//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`intersection_test_box_box()`] to determine if two oriented boxes are touching or penetrating.
//! * [`overlap()`] to find every body of a scene intersecting a query box.
//! * [`run_query()`] to perform one complete overlap query against a [`BodyRegistry`](crate::scene::BodyRegistry).
//!
//! The [`sat`] module exposes the separating-axis machinery the tests are built upon.

pub use self::intersection_test::{
    intersection_test_box_box, intersection_test_oriented_box_oriented_box,
};
pub use self::overlap::{
    overlap, overlap_with_filter, OverlapHit, OverlapResult, QueryRegion,
    DEFAULT_OVERLAP_CAPACITY,
};
pub use self::session::{run_query, run_query_euler};

mod intersection_test;
mod overlap;
pub mod sat;
mod session;
