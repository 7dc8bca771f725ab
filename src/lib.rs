/*!
overlap3d
=========

**overlap3d** answers overlap queries in a 3-dimensional scene of static,
oriented boxes: given a query box placed by a rigid pose, it reports which
registered bodies intersect it, with their identity and world pose.

The pieces, leaves first:

- [`math::build_rotation`] turns three Euler angles (degrees) into a unit quaternion.
- [`scene::BodyRegistry`] owns the static bodies, keyed by id, in insertion order.
- [`query::intersection_test_box_box`] is the exact separating-axis test between two oriented boxes.
- [`query::overlap`] scans a body snapshot and fills a capacity-bounded [`query::OverlapResult`].
- [`query::run_query`] glues the above together for one query call.

```
use core::num::NonZeroUsize;
use overlap3d::math::{build_rotation, Pose, Vector};
use overlap3d::query::run_query;
use overlap3d::scene::BodyRegistry;
use overlap3d::shape::BoxShape;

let mut registry = BodyRegistry::new();
let pose = Pose::from_parts(Vector::new(0.1, 0.2, 0.3).into(), build_rotation(45.0, 0.0, 0.0));
registry.insert("Cube1", BoxShape::new(Vector::new(1.0, 1.0, 1.0)), pose).unwrap();

let query_pose = Pose::from_parts(Vector::new(0.5, 0.6, 0.7).into(), build_rotation(-45.0, 0.0, 0.0));
let capacity = NonZeroUsize::new(10).unwrap();
let result = run_query(&BoxShape::new(Vector::repeat(2.0)), &query_pose, &registry, capacity);

assert!(result.has_match());
assert_eq!(result.hits()[0].body_id(), "Cube1");
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod math;
pub mod query;
pub mod scene;
pub mod shape;
