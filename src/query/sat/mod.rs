//! Application of the Separating Axis Theorem (SAT) to oriented boxes.
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto which
//! their projections do not overlap. For two boxes in 3D, only 15 candidate axes need to
//! be checked:
//!
//! - the 3 face normals of the first box,
//! - the 3 face normals of the second box,
//! - the 9 cross products of one edge direction of each box.
//!
//! Every function here returns a signed separation along the best axis it examined:
//!
//! - **positive**: the boxes are separated by this distance along that axis,
//! - **zero**: the boxes are exactly touching,
//! - **negative**: the projections overlap (by the absolute value).
//!
//! Touching boxes count as intersecting, so a box pair is disjoint only when some axis
//! yields a separation above [`box_box_contact_tolerance`], a bound on the rounding error
//! scaled to the size of the pair.
//!
//! # Example
//!
//! ```
//! use overlap3d::math::{Pose, Vector};
//! use overlap3d::query::sat::box_box_find_separating_normal_oneway;
//! use overlap3d::shape::{BoxShape, OrientedBox};
//!
//! let box1 = OrientedBox::new(&BoxShape::cube(1.0), &Pose::identity());
//! let box2 = OrientedBox::new(&BoxShape::cube(0.5), &Pose::translation(2.5, 0.0, 0.0));
//!
//! let (separation, normal) = box_box_find_separating_normal_oneway(&box1, &box2);
//! assert_eq!(separation, 1.0);
//! assert_eq!(normal, Vector::x());
//! ```

pub use self::sat_box_box::*;

mod sat_box_box;
