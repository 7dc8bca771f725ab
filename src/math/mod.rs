//! Linear algebra type aliases and rigid-pose helpers.

pub use self::euler::{build_rotation, pose_from_euler_degrees, wrap_angle};

use na::{Isometry3, Matrix3, Point3, Translation3, UnitQuaternion, Vector3};

mod euler;

/// The scalar type used throughout this crate.
#[cfg(feature = "f64")]
pub type Real = f64;

/// The scalar type used throughout this crate.
#[cfg(not(feature = "f64"))]
pub type Real = f32;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The dimension of the space.
pub const DIM: usize = 3;

/// The point type.
pub type Point = Point3<Real>;

/// The vector type, used for positions and box half-extents.
pub type Vector = Vector3<Real>;

/// The matrix type.
pub type Matrix = Matrix3<Real>;

/// The rotation type: a unit quaternion.
pub type Rotation = UnitQuaternion<Real>;

/// The translation type.
pub type Translation = Translation3<Real>;

/// A rigid transform from a shape's local space to world space.
///
/// Points are rotated first, then translated.
pub type Pose = Isometry3<Real>;

/// Returns `true` if every component of `pose` is finite.
///
/// Poses built from NaN or infinite inputs make every separating-axis comparison
/// indeterminate, so callers should check this before inserting bodies or
/// running queries.
pub fn pose_is_finite(pose: &Pose) -> bool {
    pose.translation.vector.iter().all(|e| e.is_finite())
        && pose.rotation.coords.iter().all(|e| e.is_finite())
}
