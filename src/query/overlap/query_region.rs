use crate::math::{pose_from_euler_degrees, Pose, Real, Vector};
use crate::shape::{BoxShape, OrientedBox};

/// The box-shaped region of space an overlap query looks into.
///
/// A query region is built for one query and never stored by the scene.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct QueryRegion {
    /// The shape of the region, in its local frame.
    pub shape: BoxShape,
    /// The world pose of the region.
    pub pose: Pose,
}

impl QueryRegion {
    /// Creates a query region from a box shape and its world pose.
    #[inline]
    pub fn new(shape: BoxShape, pose: Pose) -> Self {
        Self { shape, pose }
    }

    /// Creates a query region whose orientation is given by Euler angles in degrees.
    ///
    /// See [`build_rotation`](crate::math::build_rotation) for the angle conventions.
    pub fn from_euler_degrees(
        shape: BoxShape,
        position: Vector,
        pitch_deg: Real,
        yaw_deg: Real,
        roll_deg: Real,
    ) -> Self {
        Self::new(
            shape,
            pose_from_euler_degrees(position, pitch_deg, yaw_deg, roll_deg),
        )
    }

    /// This region's box placed in world space.
    #[inline]
    pub fn oriented_box(&self) -> OrientedBox {
        OrientedBox::new(&self.shape, &self.pose)
    }
}
