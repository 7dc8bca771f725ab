use crate::math::{Pose, Real, Rotation, Vector};
use core::f64::consts::PI as PI_F64;

#[allow(clippy::unnecessary_cast)]
const PI: Real = PI_F64 as Real;
const TWO_PI: Real = PI * 2.0;

/// Wraps an angle, in radians, into the half-open interval `[-π, π)`.
///
/// Uses a Euclidean remainder so negative inputs wrap the same way positive ones do.
/// Non-finite inputs yield NaN.
#[inline]
pub fn wrap_angle(angle: Real) -> Real {
    let wrapped = (angle + PI).rem_euclid(TWO_PI) - PI;
    // `rem_euclid` may round up to exactly `TWO_PI` for tiny negative inputs.
    if wrapped >= PI {
        wrapped - TWO_PI
    } else {
        wrapped
    }
}

/// Builds a rotation from three Euler angles given in degrees.
///
/// Each angle is wrapped into `[-π, π)` then turned into an axis-angle quaternion:
/// `pitch` about the X axis, `yaw` about the Y axis and `roll` about the Z axis.
/// The three are composed as `q_pitch * q_yaw * q_roll`. This order is part of the
/// contract: quaternion products do not commute, so `build_rotation(45.0, 30.0, 0.0)`
/// and `build_rotation(30.0, 45.0, 0.0)` are different orientations.
///
/// The result is renormalized. NaN or infinite inputs are not rejected: they propagate
/// as NaN components, and it is up to the caller to validate its inputs (see
/// [`pose_is_finite`](crate::math::pose_is_finite)).
///
/// # Example
///
/// ```
/// use overlap3d::math::{build_rotation, Vector};
///
/// let half = build_rotation(45.0, 0.0, 0.0);
/// let full = build_rotation(90.0, 0.0, 0.0);
/// assert!((half * half * Vector::y() - full * Vector::y()).norm() < 1.0e-5);
/// ```
pub fn build_rotation(pitch_deg: Real, yaw_deg: Real, roll_deg: Real) -> Rotation {
    let pitch = wrap_angle(pitch_deg.to_radians());
    let yaw = wrap_angle(yaw_deg.to_radians());
    let roll = wrap_angle(roll_deg.to_radians());

    let q_pitch = Rotation::from_axis_angle(&Vector::x_axis(), pitch);
    let q_yaw = Rotation::from_axis_angle(&Vector::y_axis(), yaw);
    let q_roll = Rotation::from_axis_angle(&Vector::z_axis(), roll);

    let mut combined = q_pitch * q_yaw * q_roll;
    let _ = combined.renormalize();
    combined
}

/// Builds a pose from a position and three Euler angles given in degrees.
///
/// The orientation is computed with [`build_rotation`].
pub fn pose_from_euler_degrees(
    position: Vector,
    pitch_deg: Real,
    yaw_deg: Real,
    roll_deg: Real,
) -> Pose {
    Pose::from_parts(
        position.into(),
        build_rotation(pitch_deg, yaw_deg, roll_deg),
    )
}
