//! A box shape placed in world space.

use crate::math::{Matrix, Point, Pose, Real, Vector, DIM};
use crate::shape::BoxShape;

/// An oriented box (OBB): a [`BoxShape`] together with the world-space frame given by a pose.
///
/// The rotation matrix is extracted once at construction so that the same box can be
/// tested against many others without converting its quaternion again.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct OrientedBox {
    /// The world-space center of the box.
    pub center: Point,
    /// The box's local axes expressed in world space, one per column.
    pub axes: Matrix,
    /// The half-extents of the box along each of its local axes.
    pub half_extents: Vector,
}

impl OrientedBox {
    /// Places `shape` in world space with `pose`.
    #[inline]
    pub fn new(shape: &BoxShape, pose: &Pose) -> OrientedBox {
        OrientedBox {
            center: Point::from(pose.translation.vector),
            axes: pose.rotation.to_rotation_matrix().into_inner(),
            half_extents: shape.half_extents,
        }
    }

    /// The `i`-th local axis of this box, in world space.
    #[inline]
    pub fn axis(&self, i: usize) -> Vector {
        self.axes.column(i).into_owned()
    }

    /// The radius of this box's projection on the world-space direction `dir`.
    ///
    /// `dir` does not need to be normalized; the result scales with its norm.
    #[inline]
    pub fn projected_radius(&self, dir: &Vector) -> Real {
        let local_dir = self.axes.tr_mul(dir);
        BoxShape::new(self.half_extents).local_projected_radius(&local_dir)
    }

    /// Checks if `pt`, given in world space, lies inside or on the boundary of this box.
    pub fn contains_point(&self, pt: &Point) -> bool {
        let local = self.axes.tr_mul(&(pt - self.center));
        (0..DIM).all(|i| local[i].abs() <= self.half_extents[i])
    }

    /// The 8 vertices of this box, in world space.
    pub fn vertices(&self) -> [Point; 8] {
        BoxShape::new(self.half_extents)
            .local_vertices()
            .map(|pt| self.center + self.axes * pt.coords)
    }
}
