//! Box shape described by its half-extents.

use crate::math::{Point, Real, Vector, DIM};

/// Shape of a box, axis-aligned in its own local frame.
///
/// World placement comes from the [`Pose`](crate::math::Pose) of whatever owns the shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct BoxShape {
    /// The half-extents of the box.
    pub half_extents: Vector,
}

impl BoxShape {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive for the box to be accepted by a
    /// [`BodyRegistry`](crate::scene::BodyRegistry); see [`BoxShape::is_valid`].
    #[inline]
    pub fn new(half_extents: Vector) -> BoxShape {
        BoxShape { half_extents }
    }

    /// Creates a cube with the same half-extent along every axis.
    #[inline]
    pub fn cube(half_extent: Real) -> BoxShape {
        BoxShape::new(Vector::repeat(half_extent))
    }

    /// Checks that every half-extent is strictly positive.
    ///
    /// NaN half-extents are rejected too.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.half_extents.iter().all(|e| *e > 0.0)
    }

    /// The radius of this box's projection on the given local-frame direction.
    ///
    /// `dir` does not need to be normalized; the result scales with its norm.
    #[inline]
    pub fn local_projected_radius(&self, dir: &Vector) -> Real {
        self.half_extents.dot(&dir.abs())
    }

    /// The 8 vertices of this box, in its local frame.
    pub fn local_vertices(&self) -> [Point; 8] {
        let he = self.half_extents;
        let mut vertices = [Point::origin(); 8];

        for (i, vertex) in vertices.iter_mut().enumerate() {
            for k in 0..DIM {
                vertex[k] = if i & (1 << k) != 0 { -he[k] } else { he[k] };
            }
        }

        vertices
    }
}
