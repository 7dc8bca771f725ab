use crate::math::Pose;
use core::fmt;

/// A body found to intersect the region of an overlap query.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct OverlapHit {
    body_id: String,
    pose: Pose,
}

impl OverlapHit {
    pub(crate) fn new(body_id: String, pose: Pose) -> Self {
        Self { body_id, pose }
    }

    /// The id of the intersecting body.
    #[inline]
    pub fn body_id(&self) -> &str {
        &self.body_id
    }

    /// The world pose of the intersecting body when it was found.
    #[inline]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }
}

impl fmt::Display for OverlapHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.pose.translation.vector;
        write!(
            f,
            "Overlap detected with body: name={} position=({},{},{})",
            self.body_id, p.x, p.y, p.z
        )
    }
}
