use crate::math::Pose;
use crate::query::OverlapHit;
use crate::scene::RegistryError;
use crate::shape::{BoxShape, OrientedBox};

/// A static body: a named box shape placed in the world by a pose.
///
/// Bodies are created by [`BodyRegistry::insert`](crate::scene::BodyRegistry::insert) and
/// are immutable afterward; to move a body, remove it and insert it again.
///
/// Deserialization goes through the same shape check as insertion.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "BodyDesc")
)]
#[derive(PartialEq, Debug, Clone)]
pub struct Body {
    id: String,
    shape: BoxShape,
    pose: Pose,
}

impl Body {
    /// Creates a body, failing with [`RegistryError::InvalidShape`] if any half-extent of
    /// `shape` is not strictly positive.
    pub(crate) fn try_new(id: String, shape: BoxShape, pose: Pose) -> Result<Self, RegistryError> {
        if !shape.is_valid() {
            return Err(RegistryError::InvalidShape {
                id,
                half_extents: shape.half_extents,
            });
        }

        Ok(Self { id, shape, pose })
    }

    /// The identifier of this body, unique within its registry.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The shape of this body, in its local frame.
    #[inline]
    pub fn shape(&self) -> &BoxShape {
        &self.shape
    }

    /// The world pose of this body.
    #[inline]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// This body's box placed in world space.
    #[inline]
    pub fn oriented_box(&self) -> OrientedBox {
        OrientedBox::new(&self.shape, &self.pose)
    }

    /// The overlap hit reporting this body.
    pub(crate) fn to_hit(&self) -> OverlapHit {
        OverlapHit::new(self.id.clone(), self.pose)
    }
}

/// The unchecked serialized form of a [`Body`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct BodyDesc {
    id: String,
    shape: BoxShape,
    pose: Pose,
}

#[cfg(feature = "serde")]
impl TryFrom<BodyDesc> for Body {
    type Error = RegistryError;

    fn try_from(desc: BodyDesc) -> Result<Self, Self::Error> {
        Self::try_new(desc.id, desc.shape, desc.pose)
    }
}
