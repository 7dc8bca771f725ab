use crate::math::Vector;

/// Errors raised when inserting a body into a [`BodyRegistry`](crate::scene::BodyRegistry).
///
/// A failed insertion leaves the registry unchanged.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum RegistryError {
    /// A body with the same id is already registered.
    #[error("a body with id `{0}` is already registered")]
    DuplicateId(String),
    /// At least one half-extent of the body's shape is zero, negative or NaN.
    #[error("the body `{id}` has a non-positive half-extent: {half_extents:?}")]
    InvalidShape {
        /// The id of the rejected body.
        id: String,
        /// The rejected half-extents.
        half_extents: Vector,
    },
}
