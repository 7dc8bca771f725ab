use crate::math::Pose;
use crate::scene::{Body, RegistryError};
use crate::shape::BoxShape;
use indexmap::map::{IndexMap, Slice, Values};

/// The set of static bodies of a scene.
///
/// Bodies are keyed by id and kept in insertion order. That order is the order in which
/// overlap queries report their hits. The registry exclusively owns its bodies; queries
/// only borrow them through a [`BodySnapshot`], so no insertion or removal can happen
/// while a query is scanning.
///
/// The serialized form is the list of bodies in insertion order. Deserializing it inserts
/// each body again, so duplicate ids and invalid shapes are rejected.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Body>", into = "Vec<Body>")
)]
#[derive(Clone, Debug, Default)]
pub struct BodyRegistry {
    bodies: IndexMap<String, Body>,
}

impl BodyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new static body.
    ///
    /// Fails with [`RegistryError::DuplicateId`] if a body with the same id is already
    /// registered, or with [`RegistryError::InvalidShape`] if any half-extent of `shape` is
    /// not strictly positive. On failure, the registry is left untouched.
    ///
    /// The pose is stored as given. It is the caller's responsibility to provide a finite
    /// pose (see [`pose_is_finite`](crate::math::pose_is_finite)).
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        shape: BoxShape,
        pose: Pose,
    ) -> Result<&Body, RegistryError> {
        let id = id.into();

        if self.bodies.contains_key(&id) {
            return Err(RegistryError::DuplicateId(id));
        }

        let body = Body::try_new(id.clone(), shape, pose)?;
        log::debug!("Registering body `{id}` at {:?}.", pose.translation.vector);
        let (index, _) = self.bodies.insert_full(id, body);
        Ok(&self.bodies[index])
    }

    /// Removes the body with the given id, returning it.
    ///
    /// Removing an id that is not registered is a no-op returning `None`. The remaining
    /// bodies keep their relative order.
    pub fn remove(&mut self, id: &str) -> Option<Body> {
        let removed = self.bodies.shift_remove(id);

        if removed.is_some() {
            log::debug!("Removed body `{id}`.");
        }

        removed
    }

    /// The body with the given id, if any.
    pub fn get(&self, id: &str) -> Option<&Body> {
        self.bodies.get(id)
    }

    /// Whether a body with the given id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.bodies.contains_key(id)
    }

    /// The number of registered bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether this registry has no body.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Removes every body.
    pub fn clear(&mut self) {
        self.bodies.clear()
    }

    /// Iterates through the bodies, in insertion order.
    pub fn iter(&self) -> Values<'_, String, Body> {
        self.bodies.values()
    }

    /// A read-only view of every body, in insertion order.
    ///
    /// The snapshot borrows the registry, which therefore cannot be modified while the
    /// snapshot is alive. Use [`BodySnapshot::to_vec`] to keep an owned copy instead.
    pub fn snapshot(&self) -> BodySnapshot<'_> {
        BodySnapshot {
            bodies: self.bodies.as_slice(),
        }
    }
}

impl TryFrom<Vec<Body>> for BodyRegistry {
    type Error = RegistryError;

    /// Builds a registry by inserting every body in order.
    fn try_from(bodies: Vec<Body>) -> Result<Self, Self::Error> {
        let mut registry = Self::new();

        for body in bodies {
            let _ = registry.insert(body.id(), *body.shape(), *body.pose())?;
        }

        Ok(registry)
    }
}

impl From<BodyRegistry> for Vec<Body> {
    fn from(registry: BodyRegistry) -> Self {
        registry.bodies.into_values().collect()
    }
}

impl<'a> IntoIterator for &'a BodyRegistry {
    type Item = &'a Body;
    type IntoIter = Values<'a, String, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A consistent, read-only view of the bodies of a [`BodyRegistry`].
#[derive(Copy, Clone, Debug)]
pub struct BodySnapshot<'a> {
    bodies: &'a Slice<String, Body>,
}

impl<'a> BodySnapshot<'a> {
    /// The number of bodies in this snapshot.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether this snapshot has no body.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// The `i`-th body of this snapshot, in insertion order.
    pub fn get(&self, i: usize) -> Option<&'a Body> {
        self.bodies.get_index(i).map(|(_, body)| body)
    }

    /// Iterates through the bodies of this snapshot, in insertion order.
    pub fn iter(&self) -> Values<'a, String, Body> {
        self.bodies.values()
    }

    /// Clones every body of this snapshot into an owned vector.
    pub fn to_vec(&self) -> Vec<Body> {
        self.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for BodySnapshot<'a> {
    type Item = &'a Body;
    type IntoIter = Values<'a, String, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
