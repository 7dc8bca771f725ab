//! Static bodies and the registry that owns them.

pub use self::body::Body;
pub use self::body_registry::{BodyRegistry, BodySnapshot};
pub use self::registry_error::RegistryError;

mod body;
mod body_registry;
mod registry_error;
