//! Box shapes, in their local frame and placed in world space.

pub use self::box_shape::BoxShape;
pub use self::oriented_box::OrientedBox;

mod box_shape;
mod oriented_box;
