//! Boolean intersection tests between oriented boxes.

pub use self::intersection_test_box_box::{
    intersection_test_box_box, intersection_test_oriented_box_oriented_box,
};

mod intersection_test_box_box;
