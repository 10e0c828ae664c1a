pub mod category;
pub mod common;
pub mod course;
pub mod group_major;
pub mod major;
