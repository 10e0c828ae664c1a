pub mod category;
pub mod course;
pub mod group_major;
pub mod major;
