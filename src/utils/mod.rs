pub mod colors;
pub mod formatting;
pub mod path;
pub mod table;

pub use formatting::{duration_label, truncate_course_name, truncate_instructor_name};
