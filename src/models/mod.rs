pub mod assignments;
pub mod common;
pub mod courses;
pub mod enrollments;
pub mod grades;
pub mod students;
pub mod teachers;
pub mod users;

pub use common::{ApiResponse, CreatedRecord};
