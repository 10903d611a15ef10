pub mod entities;
pub mod requests;

pub use entities::{Student, StudentCourseGrade};
pub use requests::StudentRequest;
