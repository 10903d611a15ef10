pub mod requests;

pub use requests::{StudentCourseRequest, TeacherCourseRequest};
