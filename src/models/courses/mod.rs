pub mod entities;
pub mod requests;

pub use entities::Course;
pub use requests::CourseRequest;
