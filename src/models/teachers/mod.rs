pub mod entities;
pub mod requests;

pub use entities::Teacher;
pub use requests::TeacherRequest;
