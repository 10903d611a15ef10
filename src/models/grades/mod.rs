pub mod entities;
pub mod requests;

pub use entities::{CourseGradeSheet, CourseGradeStudent};
pub use requests::{CourseGradeEntry, GradeEntry, SaveCourseGradesRequest, SaveGradesRequest};
