//! 各资源的 REST 接口
//!
//! 每个文件为 [`ApiClient`](crate::client::ApiClient) 补充一组资源操作。

pub mod assignments;
pub mod courses;
pub mod enrollments;
pub mod grades;
pub mod identity;
pub mod students;
pub mod teacher_courses;
pub mod teachers;

pub use identity::{DerivedIdentity, match_student_by_name};
