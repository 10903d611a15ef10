use serde::Serialize;

// 学生选课/退课请求，由 (学号, 课程ID) 唯一确定
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentCourseRequest<'a> {
    pub student_id: &'a str,
    pub course_id: i64,
}

// 教师排课请求
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeacherCourseRequest<'a> {
    pub teacher_id: &'a str,
    pub course_id: i64,
}
