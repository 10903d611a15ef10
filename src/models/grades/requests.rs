use serde::Serialize;

// 单门课程成绩
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeEntry {
    pub course_id: i64,
    pub usual_grade: f64,
    pub midterm_grade: f64,
    pub final_grade: f64,
}

// 批量保存某个学生的成绩（POST /grades）
#[derive(Debug, Clone, Serialize)]
pub struct SaveGradesRequest<'a, G> {
    pub student_id: &'a str,
    pub grades: &'a [G],
}

// 按课程录入的成绩，student_id 为学生内部 ID
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseGradeEntry {
    pub student_id: i64,
    pub course_id: i64,
    pub usual_grade: f64,
    pub midterm_grade: f64,
    pub final_grade: f64,
}

// 批量保存课程成绩（POST /course-grades）
#[derive(Debug, Clone, Serialize)]
pub struct SaveCourseGradesRequest<'a, G> {
    pub grades: &'a [G],
}
