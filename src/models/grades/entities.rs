use serde::{Deserialize, Serialize};

// 课程成绩单（GET /course-grades）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseGradeSheet {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub students: Vec<CourseGradeStudent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseGradeStudent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub usual_grade: f64,
    #[serde(default)]
    pub midterm_grade: f64,
    #[serde(default)]
    pub final_grade: f64,
}
