use serde::{Deserialize, Serialize};

use crate::models::common::Extra;
use crate::models::courses::Course;

// 学生记录
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>, // 内部 ID
    #[serde(default)]
    pub student_id: String, // 学号
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_year: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Student {
    pub fn new(student_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

// 学生已选课程及其成绩（GET /students/{id}/grades）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentCourseGrade {
    #[serde(default)]
    pub usual_grade: Option<f64>,
    #[serde(default)]
    pub midterm_grade: Option<f64>,
    #[serde(default)]
    pub final_grade: Option<f64>,
    #[serde(flatten)]
    pub course: Course,
}
