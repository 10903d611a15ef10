use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::client::{ApiClient, OnFailure, Operation, Outcome};
use crate::models::grades::{CourseGradeSheet, SaveCourseGradesRequest, SaveGradesRequest};

impl ApiClient {
    // 批量保存某个学生的成绩
    pub async fn save_grades<G: Serialize>(
        &self,
        student_id: &str,
        grades: &[G],
        on_failure: OnFailure,
    ) -> Outcome<Value> {
        debug!("Saving {} grade(s) for student {}", grades.len(), student_id);
        let body = SaveGradesRequest { student_id, grades };
        self.send(Operation::SaveGrades, Method::POST, &["grades"], &body, on_failure)
            .await
    }

    // 获取所有课程的成绩单
    pub async fn list_course_grades(&self, on_failure: OnFailure) -> Outcome<Vec<CourseGradeSheet>> {
        self.get(Operation::ListCourseGrades, &["course-grades"], on_failure)
            .await
    }

    // 按课程批量保存成绩
    pub async fn save_course_grades<G: Serialize>(
        &self,
        grades: &[G],
        on_failure: OnFailure,
    ) -> Outcome<Value> {
        debug!("Saving {} course grade(s)", grades.len());
        let body = SaveCourseGradesRequest { grades };
        self.send(
            Operation::SaveCourseGrades,
            Method::POST,
            &["course-grades"],
            &body,
            on_failure,
        )
        .await
    }
}
