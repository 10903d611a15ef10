use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::client::{ApiClient, OnFailure, Operation, Outcome};
use crate::models::enrollments::TeacherCourseRequest;

impl ApiClient {
    // 安排教师课程
    pub async fn assign_teacher_course(
        &self,
        teacher_id: &str,
        course_id: i64,
        on_failure: OnFailure,
    ) -> Outcome<Value> {
        debug!("Scheduling course {} for teacher {}", course_id, teacher_id);
        let body = TeacherCourseRequest {
            teacher_id,
            course_id,
        };
        self.send(
            Operation::AssignTeacherCourse,
            Method::POST,
            &["teacher-courses"],
            &body,
            on_failure,
        )
        .await
    }
}
