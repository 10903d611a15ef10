use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::client::{ApiClient, OnFailure, Operation, Outcome};
use crate::models::enrollments::StudentCourseRequest;

impl ApiClient {
    // 学生选课
    pub async fn enroll_student(
        &self,
        student_id: &str,
        course_id: i64,
        on_failure: OnFailure,
    ) -> Outcome<Value> {
        debug!("Enrolling student {} in course {}", student_id, course_id);
        let body = StudentCourseRequest {
            student_id,
            course_id,
        };
        self.send(
            Operation::EnrollStudent,
            Method::POST,
            &["student-courses"],
            &body,
            on_failure,
        )
        .await
    }

    // 学生退课，(学号, 课程ID) 放在请求体中
    pub async fn drop_student_course(
        &self,
        student_id: &str,
        course_id: i64,
        on_failure: OnFailure,
    ) -> Outcome<Value> {
        debug!("Dropping course {} for student {}", course_id, student_id);
        let body = StudentCourseRequest {
            student_id,
            course_id,
        };
        self.send(
            Operation::DropStudentCourse,
            Method::DELETE,
            &["student-courses"],
            &body,
            on_failure,
        )
        .await
    }
}
