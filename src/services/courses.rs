use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::client::{ApiClient, OnFailure, Operation, Outcome};
use crate::models::CreatedRecord;
use crate::models::courses::Course;

impl ApiClient {
    // 添加课程
    pub async fn add_course<P: Serialize + ?Sized>(
        &self,
        course: &P,
        on_failure: OnFailure,
    ) -> Outcome<CreatedRecord> {
        debug!("Adding course");
        self.send(Operation::AddCourse, Method::POST, &["courses"], course, on_failure)
            .await
    }

    // 获取课程列表
    pub async fn list_courses(&self, on_failure: OnFailure) -> Outcome<Vec<Course>> {
        self.get(Operation::ListCourses, &["courses"], on_failure)
            .await
    }

    // 更新课程
    pub async fn update_course<P: Serialize + ?Sized>(
        &self,
        course_id: i64,
        course: &P,
        on_failure: OnFailure,
    ) -> Outcome<Value> {
        let id = course_id.to_string();
        debug!("Updating course {}", id);
        self.send(
            Operation::UpdateCourse,
            Method::PUT,
            &["courses", id.as_str()],
            course,
            on_failure,
        )
        .await
    }

    // 删除课程
    pub async fn delete_course(&self, course_id: i64, on_failure: OnFailure) -> Outcome<Value> {
        let id = course_id.to_string();
        debug!("Deleting course {}", id);
        self.delete(Operation::DeleteCourse, &["courses", id.as_str()], on_failure)
            .await
    }
}
