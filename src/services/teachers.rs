use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::client::{ApiClient, OnFailure, Operation, Outcome};
use crate::models::CreatedRecord;
use crate::models::courses::Course;
use crate::models::teachers::Teacher;

impl ApiClient {
    // 添加教师
    pub async fn add_teacher<P: Serialize + ?Sized>(
        &self,
        teacher: &P,
        on_failure: OnFailure,
    ) -> Outcome<CreatedRecord> {
        debug!("Adding teacher");
        self.send(Operation::AddTeacher, Method::POST, &["teachers"], teacher, on_failure)
            .await
    }

    // 获取教师列表
    pub async fn list_teachers(&self, on_failure: OnFailure) -> Outcome<Vec<Teacher>> {
        self.get(Operation::ListTeachers, &["teachers"], on_failure)
            .await
    }

    // 获取教师所授课程
    pub async fn list_teacher_courses(
        &self,
        teacher_id: &str,
        on_failure: OnFailure,
    ) -> Outcome<Vec<Course>> {
        debug!("Loading courses of teacher {}", teacher_id);
        self.get(
            Operation::ListTeacherCourses,
            &["teachers", teacher_id, "courses"],
            on_failure,
        )
        .await
    }

    // 更新教师信息
    //
    // 只负责写入；依赖教师数据的视图刷新见 `Orchestrator::update_teacher`。
    pub async fn update_teacher<P: Serialize + ?Sized>(
        &self,
        teacher_id: &str,
        teacher: &P,
        on_failure: OnFailure,
    ) -> Outcome<Teacher> {
        debug!("Updating teacher {}", teacher_id);
        self.send(
            Operation::UpdateTeacher,
            Method::PUT,
            &["teachers", teacher_id],
            teacher,
            on_failure,
        )
        .await
    }

    // 删除教师
    pub async fn delete_teacher(&self, teacher_id: &str, on_failure: OnFailure) -> Outcome<Value> {
        debug!("Deleting teacher {}", teacher_id);
        self.delete(Operation::DeleteTeacher, &["teachers", teacher_id], on_failure)
            .await
    }
}
