use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::client::{ApiClient, OnFailure, Operation, Outcome};
use crate::models::assignments::Assignment;

impl ApiClient {
    // 发布作业，课程由请求体中的 course_id 指定
    pub async fn add_assignment<P: Serialize + ?Sized>(
        &self,
        assignment: &P,
        on_failure: OnFailure,
    ) -> Outcome<Assignment> {
        debug!("Adding assignment");
        self.send(
            Operation::AddAssignment,
            Method::POST,
            &["assignments"],
            assignment,
            on_failure,
        )
        .await
    }

    // 获取课程下的作业列表
    pub async fn list_course_assignments(
        &self,
        course_id: i64,
        on_failure: OnFailure,
    ) -> Outcome<Vec<Assignment>> {
        let id = course_id.to_string();
        debug!("Loading assignments of course {}", id);
        self.get(Operation::ListAssignments, &["courses", id.as_str(), "assignments"], on_failure)
            .await
    }

    // 修改作业
    pub async fn update_assignment<P: Serialize + ?Sized>(
        &self,
        assignment_id: i64,
        assignment: &P,
        on_failure: OnFailure,
    ) -> Outcome<Value> {
        let id = assignment_id.to_string();
        debug!("Updating assignment {}", id);
        self.send(
            Operation::UpdateAssignment,
            Method::PUT,
            &["assignments", id.as_str()],
            assignment,
            on_failure,
        )
        .await
    }

    // 删除作业
    pub async fn delete_assignment(&self, assignment_id: i64, on_failure: OnFailure) -> Outcome<Value> {
        let id = assignment_id.to_string();
        debug!("Deleting assignment {}", id);
        self.delete(Operation::DeleteAssignment, &["assignments", id.as_str()], on_failure)
            .await
    }
}
