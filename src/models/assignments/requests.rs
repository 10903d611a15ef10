use serde::Serialize;

// 发布作业请求
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentRequest {
    pub course_id: i64,
    pub title: String,
    pub content: String,
}

// 修改作业请求
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentUpdate {
    pub title: String,
    pub content: String,
}
