use serde::Serialize;

// 学生创建/更新请求
#[derive(Debug, Clone, Serialize)]
pub struct StudentRequest {
    pub name: String,
    pub student_id: String,
    pub enrollment_year: i64,
}
