use serde::Serialize;

// 教师创建/更新请求
#[derive(Debug, Clone, Serialize)]
pub struct TeacherRequest {
    pub name: String,
    pub teacher_id: String,
}
