use serde::Serialize;

// 课程创建/更新请求
#[derive(Debug, Clone, Serialize)]
pub struct CourseRequest {
    pub name: String,
    pub learn_time: String,
    pub credit: f64,
    pub usual_score: i64,
    pub midterm_score: i64,
    pub final_score: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<String>,
}
