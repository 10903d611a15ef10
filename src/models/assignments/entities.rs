use serde::{Deserialize, Serialize};

use crate::models::common::Extra;

// 作业记录，归属于某门课程
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(default, alias = "assignment_id")]
    pub id: i64,
    #[serde(default)]
    pub course_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}
