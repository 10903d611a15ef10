use serde::{Deserialize, Serialize};

use crate::models::common::Extra;

// 教师记录
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub teacher_id: String, // 工号
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Teacher {
    pub fn new(teacher_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            teacher_id: teacher_id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}
