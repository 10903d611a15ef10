use serde::{Deserialize, Serialize};

use crate::models::common::Extra;

// 课程记录（由服务端维护，客户端只做透传）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub learn_time: Option<String>, // 学时，例如 "48"
    #[serde(default)]
    pub credit: Option<f64>,
    #[serde(default)]
    pub usual_score: Option<i64>, // 平时成绩占比
    #[serde(default)]
    pub midterm_score: Option<i64>, // 期中成绩占比
    #[serde(default)]
    pub final_score: Option<i64>, // 期末成绩占比
    #[serde(default)]
    pub times: Option<String>, // 上课时间
    #[serde(flatten)]
    pub extra: Extra,
}

impl Course {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Default::default()
        }
    }
}
