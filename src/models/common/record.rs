use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 服务端记录中未建模的字段，原样保留
pub type Extra = serde_json::Map<String, Value>;

// 创建接口返回的新记录 ID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedRecord {
    pub id: i64,
}
