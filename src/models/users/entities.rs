use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::common::Extra;

// 当前会话用户信息（GET /current-user）
//
// 服务端可能直接给出 student_id，也可能只给出 username。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default, deserialize_with = "lenient_id")]
    pub student_id: Option<String>, // 数字学号会转换为字符串
    #[serde(default)]
    pub username: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

// 字符串原样保留，数字转为十进制文本，其余类型视为缺失
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(id) => Some(id),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_student_id_accepts_string_or_number() {
        let user: CurrentUser = serde_json::from_value(json!({"student_id": "S7"})).unwrap();
        assert_eq!(user.student_id.as_deref(), Some("S7"));

        let user: CurrentUser = serde_json::from_value(json!({"student_id": 42})).unwrap();
        assert_eq!(user.student_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_missing_or_null_student_id() {
        let user: CurrentUser = serde_json::from_value(json!({"username": "bob"})).unwrap();
        assert_eq!(user.student_id, None);
        assert_eq!(user.username.as_deref(), Some("bob"));

        let user: CurrentUser = serde_json::from_value(json!({"student_id": null})).unwrap();
        assert_eq!(user.student_id, None);
    }
}
