use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{EduClientError, Result};

// 统一的API响应结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 取出数据，失败或无数据时返回 None
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }

    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => message,
            _ => fallback,
        }
    }
}

impl ApiResponse<Value> {
    /// 将未定型的 data 转换为具体类型
    ///
    /// `null` 视为无数据；其余形状不匹配时返回协议错误。
    pub fn decode_data<T: DeserializeOwned>(self) -> Result<ApiResponse<T>> {
        let data = match self.data {
            None | Some(Value::Null) => None,
            Some(value) => Some(serde_json::from_value(value).map_err(|e| {
                EduClientError::protocol(format!("Malformed response data: {e}"))
            })?),
        };
        Ok(ApiResponse {
            success: self.success,
            message: self.message,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_without_message_or_data() {
        let envelope: ApiResponse<Value> = serde_json::from_value(json!({"success": true})).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.message, None);
        assert_eq!(envelope.data, None);
    }

    #[test]
    fn test_decode_data_null_is_none() {
        let envelope = ApiResponse {
            success: true,
            message: None,
            data: Some(Value::Null),
        };
        let typed: ApiResponse<Vec<i64>> = envelope.decode_data().unwrap();
        assert_eq!(typed.data, None);
    }

    #[test]
    fn test_decode_data_shape_mismatch_is_protocol_error() {
        let envelope = ApiResponse {
            success: true,
            message: Some("ok".to_string()),
            data: Some(json!("not a list")),
        };
        let err = envelope.decode_data::<Vec<i64>>().unwrap_err();
        assert_eq!(err.code(), "E002");
    }

    #[test]
    fn test_message_or() {
        let failed = |message: Option<&str>| ApiResponse::<()> {
            success: false,
            message: message.map(str::to_string),
            data: None,
        };
        assert_eq!(failed(None).message_or("fallback"), "fallback");
        assert_eq!(failed(Some("")).message_or("fallback"), "fallback");
        assert_eq!(failed(Some("课程名已存在")).message_or("fallback"), "课程名已存在");
    }
}
