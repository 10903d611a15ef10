//! 传输层包装
//!
//! 把 HTTP 响应统一规整为 [`ApiResponse`]：
//! - 非 JSON 响应一律视为协议错误（与状态码无关）
//! - 非 2xx 或 `success: false` 视为业务错误，优先使用服务端给出的 message
//! - 其余情况原样返回信封

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use crate::errors::{EduClientError, Result};
use crate::models::ApiResponse;

/// 日志中保留的非 JSON 响应体长度上限
const BODY_LOG_LIMIT: usize = 512;

pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(|value| value.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false)
}

/// 解析响应信封（data 尚未定型）
pub fn decode_envelope(
    status: StatusCode,
    content_type: Option<&str>,
    body: &[u8],
) -> Result<ApiResponse<Value>> {
    if !is_json_content_type(content_type) {
        let text = String::from_utf8_lossy(body);
        let preview: String = text.chars().take(BODY_LOG_LIMIT).collect();
        error!(
            "Non-JSON response (status {}, content type {:?}): {}",
            status.as_u16(),
            content_type,
            preview
        );
        return Err(EduClientError::protocol("non-JSON response"));
    }

    let envelope: ApiResponse<Value> = serde_json::from_slice(body)
        .map_err(|e| EduClientError::protocol(format!("Malformed response envelope: {e}")))?;

    debug!(
        "Server response: status={} success={} message={:?}",
        status.as_u16(),
        envelope.success,
        envelope.message
    );

    if !status.is_success() || !envelope.success {
        let fallback = format!("HTTP error! status: {}", status.as_u16());
        return Err(EduClientError::application(envelope.message_or(&fallback)));
    }

    Ok(envelope)
}

/// 读取响应并转换为指定数据类型的信封
pub async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<ApiResponse<T>> {
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let body = response
        .bytes()
        .await
        .map_err(|e| EduClientError::network(format!("Failed to read response body: {e}")))?;

    decode_envelope(status, content_type.as_deref(), &body)?.decode_data()
}
