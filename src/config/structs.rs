use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ApiConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub environment: String,
    pub log_level: String,
}

/// 后端 API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub scheme: String,      // http / https
    pub host: String,        // 当前主机（含端口）
    pub path_prefix: String, // 固定 API 前缀，默认 /api
    #[serde(skip_serializing, default)] // 不输出会话凭据
    pub session_cookie: String, // 预置会话 Cookie（`name=value`），为空时不设置
    pub user_agent: String,
}

impl ApiConfig {
    /// 指向给定主机的默认 API 配置
    pub fn for_host(host: impl Into<String>) -> Self {
        Self {
            scheme: "http".to_string(),
            host: host.into(),
            path_prefix: "/api".to_string(),
            session_cookie: String::new(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
