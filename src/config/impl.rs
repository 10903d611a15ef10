use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::{ApiConfig, AppConfig};

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 内置默认值，保证无配置文件时也能启动
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("api.scheme", "http")?
            .set_default("api.host", "127.0.0.1:5000")?
            .set_default("api.path_prefix", "/api")?
            .set_default("api.session_cookie", "")?
            .set_default(
                "api.user_agent",
                concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
            )?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("EDUSYS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("api.host", std::env::var("API_HOST").ok())?
            .set_override_option("api.session_cookie", std::env::var("SESSION_COOKIE").ok())?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 规范化 API 前缀：保证以 / 开头且不以 / 结尾
        app_config.api.path_prefix = normalize_prefix(&app_config.api.path_prefix);

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }
}

impl ApiConfig {
    /// API 基础地址，例如 `http://127.0.0.1:5000/api`
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}{}",
            self.scheme,
            self.host,
            normalize_prefix(&self.path_prefix)
        )
    }

    /// 预置的会话 Cookie (如果配置了)
    pub fn session_cookie(&self) -> Option<&str> {
        if self.session_cookie.is_empty() {
            None
        } else {
            Some(&self.session_cookie)
        }
    }
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
