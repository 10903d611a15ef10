//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_client_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum EduClientError {
            $($variant(String),)*
        }

        impl EduClientError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(EduClientError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EduClientError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(EduClientError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl EduClientError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EduClientError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_client_errors! {
    Network("E001", "Network Error"),
    Protocol("E002", "Protocol Error"),
    Application("E003", "Application Error"),
    Serialization("E004", "Serialization Error"),
    Configuration("E005", "Configuration Error"),
}

impl EduClientError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 请求是否根本没有完成（连接失败、读取响应体失败等）
    pub fn is_network(&self) -> bool {
        matches!(self, EduClientError::Network(_))
    }

    /// 服务端是否明确拒绝了请求（`success: false` 或非 2xx）
    pub fn is_application(&self) -> bool {
        matches!(self, EduClientError::Application(_))
    }
}

impl fmt::Display for EduClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EduClientError {}

// 为常见的错误类型实现 From trait
impl From<reqwest::Error> for EduClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            EduClientError::Protocol(err.to_string())
        } else {
            EduClientError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for EduClientError {
    fn from(err: serde_json::Error) -> Self {
        EduClientError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for EduClientError {
    fn from(err: config::ConfigError) -> Self {
        EduClientError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EduClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(EduClientError::network("test").code(), "E001");
        assert_eq!(EduClientError::protocol("test").code(), "E002");
        assert_eq!(EduClientError::application("test").code(), "E003");
        assert_eq!(EduClientError::configuration("test").code(), "E005");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            EduClientError::protocol("test").error_type(),
            "Protocol Error"
        );
        assert_eq!(
            EduClientError::application("test").error_type(),
            "Application Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = EduClientError::application("学号已存在");
        assert_eq!(err.message(), "学号已存在");
        assert!(err.is_application());
        assert!(!err.is_network());
    }

    #[test]
    fn test_format_simple() {
        let err = EduClientError::protocol("non-JSON response");
        let formatted = err.format_simple();
        assert!(formatted.contains("Protocol Error"));
        assert!(formatted.contains("non-JSON response"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let err: EduClientError = serde_json::from_str::<i64>("not a number")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), "E004");
    }
}
