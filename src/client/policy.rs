use crate::errors::{EduClientError, Result};
use crate::models::ApiResponse;

/// 资源接口的统一返回值
///
/// - `Ok(Some(_))`：请求成功
/// - `Ok(None)`：请求失败但按 [`OnFailure::Suppress`] 吞掉，调用方应视为“操作未发生”
/// - `Err(_)`：请求失败且按 [`OnFailure::Propagate`] 继续抛出
pub type Outcome<T> = Result<Option<ApiResponse<T>>>;

/// 失败处理策略，由调用方逐次指定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnFailure {
    Suppress,
    Propagate,
}

impl OnFailure {
    /// 对已上报的错误应用策略
    pub fn settle<T>(self, err: EduClientError) -> Result<Option<T>> {
        match self {
            OnFailure::Suppress => Ok(None),
            OnFailure::Propagate => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suppress_swallows_errors() {
        let settled: Result<Option<i32>> =
            OnFailure::Suppress.settle(EduClientError::network("connection refused"));
        assert_eq!(settled, Ok(None));
    }

    #[test]
    fn test_propagate_returns_error() {
        let settled: Result<Option<i32>> =
            OnFailure::Propagate.settle(EduClientError::application("找不到该学生"));
        assert_eq!(settled, Err(EduClientError::application("找不到该学生")));
    }
}
