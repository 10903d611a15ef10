//! REST 客户端核心
//!
//! 负责拼接资源 URL、携带会话凭据、发送请求，并按调用方给出的
//! [`OnFailure`] 策略处理失败。各资源的具体接口位于 `services` 模块。

pub mod operation;
pub mod policy;
pub mod transport;

pub use operation::Operation;
pub use policy::{OnFailure, Outcome};

use std::sync::Arc;

use reqwest::cookie::Jar;
use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use crate::config::{ApiConfig, AppConfig};
use crate::errors::{EduClientError, Result};
use crate::models::ApiResponse;
use crate::notify::Notifier;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    notifier: Arc<dyn Notifier>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let raw_base = config.base_url();
        let base_url = Url::parse(&raw_base).map_err(|e| {
            EduClientError::configuration(format!("Invalid API base URL '{raw_base}': {e}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(EduClientError::configuration(format!(
                "API base URL '{raw_base}' cannot carry path segments"
            )));
        }

        // 会话凭据由 Cookie 存储自动携带
        let jar = Arc::new(Jar::default());
        if let Some(cookie) = config.session_cookie() {
            jar.add_cookie_str(cookie, &base_url);
            debug!("Seeded session cookie for {}", base_url);
        }

        let http = reqwest::Client::builder()
            .cookie_provider(jar)
            .user_agent(config.user_agent.as_str())
            .build()?;

        debug!("ApiClient initialized with base URL: {}", base_url);

        Ok(Self {
            http,
            base_url,
            notifier,
        })
    }

    /// 使用全局配置创建客户端
    pub fn from_app_config(notifier: Arc<dyn Notifier>) -> Result<Self> {
        Self::new(&AppConfig::get().api, notifier)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// 拼接资源 URL，路径参数会被转义
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| EduClientError::configuration("API base URL cannot carry path segments"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// 发送请求并经传输层规整，不做任何失败上报
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<Value>,
    ) -> Result<ApiResponse<T>> {
        let url = self.endpoint(segments)?;
        debug!("{} {}", method, url);

        let mut request = self.http.request(method, url);
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| EduClientError::network(e.to_string()))?;
        transport::handle_response(response).await
    }

    /// 顶层失败处理：记录日志、提示用户，并把错误交还给调用方
    pub fn report_failure(&self, operation: Operation, err: EduClientError) -> EduClientError {
        error!(
            "{} ({}): {}",
            operation.failure_context(),
            err.code(),
            err.message()
        );
        self.notifier
            .alert(&format!("{}: {}", operation.failure_context(), err.message()));
        err
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        operation: Operation,
        segments: &[&str],
        on_failure: OnFailure,
    ) -> Outcome<T> {
        self.dispatch(operation, Method::GET, segments, None, on_failure)
            .await
    }

    pub(crate) async fn send<T, B>(
        &self,
        operation: Operation,
        method: Method,
        segments: &[&str],
        body: &B,
        on_failure: OnFailure,
    ) -> Outcome<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = match serde_json::to_value(body) {
            Ok(body) => body,
            Err(e) => return on_failure.settle(self.report_failure(operation, e.into())),
        };
        self.dispatch(operation, method, segments, Some(body), on_failure)
            .await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        operation: Operation,
        segments: &[&str],
        on_failure: OnFailure,
    ) -> Outcome<T> {
        self.dispatch(operation, Method::DELETE, segments, None, on_failure)
            .await
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        operation: Operation,
        method: Method,
        segments: &[&str],
        body: Option<Value>,
        on_failure: OnFailure,
    ) -> Outcome<T> {
        match self.fetch(method, segments, body).await {
            Ok(envelope) => Ok(Some(envelope)),
            Err(err) => on_failure.settle(self.report_failure(operation, err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;

    fn client_for(config: &ApiConfig) -> (ApiClient, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        let client = ApiClient::new(config, notifier.clone()).expect("client");
        (client, notifier)
    }

    #[test]
    fn test_endpoint_joins_and_escapes_segments() {
        let (client, _) = client_for(&ApiConfig::for_host("localhost:5000"));
        let url = client.endpoint(&["students", "S 01", "courses"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/students/S%2001/courses");

        let url = client.endpoint(&["student-courses"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/student-courses");
    }

    #[test]
    fn test_endpoint_without_prefix() {
        let mut config = ApiConfig::for_host("localhost:5000");
        config.path_prefix = String::new();
        let (client, _) = client_for(&config);
        let url = client.endpoint(&["courses"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/courses");
    }

    #[test]
    fn test_invalid_base_url_is_configuration_error() {
        let mut config = ApiConfig::for_host("");
        config.scheme = "not a scheme".to_string();
        let err = ApiClient::new(&config, Arc::new(RecordingNotifier::new()))
            .err()
            .expect("invalid base url");
        assert_eq!(err.code(), "E005");
    }

    #[test]
    fn test_report_failure_alerts_and_returns_error() {
        let (client, notifier) = client_for(&ApiConfig::for_host("localhost"));
        let err = client.report_failure(
            Operation::AddCourse,
            EduClientError::application("课程名已存在"),
        );
        assert_eq!(err, EduClientError::application("课程名已存在"));
        assert_eq!(
            notifier.messages(),
            vec!["Failed to add course: 课程名已存在".to_string()]
        );
    }
}
