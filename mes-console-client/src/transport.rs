//! Transport plumbing: client construction, bearer injection, failure
//! classification.
//!
//! 出站拦截：凭证存在时注入 `Authorization: Bearer <token>`。
//! 入站拦截：2xx 解出信封返回；否则按「状态码表 / 超时 / 连接失败」三类
//! 各弹一次错误提示，再把原始失败抛给调用方。

use std::time::Duration;

use reqwest::{Client, RequestBuilder};

use crate::config::HttpConfig;
use crate::dispatcher::ApiClient;
use crate::error::{HttpError, Result};
use crate::types::Envelope;
use crate::utils::truncate_for_log;

pub(crate) const TIMEOUT_MESSAGE: &str = "请求超时";
pub(crate) const CONNECT_FAILED_MESSAGE: &str = "连接服务器失败";

/// Supplies the bearer credential for outbound requests.
///
/// Implemented by the host's token store. An absent or empty token leaves
/// the request headers untouched; supplying one never fails the request.
pub trait TokenSource: Send + Sync {
    /// Current token, if any.
    fn token(&self) -> Option<String>;
}

/// Token source for unauthenticated use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

impl TokenSource for NoToken {
    fn token(&self) -> Option<String> {
        None
    }
}

/// Localized message for a classified HTTP status.
///
/// Statuses outside the fixed table yield `None`: the call still fails, but
/// no notification is raised for them.
pub(crate) fn status_message(status: u16) -> Option<&'static str> {
    match status {
        400 => Some("请求出错"),
        401 => Some("未授权，请重新登录"),
        403 => Some("拒绝访问"),
        404 => Some("请求错误，未找到该资源"),
        408 => Some(TIMEOUT_MESSAGE),
        500 => Some("服务器内部错误"),
        501 => Some("服务未实现"),
        502 => Some("网关错误"),
        503 => Some("服务不可用"),
        504 => Some("网关超时"),
        505 => Some("HTTP版本不受支持"),
        _ => None,
    }
}

/// Build the shared client from injected configuration.
pub(crate) fn build_client(config: &HttpConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(|e| HttpError::Config(e.to_string()))
}

impl ApiClient {
    /// Outbound interceptor: attach the bearer credential when one exists.
    pub(crate) fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.tokens.token() {
            Some(token) if !token.is_empty() => builder.bearer_auth(token),
            _ => builder,
        }
    }

    /// Inbound interceptor: decode the envelope on success, classify the
    /// failure on rejection.
    ///
    /// Classification emits the matching error notification exactly once and
    /// then returns the failure unchanged; it never swallows it.
    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<Envelope> {
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                log::warn!("request timed out: {e}");
                self.notify.error(TIMEOUT_MESSAGE);
                HttpError::Timeout(e.to_string())
            } else {
                log::warn!("request failed without a response: {e}");
                self.notify.error(CONNECT_FAILED_MESSAGE);
                HttpError::Connect(e.to_string())
            }
        })?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        if !status.is_success() {
            if let Some(message) = status_message(status.as_u16()) {
                self.notify.error(message);
            }
            log::warn!("HTTP {status}");
            return Err(HttpError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| {
            log::warn!("failed to read response body: {e}");
            self.notify.error(CONNECT_FAILED_MESSAGE);
            HttpError::Connect(e.to_string())
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&body));

        serde_json::from_str(&body).map_err(|e| {
            log::error!("envelope decode failed: {e}");
            HttpError::Decode(e.to_string())
        })
    }
}
