//! Request dispatch: the `request` primitive, the verb shortcuts, message
//! precedence and the per-call notification policy.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method};
use serde::Serialize;

use crate::config::HttpConfig;
use crate::error::Result;
use crate::messages::{ActionType, MessageCatalog, MessageOverride};
use crate::notify::Notify;
use crate::transport::{self, TokenSource};
use crate::types::Envelope;

/// Which outcomes may raise a policy-gated notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MsgBackType {
    /// Notify on both outcomes.
    #[default]
    All,
    /// Notify only on business success.
    Success,
    /// Notify only on business failure.
    Error,
}

/// Per-call notification policy and wording.
///
/// `Default` mirrors the bare `request` primitive: silent (`need_msg =
/// false`). The verb shortcuts use [`RequestOptions::for_action`] instead,
/// which surfaces failures only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Whether any notification may be raised at all.
    pub need_msg: bool,
    /// Which outcomes notify.
    pub msg_back_type: MsgBackType,
    /// Action tag for catalog lookup.
    pub msg_type: ActionType,
    /// Per-call wording override; a set field beats the catalog.
    pub message: MessageOverride,
}

impl RequestOptions {
    /// Verb-shortcut defaults: notify failures only, under the given action tag.
    #[must_use]
    pub fn for_action(msg_type: ActionType) -> Self {
        Self {
            need_msg: true,
            msg_back_type: MsgBackType::Error,
            msg_type,
            message: MessageOverride::default(),
        }
    }

    /// Same defaults with an explicit wording override.
    #[must_use]
    pub fn with_message(msg_type: ActionType, message: MessageOverride) -> Self {
        Self {
            message,
            ..Self::for_action(msg_type)
        }
    }
}

/// Per-call transport overrides.
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Extra headers appended to this request.
    pub headers: Vec<(String, String)>,
    /// Timeout override for this call only.
    pub timeout: Option<Duration>,
}

/// Notification policy: `need_msg` gates everything, `msg_back_type` picks
/// the outcomes that may surface.
fn should_notify(options: &RequestOptions, success: bool) -> bool {
    options.need_msg
        && match options.msg_back_type {
            MsgBackType::All => true,
            MsgBackType::Success => success,
            MsgBackType::Error => !success,
        }
}

/// Server-provided wording beats the resolved template.
fn notify_text<'a>(envelope: &'a Envelope, fallback: Option<&'a str>) -> &'a str {
    envelope.message.as_deref().or(fallback).unwrap_or("")
}

/// The network access layer of the console.
///
/// Holds the configured HTTP client, the read-only message catalog and the
/// injected capabilities (token store, notification sink). Cheap to clone
/// and safe to share across tasks.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) http: Client,
    pub(crate) base_url: String,
    pub(crate) tokens: Arc<dyn TokenSource>,
    pub(crate) notify: Arc<dyn Notify>,
    pub(crate) catalog: MessageCatalog,
}

impl ApiClient {
    /// Build a client from injected configuration and capabilities.
    pub fn new(
        config: &HttpConfig,
        tokens: Arc<dyn TokenSource>,
        notify: Arc<dyn Notify>,
    ) -> Result<Self> {
        Ok(Self {
            http: transport::build_client(config)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
            notify,
            catalog: MessageCatalog::new(),
        })
    }

    /// The request primitive.
    ///
    /// `data` rides the query string for GET and the urlencoded form body
    /// for every other verb. A delivered envelope with `code != 200` is a
    /// business failure: returned as a normal value with the payload
    /// cleared, notification gated by `options`. Transport failures
    /// propagate as `Err`, already notified during classification.
    pub async fn request<T>(
        &self,
        method: Method,
        path: &str,
        data: &T,
        config: &RequestConfig,
        options: RequestOptions,
    ) -> Result<Envelope>
    where
        T: Serialize + ?Sized,
    {
        // Wording is resolved up front, but only when a notification can fire.
        let template = options
            .need_msg
            .then(|| self.catalog.resolve_merged(options.msg_type, &options.message));

        let url = format!("{}{}", self.base_url, path);
        log::debug!("{method} {url}");

        let is_get = method == Method::GET;
        let mut builder = self.http.request(method, &url);
        builder = if is_get {
            builder.query(data)
        } else {
            builder.form(data)
        };
        for (name, value) in &config.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        builder = self.authorize(builder);

        let envelope = self.execute(builder).await?;

        if envelope.is_success() {
            if should_notify(&options, true) {
                let fallback = template.as_ref().map(|t| t.success.as_str());
                self.notify.success(notify_text(&envelope, fallback));
            }
            Ok(envelope)
        } else {
            if should_notify(&options, false) {
                let fallback = template.as_ref().map(|t| t.error.as_str());
                self.notify.error(notify_text(&envelope, fallback));
            }
            Ok(envelope.without_data())
        }
    }

    /// GET shortcut; failures notify under the `query` action by default.
    pub async fn get<T>(
        &self,
        path: &str,
        data: &T,
        config: &RequestConfig,
        options: Option<RequestOptions>,
    ) -> Result<Envelope>
    where
        T: Serialize + ?Sized,
    {
        let options = options.unwrap_or_else(|| RequestOptions::for_action(ActionType::Query));
        self.request(Method::GET, path, data, config, options).await
    }

    /// POST shortcut; failures notify under the `query` action by default.
    pub async fn post<T>(
        &self,
        path: &str,
        data: &T,
        config: &RequestConfig,
        options: Option<RequestOptions>,
    ) -> Result<Envelope>
    where
        T: Serialize + ?Sized,
    {
        let options = options.unwrap_or_else(|| RequestOptions::for_action(ActionType::Query));
        self.request(Method::POST, path, data, config, options)
            .await
    }

    /// PUT shortcut; failures notify under the `query` action by default.
    pub async fn put<T>(
        &self,
        path: &str,
        data: &T,
        config: &RequestConfig,
        options: Option<RequestOptions>,
    ) -> Result<Envelope>
    where
        T: Serialize + ?Sized,
    {
        let options = options.unwrap_or_else(|| RequestOptions::for_action(ActionType::Query));
        self.request(Method::PUT, path, data, config, options).await
    }

    /// DELETE shortcut; failures notify under the `delete` action by default.
    pub async fn delete<T>(
        &self,
        path: &str,
        data: &T,
        config: &RequestConfig,
        options: Option<RequestOptions>,
    ) -> Result<Envelope>
    where
        T: Serialize + ?Sized,
    {
        let options = options.unwrap_or_else(|| RequestOptions::for_action(ActionType::Delete));
        self.request(Method::DELETE, path, data, config, options)
            .await
    }
}
