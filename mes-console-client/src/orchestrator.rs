//! Orchestrated calls: a scoped loading indicator around a dispatch, one
//! terminal notification, and a conditional completion callback.

use reqwest::Method;
use serde::Serialize;

use crate::dispatcher::{ApiClient, RequestConfig, RequestOptions};
use crate::error::Result;
use crate::messages::{ActionType, MessageOverride};
use crate::types::Envelope;

/// Completion callback invoked with the settled envelope.
pub type Callback = Box<dyn FnOnce(&Envelope) + Send>;

/// When the completion callback fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerWay {
    /// Only on business success (`code == 200`).
    #[default]
    Success,
    /// Only on business failure.
    Error,
    /// On every delivered envelope.
    Any,
}

impl TriggerWay {
    pub(crate) fn fires(self, success: bool) -> bool {
        match self {
            Self::Success => success,
            Self::Error => !success,
            Self::Any => true,
        }
    }
}

/// Extras for [`ApiClient::async_request`].
#[derive(Default)]
pub struct AsyncOptions {
    /// Per-call transport overrides.
    pub config: RequestConfig,
    /// Optional completion callback.
    pub callback: Option<Callback>,
    /// Callback trigger policy.
    pub trigger: TriggerWay,
    /// Per-call wording override, loading message included.
    pub message: MessageOverride,
}

impl AsyncOptions {
    /// Extras carrying only a callback with its trigger policy.
    #[must_use]
    pub fn on(trigger: TriggerWay, callback: impl FnOnce(&Envelope) + Send + 'static) -> Self {
        Self {
            callback: Some(Box::new(callback)),
            trigger,
            ..Self::default()
        }
    }
}

impl ApiClient {
    /// Run a call under a scoped loading indicator and fire the completion
    /// callback per the trigger policy.
    ///
    /// The inner dispatch runs with `need_msg: false`, so the whole
    /// operation surfaces exactly one notification: the terminal success or
    /// error toast emitted here once the envelope arrives, or the
    /// transport's own classification when the call rejects. The loading
    /// indicator is released on every exit path.
    ///
    /// The envelope is returned unchanged whether or not the callback ran.
    /// A panicking callback is not caught.
    pub async fn async_request<T>(
        &self,
        method: Method,
        path: &str,
        data: &T,
        msg_type: ActionType,
        extras: AsyncOptions,
    ) -> Result<Envelope>
    where
        T: Serialize + ?Sized,
    {
        let template = self.catalog.resolve_merged(msg_type, &extras.message);
        let loading = self.notify.loading(&template.loading);

        let options = RequestOptions {
            need_msg: false,
            ..RequestOptions::for_action(msg_type)
        };
        let result = self
            .request(method, path, data, &extras.config, options)
            .await;

        // The indicator ends when the call settles, before any terminal toast.
        drop(loading);

        let envelope = result?;
        let success = envelope.is_success();
        let fallback = if success {
            template.success.as_str()
        } else {
            template.error.as_str()
        };
        let wording = envelope.message.as_deref().unwrap_or(fallback);
        if success {
            self.notify.success(wording);
        } else {
            self.notify.error(wording);
        }

        if extras.trigger.fires(success) {
            if let Some(callback) = extras.callback {
                callback(&envelope);
            }
        }
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_success_fires_on_success_only() {
        assert!(TriggerWay::Success.fires(true));
        assert!(!TriggerWay::Success.fires(false));
    }

    #[test]
    fn trigger_error_fires_on_failure_only() {
        assert!(!TriggerWay::Error.fires(true));
        assert!(TriggerWay::Error.fires(false));
    }

    #[test]
    fn trigger_any_always_fires() {
        assert!(TriggerWay::Any.fires(true));
        assert!(TriggerWay::Any.fires(false));
    }

    #[test]
    fn default_trigger_is_success() {
        assert_eq!(TriggerWay::default(), TriggerWay::Success);
    }
}
