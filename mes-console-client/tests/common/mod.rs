//! Shared test doubles and helpers.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use mes_console_client::{ApiClient, HttpConfig, LoadingGuard, NoToken, Notify, TokenSource};

/// One observed notification side effect, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Success(String),
    Error(String),
    LoadingStart(String),
    LoadingEnd(String),
}

/// Notification double recording the exact call sequence.
#[derive(Debug, Default)]
pub struct RecordingNotify {
    events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingNotify {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// Recorded events with the loading lifecycle filtered out.
    pub fn toasts(&self) -> Vec<Event> {
        self.events()
            .into_iter()
            .filter(|e| matches!(e, Event::Success(_) | Event::Error(_)))
            .collect()
    }

    pub fn count(&self, wanted: &Event) -> usize {
        self.events().iter().filter(|e| *e == wanted).count()
    }
}

impl Notify for RecordingNotify {
    fn success(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Error(message.to_string()));
    }

    fn loading(&self, message: &str) -> LoadingGuard {
        self.events
            .lock()
            .unwrap()
            .push(Event::LoadingStart(message.to_string()));
        let events = Arc::clone(&self.events);
        let message = message.to_string();
        LoadingGuard::new(move || {
            events.lock().unwrap().push(Event::LoadingEnd(message));
        })
    }
}

/// Token source returning a fixed token.
pub struct StaticToken(pub &'static str);

impl TokenSource for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}

/// Build a client against a mock server with the recording notifier.
pub fn test_client(base_url: &str, notify: &Arc<RecordingNotify>) -> ApiClient {
    let config = HttpConfig {
        base_url: base_url.to_string(),
        timeout: 5,
    };
    let notify: Arc<dyn Notify> = notify.clone();
    ApiClient::new(&config, Arc::new(NoToken), notify).expect("client should build")
}

/// Same, with a token source supplying credentials.
pub fn test_client_with_tokens(
    base_url: &str,
    notify: &Arc<RecordingNotify>,
    tokens: Arc<dyn TokenSource>,
) -> ApiClient {
    let config = HttpConfig {
        base_url: base_url.to_string(),
        timeout: 5,
    };
    let notify: Arc<dyn Notify> = notify.clone();
    ApiClient::new(&config, tokens, notify).expect("client should build")
}

/// Empty request payload.
pub fn no_data() -> [(&'static str, &'static str); 0] {
    []
}
