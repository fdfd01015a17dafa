//! # mes-console-client
//!
//! The single network-access layer of the MES web console: a thin wrapper
//! around [`reqwest`] that injects the bearer credential, classifies
//! transport failures centrally, and surfaces templated user notifications
//! keyed by semantic action type.
//!
//! ## What it does
//!
//! | Concern | Where |
//! |---------|-------|
//! | Bearer auth injection | [`TokenSource`] + outbound interceptor |
//! | Failure classification | status table / timeout / connection failed |
//! | Templated notifications | [`MessageCatalog`] keyed by [`ActionType`] |
//! | Loading + callback orchestration | [`ApiClient::async_request`] |
//!
//! ## What it deliberately does not do
//!
//! No retry, no request deduplication, no cancellation, no caching. The
//! transport engine, toast rendering, token storage and configuration
//! loading are injected collaborators.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use mes_console_client::{ApiClient, HttpConfig, LogNotify, NoToken};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HttpConfig {
//!         base_url: "https://mes.example.com/api".to_string(),
//!         timeout: 10,
//!     };
//!     let client = ApiClient::new(&config, Arc::new(NoToken), Arc::new(LogNotify))?;
//!
//!     // Business failure comes back as a value, not an error:
//!     let envelope = client
//!         .post("/login", &[("username", "op01"), ("password", "secret")], &Default::default(), None)
//!         .await?;
//!     if !envelope.is_success() {
//!         // the "登录失败" toast has already been raised by policy
//!         return Ok(());
//!     }
//!     println!("logged in: {:?}", envelope.data);
//!     Ok(())
//! }
//! ```
//!
//! ## Two failure classes
//!
//! - **Transport failure** — the exchange itself broke (unreachable,
//!   timeout, non-2xx status). Returned as [`Err(HttpError)`](HttpError),
//!   with the classified notification already emitted exactly once.
//! - **Business failure** — a delivered envelope with `code != 200`.
//!   Returned as a normal [`Envelope`] with the payload cleared; the
//!   notification is policy-gated per call, not automatic.

mod config;
mod dispatcher;
mod error;
mod messages;
mod notify;
mod orchestrator;
mod transport;
mod types;
mod utils;

pub use config::HttpConfig;
pub use dispatcher::{ApiClient, MsgBackType, RequestConfig, RequestOptions};
pub use error::{HttpError, Result};
pub use messages::{ActionType, MessageCatalog, MessageOverride, MessageTemplate};
pub use notify::{LoadingGuard, LogNotify, Notify};
pub use orchestrator::{AsyncOptions, Callback, TriggerWay};
pub use transport::{NoToken, TokenSource};
pub use types::{Envelope, SUCCESS_CODE};

// Re-export the verb type so callers don't need a direct reqwest dependency.
pub use reqwest::Method;
