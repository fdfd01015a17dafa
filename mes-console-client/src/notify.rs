//! User notification capability.
//!
//! The UI layer (toast / message component) implements [`Notify`]; the
//! network layer only ever talks to this trait, so tests can substitute a
//! recording double and headless hosts can route everything to the log.

use std::fmt;

/// Scoped loading indicator.
///
/// The release action runs exactly once, when the guard drops. Holding the
/// guard across an `.await` ties the indicator's lifetime to the call: every
/// exit path, early `?` returns included, releases it.
pub struct LoadingGuard {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl LoadingGuard {
    /// Guard running `release` when dropped.
    #[must_use]
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Guard with no release action.
    #[must_use]
    pub fn noop() -> Self {
        Self { release: None }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for LoadingGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadingGuard")
            .field("armed", &self.release.is_some())
            .finish()
    }
}

/// Notification sink for user-visible feedback.
pub trait Notify: Send + Sync {
    /// Show a success toast.
    fn success(&self, message: &str);

    /// Show an error toast.
    fn error(&self, message: &str);

    /// Show a loading indicator until the returned guard is dropped.
    fn loading(&self, message: &str) -> LoadingGuard;
}

/// Notifier that routes everything to the log.
///
/// For headless hosts and local debugging; a real UI supplies its own
/// [`Notify`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotify;

impl Notify for LogNotify {
    fn success(&self, message: &str) {
        log::info!("[notify] {message}");
    }

    fn error(&self, message: &str) {
        log::warn!("[notify] {message}");
    }

    fn loading(&self, message: &str) -> LoadingGuard {
        log::info!("[notify] {message}");
        let message = message.to_string();
        LoadingGuard::new(move || log::info!("[notify] done: {message}"))
    }
}
