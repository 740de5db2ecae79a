// web-client/src/navigator.rs
use std::sync::Mutex;

/// Navigation sink injected at application root. The session core never
/// navigates on its own authority; it reports intent through this seam
/// and the host shell performs the actual transition.
pub trait Navigator: Send + Sync {
    /// In-app route transition
    fn push(&self, path: &str);

    /// Full-page navigation that discards all in-memory application state
    fn hard_redirect(&self, path: &str);
}

/// Navigator that drops every navigation (non-interactive contexts)
#[derive(Debug, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn push(&self, _path: &str) {}
    fn hard_redirect(&self, _path: &str) {}
}

/// A recorded navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    Push(String),
    HardRedirect(String),
}

/// Navigator that records requests in order, for headless runs and tests
#[derive(Debug, Default)]
pub struct MemoryNavigator {
    events: Mutex<Vec<NavigationEvent>>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn events(&self) -> Vec<NavigationEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl Navigator for MemoryNavigator {
    fn push(&self, path: &str) {
        tracing::debug!("Navigation push: {}", path);
        self.events.lock().unwrap().push(NavigationEvent::Push(path.to_string()));
    }

    fn hard_redirect(&self, path: &str) {
        tracing::debug!("Hard redirect: {}", path);
        self.events.lock().unwrap().push(NavigationEvent::HardRedirect(path.to_string()));
    }
}
