//! Swappable backend base address.

use parking_lot::RwLock;
use std::sync::Arc;

/// Shared, thread-safe holder of the current backend base URL.
///
/// Calls take a snapshot when they are dispatched; replacing the address never
/// affects a call already in flight.
#[derive(Debug, Clone)]
pub struct BaseAddress {
    current: Arc<RwLock<Arc<str>>>,
}

impl BaseAddress {
    pub fn new(url: &str) -> Self {
        Self { current: Arc::new(RwLock::new(Arc::from(normalize_base_url(url)))) }
    }

    /// The address in effect right now.
    pub fn snapshot(&self) -> Arc<str> {
        Arc::clone(&self.current.read())
    }

    /// Swap in a new address, returning the previous one.
    pub fn replace(&self, url: &str) -> Arc<str> {
        let next: Arc<str> = Arc::from(normalize_base_url(url));
        std::mem::replace(&mut *self.current.write(), next)
    }
}

impl Default for BaseAddress {
    fn default() -> Self {
        Self::new(fusion_types::models::DEFAULT_API_BASE_URL)
    }
}

pub(crate) fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Join a base URL and an API path with exactly one slash between them.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
