//! Call observers.
//!
//! The selector notifies an observer when a call is dispatched and when it
//! resolves. Observers cannot influence the outcome.

use std::time::Duration;

use crate::request::RequestDescriptor;
use crate::transport::Outcome;

/// Hooks invoked around every backend call.
pub trait CallObserver: Send + Sync {
    fn on_dispatch(&self, _request: &RequestDescriptor) {}

    fn on_complete(&self, _request: &RequestDescriptor, _outcome: &Outcome, _elapsed: Duration) {}
}

/// Observer that does nothing. Used when none is injected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CallObserver for NoopObserver {}

/// Observer that logs each call through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CallObserver for TracingObserver {
    fn on_dispatch(&self, request: &RequestDescriptor) {
        tracing::info!(
            method = %request.method(),
            path = request.path(),
            query = ?request.query_pairs(),
            has_body = request.body().is_some(),
            "[API Request]"
        );
    }

    fn on_complete(&self, request: &RequestDescriptor, outcome: &Outcome, elapsed: Duration) {
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        match outcome {
            Ok(_) => tracing::info!(
                method = %request.method(),
                path = request.path(),
                elapsed_ms,
                "[API Response] ok"
            ),
            Err(e) => tracing::warn!(
                method = %request.method(),
                path = request.path(),
                status = ?e.status(),
                elapsed_ms,
                "[API Response] {}",
                e
            ),
        }
    }
}
