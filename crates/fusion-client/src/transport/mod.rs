//! Transport selection.
//!
//! One [`Transport`] contract, two implementations:
//!
//! - [`DirectTransport`]: this process performs the HTTP call.
//! - [`RelayedTransport`](relay::RelayedTransport): the request is serialized
//!   and handed to a privileged relay that performs the call.
//!
//! [`TransportSelector`] holds exactly one of them, chosen when it is built.

mod direct;
mod http;
pub mod relay;

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub use direct::DirectTransport;

use crate::error::ClientError;
use crate::observer::{CallObserver, NoopObserver};
use crate::request::RequestDescriptor;
use crate::types::{ClientConfig, DEFAULT_TIMEOUT_SECS};
use relay::{RelayHandle, RelayedTransport};

/// Fixed per-call timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

/// Result of one call: the decoded body or a single failure shape.
pub type Outcome = Result<Value, ClientError>;

#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one call. Never retried.
    async fn send(&self, request: &RequestDescriptor) -> Outcome;

    /// Change the backend address used by calls dispatched afterwards.
    async fn set_base_url(&self, url: &str) -> Result<(), ClientError>;

    /// The backend address currently in effect.
    async fn base_url(&self) -> Result<String, ClientError>;
}

/// Which transport a selector was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    Direct,
    Relayed,
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Direct => write!(f, "direct"),
            Self::Relayed => write!(f, "relayed"),
        }
    }
}

/// Uniform entry point for every backend call.
///
/// The mode is fixed for the lifetime of the selector. Cloning shares the
/// underlying transport, so clones can issue calls concurrently.
#[derive(Clone)]
pub struct TransportSelector {
    mode: TransportMode,
    transport: Arc<dyn Transport>,
    observer: Arc<dyn CallObserver>,
}

impl TransportSelector {
    /// Call the backend from this process.
    pub fn direct(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::with_transport(TransportMode::Direct, Arc::new(DirectTransport::new(config)?)))
    }

    /// Route every call through a relay.
    pub fn relayed(relay: RelayHandle) -> Self {
        Self::with_transport(TransportMode::Relayed, Arc::new(RelayedTransport::new(relay)))
    }

    /// Probe for a relay once and pick the transport accordingly.
    pub fn detect(config: &ClientConfig, relay: Option<RelayHandle>) -> Result<Self, ClientError> {
        match relay {
            Some(handle) if handle.is_available() => {
                tracing::debug!("Relay channel available, using relayed transport");
                Ok(Self::relayed(handle))
            }
            _ => {
                tracing::debug!("No relay channel, using direct transport");
                Self::direct(config)
            }
        }
    }

    /// Build from any transport implementation.
    pub fn with_transport(mode: TransportMode, transport: Arc<dyn Transport>) -> Self {
        Self { mode, transport, observer: Arc::new(NoopObserver) }
    }

    /// Inject an observer notified on dispatch and completion.
    pub fn with_observer(mut self, observer: Arc<dyn CallObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    pub async fn send(&self, request: &RequestDescriptor) -> Outcome {
        self.observer.on_dispatch(request);
        let started = Instant::now();
        let outcome = self.transport.send(request).await;
        self.observer.on_complete(request, &outcome, started.elapsed());
        outcome
    }

    pub async fn set_base_url(&self, url: &str) -> Result<(), ClientError> {
        self.transport.set_base_url(url).await
    }

    pub async fn base_url(&self) -> Result<String, ClientError> {
        self.transport.base_url().await
    }
}

impl fmt::Debug for TransportSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportSelector").field("mode", &self.mode).finish_non_exhaustive()
    }
}
