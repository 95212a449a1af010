//! Relay channel: the privileged side performs network I/O for its callers.
//!
//! Requests cross the channel as JSON text, exactly as they would cross a
//! process boundary. The host side ([`RelayHost`]) owns the HTTP client and its
//! own copy of the backend address; the caller side ([`RelayedTransport`])
//! only serializes descriptors and decodes replies.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};

use super::http::HttpExecutor;
use super::{Outcome, Transport};
use crate::address::normalize_base_url;
use crate::codec;
use crate::error::ClientError;
use crate::request::{Method, RequestDescriptor};
use crate::types::ClientConfig;

/// Pending messages the host will queue before senders wait.
pub const RELAY_QUEUE_DEPTH: usize = 64;

/// Serialized form of a [`RequestDescriptor`] on the relay channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelayRequest {
    pub method: Method,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default)]
    pub params: Vec<(String, String)>,
}

impl From<&RequestDescriptor> for RelayRequest {
    fn from(request: &RequestDescriptor) -> Self {
        Self {
            method: request.method(),
            url: request.path().to_string(),
            data: request.body().cloned(),
            params: request.query_pairs().to_vec(),
        }
    }
}

impl RelayRequest {
    fn into_descriptor(self) -> RequestDescriptor {
        RequestDescriptor::from_parts(self.method, self.url, self.data, self.params)
    }
}

/// Reply written by the relay: `{success, data?, error?, status?}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RelayReply {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl RelayReply {
    pub fn ok(data: Value) -> Self {
        Self { success: true, data: Some(data), ..Default::default() }
    }

    pub fn failure(error: impl Into<String>, status: Option<u16>, data: Option<Value>) -> Self {
        Self { success: false, data, error: Some(error.into()), status }
    }

    fn from_outcome(outcome: Outcome) -> Self {
        match outcome {
            Ok(data) => Self::ok(data),
            // Network failures travel as the bare cause, without the local prefix.
            Err(ClientError::Network(cause)) => Self::failure(cause, None, None),
            Err(e) => Self::failure(e.to_string(), e.status(), e.body().cloned()),
        }
    }

    /// Surface the reply unchanged; only a failed reply becomes an error.
    pub fn into_outcome(self) -> Outcome {
        if self.success {
            return Ok(self.data.unwrap_or(Value::Null));
        }
        Err(ClientError::Relay {
            message: self.error.unwrap_or_else(|| "API request failed".to_string()),
            status: self.status,
            body: self.data,
        })
    }

    fn to_wire(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            serde_json::json!({
                "success": false,
                "error": format!("failed to encode relay reply: {}", e),
            })
            .to_string()
        })
    }
}

/// Messages accepted by a relay.
#[derive(Debug)]
pub enum RelayMessage {
    /// Perform a call. `payload` is a serialized [`RelayRequest`]; the reply
    /// is a serialized [`RelayReply`].
    ApiRequest { payload: String, reply: oneshot::Sender<String> },
    /// Replace the relay's backend address. Acknowledged once applied.
    SetApiUrl { url: String, reply: oneshot::Sender<()> },
    /// Read the relay's backend address.
    GetApiUrl { reply: oneshot::Sender<String> },
}

/// Create a relay channel. The receiver is served by [`RelayHost`] or by any
/// other implementation of the same message contract.
pub fn relay_channel(depth: usize) -> (RelayHandle, mpsc::Receiver<RelayMessage>) {
    let (tx, rx) = mpsc::channel(depth.max(1));
    (RelayHandle { tx }, rx)
}

fn channel_closed() -> ClientError {
    ClientError::relay("relay channel closed")
}

/// Caller side of the relay channel. Cheap to clone.
#[derive(Debug, Clone)]
pub struct RelayHandle {
    tx: mpsc::Sender<RelayMessage>,
}

impl RelayHandle {
    /// Capability probe: is anything still serving the channel?
    pub fn is_available(&self) -> bool {
        !self.tx.is_closed()
    }

    /// Hand a serialized request to the relay and wait for its serialized reply.
    pub async fn api_request(&self, payload: String) -> Result<String, ClientError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(RelayMessage::ApiRequest { payload, reply })
            .await
            .map_err(|_| channel_closed())?;
        rx.await.map_err(|_| channel_closed())
    }

    pub async fn set_api_url(&self, url: &str) -> Result<(), ClientError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(RelayMessage::SetApiUrl { url: url.to_string(), reply })
            .await
            .map_err(|_| channel_closed())?;
        rx.await.map_err(|_| channel_closed())
    }

    pub async fn get_api_url(&self) -> Result<String, ClientError> {
        let (reply, rx) = oneshot::channel();
        self.tx.send(RelayMessage::GetApiUrl { reply }).await.map_err(|_| channel_closed())?;
        rx.await.map_err(|_| channel_closed())
    }
}

/// Privileged side of the relay channel.
///
/// Messages are taken in FIFO order. The backend address is read when a
/// request is dequeued, then the call runs in its own task, so concurrent
/// requests do not wait for each other while an acknowledged address change
/// is seen by every request sent after it.
pub struct RelayHost {
    executor: HttpExecutor,
    base_url: String,
    inbox: mpsc::Receiver<RelayMessage>,
}

impl RelayHost {
    /// Spawn a host on the current Tokio runtime and return its handle.
    pub fn spawn(config: &ClientConfig) -> Result<RelayHandle, ClientError> {
        let (handle, inbox) = relay_channel(RELAY_QUEUE_DEPTH);
        let host = Self {
            executor: HttpExecutor::new(config.timeout())?,
            base_url: normalize_base_url(&config.base_url),
            inbox,
        };
        tokio::spawn(host.run());
        Ok(handle)
    }

    async fn run(mut self) {
        tracing::debug!("Relay host serving {}", self.base_url);
        while let Some(message) = self.inbox.recv().await {
            match message {
                RelayMessage::ApiRequest { payload, reply } => {
                    let executor = self.executor.clone();
                    let base_url = self.base_url.clone();
                    tokio::spawn(async move {
                        let wire = handle_api_request(&executor, &base_url, &payload).await;
                        let _ = reply.send(wire);
                    });
                }
                RelayMessage::SetApiUrl { url, reply } => {
                    let next = normalize_base_url(&url);
                    tracing::info!("Relay backend address changed: {} -> {}", self.base_url, next);
                    self.base_url = next;
                    let _ = reply.send(());
                }
                RelayMessage::GetApiUrl { reply } => {
                    let _ = reply.send(self.base_url.clone());
                }
            }
        }
        tracing::debug!("Relay channel closed, host stopping");
    }
}

async fn handle_api_request(executor: &HttpExecutor, base_url: &str, payload: &str) -> String {
    let reply = match serde_json::from_str::<RelayRequest>(payload) {
        Ok(request) => {
            tracing::debug!("Relaying {} {}", request.method, request.url);
            let outcome = executor.execute(base_url, &request.into_descriptor()).await;
            RelayReply::from_outcome(outcome)
        }
        Err(e) => RelayReply::failure(format!("invalid relay request: {}", e), None, None),
    };
    reply.to_wire()
}

/// Caller-side transport that delegates every call to a relay.
pub struct RelayedTransport {
    relay: RelayHandle,
}

impl RelayedTransport {
    pub fn new(relay: RelayHandle) -> Self {
        Self { relay }
    }
}

#[async_trait]
impl Transport for RelayedTransport {
    async fn send(&self, request: &RequestDescriptor) -> Outcome {
        let payload = codec::encode(&RelayRequest::from(request))?;
        let wire = self.relay.api_request(payload).await?;

        let decoded = codec::decode(&wire)
            .map_err(|e| ClientError::relay(format!("malformed relay reply: {}", e.reason)))?;
        let reply: RelayReply = serde_json::from_value(decoded)
            .map_err(|e| ClientError::relay(format!("malformed relay reply: {}", e)))?;
        reply.into_outcome()
    }

    async fn set_base_url(&self, url: &str) -> Result<(), ClientError> {
        self.relay.set_api_url(url).await
    }

    async fn base_url(&self) -> Result<String, ClientError> {
        self.relay.get_api_url().await
    }
}
