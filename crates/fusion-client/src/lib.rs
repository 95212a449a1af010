#![doc = include_str!("../README.md")]

mod address;
mod api;
pub mod codec;
mod error;
mod observer;
mod request;
pub mod transport;
mod types;

pub use address::BaseAddress;
pub use api::FusionApi;
pub use codec::MalformedResponse;
pub use error::ClientError;
pub use observer::{CallObserver, NoopObserver, TracingObserver};
pub use request::{Method, RequestDescriptor};
pub use transport::relay::{RelayHandle, RelayHost, RelayedTransport};
pub use transport::{
    DirectTransport, Outcome, Transport, TransportMode, TransportSelector, REQUEST_TIMEOUT,
};
pub use types::ClientConfig;
