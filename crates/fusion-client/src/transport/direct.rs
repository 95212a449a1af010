//! Direct transport: HTTP calls issued from the current process.

use async_trait::async_trait;

use super::http::HttpExecutor;
use super::{Outcome, Transport};
use crate::address::BaseAddress;
use crate::error::ClientError;
use crate::request::RequestDescriptor;
use crate::types::ClientConfig;

pub struct DirectTransport {
    executor: HttpExecutor,
    address: BaseAddress,
}

impl DirectTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::with_address(config, BaseAddress::new(&config.base_url))
    }

    /// Use an externally owned address holder.
    pub fn with_address(config: &ClientConfig, address: BaseAddress) -> Result<Self, ClientError> {
        Ok(Self { executor: HttpExecutor::new(config.timeout())?, address })
    }

    pub fn address(&self) -> &BaseAddress {
        &self.address
    }
}

#[async_trait]
impl Transport for DirectTransport {
    async fn send(&self, request: &RequestDescriptor) -> Outcome {
        let base_url = self.address.snapshot();
        self.executor.execute(&base_url, request).await
    }

    async fn set_base_url(&self, url: &str) -> Result<(), ClientError> {
        let previous = self.address.replace(url);
        tracing::info!("Backend address changed: {} -> {}", previous, self.address.snapshot());
        Ok(())
    }

    async fn base_url(&self) -> Result<String, ClientError> {
        Ok(self.address.snapshot().to_string())
    }
}
