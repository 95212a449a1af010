//! HTTP execution shared by the direct transport and the relay host.

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

use super::Outcome;
use crate::address::join_url;
use crate::codec;
use crate::error::ClientError;
use crate::request::RequestDescriptor;

#[derive(Debug, Clone)]
pub(crate) struct HttpExecutor {
    client: Client,
    timeout: Duration,
}

impl HttpExecutor {
    pub(crate) fn new(timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Network(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client, timeout })
    }

    /// Perform one call against `base_url`. No retries.
    pub(crate) async fn execute(&self, base_url: &str, request: &RequestDescriptor) -> Outcome {
        let url = join_url(base_url, request.path());

        let mut builder = self
            .client
            .request(request.method().into(), &url)
            .header(CONTENT_TYPE, "application/json");
        if !request.query_pairs().is_empty() {
            builder = builder.query(request.query_pairs());
        }
        if let Some(body) = request.body() {
            builder = builder.body(codec::encode(body)?);
        }

        let resp = builder.send().await.map_err(|e| self.network_error(&e))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| self.network_error(&e))?;

        if !status.is_success() {
            return Err(ClientError::Http {
                status: status.as_u16(),
                message: format!("request failed with status code {}", status.as_u16()),
                body: (!text.is_empty()).then(|| codec::decode_or_raw(&text)),
            });
        }

        Ok(codec::decode_or_raw(&text))
    }

    fn network_error(&self, e: &reqwest::Error) -> ClientError {
        if e.is_timeout() {
            ClientError::Network(format!("timeout of {}ms exceeded", self.timeout.as_millis()))
        } else {
            ClientError::Network(e.to_string())
        }
    }
}
