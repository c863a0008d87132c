#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `atlas-http`: HTTP transport backend
//!
//! Concrete HTTP implementation of [`transport::Transport`], used by the
//! provider probe to talk to EVM JSON-RPC endpoints.
//!
//! ## Example
//! ```no_run
//! use atlas_http::HttpTransport;
//! use transport::Transport;
//!
//! # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
//! let transport = HttpTransport::new("https://ethereum-rpc.publicnode.com");
//! let head = transport.send("eth_blockNumber", &[]).await.expect("block number");
//! println!("{}", head);
//! # });
//! ```

use async_trait::async_trait;
use serde_json::Value;
use transport::{Transport, TransportError};

/// JSON-RPC request id. Calls are never pipelined on one transport.
const REQUEST_ID: u64 = 1;

/// A thin wrapper around [`reqwest::Client`] that POSTs JSON-RPC 2.0 calls.
///
/// No schema validation or result typing happens here: the `result` field
/// comes back as a [`serde_json::Value`] and every failure is folded into a
/// [`TransportError`].
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    /// Constructs a transport targeting `url`.
    ///
    /// Provider credentials are part of the URL path, so no auth header is sent.
    ///
    /// # Example
    /// ```
    /// use atlas_http::HttpTransport;
    /// use transport::Transport;
    ///
    /// let transport = HttpTransport::new("https://rpc.ankr.com/eth");
    /// assert_eq!(transport.endpoint(), "https://rpc.ankr.com/eth");
    /// ```
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Constructs a transport that shares an existing client.
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        let url = url.into();
        tracing::trace!("initializing HTTP transport for {}", url);
        Self { client, url }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    /// Sends one JSON-RPC request and returns its `result` field.
    ///
    /// # Errors
    /// - [`TransportError::Http`] if the request fails or the status is not a success
    /// - [`TransportError::Serialization`] if the body is not JSON
    /// - [`TransportError::Rpc`] if the response carries a non-null error object
    /// - [`TransportError::InvalidFormat`] if there is no `result` field
    async fn send(&self, method: &str, params: &[Value]) -> Result<Value, TransportError> {
        tracing::trace!("POST {} (method: {})", self.url, method);
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": REQUEST_ID,
            "method": method,
            "params": params
        });

        let resp = self.client.post(&self.url).json(&body).send().await.map_err(|e| {
            tracing::error!("HTTP transport - request failed: {}", e);
            TransportError::Http(e.to_string())
        })?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| {
            tracing::error!("HTTP transport - failed to read body: {}", e);
            TransportError::Serialization(e.to_string())
        })?;

        // JSON-RPC errors often arrive with a 4xx/5xx status; prefer the envelope.
        match transport::parse_response(&text) {
            Err(TransportError::Serialization(_)) if !status.is_success() => {
                tracing::error!("HTTP transport - {} from {}", status, self.url);
                Err(TransportError::Http(format!("{} from {}", status, self.url)))
            }
            other => other,
        }
    }

    fn endpoint(&self) -> &str { &self.url }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let url = "https://eth.drpc.org";
        let transport = HttpTransport::new(url);
        assert_eq!(transport.url, url);
        assert_eq!(transport.endpoint(), url);

        let shared = HttpTransport::with_client(reqwest::Client::new(), String::from(url));
        assert_eq!(shared.endpoint(), url);
    }

    #[tokio::test]
    async fn test_send_fails_without_server() {
        let transport = HttpTransport::new("http://127.0.0.1:9");
        let result = transport.send("eth_chainId", &[]).await;

        match result.expect_err("nothing listens on the discard port") {
            TransportError::Http(msg) => assert!(!msg.is_empty()),
            other => panic!("expected Http error, got {:?}", other),
        }
    }
}
