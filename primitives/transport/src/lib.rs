#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `atlas-transport`: JSON-RPC transport abstraction
//!
//! The capability probe talks to providers only through the [`Transport`]
//! trait, so it can be driven by the HTTP backend in production and by an
//! in-memory transport in tests.
//!
//! ## Example
//! ```no_run
//! use transport::{DynTransport, TransportError};
//!
//! async fn demo(transport: DynTransport) -> Result<(), TransportError> {
//!     let chain_id = transport.send("eth_chainId", &[]).await?;
//!     println!("chain = {}", chain_id);
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

/// Type alias for structured error handling in transport operations.
pub type Result<T> = std::result::Result<T, TransportError>;

/// Canonical error type for all transport implementations.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// An HTTP-level failure (connection refused or bad status code).
    #[error("HTTP transport error: {0}")]
    Http(String),

    /// Failure to serialize or deserialize a JSON payload.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The remote endpoint returned an explicit JSON-RPC error object.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// The response did not conform to the JSON-RPC envelope format.
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self { TransportError::Serialization(err.to_string()) }
}

/// Single-call JSON-RPC transport.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one call and returns the `result` field of the response.
    async fn send(&self, method: &str, params: &[Value]) -> Result<Value>;

    /// URL or symbolic name of the endpoint.
    fn endpoint(&self) -> &str;
}

/// Type alias for a shared, dynamically dispatched transport instance.
pub type DynTransport = Arc<dyn Transport>;

/// Extract the `result` of a JSON-RPC response envelope.
///
/// A non-null `error` member wins over `result`.
pub fn parse_response(body: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| TransportError::Serialization(format!("{} (body: {})", e, body)))?;

    if let Some(error) = value.get("error").filter(|e| !e.is_null()) {
        return Err(TransportError::Rpc(error.to_string()));
    }

    value.get("result").cloned().ok_or_else(|| TransportError::InvalidFormat(body.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from() {
        let err = serde_json::from_str::<serde_json::Value>("not-json")
            .expect_err("Expected JSON parsing to fail");
        let terr: TransportError = err.into();

        match terr {
            TransportError::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("expected Serialization error variant"),
        }
    }

    #[test]
    fn test_parse_response() {
        let ok = parse_response(r#"{"jsonrpc":"2.0","id":1,"result":"0x1"}"#).expect("result");
        assert_eq!(ok, json!("0x1"));

        let null = parse_response(r#"{"jsonrpc":"2.0","id":1,"result":null,"error":null}"#).expect("null result");
        assert!(null.is_null());

        let err = parse_response(r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"method not found"}}"#)
            .expect_err("rpc error");
        assert!(matches!(err, TransportError::Rpc(msg) if msg.contains("-32601")));

        let err = parse_response(r#"{"jsonrpc":"2.0","id":1}"#).expect_err("no result");
        assert!(matches!(err, TransportError::InvalidFormat(_)));

        let err = parse_response("<html>").expect_err("not json");
        assert!(matches!(err, TransportError::Serialization(_)));
    }
}
