//! Integration tests for the shared transport API.
//!
//! These exercise consumer usage patterns without a live endpoint.

use std::sync::Arc;

use serde_json::{json, Value};
use transport::{DynTransport, Transport, TransportError};

struct DummyTransport;

#[async_trait::async_trait]
impl transport::Transport for DummyTransport {
    async fn send(&self, method: &str, params: &[Value]) -> Result<Value, TransportError> {
        match method {
            "eth_chainId" => Ok(json!("0x1")),
            "echo" => Ok(Value::Array(params.to_vec())),
            _ => Err(TransportError::Rpc(format!("{} not supported", method))),
        }
    }

    fn endpoint(&self) -> &str { "dummy://" }
}

#[tokio::test]
async fn consumer_can_call_transport() {
    let t = DummyTransport;
    let v = t.send("eth_chainId", &[]).await.expect("ok");
    assert_eq!(v, "0x1");
}

#[tokio::test]
async fn params_reach_the_transport_in_order() {
    let t: DynTransport = Arc::new(DummyTransport);
    let v = t.send("echo", &[json!("latest"), json!(false)]).await.expect("ok");
    assert_eq!(v, json!(["latest", false]));
    assert_eq!(t.endpoint(), "dummy://");
}

#[tokio::test]
async fn consumer_sees_rpc_error() {
    let t = DummyTransport;
    let err = t.send("trace_block", &[]).await.expect_err("should err");
    match err {
        TransportError::Rpc(msg) => assert!(msg.contains("trace_block")),
        _ => panic!("unexpected error variant"),
    }
}
