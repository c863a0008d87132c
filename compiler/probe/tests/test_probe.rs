use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

use atlas_probe::samples::{method_samples, ZERO_HASH};
use atlas_probe::Prober;
use catalog::MethodCatalog;
use ir::MethodGroup;
use providers::{Feature, ProviderRegistry, ProviderRegistryReader, SupportStatus};
use serde_json::{json, Value};
use tempfile::NamedTempFile;
use transport::{Transport, TransportError};
use types::{Chain, Provider};

/// Answers from a script: listed methods fail, hang, or succeed.
struct ScriptedTransport {
    failing: HashSet<&'static str>,
    hanging: HashSet<&'static str>,
    block: Value,
    calls: Mutex<Vec<(String, Vec<Value>)>>,
}

impl ScriptedTransport {
    fn new() -> Self {
        Self {
            failing: HashSet::new(),
            hanging: HashSet::new(),
            block: json!({ "hash": "0xfeed", "number": "0x10" }),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls_to(&self, method: &str) -> Vec<Vec<Value>> {
        let calls = self.calls.lock().expect("lock");
        calls.iter().filter(|(m, _)| m == method).map(|(_, p)| p.clone()).collect()
    }
}

#[async_trait::async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, method: &str, params: &[Value]) -> Result<Value, TransportError> {
        self.calls.lock().expect("lock").push((method.to_string(), params.to_vec()));
        if self.hanging.contains(method) {
            std::future::pending::<()>().await;
        }
        if self.failing.contains(method) {
            return Err(TransportError::Rpc(format!("{{\"code\":-32601,\"message\":\"{} not found\"}}", method)));
        }
        match method {
            "eth_getBlockByNumber" => Ok(self.block.clone()),
            _ => Ok(json!("0x1")),
        }
    }

    fn endpoint(&self) -> &str { "scripted://" }
}

fn prober() -> Prober { Prober::new(Duration::from_millis(50)) }

#[tokio::test]
async fn outcomes_map_to_tri_state() {
    let mut transport = ScriptedTransport::new();
    transport.failing.insert("trace_block");
    transport.hanging.insert("eth_getProof");

    let methods = prober().probe_methods(&transport).await;
    assert_eq!(methods["eth_chainId"], SupportStatus::Supported);
    assert_eq!(methods["trace_block"], SupportStatus::Unsupported);
    assert_eq!(methods["eth_getProof"], SupportStatus::Unknown);
}

#[tokio::test]
async fn latest_block_hash_is_used_and_falls_back_to_zero() {
    let transport = ScriptedTransport::new();
    prober().probe_methods(&transport).await;
    assert_eq!(transport.calls_to("eth_getBlockByHash"), vec![vec![json!("0xfeed"), json!(false)]]);

    let mut headless = ScriptedTransport::new();
    headless.block = Value::Null;
    assert_eq!(prober().latest_block_hash(&headless).await, ZERO_HASH);

    let mut failing = ScriptedTransport::new();
    failing.failing.insert("eth_getBlockByNumber");
    assert_eq!(prober().latest_block_hash(&failing).await, ZERO_HASH);
}

#[tokio::test]
async fn features_use_fixed_probes() {
    let mut transport = ScriptedTransport::new();
    transport.failing.insert("eth_getStorageAt");

    let features = prober().probe_features(&transport).await;
    assert_eq!(features.get(Feature::Websockets), SupportStatus::Unknown);
    assert_eq!(features.get(Feature::LatestState), SupportStatus::Supported);
    assert_eq!(features.get(Feature::LatestEvents), SupportStatus::Supported);
    assert_eq!(features.get(Feature::HistoricalState), SupportStatus::Unsupported);
    assert_eq!(features.get(Feature::HistoricalEvents), SupportStatus::Supported);

    let logs = transport.calls_to("eth_getLogs");
    assert_eq!(logs[0], vec![json!({ "fromBlock": "latest", "toBlock": "latest" })]);
    assert_eq!(logs[1], vec![json!({ "fromBlock": "0x989680", "toBlock": "0x989680" })]);
    assert_eq!(
        transport.calls_to("eth_getStorageAt"),
        vec![vec![json!("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"), json!("0x0"), json!("0x1")]]
    );
}

#[tokio::test]
async fn endpoint_result_is_timestamped() {
    let transport = ScriptedTransport::new();
    let before = chrono::Utc::now().timestamp_millis();
    let data = prober().probe_endpoint(&transport).await;
    assert!(data.timestamp >= before);
    assert!(data.probed_at().is_some());
    assert_eq!(data.methods_with(SupportStatus::Supported).count(), data.methods.len());
}

#[tokio::test]
async fn probed_entry_survives_a_dataset_write() {
    let mut transport = ScriptedTransport::new();
    transport.failing.insert("trace_block");
    let data = prober().probe_endpoint(&transport).await;

    let mut registry = ProviderRegistry::new();
    registry.insert(Provider::PublicNode, Chain::Base.id(), data.clone());
    let file = NamedTempFile::new().expect("Failed to create temp file");
    registry.save(file.path()).expect("Failed to save dataset");

    let reloaded = ProviderRegistry::from_file(file.path()).expect("Failed to reload dataset");
    assert_eq!(reloaded.get_entry(Provider::PublicNode, 8453), Some(&data));
    assert_eq!(
        reloaded.method_status(Provider::PublicNode, 8453, "trace_block"),
        Some(SupportStatus::Unsupported)
    );
}

#[test]
fn every_reading_method_has_a_sample() {
    let catalog = MethodCatalog::for_chain(None).expect("catalog should build");
    let sampled: HashSet<&str> = method_samples(ZERO_HASH).into_iter().map(|(id, _)| id).collect();
    for method in catalog.methods() {
        assert_eq!(
            sampled.contains(method.id.as_str()),
            method.group != MethodGroup::Writing,
            "{}",
            method.id
        );
    }
}
