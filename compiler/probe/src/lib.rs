#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Offline provider capability probe.
//!
//! For each (provider, chain) pair with a reachable endpoint, the probe calls
//! every sampled method and the five feature checks, racing each call
//! against a timeout:
//!
//! - success → [`SupportStatus::Supported`]
//! - timeout → [`SupportStatus::Unknown`]
//! - any other error → [`SupportStatus::Unsupported`]
//!
//! The result is the dataset read by the `providers` crate.

pub mod samples;

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use providers::{Feature, Features, ProviderChainData, ProviderDataError, ProviderRegistry, SupportStatus};
use serde_json::{json, Value};
use thiserror::Error;
use transport::Transport;
use types::{Chain, Provider};

use crate::samples::{quantity, HISTORICAL_LOG_BLOCK, WETH, ZERO_HASH};

/// Per-call limit used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Errors raised by the probe binary.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Reading or writing the dataset failed.
    #[error(transparent)]
    Data(#[from] ProviderDataError),
    /// A `--key` argument is not `provider=credential`.
    #[error("Invalid credential `{0}`: expected <provider>=<key>")]
    InvalidCredential(String),
    /// Logging could not be set up.
    #[error(transparent)]
    Logging(#[from] logging::LoggingError),
}

/// Convenient result type for the probe.
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Provider credentials keyed by provider.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    keys: HashMap<Provider, String>,
}

impl Credentials {
    /// Credentials read from each provider's environment variable.
    pub fn from_env() -> Self {
        let mut credentials = Self::default();
        for provider in Provider::ALL {
            let Some(var) = provider.credential_env() else { continue };
            if let Ok(key) = std::env::var(var) {
                if !key.is_empty() {
                    credentials.insert(provider, key);
                }
            }
        }
        credentials
    }

    /// Set the credential for `provider`, replacing any earlier one.
    pub fn insert(&mut self, provider: Provider, key: impl Into<String>) {
        self.keys.insert(provider, key.into());
    }

    /// Parse and insert a `provider=key` pair.
    pub fn insert_pair(&mut self, pair: &str) -> Result<()> {
        let (name, key) = pair.split_once('=').ok_or_else(|| ProbeError::InvalidCredential(pair.to_string()))?;
        let provider: Provider = name.parse().map_err(|_| ProbeError::InvalidCredential(pair.to_string()))?;
        if key.is_empty() {
            return Err(ProbeError::InvalidCredential(pair.to_string()));
        }
        self.insert(provider, key);
        Ok(())
    }

    /// Endpoint for `provider` on `chain`.
    ///
    /// `None` if the provider does not serve the chain, or needs a
    /// credential that is not configured.
    pub fn endpoint(&self, chain: Chain, provider: Provider) -> Option<String> {
        if !provider.requires_credential() {
            return chain.endpoint(provider);
        }
        let key = self.keys.get(&provider)?;
        chain.endpoint_with_key(provider, key)
    }
}

/// Runs probe calls with a fixed per-call timeout.
#[derive(Debug, Clone, Copy)]
pub struct Prober {
    timeout: Duration,
}

impl Default for Prober {
    fn default() -> Self { Self::new(DEFAULT_TIMEOUT) }
}

impl Prober {
    /// Create a prober with the given per-call timeout.
    pub fn new(timeout: Duration) -> Self { Self { timeout } }

    /// Per-call timeout.
    pub fn timeout(&self) -> Duration { self.timeout }

    /// Send one call and classify the outcome.
    pub async fn probe_call(&self, transport: &dyn Transport, method: &str, params: &[Value]) -> SupportStatus {
        match tokio::time::timeout(self.timeout, transport.send(method, params)).await {
            Ok(Ok(_)) => SupportStatus::Supported,
            Ok(Err(e)) => {
                tracing::debug!("{} {}: {}", transport.endpoint(), method, e);
                SupportStatus::Unsupported
            }
            Err(_) => {
                tracing::debug!("{} {}: timed out after {:?}", transport.endpoint(), method, self.timeout);
                SupportStatus::Unknown
            }
        }
    }

    /// Hash of the latest block, or the zero hash when it cannot be fetched.
    pub async fn latest_block_hash(&self, transport: &dyn Transport) -> String {
        let params = [json!("latest"), json!(false)];
        let call = transport.send("eth_getBlockByNumber", &params);
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(block)) => match block.get("hash").and_then(Value::as_str) {
                Some(hash) => hash.to_string(),
                None => ZERO_HASH.to_string(),
            },
            _ => ZERO_HASH.to_string(),
        }
    }

    /// Probe every sampled method.
    pub async fn probe_methods(&self, transport: &dyn Transport) -> BTreeMap<String, SupportStatus> {
        let block_hash = self.latest_block_hash(transport).await;
        let mut methods = BTreeMap::new();
        for (method, params) in samples::method_samples(&block_hash) {
            let status = self.probe_call(transport, method, &params).await;
            methods.insert(method.to_string(), status);
        }
        methods
    }

    /// Probe the coarse features.
    ///
    /// WebSocket support needs a WebSocket transport, so it is always
    /// [`SupportStatus::Unknown`] here.
    pub async fn probe_features(&self, transport: &dyn Transport) -> Features {
        let historical = quantity(HISTORICAL_LOG_BLOCK);
        let mut features = Features::uniform(SupportStatus::Unknown);
        features.set(Feature::LatestState, self.probe_call(transport, "eth_blockNumber", &[]).await);
        features.set(
            Feature::LatestEvents,
            self.probe_call(transport, "eth_getLogs", &[json!({ "fromBlock": "latest", "toBlock": "latest" })])
                .await,
        );
        features.set(
            Feature::HistoricalState,
            self.probe_call(transport, "eth_getStorageAt", &[json!(WETH), json!("0x0"), json!(quantity(1))]).await,
        );
        features.set(
            Feature::HistoricalEvents,
            self.probe_call(transport, "eth_getLogs", &[json!({ "fromBlock": historical, "toBlock": historical })])
                .await,
        );
        features
    }

    /// Probe one endpoint and stamp the result with the current time.
    pub async fn probe_endpoint(&self, transport: &dyn Transport) -> ProviderChainData {
        let features = self.probe_features(transport).await;
        let methods = self.probe_methods(transport).await;
        ProviderChainData { features, methods, timestamp: chrono::Utc::now().timestamp_millis() }
    }

    /// Probe every (provider, chain) pair that has an endpoint and record the
    /// results in `registry`. Returns the number of pairs probed.
    pub async fn collect(
        &self,
        chains: &[Chain],
        providers: &[Provider],
        credentials: &Credentials,
        registry: &mut ProviderRegistry,
    ) -> usize {
        let mut probed = 0;
        for chain in chains {
            for provider in providers {
                let Some(url) = credentials.endpoint(*chain, *provider) else {
                    tracing::info!("skipping {} on {}: no endpoint", provider, chain);
                    continue;
                };
                tracing::info!("checking {} on {}", provider, chain);
                let transport = http::HttpTransport::new(url);
                let data = self.probe_endpoint(&transport).await;
                let unsupported = data.methods_with(SupportStatus::Unsupported).count();
                if unsupported == data.methods.len() {
                    tracing::warn!("{} on {}: every method failed", provider, chain);
                }
                registry.insert(*provider, chain.id(), data);
                probed += 1;
            }
        }
        probed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_providers_need_no_credentials() {
        let credentials = Credentials::default();
        assert_eq!(
            credentials.endpoint(Chain::Ethereum, Provider::PublicNode).as_deref(),
            Some("https://ethereum-rpc.publicnode.com")
        );
        assert!(credentials.endpoint(Chain::Ethereum, Provider::Alchemy).is_none());
    }

    #[test]
    fn test_credentials_are_substituted() {
        let mut credentials = Credentials::default();
        credentials.insert_pair("alchemy=secret").expect("valid pair");
        let url = credentials.endpoint(Chain::Ethereum, Provider::Alchemy).expect("alchemy serves ethereum");
        assert!(url.ends_with("/v2/secret"), "{}", url);
    }

    #[test]
    fn test_invalid_credential_pairs() {
        let mut credentials = Credentials::default();
        for pair in ["alchemy", "nobody=x", "infura="] {
            assert!(matches!(credentials.insert_pair(pair), Err(ProbeError::InvalidCredential(p)) if p == pair));
        }
    }
}
