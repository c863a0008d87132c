#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Provider Capability Store: which providers serve which methods.
//!
//! The dataset is produced offline by the probe and checked in. It maps
//! provider → chain id → [`ProviderChainData`]. This crate only reads it: a
//! chain missing under a provider means "never probed", which is different
//! from a method probed as [`SupportStatus::Unknown`].

pub mod support;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use thiserror::Error;
use types::Provider;

pub use support::{Feature, Features, ProviderChainData, SupportStatus};

/// Dataset shipped with the workspace.
pub const BUNDLED_DATASET: &str = include_str!("../resources/providers.json");

/// Errors raised while loading or writing a capability dataset.
#[derive(Debug, Error)]
pub enum ProviderDataError {
    /// The dataset file could not be read or written.
    #[error("Failed to access provider dataset {path}: {source}")]
    Io {
        /// Dataset path
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// The dataset is not valid JSON of the expected shape.
    #[error("Invalid provider dataset: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenient result type for dataset access.
pub type Result<T> = std::result::Result<T, ProviderDataError>;

/// Capability data of every probed (provider, chain) pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderRegistry {
    /// Map from provider to chain id to probe result
    entries: BTreeMap<Provider, BTreeMap<u64, ProviderChainData>>,
}

impl ProviderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self { Self::default() }

    /// Parse a dataset document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Load a dataset file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .map_err(|source| ProviderDataError::Io { path: path.display().to_string(), source })?;
        let registry = Self::from_json_str(&json)?;
        tracing::debug!("loaded capability data for {} providers from {}", registry.entries.len(), path.display());
        Ok(registry)
    }

    /// The dataset compiled into this crate.
    pub fn bundled() -> Result<Self> { Self::from_json_str(BUNDLED_DATASET) }

    /// Record the probe result of one (provider, chain) pair.
    pub fn insert(&mut self, provider: Provider, chain_id: u64, data: ProviderChainData) {
        self.entries.entry(provider).or_default().insert(chain_id, data);
    }

    /// Pretty-printed dataset document.
    pub fn to_json_string(&self) -> Result<String> { Ok(serde_json::to_string_pretty(&self.entries)?) }

    /// Write the dataset document to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json_string()?;
        fs::write(path, json).map_err(|source| ProviderDataError::Io { path: path.display().to_string(), source })
    }
}

/// Read-only interface to the `ProviderRegistry`.
pub trait ProviderRegistryReader {
    /// Probe result of `provider` on `chain_id`.
    ///
    /// Returns `None` if the pair was never probed.
    fn get_entry(&self, provider: Provider, chain_id: u64) -> Option<&ProviderChainData>;

    /// Providers with data for `chain_id`.
    fn providers_for(&self, chain_id: u64) -> Vec<Provider>;

    /// Probed status of one method.
    ///
    /// `None` when the pair or the method was never probed.
    fn method_status(&self, provider: Provider, chain_id: u64, method: &str) -> Option<SupportStatus> {
        self.get_entry(provider, chain_id).and_then(|d| d.method_status(method))
    }

    /// Total number of probed (provider, chain) pairs.
    fn entry_count(&self) -> usize;
}

impl ProviderRegistryReader for ProviderRegistry {
    fn get_entry(&self, provider: Provider, chain_id: u64) -> Option<&ProviderChainData> {
        self.entries.get(&provider).and_then(|chains| chains.get(&chain_id))
    }

    fn providers_for(&self, chain_id: u64) -> Vec<Provider> {
        self.entries
            .iter()
            .filter(|(_, chains)| chains.contains_key(&chain_id))
            .map(|(provider, _)| *provider)
            .collect()
    }

    fn entry_count(&self) -> usize { self.entries.values().map(BTreeMap::len).sum() }
}
