//! Upstream JSON-RPC providers.
//!
//! Each provider has a stable key used by the capability dataset, a display
//! name and, for providers that need one, the placeholder that endpoint
//! templates carry in place of a credential.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Upstream JSON-RPC providers covered by the capability dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Provider {
    /// Alchemy
    #[serde(rename = "alchemy")]
    Alchemy,
    /// Ankr
    #[serde(rename = "ankr")]
    Ankr,
    /// Blast API
    #[serde(rename = "blast")]
    Blast,
    /// Chainstack
    #[serde(rename = "chainstack")]
    Chainstack,
    /// Cloudflare
    #[serde(rename = "cloudflare")]
    Cloudflare,
    /// dRPC
    #[serde(rename = "drpc")]
    Drpc,
    /// Infura
    #[serde(rename = "infura")]
    Infura,
    /// Llama Nodes
    #[serde(rename = "llamaNodes")]
    LlamaNodes,
    /// 1RPC
    #[serde(rename = "oneRpc")]
    OneRpc,
    /// Public Node
    #[serde(rename = "publicNode")]
    PublicNode,
    /// QuickNode
    #[serde(rename = "quickNode")]
    QuickNode,
    /// Tenderly
    #[serde(rename = "tenderly")]
    Tenderly,
}

struct ProviderMetadata {
    key: &'static str,
    display_name: &'static str,
    credential_placeholder: Option<&'static str>,
    credential_env: Option<&'static str>,
}

impl ProviderMetadata {
    const fn new(
        key: &'static str,
        display_name: &'static str,
        credential_placeholder: Option<&'static str>,
        credential_env: Option<&'static str>,
    ) -> Self {
        Self { key, display_name, credential_placeholder, credential_env }
    }
}

const PROVIDER_METADATA: [ProviderMetadata; 12] = [
    ProviderMetadata::new("alchemy", "Alchemy", Some("API_KEY"), Some("ALCHEMY_KEY")),
    ProviderMetadata::new("ankr", "Ankr", None, None),
    ProviderMetadata::new("blast", "Blast", Some("PROJECT_ID"), Some("BLAST_PROJECT_ID")),
    ProviderMetadata::new("chainstack", "Chainstack", Some("ACCESS_KEY"), None),
    ProviderMetadata::new("cloudflare", "Cloudflare", None, None),
    ProviderMetadata::new("drpc", "dRPC", None, None),
    ProviderMetadata::new("infura", "Infura", Some("API_KEY"), Some("INFURA_KEY")),
    ProviderMetadata::new(
        "llamaNodes",
        "Llama Nodes",
        Some("PROJECT_ID"),
        Some("LLAMA_NODES_PROJECT_ID"),
    ),
    ProviderMetadata::new("oneRpc", "1RPC", None, None),
    ProviderMetadata::new("publicNode", "Public Node", None, None),
    ProviderMetadata::new("quickNode", "QuickNode", Some("APP_KEY"), None),
    ProviderMetadata::new("tenderly", "Tenderly", Some("ACCESS_KEY"), Some("TENDERLY_ACCESS_KEY")),
];

impl Provider {
    /// Every provider, in dataset order.
    pub const ALL: [Provider; 12] = [
        Provider::Alchemy,
        Provider::Ankr,
        Provider::Blast,
        Provider::Chainstack,
        Provider::Cloudflare,
        Provider::Drpc,
        Provider::Infura,
        Provider::LlamaNodes,
        Provider::OneRpc,
        Provider::PublicNode,
        Provider::QuickNode,
        Provider::Tenderly,
    ];

    fn metadata(&self) -> &'static ProviderMetadata { &PROVIDER_METADATA[*self as usize] }

    /// Stable key used by the capability dataset (e.g. `llamaNodes`).
    pub fn as_str(&self) -> &'static str { self.metadata().key }

    /// Human-readable name (e.g. `Llama Nodes`).
    pub fn display_name(&self) -> &'static str { self.metadata().display_name }

    /// Placeholder standing in for the credential inside endpoint templates.
    ///
    /// `None` for public providers that need no key.
    pub fn credential_placeholder(&self) -> Option<&'static str> {
        self.metadata().credential_placeholder
    }

    /// Environment variable the probe reads the credential from, if the probe
    /// supports this provider's authentication.
    pub fn credential_env(&self) -> Option<&'static str> { self.metadata().credential_env }

    /// Whether an endpoint for this provider needs a credential.
    pub fn requires_credential(&self) -> bool { self.credential_placeholder().is_some() }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Provider::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s || p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown provider: {}", s))
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}
