//! Supported networks.
//!
//! A [`Chain`] is a closed enum; its slug, numeric id and endpoint templates
//! live in a static metadata table indexed by variant. The slug and the
//! numeric id are each unique across [`Chain::ALL`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::provider::Provider;

/// Placeholder inside endpoint templates that is replaced by a credential.
const KEY: &str = "{key}";

/// Supported networks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    /// Ethereum mainnet
    #[default]
    Ethereum,
    /// OP mainnet
    Optimism,
    /// Base mainnet
    Base,
    /// Polygon PoS
    Polygon,
    /// Arbitrum One
    Arbitrum,
}

struct ChainMetadata {
    slug: &'static str,
    display_name: &'static str,
    id: u64,
    default_rpc_url: &'static str,
    endpoints: &'static [(Provider, &'static str)],
}

const CHAIN_METADATA: [ChainMetadata; 5] = [
    ChainMetadata {
        slug: "ethereum",
        display_name: "Ethereum",
        id: 1,
        default_rpc_url: "https://rpc.ankr.com/eth",
        endpoints: &[
            (Provider::Alchemy, "https://eth-mainnet.g.alchemy.com/v2/{key}"),
            (Provider::Ankr, "https://rpc.ankr.com/eth"),
            (Provider::Blast, "https://eth-mainnet.blastapi.io/{key}"),
            (Provider::Chainstack, "https://ethereum-mainnet.core.chainstack.com/{key}"),
            (Provider::Cloudflare, "https://cloudflare-eth.com"),
            (Provider::Drpc, "https://eth.drpc.org"),
            (Provider::Infura, "https://mainnet.infura.io/v3/{key}"),
            (Provider::LlamaNodes, "https://eth.llamarpc.com/rpc/{key}"),
            (Provider::OneRpc, "https://1rpc.io/eth"),
            (Provider::PublicNode, "https://ethereum-rpc.publicnode.com"),
            (Provider::QuickNode, "https://APP_NAME.quiknode.pro/{key}"),
            (Provider::Tenderly, "https://mainnet.gateway.tenderly.co/{key}"),
        ],
    },
    ChainMetadata {
        slug: "optimism",
        display_name: "Optimism",
        id: 10,
        default_rpc_url: "https://rpc.ankr.com/optimism",
        endpoints: &[
            (Provider::Alchemy, "https://opt-mainnet.g.alchemy.com/v2/{key}"),
            (Provider::Ankr, "https://rpc.ankr.com/optimism"),
            (Provider::Blast, "https://optimism-mainnet.blastapi.io/{key}"),
            (Provider::Chainstack, "https://optimism-mainnet.core.chainstack.com/{key}"),
            (Provider::Drpc, "https://optimism.drpc.org"),
            (Provider::Infura, "https://optimism-mainnet.infura.io/v3/{key}"),
            (Provider::LlamaNodes, "https://optimism.llamarpc.com/rpc/{key}"),
            (Provider::OneRpc, "https://1rpc.io/op"),
            (Provider::PublicNode, "https://optimism-rpc.publicnode.com"),
            (Provider::QuickNode, "https://APP_NAME.optimism.quiknode.pro/{key}"),
            (Provider::Tenderly, "https://optimism.gateway.tenderly.co/{key}"),
        ],
    },
    ChainMetadata {
        slug: "base",
        display_name: "Base",
        id: 8453,
        default_rpc_url: "https://mainnet.base.org",
        endpoints: &[
            (Provider::Alchemy, "https://base-mainnet.g.alchemy.com/v2/{key}"),
            (Provider::Ankr, "https://rpc.ankr.com/base"),
            (Provider::Blast, "https://base-mainnet.blastapi.io/{key}"),
            (Provider::Chainstack, "https://base-mainnet.core.chainstack.com/{key}"),
            (Provider::Drpc, "https://base.drpc.org"),
            (Provider::Infura, "https://base-mainnet.infura.io/v3/{key}"),
            (Provider::LlamaNodes, "https://base.llamarpc.com/rpc/{key}"),
            (Provider::OneRpc, "https://1rpc.io/base"),
            (Provider::PublicNode, "https://base-rpc.publicnode.com"),
            (Provider::QuickNode, "https://APP_NAME.base-mainnet.quiknode.pro/{key}"),
            (Provider::Tenderly, "https://base.gateway.tenderly.co/{key}"),
        ],
    },
    ChainMetadata {
        slug: "polygon",
        display_name: "Polygon",
        id: 137,
        default_rpc_url: "https://rpc.ankr.com/polygon",
        endpoints: &[
            (Provider::Alchemy, "https://polygon-mainnet.g.alchemy.com/v2/{key}"),
            (Provider::Ankr, "https://rpc.ankr.com/polygon"),
            (Provider::Blast, "https://polygon-mainnet.blastapi.io/{key}"),
            (Provider::Chainstack, "https://polygon-mainnet.core.chainstack.com/{key}"),
            (Provider::Drpc, "https://polygon.drpc.org"),
            (Provider::Infura, "https://polygon-mainnet.infura.io/v3/{key}"),
            (Provider::LlamaNodes, "https://polygon.llamarpc.com/rpc/{key}"),
            (Provider::OneRpc, "https://1rpc.io/matic"),
            (Provider::PublicNode, "https://polygon-bor-rpc.publicnode.com"),
            (Provider::QuickNode, "https://APP_NAME.matic.quiknode.pro/{key}"),
            (Provider::Tenderly, "https://polygon.gateway.tenderly.co/{key}"),
        ],
    },
    ChainMetadata {
        slug: "arbitrum",
        display_name: "Arbitrum",
        id: 42161,
        default_rpc_url: "https://rpc.ankr.com/arbitrum",
        endpoints: &[
            (Provider::Alchemy, "https://arb-mainnet.g.alchemy.com/v2/{key}"),
            (Provider::Ankr, "https://rpc.ankr.com/arbitrum"),
            (Provider::Blast, "https://arbitrum-one.blastapi.io/{key}"),
            (Provider::Chainstack, "https://arbitrum-mainnet.core.chainstack.com/{key}"),
            (Provider::Drpc, "https://arbitrum.drpc.org"),
            (Provider::Infura, "https://arbitrum-mainnet.infura.io/v3/{key}"),
            (Provider::LlamaNodes, "https://arbitrum.llamarpc.com/rpc/{key}"),
            (Provider::OneRpc, "https://1rpc.io/arb"),
            (Provider::PublicNode, "https://arbitrum-one-rpc.publicnode.com"),
            (Provider::QuickNode, "https://APP_NAME.arbitrum-mainnet.quiknode.pro/{key}"),
            (Provider::Tenderly, "https://arbitrum.gateway.tenderly.co/{key}"),
        ],
    },
];

impl Chain {
    /// Every supported chain, in display order.
    pub const ALL: [Chain; 5] =
        [Chain::Ethereum, Chain::Optimism, Chain::Base, Chain::Polygon, Chain::Arbitrum];

    /// Chain used whenever no chain, or an unknown one, is selected.
    pub const BASELINE: Chain = Chain::Ethereum;

    fn metadata(&self) -> &'static ChainMetadata { &CHAIN_METADATA[*self as usize] }

    /// Canonical slug (e.g. `optimism`).
    pub fn as_str(&self) -> &'static str { self.metadata().slug }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str { self.metadata().display_name }

    /// Numeric EIP-155 chain id.
    pub fn id(&self) -> u64 { self.metadata().id }

    /// Public RPC URL usable without credentials.
    pub fn default_rpc_url(&self) -> &'static str { self.metadata().default_rpc_url }

    /// Look up a chain by its numeric id.
    pub fn from_id(id: u64) -> Option<Chain> { Chain::ALL.into_iter().find(|c| c.id() == id) }

    /// Providers with an endpoint template for this chain.
    pub fn providers(&self) -> impl Iterator<Item = Provider> + '_ {
        self.metadata().endpoints.iter().map(|(p, _)| *p)
    }

    fn template(&self, provider: Provider) -> Option<&'static str> {
        self.metadata().endpoints.iter().find(|(p, _)| *p == provider).map(|(_, url)| *url)
    }

    /// Endpoint URL for `provider` with the provider's credential placeholder
    /// (e.g. `API_KEY`) left in place. `None` if the provider does not serve
    /// this chain.
    pub fn endpoint(&self, provider: Provider) -> Option<String> {
        let placeholder = provider.credential_placeholder().unwrap_or_default();
        self.template(provider).map(|url| url.replace(KEY, placeholder))
    }

    /// Endpoint URL for `provider` with `key` substituted for the credential.
    pub fn endpoint_with_key(&self, provider: Provider, key: &str) -> Option<String> {
        self.template(provider).map(|url| url.replace(KEY, key))
    }
}

impl FromStr for Chain {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        if let Some(chain) = Chain::ALL.into_iter().find(|c| c.as_str() == lowered) {
            return Ok(chain);
        }
        s.parse::<u64>()
            .ok()
            .and_then(Chain::from_id)
            .ok_or_else(|| format!("Unknown chain: {}", s))
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_is_indexed_by_variant() {
        assert_eq!(Chain::Ethereum.id(), 1);
        assert_eq!(Chain::Optimism.id(), 10);
        assert_eq!(Chain::Base.id(), 8453);
        assert_eq!(Chain::Polygon.id(), 137);
        assert_eq!(Chain::Arbitrum.id(), 42161);
    }

    #[test]
    fn test_from_str_accepts_slug_and_id() {
        assert_eq!("Base".parse::<Chain>().expect("slug"), Chain::Base);
        assert_eq!("42161".parse::<Chain>().expect("id"), Chain::Arbitrum);
        assert!("goerli".parse::<Chain>().is_err());
        assert!("5".parse::<Chain>().is_err());
    }

    #[test]
    fn test_endpoint_placeholders() {
        let url = Chain::Ethereum.endpoint(Provider::Infura).expect("infura serves ethereum");
        assert_eq!(url, "https://mainnet.infura.io/v3/API_KEY");

        let url = Chain::Ethereum.endpoint(Provider::Ankr).expect("ankr serves ethereum");
        assert_eq!(url, "https://rpc.ankr.com/eth");

        assert!(Chain::Polygon.endpoint(Provider::Cloudflare).is_none());
    }

    #[test]
    fn test_endpoint_with_key() {
        let url = Chain::Base
            .endpoint_with_key(Provider::Alchemy, "secret")
            .expect("alchemy serves base");
        assert_eq!(url, "https://base-mainnet.g.alchemy.com/v2/secret");
    }
}
