//! Per-chain sample values used to pre-fill parameter forms.
//!
//! Every chain has an explicit record in [`get_defaults`]; adding a
//! [`Chain`] variant without one fails to compile. Raw identifiers that do
//! not name a supported chain resolve to [`Chain::BASELINE`].

use serde::{Deserialize, Serialize};
use types::Chain;

/// Address used for account-style params on every chain (vitalik.eth).
pub const DEFAULT_ADDRESS: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";

/// Signed EIP-1559 transfer used for raw-transaction params.
const TRANSACTION_INPUT: &str = "0x02f8730182012a8405f5e10085174876e80082520894d8da6bf26964af9d7eed9e03e53415d37aa9604587038d7ea4c6800080c080a0454349e422f05297191ead13e21d3db520e5abef52055e4964b82fb213f593a1a0043a718774c572bd8a25adbeb1bfcd5c0256ae11cecf9f9c3f925d0e52beaf89";

/// Sample values for one chain. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDefaults {
    /// Chain the values were resolved for
    pub chain: Chain,
    /// Hash of a known block
    pub block_hash: String,
    /// Hash of a known transaction
    pub transaction_hash: String,
    /// Raw signed transaction bytes
    pub transaction_input: String,
    /// Externally owned account
    pub address: String,
    /// Wrapped-ether contract deployed on the chain
    pub contract: String,
}

impl ResolvedDefaults {
    fn new(
        chain: Chain,
        block_hash: &str,
        transaction_hash: &str,
        contract: &str,
    ) -> Self {
        Self {
            chain,
            block_hash: block_hash.to_string(),
            transaction_hash: transaction_hash.to_string(),
            transaction_input: TRANSACTION_INPUT.to_string(),
            address: DEFAULT_ADDRESS.to_string(),
            contract: contract.to_string(),
        }
    }
}

impl Default for ResolvedDefaults {
    fn default() -> Self { get_defaults(None) }
}

/// Sample values for `chain`, or for the baseline chain when none is selected.
pub fn get_defaults(chain: Option<Chain>) -> ResolvedDefaults {
    let chain = chain.unwrap_or(Chain::BASELINE);
    match chain {
        Chain::Ethereum => ResolvedDefaults::new(
            chain,
            "0x21c3ac17a523528af506a37601fcb1c81d029f8b68dc63cd094f72767acdfd13",
            "0x05f71e1b2cb4f03e547739db15d080fd30c989eda04d37ce6264c5686e0722c9",
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
        ),
        Chain::Optimism => ResolvedDefaults::new(
            chain,
            "0xb4e8f3687f535016146f643980855510bf025454859480a931aa4a7d297c81cd",
            "0x6c79b3fe80aa3ecf3696ec9707c91cb84d52c1029d4a5fcb7736688d423a3de6",
            "0x4200000000000000000000000000000000000006",
        ),
        Chain::Base => ResolvedDefaults::new(
            chain,
            "0xe96a23aba8a795a018c8980d77d636dbaafab241a4a27b52ae00b55b8ee806e5",
            "0x2270b0a3984819477c0b8abb67df54b519563b0629a88a8f239cab6765be1a5f",
            "0x4200000000000000000000000000000000000006",
        ),
        Chain::Polygon => ResolvedDefaults::new(
            chain,
            "0x4f22eb7c645467e5359eccbe5c61c5771eec30e1a47863c7b1ae337a2bef1a0c",
            "0x732dc072893bce74eb43784cae8650ddce4c4ce11940ec6d7ea6e681a83a1005",
            "0x7ceb23fd6bc0add59e62ac25578270cff1b9f619",
        ),
        Chain::Arbitrum => ResolvedDefaults::new(
            chain,
            "0xd2bcb0ef42123206fc713a4570bbd7fbaeb92ee04a252f5b410a5b563937e2bc",
            "0x732dc072893bce74eb43784cae8650ddce4c4ce11940ec6d7ea6e681a83a1005",
            "0x82af49447d8a07e3bd95bd0d56f35241523fbab1",
        ),
    }
}

/// Sample values for a numeric chain id; unknown ids get the baseline chain.
pub fn resolve_defaults_by_id(id: u64) -> ResolvedDefaults {
    let chain = Chain::from_id(id);
    if chain.is_none() {
        tracing::debug!("unknown chain id {}, using {}", id, Chain::BASELINE);
    }
    get_defaults(chain)
}

/// Sample values for a chain slug or id string; anything unknown gets the
/// baseline chain.
pub fn resolve_defaults_by_slug(slug: &str) -> ResolvedDefaults {
    let chain = slug.parse::<Chain>().ok();
    if chain.is_none() {
        tracing::debug!("unknown chain `{}`, using {}", slug, Chain::BASELINE);
    }
    get_defaults(chain)
}
