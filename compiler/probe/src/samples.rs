//! Fixed call arguments used to probe each method.
//!
//! The values are chosen to be cheap for the node: the zero address, the zero
//! hash and the head block. Only the block hash varies per endpoint.

use ir::ids::*;
use serde_json::{json, Value};

/// `0x` followed by forty zeros.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// `0x` followed by sixty-four zeros.
pub const ZERO_HASH: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";

/// Wrapped ether on Ethereum mainnet, read at block 1 by the archive probe.
pub const WETH: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";

/// Block probed for archive logs.
pub const HISTORICAL_LOG_BLOCK: u64 = 10_000_000;

/// Wire params for every probed method, in probe order.
///
/// Writing methods are not probed: any payload cheap enough to send is one
/// the node would reject, so their support stays unrecorded.
pub fn method_samples(block_hash: &str) -> Vec<(&'static str, Vec<Value>)> {
    let tracer = json!({ "tracer": "callTracer" });
    vec![
        (CHAIN_ID, vec![]),
        (BLOCK_NUMBER, vec![]),
        (GAS_PRICE, vec![]),
        (MAX_PRIORITY_FEE_PER_GAS, vec![]),
        (BLOB_BASE_FEE, vec![]),
        (FEE_HISTORY, vec![json!("0x1"), json!("latest"), json!([])]),
        (GET_BALANCE, vec![json!(ZERO_ADDRESS), json!("latest")]),
        (GET_CODE, vec![json!(ZERO_ADDRESS), json!("latest")]),
        (GET_STORAGE_AT, vec![json!(ZERO_ADDRESS), json!("0x0"), json!("latest")]),
        (CALL, vec![json!({ "to": ZERO_ADDRESS }), json!("latest")]),
        (ESTIMATE_GAS, vec![json!({ "to": ZERO_ADDRESS })]),
        (GET_LOGS, vec![json!({ "fromBlock": "latest", "toBlock": "latest" })]),
        (GET_PROOF, vec![json!(ZERO_ADDRESS), json!([]), json!("latest")]),
        (GET_TRANSACTION_COUNT, vec![json!(ZERO_ADDRESS), json!("latest")]),
        (GET_BLOCK_BY_NUMBER, vec![json!("latest"), json!(false)]),
        (GET_BLOCK_BY_HASH, vec![json!(block_hash), json!(false)]),
        (GET_BLOCK_TRANSACTION_COUNT_BY_NUMBER, vec![json!("latest")]),
        (GET_BLOCK_TRANSACTION_COUNT_BY_HASH, vec![json!(block_hash)]),
        (GET_UNCLE_COUNT_BY_BLOCK_NUMBER, vec![json!("latest")]),
        (GET_UNCLE_COUNT_BY_BLOCK_HASH, vec![json!(block_hash)]),
        (GET_TRANSACTION_BY_HASH, vec![json!(ZERO_HASH)]),
        (GET_TRANSACTION_BY_BLOCK_NUMBER_AND_INDEX, vec![json!("latest"), json!("0x0")]),
        (GET_TRANSACTION_BY_BLOCK_HASH_AND_INDEX, vec![json!(block_hash), json!("0x0")]),
        (GET_TRANSACTION_RECEIPT, vec![json!(ZERO_HASH)]),
        (GET_UNCLE_BY_BLOCK_NUMBER_AND_INDEX, vec![json!("latest"), json!("0x0")]),
        (GET_UNCLE_BY_BLOCK_HASH_AND_INDEX, vec![json!(block_hash), json!("0x0")]),
        (SYNCING, vec![]),
        (COINBASE, vec![]),
        (ACCOUNTS, vec![]),
        (MINING, vec![]),
        (HASHRATE, vec![]),
        (GET_WORK, vec![]),
        (DEBUG_TRACE_CALL, vec![json!({ "to": ZERO_ADDRESS }), json!("latest"), tracer.clone()]),
        (DEBUG_TRACE_TRANSACTION, vec![json!(ZERO_HASH), tracer.clone()]),
        (DEBUG_TRACE_BLOCK_BY_NUMBER, vec![json!("latest"), tracer.clone()]),
        (DEBUG_TRACE_BLOCK_BY_HASH, vec![json!(block_hash), tracer]),
        (TRACE_BLOCK, vec![json!("latest")]),
        (TRACE_CALL, vec![json!({}), json!(["trace"]), json!("latest")]),
        (TRACE_FILTER, vec![json!({})]),
        (TRACE_RAW_TRANSACTION, vec![json!(ZERO_HASH), json!(["trace"])]),
        (TRACE_REPLAY_BLOCK_TRANSACTIONS, vec![json!("latest"), json!(["trace"])]),
        (TRACE_REPLAY_TRANSACTION, vec![json!(ZERO_HASH), json!(["trace"])]),
        (TRACE_TRANSACTION, vec![json!(ZERO_HASH)]),
        (ERIGON_BLOCK_NUMBER, vec![]),
        (ERIGON_HEADER_BY_NUMBER, vec![json!("0x0")]),
        (ERIGON_HEADER_BY_HASH, vec![json!(block_hash)]),
        (ERIGON_LOGS_BY_HASH, vec![json!(block_hash)]),
        (ERIGON_BLOCK_BY_TIMESTAMP, vec![json!("0"), json!(false)]),
        (ERIGON_LATEST_LOGS, vec![json!({}), json!({ "logCount": 1 })]),
        (ERIGON_BLOCK_RECEIPTS_BY_BLOCK_HASH, vec![json!(block_hash)]),
    ]
}

/// Block-number argument in the wire's hex quantity form.
pub fn quantity(n: u64) -> String { format!("{:#x}", n) }

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_block_hash_is_threaded_through() {
        let samples = method_samples("0xabc");
        let by_hash = samples.iter().find(|(id, _)| *id == GET_BLOCK_BY_HASH).expect("sampled");
        assert_eq!(by_hash.1, vec![json!("0xabc"), json!(false)]);
    }

    #[test]
    fn test_no_method_is_sampled_twice() {
        let samples = method_samples(ZERO_HASH);
        let unique: HashSet<_> = samples.iter().map(|(id, _)| *id).collect();
        assert_eq!(unique.len(), samples.len());
        assert!(!unique.contains(SEND_RAW_TRANSACTION));
    }

    #[test]
    fn test_quantity() {
        assert_eq!(quantity(1), "0x1");
        assert_eq!(quantity(HISTORICAL_LOG_BLOCK), "0x989680");
    }
}
