//! ethers v6 provider API.

use ir::ids::*;
use serde_json::Value;

use super::{call_fields, flag, js_call, log_filter, quoted, Block, Rule};
use crate::literal::Literal;

/// ethers rules, one entry per catalog method.
pub const RULES: &[(&str, Rule)] = &[
    (CHAIN_ID, Rule::Render(chain_id)),
    (BLOCK_NUMBER, Rule::Render(|_| js_call("blockNumber", "provider", "getBlockNumber", &[]))),
    (GAS_PRICE, Rule::Render(|_| fee_data("gasPrice"))),
    (MAX_PRIORITY_FEE_PER_GAS, Rule::Render(|_| fee_data("maxPriorityFeePerGas"))),
    (BLOB_BASE_FEE, Rule::Unsupported),
    (FEE_HISTORY, Rule::Unsupported),
    (GET_BALANCE, Rule::Render(|p| account_call("balance", "getBalance", p))),
    (GET_CODE, Rule::Render(|p| account_call("code", "getCode", p))),
    (GET_STORAGE_AT, Rule::Render(get_storage)),
    (CALL, Rule::Render(|p| js_call("result", "provider", "call", &[transaction(p)]))),
    (ESTIMATE_GAS, Rule::Render(|p| js_call("gas", "provider", "estimateGas", &[transaction(p)]))),
    (GET_LOGS, Rule::Render(|p| js_call("logs", "provider", "getLogs", &[log_filter(p)]))),
    (GET_PROOF, Rule::Unsupported),
    (GET_TRANSACTION_COUNT, Rule::Render(|p| account_call("count", "getTransactionCount", p))),
    (GET_BLOCK_BY_NUMBER, Rule::Render(get_block)),
    (GET_BLOCK_BY_HASH, Rule::Render(get_block)),
    (GET_BLOCK_TRANSACTION_COUNT_BY_NUMBER, Rule::Unsupported),
    (GET_BLOCK_TRANSACTION_COUNT_BY_HASH, Rule::Unsupported),
    (GET_UNCLE_COUNT_BY_BLOCK_NUMBER, Rule::Unsupported),
    (GET_UNCLE_COUNT_BY_BLOCK_HASH, Rule::Unsupported),
    (GET_TRANSACTION_BY_HASH, Rule::Render(|p| js_call("transaction", "provider", "getTransaction", &[quoted(p, 0)]))),
    (GET_TRANSACTION_BY_BLOCK_NUMBER_AND_INDEX, Rule::Unsupported),
    (GET_TRANSACTION_BY_BLOCK_HASH_AND_INDEX, Rule::Unsupported),
    (
        GET_TRANSACTION_RECEIPT,
        Rule::Render(|p| js_call("transactionReceipt", "provider", "getTransactionReceipt", &[quoted(p, 0)])),
    ),
    (GET_UNCLE_BY_BLOCK_NUMBER_AND_INDEX, Rule::Unsupported),
    (GET_UNCLE_BY_BLOCK_HASH_AND_INDEX, Rule::Unsupported),
    (ACCOUNTS, Rule::Unsupported),
    (COINBASE, Rule::Unsupported),
    (SYNCING, Rule::Unsupported),
    (MINING, Rule::Unsupported),
    (HASHRATE, Rule::Unsupported),
    (GET_WORK, Rule::Unsupported),
    (
        SEND_RAW_TRANSACTION,
        Rule::Render(|p| js_call("transaction", "provider", "broadcastTransaction", &[quoted(p, 0)])),
    ),
    (DEBUG_TRACE_CALL, Rule::Unsupported),
    (DEBUG_TRACE_TRANSACTION, Rule::Unsupported),
    (DEBUG_TRACE_BLOCK_BY_NUMBER, Rule::Unsupported),
    (DEBUG_TRACE_BLOCK_BY_HASH, Rule::Unsupported),
    (TRACE_BLOCK, Rule::Unsupported),
    (TRACE_CALL, Rule::Unsupported),
    (TRACE_FILTER, Rule::Unsupported),
    (TRACE_RAW_TRANSACTION, Rule::Unsupported),
    (TRACE_REPLAY_BLOCK_TRANSACTIONS, Rule::Unsupported),
    (TRACE_REPLAY_TRANSACTION, Rule::Unsupported),
    (TRACE_TRANSACTION, Rule::Unsupported),
    (ERIGON_BLOCK_NUMBER, Rule::Unsupported),
    (ERIGON_HEADER_BY_NUMBER, Rule::Unsupported),
    (ERIGON_HEADER_BY_HASH, Rule::Unsupported),
    (ERIGON_LOGS_BY_HASH, Rule::Unsupported),
    (ERIGON_BLOCK_BY_TIMESTAMP, Rule::Unsupported),
    (ERIGON_LATEST_LOGS, Rule::Unsupported),
    (ERIGON_BLOCK_RECEIPTS_BY_BLOCK_HASH, Rule::Unsupported),
];

fn chain_id(_: &[Value]) -> String {
    format!("{}\nconst chainId = network.chainId", js_call("network", "provider", "getNetwork", &[]))
}

fn fee_data(field: &str) -> String {
    format!("{}\nconst {} = feeData.{}", js_call("feeData", "provider", "getFeeData", &[]), field, field)
}

/// Positional block argument; omitted when absent.
fn block_arg(params: &[Value], index: usize, args: &mut Vec<Literal>) {
    if let Some(block) = Block::at(params, index) {
        args.push(block.positional());
    }
}

fn account_call(name: &str, call: &str, params: &[Value]) -> String {
    let mut args = vec![quoted(params, 0)];
    block_arg(params, 1, &mut args);
    js_call(name, "provider", call, &args)
}

fn get_storage(params: &[Value]) -> String {
    let mut args = vec![quoted(params, 0), quoted(params, 1)];
    block_arg(params, 2, &mut args);
    js_call("storage", "provider", "getStorage", &args)
}

fn get_block(params: &[Value]) -> String {
    let block = Block::at(params, 0).map(|b| b.positional()).unwrap_or_else(|| quoted(params, 0));
    js_call("block", "provider", "getBlock", &[block, flag(params, 1)])
}

/// Call object with `gasLimit`, a numeric `nonce` and `blockTag` inside.
fn transaction(params: &[Value]) -> Literal {
    let mut fields = Vec::new();
    for (key, value) in call_fields(params, 0) {
        let text = value.as_str().unwrap_or_default();
        match key.as_str() {
            "gas" => fields.push(("gasLimit".to_string(), Literal::string(text))),
            "nonce" => fields.push((key, Literal::number(text))),
            _ => fields.push((key, Literal::from_value(&value))),
        }
    }
    if let Some(block) = Block::at(params, 1) {
        fields.push(("blockTag".to_string(), block.positional()));
    }
    Literal::Map(fields)
}
