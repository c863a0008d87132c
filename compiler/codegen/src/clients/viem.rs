//! viem public client actions.
//!
//! Every action takes a single options object. Block selectors split into
//! `blockTag` or `blockNumber` (bigint) depending on the input form.

use ir::ids::*;
use serde_json::Value;

use super::{arg, call_fields, field, flag, js_call, quoted, text, Block, Rule};
use crate::literal::Literal;

/// viem rules, one entry per catalog method.
pub const RULES: &[(&str, Rule)] = &[
    (CHAIN_ID, Rule::Render(|_| client("chainId", "getChainId", vec![]))),
    (BLOCK_NUMBER, Rule::Render(|_| client("blockNumber", "getBlockNumber", vec![]))),
    (GAS_PRICE, Rule::Render(|_| client("gasPrice", "getGasPrice", vec![]))),
    (MAX_PRIORITY_FEE_PER_GAS, Rule::Render(|_| client("maxPriorityFeePerGas", "estimateMaxPriorityFeePerGas", vec![]))),
    (BLOB_BASE_FEE, Rule::Render(|_| client("blobBaseFee", "getBlobBaseFee", vec![]))),
    (FEE_HISTORY, Rule::Render(fee_history)),
    (GET_BALANCE, Rule::Render(|p| account_action("balance", "getBalance", p))),
    (GET_CODE, Rule::Render(|p| account_action("bytecode", "getBytecode", p))),
    (GET_STORAGE_AT, Rule::Render(get_storage_at)),
    (CALL, Rule::Render(|p| client("data", "call", transaction(p)))),
    (ESTIMATE_GAS, Rule::Render(|p| client("gas", "estimateGas", transaction(p)))),
    (GET_LOGS, Rule::Unsupported),
    (GET_PROOF, Rule::Render(get_proof)),
    (GET_TRANSACTION_COUNT, Rule::Render(|p| account_action("transactionCount", "getTransactionCount", p))),
    (GET_BLOCK_BY_NUMBER, Rule::Render(|p| block_action("block", "getBlock", p, Some(flag(p, 1))))),
    (GET_BLOCK_BY_HASH, Rule::Render(|p| hash_action("block", "getBlock", p, Some(flag(p, 1))))),
    (GET_BLOCK_TRANSACTION_COUNT_BY_NUMBER, Rule::Render(|p| block_action("count", "getBlockTransactionCount", p, None))),
    (GET_BLOCK_TRANSACTION_COUNT_BY_HASH, Rule::Render(|p| hash_action("count", "getBlockTransactionCount", p, None))),
    (GET_UNCLE_COUNT_BY_BLOCK_NUMBER, Rule::Unsupported),
    (GET_UNCLE_COUNT_BY_BLOCK_HASH, Rule::Unsupported),
    (GET_TRANSACTION_BY_HASH, Rule::Render(|p| client("transaction", "getTransaction", vec![hash(p)]))),
    (GET_TRANSACTION_BY_BLOCK_NUMBER_AND_INDEX, Rule::Render(transaction_by_block_number)),
    (GET_TRANSACTION_BY_BLOCK_HASH_AND_INDEX, Rule::Render(transaction_by_block_hash)),
    (GET_TRANSACTION_RECEIPT, Rule::Render(|p| client("receipt", "getTransactionReceipt", vec![hash(p)]))),
    (GET_UNCLE_BY_BLOCK_NUMBER_AND_INDEX, Rule::Unsupported),
    (GET_UNCLE_BY_BLOCK_HASH_AND_INDEX, Rule::Unsupported),
    (ACCOUNTS, Rule::Render(|_| js_call("addresses", "walletClient", "getAddresses", &[]))),
    (COINBASE, Rule::Unsupported),
    (SYNCING, Rule::Unsupported),
    (MINING, Rule::Unsupported),
    (HASHRATE, Rule::Unsupported),
    (GET_WORK, Rule::Unsupported),
    (SEND_RAW_TRANSACTION, Rule::Render(send_raw_transaction)),
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

/// Call fields emitted as bigint literals.
const BIGINT_FIELDS: [&str; 5] = ["gas", "value", "gasPrice", "maxFeePerGas", "maxPriorityFeePerGas"];

type Fields = Vec<(String, Literal)>;

/// `publicClient.<action>(...)`; the options object is omitted when empty.
fn client(name: &str, action: &str, fields: Fields) -> String {
    if fields.is_empty() {
        js_call(name, "publicClient", action, &[])
    } else {
        js_call(name, "publicClient", action, &[Literal::Map(fields)])
    }
}

/// `blockTag` or `blockNumber` for the selector at `index`.
fn block(params: &[Value], index: usize, fields: &mut Fields) {
    match Block::at(params, index) {
        Some(Block::Tag(tag)) => fields.push(("blockTag".into(), Literal::string(tag))),
        Some(Block::Number(n)) => fields.push(("blockNumber".into(), Literal::bigint(n))),
        None => {}
    }
}

fn hash(params: &[Value]) -> (String, Literal) { ("hash".into(), quoted(params, 0)) }

fn account_action(name: &str, action: &str, params: &[Value]) -> String {
    let mut fields = vec![("address".into(), quoted(params, 0))];
    block(params, 1, &mut fields);
    client(name, action, fields)
}

fn block_action(name: &str, action: &str, params: &[Value], full: Option<Literal>) -> String {
    let mut fields = Vec::new();
    block(params, 0, &mut fields);
    fields.extend(full.map(|f| ("includeTransactions".to_string(), f)));
    client(name, action, fields)
}

fn hash_action(name: &str, action: &str, params: &[Value], full: Option<Literal>) -> String {
    let mut fields = vec![("blockHash".to_string(), quoted(params, 0))];
    fields.extend(full.map(|f| ("includeTransactions".to_string(), f)));
    client(name, action, fields)
}

fn fee_history(params: &[Value]) -> String {
    let mut fields = vec![("blockCount".to_string(), arg(params, 0).map(Literal::numeric).unwrap_or(Literal::Null))];
    block(params, 1, &mut fields);
    if let Some(percentiles) = arg(params, 2) {
        fields.push(("rewardPercentiles".into(), Literal::numeric(percentiles)));
    }
    client("feeHistory", "getFeeHistory", fields)
}

fn get_storage_at(params: &[Value]) -> String {
    let mut fields =
        vec![("address".into(), quoted(params, 0)), ("slot".into(), Literal::hex_quantity(text(params, 1)))];
    block(params, 2, &mut fields);
    client("data", "getStorageAt", fields)
}

fn get_proof(params: &[Value]) -> String {
    let keys = arg(params, 1).map(Literal::from_value).unwrap_or(Literal::List(vec![]));
    let mut fields = vec![("address".into(), quoted(params, 0)), ("storageKeys".into(), keys)];
    block(params, 2, &mut fields);
    client("proof", "getProof", fields)
}

fn transaction_by_block_number(params: &[Value]) -> String {
    let mut fields = Vec::new();
    block(params, 0, &mut fields);
    fields.push(("index".into(), Literal::number(text(params, 1))));
    client("transaction", "getTransaction", fields)
}

fn transaction_by_block_hash(params: &[Value]) -> String {
    let fields = vec![
        ("blockHash".into(), quoted(params, 0)),
        ("index".into(), Literal::number(text(params, 1))),
    ];
    client("transaction", "getTransaction", fields)
}

/// Call options: `account` from `from`, bigint amounts, numeric nonce.
fn transaction(params: &[Value]) -> Fields {
    let tx = call_fields(params, 0);
    let mut fields = Vec::new();
    if tx.contains_key("from") {
        fields.push(("account".to_string(), Literal::string(field(&tx, "from"))));
    }
    for (key, value) in &tx {
        let text = value.as_str().unwrap_or_default();
        match key.as_str() {
            "from" => {}
            "nonce" => fields.push((key.clone(), Literal::number(text))),
            k if BIGINT_FIELDS.contains(&k) => fields.push((key.clone(), Literal::bigint(text))),
            _ => fields.push((key.clone(), Literal::from_value(value))),
        }
    }
    block(params, 1, &mut fields);
    fields
}

fn send_raw_transaction(params: &[Value]) -> String {
    let fields = vec![("serializedTransaction".to_string(), quoted(params, 0))];
    js_call("hash", "walletClient", "sendRawTransaction", &[Literal::Map(fields)])
}
