//! web3.py `w3.eth` module.

use ir::ids::*;
use serde_json::Value;

use super::{arg, call_fields, flag, log_filter, py_call, quoted, text, Block, Rule};
use crate::literal::Literal;

/// web3.py rules, one entry per catalog method.
pub const RULES: &[(&str, Rule)] = &[
    (CHAIN_ID, Rule::Render(|_| attribute("chain_id", "chain_id"))),
    (BLOCK_NUMBER, Rule::Render(|_| attribute("block_number", "block_number"))),
    (GAS_PRICE, Rule::Render(|_| attribute("gas_price", "gas_price"))),
    (MAX_PRIORITY_FEE_PER_GAS, Rule::Render(|_| attribute("max_priority_fee", "max_priority_fee"))),
    (BLOB_BASE_FEE, Rule::Unsupported),
    (FEE_HISTORY, Rule::Render(fee_history)),
    (GET_BALANCE, Rule::Render(|p| account_call("balance", "get_balance", p))),
    (GET_CODE, Rule::Render(|p| account_call("code", "get_code", p))),
    (GET_STORAGE_AT, Rule::Render(get_storage_at)),
    (CALL, Rule::Render(|p| transaction_call("result", "call", p))),
    (ESTIMATE_GAS, Rule::Render(|p| transaction_call("gas", "estimate_gas", p))),
    (GET_LOGS, Rule::Render(|p| py_call("logs", "get_logs", &[log_filter(p)]))),
    (GET_PROOF, Rule::Render(get_proof)),
    (GET_TRANSACTION_COUNT, Rule::Render(|p| account_call("count", "get_transaction_count", p))),
    (GET_BLOCK_BY_NUMBER, Rule::Render(get_block)),
    (GET_BLOCK_BY_HASH, Rule::Render(get_block)),
    (GET_BLOCK_TRANSACTION_COUNT_BY_NUMBER, Rule::Render(|p| py_call("count", "get_block_transaction_count", &[selector(p, 0)]))),
    (GET_BLOCK_TRANSACTION_COUNT_BY_HASH, Rule::Render(|p| py_call("count", "get_block_transaction_count", &[quoted(p, 0)]))),
    (GET_UNCLE_COUNT_BY_BLOCK_NUMBER, Rule::Unsupported),
    (GET_UNCLE_COUNT_BY_BLOCK_HASH, Rule::Unsupported),
    (GET_TRANSACTION_BY_HASH, Rule::Render(|p| py_call("transaction", "get_transaction", &[quoted(p, 0)]))),
    (GET_TRANSACTION_BY_BLOCK_NUMBER_AND_INDEX, Rule::Render(|p| transaction_by_block(selector(p, 0), p))),
    (GET_TRANSACTION_BY_BLOCK_HASH_AND_INDEX, Rule::Render(|p| transaction_by_block(quoted(p, 0), p))),
    (
        GET_TRANSACTION_RECEIPT,
        Rule::Render(|p| py_call("transaction_receipt", "get_transaction_receipt", &[quoted(p, 0)])),
    ),
    (GET_UNCLE_BY_BLOCK_NUMBER_AND_INDEX, Rule::Unsupported),
    (GET_UNCLE_BY_BLOCK_HASH_AND_INDEX, Rule::Unsupported),
    (ACCOUNTS, Rule::Render(|_| attribute("accounts", "accounts"))),
    (COINBASE, Rule::Render(|_| attribute("coinbase", "coinbase"))),
    (SYNCING, Rule::Render(|_| attribute("syncing", "syncing"))),
    (MINING, Rule::Render(|_| attribute("mining", "mining"))),
    (HASHRATE, Rule::Render(|_| attribute("hashrate", "hashrate"))),
    (GET_WORK, Rule::Unsupported),
    (SEND_RAW_TRANSACTION, Rule::Render(|p| py_call("tx_hash", "send_raw_transaction", &[quoted(p, 0)]))),
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

/// Transaction dict fields emitted as Python ints.
const INT_FIELDS: [&str; 6] = ["gas", "gasPrice", "maxFeePerGas", "maxPriorityFeePerGas", "value", "nonce"];

fn attribute(name: &str, attr: &str) -> String { format!("{} = w3.eth.{}", name, attr) }

/// Block selector: tag string or int height; the tag `latest` when absent.
fn selector(params: &[Value], index: usize) -> Literal {
    Block::at(params, index).map(|b| b.positional()).unwrap_or_else(|| Literal::string("latest"))
}

fn account_call(name: &str, call: &str, params: &[Value]) -> String {
    let mut args = vec![quoted(params, 0)];
    if let Some(block) = Block::at(params, 1) {
        args.push(block.positional());
    }
    py_call(name, call, &args)
}

fn get_storage_at(params: &[Value]) -> String {
    let mut args = vec![quoted(params, 0), Literal::number(text(params, 1))];
    if let Some(block) = Block::at(params, 2) {
        args.push(block.positional());
    }
    py_call("storage", "get_storage_at", &args)
}

fn get_block(params: &[Value]) -> String {
    let block = Block::at(params, 0).map(|b| b.positional()).unwrap_or_else(|| quoted(params, 0));
    py_call("block", "get_block", &[block, flag(params, 1)])
}

fn transaction_by_block(block: Literal, params: &[Value]) -> String {
    py_call("transaction", "get_transaction_by_block", &[block, Literal::number(text(params, 1))])
}

fn fee_history(params: &[Value]) -> String {
    let count = arg(params, 0).map(Literal::numeric).unwrap_or(Literal::Null);
    let mut args = vec![count, selector(params, 1)];
    if let Some(percentiles) = arg(params, 2) {
        args.push(Literal::numeric(percentiles));
    }
    py_call("fee_history", "fee_history", &args)
}

fn get_proof(params: &[Value]) -> String {
    let keys = arg(params, 1).map(Literal::from_value).unwrap_or(Literal::List(vec![]));
    py_call("proof", "get_proof", &[quoted(params, 0), keys, selector(params, 2)])
}

/// Transaction dict without absent fields; amounts as ints.
fn transaction_call(name: &str, call: &str, params: &[Value]) -> String {
    let tx = call_fields(params, 0)
        .into_iter()
        .map(|(key, value)| {
            let literal = match value.as_str() {
                Some(raw) if INT_FIELDS.contains(&key.as_str()) => Literal::number(raw),
                _ => Literal::from_value(&value),
            };
            (key, literal)
        })
        .collect();
    let mut args = vec![Literal::Map(tx)];
    if let Some(block) = Block::at(params, 1) {
        args.push(block.positional());
    }
    py_call(name, call, &args)
}
