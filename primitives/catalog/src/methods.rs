//! The method table.
//!
//! [`get_method_list`] is the single source of truth for every method Atlas
//! knows. It is plain data: positional params with per-chain defaults
//! injected from [`ResolvedDefaults`]. Reshaping for the wire lives in
//! [`crate::wire`].

use ir::ids::*;
use ir::{MethodDescriptor, MethodGroup, Param, ParamType};
use serde_json::json;

use crate::defaults::ResolvedDefaults;

const LATEST: &str = "latest";
const ZERO_SLOT: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";

fn block() -> Param { Param::required(ParamType::BlockSelector, "block", LATEST) }

fn block_hash(d: &ResolvedDefaults) -> Param {
    Param::required(ParamType::Hash, "block", d.block_hash.as_str())
}

fn transaction_hash(d: &ResolvedDefaults) -> Param {
    Param::required(ParamType::Hash, "transaction", d.transaction_hash.as_str())
}

fn index(what: &str) -> Param {
    Param::required(ParamType::Integer, "index", "0").with_description(what)
}

fn is_full() -> Param {
    Param::optional(ParamType::Boolean, "isFull").with_description(
        "Whether to fetch the full block. If false, will only fetch the header and the list of transaction hashes.",
    )
}

fn trace_types() -> Param {
    Param::array(ParamType::TraceType, "traceTypes")
        .with_items(vec![json!("trace")])
        .with_description("Kinds of trace to return")
}

/// Call object shared by `eth_call`, `eth_estimateGas` and the tracing calls.
fn transaction(d: &ResolvedDefaults, to_required: bool) -> Param {
    let to = if to_required {
        Param::required(ParamType::Address, "to", d.contract.as_str())
    } else {
        Param::suggested(ParamType::Address, "to", d.contract.as_str())
    };
    Param::object(
        "transaction",
        vec![
            Param::optional(ParamType::Address, "from").with_description(
                "Source of the transaction call. Useful to impersonate another account.",
            ),
            to.with_description("Target contract"),
            Param::optional(ParamType::Integer, "gas"),
            Param::optional(ParamType::Integer, "gasPrice"),
            Param::optional(ParamType::Integer, "maxFeePerGas"),
            Param::optional(ParamType::Integer, "maxPriorityFeePerGas"),
            Param::optional(ParamType::Integer, "value"),
            Param::optional(ParamType::Integer, "nonce"),
            Param::optional(ParamType::Bytes, "data").with_description("Transaction call input"),
        ],
    )
}

fn no_params(id: &str, name: &str, group: MethodGroup, description: &str) -> MethodDescriptor {
    MethodDescriptor::new(id, name, group, description, vec![])
}

/// Every method, in display order, with defaults taken from `defaults`.
///
/// Pure: the same defaults always produce the same list.
pub fn get_method_list(defaults: &ResolvedDefaults) -> Vec<MethodDescriptor> {
    let d = defaults;
    let address = d.address.as_str();
    let contract = d.contract.as_str();
    use MethodGroup::*;

    vec![
        no_params(CHAIN_ID, "Get chain ID", Reading, "Returns the chain ID of the current network."),
        no_params(BLOCK_NUMBER, "Get block number", Reading, "Returns the number of most recent block."),
        no_params(GAS_PRICE, "Get gas price", Reading, "Returns the current price per gas in wei."),
        no_params(
            MAX_PRIORITY_FEE_PER_GAS,
            "Get maximum priority fee",
            Reading,
            "Returns the current maxPriorityFeePerGas per gas in wei.",
        ),
        no_params(
            BLOB_BASE_FEE,
            "Get blob base fee",
            Reading,
            "Returns the expected base fee for blobs in the next block.",
        ),
        MethodDescriptor::new(
            FEE_HISTORY,
            "Get fee history",
            Reading,
            "Returns base fee per gas and transaction effective priority fee per gas history for the requested block range.",
            vec![
                Param::required(ParamType::Integer, "blockCount", "4")
                    .with_description("Number of blocks in the requested range"),
                Param::required(ParamType::BlockSelector, "newestBlock", LATEST),
                Param::array(ParamType::Integer, "rewardPercentiles")
                    .with_items(vec![json!("25"), json!("75")])
                    .with_description("Percentiles of effective priority fees to sample"),
            ],
        ),
        MethodDescriptor::new(
            GET_BALANCE,
            "Get balance",
            Reading,
            "Returns the balance of the account of given address.",
            vec![Param::required(ParamType::Address, "account", address), block()],
        ),
        MethodDescriptor::new(
            GET_CODE,
            "Get contract code",
            Reading,
            "Returns code at a given address.",
            vec![Param::required(ParamType::Address, "contract", contract), block()],
        ),
        MethodDescriptor::new(
            GET_STORAGE_AT,
            "Get contract storage",
            Reading,
            "Returns the value from a storage position at a given address.",
            vec![
                Param::required(ParamType::Address, "contract", contract),
                Param::required(ParamType::Integer, "slot", "0")
                    .with_description("Position (index) of the memory slot"),
                block(),
            ],
        ),
        MethodDescriptor::new(
            CALL,
            "Call",
            Reading,
            "Executes a new message call immediately without creating a transaction on the block chain.",
            vec![transaction(d, true), block()],
        ),
        MethodDescriptor::new(
            ESTIMATE_GAS,
            "Estimate gas",
            Reading,
            "Generates and returns an estimate of how much gas is necessary to allow the transaction to complete. The transaction will not be added to the blockchain.",
            vec![
                transaction(d, false),
                Param::optional(ParamType::BlockSelector, "block"),
            ],
        ),
        MethodDescriptor::new(
            GET_LOGS,
            "Get logs",
            Reading,
            "Returns an array of all logs matching a given filter object.",
            vec![
                Param::suggested(ParamType::BlockSelector, "fromBlock", LATEST)
                    .with_description("Start of the fetching window"),
                Param::suggested(ParamType::BlockSelector, "toBlock", LATEST)
                    .with_description("End of the fetching window"),
                Param::suggested(ParamType::Address, "contract", contract).with_description(
                    "Source of the logs. If blank, will fetch logs from all contracts.",
                ),
                Param::optional(ParamType::Bytes32, "topic0"),
                Param::optional(ParamType::Bytes32, "topic1"),
                Param::optional(ParamType::Bytes32, "topic2"),
                Param::optional(ParamType::Bytes32, "topic3"),
            ],
        ),
        MethodDescriptor::new(
            GET_PROOF,
            "Get proof",
            Reading,
            "Returns the account and storage values of the specified account including the Merkle proof.",
            vec![
                Param::required(ParamType::Address, "contract", contract),
                Param::array(ParamType::Bytes32, "storageKeys")
                    .with_items(vec![json!(ZERO_SLOT)])
                    .with_description("Storage slots to prove"),
                block(),
            ],
        ),
        MethodDescriptor::new(
            GET_TRANSACTION_COUNT,
            "Get transaction count",
            Reading,
            "Returns the number of transactions sent from an address.",
            vec![Param::required(ParamType::Address, "account", address), block()],
        ),
        MethodDescriptor::new(
            GET_BLOCK_BY_NUMBER,
            "Get block, by number",
            Reading,
            "Returns information about a block by block number.",
            vec![block(), is_full()],
        ),
        MethodDescriptor::new(
            GET_BLOCK_BY_HASH,
            "Get block, by hash",
            Reading,
            "Returns information about a block by hash.",
            vec![block_hash(d), is_full()],
        ),
        MethodDescriptor::new(
            GET_BLOCK_TRANSACTION_COUNT_BY_NUMBER,
            "Get transaction count, by number",
            Reading,
            "Returns the number of transactions in a block matching the given block number.",
            vec![block()],
        ),
        MethodDescriptor::new(
            GET_BLOCK_TRANSACTION_COUNT_BY_HASH,
            "Get transaction count, by hash",
            Reading,
            "Returns the number of transactions in a block from a block matching the given block hash.",
            vec![block_hash(d)],
        ),
        MethodDescriptor::new(
            GET_UNCLE_COUNT_BY_BLOCK_NUMBER,
            "Get uncle count, by number",
            Reading,
            "Returns the number of uncles in a block from a block matching the given block number.",
            vec![block()],
        ),
        MethodDescriptor::new(
            GET_UNCLE_COUNT_BY_BLOCK_HASH,
            "Get uncle count, by hash",
            Reading,
            "Returns the number of uncles in a block from a block matching the given block hash.",
            vec![block_hash(d)],
        ),
        MethodDescriptor::new(
            GET_TRANSACTION_BY_HASH,
            "Get transaction, by hash",
            Reading,
            "Returns the information about a transaction requested by transaction hash.",
            vec![transaction_hash(d)],
        ),
        MethodDescriptor::new(
            GET_TRANSACTION_BY_BLOCK_NUMBER_AND_INDEX,
            "Get transaction, by block number and index",
            Reading,
            "Returns information about a transaction by block number and transaction index position.",
            vec![block(), index("Transaction index")],
        ),
        MethodDescriptor::new(
            GET_TRANSACTION_BY_BLOCK_HASH_AND_INDEX,
            "Get transaction, by block hash and index",
            Reading,
            "Returns information about a transaction by block hash and transaction index position.",
            vec![block_hash(d), index("Transaction index")],
        ),
        MethodDescriptor::new(
            GET_TRANSACTION_RECEIPT,
            "Get transaction receipt",
            Reading,
            "Returns the receipt of a transaction by transaction hash.",
            vec![transaction_hash(d)],
        ),
        MethodDescriptor::new(
            GET_UNCLE_BY_BLOCK_NUMBER_AND_INDEX,
            "Get uncle, by block number and index",
            Reading,
            "Returns information about a uncle of a block by number and uncle index position.",
            vec![block(), index("Uncle index")],
        ),
        MethodDescriptor::new(
            GET_UNCLE_BY_BLOCK_HASH_AND_INDEX,
            "Get uncle, by block hash and index",
            Reading,
            "Returns information about a uncle of a block by hash and uncle index position.",
            vec![block_hash(d), index("Uncle index")],
        ),
        no_params(ACCOUNTS, "Get accounts", Reading, "Returns a list of addresses owned by client."),
        no_params(COINBASE, "Get coinbase", Reading, "Returns the client coinbase address."),
        no_params(
            SYNCING,
            "Get sync status",
            Reading,
            "Returns an object with data about the sync status or false.",
        ),
        no_params(
            MINING,
            "Get mining status",
            Reading,
            "Returns true if client is actively mining new blocks.",
        ),
        no_params(
            HASHRATE,
            "Get hashrate",
            Reading,
            "Returns the number of hashes per second that the node is mining with.",
        ),
        no_params(
            GET_WORK,
            "Get work",
            Reading,
            "Returns the hash of the current block, the seedHash, and the boundary condition to be met.",
        ),
        MethodDescriptor::new(
            SEND_RAW_TRANSACTION,
            "Send raw transaction",
            Writing,
            "Submits a pre-signed transaction for broadcast to the Ethereum network.",
            vec![Param::required(ParamType::Bytes, "transaction", d.transaction_input.as_str())
                .with_description("Signed transaction data")],
        ),
        MethodDescriptor::new(
            DEBUG_TRACE_CALL,
            "Trace call",
            Debug,
            "Runs an eth_call within the context of the given block execution and returns the call trace.",
            vec![transaction(d, true), block()],
        ),
        MethodDescriptor::new(
            DEBUG_TRACE_TRANSACTION,
            "Trace transaction",
            Debug,
            "Replays the transaction in the exact same manner as it was executed on the network and returns its call trace.",
            vec![transaction_hash(d)],
        ),
        MethodDescriptor::new(
            DEBUG_TRACE_BLOCK_BY_NUMBER,
            "Trace block, by number",
            Debug,
            "Replays all transactions of the block given by number and returns their call traces.",
            vec![block()],
        ),
        MethodDescriptor::new(
            DEBUG_TRACE_BLOCK_BY_HASH,
            "Trace block, by hash",
            Debug,
            "Replays all transactions of the block given by hash and returns their call traces.",
            vec![block_hash(d)],
        ),
        MethodDescriptor::new(
            TRACE_BLOCK,
            "Trace block",
            Trace,
            "Returns traces created at given block.",
            vec![block()],
        ),
        MethodDescriptor::new(
            TRACE_CALL,
            "Trace call",
            Trace,
            "Executes the given call and returns a number of possible traces for it.",
            vec![transaction(d, true), trace_types(), block()],
        ),
        MethodDescriptor::new(
            TRACE_FILTER,
            "Filter traces",
            Trace,
            "Returns traces matching given filter.",
            vec![Param::object(
                "filter",
                vec![
                    Param::suggested(ParamType::BlockSelector, "fromBlock", LATEST),
                    Param::suggested(ParamType::BlockSelector, "toBlock", LATEST),
                    Param::optional(ParamType::Address, "fromAddress")
                        .with_description("Sender of the traced calls"),
                    Param::suggested(ParamType::Address, "toAddress", contract)
                        .with_description("Recipient of the traced calls"),
                    Param::optional(ParamType::Integer, "after")
                        .with_description("Offset trace number"),
                    Param::suggested(ParamType::Integer, "count", "10")
                        .with_description("Number of traces to return"),
                ],
            )],
        ),
        MethodDescriptor::new(
            TRACE_RAW_TRANSACTION,
            "Trace raw transaction",
            Trace,
            "Traces a call to eth_sendRawTransaction without making the call, returning the traces.",
            vec![
                Param::required(ParamType::Bytes, "data", d.transaction_input.as_str())
                    .with_description("Signed transaction data"),
                trace_types(),
            ],
        ),
        MethodDescriptor::new(
            TRACE_REPLAY_BLOCK_TRANSACTIONS,
            "Replay block transactions",
            Trace,
            "Replays all transactions in a block returning the requested traces for each transaction.",
            vec![block(), trace_types()],
        ),
        MethodDescriptor::new(
            TRACE_REPLAY_TRANSACTION,
            "Replay transaction",
            Trace,
            "Replays a transaction, returning the traces.",
            vec![transaction_hash(d), trace_types()],
        ),
        MethodDescriptor::new(
            TRACE_TRANSACTION,
            "Trace transaction",
            Trace,
            "Returns all traces of given transaction.",
            vec![transaction_hash(d)],
        ),
        no_params(
            ERIGON_BLOCK_NUMBER,
            "Get block number",
            Erigon,
            "Returns the latest executed block number.",
        ),
        MethodDescriptor::new(
            ERIGON_HEADER_BY_NUMBER,
            "Get header, by number",
            Erigon,
            "Returns a block header by block number.",
            vec![Param::required(ParamType::Integer, "block", "1")
                .with_description("Block height")],
        ),
        MethodDescriptor::new(
            ERIGON_HEADER_BY_HASH,
            "Get header, by hash",
            Erigon,
            "Returns a block header by block hash.",
            vec![block_hash(d)],
        ),
        MethodDescriptor::new(
            ERIGON_LOGS_BY_HASH,
            "Get logs, by hash",
            Erigon,
            "Returns an array of arrays of logs generated by the transactions in the block given by hash.",
            vec![block_hash(d)],
        ),
        MethodDescriptor::new(
            ERIGON_BLOCK_BY_TIMESTAMP,
            "Get block, by timestamp",
            Erigon,
            "Returns the block closest to the given unix timestamp.",
            vec![
                Param::required(ParamType::Integer, "timestamp", "1700000000")
                    .with_description("Unix timestamp, in seconds"),
                is_full(),
            ],
        ),
        MethodDescriptor::new(
            ERIGON_LATEST_LOGS,
            "Get latest logs",
            Erigon,
            "Returns the most recent logs matching the filter, newest first.",
            vec![
                Param::object(
                    "filter",
                    vec![
                        Param::suggested(ParamType::Address, "address", contract),
                        Param::optional(ParamType::Bytes32, "topic0"),
                    ],
                ),
                Param::required(ParamType::Integer, "logCount", "1")
                    .with_description("Number of logs to return"),
            ],
        ),
        MethodDescriptor::new(
            ERIGON_BLOCK_RECEIPTS_BY_BLOCK_HASH,
            "Get block receipts, by hash",
            Erigon,
            "Returns the receipts of every transaction in the block given by hash.",
            vec![block_hash(d)],
        ),
    ]
}
