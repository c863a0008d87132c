//! JSON-RPC method ids known to the catalog.

#![allow(missing_docs)]

pub const CHAIN_ID: &str = "eth_chainId";
pub const BLOCK_NUMBER: &str = "eth_blockNumber";
pub const GAS_PRICE: &str = "eth_gasPrice";
pub const MAX_PRIORITY_FEE_PER_GAS: &str = "eth_maxPriorityFeePerGas";
pub const BLOB_BASE_FEE: &str = "eth_blobBaseFee";
pub const FEE_HISTORY: &str = "eth_feeHistory";
pub const GET_BALANCE: &str = "eth_getBalance";
pub const GET_CODE: &str = "eth_getCode";
pub const GET_STORAGE_AT: &str = "eth_getStorageAt";
pub const CALL: &str = "eth_call";
pub const ESTIMATE_GAS: &str = "eth_estimateGas";
pub const GET_LOGS: &str = "eth_getLogs";
pub const GET_PROOF: &str = "eth_getProof";
pub const GET_TRANSACTION_COUNT: &str = "eth_getTransactionCount";
pub const GET_BLOCK_BY_NUMBER: &str = "eth_getBlockByNumber";
pub const GET_BLOCK_BY_HASH: &str = "eth_getBlockByHash";
pub const GET_BLOCK_TRANSACTION_COUNT_BY_NUMBER: &str = "eth_getBlockTransactionCountByNumber";
pub const GET_BLOCK_TRANSACTION_COUNT_BY_HASH: &str = "eth_getBlockTransactionCountByHash";
pub const GET_UNCLE_COUNT_BY_BLOCK_NUMBER: &str = "eth_getUncleCountByBlockNumber";
pub const GET_UNCLE_COUNT_BY_BLOCK_HASH: &str = "eth_getUncleCountByBlockHash";
pub const GET_TRANSACTION_BY_HASH: &str = "eth_getTransactionByHash";
pub const GET_TRANSACTION_BY_BLOCK_NUMBER_AND_INDEX: &str =
    "eth_getTransactionByBlockNumberAndIndex";
pub const GET_TRANSACTION_BY_BLOCK_HASH_AND_INDEX: &str = "eth_getTransactionByBlockHashAndIndex";
pub const GET_TRANSACTION_RECEIPT: &str = "eth_getTransactionReceipt";
pub const GET_UNCLE_BY_BLOCK_NUMBER_AND_INDEX: &str = "eth_getUncleByBlockNumberAndIndex";
pub const GET_UNCLE_BY_BLOCK_HASH_AND_INDEX: &str = "eth_getUncleByBlockHashAndIndex";
pub const ACCOUNTS: &str = "eth_accounts";
pub const COINBASE: &str = "eth_coinbase";
pub const SYNCING: &str = "eth_syncing";
pub const MINING: &str = "eth_mining";
pub const HASHRATE: &str = "eth_hashrate";
pub const GET_WORK: &str = "eth_getWork";
pub const SEND_RAW_TRANSACTION: &str = "eth_sendRawTransaction";

pub const DEBUG_TRACE_CALL: &str = "debug_traceCall";
pub const DEBUG_TRACE_TRANSACTION: &str = "debug_traceTransaction";
pub const DEBUG_TRACE_BLOCK_BY_NUMBER: &str = "debug_traceBlockByNumber";
pub const DEBUG_TRACE_BLOCK_BY_HASH: &str = "debug_traceBlockByHash";

pub const TRACE_BLOCK: &str = "trace_block";
pub const TRACE_CALL: &str = "trace_call";
pub const TRACE_FILTER: &str = "trace_filter";
pub const TRACE_RAW_TRANSACTION: &str = "trace_rawTransaction";
pub const TRACE_REPLAY_BLOCK_TRANSACTIONS: &str = "trace_replayBlockTransactions";
pub const TRACE_REPLAY_TRANSACTION: &str = "trace_replayTransaction";
pub const TRACE_TRANSACTION: &str = "trace_transaction";

pub const ERIGON_BLOCK_NUMBER: &str = "erigon_blockNumber";
pub const ERIGON_HEADER_BY_NUMBER: &str = "erigon_getHeaderByNumber";
pub const ERIGON_HEADER_BY_HASH: &str = "erigon_getHeaderByHash";
pub const ERIGON_LOGS_BY_HASH: &str = "erigon_getLogsByHash";
pub const ERIGON_BLOCK_BY_TIMESTAMP: &str = "erigon_getBlockByTimestamp";
pub const ERIGON_LATEST_LOGS: &str = "erigon_getLatestLogs";
pub const ERIGON_BLOCK_RECEIPTS_BY_BLOCK_HASH: &str = "erigon_getBlockReceiptsByBlockHash";
