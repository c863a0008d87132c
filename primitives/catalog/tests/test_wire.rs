use catalog::{CatalogReader, MethodCatalog};
use serde_json::{json, Value};

fn catalog() -> MethodCatalog { MethodCatalog::for_chain(None).expect("catalog should build") }

#[test]
fn balance_passes_through() {
    let params = catalog()
        .wire_params(
            "eth_getBalance",
            &[json!("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"), json!("latest")],
        )
        .expect("known method");
    assert_eq!(params, vec![json!("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"), json!("latest")]);
}

#[test]
fn get_logs_collapses_into_filter() {
    let topic = "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef";
    let params = catalog()
        .wire_params(
            "eth_getLogs",
            &[
                json!("12345"),
                json!("latest"),
                json!(""),
                json!(topic),
                json!(""),
                json!(""),
                json!(""),
            ],
        )
        .expect("known method");
    assert_eq!(
        params,
        vec![json!({
            "fromBlock": "12345",
            "toBlock": "latest",
            "topics": [topic, null, null, null],
        })]
    );
}

#[test]
fn get_logs_with_missing_inputs_still_has_four_topics() {
    let params = catalog().wire_params("eth_getLogs", &[]).expect("known method");
    assert_eq!(params, vec![json!({"topics": [null, null, null, null]})]);
}

#[test]
fn debug_methods_append_call_tracer() {
    let c = catalog();
    let hash = "0x05f71e1b2cb4f03e547739db15d080fd30c989eda04d37ce6264c5686e0722c9";
    let params = c.wire_params("debug_traceTransaction", &[json!(hash)]).expect("known method");
    assert_eq!(params, vec![json!(hash), json!({"tracer": "callTracer"})]);

    let params = c
        .wire_params("debug_traceCall", &[json!({"to": "0x4200000000000000000000000000000000000006", "data": ""}), json!("latest")])
        .expect("known method");
    assert_eq!(
        params,
        vec![
            json!({"to": "0x4200000000000000000000000000000000000006"}),
            json!("latest"),
            json!({"tracer": "callTracer"}),
        ]
    );
}

#[test]
fn trace_filter_wraps_addresses_and_counts() {
    let params = catalog()
        .wire_params(
            "trace_filter",
            &[json!({
                "fromBlock": "latest",
                "toBlock": "",
                "fromAddress": "",
                "toAddress": "0x4200000000000000000000000000000000000006",
                "after": "",
                "count": "10",
            })],
        )
        .expect("known method");
    assert_eq!(
        params,
        vec![json!({
            "fromBlock": "latest",
            "toAddress": ["0x4200000000000000000000000000000000000006"],
            "count": 10,
        })]
    );
}

#[test]
fn latest_logs_splits_count_option() {
    let c = catalog();
    let params = c
        .wire_params("erigon_getLatestLogs", &[json!({"address": "", "topic0": ""}), json!("5")])
        .expect("known method");
    assert_eq!(params, vec![json!({"topics": []}), json!({"logCount": 5})]);

    let weth = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";
    let transfer = "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef";
    let params = c
        .wire_params("erigon_getLatestLogs", &[json!({"address": weth, "topic0": transfer}), json!("1")])
        .expect("known method");
    assert_eq!(params, vec![json!({"address": weth, "topics": [transfer]}), json!({"logCount": 1})]);
    assert!(params[0].get("topic0").is_none());
}

#[test]
fn fee_history_passes_through_as_strings() {
    let params = catalog()
        .wire_params("eth_feeHistory", &[json!("4"), json!("latest"), json!(["25", "75"])])
        .expect("known method");
    assert_eq!(params, vec![json!("4"), json!("latest"), json!(["25", "75"])]);
}

#[test]
fn initial_values_always_produce_wire_params() {
    let c = catalog();
    for method in c.methods() {
        let params = c.wire_params(&method.id, &method.initial_values()).expect("known method");
        assert!(params.len() <= method.params.len() + 1, "{} grew unexpectedly", method.id);
        assert!(params.iter().all(|v| v != &Value::String(String::new())), "{}", method.id);
    }
}
