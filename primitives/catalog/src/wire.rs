//! Wire shaping.
//!
//! Form values are positional and flat; some methods expect a different
//! shape on the wire. [`to_wire_params`] first normalizes every value
//! (absent optionals dropped, trailing absent params trimmed) and then applies
//! the reshaping rule registered for the method id, if any.

use ir::ids::*;
use ir::{MethodDescriptor, Param, ParamType};
use serde_json::{json, Map, Value};

/// Tracer options appended to every `debug_*` call.
pub const CALL_TRACER: &str = "callTracer";

/// Whether `value` counts as "not provided".
pub fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn normalize(param: &Param, value: Option<&Value>) -> Option<Value> {
    let value = value.filter(|v| !v.is_null())?;
    match param {
        Param::Primitive(p) if p.kind == ParamType::Boolean => Some(value.clone()),
        Param::Primitive(_) => (!is_absent(value)).then(|| value.clone()),
        Param::Array(_) => match value {
            Value::Array(items) => {
                Some(Value::Array(items.iter().filter(|v| !is_absent(v)).cloned().collect()))
            }
            other => (!is_absent(other)).then(|| other.clone()),
        },
        Param::Object(obj) => {
            let Value::Object(fields) = value else { return None };
            let mut out = Map::new();
            for (key, field) in &obj.items {
                if let Some(v) = normalize(field, fields.get(key)) {
                    out.insert(key.clone(), v);
                }
            }
            for (key, v) in fields {
                if !obj.items.contains_key(key) && !is_absent(v) {
                    out.insert(key.clone(), v.clone());
                }
            }
            Some(Value::Object(out))
        }
    }
}

/// Decimal string to JSON number; anything else is returned unchanged.
pub fn to_number(value: &Value) -> Value {
    match value {
        Value::String(s) => s.parse::<u64>().map(Value::from).unwrap_or_else(|_| value.clone()),
        other => other.clone(),
    }
}

fn take(params: &mut [Option<Value>], index: usize) -> Option<Value> {
    params.get_mut(index).and_then(Option::take)
}

fn log_filter(mut p: Vec<Option<Value>>) -> Vec<Option<Value>> {
    let mut filter = Map::new();
    for (index, key) in [(0, "fromBlock"), (1, "toBlock"), (2, "address")] {
        if let Some(v) = take(&mut p, index) {
            filter.insert(key.to_string(), v);
        }
    }
    let topics: Vec<Value> = (3..7).map(|i| take(&mut p, i).unwrap_or(Value::Null)).collect();
    filter.insert("topics".to_string(), Value::Array(topics));
    vec![Some(Value::Object(filter))]
}

fn with_tracer(mut p: Vec<Option<Value>>) -> Vec<Option<Value>> {
    trim(&mut p);
    p.push(Some(json!({ "tracer": CALL_TRACER })));
    p
}

fn trace_filter(mut p: Vec<Option<Value>>) -> Vec<Option<Value>> {
    let mut filter = match take(&mut p, 0) {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };
    for key in ["fromAddress", "toAddress"] {
        if let Some(v) = filter.get_mut(key).filter(|v| !v.is_array()) {
            *v = Value::Array(vec![v.take()]);
        }
    }
    for key in ["after", "count"] {
        if let Some(v) = filter.get_mut(key) {
            *v = to_number(v);
        }
    }
    vec![Some(Value::Object(filter))]
}

fn latest_logs(mut p: Vec<Option<Value>>) -> Vec<Option<Value>> {
    let mut filter = match take(&mut p, 0) {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };
    let topics: Vec<Value> = filter.remove("topic0").into_iter().collect();
    filter.insert("topics".to_string(), Value::Array(topics));
    let count = take(&mut p, 1).map(|v| to_number(&v)).unwrap_or_else(|| json!(1));
    vec![Some(Value::Object(filter)), Some(json!({ "logCount": count }))]
}

/// Reshaping rule for `method_id`, if the method has one.
fn reshape(method_id: &str) -> Option<fn(Vec<Option<Value>>) -> Vec<Option<Value>>> {
    match method_id {
        GET_LOGS => Some(log_filter),
        DEBUG_TRACE_CALL
        | DEBUG_TRACE_TRANSACTION
        | DEBUG_TRACE_BLOCK_BY_NUMBER
        | DEBUG_TRACE_BLOCK_BY_HASH => Some(with_tracer),
        TRACE_FILTER => Some(trace_filter),
        ERIGON_LATEST_LOGS => Some(latest_logs),
        _ => None,
    }
}

fn trim(params: &mut Vec<Option<Value>>) {
    while matches!(params.last(), Some(None)) {
        params.pop();
    }
}

/// Normalized positional values, one per param; `None` marks an absent value.
pub fn normalize_inputs(method: &MethodDescriptor, inputs: &[Value]) -> Vec<Option<Value>> {
    method.params.iter().enumerate().map(|(i, p)| normalize(p, inputs.get(i))).collect()
}

/// The JSON-RPC `params` array for `method` given positional form values.
///
/// Missing inputs are treated as absent. Trailing absent params are dropped;
/// interior ones become `null`.
pub fn to_wire_params(method: &MethodDescriptor, inputs: &[Value]) -> Vec<Value> {
    let normalized = normalize_inputs(method, inputs);
    let mut shaped = match reshape(&method.id) {
        Some(rule) => rule(normalized),
        None => normalized,
    };
    trim(&mut shaped);
    shaped.into_iter().map(|v| v.unwrap_or(Value::Null)).collect()
}

#[cfg(test)]
mod tests {
    use ir::MethodGroup;

    use super::*;

    fn method(id: &str, params: Vec<Param>) -> MethodDescriptor {
        MethodDescriptor::new(id, id, MethodGroup::Reading, "", params)
    }

    #[test]
    fn test_trailing_absent_params_are_trimmed() {
        let m = method(
            "eth_estimateGas",
            vec![
                Param::object("tx", vec![Param::optional(ParamType::Address, "to")]),
                Param::optional(ParamType::BlockSelector, "block"),
            ],
        );
        assert_eq!(to_wire_params(&m, &[json!({"to": ""}), json!("")]), vec![json!({})]);
        assert_eq!(
            to_wire_params(&m, &[json!({"to": "0x1"}), json!("latest")]),
            vec![json!({"to": "0x1"}), json!("latest")]
        );
    }

    #[test]
    fn test_interior_absent_becomes_null() {
        let m = method(
            "x_test",
            vec![
                Param::optional(ParamType::Integer, "a"),
                Param::required(ParamType::Integer, "b", "1"),
            ],
        );
        assert_eq!(to_wire_params(&m, &[json!(""), json!("2")]), vec![Value::Null, json!("2")]);
    }

    #[test]
    fn test_booleans_pass_through() {
        let m = method("x_test", vec![Param::optional(ParamType::Boolean, "full")]);
        assert_eq!(to_wire_params(&m, &[json!(false)]), vec![json!(false)]);
    }

    #[test]
    fn test_to_number() {
        assert_eq!(to_number(&json!("42")), json!(42));
        assert_eq!(to_number(&json!("0x2a")), json!("0x2a"));
        assert_eq!(to_number(&json!(7)), json!(7));
    }
}
