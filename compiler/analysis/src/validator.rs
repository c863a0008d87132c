//! Parameter validation
//!
//! Values arrive as JSON: strings for every scalar kind except booleans,
//! arrays for array params and objects for object params. `null`, a missing
//! value and the empty string all mean "not provided".
//!
//! Present values are checked strictly against their kind. Undeclared object
//! keys are ignored, and an array's `count` is a form hint only.

use ir::{Param, ParamType, PrimitiveParam};
use regex::Regex;
use serde_json::Value;

use crate::Result;

/// Symbolic block tags accepted wherever a block selector is expected.
pub const BLOCK_TAGS: [&str; 5] = ["earliest", "finalized", "safe", "latest", "pending"];

/// Block heights must be strictly below this. Nine-nines and anything
/// longer read as timestamps or typos, not heights.
pub const MAX_BLOCK_NUMBER: u64 = 999_999_999;

/// Accepted trace kinds.
pub const TRACE_TYPES: [&str; 4] = ["vmTrace", "trace", "statediff", "stateDiff"];

const NULL: Value = Value::Null;

/// Whether `input` is a symbolic block tag.
pub fn is_block_tag(input: &str) -> bool { BLOCK_TAGS.contains(&input) }

/// Checks values against param shapes.
#[derive(Debug, Clone)]
pub struct ParamValidator {
    address: Regex,
    word: Regex,
    bytes: Regex,
    integer: Regex,
}

impl ParamValidator {
    /// Compile the value patterns.
    pub fn new() -> Result<Self> {
        Ok(Self {
            address: Regex::new(r"^0x[0-9a-fA-F]{40}$")?,
            word: Regex::new(r"^0x[0-9a-fA-F]{64}$")?,
            bytes: Regex::new(r"^0x(?:[0-9a-fA-F]{2})*$")?,
            integer: Regex::new(r"^[0-9]+$")?,
        })
    }

    /// Whether `input` is a block height below [`MAX_BLOCK_NUMBER`].
    pub fn is_block_number(&self, input: &str) -> bool {
        self.integer.is_match(input)
            && input.parse::<u64>().map(|n| n < MAX_BLOCK_NUMBER).unwrap_or(false)
    }

    fn check_scalar(&self, kind: ParamType, input: &str) -> bool {
        match kind {
            ParamType::Address => self.address.is_match(input),
            ParamType::Hash | ParamType::Bytes32 => self.word.is_match(input),
            ParamType::Bytes => self.bytes.is_match(input),
            ParamType::Integer => self.integer.is_match(input),
            ParamType::BlockSelector => is_block_tag(input) || self.is_block_number(input),
            ParamType::TraceType => TRACE_TYPES.contains(&input),
            ParamType::Boolean => false,
        }
    }

    fn validate_primitive(&self, param: &PrimitiveParam, input: &Value) -> bool {
        if param.kind == ParamType::Boolean {
            return input.is_boolean();
        }
        let text = match input {
            Value::String(s) => s.as_str(),
            Value::Null => "",
            _ => return false,
        };
        if text.is_empty() {
            return !param.required;
        }
        self.check_scalar(param.kind, text)
    }

    /// Whether `input` satisfies `param`, recursively.
    pub fn validate_param(&self, param: &Param, input: &Value) -> bool {
        match param {
            Param::Primitive(p) => self.validate_primitive(p, input),
            Param::Array(a) => {
                let element = PrimitiveParam {
                    kind: a.item_type,
                    name: a.name.clone(),
                    required: true,
                    default: None,
                    description: None,
                };
                match input {
                    Value::Array(items) => items.iter().all(|v| self.validate_primitive(&element, v)),
                    Value::Null => true,
                    Value::String(s) => s.is_empty(),
                    _ => false,
                }
            }
            Param::Object(o) => {
                let fields = match input {
                    Value::Object(map) => Some(map),
                    Value::Null => None,
                    Value::String(s) if s.is_empty() => None,
                    _ => return false,
                };
                o.items.iter().all(|(key, field)| {
                    let value = fields.and_then(|m| m.get(key)).unwrap_or(&NULL);
                    self.validate_param(field, value)
                })
            }
        }
    }

    /// One verdict per param, in order. Missing inputs count as not provided.
    pub fn validate_params(&self, params: &[Param], inputs: &[Value]) -> Vec<bool> {
        params
            .iter()
            .enumerate()
            .map(|(i, p)| self.validate_param(p, inputs.get(i).unwrap_or(&NULL)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn validator() -> ParamValidator { ParamValidator::new().expect("patterns should compile") }

    #[test]
    fn test_boolean_requires_json_bool() {
        let v = validator();
        let p = Param::optional(ParamType::Boolean, "full");
        assert!(v.validate_param(&p, &json!(true)));
        assert!(v.validate_param(&p, &json!(false)));
        assert!(!v.validate_param(&p, &json!("true")));
        assert!(!v.validate_param(&p, &json!("")));
        assert!(!v.validate_param(&p, &Value::Null));
    }

    #[test]
    fn test_required_empty_is_invalid() {
        let v = validator();
        let p = Param::required(ParamType::Integer, "index", "0");
        assert!(!v.validate_param(&p, &json!("")));
        assert!(v.validate_param(&p, &json!("0")));
        assert!(!v.validate_param(&p, &json!("-1")));
        assert!(!v.validate_param(&p, &json!("1.5")));
        assert!(!v.validate_param(&p, &json!(3)));
    }

    #[test]
    fn test_block_numbers() {
        let v = validator();
        assert!(v.is_block_number("0"));
        assert!(v.is_block_number("999999998"));
        assert!(!v.is_block_number("999999999"));
        assert!(!v.is_block_number("1000000000"));
        assert!(!v.is_block_number("99999999999999999999999"));
        assert!(!v.is_block_number("latest"));
    }

    #[test]
    fn test_trace_types() {
        let v = validator();
        let p = Param::required(ParamType::TraceType, "kind", "trace");
        for ok in ["vmTrace", "trace", "statediff"] {
            assert!(v.validate_param(&p, &json!(ok)), "{}", ok);
        }
        assert!(!v.validate_param(&p, &json!("callTracer")));
    }
}
