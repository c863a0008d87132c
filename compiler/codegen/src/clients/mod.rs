//! High-level client rule tables.
//!
//! Each client library maps method ids to a [`Rule`]. Every rule receives the
//! method's wire params (after catalog reshaping), so a missing trailing
//! param shows up as an index past the end.

pub mod ethers;
pub mod viem;
pub mod web3py;

use serde_json::{Map, Value};
use types::Library;

use crate::literal::{Literal, Style};

/// Rendering rule of one method for one client library.
#[derive(Clone, Copy)]
pub enum Rule {
    /// Render the snippet from wire params.
    Render(fn(&[Value]) -> String),
    /// The library has no named operation for this method.
    Unsupported,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Render(_) => f.write_str("Render"),
            Rule::Unsupported => f.write_str("Unsupported"),
        }
    }
}

/// Rule table of a client library, or `None` for non-client libraries.
pub fn rules(library: Library) -> Option<&'static [(&'static str, Rule)]> {
    match library {
        Library::Ethers => Some(ethers::RULES),
        Library::Viem => Some(viem::RULES),
        Library::Web3Py => Some(web3py::RULES),
        Library::Vanilla | Library::Fetch | Library::Axios | Library::Requests => None,
    }
}

/// Fields of a call object whose fee selection wins over `gasPrice`.
const FEE_MARKET_FIELDS: [&str; 2] = ["maxFeePerGas", "maxPriorityFeePerGas"];

/// Non-null param at `index`.
pub(crate) fn arg(params: &[Value], index: usize) -> Option<&Value> {
    params.get(index).filter(|v| !v.is_null())
}

/// Param at `index` as text; empty when missing.
pub(crate) fn text(params: &[Value], index: usize) -> &str {
    arg(params, index).and_then(Value::as_str).unwrap_or_default()
}

/// Quoted string literal of the param at `index`.
pub(crate) fn quoted(params: &[Value], index: usize) -> Literal { Literal::string(text(params, index)) }

/// Boolean param at `index`; `false` when missing.
pub(crate) fn flag(params: &[Value], index: usize) -> Literal {
    Literal::Bool(arg(params, index).and_then(Value::as_bool).unwrap_or(false))
}

/// A block selector in its two input forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Block<'a> {
    /// Symbolic tag such as `latest`.
    Tag(&'a str),
    /// Decimal height.
    Number(&'a str),
}

impl<'a> Block<'a> {
    /// Classify the param at `index`; `None` when absent.
    pub(crate) fn at(params: &'a [Value], index: usize) -> Option<Self> {
        Self::parse(arg(params, index)?.as_str()?)
    }

    /// Classify a raw selector; `None` when empty.
    pub(crate) fn parse(raw: &'a str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else if raw.bytes().all(|b| b.is_ascii_digit()) {
            Some(Block::Number(raw))
        } else {
            Some(Block::Tag(raw))
        }
    }

    /// Tag as a string, height as a number.
    pub(crate) fn positional(&self) -> Literal {
        match self {
            Block::Tag(tag) => Literal::string(tag),
            Block::Number(n) => Literal::number(n),
        }
    }
}

/// Fields of the call object param at `index`, absent ones dropped and
/// `gasPrice` removed when a fee-market field is present.
pub(crate) fn call_fields(params: &[Value], index: usize) -> Map<String, Value> {
    let mut fields: Map<String, Value> = arg(params, index)
        .and_then(Value::as_object)
        .map(|o| o.iter().filter(|(_, v)| !v.is_null()).map(|(k, v)| (k.clone(), v.clone())).collect())
        .unwrap_or_default();
    if FEE_MARKET_FIELDS.iter().any(|f| fields.contains_key(*f)) {
        fields.remove("gasPrice");
    }
    fields
}

/// Text of a call object field.
pub(crate) fn field<'a>(fields: &'a Map<String, Value>, key: &str) -> &'a str {
    fields.get(key).and_then(Value::as_str).unwrap_or_default()
}

/// Log filter object: numeric block bounds become numbers, absent bounds and
/// address are dropped, `topics` keeps its positional nulls.
pub(crate) fn log_filter(params: &[Value]) -> Literal {
    let filter = arg(params, 0).and_then(Value::as_object);
    let lookup = |key: &str| filter.and_then(|f| f.get(key)).and_then(Value::as_str);
    let mut fields = Vec::new();
    for key in ["fromBlock", "toBlock"] {
        if let Some(block) = lookup(key).and_then(Block::parse) {
            fields.push((key.to_string(), block.positional()));
        }
    }
    if let Some(address) = lookup("address").filter(|a| !a.is_empty()) {
        fields.push(("address".to_string(), Literal::string(address)));
    }
    let topics = filter.and_then(|f| f.get("topics")).map(Literal::from_value);
    fields.push(("topics".to_string(), topics.unwrap_or(Literal::List(vec![]))));
    Literal::Map(fields)
}

/// `const <name> = await <receiver>.<call>(<args>)` with args at level 0.
pub(crate) fn js_call(name: &str, receiver: &str, call: &str, args: &[Literal]) -> String {
    format!("const {} = await {}.{}({})", name, receiver, call, join(args, Style::JavaScript))
}

/// `<name> = w3.eth.<call>(<args>)`
pub(crate) fn py_call(name: &str, call: &str, args: &[Literal]) -> String {
    format!("{} = w3.eth.{}({})", name, call, join(args, Style::Python))
}

fn join(args: &[Literal], style: Style) -> String {
    args.iter().map(|a| a.render(style, 0)).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_block_forms() {
        let params = [json!("latest"), json!("12345"), json!(""), json!(null)];
        assert_eq!(Block::at(&params, 0), Some(Block::Tag("latest")));
        assert_eq!(Block::at(&params, 1), Some(Block::Number("12345")));
        assert_eq!(Block::at(&params, 2), None);
        assert_eq!(Block::at(&params, 3), None);
        assert_eq!(Block::at(&params, 9), None);
    }

    #[test]
    fn test_fee_market_fields_drop_gas_price() {
        let params = [json!({"to": "0x1", "gasPrice": "5", "maxFeePerGas": "7"})];
        let fields = call_fields(&params, 0);
        assert!(!fields.contains_key("gasPrice"));
        assert_eq!(field(&fields, "maxFeePerGas"), "7");

        let params = [json!({"to": "0x1", "gasPrice": "5"})];
        assert_eq!(field(&call_fields(&params, 0), "gasPrice"), "5");
    }
}
