//! Raw protocol and bare transport snippets.
//!
//! All of these embed the wire params verbatim in a JSON-RPC envelope; only
//! the surrounding syntax differs per target.

use serde_json::Value;
use types::Library;

use crate::literal::{Literal, Style};

/// JSON-RPC protocol version tag.
pub const JSONRPC_VERSION: &str = "2.0";

/// Request id used in every envelope.
pub const REQUEST_ID: u64 = 1;

/// `{jsonrpc, id, method, params}`
pub fn envelope(method: &str, params: &[Value]) -> Literal {
    Literal::Map(vec![
        ("jsonrpc".into(), Literal::string(JSONRPC_VERSION)),
        ("id".into(), Literal::Num(REQUEST_ID.to_string())),
        ("method".into(), Literal::string(method)),
        ("params".into(), Literal::List(params.iter().map(Literal::from_value).collect())),
    ])
}

/// Envelope snippet for a raw or bare transport library.
///
/// `None` for client libraries, which have their own rule tables.
pub fn render(library: Library, method: &str, params: &[Value]) -> Option<String> {
    let body = envelope(method, params);
    let code = match library {
        Library::Vanilla => body.render(Style::Json, 0),
        Library::Fetch => format!(
            "const response = await fetch(providerEndpoint, {{\n  method: 'POST',\n  headers: {{\n    'Content-Type': 'application/json',\n  }},\n  body: JSON.stringify({}),\n}})",
            body.render(Style::JavaScript, 1)
        ),
        Library::Axios => format!(
            "const response = await axios({{\n  method: 'POST',\n  url: providerEndpoint,\n  headers: {{\n    'Content-Type': 'application/json',\n  }},\n  data: {},\n}})",
            body.render(Style::JavaScript, 1)
        ),
        Library::Requests => format!(
            "response = requests.post(\n    provider_endpoint,\n    json={},\n)",
            body.render(Style::Python, 1)
        ),
        Library::Ethers | Library::Viem | Library::Web3Py => return None,
    };
    Some(code)
}
