//! Method descriptors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::param::Param;

/// Classification shown as a section heading in method listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodGroup {
    /// State and history reads
    Reading,
    /// Transaction submission
    Writing,
    /// Geth `debug_*` namespace
    Debug,
    /// Parity/OpenEthereum `trace_*` namespace
    Trace,
    /// Erigon-specific extensions
    Erigon,
}

impl MethodGroup {
    /// Every group, in display order.
    pub const ALL: [MethodGroup; 5] = [
        MethodGroup::Reading,
        MethodGroup::Writing,
        MethodGroup::Debug,
        MethodGroup::Trace,
        MethodGroup::Erigon,
    ];

    /// Canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MethodGroup::Reading => "reading",
            MethodGroup::Writing => "writing",
            MethodGroup::Debug => "debug",
            MethodGroup::Trace => "trace",
            MethodGroup::Erigon => "erigon",
        }
    }

    /// Section heading.
    pub fn display_name(&self) -> &'static str {
        match self {
            MethodGroup::Reading => "Reading",
            MethodGroup::Writing => "Writing",
            MethodGroup::Debug => "Debug methods",
            MethodGroup::Trace => "Tracing",
            MethodGroup::Erigon => "Erigon",
        }
    }
}

impl FromStr for MethodGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MethodGroup::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown method group: {}", s))
    }
}

impl fmt::Display for MethodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}

/// Schema entry for one JSON-RPC method.
///
/// `params` are in positional wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Literal JSON-RPC method name (e.g. `eth_getBalance`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Classification
    pub group: MethodGroup,
    /// What the method returns
    pub description: String,
    /// Positional parameters
    pub params: Vec<Param>,
}

impl MethodDescriptor {
    /// Create a descriptor.
    pub fn new(
        id: &str,
        name: &str,
        group: MethodGroup,
        description: &str,
        params: Vec<Param>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            group,
            description: description.to_string(),
            params,
        }
    }

    /// Look up a top-level param by name.
    pub fn param(&self, name: &str) -> Option<&Param> { self.params.iter().find(|p| p.name() == name) }

    /// Initial form values, one per param.
    pub fn initial_values(&self) -> Vec<serde_json::Value> {
        self.params.iter().map(Param::initial_value).collect()
    }
}
