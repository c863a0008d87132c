//! Parameter shapes
//!
//! A [`Param`] is one of three shapes: a scalar [`PrimitiveParam`], a
//! homogeneous [`ArrayParam`] of scalars, or an [`ObjectParam`] with named
//! fields. Scalars are carried as strings (booleans excepted) until a code
//! generator decides how to coerce them.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Scalar kinds understood by the validator and the generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamType {
    /// 20-byte account or contract address
    Address,
    /// 32-byte block or transaction hash
    Hash,
    /// Arbitrary 32-byte word (topics, storage keys)
    Bytes32,
    /// Byte string of any length
    Bytes,
    /// Non-negative decimal integer
    Integer,
    /// Boolean flag
    Boolean,
    /// Block tag or block height
    BlockSelector,
    /// Parity-style trace type
    TraceType,
}

impl ParamType {
    /// Every scalar kind.
    pub const ALL: [ParamType; 8] = [
        ParamType::Address,
        ParamType::Hash,
        ParamType::Bytes32,
        ParamType::Bytes,
        ParamType::Integer,
        ParamType::Boolean,
        ParamType::BlockSelector,
        ParamType::TraceType,
    ];

    /// Canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::Address => "address",
            ParamType::Hash => "hash",
            ParamType::Bytes32 => "bytes32",
            ParamType::Bytes => "bytes",
            ParamType::Integer => "integer",
            ParamType::Boolean => "boolean",
            ParamType::BlockSelector => "blockSelector",
            ParamType::TraceType => "traceType",
        }
    }
}

impl FromStr for ParamType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown param type: {}", s))
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}

/// A scalar parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveParam {
    /// Scalar kind
    #[serde(rename = "type")]
    pub kind: ParamType,
    /// Field name shown in forms and used as object key
    pub name: String,
    /// Whether a value must be supplied
    pub required: bool,
    /// Pre-filled value; always present for required params
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Help text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A homogeneous list of scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayParam {
    /// Kind of every element
    pub item_type: ParamType,
    /// Field name
    pub name: String,
    /// Suggested number of elements; not enforced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Pre-filled elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Vec<Value>>,
    /// Help text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A group of named fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectParam {
    /// Field name
    pub name: String,
    /// Nested fields, in declaration order
    pub items: IndexMap<String, Param>,
    /// Help text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Param {
    /// Scalar
    Primitive(PrimitiveParam),
    /// List of scalars
    Array(ArrayParam),
    /// Named fields
    Object(ObjectParam),
}

impl Param {
    /// Required scalar with a pre-filled value.
    pub fn required(kind: ParamType, name: &str, default: impl Into<Value>) -> Self {
        Param::Primitive(PrimitiveParam {
            kind,
            name: name.to_string(),
            required: true,
            default: Some(default.into()),
            description: None,
        })
    }

    /// Optional scalar without a pre-filled value.
    pub fn optional(kind: ParamType, name: &str) -> Self {
        Param::Primitive(PrimitiveParam {
            kind,
            name: name.to_string(),
            required: false,
            default: None,
            description: None,
        })
    }

    /// Optional scalar with a suggested value.
    pub fn suggested(kind: ParamType, name: &str, default: impl Into<Value>) -> Self {
        Param::Primitive(PrimitiveParam {
            kind,
            name: name.to_string(),
            required: false,
            default: Some(default.into()),
            description: None,
        })
    }

    /// List of `item_type` scalars.
    pub fn array(item_type: ParamType, name: &str) -> Self {
        Param::Array(ArrayParam {
            item_type,
            name: name.to_string(),
            count: None,
            default: None,
            description: None,
        })
    }

    /// Object whose fields are keyed by their own names.
    pub fn object(name: &str, fields: Vec<Param>) -> Self {
        let items = fields.into_iter().map(|p| (p.name().to_string(), p)).collect();
        Param::Object(ObjectParam { name: name.to_string(), items, description: None })
    }

    /// Attach help text.
    pub fn with_description(mut self, text: &str) -> Self {
        let slot = match &mut self {
            Param::Primitive(p) => &mut p.description,
            Param::Array(a) => &mut a.description,
            Param::Object(o) => &mut o.description,
        };
        *slot = Some(text.to_string());
        self
    }

    /// Set the suggested element count of an array. No effect on other shapes.
    pub fn with_count(mut self, count: usize) -> Self {
        if let Param::Array(a) = &mut self {
            a.count = Some(count);
        }
        self
    }

    /// Set the pre-filled elements of an array. No effect on other shapes.
    pub fn with_items(mut self, items: Vec<Value>) -> Self {
        if let Param::Array(a) = &mut self {
            a.default = Some(items);
        }
        self
    }

    /// Field name.
    pub fn name(&self) -> &str {
        match self {
            Param::Primitive(p) => &p.name,
            Param::Array(a) => &a.name,
            Param::Object(o) => &o.name,
        }
    }

    /// Help text, if any.
    pub fn description(&self) -> Option<&str> {
        match self {
            Param::Primitive(p) => p.description.as_deref(),
            Param::Array(a) => a.description.as_deref(),
            Param::Object(o) => o.description.as_deref(),
        }
    }

    /// Scalar kind of a primitive, or element kind of an array.
    pub fn scalar_type(&self) -> Option<ParamType> {
        match self {
            Param::Primitive(p) => Some(p.kind),
            Param::Array(a) => Some(a.item_type),
            Param::Object(_) => None,
        }
    }

    /// Short label for listings (`address`, `hash[]`, `object`).
    pub fn type_label(&self) -> String {
        match self {
            Param::Primitive(p) => p.kind.to_string(),
            Param::Array(a) => format!("{}[]", a.item_type),
            Param::Object(_) => "object".to_string(),
        }
    }

    /// Whether the caller has to provide something for this param.
    ///
    /// An object is required when any of its fields is.
    pub fn is_required(&self) -> bool {
        match self {
            Param::Primitive(p) => p.required,
            Param::Array(_) => false,
            Param::Object(o) => o.items.values().any(Param::is_required),
        }
    }

    /// Nesting depth: 1 for scalars, 2 for arrays and objects of scalars.
    pub fn depth(&self) -> usize {
        match self {
            Param::Primitive(_) => 1,
            Param::Array(_) => 2,
            Param::Object(o) => 1 + o.items.values().map(Param::depth).max().unwrap_or(0),
        }
    }

    /// Value a fresh form starts with.
    ///
    /// Scalars without a default start empty, except booleans which start
    /// `false`. Arrays start with their pre-filled elements or empty; objects
    /// are built field by field.
    pub fn initial_value(&self) -> Value {
        match self {
            Param::Primitive(p) => match (&p.default, p.kind) {
                (Some(v), _) => v.clone(),
                (None, ParamType::Boolean) => Value::Bool(false),
                (None, _) => Value::String(String::new()),
            },
            Param::Array(a) => Value::Array(a.default.clone().unwrap_or_default()),
            Param::Object(o) => Value::Object(
                o.items.iter().map(|(k, p)| (k.clone(), p.initial_value())).collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_param_type_round_trips_through_str() {
        for kind in ParamType::ALL {
            assert_eq!(kind.as_str().parse::<ParamType>().expect("should parse"), kind);
        }
        assert!("uint256".parse::<ParamType>().is_err());
    }

    #[test]
    fn test_object_keeps_field_order() {
        let call = Param::object(
            "transaction",
            vec![
                Param::optional(ParamType::Address, "from"),
                Param::required(ParamType::Address, "to", "0x0"),
                Param::optional(ParamType::Bytes, "data"),
            ],
        );
        let Param::Object(obj) = &call else { panic!("expected object") };
        let keys: Vec<&str> = obj.items.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["from", "to", "data"]);
        assert!(call.is_required());
        assert_eq!(call.depth(), 2);
    }

    #[test]
    fn test_initial_value() {
        assert_eq!(Param::optional(ParamType::Boolean, "full").initial_value(), json!(false));
        assert_eq!(Param::optional(ParamType::Integer, "slot").initial_value(), json!(""));
        assert_eq!(
            Param::array(ParamType::TraceType, "types").with_items(vec![json!("trace")]).initial_value(),
            json!(["trace"])
        );
        let obj = Param::object(
            "filter",
            vec![
                Param::required(ParamType::BlockSelector, "fromBlock", "latest"),
                Param::optional(ParamType::Address, "address"),
            ],
        );
        assert_eq!(obj.initial_value(), json!({"fromBlock": "latest", "address": ""}));
    }

    #[test]
    fn test_serde_shape_tag() {
        let param = Param::required(ParamType::Address, "account", "0xabc");
        let value = serde_json::to_value(&param).expect("serialize");
        assert_eq!(value["shape"], "primitive");
        assert_eq!(value["type"], "address");
        let back: Param = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, param);
    }
}
