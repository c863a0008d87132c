#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Atlas method schema
//!
//! This crate defines the data model shared by the catalog, the validator and
//! the code generator: the closed [`ParamType`] vocabulary, the three
//! [`Param`] shapes and the [`MethodDescriptor`] that groups them under a
//! JSON-RPC method id. Everything here is plain serializable data; reshaping
//! behaviour lives with the consumers, keyed by method id.

pub mod ids;
pub mod method;
pub mod param;

pub use method::{MethodDescriptor, MethodGroup};
pub use param::{ArrayParam, ObjectParam, Param, ParamType, PrimitiveParam};
