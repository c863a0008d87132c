#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Method Catalog: the schema of every JSON-RPC method Atlas exposes.
//!
//! The catalog is assembled from the static method table in [`methods`] with
//! chain-specific sample values from [`defaults`]. Method ids are unique;
//! [`MethodCatalog::new`] rejects duplicates. Wire reshaping rules live in
//! [`wire`], keyed by method id, so descriptors stay plain data.

pub mod defaults;
pub mod methods;
pub mod wire;

use std::collections::BTreeMap;

use ir::{MethodDescriptor, MethodGroup};
use serde_json::Value;
use thiserror::Error;
use types::Chain;

pub use defaults::{get_defaults, resolve_defaults_by_id, resolve_defaults_by_slug, ResolvedDefaults};
pub use methods::get_method_list;

/// Errors raised while assembling a catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two descriptors share the same method id.
    #[error("Duplicate method id: {0}")]
    DuplicateMethod(String),
}

/// Convenient result type for catalog construction.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// An ordered, id-indexed collection of method descriptors.
#[derive(Debug, Clone)]
pub struct MethodCatalog {
    methods: Vec<MethodDescriptor>,
    index: BTreeMap<String, usize>,
}

impl MethodCatalog {
    /// Build a catalog from descriptors, keeping their order.
    pub fn new(methods: Vec<MethodDescriptor>) -> Result<Self> {
        let mut index = BTreeMap::new();
        for (position, method) in methods.iter().enumerate() {
            if index.insert(method.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateMethod(method.id.clone()));
            }
        }
        Ok(Self { methods, index })
    }

    /// The full method table with `defaults` injected.
    pub fn for_defaults(defaults: &ResolvedDefaults) -> Result<Self> {
        Self::new(get_method_list(defaults))
    }

    /// The full method table for `chain` (baseline chain when `None`).
    pub fn for_chain(chain: Option<Chain>) -> Result<Self> {
        Self::for_defaults(&get_defaults(chain))
    }

    /// Descriptors in catalog order.
    pub fn methods(&self) -> &[MethodDescriptor] { &self.methods }

    /// Descriptors of one group, in catalog order.
    pub fn methods_in(&self, group: MethodGroup) -> impl Iterator<Item = &MethodDescriptor> {
        self.methods.iter().filter(move |m| m.group == group)
    }

    /// Whether `id` names a method in this catalog.
    pub fn contains(&self, id: &str) -> bool { self.index.contains_key(id) }

    /// JSON-RPC `params` for `id` built from positional form values.
    ///
    /// `None` if the method is unknown.
    pub fn wire_params(&self, id: &str, inputs: &[Value]) -> Option<Vec<Value>> {
        self.get_method(id).map(|m| wire::to_wire_params(m, inputs))
    }
}

/// Read-only interface to a [`MethodCatalog`].
pub trait CatalogReader {
    /// All method ids, in catalog order.
    fn list_methods(&self) -> Vec<&str>;

    /// Get a method descriptor by id.
    ///
    /// Returns `None` if no method with the given id exists.
    fn get_method(&self, id: &str) -> Option<&MethodDescriptor>;

    /// Total number of methods.
    fn method_count(&self) -> usize;
}

impl CatalogReader for MethodCatalog {
    fn list_methods(&self) -> Vec<&str> { self.methods.iter().map(|m| m.id.as_str()).collect() }

    fn get_method(&self, id: &str) -> Option<&MethodDescriptor> {
        self.index.get(id).and_then(|&i| self.methods.get(i))
    }

    fn method_count(&self) -> usize { self.methods.len() }
}

/// Bucket descriptors by group, preserving their relative order.
pub fn group_methods(methods: &[MethodDescriptor]) -> BTreeMap<MethodGroup, Vec<&MethodDescriptor>> {
    let mut groups: BTreeMap<MethodGroup, Vec<&MethodDescriptor>> = BTreeMap::new();
    for method in methods {
        groups.entry(method.group).or_default().push(method);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut methods = get_method_list(&ResolvedDefaults::default());
        let first = methods[0].clone();
        methods.push(first.clone());
        let err = MethodCatalog::new(methods).expect_err("duplicate should be rejected");
        assert_eq!(err, CatalogError::DuplicateMethod(first.id));
    }

    #[test]
    fn test_reader_lookups() {
        let catalog = MethodCatalog::for_chain(None).expect("catalog should build");
        assert_eq!(catalog.method_count(), catalog.list_methods().len());
        assert!(catalog.get_method("eth_getBalance").is_some());
        assert!(catalog.get_method("eth_doesNotExist").is_none());
        assert!(catalog.wire_params("eth_doesNotExist", &[]).is_none());
    }
}
