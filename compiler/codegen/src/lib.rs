#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Snippet generation for JSON-RPC calls.
//!
//! This crate turns a catalog method and its positional form values into
//! source text for one (language, library) target. Raw and bare transport
//! targets embed the wire params in a JSON-RPC envelope; client libraries go
//! through per-method rule tables in [`clients`].
//!
//! Validation of the values themselves happens upstream, in the analysis crate.

pub mod clients;
pub mod envelope;
pub mod literal;

use std::collections::HashMap;

use catalog::{CatalogReader, MethodCatalog};
use serde_json::Value;
use thiserror::Error;
use types::{Library, Target};

pub use clients::Rule;
pub use literal::{Literal, Style};

/// Error type for code generator construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// A catalog method has no rule for a client library.
    #[error("{library} has no rule for method `{method}`")]
    MissingRule {
        /// Client library
        library: Library,
        /// Method id
        method: String,
    },
    /// A rule names a method the catalog does not know.
    #[error("{library} has a rule for unknown method `{method}`")]
    UnknownRule {
        /// Client library
        library: Library,
        /// Method id
        method: String,
    },
    /// A method appears twice in one rule table.
    #[error("{library} has more than one rule for method `{method}`")]
    DuplicateRule {
        /// Client library
        library: Library,
        /// Method id
        method: String,
    },
}

/// Convenient result type for codegen functions in this crate.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Output of a render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snippet {
    /// Source text for the target.
    Code(String),
    /// The target has no equivalent of this method.
    Unsupported,
}

impl Snippet {
    /// Source text, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            Snippet::Code(code) => Some(code),
            Snippet::Unsupported => None,
        }
    }

    /// Whether this is [`Snippet::Unsupported`].
    pub fn is_unsupported(&self) -> bool { matches!(self, Snippet::Unsupported) }
}

/// Renders snippets for every target over one catalog.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    catalog: MethodCatalog,
    clients: HashMap<Library, HashMap<&'static str, Rule>>,
}

impl CodeGenerator {
    /// Build the dispatch table, checking each client table against the catalog.
    pub fn new(catalog: &MethodCatalog) -> Result<Self> {
        let mut clients = HashMap::new();
        for library in Library::ALL {
            let Some(table) = clients::rules(library) else { continue };
            let mut rules = HashMap::with_capacity(table.len());
            for (method, rule) in table {
                if !catalog.contains(method) {
                    return Err(CodegenError::UnknownRule { library, method: method.to_string() });
                }
                if rules.insert(*method, *rule).is_some() {
                    return Err(CodegenError::DuplicateRule { library, method: method.to_string() });
                }
            }
            if let Some(missing) = catalog.list_methods().into_iter().find(|m| !rules.contains_key(*m)) {
                return Err(CodegenError::MissingRule { library, method: missing.to_string() });
            }
            clients.insert(library, rules);
        }
        Ok(Self { catalog: catalog.clone(), clients })
    }

    /// Render `method_id` with positional form `inputs` for `target`.
    ///
    /// Unknown methods and methods the target's library cannot express are
    /// [`Snippet::Unsupported`].
    pub fn render(&self, target: Target, method_id: &str, inputs: &[Value]) -> Snippet {
        let Some(params) = self.catalog.wire_params(method_id, inputs) else {
            tracing::debug!("no method `{}` in catalog", method_id);
            return Snippet::Unsupported;
        };
        let library = target.library();
        if let Some(code) = envelope::render(library, method_id, &params) {
            return Snippet::Code(code);
        }
        match self.clients.get(&library).and_then(|rules| rules.get(method_id)) {
            Some(Rule::Render(render)) => Snippet::Code(render(&params)),
            Some(Rule::Unsupported) | None => Snippet::Unsupported,
        }
    }

    /// Whether `target` can render `method_id`.
    pub fn supports(&self, target: Target, method_id: &str) -> bool {
        if !self.catalog.contains(method_id) {
            return false;
        }
        match self.clients.get(&target.library()) {
            Some(rules) => matches!(rules.get(method_id), Some(Rule::Render(_))),
            None => true,
        }
    }

    /// Catalog this generator renders from.
    pub fn catalog(&self) -> &MethodCatalog { &self.catalog }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_tables_cover_the_catalog() {
        let catalog = MethodCatalog::for_chain(None).expect("catalog should build");
        CodeGenerator::new(&catalog).expect("every client table should be complete");
    }

    #[test]
    fn test_missing_rule_is_reported() {
        let mut methods = catalog::get_method_list(&catalog::get_defaults(None));
        methods.push(ir::MethodDescriptor::new("eth_newMethod", "New", ir::MethodGroup::Reading, "", vec![]));
        let catalog = MethodCatalog::new(methods).expect("ids are unique");
        let err = CodeGenerator::new(&catalog).expect_err("new method has no rules");
        assert!(matches!(err, CodegenError::MissingRule { method, .. } if method == "eth_newMethod"));
    }

    #[test]
    fn test_unknown_rule_is_reported() {
        let methods = catalog::get_method_list(&catalog::get_defaults(None))
            .into_iter()
            .filter(|m| m.id != ir::ids::GET_WORK)
            .collect();
        let catalog = MethodCatalog::new(methods).expect("ids are unique");
        let err = CodeGenerator::new(&catalog).expect_err("tables mention eth_getWork");
        assert_eq!(
            err,
            CodegenError::UnknownRule { library: Library::Ethers, method: ir::ids::GET_WORK.to_string() }
        );
    }

    #[test]
    fn test_unknown_method_is_unsupported() {
        let catalog = MethodCatalog::for_chain(None).expect("catalog should build");
        let generator = CodeGenerator::new(&catalog).expect("generator should build");
        for target in Target::ALL {
            assert!(generator.render(target, "eth_doesNotExist", &[]).is_unsupported());
            assert!(!generator.supports(target, "eth_doesNotExist"));
        }
    }
}
