//! Catalog validation
//!
//! Checks the method table for structural mistakes before it is used to
//! validate input or generate code.

use std::collections::HashSet;

use ir::{MethodDescriptor, Param};

use crate::validator::ParamValidator;

/// Maximum nesting depth of a param (object-of-scalars or array-of-scalars).
pub const MAX_PARAM_DEPTH: usize = 2;

/// Catalog checker
pub struct CatalogChecker {
    validator: ParamValidator,
}

impl CatalogChecker {
    /// Create a checker that validates defaults with `validator`.
    pub fn new(validator: ParamValidator) -> Self { Self { validator } }
}

impl CatalogChecker {
    /// Check every descriptor and return the problems found.
    pub fn check(&self, methods: &[MethodDescriptor]) -> Vec<String> {
        let mut errors = Vec::new();

        let mut seen = HashSet::new();
        for m in methods {
            if m.id.trim().is_empty() {
                errors.push(format!("Method `{}` has an empty id", m.name));
            }
            if m.name.trim().is_empty() {
                errors.push(format!("Method `{}` has an empty name", m.id));
            }
            if !seen.insert(m.id.as_str()) {
                errors.push(format!("Duplicate method id: {}", m.id));
            }
        }

        for m in methods {
            self.check_method(m, &mut errors);
        }

        errors
    }

    fn check_method(&self, method: &MethodDescriptor, errors: &mut Vec<String>) {
        let mut seen = HashSet::new();
        for p in &method.params {
            if !seen.insert(p.name()) {
                errors.push(format!("Method `{}` duplicate param `{}`", method.id, p.name()));
            }
            if p.depth() > MAX_PARAM_DEPTH {
                errors.push(format!(
                    "Method `{}` param `{}` nests {} levels deep",
                    method.id,
                    p.name(),
                    p.depth()
                ));
            }
            self.check_param(&method.id, p.name(), p, errors);
        }
    }

    fn check_param(&self, method: &str, path: &str, param: &Param, errors: &mut Vec<String>) {
        if param.name().trim().is_empty() {
            errors.push(format!("Method `{}` has a param with empty name", method));
        }
        match param {
            Param::Primitive(p) => match &p.default {
                None if p.required => {
                    errors.push(format!("Method `{}` field `{}`: required without default", method, path))
                }
                Some(value) if !self.validator.validate_param(param, value) => errors.push(format!(
                    "Method `{}` field `{}`: default {} is not a valid {}",
                    method, path, value, p.kind
                )),
                _ => {}
            },
            Param::Array(a) => {
                let items = serde_json::Value::Array(a.default.clone().unwrap_or_default());
                if !self.validator.validate_param(param, &items) {
                    errors.push(format!(
                        "Method `{}` field `{}`: default items are not valid {}",
                        method, path, a.item_type
                    ));
                }
            }
            Param::Object(o) => {
                if o.items.is_empty() {
                    errors.push(format!("Method `{}` field `{}`: object has no fields", method, path));
                }
                for (key, field) in &o.items {
                    if key != field.name() {
                        errors.push(format!(
                            "Method `{}` field `{}.{}`: key does not match name `{}`",
                            method,
                            path,
                            key,
                            field.name()
                        ));
                    }
                    self.check_param(method, &format!("{}.{}", path, key), field, errors);
                }
            }
        }
    }
}
