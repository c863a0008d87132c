#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
//! Command implementations behind the `atlas` binary.
//!
//! Each command returns the text to print so the binary stays a thin shell
//! over argument parsing and exit codes.

use std::fmt;
use std::path::Path;

use analysis::ParamValidator;
use catalog::{group_methods, MethodCatalog};
use codegen::{CodeGenerator, Snippet};
use ir::{MethodDescriptor, MethodGroup};
use providers::{ProviderRegistry, ProviderRegistryReader};
use serde_json::Value;
use thiserror::Error;
use types::{Chain, Provider, Target};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading or validating the configuration failed.
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    /// The method table is malformed.
    #[error(transparent)]
    Catalog(#[from] catalog::CatalogError),
    /// The code generator could not be built.
    #[error(transparent)]
    Codegen(#[from] codegen::CodegenError),
    /// The validator could not be built.
    #[error(transparent)]
    Analysis(#[from] analysis::AnalysisError),
    /// The capability dataset could not be loaded.
    #[error(transparent)]
    Data(#[from] providers::ProviderDataError),
    /// Logging could not be set up.
    #[error(transparent)]
    Logging(#[from] logging::LoggingError),
    /// Language and library do not pair up.
    #[error(transparent)]
    Target(#[from] types::TargetError),
    /// The method id is not in the catalog.
    #[error("Unknown method: {0}")]
    UnknownMethod(String),
    /// Some params failed validation.
    #[error("Invalid value for {method}: {}", .params.join(", "))]
    InvalidInput {
        /// Method id
        method: String,
        /// Names of the rejected params
        params: Vec<String>,
    },
    /// Printing JSON failed.
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

/// Interpret one command-line value.
///
/// Booleans, arrays and objects written as JSON are taken as such; anything
/// else (including numbers) is a string, since every scalar param is text.
pub fn parse_value(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(value @ (Value::Bool(_) | Value::Array(_) | Value::Object(_))) => value,
        _ => Value::String(raw.to_string()),
    }
}

/// Look up `id` in `catalog`.
pub fn find_method<'a>(catalog: &'a MethodCatalog, id: &str) -> Result<&'a MethodDescriptor> {
    use catalog::CatalogReader;
    catalog.get_method(id).ok_or_else(|| CliError::UnknownMethod(id.to_string()))
}

/// Descriptors grouped under their headings, optionally one group only.
pub fn list_methods(catalog: &MethodCatalog, only: Option<MethodGroup>) -> String {
    let mut out = String::new();
    for (group, methods) in group_methods(catalog.methods()) {
        if only.is_some_and(|g| g != group) {
            continue;
        }
        out.push_str(group.display_name());
        out.push('\n');
        for method in methods {
            let params: Vec<String> =
                method.params.iter().map(|p| format!("{}: {}", p.name(), p.type_label())).collect();
            out.push_str(&format!("  {:<40} {}({})\n", method.id, method.name, params.join(", ")));
        }
    }
    out
}

/// Resolved defaults of `chain` as pretty JSON.
pub fn show_defaults(chain: Chain) -> Result<String> {
    Ok(serde_json::to_string_pretty(&catalog::get_defaults(Some(chain)))?)
}

/// Positional values with every missing trailing one taken from the form's
/// initial values.
pub fn fill_inputs(method: &MethodDescriptor, values: &[Value]) -> Vec<Value> {
    let mut inputs = values.to_vec();
    inputs.extend(method.initial_values().into_iter().skip(values.len()));
    inputs
}

/// One verdict per top-level param.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Method id
    pub method: String,
    /// `(param name, type label, valid)`
    pub verdicts: Vec<(String, String, bool)>,
}

impl ValidationReport {
    /// Validate `values` against `method`'s params.
    pub fn new(validator: &ParamValidator, method: &MethodDescriptor, values: &[Value]) -> Self {
        let verdicts = validator
            .validate_params(&method.params, values)
            .into_iter()
            .zip(&method.params)
            .map(|(valid, p)| (p.name().to_string(), p.type_label(), valid))
            .collect();
        Self { method: method.id.clone(), verdicts }
    }

    /// Whether every param is valid.
    pub fn is_valid(&self) -> bool { self.verdicts.iter().all(|(_, _, ok)| *ok) }

    /// Names of the invalid params.
    pub fn invalid(&self) -> Vec<String> {
        self.verdicts.iter().filter(|(_, _, ok)| !ok).map(|(name, _, _)| name.clone()).collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.verdicts.is_empty() {
            return writeln!(f, "{} takes no params", self.method);
        }
        for (name, label, ok) in &self.verdicts {
            writeln!(f, "{:<8} {} ({})", if *ok { "ok" } else { "invalid" }, name, label)?;
        }
        Ok(())
    }
}

/// Render a snippet after filling and validating the inputs.
pub fn render(
    generator: &CodeGenerator,
    validator: &ParamValidator,
    target: Target,
    method_id: &str,
    values: &[Value],
) -> Result<String> {
    let method = find_method(generator.catalog(), method_id)?;
    let inputs = fill_inputs(method, values);
    let report = ValidationReport::new(validator, method, &inputs);
    if !report.is_valid() {
        return Err(CliError::InvalidInput { method: method.id.clone(), params: report.invalid() });
    }
    Ok(match generator.render(target, method_id, &inputs) {
        Snippet::Code(code) => code,
        Snippet::Unsupported => format!("{} is not available for {}", method_id, target),
    })
}

/// Capability dataset from `path`, or the bundled one.
pub fn load_registry(path: Option<&Path>) -> Result<ProviderRegistry> {
    Ok(match path {
        Some(path) => {
            tracing::debug!("Loading provider data from {}", path.display());
            ProviderRegistry::from_file(path)?
        }
        None => {
            tracing::debug!("Using bundled provider data");
            ProviderRegistry::bundled()?
        }
    })
}

/// Feature and method support of `provider` on `chain`.
pub fn support_report(registry: &ProviderRegistry, provider: Provider, chain: Chain) -> String {
    let Some(entry) = registry.get_entry(provider, chain.id()) else {
        return format!("{} has not been probed on {}\n", provider.display_name(), chain.display_name());
    };
    let mut out = format!("{} on {}", provider.display_name(), chain.display_name());
    if let Some(at) = entry.probed_at() {
        out.push_str(&format!(" (probed {})", at.format("%Y-%m-%d")));
    }
    out.push_str("\nFeatures\n");
    for (feature, status) in entry.features.iter() {
        out.push_str(&format!("  {:<16} {}\n", feature.display_name(), status));
    }
    out.push_str("Methods\n");
    for (method, status) in &entry.methods {
        out.push_str(&format!("  {:<40} {}\n", method, status));
    }
    out
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("true"), json!(true));
        assert_eq!(parse_value("[\"0x1\"]"), json!(["0x1"]));
        assert_eq!(parse_value("{\"to\":\"0x0\"}"), json!({"to": "0x0"}));
        assert_eq!(parse_value("12345"), json!("12345"));
        assert_eq!(parse_value("latest"), json!("latest"));
        assert_eq!(parse_value("null"), json!("null"));
        assert_eq!(parse_value(""), json!(""));
    }

    #[test]
    fn test_fill_inputs_keeps_given_values() {
        let catalog = MethodCatalog::for_chain(None).expect("catalog should build");
        let method = find_method(&catalog, "eth_getBalance").expect("known method");
        let filled = fill_inputs(method, &[json!("0x0000000000000000000000000000000000000001")]);
        assert_eq!(filled.len(), method.params.len());
        assert_eq!(filled[0], json!("0x0000000000000000000000000000000000000001"));
        assert_eq!(filled[1], method.initial_values()[1]);
    }

    #[test]
    fn test_validation_report() {
        let catalog = MethodCatalog::for_chain(None).expect("catalog should build");
        let validator = ParamValidator::new().expect("patterns should compile");
        let method = find_method(&catalog, "eth_getBalance").expect("known method");
        let report = ValidationReport::new(&validator, method, &[json!("0x123"), json!("latest")]);
        assert!(!report.is_valid());
        assert_eq!(report.invalid(), vec![method.params[0].name().to_string()]);
        assert!(report.to_string().contains("invalid"));
    }

    #[test]
    fn test_unknown_method() {
        let catalog = MethodCatalog::for_chain(None).expect("catalog should build");
        assert!(matches!(find_method(&catalog, "eth_nope"), Err(CliError::UnknownMethod(id)) if id == "eth_nope"));
    }

    #[test]
    fn test_support_report_for_unprobed_pair() {
        let registry = ProviderRegistry::new();
        let text = support_report(&registry, Provider::Infura, Chain::Base);
        assert_eq!(text, "Infura has not been probed on Base\n");
    }

    #[test]
    fn test_load_registry() {
        let bundled = load_registry(None).expect("bundled dataset should load");
        assert!(bundled.entry_count() > 0);
        let missing = load_registry(Some(Path::new("/nonexistent/providers.json")));
        assert!(matches!(missing, Err(CliError::Data(_))));
    }
}
