#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Atlas Analysis
//!
//! Two checks over the method schema:
//! - [`ParamValidator`] decides whether user-supplied values satisfy a
//!   method's params, one verdict per top-level param.
//! - [`CatalogChecker`] verifies the method table itself is well formed
//!   before anything is generated from it.

use thiserror::Error;

pub mod catalog_check;
pub mod validator;

pub use catalog_check::CatalogChecker;
pub use validator::ParamValidator;

/// Errors raised while setting up analysis components.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// One of the built-in value patterns failed to compile.
    #[error("Invalid value pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Convenient result type for analysis setup.
pub type Result<T> = std::result::Result<T, AnalysisError>;
