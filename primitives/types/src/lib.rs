#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Core identifiers for Atlas
//!
//! This crate defines the closed sets every other crate keys on: the
//! supported networks ([`Chain`]), the upstream RPC providers ([`Provider`])
//! and the code generation targets ([`Target`]). All three are immutable
//! tables defined at compile time.

/// Supported networks and their endpoint metadata.
pub mod chain;
/// Upstream JSON-RPC providers.
pub mod provider;
/// (language, library) pairs for snippet generation.
pub mod target;

pub use chain::Chain;
pub use provider::Provider;
pub use target::{Convention, Language, Library, Target, TargetError};
