//! Code generation targets.
//!
//! A [`Target`] pairs a [`Language`] with a [`Library`]. Only the pairs in
//! [`Target::ALL`] exist; [`Target::new`] rejects everything else.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when building a [`Target`] from loose parts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TargetError {
    /// The language name is not recognised.
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
    /// The library name is not recognised.
    #[error("Unknown library: {0}")]
    UnknownLibrary(String),
    /// Both parts are known but they do not pair up.
    #[error("Library `{library}` is not available for language `{language}`")]
    Incompatible {
        /// Requested language
        language: Language,
        /// Requested library
        library: Library,
    },
}

/// Output language of a snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Raw JSON-RPC envelope
    #[default]
    Json,
    /// JavaScript
    Javascript,
    /// Python
    Python,
}

impl Language {
    /// Every language.
    pub const ALL: [Language; 3] = [Language::Json, Language::Javascript, Language::Python];

    /// Canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Json => "json",
            Language::Javascript => "javascript",
            Language::Python => "python",
        }
    }

    /// Libraries that pair with this language, default first.
    pub fn libraries(&self) -> &'static [Library] {
        match self {
            Language::Json => &[Library::Vanilla],
            Language::Javascript => {
                &[Library::Ethers, Library::Viem, Library::Fetch, Library::Axios]
            }
            Language::Python => &[Library::Web3Py, Library::Requests],
        }
    }

    /// Library used when only the language is given.
    pub fn default_library(&self) -> Library { self.libraries()[0] }
}

impl FromStr for Language {
    type Err = TargetError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Language::Json),
            "javascript" | "js" => Ok(Language::Javascript),
            "python" | "py" => Ok(Language::Python),
            _ => Err(TargetError::UnknownLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}

/// Client library a snippet is written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Library {
    /// No library: the wire envelope itself
    #[default]
    Vanilla,
    /// ethers.js v6
    Ethers,
    /// viem
    Viem,
    /// Browser `fetch`
    Fetch,
    /// axios
    Axios,
    /// web3.py
    Web3Py,
    /// Python `requests`
    Requests,
}

impl Library {
    /// Every library, grouped by language.
    pub const ALL: [Library; 7] = [
        Library::Vanilla,
        Library::Ethers,
        Library::Viem,
        Library::Fetch,
        Library::Axios,
        Library::Web3Py,
        Library::Requests,
    ];

    /// Canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Library::Vanilla => "vanilla",
            Library::Ethers => "ethers",
            Library::Viem => "viem",
            Library::Fetch => "fetch",
            Library::Axios => "axios",
            Library::Web3Py => "web3py",
            Library::Requests => "requests",
        }
    }

    /// Language this library belongs to.
    pub fn language(&self) -> Language {
        match self {
            Library::Vanilla => Language::Json,
            Library::Ethers | Library::Viem | Library::Fetch | Library::Axios => {
                Language::Javascript
            }
            Library::Web3Py | Library::Requests => Language::Python,
        }
    }

    /// Serialization convention this library follows.
    pub fn convention(&self) -> Convention {
        match self {
            Library::Vanilla => Convention::RawProtocol,
            Library::Ethers | Library::Viem | Library::Web3Py => Convention::Client,
            Library::Fetch | Library::Axios | Library::Requests => Convention::Transport,
        }
    }
}

impl FromStr for Library {
    type Err = TargetError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vanilla" => Ok(Library::Vanilla),
            "ethers" => Ok(Library::Ethers),
            "viem" => Ok(Library::Viem),
            "fetch" => Ok(Library::Fetch),
            "axios" => Ok(Library::Axios),
            "web3py" | "web3.py" => Ok(Library::Web3Py),
            "requests" => Ok(Library::Requests),
            _ => Err(TargetError::UnknownLibrary(s.to_string())),
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}

/// How a target serializes a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Convention {
    /// The JSON-RPC envelope, params passed through.
    RawProtocol,
    /// A named operation of a high-level client library.
    Client,
    /// A hand-built HTTP POST carrying the wire envelope.
    Transport,
}

/// A valid (language, library) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub struct Target {
    language: Language,
    library: Library,
}

impl Target {
    /// Every valid target.
    pub const ALL: [Target; 7] = [
        Target { language: Language::Json, library: Library::Vanilla },
        Target { language: Language::Javascript, library: Library::Ethers },
        Target { language: Language::Javascript, library: Library::Viem },
        Target { language: Language::Javascript, library: Library::Fetch },
        Target { language: Language::Javascript, library: Library::Axios },
        Target { language: Language::Python, library: Library::Web3Py },
        Target { language: Language::Python, library: Library::Requests },
    ];

    /// Pair `language` with `library`, rejecting incompatible combinations.
    pub fn new(language: Language, library: Library) -> Result<Self, TargetError> {
        if library.language() != language {
            return Err(TargetError::Incompatible { language, library });
        }
        Ok(Self { language, library })
    }

    /// Target for `library` in its own language.
    pub fn for_library(library: Library) -> Self { Self { language: library.language(), library } }

    /// Output language.
    pub fn language(&self) -> Language { self.language }

    /// Client library.
    pub fn library(&self) -> Library { self.library }

    /// Serialization convention.
    pub fn convention(&self) -> Convention { self.library.convention() }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.language, self.library)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_targets_are_valid() {
        for target in Target::ALL {
            let rebuilt = Target::new(target.language(), target.library())
                .expect("every listed target should be constructible");
            assert_eq!(rebuilt, target);
        }
    }

    #[test]
    fn test_incompatible_pair_is_rejected() {
        let err = Target::new(Language::Python, Library::Viem).expect_err("viem is javascript");
        assert_eq!(
            err,
            TargetError::Incompatible { language: Language::Python, library: Library::Viem }
        );
    }

    #[test]
    fn test_loose_names() {
        let language: Language = "py".parse().expect("python alias");
        assert_eq!(language.default_library(), Library::Web3Py);

        let library: Library = "web3.py".parse().expect("web3py alias");
        assert_eq!(Target::for_library(library).language(), Language::Python);
        assert_eq!("AXIOS".parse::<Library>().map(|l| l.convention()), Ok(Convention::Transport));

        assert!(matches!("rust".parse::<Language>(), Err(TargetError::UnknownLanguage(_))));
    }

    #[test]
    fn test_default_is_raw_envelope() {
        let target = Target::default();
        assert_eq!(target.language(), Language::Json);
        assert_eq!(target.library(), Library::Vanilla);
        assert_eq!(target.convention(), Convention::RawProtocol);
    }
}
