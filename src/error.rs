// SPDX-License-Identifier: MPL-2.0
//! Error types for the fallible edges of the crate.
//!
//! Only file-backed inputs (settings and page manifests) can fail. The
//! interactive controllers never surface errors: lookup misses, empty
//! galleries and missing markup are absorbed as defaults or no-ops.

use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Manifest(ManifestError),
}

/// Reasons a page manifest can be rejected after it was parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestError {
    /// The TOML document could not be parsed.
    Parse(String),

    /// A slide or feature entry carries an empty `src`.
    EmptySource { section: &'static str, position: usize },
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::Parse(msg) => write!(f, "invalid manifest: {}", msg),
            ManifestError::EmptySource { section, position } => {
                write!(f, "empty src in {} entry #{}", section, position + 1)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Manifest(e) => write!(f, "Manifest Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ManifestError> for Error {
    fn from(err: ManifestError) -> Self {
        Error::Manifest(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
