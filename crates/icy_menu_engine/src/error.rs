//! Error types for icy_menu_engine
//!
//! Menu building and dispatch never fail; absent strategies and commands are
//! handled by falling back. Errors only exist at the edges: loading
//! configuration files and reading the clipboard.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading command catalogs or layout files
#[derive(Debug, Error)]
pub enum MenuConfigError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown menu strategy '{0}'")]
    UnknownStrategy(String),

    #[error("Unknown menu decorator '{0}'")]
    UnknownDecorator(String),
}

/// Errors reported by a [`crate::ClipboardSource`]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    /// Clipboard holds no text
    #[error("Clipboard is empty")]
    Empty,

    /// The clipboard could not be accessed
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, MenuConfigError>;
