//! TOML loader for command catalogs
//!
//! # Example TOML format:
//! ```toml
//! [[commands]]
//! id = "edit.copy"
//! label = "Copy"
//! shortcut = "Ctrl+C"
//! ```

use std::path::Path;

use serde::Deserialize;

use super::{CommandCatalog, CommandDef};
use crate::error::{MenuConfigError, Result};

/// Raw command definition as it appears in TOML
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CommandToml {
    id: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    shortcut: Option<String>,
}

/// Container for the TOML file structure
#[derive(Debug, Deserialize)]
pub(crate) struct CommandsFile {
    #[serde(default)]
    commands: Vec<CommandToml>,
}

impl CommandToml {
    /// Convert to CommandDef
    fn into_command_def(self) -> CommandDef {
        let mut cmd = CommandDef::new(self.id);
        if let Some(label) = self.label {
            cmd = cmd.with_label(label);
        }
        if let Some(shortcut) = self.shortcut.filter(|s| !s.is_empty()) {
            cmd = cmd.with_shortcut(shortcut);
        }
        cmd
    }
}

impl CommandsFile {
    /// Parse from TOML string
    fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load from file
    fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| MenuConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_toml(&content)?)
    }

    /// Convert to CommandCatalog
    fn into_catalog(self) -> CommandCatalog {
        let mut catalog = CommandCatalog::new();
        catalog.add_all(self.commands.into_iter().map(CommandToml::into_command_def));
        catalog
    }
}

/// Find a single command in a TOML string
pub(crate) fn find_command_in_toml(toml_str: &str, id: &str) -> Option<CommandDef> {
    let file = CommandsFile::from_toml(toml_str).ok()?;
    file.commands.into_iter().find(|cmd| cmd.id == id).map(CommandToml::into_command_def)
}

/// Load a catalog from a TOML string
pub fn load_catalog_from_str(toml_str: &str) -> Result<CommandCatalog> {
    Ok(CommandsFile::from_toml(toml_str)?.into_catalog())
}

/// Load a catalog from a file path
pub fn load_catalog_from_file(path: impl AsRef<Path>) -> Result<CommandCatalog> {
    Ok(CommandsFile::from_file(path)?.into_catalog())
}
