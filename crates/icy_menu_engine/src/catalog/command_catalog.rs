//! Command Catalog
//!
//! A collection of command definitions keyed by id. Menus are relabeled
//! from a catalog before they are shown, which is how user label tables
//! (translations, custom shortcut hints) reach the menus.

use std::collections::HashMap;

use super::CommandDef;

#[derive(Debug, Default, Clone)]
pub struct CommandCatalog {
    commands: HashMap<String, CommandDef>,
}

impl CommandCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command, replacing any command with the same id
    pub fn add(&mut self, command: CommandDef) {
        self.commands.insert(command.id.clone(), command);
    }

    /// Add multiple commands
    pub fn add_all(&mut self, commands: impl IntoIterator<Item = CommandDef>) {
        for cmd in commands {
            self.add(cmd);
        }
    }

    /// Get a command by ID
    pub fn get(&self, id: &str) -> Option<&CommandDef> {
        self.commands.get(id)
    }

    /// Label of a command, if the catalog knows it
    pub fn label(&self, id: &str) -> Option<&str> {
        self.get(id).map(CommandDef::display_label)
    }

    /// Merge another catalog into this one
    /// Commands from `other` override commands with the same ID
    pub fn merge(&mut self, other: CommandCatalog) {
        for (_, cmd) in other.commands {
            self.add(cmd);
        }
    }

    /// All command IDs, sorted
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of commands in the catalog
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Builder macro for creating catalogs
#[macro_export]
macro_rules! command_catalog {
    (
        $(
            $id:literal {
                $( label: $label:literal )?
                $( shortcut: $shortcut:literal )?
            }
        ),* $(,)?
    ) => {{
        let mut catalog = $crate::catalog::CommandCatalog::new();
        $(
            #[allow(unused_mut)]
            let mut cmd = $crate::catalog::CommandDef::new($id);
            $(
                cmd = cmd.with_label($label);
            )?
            $(
                cmd = cmd.with_shortcut($shortcut);
            )?
            catalog.add(cmd);
        )*
        catalog
    }};
}
