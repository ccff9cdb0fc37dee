//! Command Definition
//!
//! Display data of a single menu command: its id, label and shortcut hint.

use serde::{Deserialize, Serialize};

/// A menu command definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDef {
    /// Unique identifier for the command (dot separated, e.g. "edit.copy")
    pub id: String,

    /// Label shown in menus
    #[serde(default)]
    pub label: String,

    /// Shortcut hint shown next to the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
}

impl CommandDef {
    /// Create a new command definition; the label defaults to the id
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            shortcut: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    /// Label to display; falls back to the id when no label is set
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() { &self.id } else { &self.label }
    }
}
