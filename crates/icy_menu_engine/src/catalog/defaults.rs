//! Built-in menu commands
//!
//! Labels and shortcut hints are loaded from `data/menu_commands.toml`.

use super::{toml_loader, CommandCatalog};

/// The embedded default commands TOML
const DEFAULT_COMMANDS_TOML: &str = include_str!("../../data/menu_commands.toml");

/// Create the catalog of all built-in commands with their default labels
pub fn create_default_catalog() -> CommandCatalog {
    toml_loader::load_catalog_from_str(DEFAULT_COMMANDS_TOML).expect("Failed to parse embedded menu_commands.toml")
}

/// Command definitions used by the built-in strategies
pub mod cmd {
    use crate::define_commands;

    define_commands! {
        commands: super::DEFAULT_COMMANDS_TOML,

        // Shared section
        EDIT_COPY = "edit.copy",
        EDIT_CUT = "edit.cut",
        EDIT_PASTE = "edit.paste",

        // Text items
        TEXT_EDIT = "text.edit",
        TEXT_FONT = "text.font",

        // Background
        BACKGROUND_ADD_SLIDE = "background.add_slide",
        BACKGROUND_LAYOUT = "background.layout",

        // Special items
        SPECIAL_ONLY = "special.only",

        // Circles
        CIRCLE_COLOR = "circle.color",
        CIRCLE_SIZE = "circle.size",
        CIRCLE_PROPERTIES = "circle.properties",
        CIRCLE_ROTATE = "circle.rotate",
        CIRCLE_SCALE = "circle.scale",
    }
}
