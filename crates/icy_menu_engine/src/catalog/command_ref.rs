//! Lazily created command definitions backed by embedded TOML
//!
//! `define_commands!` creates `LazyLock<CommandDef>` statics. Each one looks
//! up its label and shortcut in the given TOML source on first access.
//!
//! # Example
//! ```ignore
//! use icy_menu_engine::define_commands;
//!
//! define_commands! {
//!     commands: include_str!("../data/menu_commands.toml"),
//!
//!     SHAPE_GROUP = "shape.group",
//!     SHAPE_UNGROUP = "shape.ungroup",
//! }
//!
//! println!("{}", SHAPE_GROUP.label);
//! ```

use super::toml_loader::find_command_in_toml;
use super::CommandDef;

/// Create a CommandDef from TOML; unknown ids get a bare definition
pub fn create_command_def(id: &'static str, toml_str: &'static str) -> CommandDef {
    find_command_in_toml(toml_str, id).unwrap_or_else(|| {
        log::warn!("command '{}' not found in command table", id);
        CommandDef::new(id)
    })
}

/// Macro to define commands with their associated TOML source
///
/// This creates one `pub static NAME: LazyLock<CommandDef>` per entry.
#[macro_export]
macro_rules! define_commands {
    (
        commands: $toml:expr,
        $( $name:ident = $id:literal ),* $(,)?
    ) => {
        $(
            pub static $name: std::sync::LazyLock<$crate::catalog::CommandDef> =
                std::sync::LazyLock::new(|| {
                    $crate::catalog::command_ref::create_command_def($id, $toml)
                });
        )*
    };
}
