//! Command catalog
//!
//! Display data for menu commands: stable ids, labels and shortcut hints.
//! Strategies refer to commands through the statics in [`cmd`]; a
//! [`CommandCatalog`] loaded from TOML can relabel built menus (for example
//! with a translated label table).
//!
//! # Example TOML format:
//! ```toml
//! [[commands]]
//! id = "edit.copy"
//! label = "复制"
//! shortcut = "Ctrl+C"
//! ```

mod command_catalog;
mod command_def;
pub mod command_ref;
mod defaults;
mod toml_loader;

pub use command_catalog::CommandCatalog;
pub use command_def::CommandDef;
pub use defaults::{cmd, create_default_catalog};
pub use toml_loader::{load_catalog_from_file, load_catalog_from_str};
