//! Context menu composition and command dispatch for canvas editors.
//!
//! A right click on a canvas object shows a menu built for that object's
//! type. The pieces:
//!
//! - [`Command`]: an executable action with enablement and visibility checks
//! - [`MenuStrategy`]: builds the menu for one object type; decorators such as
//!   [`BaseMenuDecorator`] append shared sections after a separator
//! - [`StrategyRegistry`]: object type to strategy factory
//! - [`DispatchController`]: resolves the strategy for a gesture, falls back
//!   to `"Background"`, presents the menu and runs the chosen command
//!
//! The canvas, the popup and the clipboard are supplied by the host through
//! the traits in [`surface`].

pub mod catalog;
pub mod command;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod menu;
pub mod object;
pub mod registry;
pub mod strategy;
pub mod surface;

pub use catalog::{cmd, create_default_catalog, load_catalog_from_file, load_catalog_from_str, CommandCatalog, CommandDef};
pub use command::{Command, CommandRef, CompositeCommand, CopyCommand, NullCommand, PasteCommand};
pub use config::{DecoratorKind, LayoutConfig, LayoutEntry, StrategyKind};
pub use context::{CommandContext, EXTRA_SCENE_POS, EXTRA_SCREEN_POS};
pub use dispatch::{DispatchController, DispatchOutcome, PreparedMenu};
pub use error::{ClipboardError, MenuConfigError};
pub use menu::{Menu, MenuBuilder, MenuEntry, MenuItem, SubMenu};
pub use object::{object_type, CanvasObject, ObjectRef};
pub use registry::{register_default_strategies, StrategyFactory, StrategyRegistry};
pub use strategy::{
    BackgroundMenuStrategy, BaseMenuDecorator, CircleMenuStrategy, EmptyMenuStrategy, MenuDecorator, MenuStrategy, PasteOnlyDecorator,
    SpecialMenuStrategy, StrategyBox, TextItemMenuStrategy,
};
pub use surface::{
    ClipboardSource, ContextMenuEvent, EditorServices, LogMessageSink, MemoryClipboard, MenuPresenter, MessageSink, ScenePoint, ScreenPoint,
    Surface,
};
