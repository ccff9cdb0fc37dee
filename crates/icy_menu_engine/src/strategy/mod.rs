//! Menu strategies
//!
//! A strategy builds the menu for one kind of canvas object. Concrete
//! strategies add type-specific entries; decorators wrap another strategy
//! and append a shared section after a separator. Chains are built bottom
//! up and each decorator owns the strategy it wraps:
//!
//! ```ignore
//! let circle = BaseMenuDecorator::base(Box::new(CircleMenuStrategy), &services);
//! let menu = circle.create_menu(&ctx);
//! // circle entries, separator, Copy, Cut
//! ```

mod builtin;
mod decorator;

pub use builtin::{BackgroundMenuStrategy, CircleMenuStrategy, SpecialMenuStrategy, TextItemMenuStrategy};
pub use decorator::{BaseMenuDecorator, BaseSection, MenuDecorator, PasteOnlyDecorator, PasteSection, SharedSection};

use crate::{CommandContext, Menu};

pub trait MenuStrategy {
    fn create_menu(&self, ctx: &CommandContext<'_>) -> Menu;
}

pub type StrategyBox = Box<dyn MenuStrategy>;

/// A strategy without entries. Decorating it yields only the shared section.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyMenuStrategy;

impl MenuStrategy for EmptyMenuStrategy {
    fn create_menu(&self, _ctx: &CommandContext<'_>) -> Menu {
        Menu::new()
    }
}
