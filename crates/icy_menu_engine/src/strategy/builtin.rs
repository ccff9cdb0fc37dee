//! Type-specific strategies for the built-in object types.

use super::MenuStrategy;
use crate::catalog::cmd;
use crate::{CommandContext, Menu, MenuBuilder};

/// Text items: edit text, change font
#[derive(Debug, Default, Clone, Copy)]
pub struct TextItemMenuStrategy;

impl MenuStrategy for TextItemMenuStrategy {
    fn create_menu(&self, ctx: &CommandContext<'_>) -> Menu {
        let mut builder = MenuBuilder::new(ctx);
        builder.add_placeholder(&cmd::TEXT_EDIT).add_placeholder(&cmd::TEXT_FONT);
        builder.build()
    }
}

/// Empty canvas: add slide, layout
#[derive(Debug, Default, Clone, Copy)]
pub struct BackgroundMenuStrategy;

impl MenuStrategy for BackgroundMenuStrategy {
    fn create_menu(&self, ctx: &CommandContext<'_>) -> Menu {
        let mut builder = MenuBuilder::new(ctx);
        builder
            .add_placeholder(&cmd::BACKGROUND_ADD_SLIDE)
            .add_placeholder(&cmd::BACKGROUND_LAYOUT);
        builder.build()
    }
}

/// Objects without shared actions
#[derive(Debug, Default, Clone, Copy)]
pub struct SpecialMenuStrategy;

impl MenuStrategy for SpecialMenuStrategy {
    fn create_menu(&self, ctx: &CommandContext<'_>) -> Menu {
        let mut builder = MenuBuilder::new(ctx);
        builder.add_placeholder(&cmd::SPECIAL_ONLY);
        builder.build()
    }
}

/// Circles: color, size and a "Shape Properties" sub-menu
#[derive(Debug, Default, Clone, Copy)]
pub struct CircleMenuStrategy;

impl MenuStrategy for CircleMenuStrategy {
    fn create_menu(&self, ctx: &CommandContext<'_>) -> Menu {
        let mut builder = MenuBuilder::new(ctx);
        builder
            .add_placeholder(&cmd::CIRCLE_COLOR)
            .add_placeholder(&cmd::CIRCLE_SIZE)
            .submenu(&cmd::CIRCLE_PROPERTIES, |sub| {
                sub.add_placeholder(&cmd::CIRCLE_ROTATE).add_placeholder(&cmd::CIRCLE_SCALE);
            });
        builder.build()
    }
}
