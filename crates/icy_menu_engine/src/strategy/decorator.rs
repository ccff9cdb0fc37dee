//! Decorators that append shared sections to another strategy.

use std::rc::Rc;

use super::{MenuStrategy, StrategyBox};
use crate::catalog::cmd;
use crate::{CommandContext, CommandRef, CopyCommand, EditorServices, Menu, MenuBuilder, PasteCommand};

/// A fixed set of entries appended by a [`MenuDecorator`]
pub trait SharedSection {
    fn append(&self, builder: &mut MenuBuilder<'_>);
}

/// Wraps a strategy and appends `section` after a separator.
///
/// The wrapped strategy's entries always come first. Without a wrapped
/// strategy the menu starts empty, and the separator is still added.
pub struct MenuDecorator<S> {
    wrapped: Option<StrategyBox>,
    section: S,
}

impl<S: SharedSection> MenuDecorator<S> {
    pub fn new(wrapped: StrategyBox, section: S) -> Self {
        Self {
            wrapped: Some(wrapped),
            section,
        }
    }

    /// A decorator with nothing to wrap
    pub fn standalone(section: S) -> Self {
        Self { wrapped: None, section }
    }
}

impl<S: SharedSection> MenuStrategy for MenuDecorator<S> {
    fn create_menu(&self, ctx: &CommandContext<'_>) -> Menu {
        let menu = match &self.wrapped {
            Some(wrapped) => wrapped.create_menu(ctx),
            None => Menu::new(),
        };
        let mut builder = MenuBuilder::from_menu(ctx, menu);
        builder.separator();
        self.section.append(&mut builder);
        builder.build()
    }
}

/// Copy and Cut
pub struct BaseSection {
    copy: CommandRef,
}

impl BaseSection {
    pub fn new(services: &EditorServices) -> Self {
        Self {
            copy: Rc::new(CopyCommand::new(services.messages.clone())),
        }
    }
}

impl SharedSection for BaseSection {
    fn append(&self, builder: &mut MenuBuilder<'_>) {
        builder.add_command(&cmd::EDIT_COPY, self.copy.clone()).add_placeholder(&cmd::EDIT_CUT);
    }
}

/// Paste, enabled while the clipboard has content
pub struct PasteSection {
    paste: CommandRef,
}

impl PasteSection {
    pub fn new(services: &EditorServices) -> Self {
        Self {
            paste: Rc::new(PasteCommand::new(services.clipboard.clone(), services.messages.clone())),
        }
    }
}

impl SharedSection for PasteSection {
    fn append(&self, builder: &mut MenuBuilder<'_>) {
        builder.add_command(&cmd::EDIT_PASTE, self.paste.clone());
    }
}

pub type BaseMenuDecorator = MenuDecorator<BaseSection>;

pub type PasteOnlyDecorator = MenuDecorator<PasteSection>;

impl BaseMenuDecorator {
    pub fn base(wrapped: StrategyBox, services: &EditorServices) -> Self {
        Self::new(wrapped, BaseSection::new(services))
    }
}

impl PasteOnlyDecorator {
    pub fn paste_only(wrapped: StrategyBox, services: &EditorServices) -> Self {
        Self::new(wrapped, PasteSection::new(services))
    }
}
