//! Commands bound to menu entries
//!
//! A command answers three separate questions:
//! - what happens when it runs ([`Command::execute`])
//! - whether it may run right now ([`Command::is_enabled`])
//! - whether it should be offered at all ([`Command::is_visible`])
//!
//! Commands receive the [`CommandContext`] at execution time and never keep
//! it. There is no inverse operation; commands are fire-and-forget.

mod edit;

pub use edit::{CopyCommand, PasteCommand};

use std::rc::Rc;

use crate::CommandContext;

pub trait Command {
    /// Perform the action. Expected conditions must not panic; failures are
    /// reported by the command itself.
    fn execute(&self, ctx: &CommandContext<'_>);

    /// Whether the action can currently run. Must be free of side effects.
    fn is_enabled(&self, _ctx: &CommandContext<'_>) -> bool {
        true
    }

    /// Whether the action is offered at all. Hidden entries are left out of
    /// the menu instead of being shown disabled.
    fn is_visible(&self, _ctx: &CommandContext<'_>) -> bool {
        true
    }
}

pub type CommandRef = Rc<dyn Command>;

/// Does nothing. Bound to placeholder entries.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCommand;

impl NullCommand {
    pub fn shared() -> CommandRef {
        Rc::new(NullCommand)
    }
}

impl Command for NullCommand {
    fn execute(&self, _ctx: &CommandContext<'_>) {}
}

/// Runs its children in insertion order.
///
/// Missing children are skipped, and one child never stops the others.
#[derive(Default, Clone)]
pub struct CompositeCommand {
    children: Vec<Option<CommandRef>>,
}

impl CompositeCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_children(children: impl IntoIterator<Item = Option<CommandRef>>) -> Self {
        Self {
            children: children.into_iter().collect(),
        }
    }

    /// Append a child
    pub fn with(mut self, child: CommandRef) -> Self {
        self.children.push(Some(child));
        self
    }

    pub fn push(&mut self, child: Option<CommandRef>) {
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Command for CompositeCommand {
    fn execute(&self, ctx: &CommandContext<'_>) {
        for child in self.children.iter().flatten() {
            child.execute(ctx);
        }
    }
}
