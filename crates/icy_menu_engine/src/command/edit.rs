//! Shared edit commands offered by the decorators.

use std::rc::Rc;

use super::Command;
use crate::{ClipboardSource, CommandContext, MessageSink};

/// Copies every selected object.
pub struct CopyCommand {
    messages: Rc<dyn MessageSink>,
}

impl CopyCommand {
    pub fn new(messages: Rc<dyn MessageSink>) -> Self {
        Self { messages }
    }
}

impl Command for CopyCommand {
    fn execute(&self, ctx: &CommandContext<'_>) {
        for object in ctx.selection() {
            log::info!("copy {}", object.object_type());
            object.copy(self.messages.as_ref());
        }
    }

    fn is_enabled(&self, ctx: &CommandContext<'_>) -> bool {
        !ctx.selection().is_empty()
    }
}

/// Pastes the clipboard text at the gesture position.
///
/// Enabled only while the clipboard has content. The state is queried each
/// time a menu is built, never cached.
pub struct PasteCommand {
    clipboard: Rc<dyn ClipboardSource>,
    messages: Rc<dyn MessageSink>,
}

impl PasteCommand {
    pub fn new(clipboard: Rc<dyn ClipboardSource>, messages: Rc<dyn MessageSink>) -> Self {
        Self { clipboard, messages }
    }
}

impl Command for PasteCommand {
    fn execute(&self, ctx: &CommandContext<'_>) {
        match self.clipboard.get_text() {
            Ok(text) => {
                let (x, y) = ctx.scene_pos().unwrap_or_default();
                log::info!("paste {} bytes at ({}, {})", text.len(), x, y);
                self.messages.information("Paste", &format!("Paste \"{}\" at ({}, {})", text, x, y));
            }
            Err(err) => {
                log::warn!("paste failed: {}", err);
                self.messages.information("Paste", &err.to_string());
            }
        }
    }

    fn is_enabled(&self, _ctx: &CommandContext<'_>) -> bool {
        self.clipboard.has_content()
    }
}
