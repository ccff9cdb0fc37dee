//! Message box and clipboard of the demo host

use std::rc::Rc;

use icy_menu_engine::{ClipboardError, ClipboardSource, MemoryClipboard, MessageSink};

/// Prints messages to stdout as `[title] text`
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleMessageSink;

impl ConsoleMessageSink {
    pub fn format(title: &str, text: &str) -> String {
        format!("[{}] {}", title, text)
    }
}

impl MessageSink for ConsoleMessageSink {
    fn information(&self, title: &str, text: &str) {
        log::info!("{}: {}", title, text);
        println!("{}", Self::format(title, text));
    }
}

/// Clipboard for paste commands. `--clipboard` text wins over the system
/// clipboard; without either the clipboard is empty.
pub fn create_clipboard(text: Option<&str>) -> Rc<dyn ClipboardSource> {
    if let Some(text) = text {
        return Rc::new(MemoryClipboard::with_text(text));
    }
    system_clipboard().unwrap_or_else(|| Rc::new(MemoryClipboard::new()) as Rc<dyn ClipboardSource>)
}

#[cfg(feature = "system-clipboard")]
fn system_clipboard() -> Option<Rc<dyn ClipboardSource>> {
    match system::SystemClipboard::new() {
        Ok(clipboard) => Some(Rc::new(clipboard) as Rc<dyn ClipboardSource>),
        Err(err) => {
            log::warn!("system clipboard not available: {}", err);
            None
        }
    }
}

#[cfg(not(feature = "system-clipboard"))]
fn system_clipboard() -> Option<Rc<dyn ClipboardSource>> {
    None
}

/// Empty text counts as no content, the same way `MemoryClipboard` treats it
#[cfg_attr(not(feature = "system-clipboard"), allow(dead_code))]
fn clipboard_text(read: Result<String, String>) -> Result<String, ClipboardError> {
    match read {
        Ok(text) if text.is_empty() => Err(ClipboardError::Empty),
        Ok(text) => Ok(text),
        Err(e) => Err(ClipboardError::Unavailable(e)),
    }
}

#[cfg(feature = "system-clipboard")]
mod system {
    use clipboard_rs::{Clipboard, ClipboardContext};
    use icy_menu_engine::{ClipboardError, ClipboardSource};

    pub struct SystemClipboard {
        ctx: ClipboardContext,
    }

    impl SystemClipboard {
        pub fn new() -> Result<Self, ClipboardError> {
            let ctx = ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            Ok(Self { ctx })
        }
    }

    impl ClipboardSource for SystemClipboard {
        fn has_content(&self) -> bool {
            self.get_text().is_ok()
        }

        fn get_text(&self) -> Result<String, ClipboardError> {
            super::clipboard_text(self.ctx.get_text().map_err(|e| e.to_string()))
        }
    }
}
