//! Collaborators consumed by the engine
//!
//! The canvas, the popup menu, the clipboard and the message box all live
//! outside this crate. They are reached through the traits in this module:
//! - [`Surface`]: hit testing and default (non-menu) event handling
//! - [`MenuPresenter`]: shows a built [`Menu`] and reports the chosen entry
//! - [`ClipboardSource`]: read-only clipboard queries used by paste commands
//! - [`MessageSink`]: user visible information messages

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ClipboardError;
use crate::menu::{Menu, MenuEntry};
use crate::ObjectRef;

/// Position in scene (canvas) coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScenePoint {
    pub x: f64,
    pub y: f64,
}

impl ScenePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Position in screen coordinates, where popup menus are placed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A context menu gesture on a surface
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContextMenuEvent {
    pub screen_pos: ScreenPoint,
    pub scene_pos: ScenePoint,
}

impl ContextMenuEvent {
    pub fn new(screen_pos: ScreenPoint, scene_pos: ScenePoint) -> Self {
        Self { screen_pos, scene_pos }
    }
}

/// The canvas the context menu was requested on.
pub trait Surface {
    /// Topmost selectable object at `pos`, if any.
    fn hit_test(&self, pos: ScenePoint) -> Option<ObjectRef>;

    /// Called when no menu could be resolved for the event.
    fn default_context_menu(&self, _event: &ContextMenuEvent) {}
}

/// Displays a menu and blocks until the user picks an entry or dismisses it.
///
/// Implementations must never return a disabled entry. Sub-menus are shown
/// as nested menus; an entry inside a sub-menu is returned directly.
pub trait MenuPresenter {
    fn present<'m>(&mut self, menu: &'m Menu, at: ScreenPoint) -> Option<&'m MenuEntry>;
}

/// Read-only clipboard access
pub trait ClipboardSource {
    fn has_content(&self) -> bool;

    fn get_text(&self) -> Result<String, ClipboardError>;
}

/// Destination for information messages (the message box of a GUI host)
pub trait MessageSink {
    fn information(&self, title: &str, text: &str);
}

/// Collaborators captured by strategy factories and the commands they create
#[derive(Clone)]
pub struct EditorServices {
    pub clipboard: Rc<dyn ClipboardSource>,
    pub messages: Rc<dyn MessageSink>,
}

impl EditorServices {
    pub fn new(clipboard: Rc<dyn ClipboardSource>, messages: Rc<dyn MessageSink>) -> Self {
        Self { clipboard, messages }
    }
}

impl Default for EditorServices {
    /// Empty in-memory clipboard, messages go to the log
    fn default() -> Self {
        Self::new(Rc::new(MemoryClipboard::new()), Rc::new(LogMessageSink))
    }
}

/// Message sink that writes to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMessageSink;

impl MessageSink for LogMessageSink {
    fn information(&self, title: &str, text: &str) {
        log::info!("{}: {}", title, text);
    }
}

/// In-memory clipboard
///
/// Uses interior mutability so that it can be shared through an `Rc` while
/// the host keeps updating it.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    text: RefCell<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let clipboard = Self::new();
        clipboard.set_text(text);
        clipboard
    }

    pub fn set_text(&self, text: impl Into<String>) {
        *self.text.borrow_mut() = Some(text.into());
    }

    pub fn clear(&self) {
        *self.text.borrow_mut() = None;
    }
}

impl ClipboardSource for MemoryClipboard {
    fn has_content(&self) -> bool {
        self.text.borrow().as_deref().is_some_and(|t| !t.is_empty())
    }

    fn get_text(&self) -> Result<String, ClipboardError> {
        match self.text.borrow().as_deref() {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err(ClipboardError::Empty),
        }
    }
}
