//! Selectable canvas objects as seen by the menu engine.
//!
//! The engine never downcasts canvas objects. Everything it needs is the
//! stable type identifier used as registry key, plus the small set of
//! behaviors commands call through this trait.

use std::rc::Rc;

use crate::MessageSink;

/// Well-known object type identifiers
pub mod object_type {
    /// Empty canvas, also the fallback key when nothing else matches
    pub const BACKGROUND: &str = "Background";
    pub const TEXT_ITEM: &str = "TextItem";
    /// Objects that only show their own actions
    pub const SPECIAL: &str = "Special";
    pub const CIRCLE: &str = "Circle";
}

/// A selectable object on the canvas.
pub trait CanvasObject {
    /// Stable identifier of the object's kind, used for strategy lookup.
    fn object_type(&self) -> &str;

    /// Copy this object. The default just reports what would be copied.
    fn copy(&self, messages: &dyn MessageSink) {
        messages.information("Copy", &format!("Copy action: objectType = {}", self.object_type()));
    }
}

/// Shared handle to a canvas object
pub type ObjectRef = Rc<dyn CanvasObject>;
