//! Command context
//!
//! A snapshot of what a menu is about: the selection, the surface the
//! gesture happened on and free-form extension data. The dispatcher builds
//! one per context menu request and drops it once the chosen command has
//! returned. The surface is borrowed, so a context cannot outlive the
//! dispatch it was made for.

use std::collections::BTreeMap;
use std::rc::Rc;

use serde_json::Value;

use crate::{ContextMenuEvent, ObjectRef, Surface};

/// Extras key holding the scene position of the gesture as `[x, y]`
pub const EXTRA_SCENE_POS: &str = "scene_pos";

/// Extras key holding the screen position of the gesture as `[x, y]`
pub const EXTRA_SCREEN_POS: &str = "screen_pos";

#[derive(Default, Clone)]
pub struct CommandContext<'a> {
    selection: Vec<ObjectRef>,
    surface: Option<&'a dyn Surface>,
    extras: BTreeMap<String, Value>,
}

impl<'a> CommandContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for a gesture on `surface`, with the event positions stored in the extras.
    pub fn for_event(surface: &'a dyn Surface, event: &ContextMenuEvent) -> Self {
        Self::new()
            .with_surface(surface)
            .with_extra(EXTRA_SCENE_POS, Value::from(vec![event.scene_pos.x, event.scene_pos.y]))
            .with_extra(EXTRA_SCREEN_POS, Value::from(vec![event.screen_pos.x, event.screen_pos.y]))
    }

    pub fn with_surface(mut self, surface: &'a dyn Surface) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Add an object to the selection. Objects already selected are ignored.
    pub fn with_selected(mut self, object: ObjectRef) -> Self {
        if !self.is_selected(&object) {
            self.selection.push(object);
        }
        self
    }

    pub fn with_selection(self, objects: impl IntoIterator<Item = ObjectRef>) -> Self {
        objects.into_iter().fold(self, Self::with_selected)
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    pub fn selection(&self) -> &[ObjectRef] {
        &self.selection
    }

    pub fn is_selected(&self, object: &ObjectRef) -> bool {
        self.selection.iter().any(|o| Rc::ptr_eq(o, object))
    }

    pub fn surface(&self) -> Option<&'a dyn Surface> {
        self.surface
    }

    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extras.get(key)
    }

    pub fn extras(&self) -> &BTreeMap<String, Value> {
        &self.extras
    }

    /// Scene position stored by [`CommandContext::for_event`]
    pub fn scene_pos(&self) -> Option<(f64, f64)> {
        let pos = self.extra(EXTRA_SCENE_POS)?.as_array()?;
        match pos.as_slice() {
            [x, y] => Some((x.as_f64()?, y.as_f64()?)),
            _ => None,
        }
    }
}

impl std::fmt::Debug for CommandContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let types: Vec<&str> = self.selection.iter().map(|o| o.object_type()).collect();
        f.debug_struct("CommandContext")
            .field("selection", &types)
            .field("has_surface", &self.surface.is_some())
            .field("extras", &self.extras)
            .finish()
    }
}
