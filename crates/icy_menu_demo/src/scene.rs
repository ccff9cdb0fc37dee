//! Canvas scene of the demo host
//!
//! Items are axis aligned boxes. Later items are drawn on top of earlier
//! ones, so hit testing searches from the back.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use icy_menu_engine::{object_type, CanvasObject, ContextMenuEvent, ObjectRef, ScenePoint, Surface};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Failed to read scene '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scene file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneItem {
    pub object_type: String,
    #[serde(default)]
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SceneItem {
    pub fn new(object_type: &str, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            object_type: object_type.to_string(),
            name: String::new(),
            x,
            y,
            width,
            height,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn contains(&self, pos: ScenePoint) -> bool {
        pos.x >= self.x && pos.x <= self.x + self.width && pos.y >= self.y && pos.y <= self.y + self.height
    }
}

impl CanvasObject for SceneItem {
    fn object_type(&self) -> &str {
        &self.object_type
    }
}

#[derive(Debug, Deserialize)]
struct SceneFile {
    #[serde(default)]
    items: Vec<SceneItem>,
}

#[derive(Default)]
pub struct Scene {
    items: Vec<Rc<SceneItem>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text item, special item and circle side by side
    pub fn builtin() -> Self {
        let mut scene = Self::new();
        scene.add(SceneItem::new(object_type::TEXT_ITEM, 50.0, 50.0, 100.0, 50.0).with_name("text"));
        scene.add(SceneItem::new(object_type::SPECIAL, 200.0, 50.0, 100.0, 50.0).with_name("special"));
        scene.add(SceneItem::new(object_type::CIRCLE, 100.0, 150.0, 50.0, 100.0).with_name("circle"));
        scene
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, SceneError> {
        let file: SceneFile = toml::from_str(toml_str)?;
        let mut scene = Self::new();
        for item in file.items {
            scene.add(item);
        }
        Ok(scene)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Add an item on top of all others
    pub fn add(&mut self, item: SceneItem) {
        self.items.push(Rc::new(item));
    }

    pub fn items(&self) -> impl Iterator<Item = &SceneItem> {
        self.items.iter().map(|item| item.as_ref())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl Surface for Scene {
    fn hit_test(&self, pos: ScenePoint) -> Option<ObjectRef> {
        let item: ObjectRef = self.items.iter().rev().find(|item| item.contains(pos))?.clone();
        Some(item)
    }

    fn default_context_menu(&self, event: &ContextMenuEvent) {
        log::info!("no context menu at ({}, {})", event.scene_pos.x, event.scene_pos.y);
    }
}
