//! Layout configuration
//!
//! Describes the registration pass in TOML instead of code:
//!
//! ```toml
//! [[strategies]]
//! object_type = "Circle"
//! strategy = "circle"
//! decorators = ["base"]
//! ```
//!
//! Decorators are applied in the listed order, the first one wraps the
//! type-specific strategy directly.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{MenuConfigError, Result};
use crate::strategy::{
    BackgroundMenuStrategy, BaseMenuDecorator, CircleMenuStrategy, EmptyMenuStrategy, PasteOnlyDecorator, SpecialMenuStrategy, StrategyBox,
    TextItemMenuStrategy,
};
use crate::{EditorServices, StrategyRegistry};

/// The embedded default layout
pub const DEFAULT_LAYOUT_TOML: &str = include_str!("../data/menu_layout.toml");

/// Type-specific strategies that can be named in a layout file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    TextItem,
    Background,
    Special,
    Circle,
    Empty,
}

impl StrategyKind {
    fn create(self) -> StrategyBox {
        match self {
            StrategyKind::TextItem => Box::new(TextItemMenuStrategy),
            StrategyKind::Background => Box::new(BackgroundMenuStrategy),
            StrategyKind::Special => Box::new(SpecialMenuStrategy),
            StrategyKind::Circle => Box::new(CircleMenuStrategy),
            StrategyKind::Empty => Box::new(EmptyMenuStrategy),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = MenuConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text_item" => Ok(StrategyKind::TextItem),
            "background" => Ok(StrategyKind::Background),
            "special" => Ok(StrategyKind::Special),
            "circle" => Ok(StrategyKind::Circle),
            "empty" => Ok(StrategyKind::Empty),
            other => Err(MenuConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Shared sections that can be appended in a layout file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoratorKind {
    /// Copy and Cut
    Base,
    /// Paste
    PasteOnly,
}

impl DecoratorKind {
    fn wrap(self, inner: StrategyBox, services: &EditorServices) -> StrategyBox {
        match self {
            DecoratorKind::Base => Box::new(BaseMenuDecorator::base(inner, services)),
            DecoratorKind::PasteOnly => Box::new(PasteOnlyDecorator::paste_only(inner, services)),
        }
    }
}

impl FromStr for DecoratorKind {
    type Err = MenuConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "base" => Ok(DecoratorKind::Base),
            "paste_only" => Ok(DecoratorKind::PasteOnly),
            other => Err(MenuConfigError::UnknownDecorator(other.to_string())),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LayoutFile {
    #[serde(default)]
    strategies: Vec<LayoutEntryToml>,
}

#[derive(Debug, Deserialize)]
struct LayoutEntryToml {
    object_type: String,
    strategy: String,
    #[serde(default)]
    decorators: Vec<String>,
}

/// One validated `[[strategies]]` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutEntry {
    pub object_type: String,
    pub strategy: StrategyKind,
    pub decorators: Vec<DecoratorKind>,
}

impl LayoutEntry {
    /// Build the decorated strategy chain for this entry
    pub fn create(&self, services: &EditorServices) -> StrategyBox {
        self.decorators
            .iter()
            .fold(self.strategy.create(), |inner, decorator| decorator.wrap(inner, services))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutConfig {
    entries: Vec<LayoutEntry>,
}

impl LayoutConfig {
    /// Parse and validate a layout
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let file: LayoutFile = toml::from_str(toml_str)?;
        let entries = file
            .strategies
            .into_iter()
            .map(|entry| -> Result<LayoutEntry> {
                Ok(LayoutEntry {
                    strategy: entry.strategy.parse()?,
                    decorators: entry.decorators.iter().map(|d| d.parse()).collect::<Result<Vec<_>>>()?,
                    object_type: entry.object_type,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| MenuConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// The layout shipped in `data/menu_layout.toml`
    pub fn builtin() -> Self {
        Self::from_toml(DEFAULT_LAYOUT_TOML).expect("Failed to parse embedded menu_layout.toml")
    }

    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    /// Register every entry. Later entries for the same type replace earlier ones.
    pub fn register(&self, registry: &mut StrategyRegistry, services: &EditorServices) {
        for entry in &self.entries {
            let entry_for_factory = entry.clone();
            let services = services.clone();
            registry.register(entry.object_type.clone(), move || entry_for_factory.create(&services));
        }
    }
}
