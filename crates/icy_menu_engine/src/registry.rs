//! Strategy registry
//!
//! Maps object type identifiers to factories that create a fresh strategy
//! per dispatch. The registry is a plain value: build it once at startup,
//! then hand it to the [`crate::DispatchController`].

use std::collections::HashMap;

use crate::object_type;
use crate::strategy::{BackgroundMenuStrategy, BaseMenuDecorator, CircleMenuStrategy, PasteOnlyDecorator, SpecialMenuStrategy, StrategyBox, TextItemMenuStrategy};
use crate::EditorServices;

/// Creates a new strategy for every menu request
pub type StrategyFactory = Box<dyn Fn() -> StrategyBox>;

#[derive(Default)]
pub struct StrategyRegistry {
    factories: HashMap<String, StrategyFactory>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` for `object_type`. A previous registration for the
    /// same type is replaced.
    pub fn register(&mut self, object_type: impl Into<String>, factory: impl Fn() -> StrategyBox + 'static) {
        let object_type = object_type.into();
        if self.factories.insert(object_type.clone(), Box::new(factory)).is_some() {
            log::debug!("replaced menu strategy for '{}'", object_type);
        } else {
            log::debug!("registered menu strategy for '{}'", object_type);
        }
    }

    /// A new strategy for `object_type`, `None` if nothing is registered
    pub fn create(&self, object_type: &str) -> Option<StrategyBox> {
        self.factories.get(object_type).map(|factory| factory())
    }

    pub fn contains(&self, object_type: &str) -> bool {
        self.factories.contains_key(object_type)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Registered object types, sorted
    pub fn object_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry").field("object_types", &self.object_types()).finish()
    }
}

/// Register the built-in layout:
///
/// | object type  | menu                                  |
/// |--------------|---------------------------------------|
/// | `TextItem`   | text entries, then Copy and Cut       |
/// | `Background` | background entries, then Paste        |
/// | `Special`    | its own entry only                    |
/// | `Circle`     | circle entries, then Copy and Cut     |
pub fn register_default_strategies(registry: &mut StrategyRegistry, services: &EditorServices) {
    let s = services.clone();
    registry.register(object_type::TEXT_ITEM, move || {
        Box::new(BaseMenuDecorator::base(Box::new(TextItemMenuStrategy), &s))
    });

    let s = services.clone();
    registry.register(object_type::BACKGROUND, move || {
        Box::new(PasteOnlyDecorator::paste_only(Box::new(BackgroundMenuStrategy), &s))
    });

    registry.register(object_type::SPECIAL, || Box::new(SpecialMenuStrategy));

    let s = services.clone();
    registry.register(object_type::CIRCLE, move || {
        Box::new(BaseMenuDecorator::base(Box::new(CircleMenuStrategy), &s))
    });
}
