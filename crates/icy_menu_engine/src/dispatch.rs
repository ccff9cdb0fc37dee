//! Context menu dispatch
//!
//! Turns a context menu gesture into a shown menu and, if the user picks an
//! entry, runs its command:
//!
//! 1. hit test the surface at the scene position
//! 2. pick the strategy for the object's type, or the fallback type
//! 3. build the menu, relabel it and hand it to the presenter
//! 4. execute the chosen entry's command with the same context
//!
//! When neither the object's type nor the fallback type has a strategy the
//! surface's default handling runs instead.

use crate::catalog::CommandCatalog;
use crate::strategy::StrategyBox;
use crate::{object_type, CommandContext, ContextMenuEvent, Menu, MenuEntry, MenuPresenter, StrategyRegistry, Surface};

/// Result of a context menu request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A menu was shown. `selected` holds the id of the executed entry.
    Shown {
        object_type: String,
        selected: Option<String>,
    },
    /// No strategy applied; the surface handled the event itself.
    NoMenu,
}

/// A built menu together with the context it was built for
pub struct PreparedMenu<'a> {
    /// The object type whose strategy built the menu
    pub object_type: String,
    pub context: CommandContext<'a>,
    pub menu: Menu,
}

impl PreparedMenu<'_> {
    /// Run `entry`'s command with this menu's context
    pub fn activate(&self, entry: &MenuEntry) {
        log::info!("executing '{}' for {}", entry.id, self.object_type);
        entry.command.execute(&self.context);
    }
}

pub struct DispatchController {
    registry: StrategyRegistry,
    catalog: Option<CommandCatalog>,
    fallback_type: String,
}

impl DispatchController {
    pub fn new(registry: StrategyRegistry) -> Self {
        Self {
            registry,
            catalog: None,
            fallback_type: object_type::BACKGROUND.to_string(),
        }
    }

    /// Relabel every menu with `catalog` before it is shown
    pub fn with_catalog(mut self, catalog: CommandCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Type used when nothing is hit or the hit object has no strategy
    pub fn with_fallback_type(mut self, fallback_type: impl Into<String>) -> Self {
        self.fallback_type = fallback_type.into();
        self
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Catalog used to relabel menus, if any
    pub fn catalog(&self) -> Option<&CommandCatalog> {
        self.catalog.as_ref()
    }

    pub fn fallback_type(&self) -> &str {
        &self.fallback_type
    }

    /// Resolve and build the menu for `event` without presenting it.
    ///
    /// Returns `None` when neither the hit object's type nor the fallback
    /// type has a strategy.
    pub fn prepare<'a>(&self, surface: &'a dyn Surface, event: &ContextMenuEvent) -> Option<PreparedMenu<'a>> {
        let hit = surface.hit_test(event.scene_pos);

        let (object_type, strategy, context) = match hit {
            Some(object) => match self.registry.create(object.object_type()) {
                Some(strategy) => {
                    let object_type = object.object_type().to_string();
                    log::debug!("context menu for {} at {:?}", object_type, event.scene_pos);
                    (object_type, strategy, CommandContext::for_event(surface, event).with_selected(object))
                }
                None => {
                    log::debug!("no menu strategy for '{}', using '{}'", object.object_type(), self.fallback_type);
                    self.fallback(surface, event)?
                }
            },
            None => {
                log::debug!("nothing hit at {:?}, using '{}'", event.scene_pos, self.fallback_type);
                self.fallback(surface, event)?
            }
        };

        let mut menu = strategy.create_menu(&context);
        if let Some(catalog) = &self.catalog {
            menu.relabel(catalog);
        }
        Some(PreparedMenu { object_type, context, menu })
    }

    fn fallback<'a>(&self, surface: &'a dyn Surface, event: &ContextMenuEvent) -> Option<(String, StrategyBox, CommandContext<'a>)> {
        let strategy = self.registry.create(&self.fallback_type)?;
        Some((self.fallback_type.clone(), strategy, CommandContext::for_event(surface, event)))
    }

    /// Handle a context menu gesture.
    ///
    /// Blocks while the presenter shows the menu. The returned outcome is
    /// informational; hosts may ignore it.
    pub fn context_menu_event(&self, surface: &dyn Surface, presenter: &mut dyn MenuPresenter, event: &ContextMenuEvent) -> DispatchOutcome {
        let Some(prepared) = self.prepare(surface, event) else {
            log::debug!("no menu available, default handling");
            surface.default_context_menu(event);
            return DispatchOutcome::NoMenu;
        };

        let selected = match presenter.present(&prepared.menu, event.screen_pos) {
            Some(entry) => {
                prepared.activate(entry);
                Some(entry.id.clone())
            }
            None => {
                log::debug!("menu dismissed");
                None
            }
        };

        DispatchOutcome::Shown {
            object_type: prepared.object_type,
            selected,
        }
    }
}
