//! Menu model
//!
//! Strategies build a [`Menu`]: an ordered list of entries, separators and
//! sub-menus. Each entry pairs display data with the command to run and the
//! enabled state evaluated while the menu was built. Presenters only read
//! this model; running the chosen command is up to the dispatcher.

use crate::catalog::{CommandCatalog, CommandDef};
use crate::{CommandContext, CommandRef, NullCommand};

/// A single actionable menu entry
#[derive(Clone)]
pub struct MenuEntry {
    /// Command id, stable across label changes
    pub id: String,
    /// Label shown to the user
    pub label: String,
    /// Shortcut hint, display only
    pub shortcut: Option<String>,
    /// The command run when the entry is chosen
    pub command: CommandRef,
    /// Whether the entry can be chosen
    pub enabled: bool,
}

impl MenuEntry {
    pub fn new(def: &CommandDef, command: CommandRef, enabled: bool) -> Self {
        Self {
            id: def.id.clone(),
            label: def.display_label().to_string(),
            shortcut: def.shortcut.clone(),
            command,
            enabled,
        }
    }
}

impl std::fmt::Debug for MenuEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuEntry")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("shortcut", &self.shortcut)
            .field("enabled", &self.enabled)
            .finish()
    }
}

/// A named group of items shown as a nested menu
#[derive(Debug, Clone)]
pub struct SubMenu {
    pub id: String,
    pub label: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone)]
pub enum MenuItem {
    /// A command entry
    Entry(MenuEntry),
    /// A visual boundary between sections
    Separator,
    /// A nested menu
    SubMenu(SubMenu),
}

/// A built context menu
#[derive(Debug, Clone, Default)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Create a new empty menu
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn push(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    /// Number of top level items, separators and sub-menus included
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All entries, depth first, sub-menu entries included
    pub fn entries(&self) -> Vec<&MenuEntry> {
        fn collect<'m>(items: &'m [MenuItem], out: &mut Vec<&'m MenuEntry>) {
            for item in items {
                match item {
                    MenuItem::Entry(entry) => out.push(entry),
                    MenuItem::SubMenu(sub) => collect(&sub.items, out),
                    MenuItem::Separator => {}
                }
            }
        }
        let mut out = Vec::new();
        collect(&self.items, &mut out);
        out
    }

    /// First entry with the given command id, searching sub-menus too
    pub fn find(&self, id: &str) -> Option<&MenuEntry> {
        self.entries().into_iter().find(|entry| entry.id == id)
    }

    /// Flat description of the menu structure.
    ///
    /// Entries are listed by id, separators as `---`. A sub-menu is listed as
    /// `id/` followed by its items prefixed with `id/`.
    pub fn outline(&self) -> Vec<String> {
        fn walk(items: &[MenuItem], prefix: &str, out: &mut Vec<String>) {
            for item in items {
                match item {
                    MenuItem::Entry(entry) => out.push(format!("{prefix}{}", entry.id)),
                    MenuItem::Separator => out.push(format!("{prefix}---")),
                    MenuItem::SubMenu(sub) => {
                        let nested = format!("{prefix}{}/", sub.id);
                        out.push(nested.clone());
                        walk(&sub.items, &nested, out);
                    }
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.items, "", &mut out);
        out
    }

    /// Replace labels and shortcut hints with the ones from `catalog`.
    /// Ids the catalog doesn't know keep their current label.
    pub fn relabel(&mut self, catalog: &CommandCatalog) {
        fn apply(items: &mut [MenuItem], catalog: &CommandCatalog) {
            for item in items {
                match item {
                    MenuItem::Entry(entry) => {
                        if let Some(def) = catalog.get(&entry.id) {
                            entry.label = def.display_label().to_string();
                            entry.shortcut = def.shortcut.clone();
                        }
                    }
                    MenuItem::SubMenu(sub) => {
                        if let Some(label) = catalog.label(&sub.id) {
                            sub.label = label.to_string();
                        }
                        apply(&mut sub.items, catalog);
                    }
                    MenuItem::Separator => {}
                }
            }
        }
        apply(&mut self.items, catalog);
    }
}

/// Builds a menu for one context.
///
/// Visibility and enablement are evaluated when an entry is added, so the
/// finished menu reflects the state at build time. Hidden entries are not
/// added at all.
pub struct MenuBuilder<'c> {
    ctx: &'c CommandContext<'c>,
    menu: Menu,
}

impl<'c> MenuBuilder<'c> {
    pub fn new(ctx: &'c CommandContext<'c>) -> Self {
        Self::from_menu(ctx, Menu::new())
    }

    /// Continue building on top of an existing menu
    pub fn from_menu(ctx: &'c CommandContext<'c>, menu: Menu) -> Self {
        Self { ctx, menu }
    }

    pub fn context(&self) -> &'c CommandContext<'c> {
        self.ctx
    }

    /// Add an entry; `None` binds a [`NullCommand`]
    pub fn add(&mut self, def: &CommandDef, command: Option<CommandRef>) -> &mut Self {
        let command = command.unwrap_or_else(NullCommand::shared);
        if !command.is_visible(self.ctx) {
            log::debug!("menu entry '{}' hidden", def.id);
            return self;
        }
        let enabled = command.is_enabled(self.ctx);
        self.menu.push(MenuItem::Entry(MenuEntry::new(def, command, enabled)));
        self
    }

    pub fn add_command(&mut self, def: &CommandDef, command: CommandRef) -> &mut Self {
        self.add(def, Some(command))
    }

    /// Add an entry without an action
    pub fn add_placeholder(&mut self, def: &CommandDef) -> &mut Self {
        self.add(def, None)
    }

    pub fn separator(&mut self) -> &mut Self {
        self.menu.push(MenuItem::Separator);
        self
    }

    /// Add a sub-menu whose items are added by `build`
    pub fn submenu(&mut self, def: &CommandDef, build: impl FnOnce(&mut MenuBuilder<'c>)) -> &mut Self {
        let mut sub = MenuBuilder::new(self.ctx);
        build(&mut sub);
        self.menu.push(MenuItem::SubMenu(SubMenu {
            id: def.id.clone(),
            label: def.display_label().to_string(),
            items: sub.menu.items,
        }));
        self
    }

    pub fn build(self) -> Menu {
        self.menu
    }
}
