//! Decorator ordering, visibility and enablement

use std::cell::RefCell;
use std::rc::Rc;

use icy_menu_engine::strategy::{BaseSection, PasteSection};
use icy_menu_engine::{
    cmd, BaseMenuDecorator, CommandContext, CommandDef, EmptyMenuStrategy, Menu, MenuBuilder, MenuDecorator, MenuItem, MenuStrategy,
    PasteOnlyDecorator, TextItemMenuStrategy,
};

use super::helpers::{RecordingCommand, TestObject, TestServices};

/// Strategy with one visible, one hidden and one disabled entry
struct GatedStrategy {
    log: Rc<RefCell<Vec<String>>>,
}

impl MenuStrategy for GatedStrategy {
    fn create_menu(&self, ctx: &CommandContext<'_>) -> Menu {
        let mut builder = MenuBuilder::new(ctx);
        builder
            .add_command(&CommandDef::new("gated.visible"), Rc::new(RecordingCommand::new("visible", &self.log)))
            .add_command(&CommandDef::new("gated.hidden"), Rc::new(RecordingCommand::new("hidden", &self.log).hidden()))
            .add_command(&CommandDef::new("gated.disabled"), Rc::new(RecordingCommand::new("disabled", &self.log).disabled()))
            .add_command(
                &CommandDef::new("gated.hidden_disabled"),
                Rc::new(RecordingCommand::new("both", &self.log).hidden().disabled()),
            );
        builder.build()
    }
}

#[test]
fn test_shared_section_follows_wrapped_entries() {
    let services = TestServices::new().editor_services();
    let strategy = BaseMenuDecorator::base(Box::new(TextItemMenuStrategy), &services);
    let menu = strategy.create_menu(&CommandContext::new());

    assert_eq!(menu.len(), 5);
    assert!(matches!(menu.items()[2], MenuItem::Separator));
    assert_eq!(menu.outline(), vec!["text.edit", "text.font", "---", "edit.copy", "edit.cut"]);
}

#[test]
fn test_empty_and_absent_wrapped_strategies() {
    let services = TestServices::new().editor_services();
    let ctx = CommandContext::new();

    let empty = PasteOnlyDecorator::paste_only(Box::new(EmptyMenuStrategy), &services).create_menu(&ctx);
    let absent = MenuDecorator::standalone(PasteSection::new(&services)).create_menu(&ctx);

    assert_eq!(empty.outline(), vec!["---", "edit.paste"]);
    assert_eq!(absent.outline(), empty.outline());
    assert_eq!(
        MenuDecorator::standalone(BaseSection::new(&services)).create_menu(&ctx).outline(),
        vec!["---", "edit.copy", "edit.cut"]
    );
}

#[test]
fn test_hidden_entries_are_left_out() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let services = TestServices::new().editor_services();
    let strategy = BaseMenuDecorator::base(Box::new(GatedStrategy { log }), &services);

    let menu = strategy.create_menu(&CommandContext::new());
    assert_eq!(menu.outline(), vec!["gated.visible", "gated.disabled", "---", "edit.copy", "edit.cut"]);
}

#[test]
fn test_enablement_is_independent_of_visibility() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let menu = GatedStrategy { log }.create_menu(&CommandContext::new());

    assert!(menu.find("gated.visible").unwrap().enabled);
    assert!(!menu.find("gated.disabled").unwrap().enabled);
    assert!(menu.find("gated.hidden_disabled").is_none());
}

#[test]
fn test_labels_come_from_command_table() {
    let services = TestServices::new().editor_services();
    let ctx = CommandContext::new().with_selected(TestObject::new("TextItem"));
    let menu = BaseMenuDecorator::base(Box::new(TextItemMenuStrategy), &services).create_menu(&ctx);

    let copy = menu.find(&cmd::EDIT_COPY.id).unwrap();
    assert_eq!(copy.label, "Copy");
    assert_eq!(copy.shortcut.as_deref(), Some("Ctrl+C"));
    assert!(copy.enabled);
}
