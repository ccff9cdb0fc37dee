//! End to end scenarios on the demo scene

use icy_menu_engine::{load_catalog_from_str, register_default_strategies, DispatchController, DispatchOutcome, MenuItem, ScreenPoint, StrategyRegistry};

use super::helpers::{click, ScriptedPresenter, TestServices, TestSurface};

const ZH_CN_LABELS: &str = include_str!("../../data/menu_commands.zh-CN.toml");

fn controller(services: &TestServices) -> DispatchController {
    let mut registry = StrategyRegistry::new();
    register_default_strategies(&mut registry, &services.editor_services());
    DispatchController::new(registry)
}

fn shown(object_type: &str, selected: Option<&str>) -> DispatchOutcome {
    DispatchOutcome::Shown {
        object_type: object_type.to_string(),
        selected: selected.map(str::to_string),
    }
}

#[test]
fn test_circle_copy() {
    let services = TestServices::new();
    let controller = controller(&services);
    let surface = TestSurface::demo_scene();
    let mut presenter = ScriptedPresenter::pick("edit.copy");

    let outcome = controller.context_menu_event(&surface, &mut presenter, &click(120.0, 200.0));

    assert_eq!(outcome, shown("Circle", Some("edit.copy")));
    assert_eq!(
        presenter.last_menu().outline(),
        vec![
            "circle.color",
            "circle.size",
            "circle.properties/",
            "circle.properties/circle.rotate",
            "circle.properties/circle.scale",
            "---",
            "edit.copy",
            "edit.cut",
        ]
    );
    assert_eq!(presenter.positions, vec![ScreenPoint::new(520, 500)]);
    assert_eq!(services.sink.texts(), vec!["Copy action: objectType = Circle"]);
}

#[test]
fn test_submenu_entry_runs_placeholder() {
    let services = TestServices::new();
    let controller = controller(&services);
    let surface = TestSurface::demo_scene();
    let mut presenter = ScriptedPresenter::pick("circle.rotate");

    let outcome = controller.context_menu_event(&surface, &mut presenter, &click(120.0, 200.0));

    assert_eq!(outcome, shown("Circle", Some("circle.rotate")));
    assert!(services.sink.texts().is_empty());
}

#[test]
fn test_text_item_and_special() {
    let services = TestServices::new();
    let controller = controller(&services);
    let surface = TestSurface::demo_scene();
    let mut presenter = ScriptedPresenter::dismiss();

    assert_eq!(controller.context_menu_event(&surface, &mut presenter, &click(60.0, 60.0)), shown("TextItem", None));
    assert_eq!(presenter.last_menu().outline(), vec!["text.edit", "text.font", "---", "edit.copy", "edit.cut"]);

    assert_eq!(controller.context_menu_event(&surface, &mut presenter, &click(250.0, 70.0)), shown("Special", None));
    assert_eq!(presenter.last_menu().outline(), vec!["special.only"]);
}

#[test]
fn test_topmost_object_wins() {
    let services = TestServices::new();
    let controller = controller(&services);
    let surface = TestSurface::new()
        .with_object("Circle", 0.0, 0.0, 100.0, 100.0)
        .with_object("TextItem", 25.0, 25.0, 50.0, 50.0);

    assert_eq!(controller.prepare(&surface, &click(50.0, 50.0)).unwrap().object_type, "TextItem");
    assert_eq!(controller.prepare(&surface, &click(10.0, 10.0)).unwrap().object_type, "Circle");
}

#[test]
fn test_paste_follows_clipboard_between_dispatches() {
    let services = TestServices::new();
    let controller = controller(&services);
    let surface = TestSurface::demo_scene();
    let mut presenter = ScriptedPresenter::pick("edit.paste");

    let outcome = controller.context_menu_event(&surface, &mut presenter, &click(10.0, 10.0));
    assert_eq!(outcome, shown("Background", None));
    assert!(!presenter.last_menu().find("edit.paste").unwrap().enabled);
    assert!(services.sink.texts().is_empty());

    services.clipboard.set_text("hello");
    let outcome = controller.context_menu_event(&surface, &mut presenter, &click(10.0, 10.0));
    assert_eq!(outcome, shown("Background", Some("edit.paste")));
    assert!(presenter.last_menu().find("edit.paste").unwrap().enabled);
    assert_eq!(services.sink.texts(), vec!["Paste \"hello\" at (10, 10)"]);

    services.clipboard.clear();
    let prepared = controller.prepare(&surface, &click(10.0, 10.0)).unwrap();
    assert!(!prepared.menu.find("edit.paste").unwrap().enabled);
}

#[test]
fn test_shared_section_enabled_for_hit_object() {
    let services = TestServices::new();
    let controller = controller(&services);
    let surface = TestSurface::demo_scene();

    let prepared = controller.prepare(&surface, &click(60.0, 60.0)).unwrap();
    assert!(prepared.menu.find("edit.copy").unwrap().enabled);
    assert!(prepared.menu.find("edit.cut").unwrap().enabled);
}

#[test]
fn test_prepared_menu_activation() {
    let services = TestServices::new();
    let controller = controller(&services);
    let surface = TestSurface::demo_scene();

    let prepared = controller.prepare(&surface, &click(60.0, 60.0)).unwrap();
    let copy = prepared.menu.find("edit.copy").unwrap();
    prepared.activate(copy);
    prepared.activate(copy);

    assert_eq!(services.sink.texts(), vec!["Copy action: objectType = TextItem"; 2]);
}

#[test]
fn test_catalog_relabels_menus() {
    let services = TestServices::new();
    let catalog = load_catalog_from_str(ZH_CN_LABELS).unwrap();
    let controller = controller(&services).with_catalog(catalog);
    let surface = TestSurface::demo_scene();

    let prepared = controller.prepare(&surface, &click(120.0, 200.0)).unwrap();
    let labels: Vec<&str> = prepared.menu.entries().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["改变颜色", "改变大小", "旋转", "缩放", "复制", "剪切"]);
    match &prepared.menu.items()[2] {
        MenuItem::SubMenu(sub) => assert_eq!(sub.label, "图形属性"),
        other => panic!("Expected SubMenu, got {other:?}"),
    }

    let special = controller.prepare(&surface, &click(250.0, 70.0)).unwrap();
    assert_eq!(special.menu.entries()[0].label, "无公共操作，仅特殊操作");
}
