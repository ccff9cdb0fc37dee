//! Fallback to the "Background" strategy and to default handling

use icy_menu_engine::{register_default_strategies, DispatchController, DispatchOutcome, EmptyMenuStrategy, StrategyRegistry};

use super::helpers::{click, ScriptedPresenter, TestServices, TestSurface};

fn default_controller(services: &TestServices) -> DispatchController {
    let mut registry = StrategyRegistry::new();
    register_default_strategies(&mut registry, &services.editor_services());
    DispatchController::new(registry)
}

#[test]
fn test_unknown_type_behaves_like_empty_canvas() {
    let services = TestServices::new();
    let controller = default_controller(&services);
    let surface = TestSurface::new().with_object("Triangle", 0.0, 0.0, 20.0, 20.0);

    let on_triangle = controller.prepare(&surface, &click(10.0, 10.0)).unwrap();
    let on_canvas = controller.prepare(&surface, &click(500.0, 500.0)).unwrap();

    assert_eq!(on_triangle.object_type, "Background");
    assert_eq!(on_canvas.object_type, "Background");
    assert!(on_triangle.context.selection().is_empty());
    assert!(on_canvas.context.selection().is_empty());
    assert_eq!(on_triangle.menu.outline(), on_canvas.menu.outline());
    assert_eq!(on_canvas.menu.outline(), vec!["background.add_slide", "background.layout", "---", "edit.paste"]);
}

#[test]
fn test_missing_fallback_runs_default_handling() {
    let controller = DispatchController::new(StrategyRegistry::new());
    let surface = TestSurface::demo_scene();
    let mut presenter = ScriptedPresenter::dismiss();

    let outcome = controller.context_menu_event(&surface, &mut presenter, &click(120.0, 200.0));

    assert_eq!(outcome, DispatchOutcome::NoMenu);
    assert_eq!(surface.default_calls.get(), 1);
    assert!(presenter.shown.is_empty());
}

#[test]
fn test_registered_type_without_fallback() {
    let mut registry = StrategyRegistry::new();
    registry.register("Circle", || Box::new(EmptyMenuStrategy));
    let controller = DispatchController::new(registry);
    let surface = TestSurface::demo_scene();
    let mut presenter = ScriptedPresenter::dismiss();

    let on_circle = controller.context_menu_event(&surface, &mut presenter, &click(120.0, 200.0));
    let on_text = controller.context_menu_event(&surface, &mut presenter, &click(60.0, 60.0));

    assert!(matches!(on_circle, DispatchOutcome::Shown { ref object_type, selected: None } if object_type == "Circle"));
    assert_eq!(on_text, DispatchOutcome::NoMenu);
    assert_eq!(surface.default_calls.get(), 1);
    assert_eq!(presenter.shown.len(), 1);
}

#[test]
fn test_custom_fallback_identifier() {
    let services = TestServices::new();
    let mut registry = StrategyRegistry::new();
    register_default_strategies(&mut registry, &services.editor_services());
    registry.register("Canvas", || Box::new(EmptyMenuStrategy));
    let controller = DispatchController::new(registry).with_fallback_type("Canvas");

    let surface = TestSurface::new();
    let prepared = controller.prepare(&surface, &click(1.0, 1.0)).unwrap();
    assert_eq!(prepared.object_type, "Canvas");
    assert!(prepared.menu.is_empty());
}
