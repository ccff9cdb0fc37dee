//! Registry lookups and replacement

use icy_menu_engine::{register_default_strategies, CommandContext, EmptyMenuStrategy, SpecialMenuStrategy, StrategyRegistry};

use super::helpers::TestServices;

#[test]
fn test_same_type_yields_equivalent_menus() {
    let services = TestServices::new();
    let mut registry = StrategyRegistry::new();
    register_default_strategies(&mut registry, &services.editor_services());

    let ctx = CommandContext::new();
    for object_type in registry.object_types() {
        let first = registry.create(object_type).unwrap().create_menu(&ctx);
        let second = registry.create(object_type).unwrap().create_menu(&ctx);
        assert_eq!(first.outline(), second.outline(), "{object_type}");
    }
}

#[test]
fn test_replacement_affects_later_lookups_only() {
    let mut registry = StrategyRegistry::new();
    registry.register("Special", || Box::new(SpecialMenuStrategy));

    let ctx = CommandContext::new();
    let before = registry.create("Special").unwrap();

    registry.register("Special", || Box::new(EmptyMenuStrategy));
    let after = registry.create("Special").unwrap();

    assert_eq!(before.create_menu(&ctx).outline(), vec!["special.only"]);
    assert!(after.create_menu(&ctx).is_empty());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_registries_are_independent() {
    let mut first = StrategyRegistry::new();
    first.register("Special", || Box::new(SpecialMenuStrategy));
    let second = StrategyRegistry::new();

    assert!(first.contains("Special"));
    assert!(second.create("Special").is_none());
}

#[test]
fn test_lookup_is_case_sensitive() {
    let mut registry = StrategyRegistry::new();
    registry.register("Circle", || Box::new(EmptyMenuStrategy));

    assert!(registry.create("circle").is_none());
    assert!(registry.create("").is_none());
}
