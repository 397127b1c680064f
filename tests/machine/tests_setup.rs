//! Setup binding resolution over the fixture machine.

use rstest::rstest;

use crate::helpers::fixtures::MACHINE;
use crate::helpers::machine_helpers::*;
use xstate_nav::machine::{
    BindingForm, ImplementableKind, bindings, classify_in_setup, find_all_usages, find_definition,
};

// =============================================================================
// DEFINITIONS
// =============================================================================

#[rstest]
#[case(ImplementableKind::Action, "simpleAction", BindingForm::Explicit)]
#[case(ImplementableKind::Action, "aliasedAction", BindingForm::Explicit)]
#[case(ImplementableKind::Action, "sameFileAction", BindingForm::Shorthand)]
#[case(ImplementableKind::Action, "importedAction", BindingForm::Shorthand)]
#[case(ImplementableKind::Guard, "importedGuard", BindingForm::Shorthand)]
#[case(ImplementableKind::Guard, "guardWithParams", BindingForm::Explicit)]
#[case(ImplementableKind::Actor, "actorWithInput", BindingForm::Explicit)]
#[case(ImplementableKind::Delay, "functionDelay", BindingForm::Explicit)]
fn test_binding_forms(
    #[case] kind: ImplementableKind,
    #[case] name: &str,
    #[case] form: BindingForm,
) {
    let file = parse(MACHINE);
    let loc = location_at(&file, cursor_at(MACHINE, "simpleGuard:", 0));
    let binding = find_definition(patterns(), loc.setup_config, kind, name).unwrap();
    assert_eq!(binding.form, form);
    assert_eq!(text_of(MACHINE, binding.range), name);
}

#[test]
fn test_bindings_of_each_kind() {
    let file = parse(MACHINE);
    let loc = location_at(&file, cursor_at(MACHINE, "simpleGuard:", 0));
    let names = |kind| -> Vec<String> {
        bindings(patterns(), loc.setup_config, kind)
            .into_iter()
            .map(|b| b.name.to_string())
            .collect()
    };
    assert_eq!(
        names(ImplementableKind::Action),
        vec![
            "spawn",
            "aliasedAction",
            "sameFileAction",
            "importedAction",
            "simpleAction",
            "actionWithParams"
        ]
    );
    assert_eq!(
        names(ImplementableKind::Guard),
        vec!["importedGuard", "simpleGuard", "guardWithParams"]
    );
    assert_eq!(names(ImplementableKind::Actor), vec!["simpleActor", "actorWithInput"]);
    assert_eq!(names(ImplementableKind::Delay), vec!["simpleDelay", "functionDelay"]);
}

// =============================================================================
// SETUP → MACHINE
// =============================================================================

#[test]
fn test_classify_in_setup_then_usages() {
    let file = parse(MACHINE);
    let offset = cursor_at(MACHINE, "simpleAction:", 0);
    let loc = location_at(&file, offset);
    assert!(loc.is_in_setup_config());

    let binding = classify_in_setup(patterns(), loc.setup_config, offset).unwrap();
    assert_eq!(binding.kind, ImplementableKind::Action);
    assert_eq!(binding.name, "simpleAction");

    let usages = find_all_usages(patterns(), loc.machine_config, binding.kind, &binding.name);
    assert_eq!(usages.len(), 3);
    assert!(usages.windows(2).all(|w| w[0].start() < w[1].start()));
    assert!(usages.iter().all(|r| text_of(MACHINE, *r) == "simpleAction"));
}

#[test]
fn test_types_block_is_not_a_bucket() {
    let file = parse(MACHINE);
    let offset = cursor_at(MACHINE, "fooActor: AnyActorRef", 0);
    let loc = location_at(&file, offset);
    assert!(classify_in_setup(patterns(), loc.setup_config, offset).is_none());
}

#[test]
fn test_binding_value_is_not_a_binding() {
    let file = parse(MACHINE);
    let offset = cursor_at(MACHINE, "fromCallback(() => {})", 0);
    let loc = location_at(&file, offset);
    assert!(classify_in_setup(patterns(), loc.setup_config, offset).is_none());
}
