//! Find references tests for the IDE layer.

use crate::helpers::fixtures::MACHINE;
use crate::helpers::machine_helpers::*;
use xstate_nav::ide::{Analysis, AnalysisOptions, TargetKind, find_references};
use xstate_nav::machine::ImplementableKind;

// =============================================================================
// IMPLEMENTABLES
// =============================================================================

#[test]
fn test_references_from_setup_binding() {
    let file = parse(MACHINE);
    let result = find_references(&file, cursor_at(MACHINE, "simpleGuard:", 0), true);

    assert_eq!(result.len(), 9);
    assert!(result.references[0].is_definition);
    assert!(
        result
            .references
            .iter()
            .all(|r| r.kind == TargetKind::Implementable(ImplementableKind::Guard))
    );
    assert!(
        result
            .references
            .iter()
            .all(|r| text_of(MACHINE, r.range) == "simpleGuard")
    );
}

#[test]
fn test_references_from_usage_match_setup() {
    let file = parse(MACHINE);
    let from_setup = find_references(&file, cursor_at(MACHINE, "simpleActor:", 0), true);
    let from_usage = find_references(&file, cursor_in(MACHINE, "simpleActor", 4), true);
    assert_eq!(from_setup.references, from_usage.references);
    assert_eq!(from_usage.usages().count(), 8);
}

#[test]
fn test_references_without_declaration() {
    let file = parse(MACHINE);
    let result = find_references(&file, cursor_in(MACHINE, "actionWithParams", 0), false);
    assert_eq!(result.len(), 3);
    assert!(result.references.iter().all(|r| !r.is_definition));
}

#[test]
fn test_references_from_shorthand_binding() {
    let file = parse(MACHINE);
    let offset = cursor_at(MACHINE, "sameFileAction,", 0);
    let result = find_references(&file, offset, true);
    // declared and used once
    assert_eq!(result.len(), 2);
}

#[test]
fn test_delay_key_and_option_share_references() {
    let file = parse(MACHINE);
    let result = find_references(&file, cursor_in(MACHINE, "simpleDelay", 0), false);
    let texts: Vec<_> = result.usages().map(|r| text_of(MACHINE, r)).collect();
    assert_eq!(texts, vec!["simpleDelay"; 3]);
}

// =============================================================================
// STATES
// =============================================================================

#[test]
fn test_references_from_state_key() {
    let file = parse(MACHINE);
    let result = find_references(&file, cursor_at(MACHINE, "b: {", 0), true);
    assert_eq!(result.len(), 8);
    assert!(result.references[0].is_definition);
    assert!(result.usages().all(|r| text_of(MACHINE, r) == "b"));
}

#[test]
fn test_references_from_target_string() {
    let file = parse(MACHINE);
    let analysis = Analysis::new(
        &file,
        AnalysisOptions {
            include_declaration: false,
            ..AnalysisOptions::default()
        },
    );
    let result = analysis.find_references(cursor_in(MACHINE, ".deep2.deep3.deep4", 0));
    let mut texts: Vec<_> = result.usages().map(|r| text_of(MACHINE, r)).collect();
    texts.sort_unstable();
    assert_eq!(
        texts,
        vec![
            "#deep1.deep2.deep3.deep4",
            ".deep2.deep3.deep4",
            "deep1.deep2.deep3.deep4",
        ]
    );
}

#[test]
fn test_references_on_plain_string_are_empty() {
    let file = parse(MACHINE);
    assert!(find_references(&file, cursor_in(MACHINE, "hello", 0), true).is_empty());
}
