//! Transition target resolution and candidates over the fixture machine.

use rstest::rstest;

use crate::helpers::fixtures::MACHINE;
use crate::helpers::machine_helpers::*;
use xstate_nav::machine::{
    TargetMode, generate_candidates, resolve, target_at, target_occurrences,
};

// =============================================================================
// RESOLUTION
// =============================================================================

#[rstest]
#[case("b", 0, "idle", "b")]
#[case("c", 0, "idle", "c")]
#[case(".child", 0, "b", "b.child")]
#[case(".child2", 0, "b", "b.child2")]
#[case("deep1.deep2.deep3.deep4", 0, "c", "deep1.deep2.deep3.deep4")]
#[case("#deep1.deep2.deep3.deep4", 0, "c", "deep1.deep2.deep3.deep4")]
#[case("#main.b.child2", 0, "c", "b.child2")]
#[case(".deep2", 0, "deep1", "deep1.deep2")]
#[case(".deep2.deep3.deep4", 0, "deep1", "deep1.deep2.deep3.deep4")]
fn test_fixture_targets_resolve(
    #[case] raw: &str,
    #[case] nth: usize,
    #[case] owner: &str,
    #[case] destination: &str,
) {
    let file = parse(MACHINE);
    let offset = cursor_in(MACHINE, raw, nth);
    let loc = location_at(&file, offset);
    let states = hierarchy_at(&file, offset);

    let occurrence = target_at(patterns(), loc.machine_config, &states, offset).unwrap();
    assert_eq!(occurrence.raw, raw);
    assert_eq!(occurrence.source_path, owner);

    let state = resolve(&occurrence.raw, &occurrence.source_path, &states).unwrap();
    assert_eq!(state.path, destination);
}

#[test]
fn test_every_occurrence_resolves() {
    let file = parse(MACHINE);
    let offset = cursor_in(MACHINE, "idle", 0);
    let loc = location_at(&file, offset);
    let states = hierarchy_at(&file, offset);

    let occurrences = target_occurrences(patterns(), loc.machine_config, &states);
    assert_eq!(occurrences.len(), 19);
    for occurrence in &occurrences {
        assert!(
            resolve(&occurrence.raw, &occurrence.source_path, &states).is_some(),
            "{} in {}",
            occurrence.raw,
            occurrence.source_path
        );
    }
}

#[test]
fn test_every_id_resolves_from_every_state() {
    let file = parse(MACHINE);
    let states = hierarchy_at(&file, cursor_in(MACHINE, "idle", 0));
    for target in states.iter().filter(|s| !s.id.is_empty()) {
        for current in &states {
            let found = resolve(&format!("#{}", target.id), &current.path, &states).unwrap();
            assert_eq!(found.path, target.path);
        }
    }
}

#[test]
fn test_siblings_resolve_each_other() {
    let file = parse(MACHINE);
    let states = hierarchy_at(&file, cursor_in(MACHINE, "idle", 0));
    assert_eq!(resolve("child2", "b.child", &states).unwrap().path, "b.child2");
    assert_eq!(resolve("child", "b.child2", &states).unwrap().path, "b.child");
    assert!(resolve("noInitial", "b.child", &states).is_none());
}

// =============================================================================
// CANDIDATES
// =============================================================================

#[test]
fn test_candidates_from_idle() {
    let file = parse(MACHINE);
    let states = hierarchy_at(&file, cursor_in(MACHINE, "idle", 0));
    let candidates = generate_candidates("idle", &states);
    let names: Vec<_> = candidates.iter().map(|c| c.transition_name.as_str()).collect();

    // depth 1 siblings, alphabetical, then absolute ids
    assert_eq!(&names[..6], &["b", "c", "deep1", "#deep1", "#main", "b.child"]);
    // idle has no children
    assert!(candidates.iter().all(|c| c.mode != TargetMode::RelativeChild));
    // the way back to idle itself ranks last
    let own: Vec<_> = candidates.iter().filter(|c| c.is_current()).collect();
    assert_eq!(own.len(), 2);
    assert!(candidates.ends_with(&[own[0].clone(), own[1].clone()]));
}

#[test]
fn test_candidates_from_deep1() {
    let file = parse(MACHINE);
    let states = hierarchy_at(&file, cursor_in(MACHINE, "idle", 0));
    let candidates = generate_candidates("deep1", &states);
    let key = |name: &str| {
        candidates
            .iter()
            .find(|c| c.transition_name == name)
            .map(|c| c.sort_key.as_str())
    };
    assert_eq!(key(".deep2"), Some("000011"));
    assert_eq!(key("#deep1.deep2"), Some("000022"));
    assert_eq!(key("deep1.deep2"), Some("000020"));
    assert_eq!(key(".deep2.deep3.deep4"), Some("000031"));
    assert_eq!(key("#deep1"), Some("100012"));
    assert_eq!(key("deep1"), Some("100010"));
    assert_eq!(key("#deep1.deep1"), None);
}
