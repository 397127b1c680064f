//! State hierarchy over the fixture machine.

use crate::helpers::fixtures::{MACHINE, TWO_MACHINES};
use crate::helpers::machine_helpers::*;
use xstate_nav::machine::{generate_candidates, owner_of, resolve, state_named_at};
use xstate_nav::TextRange;

#[test]
fn test_fixture_paths() {
    let file = parse(MACHINE);
    let states = hierarchy_at(&file, cursor_in(MACHINE, "idle", 0));
    let paths: Vec<_> = states.iter().map(|s| s.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "",
            "idle",
            "b",
            "b.child",
            "b.child2",
            "c",
            "c.noInitial",
            "deep1",
            "deep1.deep2",
            "deep1.deep2.deep3",
            "deep1.deep2.deep3.deep4",
        ]
    );
}

#[test]
fn test_single_root_with_id() {
    let file = parse(MACHINE);
    let states = hierarchy_at(&file, cursor_in(MACHINE, "idle", 0));
    let roots: Vec<_> = states.iter().filter(|s| s.is_root()).collect();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].id, "main");
    assert_eq!(roots[0].depth(), 0);
}

#[test]
fn test_ids_only_where_declared() {
    let file = parse(MACHINE);
    let states = hierarchy_at(&file, cursor_in(MACHINE, "idle", 0));
    let with_ids: Vec<_> = states
        .iter()
        .filter(|s| !s.id.is_empty())
        .map(|s| (s.path.as_str(), s.id.as_str()))
        .collect();
    assert_eq!(with_ids, vec![("", "main"), ("deep1", "deep1")]);
}

#[test]
fn test_owner_of_nested_target() {
    let file = parse(MACHINE);
    let states = hierarchy_at(&file, cursor_in(MACHINE, "idle", 0));
    let offset = cursor_in(MACHINE, ".child2", 0);
    let owner = owner_of(&states, TextRange::empty(offset)).unwrap();
    assert_eq!(owner.path, "b");
    assert_eq!(owner.parent_path(), Some(""));
}

#[test]
fn test_state_named_at_key() {
    let file = parse(MACHINE);
    let states = hierarchy_at(&file, cursor_in(MACHINE, "idle", 0));
    let offset = cursor_at(MACHINE, "deep3: {", 0);
    let state = state_named_at(&states, offset).unwrap();
    assert_eq!(state.path, "deep1.deep2.deep3");
    assert_eq!(state.depth(), 3);
    assert_eq!(state.relative_to("deep1"), Some("deep2.deep3"));
}

#[test]
fn test_hierarchies_are_per_machine() {
    let file = parse(TWO_MACHINES);
    let first = hierarchy_at(&file, cursor_in(TWO_MACHINES, "ping", 0));
    let second = hierarchy_at(&file, cursor_in(TWO_MACHINES, "pong", 0));
    let paths = |states: &[xstate_nav::machine::StateNode]| -> Vec<String> {
        states.iter().map(|s| s.path.clone()).collect()
    };
    assert_eq!(paths(&first), vec!["", "a", "b"]);
    assert_eq!(paths(&second), vec!["", "x", "y"]);
}

const DUPLICATE_KEYS: &str = r#"
setup({}).createMachine({
  states: {
    a: { id: "x" },
    b: { on: { GO: "a" } },
    a: { id: "y" },
  },
});
"#;

#[test]
fn test_duplicate_sibling_keys_first_wins() {
    let file = parse(DUPLICATE_KEYS);
    let states = hierarchy_at(&file, cursor_in(DUPLICATE_KEYS, "a", 0));
    let nodes: Vec<_> = states
        .iter()
        .map(|s| (s.path.as_str(), s.id.as_str()))
        .collect();
    assert_eq!(nodes, vec![("", ""), ("a", "x"), ("b", ""), ("a", "y")]);

    let target = resolve("a", "b", &states).unwrap();
    assert_eq!(target.id, "x");

    let names: Vec<_> = generate_candidates("b", &states)
        .into_iter()
        .map(|c| c.transition_name)
        .collect();
    assert_eq!(names, vec!["a", "#x", "#y", "b"]);
}
