//! State hierarchy: every state of one machine with its path and id.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::{TextRange, TextSize};
use crate::query::Patterns;
use crate::syntax::SyntaxNode;

/// One state in the hierarchy.
///
/// The root is synthetic: its path is `""`, its range is the whole machine
/// config and it has no name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateNode {
    /// Range of the state's config object.
    pub range: TextRange,
    /// Range of the state's key; `None` for the root.
    pub name_range: Option<TextRange>,
    pub name: SmolStr,
    /// Explicit `id: "..."` declared on this state, or empty.
    pub id: SmolStr,
    /// Dot-joined chain of local names from the root.
    pub path: String,
}

impl StateNode {
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of path segments; `0` for the root.
    pub fn depth(&self) -> usize {
        if self.is_root() {
            0
        } else {
            self.path.split('.').count()
        }
    }

    /// Path of the parent state; `None` for the root.
    pub fn parent_path(&self) -> Option<&str> {
        parent_path(&self.path)
    }

    /// This state's path relative to the state at `ancestor`, if it is a
    /// strict descendant of it.
    pub fn relative_to(&self, ancestor: &str) -> Option<&str> {
        relative_path(&self.path, ancestor)
    }
}

/// `"a.b.c"` → `"a.b"`, `"a"` → `""`, `""` → `None`.
pub(crate) fn parent_path(path: &str) -> Option<&str> {
    if path.is_empty() {
        return None;
    }
    Some(path.rsplit_once('.').map_or("", |(parent, _)| parent))
}

/// Remainder of `path` below `ancestor`, when `path` is strictly under it.
pub(crate) fn relative_path<'p>(path: &'p str, ancestor: &str) -> Option<&'p str> {
    if path.is_empty() {
        return None;
    }
    if ancestor.is_empty() {
        return Some(path);
    }
    path.strip_prefix(ancestor)?
        .strip_prefix('.')
        .filter(|rest| !rest.is_empty())
}

/// Join two paths, treating `""` as the root.
pub(crate) fn join_path(base: &str, rest: &str) -> String {
    match (base.is_empty(), rest.is_empty()) {
        (true, _) => rest.to_string(),
        (_, true) => base.to_string(),
        _ => format!("{base}.{rest}"),
    }
}

/// Literal `id` properties keyed by the range of the object declaring them.
fn state_ids(patterns: &Patterns, machine_config: SyntaxNode<'_>) -> FxHashMap<TextRange, SmolStr> {
    let mut ids = FxHashMap::default();
    for m in patterns.state_ids.match_all(machine_config) {
        let (Some(object), Some(id)) = (m.get("state.object"), m.text("state.id")) else {
            continue;
        };
        ids.entry(object.range()).or_insert_with(|| SmolStr::new(id));
    }
    ids
}

/// Build the state hierarchy of one machine config, in document order.
///
/// The first entry is always the root.
pub fn build_hierarchy(patterns: &Patterns, machine_config: SyntaxNode<'_>) -> Vec<StateNode> {
    let ids = state_ids(patterns, machine_config);
    let id_of = |range: TextRange| ids.get(&range).cloned().unwrap_or_default();

    let mut states = vec![StateNode {
        range: machine_config.range(),
        name_range: None,
        name: SmolStr::default(),
        id: id_of(machine_config.range()),
        path: String::new(),
    }];

    for m in patterns.states.match_all(machine_config) {
        let (Some(name), Some(config)) = (m.get("state.name"), m.get("state.config")) else {
            continue;
        };
        let range = config.range();
        // Matches arrive in pre-order, so the innermost enclosing state is the
        // last one already built that contains this one.
        let Some(parent) = states
            .iter()
            .rev()
            .find(|s| s.range != range && s.range.contains_range(range))
        else {
            continue;
        };

        let path = join_path(&parent.path, name.text());
        tracing::trace!("state `{}` at {:?}", path, range);
        states.push(StateNode {
            range,
            name_range: Some(name.range()),
            name: SmolStr::new(name.text()),
            id: id_of(range),
            path,
        });
    }

    states
}

/// Innermost state whose config contains `range`.
pub fn owner_of(states: &[StateNode], range: TextRange) -> Option<&StateNode> {
    states.iter().rev().find(|s| s.range.contains_range(range))
}

/// State whose key contains `offset`.
pub fn state_named_at(states: &[StateNode], offset: TextSize) -> Option<&StateNode> {
    states
        .iter()
        .find(|s| s.name_range.is_some_and(|r| r.contains(offset)))
}
