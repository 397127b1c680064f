//! Pattern definitions for XState machine and setup literals.
//!
//! Capture naming convention:
//! - `@xstate.<kind>`: the anchor (the whole string literal, quotes included)
//! - `@xstate.<kind>.name`: the literal name inside the anchor
//! - anything else: helper captures used only by predicates
//!
//! String anchors use `(string_fragment)?` so that an empty literal (`""`)
//! still matches; that is where completion starts.

use std::sync::LazyLock;

use crate::query::{Pattern, PatternError};
use crate::syntax::FileExtension;

/// `setup({...}).createMachine({...})`
pub const MACHINE_WITH_SETUP: &str = r#"
(call_expression
  function: (member_expression
    object: (call_expression
      function: (identifier) @setup.fn (#eq? @setup.fn "setup")
      arguments: (arguments . (object) @xstate.setup.config))
    property: (property_identifier) @create.fn (#eq? @create.fn "createMachine"))
  arguments: (arguments . (object) @xstate.machine.config)) @xstate.machine
"#;

/// Action references in a machine config.
pub const CONFIG_ACTIONS: &str = r#"
(pair
  key: (property_identifier) @action.key (#match? @action.key "^(actions|entry|exit)$")
  value: [
    (string (string_fragment)? @xstate.action.name) @xstate.action
    (object
      (pair
        key: (property_identifier) @action.type (#eq? @action.type "type")
        value: (string (string_fragment)? @xstate.action.name) @xstate.action))
    (array (string (string_fragment)? @xstate.action.name) @xstate.action)
    (array
      (object
        (pair
          key: (property_identifier) @action.type (#eq? @action.type "type")
          value: (string (string_fragment)? @xstate.action.name) @xstate.action)))
  ])

(call_expression
  function: (identifier) @action.batch (#eq? @action.batch "enqueue")
  arguments: (arguments . [
    (string (string_fragment)? @xstate.action.name) @xstate.action
    (object
      (pair
        key: (property_identifier) @action.type (#eq? @action.type "type")
        value: (string (string_fragment)? @xstate.action.name) @xstate.action))
  ]))
"#;

/// Actor references in a machine config.
pub const CONFIG_ACTORS: &str = r#"
(pair
  key: (property_identifier) @actor.invoke (#eq? @actor.invoke "invoke")
  value: [
    (object
      (pair
        key: (property_identifier) @actor.src (#eq? @actor.src "src")
        value: (string (string_fragment)? @xstate.actor.name) @xstate.actor))
    (array
      (object
        (pair
          key: (property_identifier) @actor.src (#eq? @actor.src "src")
          value: (string (string_fragment)? @xstate.actor.name) @xstate.actor)))
  ])

(pair
  key: (property_identifier) @actor.key (#match? @actor.key "^(actions|entry|exit)$")
  value: [
    (call_expression
      function: (identifier) @actor.spawn (#eq? @actor.spawn "spawnChild")
      arguments: (arguments . (string (string_fragment)? @xstate.actor.name) @xstate.actor))
    (array
      (call_expression
        function: (identifier) @actor.spawn (#eq? @actor.spawn "spawnChild")
        arguments: (arguments . (string (string_fragment)? @xstate.actor.name) @xstate.actor)))
  ])

(call_expression
  function: (identifier) @actor.spawn (#eq? @actor.spawn "spawn")
  arguments: (arguments . (string (string_fragment)? @xstate.actor.name) @xstate.actor))
"#;

/// Guard references in a machine config.
pub const CONFIG_GUARDS: &str = r#"
(pair
  key: (property_identifier) @guard.key (#eq? @guard.key "guard")
  value: [
    (string (string_fragment)? @xstate.guard.name) @xstate.guard
    (object
      (pair
        key: (property_identifier) @guard.type (#eq? @guard.type "type")
        value: (string (string_fragment)? @xstate.guard.name) @xstate.guard))
  ])

(call_expression
  function: (identifier) @guard.fn (#match? @guard.fn "^(not|check)$")
  arguments: (arguments . [
    (string (string_fragment)? @xstate.guard.name) @xstate.guard
    (object
      (pair
        key: (property_identifier) @guard.type (#eq? @guard.type "type")
        value: (string (string_fragment)? @xstate.guard.name) @xstate.guard))
  ]))

(call_expression
  function: (identifier) @guard.fn (#match? @guard.fn "^(and|or)$")
  arguments: (arguments . (array [
    (string (string_fragment)? @xstate.guard.name) @xstate.guard
    (object
      (pair
        key: (property_identifier) @guard.type (#eq? @guard.type "type")
        value: (string (string_fragment)? @xstate.guard.name) @xstate.guard))
  ])))
"#;

/// Delay references in a machine config.
pub const CONFIG_DELAYS: &str = r#"
(pair
  key: (property_identifier) @delay.key (#eq? @delay.key "after")
  value: (object
    (pair
      key: [
        (property_identifier) @xstate.delay.name @xstate.delay
        (string (string_fragment)? @xstate.delay.name) @xstate.delay
      ])))

(call_expression
  function: (identifier) @delay.fn (#match? @delay.fn "^(raise|sendTo|sendParent)$")
  arguments: (arguments
    (object
      (pair
        key: (property_identifier) @delay.option (#eq? @delay.option "delay")
        value: (string (string_fragment)? @xstate.delay.name) @xstate.delay))))
"#;

/// Bindings declared in one setup bucket.
///
/// The top node is the setup config itself, so the compiled pattern is
/// [`rooted`](Pattern::rooted): buckets of nested objects never match.
/// `@setup.binding` marks the declared name in every form.
fn setup_bucket(bucket: &str) -> String {
    format!(
        r#"
(object
  (pair
    key: (property_identifier) @setup.bucket (#eq? @setup.bucket "{bucket}")
    value: (object [
      (pair key: (property_identifier) @setup.binding.name @setup.binding)
      (pair key: (string (string_fragment) @setup.binding.name @setup.binding))
      (method_definition name: (property_identifier) @setup.binding.name @setup.binding)
      (shorthand_property_identifier) @setup.binding.shorthand @setup.binding
    ])))
"#
    )
}

/// Every `states: { name: { ... } }` entry.
pub const STATES: &str = r#"
(pair
  key: (property_identifier) @states.key (#eq? @states.key "states")
  value: (object
    (pair
      key: [
        (property_identifier) @state.name
        (string (string_fragment) @state.name)
      ]
      value: (object) @state.config)))
"#;

/// Objects carrying a literal `id: "..."` property.
pub const STATE_IDS: &str = r#"
(object
  (pair
    key: (property_identifier) @id.key (#eq? @id.key "id")
    value: (string (string_fragment) @state.id))) @state.object
"#;

/// Transition target strings.
pub const TRANSITION_TARGETS: &str = r#"
(pair
  key: (property_identifier) @target.key (#eq? @target.key "target")
  value: [
    (string (string_fragment)? @xstate.target.name) @xstate.target
    (array (string (string_fragment)? @xstate.target.name) @xstate.target)
  ])

(pair
  key: (property_identifier) @target.key (#match? @target.key "^(on|after)$")
  value: (object
    (pair
      value: [
        (string (string_fragment)? @xstate.target.name) @xstate.target
        (array (string (string_fragment)? @xstate.target.name) @xstate.target)
      ])))

(pair
  key: (property_identifier) @target.key (#match? @target.key "^(onDone|onError|always)$")
  value: [
    (string (string_fragment)? @xstate.target.name) @xstate.target
    (array (string (string_fragment)? @xstate.target.name) @xstate.target)
  ])
"#;

/// Every pattern the crate uses, compiled for one grammar.
#[derive(Debug)]
pub struct Patterns {
    pub machine: Pattern,
    pub actions: Pattern,
    pub actors: Pattern,
    pub guards: Pattern,
    pub delays: Pattern,
    pub setup_actions: Pattern,
    pub setup_actors: Pattern,
    pub setup_guards: Pattern,
    pub setup_delays: Pattern,
    pub states: Pattern,
    pub state_ids: Pattern,
    pub targets: Pattern,
}

static TYPESCRIPT: LazyLock<Patterns> =
    LazyLock::new(|| Patterns::compile_or_panic(FileExtension::TypeScript));
static TSX: LazyLock<Patterns> = LazyLock::new(|| Patterns::compile_or_panic(FileExtension::Tsx));

impl Patterns {
    /// Compile every pattern for `extension`.
    pub fn compile(extension: FileExtension) -> Result<Self, PatternError> {
        let p = |name: &'static str, src: &str| Pattern::new(name, extension, src);
        Ok(Self {
            machine: p("machine", MACHINE_WITH_SETUP)?,
            actions: p("config.actions", CONFIG_ACTIONS)?,
            actors: p("config.actors", CONFIG_ACTORS)?,
            guards: p("config.guards", CONFIG_GUARDS)?,
            delays: p("config.delays", CONFIG_DELAYS)?,
            setup_actions: p("setup.actions", setup_bucket("actions").as_str())?.rooted(),
            setup_actors: p("setup.actors", setup_bucket("actors").as_str())?.rooted(),
            setup_guards: p("setup.guards", setup_bucket("guards").as_str())?.rooted(),
            setup_delays: p("setup.delays", setup_bucket("delays").as_str())?.rooted(),
            states: p("states", STATES)?,
            state_ids: p("state.ids", STATE_IDS)?,
            targets: p("transition.targets", TRANSITION_TARGETS)?,
        })
    }

    /// The shared registry for `extension`, compiled on first use.
    ///
    /// Hosts that want a broken pattern to surface at start-up can call this
    /// once per grammar during initialization.
    pub fn for_extension(extension: FileExtension) -> &'static Patterns {
        match extension {
            FileExtension::TypeScript => &TYPESCRIPT,
            FileExtension::Tsx => &TSX,
        }
    }

    fn compile_or_panic(extension: FileExtension) -> Self {
        Self::compile(extension).unwrap_or_else(|err| panic!("{err}"))
    }
}
