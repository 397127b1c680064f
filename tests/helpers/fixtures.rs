//! Source fixtures for tests.

/// A realistic machine exercising every implementable shape and every
/// addressing mode.
pub const MACHINE: &str = include_str!("../fixtures/machine.ts");

/// Two machines in one file.
pub const TWO_MACHINES: &str = r#"
export const first = setup({
  actions: { ping: () => {} },
}).createMachine({
  entry: "ping",
  initial: "a",
  states: { a: { on: { GO: "b" } }, b: {} },
});

export const second = setup({
  actions: { pong: () => {} },
}).createMachine({
  entry: "pong",
  initial: "x",
  states: { x: { on: { GO: "y" } }, y: {} },
});
"#;

/// A machine literal without `setup`, which is not analyzed.
pub const NO_SETUP: &str = r#"
createMachine({
  entry: "ping",
  states: { a: { on: { GO: "b" } }, b: {} },
});
"#;
