//! Machine locator: which `setup(...).createMachine(...)` pair encloses a position.

use crate::base::TextSize;
use crate::query::Patterns;
use crate::syntax::SyntaxNode;

/// One `setup({...}).createMachine({...})` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Machine<'a> {
    /// The whole outer call expression.
    pub call: SyntaxNode<'a>,
    /// The object passed to `createMachine`.
    pub machine_config: SyntaxNode<'a>,
    /// The object passed to `setup`.
    pub setup_config: SyntaxNode<'a>,
}

/// Which of the two literals a position falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MachineRegion {
    MachineConfig,
    SetupConfig,
}

/// A machine together with the region the queried position is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineLocation<'a> {
    pub machine: SyntaxNode<'a>,
    pub machine_config: SyntaxNode<'a>,
    pub setup_config: SyntaxNode<'a>,
    pub region: MachineRegion,
}

impl<'a> MachineLocation<'a> {
    fn new(machine: Machine<'a>, region: MachineRegion) -> Self {
        Self {
            machine: machine.call,
            machine_config: machine.machine_config,
            setup_config: machine.setup_config,
            region,
        }
    }

    pub fn is_in_machine_config(&self) -> bool {
        self.region == MachineRegion::MachineConfig
    }

    pub fn is_in_setup_config(&self) -> bool {
        self.region == MachineRegion::SetupConfig
    }
}

/// Every machine under `root`, in document order.
pub fn machines<'a>(patterns: &Patterns, root: SyntaxNode<'a>) -> Vec<Machine<'a>> {
    patterns
        .machine
        .match_all(root)
        .iter()
        .filter_map(|m| {
            Some(Machine {
                call: m.get("xstate.machine")?,
                machine_config: m.get("xstate.machine.config")?,
                setup_config: m.get("xstate.setup.config")?,
            })
        })
        .collect()
}

/// Find the machine enclosing `offset` and the region it falls in.
///
/// Only the first machine whose call contains `offset` is considered. An
/// offset on the connective syntax (`.createMachine(`, closing parens) yields
/// `None`, as does an offset outside every machine.
pub fn locate<'a>(
    patterns: &Patterns,
    root: SyntaxNode<'a>,
    offset: TextSize,
) -> Option<MachineLocation<'a>> {
    let machine = machines(patterns, root)
        .into_iter()
        .find(|m| m.call.contains(offset))?;

    let region = if machine.machine_config.contains(offset) {
        MachineRegion::MachineConfig
    } else if machine.setup_config.contains(offset) {
        MachineRegion::SetupConfig
    } else {
        return None;
    };

    Some(MachineLocation::new(machine, region))
}
