//! Immutable command definitions.

use indexmap::IndexMap;
use serde::Serialize;

use crate::option::CommandOption;

/// A frozen command tree node.
///
/// Produced by [`CommandBuilder::build`](crate::CommandBuilder::build).
/// A top-level command owns zero or more sub-commands; a sub-command never
/// owns sub-commands of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) is_sub_command: bool,
    pub(crate) sub_commands: Vec<Command>,
    pub(crate) options: IndexMap<String, CommandOption>,
}

impl Command {
    /// Command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether this node was built as a sub-command.
    pub fn is_sub_command(&self) -> bool {
        self.is_sub_command
    }

    /// Nested sub-commands, in insertion order.
    pub fn sub_commands(&self) -> &[Command] {
        &self.sub_commands
    }

    /// Find a sub-command by name.
    pub fn sub_command(&self, name: &str) -> Option<&Command> {
        self.sub_commands.iter().find(|cmd| cmd.name == name)
    }

    /// Options keyed by name.
    pub fn options(&self) -> &IndexMap<String, CommandOption> {
        &self.options
    }

    /// Look up an option by name.
    pub fn option(&self, name: &str) -> Option<&CommandOption> {
        self.options.get(name)
    }

    /// Whether any sub-commands are attached.
    pub fn has_sub_commands(&self) -> bool {
        !self.sub_commands.is_empty()
    }
}
