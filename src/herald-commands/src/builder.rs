//! Builder for command trees.
//!
//! A [`CommandBuilder`] collects options and sub-commands, validates them as
//! they are added and freezes the result into an immutable [`Command`] with
//! [`CommandBuilder::build`]. Builders have no side effects outside of
//! themselves; handing the result to a registry is up to the caller.
//!
//! ```rust
//! use herald_commands::{CommandBuilder, OptionType};
//!
//! let list = CommandBuilder::create_sub_command("list", "List all tags")?.build();
//! let tag = CommandBuilder::create_command("tag", "Manage tags")?
//!     .add_option_with("name", "Tag name", OptionType::String, true, true)?
//!     .add_sub_command(list)?
//!     .build();
//!
//! assert_eq!(tag.sub_commands().len(), 1);
//! assert!(tag.option("name").unwrap().is_required());
//! # Ok::<(), herald_commands::CommandError>(())
//! ```

use indexmap::IndexMap;
use tracing::debug;

use crate::command::Command;
use crate::error::{CommandError, CommandResult};
use crate::option::{CommandOption, OptionType};

/// Mutable construction-time state for a [`Command`].
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    name: String,
    description: String,
    is_sub_command: bool,
    sub_commands: Vec<Command>,
    options: IndexMap<String, CommandOption>,
}

impl CommandBuilder {
    fn new(name: &str, description: &str, is_sub_command: bool) -> CommandResult<Self> {
        if name.is_empty() {
            return Err(CommandError::invalid_argument("Command name cannot be empty"));
        }

        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
            is_sub_command,
            sub_commands: Vec::new(),
            options: IndexMap::new(),
        })
    }

    /// Create a builder for a top-level command.
    pub fn create_command(name: &str, description: &str) -> CommandResult<Self> {
        Self::new(name, description, false)
    }

    /// Create a builder for a sub-command.
    ///
    /// Sub-command builders reject every sub-command mutation.
    pub fn create_sub_command(name: &str, description: &str) -> CommandResult<Self> {
        Self::new(name, description, true)
    }

    /// Whether this builder produces a sub-command node.
    pub fn is_sub_command(&self) -> bool {
        self.is_sub_command
    }

    /// Sub-commands added so far.
    pub fn sub_commands(&self) -> &[Command] {
        &self.sub_commands
    }

    /// Options added so far.
    pub fn options(&self) -> &IndexMap<String, CommandOption> {
        &self.options
    }

    /// Add an optional option without completions.
    pub fn add_option(
        self,
        name: &str,
        description: &str,
        kind: OptionType,
    ) -> CommandResult<Self> {
        self.add_option_with(name, description, kind, false, false)
    }

    /// Add an option with explicit flags.
    ///
    /// An option with the same name is replaced.
    pub fn add_option_with(
        self,
        name: &str,
        description: &str,
        kind: OptionType,
        required: bool,
        has_completions: bool,
    ) -> CommandResult<Self> {
        if name.is_empty() {
            return Err(CommandError::invalid_argument("Option name cannot be empty"));
        }

        Ok(self.insert_option(CommandOption {
            name: name.to_string(),
            description: description.to_string(),
            kind,
            required,
            has_completions,
        }))
    }

    /// Add an option taken from another built command.
    pub fn insert_option(mut self, option: CommandOption) -> Self {
        if self.options.contains_key(option.name()) {
            debug!(command = %self.name, option = %option.name(), "Replacing existing option");
        }
        self.options.insert(option.name.clone(), option);
        self
    }

    /// Remove an option by name. Unknown names are ignored.
    pub fn remove_option(mut self, name: &str) -> Self {
        self.options.shift_remove(name);
        self
    }

    /// Mark an existing option as required or optional.
    pub fn set_option_required(mut self, name: &str, required: bool) -> CommandResult<Self> {
        self.option_mut(name)?.required = required;
        Ok(self)
    }

    /// Enable or disable completions on an existing option.
    pub fn set_option_completions(mut self, name: &str, has_completions: bool) -> CommandResult<Self> {
        self.option_mut(name)?.has_completions = has_completions;
        Ok(self)
    }

    fn option_mut(&mut self, name: &str) -> CommandResult<&mut CommandOption> {
        let command = &self.name;
        self.options.get_mut(name).ok_or_else(|| {
            CommandError::invalid_argument(format!(
                "Option \"{name}\" is not defined on command \"{command}\""
            ))
        })
    }

    /// Attach a single sub-command.
    pub fn add_sub_command(self, command: Command) -> CommandResult<Self> {
        self.add_sub_commands([command])
    }

    /// Attach several sub-commands.
    ///
    /// Either every command is attached or, on error, none is.
    pub fn add_sub_commands<I>(mut self, commands: I) -> CommandResult<Self>
    where
        I: IntoIterator<Item = Command>,
    {
        self.ensure_top_level("Cannot add a sub command to a sub command")?;

        let commands: Vec<Command> = commands.into_iter().collect();
        if let Some(invalid) = commands.iter().find(|cmd| !cmd.is_sub_command) {
            return Err(CommandError::invalid_argument(format!(
                "Command \"{}\" was not built as a sub command",
                invalid.name
            )));
        }

        self.sub_commands.extend(commands);
        Ok(self)
    }

    /// Remove every sub-command with the given name.
    pub fn remove_sub_command(mut self, name: &str) -> CommandResult<Self> {
        self.ensure_top_level("Cannot remove sub commands while building a sub command")?;
        self.sub_commands.retain(|cmd| cmd.name != name);
        Ok(self)
    }

    fn ensure_top_level(&self, message: &str) -> CommandResult<()> {
        if self.is_sub_command {
            return Err(CommandError::invalid_operation(message));
        }
        Ok(())
    }

    /// Freeze the current state into a [`Command`].
    ///
    /// Each call returns an independent snapshot.
    pub fn build(&self) -> Command {
        Command {
            name: self.name.clone(),
            description: self.description.clone(),
            is_sub_command: self.is_sub_command,
            sub_commands: self.sub_commands.clone(),
            options: self.options.clone(),
        }
    }
}
