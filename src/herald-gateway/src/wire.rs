//! Wire-level command descriptors.
//!
//! These mirror the platform's application-command JSON: a command carries
//! a flat `options` list in which sub-commands appear as options of type 1
//! with their own nested options.

use herald_commands::{Command, CommandOption, OptionType};
use serde::{Deserialize, Serialize};

/// Application command type for slash commands.
pub const CHAT_INPUT: u8 = 1;

/// Option type code for sub-commands.
pub const SUB_COMMAND: u8 = 1;

/// Kind of a wire option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum OptionKind {
    /// A nested sub-command.
    SubCommand,
    /// A typed value.
    Value(OptionType),
}

impl From<OptionKind> for u8 {
    fn from(kind: OptionKind) -> Self {
        match kind {
            OptionKind::SubCommand => SUB_COMMAND,
            OptionKind::Value(kind) => kind.code(),
        }
    }
}

impl TryFrom<u8> for OptionKind {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        if code == SUB_COMMAND {
            return Ok(Self::SubCommand);
        }
        OptionType::from_code(code)
            .map(Self::Value)
            .ok_or_else(|| format!("unsupported option type {code}"))
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// One entry of a command's `options` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOptionData {
    /// Option kind.
    #[serde(rename = "type")]
    pub kind: OptionKind,
    /// Option or sub-command name.
    pub name: String,
    /// Description shown to users.
    pub description: String,
    /// Whether the value must be supplied.
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    /// Whether completions are requested.
    #[serde(default, skip_serializing_if = "is_false")]
    pub autocomplete: bool,
    /// Options of a sub-command.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOptionData>,
}

impl CommandOptionData {
    /// Describe a sub-command together with its options.
    pub fn sub_command(command: &Command) -> Self {
        Self {
            kind: OptionKind::SubCommand,
            name: command.name().to_string(),
            description: command.description().to_string(),
            required: false,
            autocomplete: false,
            options: value_options(command),
        }
    }

    /// Whether this entry describes a sub-command.
    pub fn is_sub_command(&self) -> bool {
        self.kind == OptionKind::SubCommand
    }
}

impl From<&CommandOption> for CommandOptionData {
    fn from(option: &CommandOption) -> Self {
        Self {
            kind: OptionKind::Value(option.kind()),
            name: option.name().to_string(),
            description: option.description().to_string(),
            required: option.is_required(),
            autocomplete: option.has_completions(),
            options: Vec::new(),
        }
    }
}

/// A slash command as submitted to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandData {
    /// Command name.
    pub name: String,
    /// Description shown to users.
    pub description: String,
    /// Application command type, always [`CHAT_INPUT`].
    #[serde(rename = "type")]
    pub kind: u8,
    /// Sub-commands followed by value options.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOptionData>,
}

impl CommandData {
    /// Sub-command descriptors.
    pub fn sub_commands(&self) -> impl Iterator<Item = &CommandOptionData> {
        self.options.iter().filter(|o| o.is_sub_command())
    }

    /// Value option descriptors.
    pub fn plain_options(&self) -> impl Iterator<Item = &CommandOptionData> {
        self.options.iter().filter(|o| !o.is_sub_command())
    }
}

impl From<&Command> for CommandData {
    fn from(command: &Command) -> Self {
        let mut options: Vec<CommandOptionData> = command
            .sub_commands()
            .iter()
            .map(CommandOptionData::sub_command)
            .collect();
        options.extend(value_options(command));

        Self {
            name: command.name().to_string(),
            description: command.description().to_string(),
            kind: CHAT_INPUT,
            options,
        }
    }
}

/// Value options of `command`, required ones first.
fn value_options(command: &Command) -> Vec<CommandOptionData> {
    let (mut required, optional): (Vec<_>, Vec<_>) = command
        .options()
        .values()
        .map(CommandOptionData::from)
        .partition(|o| o.required);
    required.extend(optional);
    required
}

#[cfg(test)]
mod tests {
    use herald_commands::CommandBuilder;

    use super::*;

    #[test]
    fn test_option_kind_codes() {
        assert_eq!(u8::from(OptionKind::SubCommand), 1);
        assert_eq!(u8::from(OptionKind::Value(OptionType::String)), 3);
        assert_eq!(OptionKind::try_from(1u8), Ok(OptionKind::SubCommand));
        assert_eq!(
            OptionKind::try_from(10u8),
            Ok(OptionKind::Value(OptionType::Number))
        );
        assert!(OptionKind::try_from(2u8).is_err());
    }

    #[test]
    fn test_required_options_first() {
        let cmd = CommandBuilder::create_command("remind", "Set a reminder")
            .unwrap()
            .add_option("note", "Note", OptionType::String)
            .unwrap()
            .add_option_with("minutes", "Delay", OptionType::Integer, true, false)
            .unwrap()
            .add_option("silent", "Silent", OptionType::Boolean)
            .unwrap()
            .build();

        let data = CommandData::from(&cmd);
        let names: Vec<_> = data.options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["minutes", "note", "silent"]);
    }

    #[test]
    fn test_sub_commands_nest_their_options() {
        let add = CommandBuilder::create_sub_command("add", "Add a tag")
            .unwrap()
            .add_option_with("name", "Tag name", OptionType::String, true, true)
            .unwrap()
            .build();
        let cmd = CommandBuilder::create_command("tag", "Tags")
            .unwrap()
            .add_sub_command(add)
            .unwrap()
            .build();

        let data = CommandData::from(&cmd);
        assert_eq!(data.kind, CHAT_INPUT);
        assert_eq!(data.plain_options().count(), 0);

        let subs: Vec<_> = data.sub_commands().collect();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].name, "add");
        assert_eq!(subs[0].options.len(), 1);
        assert!(subs[0].options[0].required);
        assert!(subs[0].options[0].autocomplete);
    }

    #[test]
    fn test_json_shape() {
        let cmd = CommandBuilder::create_command("echo", "Send an echo message")
            .unwrap()
            .add_option("message", "The message to send", OptionType::String)
            .unwrap()
            .build();

        let json = serde_json::to_value(CommandData::from(&cmd)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "echo",
                "description": "Send an echo message",
                "type": 1,
                "options": [
                    { "type": 3, "name": "message", "description": "The message to send" }
                ]
            })
        );

        let back: CommandData = serde_json::from_value(json).unwrap();
        assert_eq!(back, CommandData::from(&cmd));
    }
}
