//! Command option definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value type accepted by a command option.
///
/// The wire codes follow the platform's application-command option types.
/// Sub-command kinds are not listed here: sub-commands are modelled as
/// nested [`Command`](crate::Command) values instead of options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionType {
    /// Free-form text.
    String,
    /// Whole number.
    Integer,
    /// True or false.
    Boolean,
    /// A user of the platform.
    User,
    /// A channel.
    Channel,
    /// A role.
    Role,
    /// A user or a role.
    Mentionable,
    /// Floating point number.
    Number,
    /// An uploaded file.
    Attachment,
}

impl OptionType {
    /// Numeric code used on the wire.
    pub fn code(self) -> u8 {
        match self {
            Self::String => 3,
            Self::Integer => 4,
            Self::Boolean => 5,
            Self::User => 6,
            Self::Channel => 7,
            Self::Role => 8,
            Self::Mentionable => 9,
            Self::Number => 10,
            Self::Attachment => 11,
        }
    }

    /// Look up an option type by its wire code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            3 => Some(Self::String),
            4 => Some(Self::Integer),
            5 => Some(Self::Boolean),
            6 => Some(Self::User),
            7 => Some(Self::Channel),
            8 => Some(Self::Role),
            9 => Some(Self::Mentionable),
            10 => Some(Self::Number),
            11 => Some(Self::Attachment),
            _ => None,
        }
    }

    /// Whether the platform can offer auto-completion for this type.
    pub fn supports_completions(self) -> bool {
        matches!(self, Self::String | Self::Integer | Self::Number)
    }

    fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::User => "user",
            Self::Channel => "channel",
            Self::Role => "role",
            Self::Mentionable => "mentionable",
            Self::Number => "number",
            Self::Attachment => "attachment",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed, named parameter of a command or sub-command.
///
/// Options are created through [`CommandBuilder`](crate::CommandBuilder)
/// and are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOption {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) kind: OptionType,
    pub(crate) required: bool,
    pub(crate) has_completions: bool,
}

impl CommandOption {
    /// Option name, unique within its command.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Value type.
    pub fn kind(&self) -> OptionType {
        self.kind
    }

    /// Whether the option must be supplied on invocation.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether auto-completion is enabled.
    pub fn has_completions(&self) -> bool {
        self.has_completions
    }
}
