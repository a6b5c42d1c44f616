//! Gateway event model delivered to listeners.
//!
//! Only the shapes listeners need are modelled here; decoding raw gateway
//! payloads is the connection's job.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Events that may be delivered to registered listeners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GatewayEvent {
    /// The session is established.
    Ready(ReadyEvent),
    /// A user invoked a slash command.
    SlashCommand(SlashCommandInteraction),
    /// A user is typing into an option with completions enabled.
    Autocomplete(AutocompleteInteraction),
    /// A message was posted.
    MessageCreate(MessageEvent),
    /// Unknown event type (for forward compatibility).
    #[serde(other)]
    Unknown,
}

impl GatewayEvent {
    /// Short name of the event kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Ready(_) => "ready",
            Self::SlashCommand(_) => "slash_command",
            Self::Autocomplete(_) => "autocomplete",
            Self::MessageCreate(_) => "message_create",
            Self::Unknown => "unknown",
        }
    }
}

/// Payload for [`GatewayEvent::Ready`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadyEvent {
    /// Session identifier.
    pub session_id: String,
    /// User id of the bot account.
    pub user_id: String,
}

/// Value supplied for a command option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Integer(i64),
    /// Floating point value.
    Number(f64),
    /// Text, ids and mentions.
    String(String),
}

/// Payload for [`GatewayEvent::SlashCommand`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlashCommandInteraction {
    /// Interaction id.
    pub id: String,
    /// Top-level command name.
    pub name: String,
    /// Invoked sub-command, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_command: Option<String>,
    /// Supplied option values by name.
    #[serde(default)]
    pub options: HashMap<String, OptionValue>,
    /// User who invoked the command.
    pub user_id: String,
    /// Channel where the command was invoked.
    pub channel_id: String,
}

impl SlashCommandInteraction {
    /// Full invoked path, e.g. `mod ban`.
    pub fn full_name(&self) -> String {
        match &self.sub_command {
            Some(sub) => format!("{} {}", self.name, sub),
            None => self.name.clone(),
        }
    }

    /// Get a string option.
    pub fn option_str(&self, name: &str) -> Option<&str> {
        match self.options.get(name)? {
            OptionValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// Get a boolean option.
    pub fn option_bool(&self, name: &str) -> Option<bool> {
        match self.options.get(name)? {
            OptionValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Get an integer option.
    pub fn option_i64(&self, name: &str) -> Option<i64> {
        match self.options.get(name)? {
            OptionValue::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

/// Payload for [`GatewayEvent::Autocomplete`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteInteraction {
    /// Interaction id.
    pub id: String,
    /// Top-level command name.
    pub name: String,
    /// Sub-command being completed, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_command: Option<String>,
    /// Option that has focus.
    pub focused_option: String,
    /// Partial text typed so far.
    #[serde(default)]
    pub partial: String,
}

/// Payload for [`GatewayEvent::MessageCreate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEvent {
    /// Message id.
    pub id: String,
    /// Channel the message was posted in.
    pub channel_id: String,
    /// Author of the message.
    pub author_id: String,
    /// Message text.
    #[serde(default)]
    pub content: String,
    /// Whether the author is a bot account.
    #[serde(default)]
    pub author_is_bot: bool,
}
