//! Listener kinds accepted by a connection builder.

use std::fmt;
use std::sync::Arc;

use crate::events::{
    AutocompleteInteraction, GatewayEvent, MessageEvent, ReadyEvent, SlashCommandInteraction,
};

/// Receives every gateway event.
pub trait EventListener: Send + Sync {
    /// Handle one event.
    fn on_event(&self, event: &GatewayEvent);
}

/// Listener with one hook per event kind.
///
/// All hooks default to doing nothing, so implementors only override the
/// events they care about.
pub trait ListenerAdapter: Send + Sync {
    /// Session established.
    fn on_ready(&self, _event: &ReadyEvent) {}

    /// Slash command invoked.
    fn on_slash_command(&self, _event: &SlashCommandInteraction) {}

    /// Completion requested.
    fn on_autocomplete(&self, _event: &AutocompleteInteraction) {}

    /// Message posted.
    fn on_message(&self, _event: &MessageEvent) {}

    /// Event kind without a dedicated hook.
    fn on_unknown(&self) {}

    /// Route an event to the matching hook.
    fn dispatch(&self, event: &GatewayEvent) {
        match event {
            GatewayEvent::Ready(e) => self.on_ready(e),
            GatewayEvent::SlashCommand(e) => self.on_slash_command(e),
            GatewayEvent::Autocomplete(e) => self.on_autocomplete(e),
            GatewayEvent::MessageCreate(e) => self.on_message(e),
            GatewayEvent::Unknown => self.on_unknown(),
        }
    }
}

/// A listener handed to the connection builder.
#[derive(Clone)]
pub enum Listener {
    /// Plain event listener.
    Event(Arc<dyn EventListener>),
    /// Per-event adapter.
    Adapter(Arc<dyn ListenerAdapter>),
}

impl Listener {
    /// Deliver an event to the wrapped listener.
    pub fn handle(&self, event: &GatewayEvent) {
        match self {
            Self::Event(listener) => listener.on_event(event),
            Self::Adapter(adapter) => adapter.dispatch(event),
        }
    }

    /// Whether this wraps a [`ListenerAdapter`].
    pub fn is_adapter(&self) -> bool {
        matches!(self, Self::Adapter(_))
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event(_) => f.write_str("Listener::Event(..)"),
            Self::Adapter(_) => f.write_str("Listener::Adapter(..)"),
        }
    }
}
