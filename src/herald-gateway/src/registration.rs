//! Wiring the registry into a gateway connection.
//!
//! Registration happens in two steps:
//! 1. [`Registry::attach_listeners`] before the connection is built
//! 2. [`Registry::submit_slash_commands`] once the client is connected

use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::discovery::ModuleCatalog;
use crate::error::GatewayResult;
use crate::listener::Listener;
use crate::registry::Registry;
use crate::wire::CommandData;

/// Builder for a gateway connection that accepts listeners.
pub trait ConnectionBuilder {
    /// Add a listener. Listeners receive events in the order they were added.
    fn add_event_listener(&mut self, listener: Listener);
}

/// A connected gateway client.
#[async_trait]
pub trait GatewayClient: Send + Sync {
    /// Replace every registered command with `commands`.
    async fn replace_commands(&self, commands: Vec<CommandData>) -> GatewayResult<()>;
}

impl Registry {
    /// Run discovery, then attach every listener and adapter to `builder`.
    ///
    /// Listeners are attached in registration order, followed by adapters in
    /// registration order. Must be called before the connection is built.
    pub fn attach_listeners<B, C>(&mut self, mut builder: B, catalog: &C) -> B
    where
        B: ConnectionBuilder,
        C: ModuleCatalog + ?Sized,
    {
        let report = self.discover(catalog);
        debug!(
            matched = report.matched,
            initialized = report.initialized,
            failed = report.failed,
            "Discovery finished"
        );

        for listener in self.listeners() {
            builder.add_event_listener(Listener::Event(listener.clone()));
        }
        for adapter in self.adapters() {
            builder.add_event_listener(Listener::Adapter(adapter.clone()));
        }

        info!(
            listeners = self.listeners().len(),
            adapters = self.adapters().len(),
            "Attached listeners"
        );
        builder
    }

    /// Translate every registered command into its wire descriptor.
    pub fn command_batch(&self) -> Vec<CommandData> {
        self.slash_commands().iter().map(CommandData::from).collect()
    }

    /// Submit all registered commands as one "replace all" request.
    ///
    /// The request runs on a detached tokio task; the returned handle may be
    /// dropped. Failures are logged and never retried. Must be called from
    /// within a tokio runtime.
    pub fn submit_slash_commands<C>(&self, client: Arc<C>) -> JoinHandle<()>
    where
        C: GatewayClient + ?Sized + 'static,
    {
        let batch = self.command_batch();
        let count = batch.len();
        info!(count, "Submitting slash commands");

        tokio::spawn(async move {
            match client.replace_commands(batch).await {
                Ok(()) => debug!(count, "Slash commands replaced"),
                Err(e) => error!(error = %e, "Failed to replace slash commands"),
            }
        })
    }
}
