//! Listener and slash command registration for gateway connections.
//!
//! This crate provides:
//! - [`Registry`], the startup-time collection of listeners, adapters,
//!   top-level commands and discovery search paths
//! - Discovery of [`DiscoveryUnit`]s that register themselves into the
//!   registry when their package is on a search path
//! - Translation of command trees into wire descriptors and submission to a
//!   connected [`GatewayClient`]
//!
//! # Example
//!
//! ```rust,ignore
//! use herald_gateway::{HeraldConfig, Registry, init_logging};
//!
//! let config = HeraldConfig::load("herald.toml")?;
//! init_logging(&config.logging);
//!
//! let mut registry = Registry::from_config(&config)?;
//! let builder = registry.attach_listeners(connection_builder, &catalog);
//! let client = Arc::new(builder.connect().await?);
//! registry.submit_slash_commands(client);
//! ```
//!
//! # Configuration
//!
//! Optional environment variables read by [`HeraldConfig::from_env`]:
//! - `HERALD_SEARCH_PATHS` - comma-separated package prefixes
//! - `HERALD_LOG_DISCOVERY_ERRORS` - log discovery failures
//! - `HERALD_LOG_LEVEL` - default log filter

pub mod config;
pub mod discovery;
pub mod error;
pub mod events;
pub mod listener;
pub mod logging;
mod registration;
mod registry;
pub mod wire;

// Re-export main types
pub use config::{HeraldConfig, LoggingConfig};
pub use discovery::{DiscoveryReport, DiscoveryUnit, ModuleCatalog, RegisterFn};
pub use error::{GatewayError, GatewayResult};
pub use events::GatewayEvent;
pub use listener::{EventListener, Listener, ListenerAdapter};
pub use logging::init_logging;
pub use registration::{ConnectionBuilder, GatewayClient};
pub use registry::{DEFAULT_SEPARATOR, Registry};
pub use wire::{CommandData, CommandOptionData, OptionKind};
