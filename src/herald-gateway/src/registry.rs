//! Registry of listeners, command trees and discovery search paths.
//!
//! The registry is populated during startup and read once when the
//! connection is built. It does no locking of its own: callers hold it by
//! `&mut` while populating it and must finish before sharing it.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use herald_commands::{Command, CommandError, CommandResult};
use indexmap::IndexSet;
use tracing::debug;

use crate::config::HeraldConfig;
use crate::error::GatewayResult;
use crate::listener::{EventListener, ListenerAdapter};

/// Default package separator.
pub const DEFAULT_SEPARATOR: char = '.';

/// Accumulates everything that must be wired into a gateway connection.
pub struct Registry {
    separator: char,
    listeners: Vec<Arc<dyn EventListener>>,
    adapters: Vec<Arc<dyn ListenerAdapter>>,
    slash_commands: Vec<Command>,
    search_paths: IndexSet<String>,
    log_discovery_errors: bool,
    /// Qualified names of discovery units that already ran.
    pub(crate) initialized: HashSet<String>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create an empty registry using `.` as package separator.
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_SEPARATOR)
    }

    /// Create an empty registry with a custom package separator.
    pub fn with_separator(separator: char) -> Self {
        Self {
            separator,
            listeners: Vec::new(),
            adapters: Vec::new(),
            slash_commands: Vec::new(),
            search_paths: IndexSet::new(),
            log_discovery_errors: false,
            initialized: HashSet::new(),
        }
    }

    /// Create a registry from configuration.
    ///
    /// Every configured search path goes through [`Registry::add_search_path`].
    pub fn from_config(config: &HeraldConfig) -> GatewayResult<Self> {
        let mut registry = Self::with_separator(config.package_separator);
        for path in &config.search_paths {
            registry.add_search_path(path.as_str())?;
        }
        registry.set_error_logging(config.log_discovery_errors);
        Ok(registry)
    }

    /// Package separator every search path must end with.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Register an event listener.
    pub fn add_listener(&mut self, listener: Arc<dyn EventListener>) {
        self.listeners.push(listener);
    }

    /// Registered event listeners, in registration order.
    pub fn listeners(&self) -> &[Arc<dyn EventListener>] {
        &self.listeners
    }

    /// Register a listener adapter.
    pub fn add_adapter(&mut self, adapter: Arc<dyn ListenerAdapter>) {
        self.adapters.push(adapter);
    }

    /// Registered adapters, in registration order.
    pub fn adapters(&self) -> &[Arc<dyn ListenerAdapter>] {
        &self.adapters
    }

    /// Register a top-level slash command.
    ///
    /// Sub-commands must be nested inside a top-level command instead.
    pub fn add_slash_command(&mut self, command: Command) -> CommandResult<()> {
        if command.is_sub_command() {
            return Err(CommandError::InvalidArgument(format!(
                "Cannot register sub command \"{}\" as a slash command",
                command.name()
            )));
        }

        debug!(command = %command.name(), "Registered slash command");
        self.slash_commands.push(command);
        Ok(())
    }

    /// Registered top-level commands, in registration order.
    pub fn slash_commands(&self) -> &[Command] {
        &self.slash_commands
    }

    /// Add a package prefix scanned during discovery.
    pub fn add_search_path(&mut self, path: impl Into<String>) -> CommandResult<()> {
        let path = path.into();
        self.check_search_path(&path)?;
        self.search_paths.insert(path);
        Ok(())
    }

    /// Replace all search paths.
    ///
    /// Fails when no path was ever added, when `paths` is empty or when any
    /// path lacks the trailing separator. On failure nothing changes.
    pub fn set_search_paths<I, S>(&mut self, paths: I) -> CommandResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.search_paths.is_empty() {
            return Err(CommandError::InvalidArgument(
                "No search path has been added yet".to_string(),
            ));
        }

        let paths: Vec<String> = paths.into_iter().map(Into::into).collect();
        if paths.is_empty() {
            return Err(CommandError::InvalidArgument(
                "Replacement search path list is empty".to_string(),
            ));
        }
        for path in &paths {
            self.check_search_path(path)?;
        }

        self.search_paths = paths.into_iter().collect();
        Ok(())
    }

    fn check_search_path(&self, path: &str) -> CommandResult<()> {
        if !path.ends_with(self.separator) {
            let sep = self.separator;
            return Err(CommandError::InvalidArgument(format!(
                "Package path \"{path}\" must end with '{sep}', e.g. \"bot{sep}commands{sep}\""
            )));
        }
        Ok(())
    }

    /// Registered search paths, in insertion order.
    pub fn search_paths(&self) -> impl Iterator<Item = &str> {
        self.search_paths.iter().map(String::as_str)
    }

    /// Check whether `path` is a registered search path.
    pub fn has_search_path(&self, path: &str) -> bool {
        self.search_paths.contains(path)
    }

    /// Toggle logging of discovery failures.
    pub fn set_error_logging(&mut self, enabled: bool) {
        self.log_discovery_errors = enabled;
    }

    /// Whether discovery failures are logged.
    pub fn log_discovery_errors(&self) -> bool {
        self.log_discovery_errors
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("separator", &self.separator)
            .field("listeners", &self.listeners.len())
            .field("adapters", &self.adapters.len())
            .field("slash_commands", &self.slash_commands)
            .field("search_paths", &self.search_paths)
            .field("log_discovery_errors", &self.log_discovery_errors)
            .finish()
    }
}
