//! Discovery of self-registering units.
//!
//! A [`DiscoveryUnit`] bundles a package name with a registration function.
//! Discovery walks a [`ModuleCatalog`], runs the registration function of
//! every unit whose package is a registered search path and swallows
//! failures so a broken unit never stops the scan.
//!
//! ```rust
//! use herald_commands::CommandBuilder;
//! use herald_gateway::{DiscoveryUnit, Registry};
//!
//! let units = vec![DiscoveryUnit::new("bot.commands.", "Ping", |registry: &mut Registry| {
//!     registry.add_slash_command(CommandBuilder::create_command("ping", "Ping")?.build())?;
//!     Ok(())
//! })];
//!
//! let mut registry = Registry::new();
//! registry.add_search_path("bot.commands.")?;
//! registry.discover(&units);
//!
//! assert_eq!(registry.slash_commands().len(), 1);
//! # Ok::<(), herald_commands::CommandError>(())
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::registry::Registry;

/// Registration function run when a unit is discovered.
pub type RegisterFn = Arc<dyn Fn(&mut Registry) -> anyhow::Result<()> + Send + Sync>;

/// A unit that registers listeners or commands when discovered.
#[derive(Clone)]
pub struct DiscoveryUnit {
    package: String,
    name: String,
    register: RegisterFn,
}

impl DiscoveryUnit {
    /// Create a unit declared in `package`.
    pub fn new<F>(package: impl Into<String>, name: impl Into<String>, register: F) -> Self
    where
        F: Fn(&mut Registry) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self {
            package: package.into(),
            name: name.into(),
            register: Arc::new(register),
        }
    }

    /// Declaring package.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Unit name within its package.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Package normalised to end with `separator`.
    fn package_path(&self, separator: char) -> String {
        if self.package.ends_with(separator) {
            self.package.clone()
        } else {
            format!("{}{}", self.package, separator)
        }
    }

    /// Package path followed by the unit name.
    pub fn qualified_name(&self, separator: char) -> String {
        format!("{}{}", self.package_path(separator), self.name)
    }
}

impl fmt::Debug for DiscoveryUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscoveryUnit")
            .field("package", &self.package)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Source of discoverable units.
pub trait ModuleCatalog {
    /// Every unit reachable from this catalog.
    fn units(&self) -> &[DiscoveryUnit];
}

impl ModuleCatalog for [DiscoveryUnit] {
    fn units(&self) -> &[DiscoveryUnit] {
        self
    }
}

impl ModuleCatalog for Vec<DiscoveryUnit> {
    fn units(&self) -> &[DiscoveryUnit] {
        self
    }
}

/// Outcome counts of one discovery pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscoveryReport {
    /// Units whose package matched a search path.
    pub matched: usize,
    /// Units whose registration ran successfully in this pass.
    pub initialized: usize,
    /// Units whose registration failed in this pass.
    pub failed: usize,
    /// Matching units skipped because an earlier pass already ran them.
    pub already_initialized: usize,
}

impl Registry {
    /// Run every unit of `catalog` that lives under a registered search path.
    ///
    /// A unit matches when its package, normalised to end with the
    /// separator, equals a search path exactly; sub-packages do not match.
    /// Each unit runs at most once per registry, including units that failed.
    pub fn discover<C>(&mut self, catalog: &C) -> DiscoveryReport
    where
        C: ModuleCatalog + ?Sized,
    {
        let separator = self.separator();
        let mut report = DiscoveryReport::default();

        for unit in catalog.units() {
            if !self.has_search_path(&unit.package_path(separator)) {
                continue;
            }
            report.matched += 1;

            let qualified = unit.qualified_name(separator);
            if !self.initialized.insert(qualified.clone()) {
                report.already_initialized += 1;
                continue;
            }

            match (unit.register)(self) {
                Ok(()) => {
                    debug!(unit = %qualified, "Initialized discovery unit");
                    report.initialized += 1;
                }
                Err(err) => {
                    report.failed += 1;
                    if self.log_discovery_errors() {
                        warn!(unit = %qualified, error = ?err, "Failed to initialize discovery unit");
                    }
                }
            }
        }

        report
    }
}
