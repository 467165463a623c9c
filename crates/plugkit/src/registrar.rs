//! Dependency Aggregator
//!
//! [`PluginRegistrar`] is the single façade a plugin's load routine calls to
//! register everything the module assembly collected: event listeners into
//! the host's event bus, command configurators against the host's command
//! table. It is a pure receiver of the two assembled sets; it discovers
//! nothing itself.
//!
//! Failure semantics are deliberately blunt: no catch, no retry, no
//! rollback. The first error is terminal for the enclosing call, and
//! commands configured before a mid-batch failure stay configured.

use std::sync::Arc;

use tracing::{debug, info};

use plugkit_domain::error::{Error, Result};
use plugkit_domain::ports::{
    CommandConfigurator, CommandFinder, EventListener, HostCommandFinder, PluginHost,
};

use crate::module::PluginContext;

/// Registers a plugin's assembled listeners and command configurators with
/// the host runtime.
pub struct PluginRegistrar {
    listeners: Vec<Arc<dyn EventListener>>,
    configurators: Vec<Arc<dyn CommandConfigurator>>,
}

impl PluginRegistrar {
    /// Create a registrar from the two externally assembled sets
    pub fn new(
        listeners: Vec<Arc<dyn EventListener>>,
        configurators: Vec<Arc<dyn CommandConfigurator>>,
    ) -> Self {
        Self {
            listeners,
            configurators,
        }
    }

    /// Retrieve the registrar assembled by
    /// [`build_plugin_context`](crate::module::build_plugin_context)
    pub fn from_context(context: &PluginContext) -> Arc<Self> {
        context.registrar()
    }

    /// The assembled listeners
    pub fn listeners(&self) -> &[Arc<dyn EventListener>] {
        &self.listeners
    }

    /// The assembled command configurators
    pub fn command_configurators(&self) -> &[Arc<dyn CommandConfigurator>] {
        &self.configurators
    }

    /// Subscribe every assembled listener to the host event bus, on behalf
    /// of the host's plugin instance.
    ///
    /// No ordering guarantee among listeners. Host subscription errors
    /// propagate unmodified.
    pub fn register_listeners(&self, host: &mut dyn PluginHost) -> Result<()> {
        let owner = host.plugin();
        info!(
            plugin = owner.name(),
            listeners = self.listeners.len(),
            "subscribing event listeners"
        );
        for listener in &self.listeners {
            host.subscribe_listener(Arc::clone(listener), Arc::clone(&owner))?;
        }
        Ok(())
    }

    /// Configure every assembled command against handles located through
    /// `finder`.
    ///
    /// For each configurator: resolve its name (an unresolvable name aborts
    /// the batch), look the name up, and hand the found handle to
    /// `configure_command`. The first absent lookup aborts the whole batch
    /// with [`Error::CommandNotFound`] carrying that name; nothing is
    /// skipped, and commands already configured are not rolled back.
    pub fn register_commands<F>(&self, finder: &mut F) -> Result<()>
    where
        F: CommandFinder + ?Sized,
    {
        for configurator in &self.configurators {
            let name = configurator.command_name()?;
            debug!(command = %name, "configuring command");
            let Some(command) = finder.find(&name) else {
                return Err(Error::command_not_found(name));
            };
            configurator.configure_command(command)?;
        }
        Ok(())
    }

    /// Configure every assembled command through the host's native
    /// command lookup.
    pub fn register_host_commands(&self, host: &mut dyn PluginHost) -> Result<()> {
        let plugin = host.plugin();
        info!(
            plugin = plugin.name(),
            commands = self.configurators.len(),
            "configuring commands"
        );
        self.register_commands(&mut HostCommandFinder::new(host))
    }

    /// Register listeners, then commands, in that order, unconditionally.
    ///
    /// If listener registration fails, command registration never runs.
    pub fn register_all(&self, host: &mut dyn PluginHost) -> Result<()> {
        self.register_listeners(host)?;
        self.register_host_commands(host)
    }
}
