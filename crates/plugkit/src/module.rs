//! Module Declaration and Assembly
//!
//! A plugin declares its components by implementing [`PluginModule`]: three
//! extension points, each defaulting to a no-op, fed with explicit builders
//! that accumulate listeners, command configurators, and open-ended typed
//! bindings. [`build_plugin_context`] is the non-overridable base routine
//! that drives them in fixed order and produces a [`PluginContext`].
//!
//! Build order is a contract:
//!
//! 1. bind the plugin instance as a singleton under its concrete type
//! 2. `configure_listeners`
//! 3. `configure_commands`
//! 4. `configure_bindings` (anything else the module wants bound)
//!
//! A module overriding nothing still builds successfully: the context then
//! exposes empty sets and the bound plugin.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use plugkit_domain::ports::{CommandConfigurator, EventListener, Plugin};

use crate::registrar::PluginRegistrar;

/// Accumulates event listeners into an ordered set, unique by identity.
#[derive(Default)]
pub struct ListenerSetBuilder {
    listeners: Vec<Arc<dyn EventListener>>,
}

impl ListenerSetBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener; adding the same instance twice keeps one entry
    pub fn add(&mut self, listener: Arc<dyn EventListener>) -> &mut Self {
        if !self
            .listeners
            .iter()
            .any(|existing| Arc::ptr_eq(existing, &listener))
        {
            self.listeners.push(listener);
        }
        self
    }

    /// Number of accumulated listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener has been added
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    fn into_set(self) -> Vec<Arc<dyn EventListener>> {
        self.listeners
    }
}

/// Accumulates command configurators into an ordered set, unique by identity.
#[derive(Default)]
pub struct CommandSetBuilder {
    configurators: Vec<Arc<dyn CommandConfigurator>>,
}

impl CommandSetBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a configurator; adding the same instance twice keeps one entry
    pub fn add(&mut self, configurator: Arc<dyn CommandConfigurator>) -> &mut Self {
        if !self
            .configurators
            .iter()
            .any(|existing| Arc::ptr_eq(existing, &configurator))
        {
            self.configurators.push(configurator);
        }
        self
    }

    /// Number of accumulated configurators
    pub fn len(&self) -> usize {
        self.configurators.len()
    }

    /// Whether no configurator has been added
    pub fn is_empty(&self) -> bool {
        self.configurators.is_empty()
    }

    fn into_set(self) -> Vec<Arc<dyn CommandConfigurator>> {
        self.configurators
    }
}

/// Open-ended singleton bindings, keyed by concrete type.
#[derive(Default)]
pub struct BindingsBuilder {
    bindings: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl BindingsBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `value` as the singleton for its concrete type, replacing any
    /// previous binding for that type
    pub fn bind<T: Any + Send + Sync>(&mut self, value: Arc<T>) -> &mut Self {
        self.bindings.insert(TypeId::of::<T>(), value);
        self
    }

    fn into_map(self) -> HashMap<TypeId, Arc<dyn Any + Send + Sync>> {
        self.bindings
    }
}

/// Declarative configuration surface a concrete plugin implements to list
/// its components.
///
/// All three extension points default to no-ops; only
/// [`plugin`](PluginModule::plugin) is mandatory.
pub trait PluginModule {
    /// The concrete plugin type bound as a singleton
    type Plugin: Plugin;

    /// The plugin instance, created and owned by the host runtime
    fn plugin(&self) -> Arc<Self::Plugin>;

    /// Add listener instances to the assembled set
    fn configure_listeners(&self, _listeners: &mut ListenerSetBuilder) {}

    /// Add command configurators to the assembled set
    fn configure_commands(&self, _commands: &mut CommandSetBuilder) {}

    /// Add any other bindings the plugin wants retrievable by type
    fn configure_bindings(&self, _bindings: &mut BindingsBuilder) {}
}

/// The assembled result of building a [`PluginModule`].
///
/// Exposes the bound plugin, the [`PluginRegistrar`] built from the
/// collected sets, and typed singleton retrieval for everything bound
/// during assembly (the plugin and the registrar included).
pub struct PluginContext {
    plugin: Arc<dyn Plugin>,
    registrar: Arc<PluginRegistrar>,
    bindings: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl PluginContext {
    /// The bound plugin instance
    pub fn plugin(&self) -> Arc<dyn Plugin> {
        Arc::clone(&self.plugin)
    }

    /// The registrar over the assembled listener and command sets
    pub fn registrar(&self) -> Arc<PluginRegistrar> {
        Arc::clone(&self.registrar)
    }

    /// Retrieve a singleton bound during assembly by its concrete type
    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.bindings
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|bound| bound.downcast::<T>().ok())
    }
}

/// Build a [`PluginContext`] from a module declaration.
///
/// This is the base configuration routine; modules cannot override it, only
/// feed it through their extension points. See the module docs for the
/// fixed call order.
pub fn build_plugin_context<M: PluginModule>(module: &M) -> PluginContext {
    let plugin = module.plugin();

    let mut bindings = BindingsBuilder::new();
    bindings.bind(Arc::clone(&plugin));

    let mut listeners = ListenerSetBuilder::new();
    module.configure_listeners(&mut listeners);

    let mut commands = CommandSetBuilder::new();
    module.configure_commands(&mut commands);

    module.configure_bindings(&mut bindings);

    info!(
        plugin = plugin.name(),
        listeners = listeners.len(),
        commands = commands.len(),
        "plugin context assembled"
    );

    let registrar = Arc::new(PluginRegistrar::new(
        listeners.into_set(),
        commands.into_set(),
    ));
    bindings.bind(Arc::clone(&registrar));

    PluginContext {
        plugin,
        registrar,
        bindings: bindings.into_map(),
    }
}
