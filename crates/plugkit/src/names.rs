//! Command Name Resolution
//!
//! Decouples "how is a name declared" from "how is a name consumed": a
//! [`CommandNameRegistry`] maps descriptor concrete types to command names,
//! populated explicitly at assembly time and queried through pure lookups.
//! [`RegistryNamed`] then lets a command type skip hand-writing
//! `command_name` entirely, the registry supplying it instead.
//!
//! Lookups for unbound types fail with
//! [`Error::UnsupportedOperation`](plugkit_domain::Error::UnsupportedOperation)
//! naming the offending type: a missing binding is a configuration mistake,
//! not a runtime condition.

use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::sync::Arc;

use plugkit_domain::error::{Error, Result};
use plugkit_domain::ports::{CommandConfigurator, CommandHandle};

/// Mapping from descriptor concrete type to command name.
///
/// Populated once when the plugin module is assembled and read-only
/// afterwards; resolution is a pure lookup with no side effects.
#[derive(Debug, Default)]
pub struct CommandNameRegistry {
    names: HashMap<TypeId, &'static str>,
}

impl CommandNameRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to the concrete type `T`, builder-style
    pub fn with_command<T: 'static>(mut self, name: &'static str) -> Self {
        self.bind::<T>(name);
        self
    }

    /// Bind `name` to the concrete type `T`
    ///
    /// Rebinding a type replaces its previous name.
    pub fn bind<T: 'static>(&mut self, name: &'static str) -> &mut Self {
        self.names.insert(TypeId::of::<T>(), name);
        self
    }

    /// Resolve the name bound to `T`
    ///
    /// Fails with [`Error::UnsupportedOperation`] naming `T` when no name
    /// is bound, which aborts any registration batch consulting it.
    pub fn name_of<T: 'static>(&self) -> Result<&'static str> {
        self.names
            .get(&TypeId::of::<T>())
            .copied()
            .ok_or_else(|| {
                Error::unsupported_operation(format!(
                    "no command name bound for type {}",
                    type_name::<T>()
                ))
            })
    }

    /// Whether `T` has a bound name
    pub fn contains<T: 'static>(&self) -> bool {
        self.names.contains_key(&TypeId::of::<T>())
    }

    /// Number of bound names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// The name-less half of the descriptor contract.
///
/// Implemented by command types that delegate naming to a
/// [`CommandNameRegistry`] through [`RegistryNamed`] and only describe how
/// to configure their handle.
pub trait ConfigureCommand: Send + Sync {
    /// Apply this command's setup to the located handle
    fn configure(&self, command: &mut dyn CommandHandle) -> Result<()>;
}

/// Descriptor adapter that takes its command name from a registry.
///
/// The name is resolved lazily, at `command_name()` time, so a missing
/// binding surfaces during registration rather than at assembly.
pub struct RegistryNamed<C> {
    registry: Arc<CommandNameRegistry>,
    inner: C,
}

impl<C: ConfigureCommand + 'static> RegistryNamed<C> {
    /// Wrap `inner`, resolving its name from `registry` by concrete type
    pub fn new(registry: Arc<CommandNameRegistry>, inner: C) -> Self {
        Self { registry, inner }
    }

    /// The wrapped configurator
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: ConfigureCommand + 'static> CommandConfigurator for RegistryNamed<C> {
    fn command_name(&self) -> Result<String> {
        self.registry.name_of::<C>().map(str::to_owned)
    }

    fn configure_command(&self, command: &mut dyn CommandHandle) -> Result<()> {
        self.inner.configure(command)
    }
}
