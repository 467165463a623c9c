//! Self-Wiring Executor Descriptors
//!
//! A [`SelfWired`] descriptor is simultaneously the command's execution
//! handler: configuring the command installs the wrapped executor into the
//! handle's executor slot, then runs the [`SelfWiringExecutor::alter_command`]
//! extension point for any further handle setup.
//!
//! The two-step order is a hard contract: `alter_command` runs after the
//! executor slot is set, and it always runs, the default no-op included.

use std::sync::Arc;

use plugkit_domain::error::Result;
use plugkit_domain::ports::{CommandConfigurator, CommandExecutor, CommandHandle};

use crate::names::CommandNameRegistry;

/// An executor that wires itself into the command it configures.
pub trait SelfWiringExecutor: CommandExecutor {
    /// Apply additional configuration to the command.
    ///
    /// Called once per configuration, after the executor slot is set.
    fn alter_command(&self, _command: &mut dyn CommandHandle) -> Result<()> {
        Ok(())
    }
}

enum NameSource {
    Explicit(String),
    Registry(Arc<CommandNameRegistry>),
}

/// Descriptor wrapper turning a [`SelfWiringExecutor`] into a
/// [`CommandConfigurator`].
///
/// The command name comes either from an explicit constructor argument
/// ([`SelfWired::named`]) or from a [`CommandNameRegistry`] keyed by the
/// executor's concrete type ([`SelfWired::from_registry`]).
pub struct SelfWired<E> {
    name: NameSource,
    executor: Arc<E>,
}

impl<E: SelfWiringExecutor + 'static> SelfWired<E> {
    /// Wrap `executor` under an explicitly supplied command name
    pub fn named<S: Into<String>>(name: S, executor: Arc<E>) -> Self {
        Self {
            name: NameSource::Explicit(name.into()),
            executor,
        }
    }

    /// Wrap `executor`, resolving its command name from `registry`
    pub fn from_registry(registry: Arc<CommandNameRegistry>, executor: Arc<E>) -> Self {
        Self {
            name: NameSource::Registry(registry),
            executor,
        }
    }

    /// The wrapped executor
    pub fn executor(&self) -> &Arc<E> {
        &self.executor
    }
}

impl<E: SelfWiringExecutor + 'static> CommandConfigurator for SelfWired<E> {
    fn command_name(&self) -> Result<String> {
        match &self.name {
            NameSource::Explicit(name) => Ok(name.clone()),
            NameSource::Registry(registry) => registry.name_of::<E>().map(str::to_owned),
        }
    }

    fn configure_command(&self, command: &mut dyn CommandHandle) -> Result<()> {
        // Executor slot first; alter_command must see a wired command.
        command.set_executor(Arc::clone(&self.executor) as Arc<dyn CommandExecutor>);
        self.executor.alter_command(command)
    }
}
