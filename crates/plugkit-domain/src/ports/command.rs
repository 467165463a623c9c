//! Command Port Contracts
//!
//! A command lives in the host's command table and is located by name.
//! plugkit never creates commands; it configures handles the host already
//! owns, through the [`CommandConfigurator`] contract.

use std::sync::Arc;

use crate::error::Result;

/// A single command invocation as the host delivers it to an executor.
#[derive(Debug, Clone)]
pub struct CommandInvocation {
    /// Who issued the command (player name, console, ...)
    pub sender: String,
    /// The label the command was invoked under (may be an alias)
    pub label: String,
    /// Arguments following the label
    pub args: Vec<String>,
}

impl CommandInvocation {
    /// Create an invocation with the given sender and label and no arguments
    pub fn new<S: Into<String>, L: Into<String>>(sender: S, label: L) -> Self {
        Self {
            sender: sender.into(),
            label: label.into(),
            args: Vec::new(),
        }
    }

    /// Set the arguments
    pub fn with_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }
}

/// Handles execution of a command once the host dispatches it.
///
/// Returning `false` signals the host that the invocation was not handled
/// (hosts typically answer with a usage message).
pub trait CommandExecutor: Send + Sync {
    /// Execute the command for the given invocation
    fn execute(&self, invocation: &CommandInvocation) -> bool;
}

/// A host-owned command object, looked up by name in the host command table.
///
/// The executor slot and the metadata slots are the only surface plugkit
/// touches; everything else about the command stays the host's business.
pub trait CommandHandle {
    /// The name the command is registered under
    fn name(&self) -> &str;

    /// Set the executor invoked when this command runs
    fn set_executor(&mut self, executor: Arc<dyn CommandExecutor>);

    /// The currently installed executor, if any
    fn executor(&self) -> Option<Arc<dyn CommandExecutor>>;

    /// Set the human-readable description shown in help output
    fn set_description(&mut self, description: &str);

    /// The current description
    fn description(&self) -> &str;
}

/// Configures a command found by the name this contract provides.
///
/// The name must resolve before [`configure_command`] is invoked; a
/// configurator whose name cannot be resolved is unusable and aborts the
/// whole registration batch.
///
/// [`configure_command`]: CommandConfigurator::configure_command
pub trait CommandConfigurator: Send + Sync {
    /// The stable name used to locate the command in the host table.
    ///
    /// Pure: no side effects, same answer on every call. Only adapters that
    /// delegate naming to a registry can fail here, with
    /// [`Error::UnsupportedOperation`](crate::Error::UnsupportedOperation)
    /// naming the offending type.
    fn command_name(&self) -> Result<String>;

    /// Apply this configurator's setup to the located command handle.
    ///
    /// The handle is always present: an absent lookup aborts registration
    /// before this method is reached.
    fn configure_command(&self, command: &mut dyn CommandHandle) -> Result<()>;
}

/// Finds a command by name.
///
/// [`HostCommandFinder`](crate::ports::HostCommandFinder) adapts a plugin
/// host's native lookup into this contract, so a host can be handed to
/// command registration directly.
pub trait CommandFinder {
    /// Find a command by its name; `None` when the table has no such entry
    fn find(&mut self, name: &str) -> Option<&mut dyn CommandHandle>;
}
