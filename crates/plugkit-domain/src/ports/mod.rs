//! Port traits for the external plugin host
//!
//! These are the contracts this library *requires* from collaborators, not
//! services it provides: the host owns the event bus and the command table,
//! and hands out the plugin instance. plugkit only writes into them during
//! startup registration.

pub mod command;
pub mod host;

pub use command::{
    CommandConfigurator, CommandExecutor, CommandFinder, CommandHandle, CommandInvocation,
};
pub use host::{EventListener, HostCommandFinder, Plugin, PluginHost};
