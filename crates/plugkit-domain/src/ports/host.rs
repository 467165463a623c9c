//! Plugin Host Port
//!
//! The host runtime owns the event bus, the command table, and the plugin
//! instance itself. plugkit receives the plugin handle and forwards it; it
//! never constructs one.

use std::any::Any;
use std::sync::Arc;

use crate::error::Result;
use crate::ports::command::{CommandFinder, CommandHandle};

/// The host-owned plugin instance.
///
/// Created by the host runtime at load time. plugkit forwards it to
/// subscription calls so the host can attribute registrations to their
/// owning plugin, and binds it by concrete type during module assembly.
pub trait Plugin: Any + Send + Sync {
    /// The plugin's name, for host bookkeeping and diagnostics
    fn name(&self) -> &str;
}

/// An opaque object the host's event subsystem notifies on event occurrence.
///
/// plugkit only carries listeners from the assembled set to the host's
/// subscription call; it never inspects or invokes them.
pub trait EventListener: Send + Sync {}

/// The host-side registration surface a plugin's load routine works against.
pub trait PluginHost {
    /// The plugin instance these registrations belong to
    fn plugin(&self) -> Arc<dyn Plugin>;

    /// Subscribe `listener` to the host event bus on behalf of `owner`.
    ///
    /// Host failures surface through the returned `Result` and are passed
    /// through unmodified by the wiring layer.
    fn subscribe_listener(
        &mut self,
        listener: Arc<dyn EventListener>,
        owner: Arc<dyn Plugin>,
    ) -> Result<()>;

    /// Look up a command in the host command table; `None` when absent
    fn find_command(&mut self, name: &str) -> Option<&mut dyn CommandHandle>;
}

/// Adapts a host's native command lookup into a [`CommandFinder`].
///
/// This is what lets the registrar's convenience paths take a plugin host
/// where the generic command-registration path wants a finder.
pub struct HostCommandFinder<'h> {
    host: &'h mut dyn PluginHost,
}

impl<'h> HostCommandFinder<'h> {
    /// Wrap the given host
    pub fn new(host: &'h mut dyn PluginHost) -> Self {
        Self { host }
    }
}

impl CommandFinder for HostCommandFinder<'_> {
    fn find(&mut self, name: &str) -> Option<&mut dyn CommandHandle> {
        self.host.find_command(name)
    }
}
