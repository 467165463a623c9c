//! plugkit - wire a game-server plugin's components into the host in one step
//!
//! A plugin declares which event listeners and command configurators it
//! ships by implementing [`PluginModule`]; building the module yields a
//! [`PluginContext`] whose [`PluginRegistrar`] performs all host
//! registration at load time.
//!
//! ```ignore
//! struct MyModule { plugin: Arc<MyPlugin> }
//!
//! impl PluginModule for MyModule {
//!     type Plugin = MyPlugin;
//!
//!     fn plugin(&self) -> Arc<MyPlugin> {
//!         Arc::clone(&self.plugin)
//!     }
//!
//!     fn configure_listeners(&self, listeners: &mut ListenerSetBuilder) {
//!         listeners.add(Arc::new(DeathMessageListener));
//!     }
//!
//!     fn configure_commands(&self, commands: &mut CommandSetBuilder) {
//!         commands.add(Arc::new(SelfWired::named("hello", Arc::new(HelloCommand))));
//!     }
//! }
//!
//! // In the plugin's load routine:
//! let context = build_plugin_context(&MyModule { plugin });
//! context.registrar().register_all(&mut host)?;
//! // DeathMessageListener is subscribed, and /hello is wired up.
//! ```
//!
//! The heavy lifting stays with the host runtime: it owns the event bus,
//! the command table, and the plugin instance itself. This crate only maps
//! assembled sets onto the host's registration calls, with blunt failure
//! semantics (first error is terminal, nothing is rolled back).

pub mod executor;
pub mod module;
pub mod names;
pub mod registrar;

// Domain layer - error taxonomy and host port contracts
pub use plugkit_domain::{Error, Result, error, ports};

pub use executor::{SelfWired, SelfWiringExecutor};
pub use module::{
    BindingsBuilder, CommandSetBuilder, ListenerSetBuilder, PluginContext, PluginModule,
    build_plugin_context,
};
pub use names::{CommandNameRegistry, ConfigureCommand, RegistryNamed};
pub use registrar::PluginRegistrar;
