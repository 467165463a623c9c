//! Tests for self-wiring executor descriptors
//!
//! The hard contract under test: `configure_command` installs the wrapped
//! executor first, then runs `alter_command` exactly once, even when the
//! extension point is the default no-op.

use std::sync::{Arc, Mutex};

use plugkit::ports::{CommandConfigurator, CommandExecutor, CommandHandle, CommandInvocation};
use plugkit::{CommandNameRegistry, Error, Result, SelfWired, SelfWiringExecutor};

use crate::support::TestCommand;

/// Records, for every `alter_command` call, whether the executor slot was
/// already populated at that point.
struct ProbeExecutor {
    alter_saw_executor: Mutex<Vec<bool>>,
}

impl ProbeExecutor {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            alter_saw_executor: Mutex::new(Vec::new()),
        })
    }
}

impl CommandExecutor for ProbeExecutor {
    fn execute(&self, _invocation: &CommandInvocation) -> bool {
        true
    }
}

impl SelfWiringExecutor for ProbeExecutor {
    fn alter_command(&self, command: &mut dyn CommandHandle) -> Result<()> {
        self.alter_saw_executor
            .lock()
            .unwrap()
            .push(command.executor().is_some());
        command.set_description("altered");
        Ok(())
    }
}

/// An executor that keeps the default no-op `alter_command`.
struct PlainExecutor;

impl CommandExecutor for PlainExecutor {
    fn execute(&self, _invocation: &CommandInvocation) -> bool {
        false
    }
}

impl SelfWiringExecutor for PlainExecutor {}

#[test]
fn configure_command_sets_executor_to_the_wrapped_instance() {
    let probe = ProbeExecutor::new();
    let wired = SelfWired::named("cats_are_good", Arc::clone(&probe));
    let mut command = TestCommand::new("cats_are_good");

    wired.configure_command(&mut command).unwrap();

    let installed = command.executor().expect("executor slot should be set");
    let expected: Arc<dyn CommandExecutor> = Arc::clone(&probe) as Arc<dyn CommandExecutor>;
    assert!(
        Arc::ptr_eq(&installed, &expected),
        "the wrapped executor itself should be installed"
    );
}

#[test]
fn alter_command_runs_exactly_once_after_the_executor_is_set() {
    let probe = ProbeExecutor::new();
    let wired = SelfWired::named("cats_are_really_good", Arc::clone(&probe));
    let mut command = TestCommand::new("cats_are_really_good");

    wired.configure_command(&mut command).unwrap();

    let calls = probe.alter_saw_executor.lock().unwrap().clone();
    assert_eq!(calls.len(), 1, "alter_command should run exactly once");
    assert!(calls[0], "the executor slot must be set before alter_command");
    assert_eq!(command.description(), "altered");
}

#[test]
fn default_alter_command_is_a_noop_and_configuration_still_succeeds() {
    let wired = SelfWired::named("plain", Arc::new(PlainExecutor));
    let mut command = TestCommand::new("plain");

    wired.configure_command(&mut command).unwrap();

    assert!(command.executor().is_some());
    assert_eq!(command.description(), "", "the default alter changes nothing");
}

#[test]
fn installed_executor_handles_invocations() {
    let wired = SelfWired::named("cats_are_good", ProbeExecutor::new());
    let mut command = TestCommand::new("cats_are_good");
    wired.configure_command(&mut command).unwrap();

    let invocation = CommandInvocation::new("console", "cats_are_good").with_args(["now"]);
    let handled = command.executor().unwrap().execute(&invocation);

    assert!(handled);
}

#[test]
fn named_constructor_supplies_the_explicit_name() {
    let wired = SelfWired::named("hello", Arc::new(PlainExecutor));

    assert_eq!(wired.command_name().unwrap(), "hello");
}

#[test]
fn from_registry_resolves_the_name_by_executor_type() {
    let registry = Arc::new(CommandNameRegistry::new().with_command::<PlainExecutor>("hello"));
    let wired = SelfWired::from_registry(registry, Arc::new(PlainExecutor));

    assert_eq!(wired.command_name().unwrap(), "hello");
}

#[test]
fn from_registry_without_binding_is_unsupported_operation() {
    let registry = Arc::new(CommandNameRegistry::new());
    let wired = SelfWired::from_registry(registry, Arc::new(PlainExecutor));

    let err = wired.command_name().unwrap_err();

    assert!(matches!(err, Error::UnsupportedOperation { .. }));
    assert!(
        err.to_string().contains("PlainExecutor"),
        "error should name the executor type: {err}"
    );
}
