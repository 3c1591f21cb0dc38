// src/exec/orchestrator.rs

use tracing::{debug, info, warn};

use crate::directive::Directive;
use crate::exec::command::DirectiveCommand;
use crate::relay::{Sink, Stream};

/// Result of one directive step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveOutcome {
    Completed,
    Failed(i32), // exit code
}

/// Options that influence how directives are run.
#[derive(Debug, Clone, Default)]
pub struct OrchestratorOptions {
    /// Override for the shell interpreter; `None` picks the platform default.
    pub shell: Option<String>,

    /// Emit extra `[debug]` lines to the stderr sink while running.
    pub debug: bool,
}

/// Runs a cell's directives in order, one process at a time.
///
/// Each step spawns the command, drives its output relays together with
/// process exit, and then decides whether to continue. The first failure
/// (nonzero exit, or a shell that could not be spawned) writes a diagnostic
/// to the stderr sink and stops the loop; remaining directives never run.
/// Directive failure is reported only through the sink; the enclosing
/// cell's execution result is not this loop's concern.
pub struct Orchestrator<'s, S: Sink + ?Sized> {
    sink: &'s S,
    options: OrchestratorOptions,
}

impl<'s, S: Sink + ?Sized> Orchestrator<'s, S> {
    pub fn new(sink: &'s S, options: OrchestratorOptions) -> Self {
        Self { sink, options }
    }

    /// Run every directive in order until one fails or none remain.
    pub async fn run(&self, directives: impl IntoIterator<Item = Directive>) {
        for directive in directives {
            match self.run_one(&directive).await {
                DirectiveOutcome::Completed => continue,
                DirectiveOutcome::Failed(code) => {
                    warn!(cmd = %directive, exit_code = code, "directive failed; aborting");
                    break;
                }
            }
        }
    }

    /// Run a single directive and report its outcome, writing the failure
    /// diagnostic if it did not complete.
    async fn run_one(&self, directive: &Directive) -> DirectiveOutcome {
        info!(cmd = %directive, "running directive");
        self.debug_msg(&format!("$> {directive}"));

        let command = DirectiveCommand::new(directive.command(), self.options.shell.clone());
        match command.run(self.sink).await {
            Ok(0) => DirectiveOutcome::Completed,
            Ok(code) => {
                self.sink.write_line(
                    Stream::Stderr,
                    &format!("command failed with exit code {code}:\n  $> {directive}"),
                );
                DirectiveOutcome::Failed(code)
            }
            Err(err) => {
                // Spawn failures surface exactly like a nonzero exit: one
                // diagnostic naming the command, then the loop stops.
                debug!(cmd = %directive, error = %err, "directive could not be run");
                self.sink.write_line(
                    Stream::Stderr,
                    &format!("command could not be started:\n  $> {directive}\n  {err:#}"),
                );
                DirectiveOutcome::Failed(-1)
            }
        }
    }

    fn debug_msg(&self, text: &str) {
        if self.options.debug {
            self.sink.write_line(Stream::Stderr, &format!("[debug] {text}"));
        }
    }
}
