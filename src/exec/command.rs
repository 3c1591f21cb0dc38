// src/exec/command.rs

use std::io;
use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::{debug, info};

use crate::input::{self, LineSource, TriggerWaiter};
use crate::relay::{Sink, Stream, relay_stream};

/// Request to forward interactive input to a spawned process.
///
/// The caller keeps the fire half of the trigger and fires it whenever the
/// process (or the host frontend on its behalf) signals that input is
/// needed; the bridge thread then reads one line via `source` and writes it
/// to the process stdin.
pub struct StdinForwarding {
    pub waiter: TriggerWaiter,
    pub source: LineSource,
    pub prompt: String,
}

/// One shell command, run with its output streamed live.
///
/// The spawned process is exclusively owned by this step: `run` does not
/// return until both output channels are drained and the process is reaped,
/// so trailing output is never lost and at most one process is active per
/// orchestrator at any time.
pub struct DirectiveCommand {
    command: String,
    shell: Option<String>,
}

impl DirectiveCommand {
    /// `shell` overrides the interpreter; `None` picks the platform default.
    pub fn new(command: impl Into<String>, shell: Option<String>) -> Self {
        Self {
            command: command.into(),
            shell,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Run the command, streaming stdout and stderr to `sink`, and return
    /// the exit code (`-1` if the process was terminated by a signal).
    pub async fn run<S>(&self, sink: &S) -> Result<i32>
    where
        S: Sink + ?Sized,
    {
        self.run_with_input(sink, None).await
    }

    /// Like [`run`](Self::run), but optionally hook the process stdin up to
    /// the input-forwarding bridge.
    pub async fn run_with_input<S>(&self, sink: &S, stdin: Option<StdinForwarding>) -> Result<i32>
    where
        S: Sink + ?Sized,
    {
        info!(cmd = %self.command, "starting directive process");

        let mut cmd = self.shell_command();
        cmd.stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        // The bridge thread writes with blocking I/O, so the process stdin
        // is wired up as a plain OS pipe rather than a runtime-registered
        // handle. The thread outlives this step and stops when the caller
        // drops the trigger.
        let mut bridge_writer = None;
        if stdin.is_some() {
            let (reader, writer) = io::pipe().context("creating stdin pipe")?;
            cmd.stdin(Stdio::from(reader));
            bridge_writer = Some(writer);
        }

        let mut child = cmd
            .spawn()
            .with_context(|| format!("spawning shell for command '{}'", self.command))?;

        if let (Some(forwarding), Some(writer)) = (stdin, bridge_writer) {
            input::spawn_bridge(forwarding.waiter, writer, forwarding.source, forwarding.prompt)?;
        }

        let stdout = child
            .stdout
            .take()
            .context("stdout pipe missing on spawned process")?;
        let stderr = child
            .stderr
            .take()
            .context("stderr pipe missing on spawned process")?;

        // Both relays and process exit are driven together to completion:
        // the exit code is not read until the channels are drained.
        let (status, (), ()) = tokio::join!(
            child.wait(),
            relay_stream(Stream::Stdout, stdout, sink),
            relay_stream(Stream::Stderr, stderr, sink),
        );

        let status =
            status.with_context(|| format!("waiting for command '{}'", self.command))?;
        let code = status.code().unwrap_or(-1);

        debug!(cmd = %self.command, exit_code = code, "directive process exited");
        Ok(code)
    }

    /// Build a shell invocation appropriate for the platform, honoring the
    /// configured interpreter override.
    fn shell_command(&self) -> Command {
        match self.shell.as_deref() {
            Some(shell) => {
                let mut c = Command::new(shell);
                c.arg("-c").arg(&self.command);
                c
            }
            None if cfg!(windows) => {
                let mut c = Command::new("cmd");
                c.arg("/C").arg(&self.command);
                c
            }
            None => {
                let mut c = Command::new("sh");
                c.arg("-c").arg(&self.command);
                c
            }
        }
    }
}
