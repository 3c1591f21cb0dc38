// src/input.rs

//! Forwarding interactive input to a running process.
//!
//! Reading a line from the user genuinely blocks a thread, so it cannot run
//! on the event loop that drives output streaming. The bridge therefore
//! lives on its own OS thread, and a single-slot trigger is the one
//! synchronization primitive crossing that boundary: the event-loop side
//! fires a request when a process signals that it wants input, the bridge
//! side blocks until a request arrives, reads one line, and writes it to the
//! process stdin pipe which it owns directly.

use std::io::Write;
use std::thread;

use anyhow::{Context, Result, anyhow};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Source of one line of user input, given a prompt. The host supplies this
/// (a frontend input request, or plain terminal input in the driver).
pub type LineSource = Box<dyn FnMut(&str) -> std::io::Result<String> + Send>;

/// Fire half of the trigger. Held by the host/event-loop side; dropping it
/// ends the bridge loop.
#[derive(Debug, Clone)]
pub struct Trigger {
    tx: mpsc::Sender<String>,
}

/// Wait half of the trigger. Held by the bridge thread.
#[derive(Debug)]
pub struct TriggerWaiter {
    rx: mpsc::Receiver<String>,
}

/// Create a connected trigger pair.
///
/// The slot holds exactly one pending request: at most one `fire` may be
/// outstanding until the bridge consumes it.
pub fn trigger_pair() -> (Trigger, TriggerWaiter) {
    let (tx, rx) = mpsc::channel(1);
    (Trigger { tx }, TriggerWaiter { rx })
}

impl Trigger {
    /// Deliver one input request and wake the bridge.
    ///
    /// Errors if the slot is already occupied (a request is pending that the
    /// bridge has not consumed) or the bridge is gone.
    pub fn fire(&self, request: impl Into<String>) -> Result<()> {
        self.tx
            .try_send(request.into())
            .map_err(|err| anyhow!("input trigger rejected request: {err}"))
    }
}

impl TriggerWaiter {
    /// Block until a request is delivered and return it, or `None` once all
    /// fire halves are dropped.
    ///
    /// Blocks the calling thread; must not be used on the event loop.
    pub fn wait(&mut self) -> Option<String> {
        self.rx.blocking_recv()
    }
}

/// Spawn the bridge thread.
///
/// The loop runs forever: block on the trigger, read one line via `source`
/// with `prompt`, append a newline (the line source does not include one),
/// and write the encoded bytes to `stdin`. It exits only when the fire half
/// is dropped (the enclosing session ended) or the read/pipe fails.
pub fn spawn_bridge<W>(
    mut waiter: TriggerWaiter,
    mut stdin: W,
    mut source: LineSource,
    prompt: String,
) -> Result<thread::JoinHandle<()>>
where
    W: Write + Send + 'static,
{
    thread::Builder::new()
        .name("cellrun-input".to_string())
        .spawn(move || {
            while let Some(request) = waiter.wait() {
                debug!(request = %request, "input requested");

                let line = match source(&prompt) {
                    Ok(line) => line,
                    Err(err) => {
                        warn!(error = %err, "reading user input failed; bridge stopping");
                        break;
                    }
                };

                let data = format!("{line}\n");
                if let Err(err) = stdin.write_all(data.as_bytes()).and_then(|()| stdin.flush()) {
                    warn!(error = %err, "writing to process stdin failed; bridge stopping");
                    break;
                }
            }
            info!("input bridge finished");
        })
        .context("spawning input bridge thread")
}
