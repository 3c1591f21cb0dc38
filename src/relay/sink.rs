// src/relay/sink.rs

use std::io::Write;
use std::sync::Mutex;

use super::{Sink, Stream};

/// Sink for the standalone driver: forwards each channel to the
/// corresponding process-wide stream, flushing per write so output appears
/// as soon as the child produces it.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn write(&self, dest: Stream, text: &str) {
        // Ignore write errors here: if our own stdout/stderr is gone there
        // is nowhere left to report to.
        match dest {
            Stream::Stdout => {
                let mut out = std::io::stdout().lock();
                let _ = out.write_all(text.as_bytes());
                let _ = out.flush();
            }
            Stream::Stderr => {
                let mut err = std::io::stderr().lock();
                let _ = err.write_all(text.as_bytes());
                let _ = err.flush();
            }
        }
    }
}

/// Sink that gathers output in memory instead of streaming it anywhere.
///
/// Used for quiet probe commands where the caller wants the output (or just
/// the exit code) without showing the user anything, and by tests to assert
/// on exactly what was forwarded. The mutex is only there so the buffer can
/// be inspected from outside the event loop.
#[derive(Debug, Default)]
pub struct BufferSink {
    entries: Mutex<Vec<(Stream, String)>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes so far, in arrival order.
    pub fn entries(&self) -> Vec<(Stream, String)> {
        self.entries.lock().expect("buffer sink poisoned").clone()
    }

    /// Writes for one channel only, in arrival order.
    pub fn channel(&self, dest: Stream) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(d, _)| *d == dest)
            .map(|(_, text)| text)
            .collect()
    }

    /// Concatenated text of one channel.
    pub fn text(&self, dest: Stream) -> String {
        self.channel(dest).concat()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().expect("buffer sink poisoned").is_empty()
    }
}

impl Sink for BufferSink {
    fn write(&self, dest: Stream, text: &str) {
        self.entries
            .lock()
            .expect("buffer sink poisoned")
            .push((dest, text.to_string()));
    }
}
