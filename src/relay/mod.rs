// src/relay/mod.rs

//! Live forwarding of process output.
//!
//! Each spawned process exposes two byte channels (stdout and stderr). A
//! relay drains one channel to end-of-stream, decoding each chunk and
//! handing it to the [`Sink`] tagged with its [`Stream`]. Two relays run
//! concurrently per process so interleaved output is surfaced as it is
//! produced rather than buffered until exit.

pub mod sink;

use std::fmt;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tracing::{debug, warn};

pub use sink::{BufferSink, ConsoleSink};

/// Tag for the two output channels a sink can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    /// Wire name of the channel ("stdout" / "stderr").
    pub fn as_str(self) -> &'static str {
        match self {
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destination for streamed text, shared by the relays and the
/// orchestrator's diagnostics.
///
/// `write` must not add its own terminator: relayed chunks carry their own
/// line breaks and must pass through verbatim. All event-loop writers are
/// serialized naturally (relays and orchestrator run on the same scheduler),
/// so implementations need no locking for that path.
pub trait Sink {
    fn write(&self, dest: Stream, text: &str);

    /// Write `text` followed by a newline. Used for diagnostics, not for
    /// relayed output.
    fn write_line(&self, dest: Stream, text: &str) {
        self.write(dest, text);
        self.write(dest, "\n");
    }
}

/// Drain `reader` to end-of-stream, forwarding each decoded chunk to `sink`
/// tagged with `dest`.
///
/// Chunks are delimited by `\n` with the delimiter retained, so the sink
/// receives exactly the bytes the process wrote (a final chunk without a
/// trailing newline is forwarded as-is). Invalid UTF-8 is replaced rather
/// than dropped, so malformed output is still visible. Runs to completion
/// when the channel closes; read errors end the relay early with a warning.
pub async fn relay_stream<R, S>(dest: Stream, reader: R, sink: &S)
where
    R: AsyncRead + Unpin,
    S: Sink + ?Sized,
{
    let mut reader = BufReader::new(reader);
    let mut chunk = Vec::new();

    loop {
        chunk.clear();
        match reader.read_until(b'\n', &mut chunk).await {
            Ok(0) => break,
            Ok(_) => sink.write(dest, &String::from_utf8_lossy(&chunk)),
            Err(err) => {
                warn!(stream = %dest, error = %err, "relay read failed; stopping");
                break;
            }
        }
    }

    debug!(stream = %dest, "relay drained");
}
