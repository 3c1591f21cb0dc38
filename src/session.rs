// src/session.rs

//! The post-execution seam between the host and the directive pipeline.
//!
//! The host runs the cell itself and reports an [`ExecuteOutcome`]; this
//! module decides whether the cell's embedded directives run afterwards.
//! Whatever the directives do, the outcome handed back to the host is the
//! one the host computed: a failing directive is visible only as a stderr
//! line in the cell's output, never as a change to the cell's status.

use anyhow::Error;
use serde::Serialize;
use tracing::debug;

use crate::config::SessionConfig;
use crate::directive;
use crate::exec::{Orchestrator, OrchestratorOptions};
use crate::relay::{Sink, Stream};

/// Result of executing a code cell, in the wire shape the host protocol
/// uses for its reply (`status` of `"ok"` or `"error"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ExecuteOutcome {
    Ok {
        execution_count: u64,
    },
    Error {
        ename: String,
        evalue: String,
        traceback: Vec<String>,
    },
}

impl ExecuteOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, ExecuteOutcome::Ok { .. })
    }

    /// Build an error outcome from a caught error, with the context chain as
    /// the traceback.
    pub fn from_error(ename: impl Into<String>, err: &Error) -> Self {
        ExecuteOutcome::Error {
            ename: ename.into(),
            evalue: err.to_string(),
            traceback: err.chain().skip(1).map(|cause| cause.to_string()).collect(),
        }
    }
}

/// One interactive session's view of the directive pipeline.
///
/// Owns the sink and the configuration read at session start; cells pass
/// through [`finish_execute`](Self::finish_execute) one at a time. Nothing
/// is carried over between cells: each call extracts a fresh directive
/// sequence and runs it with fresh process state.
pub struct Session<S: Sink> {
    sink: S,
    config: SessionConfig,
}

impl<S: Sink> Session<S> {
    pub fn new(sink: S, config: SessionConfig) -> Self {
        Self { sink, config }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run the cell's directives iff the cell itself executed ok, then hand
    /// the outcome back unchanged.
    pub async fn finish_execute(&self, source: &str, outcome: ExecuteOutcome) -> ExecuteOutcome {
        if outcome.is_ok() {
            self.debug_msg("cell ok, scanning for directives");
            self.run_directives(source).await;
        } else {
            debug!("cell execution not ok; skipping directives");
        }
        outcome
    }

    /// Run every directive embedded in `source`, in order, aborting on the
    /// first failure.
    pub async fn run_directives(&self, source: &str) {
        let options = OrchestratorOptions {
            shell: self.config.shell.clone(),
            debug: self.config.debug,
        };
        Orchestrator::new(&self.sink, options)
            .run(directive::extract(source))
            .await;
    }

    /// Extra diagnostic line on the stderr channel, only when the session
    /// debug flag is set.
    pub fn debug_msg(&self, text: &str) {
        if self.config.debug {
            self.sink.write_line(Stream::Stderr, &format!("[debug] {text}"));
        }
    }
}
