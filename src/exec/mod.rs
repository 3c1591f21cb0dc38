// src/exec/mod.rs

//! Directive execution layer.
//!
//! This module runs the commands extracted from a cell, using
//! `tokio::process::Command`, and streams their output through the relay
//! layer.
//!
//! - [`command`] runs a single command: spawn through the shell, then drive
//!   both output relays and process exit together.
//! - [`orchestrator`] owns the sequential loop over a cell's directives and
//!   the abort-on-failure policy.

pub mod command;
pub mod orchestrator;

pub use command::{DirectiveCommand, StdinForwarding};
pub use orchestrator::{DirectiveOutcome, Orchestrator, OrchestratorOptions};
