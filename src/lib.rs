// src/lib.rs

pub mod cli;
pub mod config;
pub mod directive;
pub mod exec;
pub mod input;
pub mod logging;
pub mod relay;
pub mod session;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::CliArgs;
use crate::relay::ConsoleSink;
use crate::session::Session;

/// High-level entry point used by `main.rs`.
///
/// This is the standalone driver: read a cell source from a file (or stdin),
/// and run the directives embedded in it against the console. Inside a real
/// interactive host the same pipeline hangs off
/// [`Session::finish_execute`] instead, gated on the host's execution
/// result.
pub async fn run(args: CliArgs) -> Result<()> {
    let mut config = config::load(args.config.as_deref().map(Path::new))?;
    if args.debug {
        config.debug = true;
    }

    let source = read_source(&args.source)?;

    if args.dry_run {
        print_dry_run(&source);
        return Ok(());
    }

    info!(source = %args.source, "running cell directives");
    let session = Session::new(ConsoleSink, config);
    session.run_directives(&source).await;

    Ok(())
}

/// Read the cell source from a path, or from stdin when the path is `-`.
fn read_source(path: &str) -> Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("reading cell source from stdin")?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading cell source from {path:?}"))
    }
}

/// Simple dry-run output: print the directives that would run, in order.
fn print_dry_run(source: &str) {
    let directives: Vec<_> = directive::extract(source).collect();
    println!("cellrun dry-run: {} directive(s)", directives.len());
    for d in &directives {
        println!("  $> {d}");
    }
}
