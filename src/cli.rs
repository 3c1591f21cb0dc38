// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `cellrun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cellrun",
    version,
    about = "Run the shell directives embedded in a code cell's source.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the cell source file, or `-` to read from stdin.
    #[arg(value_name = "SOURCE", default_value = "-")]
    pub source: String,

    /// Path to the config file (TOML).
    ///
    /// Default: `Cellrun.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// List the extracted directives without running anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Emit extra `[debug]` diagnostic lines while running.
    ///
    /// Equivalent to `debug = true` in the config or `CELLRUN_DEBUG` in the
    /// environment.
    #[arg(long)]
    pub debug: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CELLRUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
