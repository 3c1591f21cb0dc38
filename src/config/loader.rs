// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::model::{ConfigFile, SessionConfig};

/// Load a configuration file from a given path.
///
/// This only performs TOML deserialization; env overrides are applied by
/// [`load`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading config file at {path:?}"))?;

    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML config from {path:?}"))?;

    Ok(config)
}

/// Resolve the effective session configuration.
///
/// - An explicit `path` must exist and parse.
/// - With no explicit path, [`default_config_path`] is read if present,
///   otherwise everything falls back to defaults.
/// - `CELLRUN_DEBUG` (any value) and `CELLRUN_SHELL` override the file.
pub fn load(path: Option<&Path>) -> Result<SessionConfig> {
    let file = match path {
        Some(path) => load_from_path(path)?,
        None => {
            let default = default_config_path();
            if default.is_file() {
                load_from_path(&default)?
            } else {
                debug!("no config file found; using defaults");
                ConfigFile::default()
            }
        }
    };

    let mut session = file.session;
    if std::env::var_os("CELLRUN_DEBUG").is_some() {
        session.debug = true;
    }
    if let Ok(shell) = std::env::var("CELLRUN_SHELL") {
        if !shell.trim().is_empty() {
            session.shell = Some(shell);
        }
    }

    Ok(session)
}

/// Default config location: `Cellrun.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Cellrun.toml")
}
