// src/config/mod.rs

//! Session configuration.
//!
//! Read once at session start and never re-read:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk and apply env overrides (`loader.rs`).

pub mod loader;
pub mod model;

pub use loader::{default_config_path, load, load_from_path};
pub use model::{ConfigFile, SessionConfig};
